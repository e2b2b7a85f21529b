//! Browser UI served at `/`.

use axum::response::Html;

const INDEX_HTML: &str = include_str!("../../assets/index.html");

/// Serves the single-page todo board.
pub async fn index() -> Html<&'static str> {
    Html(INDEX_HTML)
}
