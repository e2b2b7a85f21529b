//! Application services.
//!
//! Services sit between the route layer and the repositories.

pub mod service;

pub use service::TodoService;
