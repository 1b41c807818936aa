//! REST transport: DTOs, error mapping, handlers and routing.

pub mod dto;
pub mod error;
pub mod handlers;
pub mod routes;

pub use error::{ApiError, ApiResult};
pub use routes::{router, ApiDoc};
