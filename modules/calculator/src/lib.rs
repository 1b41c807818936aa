//! Calculator module: operand validation, arithmetic dispatch, and an
//! append-only audit trail of every computation served.
//!
//! ## Layering
//!
//! - `api::rest` - transport DTOs, handlers and routing (axum)
//! - `domain` - operations, dispatcher, service and repository contract
//! - `infra::storage` - SeaORM repository and migrations
//!
//! Dependencies point one way: API -> Domain -> Infra contracts. The domain
//! never imports transport types, and the API layer never touches storage
//! directly.

pub mod api;
pub mod domain;
pub mod infra;
