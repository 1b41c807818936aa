//! Domain layer - arithmetic, dispatch rules and the calculation service.

pub mod dispatch;
pub mod error;
pub mod model;
pub mod ops;
pub mod repo;
pub mod service;

pub use dispatch::{dispatch, Arity, Evaluation, Operation};
pub use error::{CalcError, StorageError};
pub use model::CalculationRecord;
pub use repo::CalculationsRepository;
pub use service::Service;
