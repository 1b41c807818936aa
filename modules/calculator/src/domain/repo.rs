use async_trait::async_trait;

use crate::domain::error::StorageError;
use crate::domain::model::CalculationRecord;

/// Persistence gateway for calculation records.
///
/// Append-only: insert is the only operation this system ever needs. The
/// concrete implementation is injected into the service at startup, which
/// keeps the domain testable with in-memory doubles.
#[async_trait]
pub trait CalculationsRepository: Send + Sync {
    /// Store one record.
    ///
    /// # Errors
    /// `StorageError` when the backing store is unreachable or rejects the
    /// write. Callers decide whether that is fatal; the calculation service
    /// logs and swallows it.
    async fn insert(&self, record: CalculationRecord) -> Result<(), StorageError>;
}
