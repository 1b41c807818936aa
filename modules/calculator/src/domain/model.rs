use time::OffsetDateTime;
use uuid::Uuid;

use crate::domain::dispatch::Evaluation;

/// One performed computation, as handed to the persistence gateway.
///
/// Immutable once created; the system never updates, deletes or reads these
/// back. `n2` is `None` for unary operations.
#[derive(Debug, Clone, PartialEq)]
pub struct CalculationRecord {
    pub id: Uuid,
    pub operation: String,
    pub n1: f64,
    pub n2: Option<f64>,
    pub result: f64,
    pub created_at: OffsetDateTime,
}

impl CalculationRecord {
    /// Stamp a fresh record for a completed evaluation. `id` and
    /// `created_at` are assigned here, exactly once.
    #[must_use]
    pub fn new(eval: &Evaluation) -> Self {
        Self {
            id: Uuid::now_v7(),
            operation: eval.operation.name().to_owned(),
            n1: eval.n1,
            n2: eval.n2,
            result: eval.result,
            created_at: OffsetDateTime::now_utc(),
        }
    }
}
