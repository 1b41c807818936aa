use std::sync::Arc;

use tracing::{error, info};

use crate::domain::dispatch::dispatch;
use crate::domain::error::CalcError;
use crate::domain::model::CalculationRecord;
use crate::domain::repo::CalculationsRepository;

/// Calculation service: dispatch, persist, log.
///
/// Stateless between requests; the repository handle is the only
/// collaborator and is shared across concurrent requests.
pub struct Service {
    repo: Arc<dyn CalculationsRepository>,
}

impl Service {
    #[must_use]
    pub fn new(repo: Arc<dyn CalculationsRepository>) -> Self {
        Self { repo }
    }

    /// Run one calculation end to end.
    ///
    /// On success the record is persisted and an info entry logged; a
    /// persistence failure is logged and swallowed, since the response
    /// already reflects a successfully computed result. On failure an error
    /// entry is logged and nothing is persisted. Single attempt, no retries.
    ///
    /// # Errors
    /// `CalcError` from validation or from the arithmetic itself.
    pub async fn calculate(
        &self,
        operation: Option<&str>,
        n1: Option<&str>,
        n2: Option<&str>,
    ) -> Result<f64, CalcError> {
        let eval = match dispatch(operation, n1, n2) {
            Ok(eval) => eval,
            Err(e) => {
                error!(
                    operation = operation.unwrap_or("<missing>"),
                    error = %e,
                    "calculation failed"
                );
                return Err(e);
            }
        };

        let record = CalculationRecord::new(&eval);
        if let Err(e) = self.repo.insert(record).await {
            error!(
                operation = eval.operation.name(),
                error = %e,
                "failed to persist calculation record"
            );
        }

        info!(
            operation = eval.operation.name(),
            n1 = eval.n1,
            n2 = ?eval.n2,
            result = eval.result,
            "calculation completed"
        );

        Ok(eval.result)
    }
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]

    use super::*;
    use crate::domain::error::StorageError;
    use async_trait::async_trait;
    use std::sync::Mutex;

    #[derive(Default)]
    struct RecordingRepo {
        records: Mutex<Vec<CalculationRecord>>,
    }

    #[async_trait]
    impl CalculationsRepository for RecordingRepo {
        async fn insert(&self, record: CalculationRecord) -> Result<(), StorageError> {
            self.records.lock().unwrap().push(record);
            Ok(())
        }
    }

    struct FailingRepo;

    #[async_trait]
    impl CalculationsRepository for FailingRepo {
        async fn insert(&self, _record: CalculationRecord) -> Result<(), StorageError> {
            Err(StorageError::database("connection lost"))
        }
    }

    #[tokio::test]
    async fn success_persists_exactly_one_record() {
        let repo = Arc::new(RecordingRepo::default());
        let svc = Service::new(repo.clone());

        let result = svc
            .calculate(Some("add"), Some("2"), Some("3"))
            .await
            .unwrap();
        assert_eq!(result, 5.0);

        let records = repo.records.lock().unwrap();
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].operation, "add");
        assert_eq!(records[0].n1, 2.0);
        assert_eq!(records[0].n2, Some(3.0));
        assert_eq!(records[0].result, 5.0);
    }

    #[tokio::test]
    async fn failure_persists_nothing() {
        let repo = Arc::new(RecordingRepo::default());
        let svc = Service::new(repo.clone());

        let err = svc
            .calculate(Some("divide"), Some("4"), Some("0"))
            .await
            .unwrap_err();
        assert_eq!(err, CalcError::DivideByZero);
        assert!(repo.records.lock().unwrap().is_empty());
    }

    #[tokio::test]
    async fn store_failure_does_not_change_the_result() {
        let svc = Service::new(Arc::new(FailingRepo));

        let result = svc
            .calculate(Some("multiply"), Some("6"), Some("7"))
            .await
            .unwrap();
        assert_eq!(result, 42.0);
    }

    #[tokio::test]
    async fn identical_calls_produce_independent_records() {
        let repo = Arc::new(RecordingRepo::default());
        let svc = Service::new(repo.clone());

        svc.calculate(Some("add"), Some("1"), Some("1"))
            .await
            .unwrap();
        svc.calculate(Some("add"), Some("1"), Some("1"))
            .await
            .unwrap();

        let records = repo.records.lock().unwrap();
        assert_eq!(records.len(), 2);
        assert_ne!(records[0].id, records[1].id);
        assert_eq!(records[0].result, records[1].result);
    }
}
