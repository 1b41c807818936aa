use async_trait::async_trait;
use sea_orm::{ActiveModelTrait, DatabaseConnection, DbErr, Set};

use crate::domain::error::StorageError;
use crate::domain::model::CalculationRecord;
use crate::domain::repo::CalculationsRepository;
use crate::infra::storage::entity::ActiveModel;

/// ORM-based implementation of the `CalculationsRepository` trait.
#[derive(Clone)]
pub struct OrmCalculationsRepository {
    db: DatabaseConnection,
}

impl OrmCalculationsRepository {
    #[must_use]
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

fn db_err(e: DbErr) -> StorageError {
    StorageError::database(e.to_string())
}

#[async_trait]
impl CalculationsRepository for OrmCalculationsRepository {
    async fn insert(&self, record: CalculationRecord) -> Result<(), StorageError> {
        let m = ActiveModel {
            id: Set(record.id),
            operation: Set(record.operation),
            n1: Set(record.n1),
            n2: Set(record.n2),
            result: Set(record.result),
            created_at: Set(record.created_at),
        };

        let _ = m.insert(&self.db).await.map_err(db_err)?;
        Ok(())
    }
}
