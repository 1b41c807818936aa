use sea_orm_migration::prelude::*;
use sea_orm_migration::sea_orm::ConnectionTrait;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        let backend = manager.get_database_backend();
        let conn = manager.get_connection();

        let sql = match backend {
            sea_orm::DatabaseBackend::Postgres => {
                r#"
CREATE TABLE IF NOT EXISTS calculations (
    id UUID PRIMARY KEY NOT NULL,
    operation VARCHAR(32) NOT NULL,
    n1 DOUBLE PRECISION NOT NULL,
    n2 DOUBLE PRECISION,
    result DOUBLE PRECISION NOT NULL,
    created_at TIMESTAMPTZ NOT NULL
);

CREATE INDEX IF NOT EXISTS idx_calculations_created_at ON calculations(created_at);
                "#
            }
            sea_orm::DatabaseBackend::MySql => {
                r#"
CREATE TABLE IF NOT EXISTS calculations (
    id VARCHAR(36) PRIMARY KEY NOT NULL,
    operation VARCHAR(32) NOT NULL,
    n1 DOUBLE NOT NULL,
    n2 DOUBLE,
    result DOUBLE NOT NULL,
    created_at TIMESTAMP NOT NULL,
    KEY idx_calculations_created_at (created_at)
);
                "#
            }
            sea_orm::DatabaseBackend::Sqlite => {
                r#"
CREATE TABLE IF NOT EXISTS calculations (
    id TEXT PRIMARY KEY NOT NULL,
    operation TEXT NOT NULL,
    n1 REAL NOT NULL,
    n2 REAL,
    result REAL NOT NULL,
    created_at TEXT NOT NULL
);

CREATE INDEX IF NOT EXISTS idx_calculations_created_at ON calculations(created_at);
                "#
            }
        };

        conn.execute_unprepared(sql).await?;
        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        let conn = manager.get_connection();
        let sql = "DROP TABLE IF EXISTS calculations;";
        conn.execute_unprepared(sql).await?;
        Ok(())
    }
}
