#![allow(clippy::unwrap_used, clippy::expect_used)]
#![allow(dead_code)] // support module; not every helper is used by every suite

//! Test support for calculator integration tests: an in-memory database
//! with migrations applied, the domain service wired to it, and the full
//! router.

use std::sync::Arc;

use axum::body::Body;
use axum::http::{Request, StatusCode};
use axum::Router;
use http_body_util::BodyExt as _;
use sea_orm::{Database, DatabaseConnection, EntityTrait};
use sea_orm_migration::MigratorTrait;
use tower::ServiceExt as _;

use calculator::api::rest::router;
use calculator::domain::Service;
use calculator::infra::storage::entity;
use calculator::infra::storage::migrations::Migrator;
use calculator::infra::storage::OrmCalculationsRepository;

pub struct TestContext {
    pub db: DatabaseConnection,
    pub service: Arc<Service>,
    pub router: Router,
}

impl TestContext {
    /// Fresh in-memory SQLite database with migrations applied, plus the
    /// service and router on top of it.
    pub async fn new() -> Self {
        let db = Database::connect("sqlite::memory:")
            .await
            .expect("Failed to connect to in-memory database");

        Migrator::up(&db, None)
            .await
            .expect("Failed to run migrations");

        let repo = Arc::new(OrmCalculationsRepository::new(db.clone()));
        let service = Arc::new(Service::new(repo));
        let router = router(service.clone());

        Self {
            db,
            service,
            router,
        }
    }

    /// Issue a GET request against the router and decode the JSON body.
    pub async fn get(&self, uri: &str) -> (StatusCode, serde_json::Value) {
        let response = self
            .router
            .clone()
            .oneshot(
                Request::builder()
                    .uri(uri)
                    .body(Body::empty())
                    .expect("request"),
            )
            .await
            .expect("router call");

        let status = response.status();
        let bytes = response
            .into_body()
            .collect()
            .await
            .expect("read body")
            .to_bytes();
        let body = serde_json::from_slice(&bytes).expect("JSON body");
        (status, body)
    }

    /// All persisted calculation rows, oldest first.
    pub async fn records(&self) -> Vec<entity::Model> {
        entity::Entity::find()
            .all(&self.db)
            .await
            .expect("query calculations")
    }
}
