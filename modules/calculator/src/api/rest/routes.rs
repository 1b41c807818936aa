//! Route definitions and the OpenAPI document.
//!
//! Routes orchestrate but don't contain business logic: handlers call the
//! domain service, which owns validation, persistence and logging.

use std::sync::Arc;

use axum::extract::Extension;
use axum::routing::get;
use axum::{Json, Router};
use tower_http::trace::TraceLayer;
use utoipa::OpenApi;

use crate::api::rest::dto::{CalculationErrorResponse, CalculationResponse};
use crate::api::rest::handlers;
use crate::domain::service::Service;

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Calculator microservice",
        description = "Arithmetic over HTTP with an append-only audit trail"
    ),
    paths(
        handlers::add,
        handlers::subtract,
        handlers::multiply,
        handlers::divide,
        handlers::power,
        handlers::modulo,
        handlers::sqrt,
        handlers::calculate,
    ),
    components(schemas(CalculationResponse, CalculationErrorResponse))
)]
pub struct ApiDoc;

async fn openapi() -> Json<utoipa::openapi::OpenApi> {
    Json(ApiDoc::openapi())
}

/// Build the service router. The service handle is shared across requests
/// via an extension layer.
pub fn router(service: Arc<Service>) -> Router {
    Router::new()
        .route("/add", get(handlers::add))
        .route("/subtract", get(handlers::subtract))
        .route("/multiply", get(handlers::multiply))
        .route("/divide", get(handlers::divide))
        .route("/power", get(handlers::power))
        .route("/mod", get(handlers::modulo))
        .route("/sqrt", get(handlers::sqrt))
        .route("/calculate", get(handlers::calculate))
        .route("/openapi.json", get(openapi))
        .layer(Extension(service))
        .layer(TraceLayer::new_for_http())
}
