//! REST handlers: one per exposed operation plus the generic dispatcher.
//!
//! All of them follow the same shape: extract raw operands, hand them to
//! the service, wrap the outcome in the wire envelope.

use std::sync::Arc;

use axum::extract::{Extension, Query};
use axum::Json;

use crate::api::rest::dto::{
    BinaryOperands, CalculateParams, CalculationErrorResponse, CalculationResponse, UnaryOperand,
};
use crate::api::rest::error::ApiResult;
use crate::domain::dispatch::Operation;
use crate::domain::service::Service;

async fn binary(
    svc: &Service,
    op: Operation,
    params: BinaryOperands,
) -> ApiResult<Json<CalculationResponse>> {
    let result = svc
        .calculate(Some(op.name()), params.n1.as_deref(), params.n2.as_deref())
        .await?;
    Ok(Json(CalculationResponse::ok(result)))
}

#[utoipa::path(
    get,
    path = "/add",
    params(BinaryOperands),
    responses(
        (status = 200, description = "Sum of the operands", body = CalculationResponse),
        (status = 500, description = "Validation failure", body = CalculationErrorResponse)
    ),
    tag = "calculator"
)]
pub async fn add(
    Extension(svc): Extension<Arc<Service>>,
    Query(params): Query<BinaryOperands>,
) -> ApiResult<Json<CalculationResponse>> {
    binary(&svc, Operation::Add, params).await
}

#[utoipa::path(
    get,
    path = "/subtract",
    params(BinaryOperands),
    responses(
        (status = 200, description = "Difference of the operands", body = CalculationResponse),
        (status = 500, description = "Validation failure", body = CalculationErrorResponse)
    ),
    tag = "calculator"
)]
pub async fn subtract(
    Extension(svc): Extension<Arc<Service>>,
    Query(params): Query<BinaryOperands>,
) -> ApiResult<Json<CalculationResponse>> {
    binary(&svc, Operation::Subtract, params).await
}

#[utoipa::path(
    get,
    path = "/multiply",
    params(BinaryOperands),
    responses(
        (status = 200, description = "Product of the operands", body = CalculationResponse),
        (status = 500, description = "Validation failure", body = CalculationErrorResponse)
    ),
    tag = "calculator"
)]
pub async fn multiply(
    Extension(svc): Extension<Arc<Service>>,
    Query(params): Query<BinaryOperands>,
) -> ApiResult<Json<CalculationResponse>> {
    binary(&svc, Operation::Multiply, params).await
}

#[utoipa::path(
    get,
    path = "/divide",
    params(BinaryOperands),
    responses(
        (status = 200, description = "Quotient of the operands", body = CalculationResponse),
        (status = 500, description = "Validation or domain failure", body = CalculationErrorResponse)
    ),
    tag = "calculator"
)]
pub async fn divide(
    Extension(svc): Extension<Arc<Service>>,
    Query(params): Query<BinaryOperands>,
) -> ApiResult<Json<CalculationResponse>> {
    binary(&svc, Operation::Divide, params).await
}

#[utoipa::path(
    get,
    path = "/power",
    params(BinaryOperands),
    responses(
        (status = 200, description = "n1 raised to n2", body = CalculationResponse),
        (status = 500, description = "Validation failure", body = CalculationErrorResponse)
    ),
    tag = "calculator"
)]
pub async fn power(
    Extension(svc): Extension<Arc<Service>>,
    Query(params): Query<BinaryOperands>,
) -> ApiResult<Json<CalculationResponse>> {
    binary(&svc, Operation::Power, params).await
}

#[utoipa::path(
    get,
    path = "/mod",
    params(BinaryOperands),
    responses(
        (status = 200, description = "Truncating remainder of n1 / n2", body = CalculationResponse),
        (status = 500, description = "Validation failure", body = CalculationErrorResponse)
    ),
    tag = "calculator"
)]
pub async fn modulo(
    Extension(svc): Extension<Arc<Service>>,
    Query(params): Query<BinaryOperands>,
) -> ApiResult<Json<CalculationResponse>> {
    binary(&svc, Operation::Mod, params).await
}

#[utoipa::path(
    get,
    path = "/sqrt",
    params(UnaryOperand),
    responses(
        (status = 200, description = "Non-negative square root of n1", body = CalculationResponse),
        (status = 500, description = "Validation or domain failure", body = CalculationErrorResponse)
    ),
    tag = "calculator"
)]
pub async fn sqrt(
    Extension(svc): Extension<Arc<Service>>,
    Query(params): Query<UnaryOperand>,
) -> ApiResult<Json<CalculationResponse>> {
    let result = svc
        .calculate(Some(Operation::Sqrt.name()), params.n1.as_deref(), None)
        .await?;
    Ok(Json(CalculationResponse::ok(result)))
}

#[utoipa::path(
    get,
    path = "/calculate",
    params(CalculateParams),
    responses(
        (status = 200, description = "Result of the named operation", body = CalculationResponse),
        (status = 500, description = "Validation or domain failure", body = CalculationErrorResponse)
    ),
    tag = "calculator"
)]
pub async fn calculate(
    Extension(svc): Extension<Arc<Service>>,
    Query(params): Query<CalculateParams>,
) -> ApiResult<Json<CalculationResponse>> {
    let result = svc
        .calculate(
            params.operation.as_deref(),
            params.n1.as_deref(),
            params.n2.as_deref(),
        )
        .await?;
    Ok(Json(CalculationResponse::ok(result)))
}
