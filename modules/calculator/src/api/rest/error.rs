use axum::http::StatusCode;
use axum::response::{IntoResponse, Json, Response};

use crate::api::rest::dto::CalculationErrorResponse;
use crate::domain::error::CalcError;

/// Maps calculation failures onto the wire envelope.
///
/// Every failure - validation and domain alike - is reported as HTTP 500
/// with `{"statuscode": 500, "msg": ...}`; the legacy wire contract has no
/// 4xx class for client errors and existing callers depend on that shape.
#[derive(Debug)]
pub struct ApiError(CalcError);

pub type ApiResult<T> = Result<T, ApiError>;

impl From<CalcError> for ApiError {
    fn from(e: CalcError) -> Self {
        Self(e)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let body = CalculationErrorResponse {
            statuscode: 500,
            msg: self.0.to_string(),
        };
        (StatusCode::INTERNAL_SERVER_ERROR, Json(body)).into_response()
    }
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]

    use super::*;
    use http_body_util::BodyExt as _;

    #[tokio::test]
    async fn error_envelope_carries_message_and_status() {
        let resp = ApiError::from(CalcError::DivideByZero).into_response();
        assert_eq!(resp.status(), StatusCode::INTERNAL_SERVER_ERROR);

        let bytes = resp.into_body().collect().await.unwrap().to_bytes();
        let body: serde_json::Value = serde_json::from_slice(&bytes).unwrap();
        assert_eq!(body["statuscode"], 500);
        assert_eq!(body["msg"], "Cannot divide by zero");
    }
}
