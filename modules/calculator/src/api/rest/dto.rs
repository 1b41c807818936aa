//! REST DTOs - transport-specific types (serde + utoipa).
//!
//! Operands cross the wire as raw query-string values and are deliberately
//! kept as strings here: numeric validation belongs to the dispatcher,
//! which owns the error messages and their precedence.

use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};

/// Success envelope: `statuscode` mirrors the HTTP status.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct CalculationResponse {
    pub statuscode: u16,
    /// The computed value. Non-finite results serialize as `null`.
    pub data: f64,
}

impl CalculationResponse {
    #[must_use]
    pub fn ok(data: f64) -> Self {
        Self {
            statuscode: 200,
            data,
        }
    }
}

/// Error envelope carrying the failure message.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct CalculationErrorResponse {
    pub statuscode: u16,
    pub msg: String,
}

/// Query parameters for the two-operand endpoints.
#[derive(Debug, Clone, Default, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct BinaryOperands {
    /// First operand.
    pub n1: Option<String>,
    /// Second operand.
    pub n2: Option<String>,
}

/// Query parameter for the one-operand endpoints.
#[derive(Debug, Clone, Default, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct UnaryOperand {
    /// The operand.
    pub n1: Option<String>,
}

/// Query parameters for the generic `/calculate` endpoint.
#[derive(Debug, Clone, Default, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct CalculateParams {
    /// Operation name: add, subtract, multiply, divide, power, sqrt, mod.
    pub operation: Option<String>,
    /// First operand.
    pub n1: Option<String>,
    /// Second operand; required only for two-operand operations.
    pub n2: Option<String>,
}
