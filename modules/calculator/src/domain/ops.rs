//! Arithmetic primitives over `f64`.
//!
//! Total except for the two guarded cases (`divide`, `sqrt`). Non-finite
//! outputs (`inf`, `NaN`) are ordinary results, not errors.

use crate::domain::error::CalcError;

pub fn add(a: f64, b: f64) -> f64 {
    a + b
}

pub fn subtract(a: f64, b: f64) -> f64 {
    a - b
}

pub fn multiply(a: f64, b: f64) -> f64 {
    a * b
}

pub fn divide(a: f64, b: f64) -> Result<f64, CalcError> {
    if b == 0.0 {
        return Err(CalcError::DivideByZero);
    }
    Ok(a / b)
}

/// Native floating-point exponentiation, including fractional and negative
/// exponents; invalid combinations yield `NaN`.
pub fn power(a: f64, b: f64) -> f64 {
    a.powf(b)
}

pub fn sqrt(a: f64) -> Result<f64, CalcError> {
    if a < 0.0 {
        return Err(CalcError::NegativeRadicand);
    }
    Ok(a.sqrt())
}

/// Truncating remainder; the sign follows the dividend. `b == 0` yields
/// `NaN`, not an error.
pub fn modulo(a: f64, b: f64) -> f64 {
    a % b
}
