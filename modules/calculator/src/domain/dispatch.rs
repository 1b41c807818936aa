//! Operation registry and dispatcher.
//!
//! Operations form a closed set checked exhaustively at compile time;
//! unrecognized names fall into a single explicit error path. Operands
//! arrive as raw query-string values and are validated here, in the order
//! the wire contract requires: a malformed `n1` is always reported first,
//! regardless of whether the operation name is valid.

use crate::domain::error::CalcError;
use crate::domain::ops;

/// The closed set of registered operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Operation {
    Add,
    Subtract,
    Multiply,
    Divide,
    Power,
    Sqrt,
    Mod,
}

/// Number of operands an operation requires.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Arity {
    Unary,
    Binary,
}

impl Operation {
    pub const ALL: [Self; 7] = [
        Self::Add,
        Self::Subtract,
        Self::Multiply,
        Self::Divide,
        Self::Power,
        Self::Sqrt,
        Self::Mod,
    ];

    /// Look up an operation by its registered name.
    #[must_use]
    pub fn resolve(name: &str) -> Option<Self> {
        match name {
            "add" => Some(Self::Add),
            "subtract" => Some(Self::Subtract),
            "multiply" => Some(Self::Multiply),
            "divide" => Some(Self::Divide),
            "power" => Some(Self::Power),
            "sqrt" => Some(Self::Sqrt),
            "mod" => Some(Self::Mod),
            _ => None,
        }
    }

    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            Self::Add => "add",
            Self::Subtract => "subtract",
            Self::Multiply => "multiply",
            Self::Divide => "divide",
            Self::Power => "power",
            Self::Sqrt => "sqrt",
            Self::Mod => "mod",
        }
    }

    #[must_use]
    pub fn arity(self) -> Arity {
        match self {
            Self::Sqrt => Arity::Unary,
            Self::Add
            | Self::Subtract
            | Self::Multiply
            | Self::Divide
            | Self::Power
            | Self::Mod => Arity::Binary,
        }
    }

    /// Invoke the arithmetic function. Domain errors propagate unchanged.
    ///
    /// # Errors
    /// `DivideByZero`, `NegativeRadicand`, or `Operand2Invalid` when a
    /// binary operation is applied without a second operand.
    pub fn apply(self, n1: f64, n2: Option<f64>) -> Result<f64, CalcError> {
        match (self, n2) {
            (Self::Sqrt, _) => ops::sqrt(n1),
            (Self::Add, Some(b)) => Ok(ops::add(n1, b)),
            (Self::Subtract, Some(b)) => Ok(ops::subtract(n1, b)),
            (Self::Multiply, Some(b)) => Ok(ops::multiply(n1, b)),
            (Self::Divide, Some(b)) => ops::divide(n1, b),
            (Self::Power, Some(b)) => Ok(ops::power(n1, b)),
            (Self::Mod, Some(b)) => Ok(ops::modulo(n1, b)),
            (_, None) => Err(CalcError::Operand2Invalid),
        }
    }
}

/// Outcome of a successful dispatch: the resolved operation, the parsed
/// operands and the computed result. `n2` is `None` for unary operations
/// even when the caller supplied one.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Evaluation {
    pub operation: Operation,
    pub n1: f64,
    pub n2: Option<f64>,
    pub result: f64,
}

/// Validate raw operands, resolve the operation and compute.
///
/// Validation order is part of the wire contract:
/// 1. `n1` must parse to a finite number;
/// 2. when the named operation is binary, `n2` must parse to a finite
///    number;
/// 3. the name must resolve to a registered operation;
/// 4. the operation is applied and any domain error propagates unchanged.
///
/// # Errors
/// `CalcError` per the rules above.
pub fn dispatch(
    name: Option<&str>,
    n1_raw: Option<&str>,
    n2_raw: Option<&str>,
) -> Result<Evaluation, CalcError> {
    let n1 = parse_operand(n1_raw).ok_or(CalcError::Operand1Invalid)?;

    let resolved = name.and_then(Operation::resolve);

    let n2 = match resolved {
        Some(op) if op.arity() == Arity::Binary => {
            Some(parse_operand(n2_raw).ok_or(CalcError::Operand2Invalid)?)
        }
        _ => None,
    };

    let operation = resolved.ok_or(CalcError::UnknownOperation)?;
    let result = operation.apply(n1, n2)?;

    Ok(Evaluation {
        operation,
        n1,
        n2,
        result,
    })
}

/// A valid operand is a string that parses to a finite `f64`.
fn parse_operand(raw: Option<&str>) -> Option<f64> {
    raw.and_then(|s| s.trim().parse::<f64>().ok())
        .filter(|v| v.is_finite())
}
