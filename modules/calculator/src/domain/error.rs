use thiserror::Error;

/// Client-caused calculation failures.
///
/// `Display` strings are the exact messages carried in the error envelope's
/// `msg` field, so variants must not be renamed without considering the wire
/// contract.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum CalcError {
    /// `n1` missing, malformed or non-finite.
    #[error("n1 incorrectly defined")]
    Operand1Invalid,

    /// `n2` missing, malformed or non-finite for a two-operand operation.
    #[error("n2 incorrectly defined")]
    Operand2Invalid,

    /// The operation name does not resolve to a registered operation.
    #[error("Invalid operation.")]
    UnknownOperation,

    #[error("Cannot divide by zero")]
    DivideByZero,

    #[error("Cannot take square root of a negative number")]
    NegativeRadicand,
}

impl CalcError {
    /// True for malformed-input failures, false for mathematically
    /// undefined operations on well-formed input.
    #[must_use]
    pub fn is_validation(self) -> bool {
        matches!(
            self,
            Self::Operand1Invalid | Self::Operand2Invalid | Self::UnknownOperation
        )
    }
}

/// Persistence failures. Logged and swallowed by the service; never reach
/// the HTTP caller.
#[derive(Debug, Error)]
pub enum StorageError {
    #[error("database error: {message}")]
    Database { message: String },
}

impl StorageError {
    pub fn database(message: impl Into<String>) -> Self {
        Self::Database {
            message: message.into(),
        }
    }
}
