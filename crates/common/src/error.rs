use thiserror::Error;

/// Common error types for starkcall
#[derive(Error, Debug)]
pub enum StarkcallError {
    /// ABI shape errors
    #[error("ABI error: {0}")]
    Abi(#[from] AbiError),

    /// Call argument validation errors
    #[error("{0}")]
    Validation(#[from] ValidationError),

    /// Configuration errors
    #[error("Configuration error: {0}")]
    Config(String),

    /// I/O errors
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Serialization errors
    #[error("Serialization error: {0}")]
    Serialization(String),
}

/// Errors raised while reading or querying a contract ABI
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum AbiError {
    /// Cairo 1 lookup needs an `interface` entry to search
    #[error("ABI has no interface entry to look up method {method}")]
    MissingInterface { method: String },

    #[error("{kind} method {method} not found in abi")]
    MethodNotFound { kind: String, method: String },

    #[error("Invalid ABI json: {0}")]
    InvalidJson(String),
}

/// Errors raised by calldata validation. Messages are meant to reach the
/// caller unmodified.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("Validate: arg {arg} of cairo type {cairo_type} should be type ({expected}), but is {found}")]
    TypeMismatch {
        arg: String,
        cairo_type: String,
        expected: String,
        found: String,
    },

    #[error("Validate: arg {arg} cairo typed {cairo_type} should be in range {range}")]
    OutOfRange {
        arg: String,
        cairo_type: String,
        range: String,
    },

    #[error("Validation: Parameter {arg} is too large to be typed as Number use (BigInt or String)")]
    OversizeNumber { arg: String },

    #[error("Validate: arg {arg} should have a property {member}")]
    MissingMember { arg: String, member: String },

    #[error("Validate Enum: argument {arg}, type {cairo_type}, value received {found}, is not an Enum.")]
    UnrecognizedEnum {
        arg: String,
        cairo_type: String,
        found: String,
    },

    #[error("Validate Unhandled: argument {arg}, type {cairo_type}")]
    UnhandledType { arg: String, cairo_type: String },

    #[error("Validate: no value supplied for arg {arg} at position {index}")]
    MissingArgument { arg: String, index: usize },

    #[error("Invalid number of arguments, expected {expected} arguments, but got {got}")]
    ArgumentCount { expected: usize, got: usize },
}

impl ValidationError {
    /// Create a type mismatch error
    pub fn mismatch(
        arg: impl Into<String>,
        cairo_type: impl Into<String>,
        expected: impl Into<String>,
        found: impl Into<String>,
    ) -> Self {
        Self::TypeMismatch {
            arg: arg.into(),
            cairo_type: cairo_type.into(),
            expected: expected.into(),
            found: found.into(),
        }
    }

    /// Create an out of range error
    pub fn out_of_range(
        arg: impl Into<String>,
        cairo_type: impl Into<String>,
        range: impl Into<String>,
    ) -> Self {
        Self::OutOfRange {
            arg: arg.into(),
            cairo_type: cairo_type.into(),
            range: range.into(),
        }
    }

    /// Create an unhandled type error
    pub fn unhandled(arg: impl Into<String>, cairo_type: impl Into<String>) -> Self {
        Self::UnhandledType {
            arg: arg.into(),
            cairo_type: cairo_type.into(),
        }
    }
}

/// Result type alias for convenience
pub type Result<T> = std::result::Result<T, StarkcallError>;

impl From<serde_json::Error> for StarkcallError {
    fn from(err: serde_json::Error) -> Self {
        StarkcallError::Serialization(err.to_string())
    }
}

impl From<config::ConfigError> for StarkcallError {
    fn from(err: config::ConfigError) -> Self {
        StarkcallError::Config(err.to_string())
    }
}
