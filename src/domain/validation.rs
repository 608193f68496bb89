use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    Empty { field: &'static str },
    UnknownMethod { method: String },
    UnknownField { method: &'static str, field: String },
    KindMismatch { field: String, expected: &'static str },
    MissingField { method: &'static str, field: &'static str },
    InvalidDate { input: String },
    InvalidEmail { input: String },
    InvalidDid { input: String },
    OutOfRange { field: &'static str, min: i64, max: i64, actual: i64 },
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Empty { field } => write!(f, "{field} must not be empty"),
            Self::UnknownMethod { method } => write!(f, "unknown method: {method}"),
            Self::UnknownField { method, field } => {
                write!(f, "{field} is not an allowed field for {method}")
            }
            Self::KindMismatch { field, expected } => {
                write!(f, "{field} must be {expected}")
            }
            Self::MissingField { method, field } => {
                write!(f, "{method} requires the {field} field")
            }
            Self::InvalidDate { input } => {
                write!(f, "invalid date: {input} (expected YYYY-MM-DD)")
            }
            Self::InvalidEmail { input } => write!(f, "invalid email address: {input}"),
            Self::InvalidDid { input } => write!(f, "invalid DID: {input}"),
            Self::OutOfRange {
                field,
                min,
                max,
                actual,
            } => {
                write!(f, "{field} out of range: {actual} (expected {min}..={max})")
            }
        }
    }
}

impl std::error::Error for ValidationError {}
