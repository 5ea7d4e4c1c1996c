use serde::{Deserialize, Serialize};
use std::fmt;

/// Categorization of aggregation errors.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub enum AppErrorKind {
    /// A requested case/hearing/application fragment is absent.
    NotFound,
    /// A stored payload does not conform to the expected shape.
    DecodeError,
    /// An event payload matches none of the recognized application shapes.
    StructuralMismatch,
    InternalError,
}

impl fmt::Display for AppErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AppErrorKind::NotFound => write!(f, "NotFound"),
            AppErrorKind::DecodeError => write!(f, "DecodeError"),
            AppErrorKind::StructuralMismatch => write!(f, "StructuralMismatch"),
            AppErrorKind::InternalError => write!(f, "InternalError"),
        }
    }
}

/// Structured error used across the aggregation engine and its callers.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct AppError {
    pub kind: AppErrorKind,
    pub message: String,
}

impl AppError {
    pub fn not_found(message: impl Into<String>) -> Self {
        Self {
            kind: AppErrorKind::NotFound,
            message: message.into(),
        }
    }

    pub fn decode(message: impl Into<String>) -> Self {
        Self {
            kind: AppErrorKind::DecodeError,
            message: message.into(),
        }
    }

    pub fn structural_mismatch(message: impl Into<String>) -> Self {
        Self {
            kind: AppErrorKind::StructuralMismatch,
            message: message.into(),
        }
    }

    pub fn internal(message: impl Into<String>) -> Self {
        Self {
            kind: AppErrorKind::InternalError,
            message: message.into(),
        }
    }

    /// Whether this error reflects a genuinely absent record (not retried).
    pub fn is_not_found(&self) -> bool {
        self.kind == AppErrorKind::NotFound
    }
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.kind, self.message)
    }
}

impl std::error::Error for AppError {}

impl From<serde_json::Error> for AppError {
    fn from(e: serde_json::Error) -> Self {
        AppError::decode(e.to_string())
    }
}
