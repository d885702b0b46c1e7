use std::process::ExitCode as StdExitCode;
use thiserror::Error;

/// Placeholder shown in a target field when encoding into it fails.
pub const ENCODE_FAILED: &str = "Error encoding";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u8)]
pub enum ExitCode {
    Success = 0,
    GeneralError = 1,
    InvalidInput = 10,
    IoError = 12,
    UnsupportedTransform = 13,
}

impl From<ExitCode> for StdExitCode {
    fn from(code: ExitCode) -> Self {
        StdExitCode::from(code as u8)
    }
}

#[derive(Debug, Error)]
pub enum XlateError {
    #[error("invalid input: {message}")]
    InvalidInput { message: String },

    #[error("{placeholder} ({message})")]
    InvalidEncoding {
        placeholder: &'static str,
        message: String,
    },

    #[error("encoding failed: {message}")]
    EncodeFailed { message: String },

    #[error("please enter some text first")]
    EmptyInput,

    #[error("transform '{id}' cannot be used as a broadcast source")]
    NotDecodeSource { id: String },

    #[error("unknown transform: {id}")]
    UnknownTransform { id: String },

    #[error("decoding from '{id}' failed: {placeholder}")]
    DecodeFailed { id: String, placeholder: String },

    #[error("invalid registry: {message}")]
    InvalidRegistry { message: String },

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl XlateError {
    pub fn exit_code(&self) -> ExitCode {
        match self {
            XlateError::InvalidInput { .. }
            | XlateError::InvalidEncoding { .. }
            | XlateError::EmptyInput
            | XlateError::DecodeFailed { .. } => ExitCode::InvalidInput,
            XlateError::NotDecodeSource { .. } | XlateError::UnknownTransform { .. } => {
                ExitCode::UnsupportedTransform
            }
            XlateError::Io(_) => ExitCode::IoError,
            XlateError::EncodeFailed { .. }
            | XlateError::InvalidRegistry { .. }
            | XlateError::Json(_) => ExitCode::GeneralError,
        }
    }

    /// The fixed text a field shows in place of a failed result.
    pub fn placeholder(&self) -> &str {
        match self {
            XlateError::InvalidEncoding { placeholder, .. } => *placeholder,
            XlateError::DecodeFailed { placeholder, .. } => placeholder.as_str(),
            _ => ENCODE_FAILED,
        }
    }

    // Helper constructors for common error patterns
    pub fn invalid_input(message: impl Into<String>) -> Self {
        Self::InvalidInput {
            message: message.into(),
        }
    }

    pub fn invalid_encoding(placeholder: &'static str, message: impl Into<String>) -> Self {
        Self::InvalidEncoding {
            placeholder,
            message: message.into(),
        }
    }

    pub fn encode_failed(message: impl Into<String>) -> Self {
        Self::EncodeFailed {
            message: message.into(),
        }
    }

    pub fn not_decode_source(id: impl Into<String>) -> Self {
        Self::NotDecodeSource { id: id.into() }
    }

    pub fn unknown_transform(id: impl Into<String>) -> Self {
        Self::UnknownTransform { id: id.into() }
    }

    pub fn invalid_registry(message: impl Into<String>) -> Self {
        Self::InvalidRegistry {
            message: message.into(),
        }
    }
}

pub type Result<T> = std::result::Result<T, XlateError>;
