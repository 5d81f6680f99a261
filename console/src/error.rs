//! Error handling for the Warehouse Console
//!
//! Every failure a view can hit is a `ConsoleError`. Views never show the raw
//! error; they log it and store a short message in Vietnamese or English.

use shared::{FormError, Language};
use thiserror::Error;

/// Console error types
#[derive(Error, Debug)]
pub enum ConsoleError {
    // Network errors
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Backend returned {status} for {path}: {body}")]
    Status {
        path: String,
        status: u16,
        body: String,
    },

    #[error("Invalid response from {path}: {message}")]
    Decode { path: String, message: String },

    // Local errors
    #[error("{operation} is not supported for {resource}")]
    Unsupported {
        resource: &'static str,
        operation: &'static str,
    },

    #[error("{resource} {id} not found")]
    NotFound { resource: &'static str, id: String },

    #[error("Invalid form: {0}")]
    Form(#[from] FormError),

    #[error("No form is open")]
    NoForm,

    #[error("Configuration error: {0}")]
    Config(#[from] config::ConfigError),

    #[error("Terminal I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// What the user was doing when an error happened
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operation {
    Load,
    Save,
    Delete,
}

impl ConsoleError {
    /// Stable error code for logs
    pub fn code(&self) -> &'static str {
        match self {
            ConsoleError::Http(_) => "HTTP_ERROR",
            ConsoleError::Status { .. } => "BACKEND_STATUS",
            ConsoleError::Decode { .. } => "INVALID_RESPONSE",
            ConsoleError::Unsupported { .. } => "UNSUPPORTED",
            ConsoleError::NotFound { .. } => "NOT_FOUND",
            ConsoleError::Form(_) => "VALIDATION_ERROR",
            ConsoleError::NoForm => "NO_FORM",
            ConsoleError::Config(_) => "CONFIGURATION_ERROR",
            ConsoleError::Io(_) => "IO_ERROR",
        }
    }

    /// Short message for the error panel
    ///
    /// Local errors describe themselves; backend failures collapse into one
    /// "could not load/save/delete" line naming what was affected.
    pub fn user_message(&self, operation: Operation, subject: &str, language: Language) -> String {
        match self {
            ConsoleError::Form(err) => err.localized(language),
            ConsoleError::Unsupported { operation, .. } => match language {
                Language::Vietnamese => {
                    let action = match *operation {
                        "update" => "cập nhật",
                        "create" => "thêm mới",
                        "delete" => "xóa",
                        "search" => "tìm kiếm",
                        other => other,
                    };
                    format!("Không hỗ trợ {} {}.", action, subject)
                }
                Language::English => format!("Cannot {} {} here.", operation, subject),
            },
            ConsoleError::NotFound { id, .. } => match language {
                Language::Vietnamese => format!("Không tìm thấy {} {}.", subject, id),
                Language::English => format!("No {} with id {}.", subject, id),
            },
            ConsoleError::NoForm => match language {
                Language::Vietnamese => "Chưa mở biểu mẫu nào.".to_string(),
                Language::English => "No form is open.".to_string(),
            },
            ConsoleError::Config(_) | ConsoleError::Io(_) => self.to_string(),
            ConsoleError::Http(_) | ConsoleError::Status { .. } | ConsoleError::Decode { .. } => {
                match (operation, language) {
                    (Operation::Load, Language::Vietnamese) => {
                        format!("Không thể tải {}. Vui lòng thử lại sau.", subject)
                    }
                    (Operation::Save, Language::Vietnamese) => {
                        format!("Không thể lưu {}. Vui lòng thử lại.", subject)
                    }
                    (Operation::Delete, Language::Vietnamese) => {
                        format!("Không thể xóa {}. Vui lòng thử lại.", subject)
                    }
                    (Operation::Load, Language::English) => {
                        format!("Could not load {}. Please try again later.", subject)
                    }
                    (Operation::Save, Language::English) => {
                        format!("Could not save {}. Please try again.", subject)
                    }
                    (Operation::Delete, Language::English) => {
                        format!("Could not delete {}. Please try again.", subject)
                    }
                }
            }
        }
    }
}

/// Result type alias for console operations
pub type ConsoleResult<T> = Result<T, ConsoleError>;
