use thiserror::Error;
use tracing::{info, warn};

/// Errors produced by store and service operations.
///
/// The `Display` text of each variant is what the user sees in a toast.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum BoardError {
    #[error("{kind} not found: {id}")]
    NotFound { kind: &'static str, id: String },

    #[error("{message}")]
    Validation { field: &'static str, message: String },

    #[error("A team member with this email already exists")]
    DuplicateEmail { email: String },

    #[error("Unknown {kind} referenced: {id}")]
    DanglingReference { kind: &'static str, id: String },

    #[error("Invalid {kind} update: {reason}")]
    InvalidPatch { kind: &'static str, reason: String },

    #[error("{message}")]
    Auth { message: String },

    #[error("An authentication request is already in progress")]
    AuthInFlight,
}

impl BoardError {
    pub fn not_found(kind: &'static str, id: impl Into<String>) -> Self {
        Self::NotFound { kind, id: id.into() }
    }

    pub fn validation(field: &'static str, message: impl Into<String>) -> Self {
        Self::Validation {
            field,
            message: message.into(),
        }
    }

    /// A duplicate submit bounced off a request that is still running.
    pub fn is_in_flight(&self) -> bool {
        matches!(self, Self::AuthInFlight)
    }
}

pub type BoardResult<T> = std::result::Result<T, BoardError>;

/// Structured logging helpers
pub struct LogHelper;

impl LogHelper {
    pub fn log_mutation(kind: &str, operation: &str, id: &str) {
        info!(
            kind = %kind,
            operation = %operation,
            id = %id,
            "Record mutated"
        );
    }

    pub fn log_rejection(kind: &str, operation: &str, error: &BoardError) {
        warn!(
            kind = %kind,
            operation = %operation,
            error = %error,
            "Operation rejected"
        );
    }
}

/// Extension for logging a rejected result in one call.
pub trait LogRejection<T> {
    fn log_rejection(self, kind: &str, operation: &str) -> BoardResult<T>;
}

impl<T> LogRejection<T> for BoardResult<T> {
    fn log_rejection(self, kind: &str, operation: &str) -> BoardResult<T> {
        if let Err(error) = &self {
            LogHelper::log_rejection(kind, operation, error);
        }
        self
    }
}

/// User-friendly error messages
pub struct UserErrorFormatter;

impl UserErrorFormatter {
    pub fn format_for_ui(error: &anyhow::Error) -> String {
        if let Some(board_error) = error.downcast_ref::<BoardError>() {
            return Self::format_board_error(board_error);
        }

        let error_str = error.to_string().to_lowercase();

        if error_str.contains("network") || error_str.contains("connection") || error_str.contains("dns") {
            return "Network connection error. Please check your internet connection and try again.".to_string();
        }

        if error_str.contains("permission") || error_str.contains("denied") {
            return "You don't have permission to perform this action.".to_string();
        }

        if error_str.contains("timeout") || error_str.contains("timed out") {
            return "The operation timed out. Please try again.".to_string();
        }

        "An unexpected error occurred. Please try again.".to_string()
    }

    pub fn format_board_error(error: &BoardError) -> String {
        match error {
            BoardError::NotFound { kind, .. } => {
                format!("The requested {} could not be found.", kind.to_lowercase())
            }
            _ => error.to_string(),
        }
    }
}
