//! User Notices
//!
//! Transient success/error messages produced from operation outcomes.
//! Remote failures all read the same regardless of their cause.

use crate::domain::Resource;
use crate::form::FormError;

pub const LOAD_FAILED: &str = "Failed to load settings data";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeLevel {
    Success,
    Error,
}

/// Mutations that report their outcome to the user
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operation {
    Create,
    Update,
    Delete,
    ToggleStatus,
}

impl Operation {
    fn verb(self) -> &'static str {
        match self {
            Operation::Create => "create",
            Operation::Update => "update",
            Operation::Delete => "delete",
            Operation::ToggleStatus => "update the status of",
        }
    }

    fn past(self) -> &'static str {
        match self {
            Operation::Create => "created",
            Operation::Update => "updated",
            Operation::Delete => "deleted",
            Operation::ToggleStatus => "status updated",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    pub level: NoticeLevel,
    pub message: String,
}

impl Notice {
    pub fn success(message: impl Into<String>) -> Self {
        Self {
            level: NoticeLevel::Success,
            message: message.into(),
        }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self {
            level: NoticeLevel::Error,
            message: message.into(),
        }
    }

    pub fn load_failed() -> Self {
        Self::error(LOAD_FAILED)
    }

    /// e.g. "Category created successfully"
    pub fn succeeded<T: Resource>(op: Operation) -> Self {
        Self::success(format!("{} {} successfully", T::LABEL, op.past()))
    }

    /// e.g. "Failed to delete branch"
    pub fn failed<T: Resource>(op: Operation) -> Self {
        Self::error(format!("Failed to {} {}", op.verb(), T::LABEL.to_lowercase()))
    }

    /// Maps a form error to what the user sees
    pub fn from_form_error<T: Resource>(op: Operation, err: &FormError) -> Self {
        match err {
            FormError::Validation(e) => Self::error(e.to_string()),
            FormError::Remote(_) => Self::failed::<T>(op),
            FormError::Busy => Self::error("Please wait for the current request to finish"),
            FormError::NotOpen | FormError::StaleTicket => Self::error(err.to_string()),
        }
    }

    pub fn is_error(&self) -> bool {
        self.level == NoticeLevel::Error
    }
}
