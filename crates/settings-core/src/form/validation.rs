//! Client-side validation failures
//!
//! Raised before any request is sent. The form stays open.

/// Local, pre-network rejection of a draft
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    /// A required field is blank (message names the fields)
    #[error("{0}")]
    Required(&'static str),

    /// The draft collides with another loaded entity
    #[error("{label} {field} already exists: {value}")]
    Duplicate {
        label: &'static str,
        field: &'static str,
        value: String,
    },
}
