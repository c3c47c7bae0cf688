//! Boundary errors. The engine itself never fails; these come from turning
//! raw form/CLI input into a [`crate::TaskDescriptor`].

use thiserror::Error;

#[derive(Debug, Error)]
pub enum PlanError {
    #[error("invalid {field} {value:?}: {reason}")]
    InvalidInput {
        field: &'static str,
        value: String,
        reason: String,
    },

    #[error("date pattern error: {0}")]
    Pattern(#[from] regex::Error),
}

impl PlanError {
    pub fn invalid(field: &'static str, value: impl Into<String>, reason: impl Into<String>) -> Self {
        PlanError::InvalidInput {
            field,
            value: value.into(),
            reason: reason.into(),
        }
    }

    /// Name of the offending input field, if the error is about one.
    pub fn field(&self) -> Option<&'static str> {
        match self {
            PlanError::InvalidInput { field, .. } => Some(field),
            PlanError::Pattern(_) => None,
        }
    }
}
