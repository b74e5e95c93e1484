use thiserror::Error;

/// Failure raised by the JSON parameter boundary. Typed builders never fail.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ElementError {
    #[error("invalid value `{value}` for `{field}` (expected one of: {allowed})")]
    InvalidEnumValue {
        field: String,
        value: String,
        allowed: String,
    },
    #[error("invalid shape for `{field}`: {reason}")]
    InvalidShape { field: String, reason: String },
}

impl ElementError {
    pub fn invalid_enum(field: impl Into<String>, value: impl Into<String>, allowed: &[&str]) -> Self {
        ElementError::InvalidEnumValue {
            field: field.into(),
            value: value.into(),
            allowed: allowed.join(", "),
        }
    }

    pub fn invalid_shape(field: impl Into<String>, reason: impl Into<String>) -> Self {
        ElementError::InvalidShape {
            field: field.into(),
            reason: reason.into(),
        }
    }

    /// Field path the error refers to.
    pub fn field(&self) -> &str {
        match self {
            ElementError::InvalidEnumValue { field, .. } => field,
            ElementError::InvalidShape { field, .. } => field,
        }
    }

    /// Prefixes the field path, used when validating nested parameter objects.
    pub(crate) fn nested(self, parent: &str) -> Self {
        match self {
            ElementError::InvalidEnumValue {
                field,
                value,
                allowed,
            } => ElementError::InvalidEnumValue {
                field: format!("{parent}.{field}"),
                value,
                allowed,
            },
            ElementError::InvalidShape { field, reason } => ElementError::InvalidShape {
                field: format!("{parent}.{field}"),
                reason,
            },
        }
    }
}
