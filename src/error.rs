//! Errors for typed parameter access
//!
//! Matching itself never fails: every outcome is a [`MatchResult`](crate::MatchResult).
//! The only fallible surface is turning captured text into typed values.

use std::fmt;

/// Error returned by [`RouteParams::require`](crate::RouteParams::require).
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParamError {
    /// The pattern did not capture a parameter with this name
    Missing { name: String },

    /// The captured text could not be parsed into the requested type
    Invalid {
        name: String,
        value: String,
        reason: String,
    },
}

impl ParamError {
    /// Name of the parameter the error refers to.
    pub fn name(&self) -> &str {
        match self {
            ParamError::Missing { name } | ParamError::Invalid { name, .. } => name,
        }
    }
}

impl fmt::Display for ParamError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ParamError::Missing { name } => {
                write!(f, "Missing route parameter: {}", name)
            }
            ParamError::Invalid {
                name,
                value,
                reason,
            } => {
                write!(f, "Invalid route parameter {}='{}': {}", name, value, reason)
            }
        }
    }
}

impl std::error::Error for ParamError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_display() {
        let error = ParamError::Missing {
            name: "id".to_string(),
        };
        assert_eq!(error.to_string(), "Missing route parameter: id");
        assert_eq!(error.name(), "id");
    }

    #[test]
    fn test_invalid_display() {
        let error = ParamError::Invalid {
            name: "page".to_string(),
            value: "two".to_string(),
            reason: "invalid digit found in string".to_string(),
        };
        assert_eq!(
            error.to_string(),
            "Invalid route parameter page='two': invalid digit found in string"
        );
        assert_eq!(error.name(), "page");
    }
}
