use std::fmt;
use std::path::PathBuf;

use thiserror::Error;

/// Convenient result alias for the freightpath library.
pub type Result<T> = std::result::Result<T, Error>;

/// Which end of a shipment a postcode was supplied for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LocationRole {
    Origin,
    Destination,
}

impl fmt::Display for LocationRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let value = match self {
            LocationRole::Origin => "origin",
            LocationRole::Destination => "destination",
        };
        f.write_str(value)
    }
}

/// Top-level library error type.
#[derive(Debug, Error)]
pub enum Error {
    /// Raised when a shipment references a postcode the index does not know.
    #[error("unknown {role} postcode: {code}{}", format_suggestions(.suggestions))]
    UnknownLocation {
        role: LocationRole,
        code: String,
        suggestions: Vec<String>,
    },

    /// Raised when custom multi-criteria weights do not sum to one.
    #[error("scoring weights must sum to 1.0, got {sum:.4}")]
    InvalidScoringWeights { sum: f64 },

    /// Raised when a network snapshot file does not exist.
    #[error("network snapshot not found at {}", .path.display())]
    NetworkNotFound { path: PathBuf },

    /// Wrapper for JSON snapshot parsing errors.
    #[error(transparent)]
    Json(#[from] serde_json::Error),

    /// Wrapper for IO errors.
    #[error(transparent)]
    Io(#[from] std::io::Error),
}

fn format_suggestions(suggestions: &[String]) -> String {
    if suggestions.is_empty() {
        String::new()
    } else if suggestions.len() == 1 {
        format!(". Did you mean '{}'?", suggestions[0])
    } else {
        format!(
            ". Did you mean one of: {}?",
            suggestions
                .iter()
                .map(|s| format!("'{}'", s))
                .collect::<Vec<_>>()
                .join(", ")
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unknown_location_without_suggestions() {
        let err = Error::UnknownLocation {
            role: LocationRole::Origin,
            code: "9999".to_string(),
            suggestions: Vec::new(),
        };
        assert_eq!(err.to_string(), "unknown origin postcode: 9999");
    }

    #[test]
    fn unknown_location_lists_suggestions() {
        let err = Error::UnknownLocation {
            role: LocationRole::Destination,
            code: "300".to_string(),
            suggestions: vec!["3000".to_string(), "3001".to_string()],
        };
        let message = err.to_string();
        assert!(message.starts_with("unknown destination postcode: 300"));
        assert!(message.contains("Did you mean one of: '3000', '3001'?"));
    }
}
