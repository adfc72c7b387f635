use thiserror::Error;

/// Failures of the strict conversions. The message functions never produce
/// these; they fall back instead.
#[derive(Debug, Error)]
pub enum StatusError {
    #[error("Unknown status code: {0}")]
    Unknown(i64),

    #[error("Invalid status code: {0:?}")]
    InvalidCode(String),

    #[error("Failed to encode status as JSON: {0}")]
    Json(#[from] serde_json::Error),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_messages() {
        assert_eq!(StatusError::Unknown(999).to_string(), "Unknown status code: 999");
        assert_eq!(
            StatusError::InvalidCode("4o4".to_string()).to_string(),
            "Invalid status code: \"4o4\""
        );
    }
}
