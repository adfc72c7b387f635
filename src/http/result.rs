use crate::http::error::StatusError;
use serde::{Deserialize, Serialize};
use std::fmt;

/// What `create_status` hands back. `status_code` is whatever the caller
/// passed in, registered or not.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq, Hash)]
#[serde(rename_all = "camelCase")]
pub struct StatusResult {
    pub status_code: i64,
    pub message: String,
}

impl StatusResult {
    pub fn to_json(&self) -> Result<String, StatusError> {
        Ok(serde_json::to_string(self)?)
    }
}

impl fmt::Display for StatusResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.message)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_to_json_uses_camel_case() {
        let result = StatusResult {
            status_code: 201,
            message: "Created: The request has been fulfilled and a new resource has been created."
                .to_string(),
        };
        assert_eq!(
            result.to_json().unwrap(),
            r#"{"statusCode":201,"message":"Created: The request has been fulfilled and a new resource has been created."}"#
        );
    }

    #[test]
    fn test_from_json() {
        let json = r#"{"statusCode": -1, "message": "Unknown Status Code: An unexpected error occurred."}"#;
        let result: StatusResult = serde_json::from_str(json).unwrap();
        assert_eq!(result.status_code, -1);
        assert_eq!(result.to_string(), "Unknown Status Code: An unexpected error occurred.");
    }

    #[test]
    fn test_from_json_rejects_snake_case() {
        let json = r#"{"status_code": 200, "message": "OK: The request has succeeded."}"#;
        assert!(serde_json::from_str::<StatusResult>(json).is_err());
    }
}
