//! # Response Envelope
//!
//! The `{success, data, message, error, count}` JSON wrapper returned by
//! every endpoint. Absent fields are omitted from the serialized body.

use serde::Serialize;

/// Standard response envelope
#[derive(Debug, Clone, Serialize)]
pub struct ApiResponse<T: Serialize> {
    pub success: bool,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub count: Option<usize>,
}

impl<T: Serialize> ApiResponse<T> {
    /// Successful response carrying data
    pub fn ok(data: T) -> Self {
        Self {
            success: true,
            data: Some(data),
            message: None,
            error: None,
            count: None,
        }
    }

    /// Successful list response with an element count
    pub fn ok_with_count(data: T, count: usize) -> Self {
        Self {
            count: Some(count),
            ..Self::ok(data)
        }
    }

    /// Successful mutation response with a human-readable message
    pub fn ok_with_message(data: T, message: impl Into<String>) -> Self {
        Self {
            message: Some(message.into()),
            ..Self::ok(data)
        }
    }
}

impl ApiResponse<()> {
    /// Failed response with a message and no data
    pub fn failure(message: impl Into<String>) -> Self {
        Self {
            success: false,
            data: None,
            message: Some(message.into()),
            error: None,
            count: None,
        }
    }

    /// Failed response carrying an underlying error detail
    pub fn failure_with_error(message: impl Into<String>, error: impl Into<String>) -> Self {
        Self {
            error: Some(error.into()),
            ..Self::failure(message)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_ok_omits_absent_fields() {
        let response = ApiResponse::ok(json!({"id": 1}));
        let json = serde_json::to_value(&response).unwrap();

        assert_eq!(json["success"], true);
        assert_eq!(json["data"]["id"], 1);
        assert!(json.get("message").is_none());
        assert!(json.get("count").is_none());
    }

    #[test]
    fn test_list_envelope_has_count() {
        let response = ApiResponse::ok_with_count(vec![json!({"id": 1}), json!({"id": 2})], 2);
        let json = serde_json::to_value(&response).unwrap();

        assert_eq!(json["count"], 2);
    }

    #[test]
    fn test_failure_envelope() {
        let response = ApiResponse::failure_with_error("Unexpected server error", "lock poisoned");
        let json = serde_json::to_value(&response).unwrap();

        assert_eq!(json["success"], false);
        assert_eq!(json["message"], "Unexpected server error");
        assert_eq!(json["error"], "lock poisoned");
        assert!(json.get("data").is_none());
    }
}
