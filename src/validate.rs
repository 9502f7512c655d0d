//! Explicit input validation.
//!
//! Field checks run against the raw JSON body before any service call and
//! collect per-field constraint messages. One entry per violated field: the
//! first failed constraint wins.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::Serialize;
use serde_json::Value;
use uuid::Uuid;

use crate::dto::TaskType;

// ============================================================================
// Rejection Body
// ============================================================================

/// 400 response enumerating each violated field.
#[derive(Debug, Serialize)]
pub struct ValidationRejection {
    pub message: Vec<String>,
    pub error: &'static str,
    #[serde(rename = "statusCode")]
    pub status_code: u16,
}

impl From<Vec<String>> for ValidationRejection {
    fn from(message: Vec<String>) -> Self {
        Self {
            message,
            error: "Bad Request",
            status_code: 400,
        }
    }
}

impl IntoResponse for ValidationRejection {
    fn into_response(self) -> Response {
        (StatusCode::BAD_REQUEST, Json(self)).into_response()
    }
}

// ============================================================================
// Field Checks
// ============================================================================

/// Look up a field, recording "should not be empty" when it is missing,
/// null, or an empty string.
fn present<'a>(body: &'a Value, field: &str, violations: &mut Vec<String>) -> Option<&'a Value> {
    match body.get(field) {
        None | Some(Value::Null) => {
            violations.push(format!("{field} should not be empty"));
            None
        }
        Some(Value::String(s)) if s.is_empty() => {
            violations.push(format!("{field} should not be empty"));
            None
        }
        Some(value) => Some(value),
    }
}

/// Required integer field.
pub fn require_number(body: &Value, field: &str, violations: &mut Vec<String>) -> Option<i64> {
    let value = present(body, field, violations)?;
    match value.as_i64() {
        Some(n) => Some(n),
        None => {
            violations.push(format!(
                "{field} must be a number conforming to the specified constraints"
            ));
            None
        }
    }
}

/// Required non-empty string field.
pub fn require_string(body: &Value, field: &str, violations: &mut Vec<String>) -> Option<String> {
    let value = present(body, field, violations)?;
    match value.as_str() {
        Some(s) => Some(s.to_string()),
        None => {
            violations.push(format!("{field} must be a string"));
            None
        }
    }
}

/// Required field that must parse as a UUID.
pub fn require_uuid(body: &Value, field: &str, violations: &mut Vec<String>) -> Option<Uuid> {
    let value = present(body, field, violations)?;
    match value.as_str().and_then(|s| Uuid::parse_str(s).ok()) {
        Some(id) => Some(id),
        None => {
            violations.push(format!("{field} must be a UUID"));
            None
        }
    }
}

/// Required task type field, one of `break` | `work`.
pub fn require_task_type(
    body: &Value,
    field: &str,
    violations: &mut Vec<String>,
) -> Option<TaskType> {
    let value = present(body, field, violations)?;
    match value.as_str() {
        Some("work") => Some(TaskType::Work),
        Some("break") => Some(TaskType::Break),
        _ => {
            violations.push(format!(
                "{field} must be one of the following values: break, work"
            ));
            None
        }
    }
}

/// Validate a path-supplied id.
pub fn validate_path_id(id: &str) -> Result<Uuid, Vec<String>> {
    Uuid::parse_str(id).map_err(|_| vec!["id must be a UUID".to_string()])
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_missing_field_reports_not_empty() {
        let mut violations = Vec::new();
        assert!(require_number(&json!({}), "accountId", &mut violations).is_none());
        assert_eq!(violations, vec!["accountId should not be empty"]);
    }

    #[test]
    fn test_empty_string_reports_not_empty() {
        let mut violations = Vec::new();
        assert!(require_string(&json!({"startTime": ""}), "startTime", &mut violations).is_none());
        assert_eq!(violations, vec!["startTime should not be empty"]);
    }

    #[test]
    fn test_non_numeric_field() {
        let mut violations = Vec::new();
        let body = json!({"duration": "soon"});
        assert!(require_number(&body, "duration", &mut violations).is_none());
        assert_eq!(
            violations,
            vec!["duration must be a number conforming to the specified constraints"]
        );
    }

    #[test]
    fn test_malformed_uuid() {
        let mut violations = Vec::new();
        let body = json!({"scheduleId": "not-a-uuid"});
        assert!(require_uuid(&body, "scheduleId", &mut violations).is_none());
        assert_eq!(violations, vec!["scheduleId must be a UUID"]);
    }

    #[test]
    fn test_task_type_enum() {
        let mut violations = Vec::new();
        let body = json!({"type": "nap"});
        assert!(require_task_type(&body, "type", &mut violations).is_none());
        assert_eq!(
            violations,
            vec!["type must be one of the following values: break, work"]
        );

        let mut violations = Vec::new();
        let body = json!({"type": "break"});
        assert_eq!(
            require_task_type(&body, "type", &mut violations),
            Some(TaskType::Break)
        );
        assert!(violations.is_empty());
    }

    #[test]
    fn test_path_id() {
        assert!(validate_path_id("123e4567-e89b-12d3-a456-426614174000").is_ok());
        assert_eq!(
            validate_path_id("123").unwrap_err(),
            vec!["id must be a UUID"]
        );
    }
}
