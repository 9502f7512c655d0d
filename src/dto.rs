//! Validated request shapes.
//!
//! Each DTO binds from a raw JSON body via `from_value`, returning either the
//! typed shape or the full list of field violations. Update shapes duplicate
//! the create fields plus an `id` rather than embedding them.

use serde::{Deserialize, Serialize};
use serde_json::Value;
use uuid::Uuid;

use crate::validate::{require_number, require_string, require_task_type, require_uuid};

// ============================================================================
// Task Type
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TaskType {
    Work,
    Break,
}

// ============================================================================
// Schedule DTOs
// ============================================================================

#[derive(Debug, Clone)]
pub struct ScheduleCreateDto {
    pub account_id: i64,
    pub agent_id: i64,
    pub start_time: String,
    pub end_time: String,
}

impl ScheduleCreateDto {
    pub fn from_value(body: &Value) -> Result<Self, Vec<String>> {
        let mut violations = Vec::new();

        let account_id = require_number(body, "accountId", &mut violations);
        let agent_id = require_number(body, "agentId", &mut violations);
        let start_time = require_string(body, "startTime", &mut violations);
        let end_time = require_string(body, "endTime", &mut violations);

        match (account_id, agent_id, start_time, end_time) {
            (Some(account_id), Some(agent_id), Some(start_time), Some(end_time)) => Ok(Self {
                account_id,
                agent_id,
                start_time,
                end_time,
            }),
            _ => Err(violations),
        }
    }
}

#[derive(Debug, Clone)]
pub struct ScheduleUpdateDto {
    pub id: Uuid,
    pub account_id: i64,
    pub agent_id: i64,
    pub start_time: String,
    pub end_time: String,
}

impl ScheduleUpdateDto {
    pub fn from_value(body: &Value) -> Result<Self, Vec<String>> {
        let mut violations = Vec::new();

        let id = require_uuid(body, "id", &mut violations);
        let account_id = require_number(body, "accountId", &mut violations);
        let agent_id = require_number(body, "agentId", &mut violations);
        let start_time = require_string(body, "startTime", &mut violations);
        let end_time = require_string(body, "endTime", &mut violations);

        match (id, account_id, agent_id, start_time, end_time) {
            (Some(id), Some(account_id), Some(agent_id), Some(start_time), Some(end_time)) => {
                Ok(Self {
                    id,
                    account_id,
                    agent_id,
                    start_time,
                    end_time,
                })
            }
            _ => Err(violations),
        }
    }
}

// ============================================================================
// Task DTOs
// ============================================================================

#[derive(Debug, Clone)]
pub struct TaskCreateDto {
    pub account_id: i64,
    pub schedule_id: Uuid,
    pub start_time: String,
    pub duration: i64,
    pub task_type: TaskType,
}

impl TaskCreateDto {
    pub fn from_value(body: &Value) -> Result<Self, Vec<String>> {
        let mut violations = Vec::new();

        let account_id = require_number(body, "accountId", &mut violations);
        let schedule_id = require_uuid(body, "scheduleId", &mut violations);
        let start_time = require_string(body, "startTime", &mut violations);
        let duration = require_number(body, "duration", &mut violations);
        let task_type = require_task_type(body, "type", &mut violations);

        match (account_id, schedule_id, start_time, duration, task_type) {
            (Some(account_id), Some(schedule_id), Some(start_time), Some(duration), Some(task_type)) => {
                Ok(Self {
                    account_id,
                    schedule_id,
                    start_time,
                    duration,
                    task_type,
                })
            }
            _ => Err(violations),
        }
    }
}

#[derive(Debug, Clone)]
pub struct TaskUpdateDto {
    pub id: Uuid,
    pub account_id: i64,
    pub schedule_id: Uuid,
    pub start_time: String,
    pub duration: i64,
    pub task_type: TaskType,
}

impl TaskUpdateDto {
    pub fn from_value(body: &Value) -> Result<Self, Vec<String>> {
        let mut violations = Vec::new();

        let id = require_uuid(body, "id", &mut violations);
        let account_id = require_number(body, "accountId", &mut violations);
        let schedule_id = require_uuid(body, "scheduleId", &mut violations);
        let start_time = require_string(body, "startTime", &mut violations);
        let duration = require_number(body, "duration", &mut violations);
        let task_type = require_task_type(body, "type", &mut violations);

        match (id, account_id, schedule_id, start_time, duration, task_type) {
            (
                Some(id),
                Some(account_id),
                Some(schedule_id),
                Some(start_time),
                Some(duration),
                Some(task_type),
            ) => Ok(Self {
                id,
                account_id,
                schedule_id,
                start_time,
                duration,
                task_type,
            }),
            _ => Err(violations),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_schedule_create_valid() {
        let body = json!({
            "accountId": 1,
            "agentId": 6,
            "startTime": "2024-05-06T09:00:00Z",
            "endTime": "2024-05-06T17:00:00Z"
        });
        let dto = ScheduleCreateDto::from_value(&body).unwrap();
        assert_eq!(dto.account_id, 1);
        assert_eq!(dto.agent_id, 6);
    }

    #[test]
    fn test_schedule_create_collects_all_violations() {
        let violations = ScheduleCreateDto::from_value(&json!({})).unwrap_err();
        assert_eq!(violations.len(), 4);
        assert!(violations.contains(&"accountId should not be empty".to_string()));
        assert!(violations.contains(&"endTime should not be empty".to_string()));
    }

    #[test]
    fn test_task_create_bad_type_single_violation() {
        let body = json!({
            "accountId": 1,
            "scheduleId": "123e4567-e89b-12d3-a456-426614174000",
            "startTime": "2024-05-06T09:00:00Z",
            "duration": 30,
            "type": "nap"
        });
        let violations = TaskCreateDto::from_value(&body).unwrap_err();
        assert_eq!(
            violations,
            vec!["type must be one of the following values: break, work"]
        );
    }

    #[test]
    fn test_task_update_requires_uuid_id() {
        let body = json!({
            "id": "17",
            "accountId": 1,
            "scheduleId": "123e4567-e89b-12d3-a456-426614174000",
            "startTime": "2024-05-06T09:00:00Z",
            "duration": 30,
            "type": "work"
        });
        let violations = TaskUpdateDto::from_value(&body).unwrap_err();
        assert_eq!(violations, vec!["id must be a UUID"]);
    }

    #[test]
    fn test_task_type_serializes_lowercase() {
        assert_eq!(serde_json::to_value(TaskType::Break).unwrap(), "break");
        assert_eq!(serde_json::to_value(TaskType::Work).unwrap(), "work");
    }
}
