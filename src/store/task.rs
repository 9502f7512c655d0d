//! Task rows and store trait.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::dto::TaskType;
use crate::store::error::StoreResult;

/// A stored task row. `schedule_id` is a foreign key to `schedule.id`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TaskRow {
    pub id: Uuid,
    pub account_id: i64,
    pub schedule_id: Uuid,
    pub start_time: String,
    /// Duration in minutes.
    pub duration: i64,
    #[serde(rename = "type")]
    pub task_type: TaskType,
    pub created_at: String,
}

/// Column values for an insert or a full-column update.
#[derive(Debug, Clone, Serialize)]
pub struct NewTask {
    pub account_id: i64,
    pub schedule_id: Uuid,
    pub start_time: String,
    pub duration: i64,
    #[serde(rename = "type")]
    pub task_type: TaskType,
}

/// Remote access to the `task` table.
#[async_trait]
pub trait TaskStore: Send + Sync {
    /// Insert a row and return the stored representation.
    async fn insert(&self, row: NewTask) -> StoreResult<Vec<TaskRow>>;

    /// Select one task by id.
    async fn select_by_id(&self, id: Uuid) -> StoreResult<Vec<TaskRow>>;

    /// Select all tasks, unfiltered, in store order.
    async fn select_all(&self) -> StoreResult<Vec<TaskRow>>;

    /// Full-column update filtered by id.
    async fn update(&self, id: Uuid, row: NewTask) -> StoreResult<Vec<TaskRow>>;

    /// Delete filtered by id.
    async fn delete(&self, id: Uuid) -> StoreResult<()>;
}
