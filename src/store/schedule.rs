//! Schedule rows and store trait.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::store::error::StoreResult;
use crate::store::task::TaskRow;

/// A stored schedule row. `id` and `created_at` are assigned by the store and
/// never change afterwards.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScheduleRow {
    pub id: Uuid,
    pub account_id: i64,
    pub agent_id: i64,
    pub start_time: String,
    pub end_time: String,
    pub created_at: String,
}

/// A schedule with its owned tasks eagerly joined. `tasks` is an empty array
/// when the schedule has none.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScheduleWithTasks {
    #[serde(flatten)]
    pub schedule: ScheduleRow,
    pub tasks: Vec<TaskRow>,
}

/// Column values for an insert or a full-column update.
#[derive(Debug, Clone, Serialize)]
pub struct NewSchedule {
    pub account_id: i64,
    pub agent_id: i64,
    pub start_time: String,
    pub end_time: String,
}

/// Remote access to the `schedule` table.
///
/// Methods return the raw row lists the store produced; interpreting an empty
/// list (not found) or the first element (single-row writes) is up to the
/// service layer. Deleting a schedule cascades to its tasks at the store
/// level; this layer does not enumerate tasks itself.
#[async_trait]
pub trait ScheduleStore: Send + Sync {
    /// Insert a row and return the stored representation.
    async fn insert(&self, row: NewSchedule) -> StoreResult<Vec<ScheduleRow>>;

    /// Select one schedule by id, with its tasks joined.
    async fn select_by_id(&self, id: Uuid) -> StoreResult<Vec<ScheduleWithTasks>>;

    /// Select all schedules (no task join), in store order.
    async fn select_all(&self) -> StoreResult<Vec<ScheduleRow>>;

    /// Full-column update filtered by id.
    async fn update(&self, id: Uuid, row: NewSchedule) -> StoreResult<Vec<ScheduleRow>>;

    /// Delete filtered by id. The response is not a reliable deletion
    /// confirmation; callers re-fetch to verify.
    async fn delete(&self, id: Uuid) -> StoreResult<()>;
}
