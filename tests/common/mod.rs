//! Common test utilities.

use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use axum::body::Body;
use axum::http::Request;
use axum::response::Response;
use axum::Router;
use chrono::Utc;
use http_body_util::BodyExt;
use serde_json::Value;
use uuid::Uuid;

use rosterd::server::{self, AppState};
use rosterd::service::{ScheduleService, TaskService};
use rosterd::store::{
    NewSchedule, NewTask, ScheduleRow, ScheduleStore, ScheduleWithTasks, StoreResult, TaskRow,
    TaskStore,
};

pub const TEST_API_KEY: &str = "test-api-key";

/// In-memory stand-in for the remote store. Implements both store traits over
/// shared vectors, including the schedule-to-task delete cascade the real
/// store performs via its foreign key.
#[derive(Default)]
pub struct InMemoryStore {
    schedules: Mutex<Vec<ScheduleRow>>,
    tasks: Mutex<Vec<TaskRow>>,
}

#[async_trait]
impl ScheduleStore for InMemoryStore {
    async fn insert(&self, row: NewSchedule) -> StoreResult<Vec<ScheduleRow>> {
        let stored = ScheduleRow {
            id: Uuid::new_v4(),
            account_id: row.account_id,
            agent_id: row.agent_id,
            start_time: row.start_time,
            end_time: row.end_time,
            created_at: Utc::now().to_rfc3339(),
        };
        self.schedules.lock().unwrap().push(stored.clone());
        Ok(vec![stored])
    }

    async fn select_by_id(&self, id: Uuid) -> StoreResult<Vec<ScheduleWithTasks>> {
        let schedules = self.schedules.lock().unwrap();
        let tasks = self.tasks.lock().unwrap();
        Ok(schedules
            .iter()
            .filter(|s| s.id == id)
            .map(|s| ScheduleWithTasks {
                schedule: s.clone(),
                tasks: tasks.iter().filter(|t| t.schedule_id == id).cloned().collect(),
            })
            .collect())
    }

    async fn select_all(&self) -> StoreResult<Vec<ScheduleRow>> {
        Ok(self.schedules.lock().unwrap().clone())
    }

    async fn update(&self, id: Uuid, row: NewSchedule) -> StoreResult<Vec<ScheduleRow>> {
        let mut schedules = self.schedules.lock().unwrap();
        let Some(stored) = schedules.iter_mut().find(|s| s.id == id) else {
            return Ok(Vec::new());
        };
        stored.account_id = row.account_id;
        stored.agent_id = row.agent_id;
        stored.start_time = row.start_time;
        stored.end_time = row.end_time;
        Ok(vec![stored.clone()])
    }

    async fn delete(&self, id: Uuid) -> StoreResult<()> {
        self.schedules.lock().unwrap().retain(|s| s.id != id);
        // FK cascade: removing a schedule removes its tasks
        self.tasks.lock().unwrap().retain(|t| t.schedule_id != id);
        Ok(())
    }
}

#[async_trait]
impl TaskStore for InMemoryStore {
    async fn insert(&self, row: NewTask) -> StoreResult<Vec<TaskRow>> {
        let stored = TaskRow {
            id: Uuid::new_v4(),
            account_id: row.account_id,
            schedule_id: row.schedule_id,
            start_time: row.start_time,
            duration: row.duration,
            task_type: row.task_type,
            created_at: Utc::now().to_rfc3339(),
        };
        self.tasks.lock().unwrap().push(stored.clone());
        Ok(vec![stored])
    }

    async fn select_by_id(&self, id: Uuid) -> StoreResult<Vec<TaskRow>> {
        Ok(self
            .tasks
            .lock()
            .unwrap()
            .iter()
            .filter(|t| t.id == id)
            .cloned()
            .collect())
    }

    async fn select_all(&self) -> StoreResult<Vec<TaskRow>> {
        Ok(self.tasks.lock().unwrap().clone())
    }

    async fn update(&self, id: Uuid, row: NewTask) -> StoreResult<Vec<TaskRow>> {
        let mut tasks = self.tasks.lock().unwrap();
        let Some(stored) = tasks.iter_mut().find(|t| t.id == id) else {
            return Ok(Vec::new());
        };
        stored.account_id = row.account_id;
        stored.schedule_id = row.schedule_id;
        stored.start_time = row.start_time;
        stored.duration = row.duration;
        stored.task_type = row.task_type;
        Ok(vec![stored.clone()])
    }

    async fn delete(&self, id: Uuid) -> StoreResult<()> {
        self.tasks.lock().unwrap().retain(|t| t.id != id);
        Ok(())
    }
}

/// Create a test app backed by an in-memory store.
pub fn test_app() -> Router {
    let store = Arc::new(InMemoryStore::default());
    let state = AppState {
        schedules: ScheduleService::new(store.clone()),
        tasks: TaskService::new(store),
        api_keys: Arc::new(vec![TEST_API_KEY.to_string()]),
    };
    server::build_app(state, 30, 100)
}

/// Build an authenticated JSON request.
pub fn json_request(method: &str, uri: &str, body: Value) -> Request<Body> {
    Request::builder()
        .method(method)
        .uri(uri)
        .header("apikey", TEST_API_KEY)
        .header("content-type", "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

/// Build an authenticated request with no body.
pub fn request(method: &str, uri: &str) -> Request<Body> {
    Request::builder()
        .method(method)
        .uri(uri)
        .header("apikey", TEST_API_KEY)
        .body(Body::empty())
        .unwrap()
}

/// Collect a response body as JSON.
pub async fn body_json(response: Response) -> Value {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}
