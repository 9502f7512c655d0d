//! Supabase (PostgREST) implementation of the store traits.
//!
//! One instance is built at startup from the process configuration and shared
//! by both services for the lifetime of the process. All data access uses the
//! service role key.

use async_trait::async_trait;
use reqwest::{Client, Method, RequestBuilder, Response};
use serde::de::DeserializeOwned;
use uuid::Uuid;

use crate::store::error::{StoreError, StoreResult};
use crate::store::schedule::{NewSchedule, ScheduleRow, ScheduleStore, ScheduleWithTasks};
use crate::store::task::{NewTask, TaskRow, TaskStore};

const SCHEDULE_TABLE: &str = "schedule";
const TASK_TABLE: &str = "task";

/// PostgREST embed clause joining a schedule with its tasks.
const SCHEDULE_WITH_TASKS: &str = "*,tasks:task(*)";

#[derive(Debug, Clone)]
pub struct SupabaseStore {
    http: Client,
    rest_url: String,
    service_role_key: String,
}

impl SupabaseStore {
    /// Create a store client for the given instance.
    ///
    /// Example: `SupabaseStore::new(client, "https://xyz.supabase.co", key)`
    #[must_use]
    pub fn new(http: Client, instance_url: &str, service_role_key: impl Into<String>) -> Self {
        Self {
            http,
            rest_url: format!("{}/rest/v1", instance_url.trim_end_matches('/')),
            service_role_key: service_role_key.into(),
        }
    }

    fn table_url(&self, table: &str) -> String {
        format!("{}/{}", self.rest_url, table)
    }

    /// Build a request with the PostgREST auth headers.
    fn request(&self, method: Method, url: &str) -> RequestBuilder {
        self.http
            .request(method, url)
            .header("apikey", &self.service_role_key)
            .header(
                "Authorization",
                format!("Bearer {}", self.service_role_key),
            )
            .header("Content-Type", "application/json")
    }

    /// Decode a PostgREST row-list response, mapping non-success statuses to
    /// `StoreError::Api`.
    async fn rows<T: DeserializeOwned>(&self, response: Response) -> StoreResult<Vec<T>> {
        let status = response.status();
        let body = response.text().await?;

        if !status.is_success() {
            return Err(StoreError::Api {
                status: status.as_u16(),
                message: body,
            });
        }

        Ok(serde_json::from_str(&body)?)
    }

    /// Check the status of a response whose body we do not interpret.
    async fn check_status(&self, response: Response) -> StoreResult<()> {
        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(StoreError::Api {
                status: status.as_u16(),
                message: body,
            });
        }
        Ok(())
    }
}

#[async_trait]
impl ScheduleStore for SupabaseStore {
    async fn insert(&self, row: NewSchedule) -> StoreResult<Vec<ScheduleRow>> {
        let response = self
            .request(Method::POST, &self.table_url(SCHEDULE_TABLE))
            .header("Prefer", "return=representation")
            .json(&row)
            .send()
            .await?;
        self.rows(response).await
    }

    async fn select_by_id(&self, id: Uuid) -> StoreResult<Vec<ScheduleWithTasks>> {
        let url = format!(
            "{}?select={}&id=eq.{}",
            self.table_url(SCHEDULE_TABLE),
            SCHEDULE_WITH_TASKS,
            id
        );
        let response = self.request(Method::GET, &url).send().await?;
        self.rows(response).await
    }

    async fn select_all(&self) -> StoreResult<Vec<ScheduleRow>> {
        let url = format!("{}?select=*", self.table_url(SCHEDULE_TABLE));
        let response = self.request(Method::GET, &url).send().await?;
        self.rows(response).await
    }

    async fn update(&self, id: Uuid, row: NewSchedule) -> StoreResult<Vec<ScheduleRow>> {
        let url = format!("{}?id=eq.{}", self.table_url(SCHEDULE_TABLE), id);
        let response = self
            .request(Method::PATCH, &url)
            .header("Prefer", "return=representation")
            .json(&row)
            .send()
            .await?;
        self.rows(response).await
    }

    async fn delete(&self, id: Uuid) -> StoreResult<()> {
        let url = format!("{}?id=eq.{}", self.table_url(SCHEDULE_TABLE), id);
        let response = self.request(Method::DELETE, &url).send().await?;
        self.check_status(response).await
    }
}

#[async_trait]
impl TaskStore for SupabaseStore {
    async fn insert(&self, row: NewTask) -> StoreResult<Vec<TaskRow>> {
        let response = self
            .request(Method::POST, &self.table_url(TASK_TABLE))
            .header("Prefer", "return=representation")
            .json(&row)
            .send()
            .await?;
        self.rows(response).await
    }

    async fn select_by_id(&self, id: Uuid) -> StoreResult<Vec<TaskRow>> {
        let url = format!("{}?select=*&id=eq.{}", self.table_url(TASK_TABLE), id);
        let response = self.request(Method::GET, &url).send().await?;
        self.rows(response).await
    }

    async fn select_all(&self) -> StoreResult<Vec<TaskRow>> {
        let url = format!("{}?select=*", self.table_url(TASK_TABLE));
        let response = self.request(Method::GET, &url).send().await?;
        self.rows(response).await
    }

    async fn update(&self, id: Uuid, row: NewTask) -> StoreResult<Vec<TaskRow>> {
        let url = format!("{}?id=eq.{}", self.table_url(TASK_TABLE), id);
        let response = self
            .request(Method::PATCH, &url)
            .header("Prefer", "return=representation")
            .json(&row)
            .send()
            .await?;
        self.rows(response).await
    }

    async fn delete(&self, id: Uuid) -> StoreResult<()> {
        let url = format!("{}?id=eq.{}", self.table_url(TASK_TABLE), id);
        let response = self.request(Method::DELETE, &url).send().await?;
        self.check_status(response).await
    }
}
