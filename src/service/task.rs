//! Task service.
//!
//! Same shape as the schedule service with two documented quirks kept from
//! the existing contract: creation reports store failure through a
//! `success: false` envelope instead of a typed error, and fetch-all is
//! unfiltered (no schedule scoping).

use std::sync::Arc;

use tracing::{error, warn};
use uuid::Uuid;

use crate::api::ApiResponse;
use crate::dto::{TaskCreateDto, TaskUpdateDto};
use crate::messages::task as msg;
use crate::service::error::ServiceError;
use crate::store::{NewTask, TaskRow, TaskStore};

#[derive(Clone)]
pub struct TaskService {
    store: Arc<dyn TaskStore>,
}

impl TaskService {
    pub fn new(store: Arc<dyn TaskStore>) -> Self {
        Self { store }
    }

    /// Insert a new task. Store failures come back as a failure envelope,
    /// not an error.
    pub async fn create(&self, dto: TaskCreateDto) -> ApiResponse<TaskRow> {
        let result = self
            .store
            .insert(NewTask {
                account_id: dto.account_id,
                schedule_id: dto.schedule_id,
                start_time: dto.start_time,
                duration: dto.duration,
                task_type: dto.task_type,
            })
            .await;

        match result {
            Ok(rows) => match rows.into_iter().next() {
                Some(row) => ApiResponse::success(msg::create::SUCCESS, row),
                None => ApiResponse::failure(msg::create::ERROR),
            },
            Err(e) => {
                warn!(error = %e, "task insert failed");
                ApiResponse::failure(msg::create::ERROR)
            }
        }
    }

    /// Fetch one task by id. A store error and an empty result both surface
    /// as not-found.
    pub async fn fetch(&self, id: Uuid) -> Result<ApiResponse<TaskRow>, ServiceError> {
        let rows = match self.store.select_by_id(id).await {
            Ok(rows) => rows,
            Err(e) => {
                error!(error = %e, %id, "task select failed");
                return Err(ServiceError::NotFound(msg::fetch::NOT_FOUND));
            }
        };

        let Some(row) = rows.into_iter().next() else {
            return Err(ServiceError::NotFound(msg::fetch::NOT_FOUND));
        };

        Ok(ApiResponse::success(msg::fetch::SUCCESS, row))
    }

    /// Fetch all tasks, unfiltered, in store order.
    pub async fn fetch_all(&self) -> Result<ApiResponse<Vec<TaskRow>>, ServiceError> {
        let rows = self.store.select_all().await.map_err(|e| {
            error!(error = %e, "task select all failed");
            ServiceError::Internal(msg::fetch_all::ERROR)
        })?;

        Ok(ApiResponse::success(msg::fetch_all::SUCCESS, rows))
    }

    /// Full-column update. Confirms existence via `fetch` first, propagating
    /// its not-found.
    pub async fn update(&self, dto: TaskUpdateDto) -> Result<ApiResponse<TaskRow>, ServiceError> {
        self.fetch(dto.id).await?;

        let rows = self
            .store
            .update(
                dto.id,
                NewTask {
                    account_id: dto.account_id,
                    schedule_id: dto.schedule_id,
                    start_time: dto.start_time,
                    duration: dto.duration,
                    task_type: dto.task_type,
                },
            )
            .await
            .map_err(|e| {
                error!(error = %e, id = %dto.id, "task update failed");
                ServiceError::Internal(msg::update::ERROR)
            })?;

        let Some(row) = rows.into_iter().next() else {
            return Err(ServiceError::Internal(msg::update::ERROR));
        };

        Ok(ApiResponse::success(msg::update::SUCCESS, row))
    }

    /// Delete by id. Confirms existence via `fetch` first; no post-delete
    /// verification, unlike the schedule service.
    pub async fn delete(&self, id: Uuid) -> Result<ApiResponse<()>, ServiceError> {
        self.fetch(id).await?;

        self.store.delete(id).await.map_err(|e| {
            error!(error = %e, %id, "task delete failed");
            ServiceError::Internal(msg::delete::ERROR)
        })?;

        Ok(ApiResponse::success_empty(msg::delete::SUCCESS))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use crate::dto::TaskType;
    use crate::store::{StoreError, StoreResult};

    fn store_error() -> StoreError {
        StoreError::Api {
            status: 500,
            message: "boom".to_string(),
        }
    }

    fn sample_row() -> TaskRow {
        TaskRow {
            id: Uuid::new_v4(),
            account_id: 1,
            schedule_id: Uuid::new_v4(),
            start_time: "2024-05-06T09:00:00Z".to_string(),
            duration: 30,
            task_type: TaskType::Work,
            created_at: "2024-05-01T00:00:00Z".to_string(),
        }
    }

    fn create_dto() -> TaskCreateDto {
        TaskCreateDto {
            account_id: 1,
            schedule_id: Uuid::new_v4(),
            start_time: "2024-05-06T09:00:00Z".to_string(),
            duration: 30,
            task_type: TaskType::Work,
        }
    }

    struct FailingStore;

    #[async_trait]
    impl TaskStore for FailingStore {
        async fn insert(&self, _row: NewTask) -> StoreResult<Vec<TaskRow>> {
            Err(store_error())
        }
        async fn select_by_id(&self, _id: Uuid) -> StoreResult<Vec<TaskRow>> {
            Err(store_error())
        }
        async fn select_all(&self) -> StoreResult<Vec<TaskRow>> {
            Err(store_error())
        }
        async fn update(&self, _id: Uuid, _row: NewTask) -> StoreResult<Vec<TaskRow>> {
            Err(store_error())
        }
        async fn delete(&self, _id: Uuid) -> StoreResult<()> {
            Err(store_error())
        }
    }

    struct EmptyStore;

    #[async_trait]
    impl TaskStore for EmptyStore {
        async fn insert(&self, _row: NewTask) -> StoreResult<Vec<TaskRow>> {
            Ok(Vec::new())
        }
        async fn select_by_id(&self, _id: Uuid) -> StoreResult<Vec<TaskRow>> {
            Ok(Vec::new())
        }
        async fn select_all(&self) -> StoreResult<Vec<TaskRow>> {
            Ok(Vec::new())
        }
        async fn update(&self, _id: Uuid, _row: NewTask) -> StoreResult<Vec<TaskRow>> {
            Ok(Vec::new())
        }
        async fn delete(&self, _id: Uuid) -> StoreResult<()> {
            Ok(())
        }
    }

    #[tokio::test]
    async fn test_create_store_error_returns_failure_envelope() {
        let service = TaskService::new(Arc::new(FailingStore));
        let envelope = service.create(create_dto()).await;
        assert!(!envelope.success);
        assert_eq!(envelope.message, msg::create::ERROR);
        assert!(envelope.data.is_none());
    }

    #[tokio::test]
    async fn test_fetch_store_error_is_not_found() {
        let service = TaskService::new(Arc::new(FailingStore));
        let err = service.fetch(Uuid::new_v4()).await.unwrap_err();
        assert_eq!(err, ServiceError::NotFound(msg::fetch::NOT_FOUND));
    }

    #[tokio::test]
    async fn test_fetch_empty_is_not_found() {
        let service = TaskService::new(Arc::new(EmptyStore));
        let err = service.fetch(Uuid::new_v4()).await.unwrap_err();
        assert_eq!(err, ServiceError::NotFound(msg::fetch::NOT_FOUND));
    }

    #[tokio::test]
    async fn test_update_missing_propagates_not_found() {
        let service = TaskService::new(Arc::new(EmptyStore));
        let row = sample_row();
        let dto = TaskUpdateDto {
            id: row.id,
            account_id: row.account_id,
            schedule_id: row.schedule_id,
            start_time: row.start_time,
            duration: row.duration,
            task_type: row.task_type,
        };
        let err = service.update(dto).await.unwrap_err();
        assert_eq!(err, ServiceError::NotFound(msg::fetch::NOT_FOUND));
    }

    #[tokio::test]
    async fn test_delete_missing_propagates_not_found() {
        let service = TaskService::new(Arc::new(EmptyStore));
        let err = service.delete(Uuid::new_v4()).await.unwrap_err();
        assert_eq!(err, ServiceError::NotFound(msg::fetch::NOT_FOUND));
    }

    #[tokio::test]
    async fn test_fetch_all_store_error_is_internal() {
        let service = TaskService::new(Arc::new(FailingStore));
        let err = service.fetch_all().await.unwrap_err();
        assert_eq!(err, ServiceError::Internal(msg::fetch_all::ERROR));
    }
}
