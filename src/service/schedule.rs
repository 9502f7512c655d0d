//! Schedule service.

use std::sync::Arc;

use tracing::error;
use uuid::Uuid;

use crate::api::ApiResponse;
use crate::dto::{ScheduleCreateDto, ScheduleUpdateDto};
use crate::messages::schedule as msg;
use crate::service::error::ServiceError;
use crate::store::{NewSchedule, ScheduleRow, ScheduleStore, ScheduleWithTasks};

#[derive(Clone)]
pub struct ScheduleService {
    store: Arc<dyn ScheduleStore>,
}

impl ScheduleService {
    pub fn new(store: Arc<dyn ScheduleStore>) -> Self {
        Self { store }
    }

    /// Insert a new schedule. The store assigns `id` and `created_at`; the
    /// response carries the stored row with an empty task list.
    pub async fn create(
        &self,
        dto: ScheduleCreateDto,
    ) -> Result<ApiResponse<ScheduleWithTasks>, ServiceError> {
        let rows = self
            .store
            .insert(NewSchedule {
                account_id: dto.account_id,
                agent_id: dto.agent_id,
                start_time: dto.start_time,
                end_time: dto.end_time,
            })
            .await
            .map_err(|e| {
                error!(error = %e, "schedule insert failed");
                ServiceError::Internal(msg::create::ERROR)
            })?;

        let Some(row) = rows.into_iter().next() else {
            return Err(ServiceError::Internal(msg::create::ERROR));
        };

        Ok(ApiResponse::success(
            msg::create::SUCCESS,
            ScheduleWithTasks {
                schedule: row,
                tasks: Vec::new(),
            },
        ))
    }

    /// Fetch one schedule with its tasks eagerly joined.
    pub async fn fetch(&self, id: Uuid) -> Result<ApiResponse<ScheduleWithTasks>, ServiceError> {
        let rows = self.store.select_by_id(id).await.map_err(|e| {
            error!(error = %e, %id, "schedule select failed");
            ServiceError::Internal(msg::fetch::ERROR)
        })?;

        let Some(row) = rows.into_iter().next() else {
            return Err(ServiceError::NotFound(msg::fetch::NOT_FOUND));
        };

        Ok(ApiResponse::success(msg::fetch::SUCCESS, row))
    }

    /// Fetch all schedules (no task join), in store order.
    pub async fn fetch_all(&self) -> Result<ApiResponse<Vec<ScheduleRow>>, ServiceError> {
        let rows = self.store.select_all().await.map_err(|e| {
            error!(error = %e, "schedule select all failed");
            ServiceError::Internal(msg::fetch_all::ERROR)
        })?;

        Ok(ApiResponse::success(msg::fetch_all::SUCCESS, rows))
    }

    /// Full-column update. Confirms the row exists before mutating; the two
    /// round trips are not isolated against concurrent writers.
    pub async fn update(
        &self,
        dto: ScheduleUpdateDto,
    ) -> Result<ApiResponse<ScheduleRow>, ServiceError> {
        let existing = self.store.select_by_id(dto.id).await.map_err(|e| {
            error!(error = %e, id = %dto.id, "schedule existence check failed");
            ServiceError::Internal(msg::update::ERROR)
        })?;
        if existing.is_empty() {
            return Err(ServiceError::NotFound(msg::update::NOT_FOUND));
        }

        let rows = self
            .store
            .update(
                dto.id,
                NewSchedule {
                    account_id: dto.account_id,
                    agent_id: dto.agent_id,
                    start_time: dto.start_time,
                    end_time: dto.end_time,
                },
            )
            .await
            .map_err(|e| {
                error!(error = %e, id = %dto.id, "schedule update failed");
                ServiceError::Internal(msg::update::ERROR)
            })?;

        let Some(row) = rows.into_iter().next() else {
            return Err(ServiceError::NotFound(msg::update::NOT_FOUND));
        };

        Ok(ApiResponse::success(msg::update::SUCCESS, row))
    }

    /// Delete by id, then re-fetch to confirm: the store's delete response is
    /// not a reliable deletion confirmation. Owned tasks are removed by the
    /// store-level cascade.
    pub async fn delete(&self, id: Uuid) -> Result<ApiResponse<()>, ServiceError> {
        self.store.delete(id).await.map_err(|e| {
            error!(error = %e, %id, "schedule delete failed");
            ServiceError::Internal(msg::delete::ERROR)
        })?;

        let remaining = self.store.select_by_id(id).await.map_err(|e| {
            error!(error = %e, %id, "schedule delete verification failed");
            ServiceError::Internal(msg::delete::ERROR)
        })?;

        if !remaining.is_empty() {
            return Err(ServiceError::Internal(msg::delete::DATA_FOUND));
        }

        Ok(ApiResponse::success_empty(msg::delete::SUCCESS))
    }
}
