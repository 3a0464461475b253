//! Controller Maintenance

use sqlx::PgPool;
use uuid::Uuid;
use validator::Validate;

use crate::dto::maintenance_dto::{CreateMaintenanceRequest, UpdateMaintenanceRequest};
use crate::models::maintenance::MaintenanceRecord;
use crate::repositories::ambulance_repository::AmbulanceRepository;
use crate::repositories::maintenance_repository::MaintenanceRepository;
use crate::utils::errors::AppError;

pub struct MaintenanceController {
    repository: MaintenanceRepository,
    ambulances: AmbulanceRepository,
}

impl MaintenanceController {
    pub fn new(pool: PgPool) -> Self {
        Self {
            repository: MaintenanceRepository::new(pool.clone()),
            ambulances: AmbulanceRepository::new(pool),
        }
    }

    pub async fn list(&self, skip: i64, limit: i64) -> Result<Vec<MaintenanceRecord>, AppError> {
        self.repository.list(skip, limit).await
    }

    pub async fn list_by_ambulance(
        &self,
        ambulance_id: Uuid,
    ) -> Result<Vec<MaintenanceRecord>, AppError> {
        if self.ambulances.find_by_id(ambulance_id).await?.is_none() {
            return Err(AppError::NotFound("Ambulance not found".to_string()));
        }

        self.repository.list_by_ambulance(ambulance_id).await
    }

    pub async fn get_by_id(&self, id: Uuid) -> Result<MaintenanceRecord, AppError> {
        self.repository
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound("Maintenance record not found".to_string()))
    }

    pub async fn create(
        &self,
        request: CreateMaintenanceRequest,
    ) -> Result<MaintenanceRecord, AppError> {
        request.validate()?;

        if self
            .ambulances
            .find_by_id(request.ambulance_id)
            .await?
            .is_none()
        {
            return Err(AppError::NotFound("Ambulance not found".to_string()));
        }

        self.repository.create(request).await
    }

    pub async fn update(
        &self,
        id: Uuid,
        request: UpdateMaintenanceRequest,
    ) -> Result<MaintenanceRecord, AppError> {
        request.validate()?;
        self.repository.update(id, request).await
    }

    pub async fn delete(&self, id: Uuid) -> Result<(), AppError> {
        if !self.repository.delete(id).await? {
            return Err(AppError::NotFound("Maintenance record not found".to_string()));
        }
        Ok(())
    }
}
