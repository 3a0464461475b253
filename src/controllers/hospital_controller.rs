//! Controller Hospital

use sqlx::PgPool;
use uuid::Uuid;
use validator::Validate;

use crate::dto::hospital_dto::{CreateHospitalRequest, UpdateHospitalRequest};
use crate::models::hospital::Hospital;
use crate::repositories::hospital_repository::HospitalRepository;
use crate::utils::errors::AppError;

pub struct HospitalController {
    repository: HospitalRepository,
}

impl HospitalController {
    pub fn new(pool: PgPool) -> Self {
        Self {
            repository: HospitalRepository::new(pool),
        }
    }

    pub async fn list(&self, skip: i64, limit: i64) -> Result<Vec<Hospital>, AppError> {
        self.repository.list(skip, limit).await
    }

    pub async fn list_active(&self) -> Result<Vec<Hospital>, AppError> {
        self.repository.list_active().await
    }

    pub async fn get_by_id(&self, id: Uuid) -> Result<Hospital, AppError> {
        self.repository
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound("Hospital not found".to_string()))
    }

    pub async fn create(&self, request: CreateHospitalRequest) -> Result<Hospital, AppError> {
        request.validate()?;
        self.repository.create(request).await
    }

    pub async fn update(
        &self,
        id: Uuid,
        request: UpdateHospitalRequest,
    ) -> Result<Hospital, AppError> {
        request.validate()?;
        self.repository.update(id, request).await
    }

    pub async fn delete(&self, id: Uuid) -> Result<(), AppError> {
        if !self.repository.delete(id).await? {
            return Err(AppError::NotFound("Hospital not found".to_string()));
        }
        Ok(())
    }
}
