//! Controller Ambulance
//!
//! Validation des requests et contrôle d'unicité de la plaque avant
//! délégation au repository.

use sqlx::PgPool;
use uuid::Uuid;
use validator::Validate;

use crate::dto::ambulance_dto::{
    CreateAmbulanceRequest, UpdateAmbulanceRequest, UpdateLocationRequest,
    UpdateAmbulanceStatusRequest,
};
use crate::models::ambulance::{Ambulance, AmbulanceStatus};
use crate::repositories::ambulance_repository::AmbulanceRepository;
use crate::utils::errors::{conflict_error, AppError};

pub struct AmbulanceController {
    repository: AmbulanceRepository,
}

impl AmbulanceController {
    pub fn new(pool: PgPool) -> Self {
        Self {
            repository: AmbulanceRepository::new(pool),
        }
    }

    pub async fn list(&self, skip: i64, limit: i64) -> Result<Vec<Ambulance>, AppError> {
        self.repository.list(skip, limit).await
    }

    pub async fn list_available(&self) -> Result<Vec<Ambulance>, AppError> {
        self.repository
            .list_by_status(AmbulanceStatus::Disponible)
            .await
    }

    pub async fn get_by_id(&self, id: Uuid) -> Result<Ambulance, AppError> {
        self.repository
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound("Ambulance not found".to_string()))
    }

    pub async fn create(&self, request: CreateAmbulanceRequest) -> Result<Ambulance, AppError> {
        request.validate()?;

        // Unicité de la plaque: rejet avant toute écriture
        if self
            .repository
            .find_by_plate(&request.plate_number)
            .await?
            .is_some()
        {
            return Err(conflict_error(
                "Ambulance",
                "plate_number",
                &request.plate_number,
            ));
        }

        self.repository.create(request).await
    }

    pub async fn update(
        &self,
        id: Uuid,
        request: UpdateAmbulanceRequest,
    ) -> Result<Ambulance, AppError> {
        request.validate()?;

        // Le changement de plaque garde la contrainte d'unicité
        if let Some(plate) = &request.plate_number {
            if let Some(existing) = self.repository.find_by_plate(plate).await? {
                if existing.id != id {
                    return Err(conflict_error("Ambulance", "plate_number", plate));
                }
            }
        }

        self.repository.update(id, request).await
    }

    pub async fn update_location(
        &self,
        id: Uuid,
        request: UpdateLocationRequest,
    ) -> Result<Ambulance, AppError> {
        request.validate()?;

        self.repository
            .update_location(id, request.latitude, request.longitude)
            .await?
            .ok_or_else(|| AppError::NotFound("Ambulance not found".to_string()))
    }

    pub async fn update_status(
        &self,
        id: Uuid,
        request: UpdateAmbulanceStatusRequest,
    ) -> Result<Ambulance, AppError> {
        self.repository
            .update_status(id, request.status)
            .await?
            .ok_or_else(|| AppError::NotFound("Ambulance not found".to_string()))
    }

    pub async fn delete(&self, id: Uuid) -> Result<(), AppError> {
        if !self.repository.delete(id).await? {
            return Err(AppError::NotFound("Ambulance not found".to_string()));
        }
        Ok(())
    }
}
