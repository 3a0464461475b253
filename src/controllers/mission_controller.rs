//! Controller Mission
//!
//! Porte d'entrée du cycle de vie des missions: création, update
//! descriptif, assignation et avancement de statut. Les règles de
//! transition elles-mêmes vivent dans le modèle et le repository.

use sqlx::PgPool;
use uuid::Uuid;
use validator::Validate;

use crate::dto::mission_dto::{
    AssignMissionRequest, CreateMissionRequest, UpdateMissionRequest,
    UpdateMissionStatusRequest,
};
use crate::models::mission::{Mission, MissionStatus};
use crate::repositories::hospital_repository::HospitalRepository;
use crate::repositories::mission_repository::MissionRepository;
use crate::utils::errors::AppError;

pub struct MissionController {
    repository: MissionRepository,
    hospitals: HospitalRepository,
}

impl MissionController {
    pub fn new(pool: PgPool) -> Self {
        Self {
            repository: MissionRepository::new(pool.clone()),
            hospitals: HospitalRepository::new(pool),
        }
    }

    pub async fn list(&self, skip: i64, limit: i64) -> Result<Vec<Mission>, AppError> {
        self.repository.list(skip, limit).await
    }

    pub async fn list_active(&self) -> Result<Vec<Mission>, AppError> {
        self.repository.list_active().await
    }

    /// Liste par statut, label français en paramètre de chemin
    pub async fn list_by_status(&self, status_label: &str) -> Result<Vec<Mission>, AppError> {
        let status = MissionStatus::from_label(status_label).ok_or_else(|| {
            AppError::BadRequest(format!("Unknown mission status '{}'", status_label))
        })?;

        self.repository.list_by_status(status).await
    }

    pub async fn get_by_id(&self, id: Uuid) -> Result<Mission, AppError> {
        self.repository
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound("Mission not found".to_string()))
    }

    pub async fn create(&self, request: CreateMissionRequest) -> Result<Mission, AppError> {
        request.validate()?;

        // La destination doit exister avant d'enregistrer la mission
        if self
            .hospitals
            .find_by_id(request.hospital_id)
            .await?
            .is_none()
        {
            return Err(AppError::NotFound("Hospital not found".to_string()));
        }

        self.repository.create(request).await
    }

    pub async fn update(
        &self,
        id: Uuid,
        request: UpdateMissionRequest,
    ) -> Result<Mission, AppError> {
        request.validate()?;

        if let Some(hospital_id) = request.hospital_id {
            if self.hospitals.find_by_id(hospital_id).await?.is_none() {
                return Err(AppError::NotFound("Hospital not found".to_string()));
            }
        }

        self.repository.update(id, request).await
    }

    pub async fn assign(
        &self,
        id: Uuid,
        request: AssignMissionRequest,
    ) -> Result<Mission, AppError> {
        self.repository
            .assign(id, request.ambulance_id, request.personnel_ids)
            .await
    }

    pub async fn update_status(
        &self,
        id: Uuid,
        request: UpdateMissionStatusRequest,
    ) -> Result<Mission, AppError> {
        self.repository.set_status(id, request.status).await
    }

    pub async fn delete(&self, id: Uuid) -> Result<(), AppError> {
        if !self.repository.delete(id).await? {
            return Err(AppError::NotFound("Mission not found".to_string()));
        }
        Ok(())
    }
}
