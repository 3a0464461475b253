//! Controller Personnel

use sqlx::PgPool;
use uuid::Uuid;
use validator::Validate;

use crate::dto::personnel_dto::{CreatePersonnelRequest, UpdatePersonnelRequest};
use crate::models::personnel::{Personnel, PersonnelStatus};
use crate::repositories::ambulance_repository::AmbulanceRepository;
use crate::repositories::personnel_repository::PersonnelRepository;
use crate::repositories::user_repository::UserRepository;
use crate::utils::errors::AppError;

pub struct PersonnelController {
    repository: PersonnelRepository,
    users: UserRepository,
    ambulances: AmbulanceRepository,
}

impl PersonnelController {
    pub fn new(pool: PgPool) -> Self {
        Self {
            repository: PersonnelRepository::new(pool.clone()),
            users: UserRepository::new(pool.clone()),
            ambulances: AmbulanceRepository::new(pool),
        }
    }

    pub async fn list(&self, skip: i64, limit: i64) -> Result<Vec<Personnel>, AppError> {
        self.repository.list(skip, limit).await
    }

    pub async fn list_available(&self) -> Result<Vec<Personnel>, AppError> {
        self.repository
            .list_by_status(PersonnelStatus::Disponible)
            .await
    }

    pub async fn get_by_id(&self, id: Uuid) -> Result<Personnel, AppError> {
        self.repository
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound("Personnel not found".to_string()))
    }

    pub async fn create(&self, request: CreatePersonnelRequest) -> Result<Personnel, AppError> {
        request.validate()?;

        if self.users.find_by_id(request.user_id).await?.is_none() {
            return Err(AppError::NotFound("User not found".to_string()));
        }

        if let Some(ambulance_id) = request.assigned_ambulance_id {
            if self.ambulances.find_by_id(ambulance_id).await?.is_none() {
                return Err(AppError::NotFound("Ambulance not found".to_string()));
            }
        }

        self.repository.create(request).await
    }

    pub async fn update(
        &self,
        id: Uuid,
        request: UpdatePersonnelRequest,
    ) -> Result<Personnel, AppError> {
        request.validate()?;

        if let Some(ambulance_id) = request.assigned_ambulance_id {
            if self.ambulances.find_by_id(ambulance_id).await?.is_none() {
                return Err(AppError::NotFound("Ambulance not found".to_string()));
            }
        }

        self.repository.update(id, request).await
    }

    pub async fn delete(&self, id: Uuid) -> Result<(), AppError> {
        if !self.repository.delete(id).await? {
            return Err(AppError::NotFound("Personnel not found".to_string()));
        }
        Ok(())
    }
}
