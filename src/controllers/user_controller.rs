//! Controller User
//!
//! Gestion des comptes: hash bcrypt du mot de passe, unicité du
//! username et de l'email.

use bcrypt::{hash, DEFAULT_COST};
use sqlx::PgPool;
use uuid::Uuid;
use validator::Validate;

use crate::dto::user_dto::{CreateUserRequest, UpdateUserRequest, UserResponse};
use crate::models::user::UserRole;
use crate::repositories::user_repository::UserRepository;
use crate::utils::errors::{conflict_error, AppError};

pub struct UserController {
    repository: UserRepository,
}

impl UserController {
    pub fn new(pool: PgPool) -> Self {
        Self {
            repository: UserRepository::new(pool),
        }
    }

    pub async fn list(&self, skip: i64, limit: i64) -> Result<Vec<UserResponse>, AppError> {
        let users = self.repository.list(skip, limit).await?;
        Ok(users.into_iter().map(UserResponse::from).collect())
    }

    pub async fn get_by_id(&self, id: Uuid) -> Result<UserResponse, AppError> {
        let user = self
            .repository
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound("User not found".to_string()))?;

        Ok(UserResponse::from(user))
    }

    pub async fn create(&self, request: CreateUserRequest) -> Result<UserResponse, AppError> {
        request.validate()?;

        if self
            .repository
            .find_by_username(&request.username)
            .await?
            .is_some()
        {
            return Err(conflict_error("User", "username", &request.username));
        }

        if self
            .repository
            .find_by_email(&request.email)
            .await?
            .is_some()
        {
            return Err(conflict_error("User", "email", &request.email));
        }

        let hashed_password = hash(&request.password, DEFAULT_COST)
            .map_err(|e| AppError::Hash(e.to_string()))?;

        let user = self
            .repository
            .create(
                request.username,
                request.email,
                hashed_password,
                request.first_name,
                request.last_name,
                request.phone,
                request.role.unwrap_or(UserRole::Ambulancier),
            )
            .await?;

        Ok(UserResponse::from(user))
    }

    pub async fn update(
        &self,
        id: Uuid,
        request: UpdateUserRequest,
    ) -> Result<UserResponse, AppError> {
        request.validate()?;

        if let Some(email) = &request.email {
            if let Some(existing) = self.repository.find_by_email(email).await? {
                if existing.id != id {
                    return Err(conflict_error("User", "email", email));
                }
            }
        }

        let hashed_password = match &request.password {
            Some(password) => {
                Some(hash(password, DEFAULT_COST).map_err(|e| AppError::Hash(e.to_string()))?)
            }
            None => None,
        };

        let user = self
            .repository
            .update(
                id,
                request.email,
                hashed_password,
                request.first_name,
                request.last_name,
                request.phone,
                request.role,
                request.is_active,
            )
            .await?;

        Ok(UserResponse::from(user))
    }

    pub async fn delete(&self, id: Uuid) -> Result<(), AppError> {
        if !self.repository.delete(id).await? {
            return Err(AppError::NotFound("User not found".to_string()));
        }
        Ok(())
    }
}
