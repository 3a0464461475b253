//! Repository Personnel

use chrono::Utc;
use sqlx::types::Json;
use sqlx::PgPool;
use uuid::Uuid;

use crate::dto::personnel_dto::{CreatePersonnelRequest, UpdatePersonnelRequest};
use crate::models::personnel::{Personnel, PersonnelStatus};
use crate::utils::errors::AppError;

pub struct PersonnelRepository {
    pool: PgPool,
}

impl PersonnelRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    pub async fn find_by_id(&self, id: Uuid) -> Result<Option<Personnel>, AppError> {
        let personnel = sqlx::query_as::<_, Personnel>("SELECT * FROM personnel WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;

        Ok(personnel)
    }

    pub async fn list(&self, skip: i64, limit: i64) -> Result<Vec<Personnel>, AppError> {
        let personnel = sqlx::query_as::<_, Personnel>(
            "SELECT * FROM personnel ORDER BY last_name, first_name OFFSET $1 LIMIT $2",
        )
        .bind(skip)
        .bind(limit)
        .fetch_all(&self.pool)
        .await?;

        Ok(personnel)
    }

    pub async fn list_by_status(
        &self,
        status: PersonnelStatus,
    ) -> Result<Vec<Personnel>, AppError> {
        let personnel = sqlx::query_as::<_, Personnel>(
            "SELECT * FROM personnel WHERE status = $1 ORDER BY last_name, first_name",
        )
        .bind(status)
        .fetch_all(&self.pool)
        .await?;

        Ok(personnel)
    }

    pub async fn create(&self, request: CreatePersonnelRequest) -> Result<Personnel, AppError> {
        let personnel = sqlx::query_as::<_, Personnel>(
            r#"
            INSERT INTO personnel
                (id, user_id, first_name, last_name, role, qualifications,
                 phone, email, status, assigned_ambulance_id, created_at)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11)
            RETURNING *
            "#,
        )
        .bind(Uuid::new_v4())
        .bind(request.user_id)
        .bind(request.first_name)
        .bind(request.last_name)
        .bind(request.role)
        .bind(Json(request.qualifications.unwrap_or_default()))
        .bind(request.phone)
        .bind(request.email)
        .bind(request.status.unwrap_or(PersonnelStatus::Disponible))
        .bind(request.assigned_ambulance_id)
        .bind(Utc::now())
        .fetch_one(&self.pool)
        .await?;

        Ok(personnel)
    }

    pub async fn update(
        &self,
        id: Uuid,
        request: UpdatePersonnelRequest,
    ) -> Result<Personnel, AppError> {
        let current = self
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound("Personnel not found".to_string()))?;

        let qualifications = match request.qualifications {
            Some(list) => Json(list),
            None => current.qualifications,
        };

        let personnel = sqlx::query_as::<_, Personnel>(
            r#"
            UPDATE personnel
            SET first_name = $2, last_name = $3, role = $4, qualifications = $5,
                phone = $6, email = $7, status = $8, assigned_ambulance_id = $9,
                updated_at = $10
            WHERE id = $1
            RETURNING *
            "#,
        )
        .bind(id)
        .bind(request.first_name.unwrap_or(current.first_name))
        .bind(request.last_name.unwrap_or(current.last_name))
        .bind(request.role.unwrap_or(current.role))
        .bind(qualifications)
        .bind(request.phone.unwrap_or(current.phone))
        .bind(request.email.unwrap_or(current.email))
        .bind(request.status.unwrap_or(current.status))
        .bind(request.assigned_ambulance_id.or(current.assigned_ambulance_id))
        .bind(Utc::now())
        .fetch_one(&self.pool)
        .await?;

        Ok(personnel)
    }

    pub async fn delete(&self, id: Uuid) -> Result<bool, AppError> {
        let result = sqlx::query("DELETE FROM personnel WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;

        Ok(result.rows_affected() > 0)
    }
}
