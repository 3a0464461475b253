//! Repository Hospital

use chrono::Utc;
use sqlx::types::Json;
use sqlx::PgPool;
use uuid::Uuid;

use crate::dto::hospital_dto::{CreateHospitalRequest, UpdateHospitalRequest};
use crate::models::hospital::Hospital;
use crate::utils::errors::AppError;

pub struct HospitalRepository {
    pool: PgPool,
}

impl HospitalRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    pub async fn find_by_id(&self, id: Uuid) -> Result<Option<Hospital>, AppError> {
        let hospital = sqlx::query_as::<_, Hospital>("SELECT * FROM hospitals WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;

        Ok(hospital)
    }

    pub async fn list(&self, skip: i64, limit: i64) -> Result<Vec<Hospital>, AppError> {
        let hospitals = sqlx::query_as::<_, Hospital>(
            "SELECT * FROM hospitals ORDER BY name OFFSET $1 LIMIT $2",
        )
        .bind(skip)
        .bind(limit)
        .fetch_all(&self.pool)
        .await?;

        Ok(hospitals)
    }

    pub async fn list_active(&self) -> Result<Vec<Hospital>, AppError> {
        let hospitals = sqlx::query_as::<_, Hospital>(
            "SELECT * FROM hospitals WHERE is_active = TRUE ORDER BY name",
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(hospitals)
    }

    pub async fn create(&self, request: CreateHospitalRequest) -> Result<Hospital, AppError> {
        let hospital = sqlx::query_as::<_, Hospital>(
            r#"
            INSERT INTO hospitals
                (id, name, address, phone, email, latitude, longitude,
                 emergency_beds, icu_beds, general_beds, specialties, is_active, created_at)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $12, $13)
            RETURNING *
            "#,
        )
        .bind(Uuid::new_v4())
        .bind(request.name)
        .bind(request.address)
        .bind(request.phone)
        .bind(request.email)
        .bind(request.latitude)
        .bind(request.longitude)
        .bind(request.emergency_beds.unwrap_or(0))
        .bind(request.icu_beds.unwrap_or(0))
        .bind(request.general_beds.unwrap_or(0))
        .bind(Json(request.specialties.unwrap_or_default()))
        .bind(request.is_active.unwrap_or(true))
        .bind(Utc::now())
        .fetch_one(&self.pool)
        .await?;

        Ok(hospital)
    }

    pub async fn update(
        &self,
        id: Uuid,
        request: UpdateHospitalRequest,
    ) -> Result<Hospital, AppError> {
        let current = self
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound("Hospital not found".to_string()))?;

        let specialties = match request.specialties {
            Some(list) => Json(list),
            None => current.specialties,
        };

        let hospital = sqlx::query_as::<_, Hospital>(
            r#"
            UPDATE hospitals
            SET name = $2, address = $3, phone = $4, email = $5,
                latitude = $6, longitude = $7, emergency_beds = $8, icu_beds = $9,
                general_beds = $10, specialties = $11, is_active = $12, updated_at = $13
            WHERE id = $1
            RETURNING *
            "#,
        )
        .bind(id)
        .bind(request.name.unwrap_or(current.name))
        .bind(request.address.unwrap_or(current.address))
        .bind(request.phone.unwrap_or(current.phone))
        .bind(request.email.or(current.email))
        .bind(request.latitude.unwrap_or(current.latitude))
        .bind(request.longitude.unwrap_or(current.longitude))
        .bind(request.emergency_beds.unwrap_or(current.emergency_beds))
        .bind(request.icu_beds.unwrap_or(current.icu_beds))
        .bind(request.general_beds.unwrap_or(current.general_beds))
        .bind(specialties)
        .bind(request.is_active.unwrap_or(current.is_active))
        .bind(Utc::now())
        .fetch_one(&self.pool)
        .await?;

        Ok(hospital)
    }

    pub async fn delete(&self, id: Uuid) -> Result<bool, AppError> {
        let result = sqlx::query("DELETE FROM hospitals WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;

        Ok(result.rows_affected() > 0)
    }
}
