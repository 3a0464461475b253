//! Repository Ambulance
//!
//! Accès aux données de la table `ambulances`. Les mises à jour de
//! position rafraîchissent systématiquement `location_updated_at`.

use chrono::Utc;
use sqlx::types::Json;
use sqlx::PgPool;
use uuid::Uuid;

use crate::dto::ambulance_dto::{CreateAmbulanceRequest, UpdateAmbulanceRequest};
use crate::models::ambulance::{Ambulance, AmbulanceStatus};
use crate::utils::errors::AppError;

pub struct AmbulanceRepository {
    pool: PgPool,
}

impl AmbulanceRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    pub async fn find_by_id(&self, id: Uuid) -> Result<Option<Ambulance>, AppError> {
        let ambulance =
            sqlx::query_as::<_, Ambulance>("SELECT * FROM ambulances WHERE id = $1")
                .bind(id)
                .fetch_optional(&self.pool)
                .await?;

        Ok(ambulance)
    }

    pub async fn find_by_plate(&self, plate_number: &str) -> Result<Option<Ambulance>, AppError> {
        let ambulance =
            sqlx::query_as::<_, Ambulance>("SELECT * FROM ambulances WHERE plate_number = $1")
                .bind(plate_number)
                .fetch_optional(&self.pool)
                .await?;

        Ok(ambulance)
    }

    pub async fn list(&self, skip: i64, limit: i64) -> Result<Vec<Ambulance>, AppError> {
        let ambulances = sqlx::query_as::<_, Ambulance>(
            "SELECT * FROM ambulances ORDER BY created_at DESC OFFSET $1 LIMIT $2",
        )
        .bind(skip)
        .bind(limit)
        .fetch_all(&self.pool)
        .await?;

        Ok(ambulances)
    }

    pub async fn list_by_status(
        &self,
        status: AmbulanceStatus,
    ) -> Result<Vec<Ambulance>, AppError> {
        let ambulances = sqlx::query_as::<_, Ambulance>(
            "SELECT * FROM ambulances WHERE status = $1 ORDER BY plate_number",
        )
        .bind(status)
        .fetch_all(&self.pool)
        .await?;

        Ok(ambulances)
    }

    pub async fn create(&self, request: CreateAmbulanceRequest) -> Result<Ambulance, AppError> {
        // location_updated_at n'est posé que si une position initiale est fournie
        let location_updated_at = match (request.latitude, request.longitude) {
            (Some(_), Some(_)) => Some(Utc::now()),
            _ => None,
        };

        let ambulance = sqlx::query_as::<_, Ambulance>(
            r#"
            INSERT INTO ambulances
                (id, plate_number, model, capacity, status, latitude, longitude,
                 location_updated_at, equipment, fuel_level, mileage, created_at)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $12)
            RETURNING *
            "#,
        )
        .bind(Uuid::new_v4())
        .bind(request.plate_number)
        .bind(request.model)
        .bind(request.capacity.unwrap_or(2))
        .bind(request.status.unwrap_or(AmbulanceStatus::Disponible))
        .bind(request.latitude)
        .bind(request.longitude)
        .bind(location_updated_at)
        .bind(Json(request.equipment.unwrap_or_default()))
        .bind(request.fuel_level.unwrap_or(100))
        .bind(request.mileage.unwrap_or(0))
        .bind(Utc::now())
        .fetch_one(&self.pool)
        .await?;

        Ok(ambulance)
    }

    pub async fn update(
        &self,
        id: Uuid,
        request: UpdateAmbulanceRequest,
    ) -> Result<Ambulance, AppError> {
        let current = self
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound("Ambulance not found".to_string()))?;

        // Un changement de coordonnées rafraîchit aussi la timestamp de position
        let location_changed = request.latitude.is_some() || request.longitude.is_some();
        let location_updated_at = if location_changed {
            Some(Utc::now())
        } else {
            current.location_updated_at
        };

        let equipment = match request.equipment {
            Some(list) => Json(list),
            None => current.equipment,
        };

        let ambulance = sqlx::query_as::<_, Ambulance>(
            r#"
            UPDATE ambulances
            SET plate_number = $2, model = $3, capacity = $4, status = $5,
                latitude = $6, longitude = $7, location_updated_at = $8,
                equipment = $9, fuel_level = $10, mileage = $11, updated_at = $12
            WHERE id = $1
            RETURNING *
            "#,
        )
        .bind(id)
        .bind(request.plate_number.unwrap_or(current.plate_number))
        .bind(request.model.unwrap_or(current.model))
        .bind(request.capacity.unwrap_or(current.capacity))
        .bind(request.status.unwrap_or(current.status))
        .bind(request.latitude.or(current.latitude))
        .bind(request.longitude.or(current.longitude))
        .bind(location_updated_at)
        .bind(equipment)
        .bind(request.fuel_level.unwrap_or(current.fuel_level))
        .bind(request.mileage.unwrap_or(current.mileage))
        .bind(Utc::now())
        .fetch_one(&self.pool)
        .await?;

        Ok(ambulance)
    }

    pub async fn update_location(
        &self,
        id: Uuid,
        latitude: f64,
        longitude: f64,
    ) -> Result<Option<Ambulance>, AppError> {
        let ambulance = sqlx::query_as::<_, Ambulance>(
            r#"
            UPDATE ambulances
            SET latitude = $2, longitude = $3, location_updated_at = $4, updated_at = $4
            WHERE id = $1
            RETURNING *
            "#,
        )
        .bind(id)
        .bind(latitude)
        .bind(longitude)
        .bind(Utc::now())
        .fetch_optional(&self.pool)
        .await?;

        Ok(ambulance)
    }

    pub async fn update_status(
        &self,
        id: Uuid,
        status: AmbulanceStatus,
    ) -> Result<Option<Ambulance>, AppError> {
        let ambulance = sqlx::query_as::<_, Ambulance>(
            "UPDATE ambulances SET status = $2, updated_at = $3 WHERE id = $1 RETURNING *",
        )
        .bind(id)
        .bind(status)
        .bind(Utc::now())
        .fetch_optional(&self.pool)
        .await?;

        Ok(ambulance)
    }

    pub async fn delete(&self, id: Uuid) -> Result<bool, AppError> {
        let result = sqlx::query("DELETE FROM ambulances WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;

        Ok(result.rows_affected() > 0)
    }
}
