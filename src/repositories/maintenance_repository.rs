//! Repository Maintenance

use chrono::Utc;
use sqlx::types::Json;
use sqlx::PgPool;
use uuid::Uuid;

use crate::dto::maintenance_dto::{CreateMaintenanceRequest, UpdateMaintenanceRequest};
use crate::models::maintenance::MaintenanceRecord;
use crate::utils::errors::AppError;

pub struct MaintenanceRepository {
    pool: PgPool,
}

impl MaintenanceRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    pub async fn find_by_id(&self, id: Uuid) -> Result<Option<MaintenanceRecord>, AppError> {
        let record = sqlx::query_as::<_, MaintenanceRecord>(
            "SELECT * FROM maintenance_records WHERE id = $1",
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(record)
    }

    pub async fn list(&self, skip: i64, limit: i64) -> Result<Vec<MaintenanceRecord>, AppError> {
        let records = sqlx::query_as::<_, MaintenanceRecord>(
            "SELECT * FROM maintenance_records ORDER BY scheduled_date DESC OFFSET $1 LIMIT $2",
        )
        .bind(skip)
        .bind(limit)
        .fetch_all(&self.pool)
        .await?;

        Ok(records)
    }

    pub async fn list_by_ambulance(
        &self,
        ambulance_id: Uuid,
    ) -> Result<Vec<MaintenanceRecord>, AppError> {
        let records = sqlx::query_as::<_, MaintenanceRecord>(
            "SELECT * FROM maintenance_records WHERE ambulance_id = $1 ORDER BY scheduled_date DESC",
        )
        .bind(ambulance_id)
        .fetch_all(&self.pool)
        .await?;

        Ok(records)
    }

    pub async fn create(
        &self,
        request: CreateMaintenanceRequest,
    ) -> Result<MaintenanceRecord, AppError> {
        let record = sqlx::query_as::<_, MaintenanceRecord>(
            r#"
            INSERT INTO maintenance_records
                (id, ambulance_id, maintenance_type, description, cost,
                 scheduled_date, status, technician, parts, notes, created_at)
            VALUES ($1, $2, $3, $4, $5, $6, 'planifiee', $7, $8, $9, $10)
            RETURNING *
            "#,
        )
        .bind(Uuid::new_v4())
        .bind(request.ambulance_id)
        .bind(request.maintenance_type)
        .bind(request.description)
        .bind(request.cost.unwrap_or(0.0))
        .bind(request.scheduled_date)
        .bind(request.technician)
        .bind(request.parts.map(Json))
        .bind(request.notes)
        .bind(Utc::now())
        .fetch_one(&self.pool)
        .await?;

        Ok(record)
    }

    pub async fn update(
        &self,
        id: Uuid,
        request: UpdateMaintenanceRequest,
    ) -> Result<MaintenanceRecord, AppError> {
        let current = self
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound("Maintenance record not found".to_string()))?;

        let parts = match request.parts {
            Some(list) => Some(Json(list)),
            None => current.parts,
        };

        let record = sqlx::query_as::<_, MaintenanceRecord>(
            r#"
            UPDATE maintenance_records
            SET maintenance_type = $2, description = $3, cost = $4,
                scheduled_date = $5, completed_date = $6, status = $7,
                technician = $8, parts = $9, notes = $10, updated_at = $11
            WHERE id = $1
            RETURNING *
            "#,
        )
        .bind(id)
        .bind(request.maintenance_type.unwrap_or(current.maintenance_type))
        .bind(request.description.unwrap_or(current.description))
        .bind(request.cost.unwrap_or(current.cost))
        .bind(request.scheduled_date.unwrap_or(current.scheduled_date))
        .bind(request.completed_date.or(current.completed_date))
        .bind(request.status.unwrap_or(current.status))
        .bind(request.technician.unwrap_or(current.technician))
        .bind(parts)
        .bind(request.notes.or(current.notes))
        .bind(Utc::now())
        .fetch_one(&self.pool)
        .await?;

        Ok(record)
    }

    pub async fn delete(&self, id: Uuid) -> Result<bool, AppError> {
        let result = sqlx::query("DELETE FROM maintenance_records WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;

        Ok(result.rows_affected() > 0)
    }
}
