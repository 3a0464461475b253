//! Repository Mission
//!
//! Accès aux données de la table `missions`. L'assignation et les
//! changements de statut s'exécutent dans une transaction avec verrou
//! de ligne (`SELECT ... FOR UPDATE`): deux assignations concurrentes
//! de la même ambulance ne peuvent pas réussir toutes les deux.

use chrono::Utc;
use sqlx::types::Json;
use sqlx::PgPool;
use uuid::Uuid;

use crate::dto::mission_dto::{CreateMissionRequest, UpdateMissionRequest};
use crate::models::mission::{actual_duration_minutes, Mission, MissionStatus};
use crate::utils::errors::AppError;

pub struct MissionRepository {
    pool: PgPool,
}

impl MissionRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    pub async fn find_by_id(&self, id: Uuid) -> Result<Option<Mission>, AppError> {
        let mission = sqlx::query_as::<_, Mission>("SELECT * FROM missions WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;

        Ok(mission)
    }

    pub async fn list(&self, skip: i64, limit: i64) -> Result<Vec<Mission>, AppError> {
        let missions = sqlx::query_as::<_, Mission>(
            "SELECT * FROM missions ORDER BY created_at DESC OFFSET $1 LIMIT $2",
        )
        .bind(skip)
        .bind(limit)
        .fetch_all(&self.pool)
        .await?;

        Ok(missions)
    }

    pub async fn list_by_status(
        &self,
        status: MissionStatus,
    ) -> Result<Vec<Mission>, AppError> {
        let missions = sqlx::query_as::<_, Mission>(
            "SELECT * FROM missions WHERE status = $1 ORDER BY created_at DESC",
        )
        .bind(status)
        .fetch_all(&self.pool)
        .await?;

        Ok(missions)
    }

    /// Missions actives: en_attente, assignee ou en_cours
    pub async fn list_active(&self) -> Result<Vec<Mission>, AppError> {
        let missions = sqlx::query_as::<_, Mission>(
            r#"
            SELECT * FROM missions
            WHERE status IN ('en_attente', 'assignee', 'en_cours')
            ORDER BY created_at DESC
            "#,
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(missions)
    }

    pub async fn create(&self, request: CreateMissionRequest) -> Result<Mission, AppError> {
        let mission = sqlx::query_as::<_, Mission>(
            r#"
            INSERT INTO missions
                (id, patient_name, patient_phone, patient_age, patient_condition,
                 priority, status, pickup_address, pickup_latitude, pickup_longitude,
                 hospital_id, created_at, estimated_duration, symptoms, notes)
            VALUES ($1, $2, $3, $4, $5, $6, 'en_attente', $7, $8, $9, $10, $11, $12, $13, $14)
            RETURNING *
            "#,
        )
        .bind(Uuid::new_v4())
        .bind(request.patient_name)
        .bind(request.patient_phone)
        .bind(request.patient_age)
        .bind(request.patient_condition)
        .bind(request.priority)
        .bind(request.pickup_address)
        .bind(request.pickup_latitude)
        .bind(request.pickup_longitude)
        .bind(request.hospital_id)
        .bind(Utc::now())
        .bind(request.estimated_duration.unwrap_or(30))
        .bind(request.symptoms.map(Json))
        .bind(request.notes)
        .fetch_one(&self.pool)
        .await?;

        Ok(mission)
    }

    /// Mise à jour des champs descriptifs uniquement: le statut,
    /// l'assignation et les horodatages ne passent jamais par ici.
    pub async fn update(
        &self,
        id: Uuid,
        request: UpdateMissionRequest,
    ) -> Result<Mission, AppError> {
        let current = self
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound("Mission not found".to_string()))?;

        let symptoms = match request.symptoms {
            Some(list) => Some(Json(list)),
            None => current.symptoms,
        };

        let mission = sqlx::query_as::<_, Mission>(
            r#"
            UPDATE missions
            SET patient_name = $2, patient_phone = $3, patient_age = $4,
                patient_condition = $5, priority = $6, pickup_address = $7,
                pickup_latitude = $8, pickup_longitude = $9, hospital_id = $10,
                estimated_duration = $11, symptoms = $12, notes = $13
            WHERE id = $1
            RETURNING *
            "#,
        )
        .bind(id)
        .bind(request.patient_name.unwrap_or(current.patient_name))
        .bind(request.patient_phone.unwrap_or(current.patient_phone))
        .bind(request.patient_age.or(current.patient_age))
        .bind(request.patient_condition.unwrap_or(current.patient_condition))
        .bind(request.priority.unwrap_or(current.priority))
        .bind(request.pickup_address.unwrap_or(current.pickup_address))
        .bind(request.pickup_latitude.unwrap_or(current.pickup_latitude))
        .bind(request.pickup_longitude.unwrap_or(current.pickup_longitude))
        .bind(request.hospital_id.unwrap_or(current.hospital_id))
        .bind(request.estimated_duration.unwrap_or(current.estimated_duration))
        .bind(symptoms)
        .bind(request.notes.or(current.notes))
        .fetch_one(&self.pool)
        .await?;

        Ok(mission)
    }

    /// Assigner une ambulance et une équipe à une mission.
    ///
    /// Toute la vérification se fait sous verrou de ligne dans une seule
    /// transaction: mission verrouillée, ambulance verrouillée, puis
    /// contrôle qu'aucune autre mission active ne détient déjà cette
    /// ambulance.
    pub async fn assign(
        &self,
        mission_id: Uuid,
        ambulance_id: Uuid,
        personnel_ids: Vec<Uuid>,
    ) -> Result<Mission, AppError> {
        let mut tx = self.pool.begin().await?;

        let mission = sqlx::query_as::<_, Mission>(
            "SELECT * FROM missions WHERE id = $1 FOR UPDATE",
        )
        .bind(mission_id)
        .fetch_optional(&mut *tx)
        .await?
        .ok_or_else(|| AppError::NotFound("Mission not found".to_string()))?;

        if !mission.status.can_assign() {
            return Err(AppError::Conflict(format!(
                "Mission in status '{}' can no longer be assigned",
                mission.status.as_str()
            )));
        }

        // Verrouiller l'ambulance pour sérialiser les assignations concurrentes
        let ambulance_exists: Option<(Uuid,)> =
            sqlx::query_as("SELECT id FROM ambulances WHERE id = $1 FOR UPDATE")
                .bind(ambulance_id)
                .fetch_optional(&mut *tx)
                .await?;

        if ambulance_exists.is_none() {
            return Err(AppError::NotFound("Ambulance not found".to_string()));
        }

        let already_engaged: (bool,) = sqlx::query_as(
            r#"
            SELECT EXISTS(
                SELECT 1 FROM missions
                WHERE ambulance_id = $1
                  AND id <> $2
                  AND status IN ('assignee', 'en_cours')
            )
            "#,
        )
        .bind(ambulance_id)
        .bind(mission_id)
        .fetch_one(&mut *tx)
        .await?;

        if already_engaged.0 {
            return Err(AppError::Conflict(
                "Ambulance is already assigned to another active mission".to_string(),
            ));
        }

        let mission = sqlx::query_as::<_, Mission>(
            r#"
            UPDATE missions
            SET ambulance_id = $2, assigned_personnel = $3,
                status = 'assignee', assigned_at = $4
            WHERE id = $1
            RETURNING *
            "#,
        )
        .bind(mission_id)
        .bind(ambulance_id)
        .bind(Json(personnel_ids))
        .bind(Utc::now())
        .fetch_one(&mut *tx)
        .await?;

        tx.commit().await?;

        Ok(mission)
    }

    /// Faire avancer le statut à travers la table de transitions.
    ///
    /// Effets de bord, appliqués à la première entrée seulement:
    /// - en_cours pose started_at si absent;
    /// - terminee pose completed_at si absent et calcule actual_duration
    ///   en minutes entières quand started_at est connu.
    pub async fn set_status(
        &self,
        mission_id: Uuid,
        new_status: MissionStatus,
    ) -> Result<Mission, AppError> {
        let mut tx = self.pool.begin().await?;

        let current = sqlx::query_as::<_, Mission>(
            "SELECT * FROM missions WHERE id = $1 FOR UPDATE",
        )
        .bind(mission_id)
        .fetch_optional(&mut *tx)
        .await?
        .ok_or_else(|| AppError::NotFound("Mission not found".to_string()))?;

        // Re-poser le statut courant: no-op idempotent
        if current.status == new_status {
            tx.commit().await?;
            return Ok(current);
        }

        if !current.status.can_transition_to(new_status) {
            return Err(AppError::Conflict(format!(
                "Illegal mission transition '{}' -> '{}'",
                current.status.as_str(),
                new_status.as_str()
            )));
        }

        let now = Utc::now();

        let started_at = match new_status {
            MissionStatus::EnCours if current.started_at.is_none() => Some(now),
            _ => current.started_at,
        };

        let (completed_at, actual_duration) = match new_status {
            MissionStatus::Terminee if current.completed_at.is_none() => {
                let duration = started_at.map(|s| actual_duration_minutes(s, now));
                (Some(now), duration)
            }
            _ => (current.completed_at, current.actual_duration),
        };

        let mission = sqlx::query_as::<_, Mission>(
            r#"
            UPDATE missions
            SET status = $2, started_at = $3, completed_at = $4, actual_duration = $5
            WHERE id = $1
            RETURNING *
            "#,
        )
        .bind(mission_id)
        .bind(new_status)
        .bind(started_at)
        .bind(completed_at)
        .bind(actual_duration)
        .fetch_one(&mut *tx)
        .await?;

        tx.commit().await?;

        Ok(mission)
    }

    pub async fn delete(&self, id: Uuid) -> Result<bool, AppError> {
        let result = sqlx::query("DELETE FROM missions WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;

        Ok(result.rows_affected() > 0)
    }
}
