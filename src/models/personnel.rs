//! Modèle Personnel
//!
//! Mappe exactement à la table `personnel`. Chaque membre du personnel
//! est lié à un compte utilisateur et, optionnellement, à une ambulance.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::types::Json;
use sqlx::FromRow;
use uuid::Uuid;

/// Rôle métier du personnel - mappe à l'ENUM personnel_role
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, sqlx::Type)]
#[sqlx(type_name = "personnel_role", rename_all = "snake_case")]
#[serde(rename_all = "snake_case")]
pub enum PersonnelRole {
    Ambulancier,
    Paramedic,
    Medecin,
    Regulateur,
}

/// Statut de service du personnel - mappe à l'ENUM personnel_status
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, sqlx::Type)]
#[sqlx(type_name = "personnel_status", rename_all = "snake_case")]
#[serde(rename_all = "snake_case")]
pub enum PersonnelStatus {
    Disponible,
    EnService,
    Repos,
    Conge,
}

/// Membre du personnel - mappe exactement à la table personnel
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Personnel {
    pub id: Uuid,
    pub user_id: Uuid,
    pub first_name: String,
    pub last_name: String,
    pub role: PersonnelRole,
    pub qualifications: Json<Vec<String>>,
    pub phone: String,
    pub email: String,
    pub status: PersonnelStatus,
    pub assigned_ambulance_id: Option<Uuid>,
    pub created_at: DateTime<Utc>,
    pub updated_at: Option<DateTime<Utc>>,
}
