//! Modèle Hospital
//!
//! Mappe exactement à la table `hospitals`.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::types::Json;
use sqlx::FromRow;
use uuid::Uuid;

/// Hôpital - mappe exactement à la table hospitals
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Hospital {
    pub id: Uuid,
    pub name: String,
    pub address: String,
    pub phone: String,
    pub email: Option<String>,
    pub latitude: f64,
    pub longitude: f64,
    // Capacité en lits par catégorie
    pub emergency_beds: i32,
    pub icu_beds: i32,
    pub general_beds: i32,
    pub specialties: Json<Vec<String>>,
    pub is_active: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: Option<DateTime<Utc>>,
}
