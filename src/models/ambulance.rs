//! Modèle Ambulance
//!
//! Mappe exactement à la table `ambulances` du schéma PostgreSQL.
//! Le statut est un ENUM PostgreSQL `ambulance_status` stocké avec
//! ses labels français.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::types::Json;
use sqlx::FromRow;
use uuid::Uuid;

/// Statut de l'ambulance - mappe à l'ENUM ambulance_status
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, sqlx::Type)]
#[sqlx(type_name = "ambulance_status", rename_all = "snake_case")]
#[serde(rename_all = "snake_case")]
pub enum AmbulanceStatus {
    Disponible,
    EnMission,
    EnPanne,
    Maintenance,
}

impl AmbulanceStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            AmbulanceStatus::Disponible => "disponible",
            AmbulanceStatus::EnMission => "en_mission",
            AmbulanceStatus::EnPanne => "en_panne",
            AmbulanceStatus::Maintenance => "maintenance",
        }
    }

    pub fn from_label(s: &str) -> Option<Self> {
        match s {
            "disponible" => Some(AmbulanceStatus::Disponible),
            "en_mission" => Some(AmbulanceStatus::EnMission),
            "en_panne" => Some(AmbulanceStatus::EnPanne),
            "maintenance" => Some(AmbulanceStatus::Maintenance),
            _ => None,
        }
    }
}

/// Ambulance - mappe exactement à la table ambulances
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Ambulance {
    pub id: Uuid,
    pub plate_number: String,
    pub model: String,
    pub capacity: i32,
    pub status: AmbulanceStatus,
    // Position: nullable jusqu'au premier rapport de localisation
    pub latitude: Option<f64>,
    pub longitude: Option<f64>,
    pub location_updated_at: Option<DateTime<Utc>>,
    pub equipment: Json<Vec<String>>,
    pub fuel_level: i32,
    pub mileage: i32,
    pub created_at: DateTime<Utc>,
    pub updated_at: Option<DateTime<Utc>>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_labels_roundtrip() {
        for status in [
            AmbulanceStatus::Disponible,
            AmbulanceStatus::EnMission,
            AmbulanceStatus::EnPanne,
            AmbulanceStatus::Maintenance,
        ] {
            assert_eq!(AmbulanceStatus::from_label(status.as_str()), Some(status));
        }
        assert_eq!(AmbulanceStatus::from_label("inconnu"), None);
    }
}
