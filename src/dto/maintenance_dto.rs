//! DTOs Maintenance

use chrono::{DateTime, Utc};
use serde::Deserialize;
use uuid::Uuid;
use validator::Validate;

use crate::models::maintenance::{MaintenanceStatus, MaintenanceType};

/// Request pour créer une intervention de maintenance
#[derive(Debug, Deserialize, Validate)]
pub struct CreateMaintenanceRequest {
    pub ambulance_id: Uuid,

    #[serde(rename = "type")]
    pub maintenance_type: MaintenanceType,

    #[validate(length(min = 5, max = 2000))]
    pub description: String,

    #[validate(range(min = 0.0))]
    pub cost: Option<f64>,

    pub scheduled_date: DateTime<Utc>,

    #[validate(length(min = 2, max = 100))]
    pub technician: String,

    pub parts: Option<Vec<String>>,
    pub notes: Option<String>,
}

/// Request pour mettre à jour une intervention (champs partiels)
#[derive(Debug, Deserialize, Validate)]
pub struct UpdateMaintenanceRequest {
    #[serde(rename = "type")]
    pub maintenance_type: Option<MaintenanceType>,

    #[validate(length(min = 5, max = 2000))]
    pub description: Option<String>,

    #[validate(range(min = 0.0))]
    pub cost: Option<f64>,

    pub scheduled_date: Option<DateTime<Utc>>,
    pub completed_date: Option<DateTime<Utc>>,
    pub status: Option<MaintenanceStatus>,

    #[validate(length(min = 2, max = 100))]
    pub technician: Option<String>,

    pub parts: Option<Vec<String>>,
    pub notes: Option<String>,
}
