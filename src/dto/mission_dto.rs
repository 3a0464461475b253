//! DTOs Mission
//!
//! L'update libre ne porte que sur les champs descriptifs: le statut,
//! l'assignation et les horodatages du cycle de vie passent par les
//! requests dédiées (assign / status).

use serde::Deserialize;
use uuid::Uuid;
use validator::Validate;

use crate::models::mission::{MissionPriority, MissionStatus};
use crate::utils::validation::validate_phone;

/// Request pour créer une mission
#[derive(Debug, Deserialize, Validate)]
pub struct CreateMissionRequest {
    #[validate(length(min = 2, max = 100))]
    pub patient_name: String,

    #[validate(custom = "validate_phone")]
    pub patient_phone: String,

    #[validate(range(min = 0, max = 130))]
    pub patient_age: Option<i32>,

    #[validate(length(min = 2, max = 200))]
    pub patient_condition: String,

    pub priority: MissionPriority,

    #[validate(length(min = 5, max = 500))]
    pub pickup_address: String,

    #[validate(range(min = -90.0, max = 90.0))]
    pub pickup_latitude: f64,

    #[validate(range(min = -180.0, max = 180.0))]
    pub pickup_longitude: f64,

    pub hospital_id: Uuid,

    #[validate(range(min = 1, max = 1440))]
    pub estimated_duration: Option<i32>,

    pub symptoms: Option<Vec<String>>,
    pub notes: Option<String>,
}

/// Request pour mettre à jour les champs descriptifs d'une mission
#[derive(Debug, Deserialize, Validate)]
pub struct UpdateMissionRequest {
    #[validate(length(min = 2, max = 100))]
    pub patient_name: Option<String>,

    #[validate(custom = "validate_phone")]
    pub patient_phone: Option<String>,

    #[validate(range(min = 0, max = 130))]
    pub patient_age: Option<i32>,

    #[validate(length(min = 2, max = 200))]
    pub patient_condition: Option<String>,

    pub priority: Option<MissionPriority>,

    #[validate(length(min = 5, max = 500))]
    pub pickup_address: Option<String>,

    #[validate(range(min = -90.0, max = 90.0))]
    pub pickup_latitude: Option<f64>,

    #[validate(range(min = -180.0, max = 180.0))]
    pub pickup_longitude: Option<f64>,

    pub hospital_id: Option<Uuid>,

    #[validate(range(min = 1, max = 1440))]
    pub estimated_duration: Option<i32>,

    pub symptoms: Option<Vec<String>>,
    pub notes: Option<String>,
}

/// Request d'assignation: une ambulance et zéro ou plusieurs membres
/// du personnel
#[derive(Debug, Deserialize)]
pub struct AssignMissionRequest {
    pub ambulance_id: Uuid,
    #[serde(default)]
    pub personnel_ids: Vec<Uuid>,
}

/// Request pour faire avancer le statut d'une mission
#[derive(Debug, Deserialize)]
pub struct UpdateMissionStatusRequest {
    pub status: MissionStatus,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn base_request() -> CreateMissionRequest {
        CreateMissionRequest {
            patient_name: "Jean Dupont".to_string(),
            patient_phone: "0612345678".to_string(),
            patient_age: Some(67),
            patient_condition: "Douleur thoracique".to_string(),
            priority: MissionPriority::Critique,
            pickup_address: "12 rue de la République, Lyon".to_string(),
            pickup_latitude: 45.76,
            pickup_longitude: 4.83,
            hospital_id: Uuid::new_v4(),
            estimated_duration: Some(30),
            symptoms: Some(vec!["douleur thoracique".to_string()]),
            notes: None,
        }
    }

    #[test]
    fn test_create_request_validation() {
        assert!(base_request().validate().is_ok());
    }

    #[test]
    fn test_create_request_rejects_bad_phone() {
        let mut request = base_request();
        request.patient_phone = "123".to_string();
        assert!(request.validate().is_err());
    }

    #[test]
    fn test_assign_request_personnel_defaults_to_empty() {
        let json = format!(r#"{{"ambulance_id": "{}"}}"#, Uuid::new_v4());
        let request: AssignMissionRequest = serde_json::from_str(&json).unwrap();
        assert!(request.personnel_ids.is_empty());
    }

    #[test]
    fn test_status_request_parses_french_labels() {
        let request: UpdateMissionStatusRequest =
            serde_json::from_str(r#"{"status": "en_cours"}"#).unwrap();
        assert_eq!(request.status, MissionStatus::EnCours);
    }
}
