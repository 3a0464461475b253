//! DTOs Ambulance

use serde::Deserialize;
use validator::Validate;

use crate::models::ambulance::AmbulanceStatus;
use crate::utils::validation::validate_plate_number;

/// Request pour créer une ambulance
#[derive(Debug, Deserialize, Validate)]
pub struct CreateAmbulanceRequest {
    #[validate(custom = "validate_plate_number")]
    pub plate_number: String,

    #[validate(length(min = 2, max = 100))]
    pub model: String,

    #[validate(range(min = 1, max = 10))]
    pub capacity: Option<i32>,

    pub status: Option<AmbulanceStatus>,

    #[validate(range(min = -90.0, max = 90.0))]
    pub latitude: Option<f64>,

    #[validate(range(min = -180.0, max = 180.0))]
    pub longitude: Option<f64>,

    pub equipment: Option<Vec<String>>,

    #[validate(range(min = 0, max = 100))]
    pub fuel_level: Option<i32>,

    #[validate(range(min = 0))]
    pub mileage: Option<i32>,
}

/// Request pour mettre à jour une ambulance (champs partiels)
#[derive(Debug, Deserialize, Validate)]
pub struct UpdateAmbulanceRequest {
    #[validate(custom = "validate_plate_number")]
    pub plate_number: Option<String>,

    #[validate(length(min = 2, max = 100))]
    pub model: Option<String>,

    #[validate(range(min = 1, max = 10))]
    pub capacity: Option<i32>,

    pub status: Option<AmbulanceStatus>,

    #[validate(range(min = -90.0, max = 90.0))]
    pub latitude: Option<f64>,

    #[validate(range(min = -180.0, max = 180.0))]
    pub longitude: Option<f64>,

    pub equipment: Option<Vec<String>>,

    #[validate(range(min = 0, max = 100))]
    pub fuel_level: Option<i32>,

    #[validate(range(min = 0))]
    pub mileage: Option<i32>,
}

/// Request pour rapporter une position
#[derive(Debug, Deserialize, Validate)]
pub struct UpdateLocationRequest {
    #[validate(range(min = -90.0, max = 90.0))]
    pub latitude: f64,

    #[validate(range(min = -180.0, max = 180.0))]
    pub longitude: f64,
}

/// Request pour changer le statut d'une ambulance
#[derive(Debug, Deserialize)]
pub struct UpdateAmbulanceStatusRequest {
    pub status: AmbulanceStatus,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_create_request_validation() {
        let request = CreateAmbulanceRequest {
            plate_number: "AB-123-CD".to_string(),
            model: "Mercedes Sprinter".to_string(),
            capacity: Some(2),
            status: None,
            latitude: Some(48.85),
            longitude: Some(2.35),
            equipment: Some(vec!["defibrillateur".to_string()]),
            fuel_level: Some(80),
            mileage: Some(12000),
        };
        assert!(request.validate().is_ok());
    }

    #[test]
    fn test_fuel_level_out_of_range_rejected() {
        let request = CreateAmbulanceRequest {
            plate_number: "AB-123-CD".to_string(),
            model: "Mercedes Sprinter".to_string(),
            capacity: None,
            status: None,
            latitude: None,
            longitude: None,
            equipment: None,
            fuel_level: Some(150),
            mileage: None,
        };
        assert!(request.validate().is_err());
    }

    #[test]
    fn test_location_request_rejects_bad_coordinates() {
        let request = UpdateLocationRequest {
            latitude: 95.0,
            longitude: 2.35,
        };
        assert!(request.validate().is_err());
    }
}
