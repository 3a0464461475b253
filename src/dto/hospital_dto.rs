//! DTOs Hospital

use serde::Deserialize;
use validator::Validate;

use crate::utils::validation::validate_phone;

/// Request pour créer un hôpital
#[derive(Debug, Deserialize, Validate)]
pub struct CreateHospitalRequest {
    #[validate(length(min = 2, max = 200))]
    pub name: String,

    #[validate(length(min = 5, max = 500))]
    pub address: String,

    #[validate(custom = "validate_phone")]
    pub phone: String,

    #[validate(email)]
    pub email: Option<String>,

    #[validate(range(min = -90.0, max = 90.0))]
    pub latitude: f64,

    #[validate(range(min = -180.0, max = 180.0))]
    pub longitude: f64,

    #[validate(range(min = 0))]
    pub emergency_beds: Option<i32>,

    #[validate(range(min = 0))]
    pub icu_beds: Option<i32>,

    #[validate(range(min = 0))]
    pub general_beds: Option<i32>,

    pub specialties: Option<Vec<String>>,
    pub is_active: Option<bool>,
}

/// Request pour mettre à jour un hôpital (champs partiels)
#[derive(Debug, Deserialize, Validate)]
pub struct UpdateHospitalRequest {
    #[validate(length(min = 2, max = 200))]
    pub name: Option<String>,

    #[validate(length(min = 5, max = 500))]
    pub address: Option<String>,

    #[validate(custom = "validate_phone")]
    pub phone: Option<String>,

    #[validate(email)]
    pub email: Option<String>,

    #[validate(range(min = -90.0, max = 90.0))]
    pub latitude: Option<f64>,

    #[validate(range(min = -180.0, max = 180.0))]
    pub longitude: Option<f64>,

    #[validate(range(min = 0))]
    pub emergency_beds: Option<i32>,

    #[validate(range(min = 0))]
    pub icu_beds: Option<i32>,

    #[validate(range(min = 0))]
    pub general_beds: Option<i32>,

    pub specialties: Option<Vec<String>>,
    pub is_active: Option<bool>,
}
