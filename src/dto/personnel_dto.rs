//! DTOs Personnel

use serde::Deserialize;
use uuid::Uuid;
use validator::Validate;

use crate::models::personnel::{PersonnelRole, PersonnelStatus};
use crate::utils::validation::validate_phone;

/// Request pour créer un membre du personnel
#[derive(Debug, Deserialize, Validate)]
pub struct CreatePersonnelRequest {
    pub user_id: Uuid,

    #[validate(length(min = 2, max = 50))]
    pub first_name: String,

    #[validate(length(min = 2, max = 50))]
    pub last_name: String,

    pub role: PersonnelRole,

    pub qualifications: Option<Vec<String>>,

    #[validate(custom = "validate_phone")]
    pub phone: String,

    #[validate(email)]
    pub email: String,

    pub status: Option<PersonnelStatus>,
    pub assigned_ambulance_id: Option<Uuid>,
}

/// Request pour mettre à jour un membre du personnel (champs partiels)
#[derive(Debug, Deserialize, Validate)]
pub struct UpdatePersonnelRequest {
    #[validate(length(min = 2, max = 50))]
    pub first_name: Option<String>,

    #[validate(length(min = 2, max = 50))]
    pub last_name: Option<String>,

    pub role: Option<PersonnelRole>,

    pub qualifications: Option<Vec<String>>,

    #[validate(custom = "validate_phone")]
    pub phone: Option<String>,

    #[validate(email)]
    pub email: Option<String>,

    pub status: Option<PersonnelStatus>,
    pub assigned_ambulance_id: Option<Uuid>,
}
