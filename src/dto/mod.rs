//! DTOs de l'API
//!
//! Ce module contient les structures de requête/réponse de chaque
//! ressource, avec leurs règles de validation.

pub mod ambulance_dto;
pub mod auth_dto;
pub mod common;
pub mod hospital_dto;
pub mod maintenance_dto;
pub mod mission_dto;
pub mod personnel_dto;
pub mod user_dto;
