//! Repositories d'accès aux données
//!
//! Un repository par entité: requêtes SQLx typées, sans logique HTTP.

pub mod ambulance_repository;
pub mod hospital_repository;
pub mod maintenance_repository;
pub mod mission_repository;
pub mod personnel_repository;
pub mod user_repository;
