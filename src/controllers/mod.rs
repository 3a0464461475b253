//! Controllers de l'API
//!
//! Un controller par ressource: validation des requests, contrôles
//! d'unicité et règles métier, délégation aux repositories.

pub mod ambulance_controller;
pub mod hospital_controller;
pub mod maintenance_controller;
pub mod mission_controller;
pub mod personnel_controller;
pub mod user_controller;
