//! Modèles du système
//!
//! Ce module contient tous les modèles de données qui mappent exactement
//! au schéma PostgreSQL, avec les enums fermés correspondant aux types
//! ENUM de la base.

pub mod ambulance;
pub mod hospital;
pub mod maintenance;
pub mod mission;
pub mod personnel;
pub mod user;
