//! Backend de régulation d'ambulances
//!
//! API REST CRUD pour le suivi des ambulances, missions, hôpitaux,
//! personnel et maintenance. Le seul composant avec de la logique de
//! séquencement est le cycle de vie des missions (assignation,
//! transitions de statut, horodatages).

pub mod config;
pub mod controllers;
pub mod database;
pub mod dto;
pub mod middleware;
pub mod models;
pub mod repositories;
pub mod routes;
pub mod services;
pub mod state;
pub mod utils;
