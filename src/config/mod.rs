//! Configuration du projet
//!
//! Ce module contient la configuration de la base de données,
//! des variables d'environnement et du reste du système.

pub mod database;
pub mod environment;

pub use environment::*;
