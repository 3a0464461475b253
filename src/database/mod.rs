//! Module de base de données
//!
//! Gère la connexion et les opérations avec PostgreSQL.

pub mod connection;

pub use connection::DatabaseConnection;
