//! Utilitaires du système
//!
//! Ce module contient les utilitaires de gestion d'erreurs, de validation
//! et de JWT partagés par toute l'application.

pub mod errors;
pub mod jwt;
pub mod validation;
