//! Modèle User
//!
//! Mappe exactement à la table `users`. Le mot de passe n'est jamais
//! sérialisé vers l'API, seules les réponses DTO exposent l'utilisateur.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

/// Rôle applicatif - mappe à l'ENUM user_role
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, sqlx::Type)]
#[sqlx(type_name = "user_role", rename_all = "snake_case")]
#[serde(rename_all = "snake_case")]
pub enum UserRole {
    Admin,
    Regulateur,
    Ambulancier,
}

impl UserRole {
    pub fn as_str(&self) -> &'static str {
        match self {
            UserRole::Admin => "admin",
            UserRole::Regulateur => "regulateur",
            UserRole::Ambulancier => "ambulancier",
        }
    }

    pub fn from_label(s: &str) -> Option<Self> {
        match s {
            "admin" => Some(UserRole::Admin),
            "regulateur" => Some(UserRole::Regulateur),
            "ambulancier" => Some(UserRole::Ambulancier),
            _ => None,
        }
    }

    /// Les écritures (création, assignation, suppression) sont réservées
    /// aux administrateurs et régulateurs
    pub fn is_dispatcher(&self) -> bool {
        matches!(self, UserRole::Admin | UserRole::Regulateur)
    }
}

/// Utilisateur - mappe exactement à la table users
#[derive(Debug, Clone, FromRow)]
pub struct User {
    pub id: Uuid,
    pub username: String,
    pub email: String,
    pub hashed_password: String,
    pub first_name: String,
    pub last_name: String,
    pub phone: Option<String>,
    pub role: UserRole,
    pub is_active: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: Option<DateTime<Utc>>,
    pub last_login: Option<DateTime<Utc>>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_role_labels_roundtrip() {
        for role in [UserRole::Admin, UserRole::Regulateur, UserRole::Ambulancier] {
            assert_eq!(UserRole::from_label(role.as_str()), Some(role));
        }
        assert_eq!(UserRole::from_label("livreur"), None);
    }

    #[test]
    fn test_dispatcher_roles() {
        assert!(UserRole::Admin.is_dispatcher());
        assert!(UserRole::Regulateur.is_dispatcher());
        assert!(!UserRole::Ambulancier.is_dispatcher());
    }
}
