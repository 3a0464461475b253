//! Configuration des variables d'environnement
//!
//! Ce module centralise la lecture des variables d'environnement
//! de l'application.

use std::env;

/// Configuration de l'environnement
#[derive(Debug, Clone)]
pub struct EnvironmentConfig {
    pub environment: String,
    pub port: u16,
    pub host: String,
    pub jwt_secret: String,
    pub jwt_expiration: u64,
    pub cors_origins: Vec<String>,
}

impl EnvironmentConfig {
    /// Charger la configuration depuis l'environnement
    pub fn from_env() -> Self {
        Self {
            environment: env::var("ENVIRONMENT").unwrap_or_else(|_| "development".to_string()),
            port: env::var("PORT")
                .unwrap_or_else(|_| "3000".to_string())
                .parse()
                .expect("PORT must be a valid number"),
            host: env::var("HOST").unwrap_or_else(|_| "0.0.0.0".to_string()),
            jwt_secret: env::var("JWT_SECRET").expect("JWT_SECRET must be set"),
            jwt_expiration: env::var("JWT_EXPIRATION")
                .unwrap_or_else(|_| "86400".to_string())
                .parse()
                .expect("JWT_EXPIRATION must be a valid number"),
            cors_origins: env::var("CORS_ORIGINS")
                .unwrap_or_default()
                .split(',')
                .filter(|s| !s.trim().is_empty())
                .map(|s| s.trim().to_string())
                .collect(),
        }
    }

    /// Vérifier si on est en mode développement
    pub fn is_development(&self) -> bool {
        self.environment == "development"
    }

    /// Vérifier si on est en mode production
    pub fn is_production(&self) -> bool {
        self.environment == "production"
    }

    /// Obtenir l'adresse du serveur
    pub fn server_url(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}
