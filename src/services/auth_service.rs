//! Service d'authentification
//!
//! Login par username/mot de passe (bcrypt) et émission du token JWT.
//! L'échec de login reste volontairement opaque: même réponse pour un
//! username inconnu et un mot de passe erroné.

use bcrypt::verify;
use chrono::{Duration, Utc};
use sqlx::PgPool;
use validator::Validate;

use crate::dto::auth_dto::{LoginRequest, LoginResponse};
use crate::dto::user_dto::UserResponse;
use crate::models::user::User;
use crate::repositories::user_repository::UserRepository;
use crate::utils::errors::AppError;
use crate::utils::jwt::{generate_token, JwtClaims, JwtConfig};

pub struct AuthService {
    repository: UserRepository,
    jwt_config: JwtConfig,
}

impl AuthService {
    pub fn new(pool: PgPool, jwt_config: JwtConfig) -> Self {
        Self {
            repository: UserRepository::new(pool),
            jwt_config,
        }
    }

    pub async fn login(&self, request: LoginRequest) -> Result<LoginResponse, AppError> {
        request.validate()?;

        let user = self
            .repository
            .find_by_username(&request.username)
            .await?
            .ok_or_else(|| AppError::Unauthorized("Invalid credentials".to_string()))?;

        if !user.is_active {
            return Err(AppError::Unauthorized("Account is deactivated".to_string()));
        }

        let password_ok = verify(&request.password, &user.hashed_password)
            .map_err(|e| AppError::Hash(e.to_string()))?;

        if !password_ok {
            return Err(AppError::Unauthorized("Invalid credentials".to_string()));
        }

        let token = generate_token(user.id, &user.username, &user.role, &self.jwt_config)?;
        let expires_at = Utc::now() + Duration::seconds(self.jwt_config.expiration as i64);

        self.repository.touch_last_login(user.id).await?;

        tracing::info!("✅ Login réussi: {} ({})", user.username, user.role.as_str());

        Ok(LoginResponse {
            token,
            expires_at,
            user: UserResponse::from(user),
        })
    }

    /// Recharger l'utilisateur porté par un token déjà vérifié.
    /// Rejette les comptes désactivés depuis l'émission du token.
    pub async fn current_user(&self, claims: &JwtClaims) -> Result<User, AppError> {
        let user = self
            .repository
            .find_by_id(claims.user_id()?)
            .await?
            .ok_or_else(|| AppError::Unauthorized("Unknown user".to_string()))?;

        if !user.is_active {
            return Err(AppError::Unauthorized("Account is deactivated".to_string()));
        }

        Ok(user)
    }
}
