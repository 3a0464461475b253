//! Middleware d'authentification
//!
//! Vérifie le token Bearer, recharge l'utilisateur (rejet des comptes
//! désactivés depuis l'émission du token) et insère `AuthUser` dans les
//! extensions de la requête. Trois niveaux de gate:
//! - `require_auth`: tout utilisateur authentifié actif;
//! - `require_dispatcher`: admin ou régulateur;
//! - `require_admin`: admin uniquement.

use axum::{
    extract::{Request, State},
    http::HeaderMap,
    middleware::Next,
    response::Response,
};
use uuid::Uuid;

use crate::models::user::UserRole;
use crate::services::auth_service::AuthService;
use crate::state::AppState;
use crate::utils::errors::AppError;
use crate::utils::jwt::verify_token;

/// Utilisateur authentifié, injecté dans les extensions de requête
#[derive(Debug, Clone)]
pub struct AuthUser {
    pub id: Uuid,
    pub username: String,
    pub role: UserRole,
}

/// Extraire le token Bearer du header Authorization
fn bearer_token(headers: &HeaderMap) -> Result<&str, AppError> {
    let auth_header = headers
        .get("Authorization")
        .and_then(|h| h.to_str().ok())
        .ok_or_else(|| AppError::Unauthorized("Missing Authorization header".to_string()))?;

    auth_header
        .strip_prefix("Bearer ")
        .ok_or_else(|| AppError::Unauthorized("Invalid Authorization header".to_string()))
}

/// Authentifier la requête et construire l'AuthUser
async fn authenticate(state: &AppState, headers: &HeaderMap) -> Result<AuthUser, AppError> {
    let token = bearer_token(headers)?;
    let claims = verify_token(token, &state.jwt_config())?;

    let auth_service = AuthService::new(state.pool.clone(), state.jwt_config());
    let user = auth_service.current_user(&claims).await?;

    Ok(AuthUser {
        id: user.id,
        username: user.username,
        role: user.role,
    })
}

/// Gate: tout utilisateur authentifié actif
pub async fn require_auth(
    State(state): State<AppState>,
    mut request: Request,
    next: Next,
) -> Result<Response, AppError> {
    let user = authenticate(&state, request.headers()).await?;
    request.extensions_mut().insert(user);
    Ok(next.run(request).await)
}

/// Gate: écritures réservées aux admins et régulateurs
pub async fn require_dispatcher(
    State(state): State<AppState>,
    mut request: Request,
    next: Next,
) -> Result<Response, AppError> {
    let user = authenticate(&state, request.headers()).await?;

    if !user.role.is_dispatcher() {
        return Err(AppError::Forbidden(
            "Admin or regulateur role required".to_string(),
        ));
    }

    request.extensions_mut().insert(user);
    Ok(next.run(request).await)
}

/// Gate: gestion des comptes réservée aux admins
pub async fn require_admin(
    State(state): State<AppState>,
    mut request: Request,
    next: Next,
) -> Result<Response, AppError> {
    let user = authenticate(&state, request.headers()).await?;

    if user.role != UserRole::Admin {
        return Err(AppError::Forbidden("Admin role required".to_string()));
    }

    request.extensions_mut().insert(user);
    Ok(next.run(request).await)
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::HeaderValue;

    #[test]
    fn test_bearer_token_extraction() {
        let mut headers = HeaderMap::new();
        headers.insert("Authorization", HeaderValue::from_static("Bearer abc.def.ghi"));
        assert_eq!(bearer_token(&headers).unwrap(), "abc.def.ghi");
    }

    #[test]
    fn test_missing_header_is_unauthorized() {
        let headers = HeaderMap::new();
        assert!(matches!(
            bearer_token(&headers),
            Err(AppError::Unauthorized(_))
        ));
    }

    #[test]
    fn test_non_bearer_scheme_is_rejected() {
        let mut headers = HeaderMap::new();
        headers.insert("Authorization", HeaderValue::from_static("Basic dXNlcjpwdw=="));
        assert!(bearer_token(&headers).is_err());
    }
}
