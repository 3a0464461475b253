//! Middlewares HTTP
//!
//! CORS et authentification/autorisation par rôle.

pub mod auth_middleware;
pub mod cors;
