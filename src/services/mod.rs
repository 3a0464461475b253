//! Services applicatifs

pub mod auth_service;
