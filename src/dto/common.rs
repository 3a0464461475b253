//! DTOs communs à toutes les ressources

use serde::{Deserialize, Serialize};

/// Réponse générique de l'API
#[derive(Debug, Serialize)]
pub struct ApiResponse<T> {
    pub success: bool,
    pub message: Option<String>,
    pub data: Option<T>,
}

impl<T> ApiResponse<T> {
    pub fn success(data: T) -> Self {
        Self {
            success: true,
            message: None,
            data: Some(data),
        }
    }

    pub fn success_with_message(data: T, message: String) -> Self {
        Self {
            success: true,
            message: Some(message),
            data: Some(data),
        }
    }
}

impl ApiResponse<()> {
    pub fn error(message: String) -> Self {
        Self {
            success: false,
            message: Some(message),
            data: None,
        }
    }
}

/// Paramètres de pagination (query string ?skip=0&limit=100)
#[derive(Debug, Clone, Copy, Deserialize)]
pub struct Pagination {
    pub skip: Option<i64>,
    pub limit: Option<i64>,
}

impl Pagination {
    const DEFAULT_LIMIT: i64 = 100;
    const MAX_LIMIT: i64 = 500;

    pub fn skip(&self) -> i64 {
        self.skip.unwrap_or(0).max(0)
    }

    pub fn limit(&self) -> i64 {
        self.limit
            .unwrap_or(Self::DEFAULT_LIMIT)
            .clamp(1, Self::MAX_LIMIT)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pagination_defaults() {
        let p = Pagination {
            skip: None,
            limit: None,
        };
        assert_eq!(p.skip(), 0);
        assert_eq!(p.limit(), 100);
    }

    #[test]
    fn test_pagination_clamps_out_of_range_values() {
        let p = Pagination {
            skip: Some(-5),
            limit: Some(10_000),
        };
        assert_eq!(p.skip(), 0);
        assert_eq!(p.limit(), 500);
    }
}
