use axum::http::StatusCode;
use thiserror::Error;

use super::{impl_into_response, AppError};

/// Errors raised by geo object data access
#[derive(Error, Debug)]
pub enum GeoObjectError {
    #[error("Geo object with ID {id} not found")]
    NotFound { id: i32 },

    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),
}

impl AppError for GeoObjectError {
    fn status_code(&self) -> StatusCode {
        match self {
            GeoObjectError::NotFound { .. } => StatusCode::NOT_FOUND,
            GeoObjectError::Database(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn user_message(&self) -> String {
        match self {
            GeoObjectError::NotFound { .. } => "Geo object not found".to_string(),
            GeoObjectError::Database(_) => "An internal error occurred".to_string(),
        }
    }

    fn error_code(&self) -> &'static str {
        match self {
            GeoObjectError::NotFound { .. } => "GEO_OBJECT_NOT_FOUND",
            GeoObjectError::Database(_) => "GEO_OBJECT_DATABASE_ERROR",
        }
    }

    fn suggested_action(&self) -> Option<String> {
        match self {
            GeoObjectError::NotFound { .. } => {
                Some("Refresh the object list, the object may have been removed".to_string())
            }
            GeoObjectError::Database(_) => None,
        }
    }
}

impl_into_response!(GeoObjectError);

impl GeoObjectError {
    pub fn not_found(id: i32) -> Self {
        Self::NotFound { id }
    }

    pub fn is_not_found(&self) -> bool {
        matches!(self, GeoObjectError::NotFound { .. })
    }
}
