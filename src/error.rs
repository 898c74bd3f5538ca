use actix_web::http::StatusCode;
use actix_web::{HttpResponse, ResponseError};
use sea_orm::DbErr;
use thiserror::Error;

use crate::structs::routes_struct::HTTPErrorResponse;
use crate::structs::weapon_struct::{InvalidWeaponClass, ValidationErrors};

#[derive(Debug, Error)]
pub enum ApiError {
    #[error("No weapon found with id {0}")]
    NotFound(i32),

    #[error("Invalid weapon: {0}")]
    Validation(#[from] ValidationErrors),

    #[error("{0}")]
    InvalidWeaponClass(#[from] InvalidWeaponClass),

    #[error("{0}")]
    BadRequest(String),

    #[error("Database error: {0}")]
    Database(#[from] DbErr),
}

impl ResponseError for ApiError {
    fn status_code(&self) -> StatusCode {
        match self {
            ApiError::NotFound(_) => StatusCode::NOT_FOUND,
            ApiError::Validation(_) | ApiError::InvalidWeaponClass(_) | ApiError::BadRequest(_) => {
                StatusCode::BAD_REQUEST
            }
            ApiError::Database(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn error_response(&self) -> HttpResponse {
        let (message, errors) = match self {
            ApiError::Validation(e) => (self.to_string(), e.errors.clone()),
            ApiError::Database(e) => {
                tracing::error!(error = %e, "database failure");
                ("Failed to access the weapon database".to_string(), Vec::new())
            }
            _ => (self.to_string(), Vec::new()),
        };

        HttpResponse::build(self.status_code()).json(HTTPErrorResponse {
            success: false,
            message,
            errors,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_codes() {
        assert_eq!(ApiError::NotFound(3).status_code(), StatusCode::NOT_FOUND);
        assert_eq!(
            ApiError::from(InvalidWeaponClass("wizard".into())).status_code(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            ApiError::from(ValidationErrors::default()).status_code(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            ApiError::from(DbErr::Custom("boom".into())).status_code(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }

    #[test]
    fn invalid_class_message_says_invalid_value() {
        let error = ApiError::from(InvalidWeaponClass("wizard".into()));
        assert_eq!(error.to_string(), "invalid value 'wizard' for weapon class");
    }
}
