use std::sync::PoisonError;

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum AppError {
    #[error("Email already exists: {email}")]
    DuplicateEmail { name: String, email: String },

    #[error("Invalid id: '{0}'")]
    InvalidIdFormat(String),

    #[error("{0} Not found")]
    NotFound(String),

    #[error("Contact store lock poisoned: {0}")]
    Lock(String),

    #[error("Template rendering failed: {0}")]
    Template(#[from] askama::Error),

    #[error("I/O error while accessing a file or resource: {0}")]
    Io(#[from] std::io::Error),
}

impl<T> From<PoisonError<T>> for AppError {
    fn from(err: PoisonError<T>) -> Self {
        AppError::Lock(err.to_string())
    }
}

impl AppError {
    pub fn status(&self) -> StatusCode {
        match self {
            AppError::DuplicateEmail { .. } => StatusCode::UNPROCESSABLE_ENTITY,
            AppError::InvalidIdFormat(_) => StatusCode::BAD_REQUEST,
            AppError::NotFound(_) => StatusCode::NOT_FOUND,
            _ => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status();
        let body = match &self {
            AppError::InvalidIdFormat(_) => "Invalid id".to_string(),
            AppError::NotFound(_) => "id doesn't exist".to_string(),
            _ if status.is_client_error() => self.to_string(),
            _ => {
                tracing::error!(error = %self, "request failed");
                "Internal server error".to_string()
            }
        };
        (status, body).into_response()
    }
}

#[cfg(test)]
mod tests {
    use std::sync::{Arc, Mutex};
    use std::thread;

    use super::*;

    #[test]
    fn confirm_parse_int_error_maps_to_bad_request() {
        let raw = "abc";
        let err = raw
            .parse::<u64>()
            .map_err(|_| AppError::InvalidIdFormat(raw.to_string()))
            .unwrap_err();

        assert_eq!(format!("{}", err), "Invalid id: 'abc'");
        assert_eq!(err.status(), StatusCode::BAD_REQUEST);
    }

    #[test]
    fn confirm_not_found_message() {
        let err = AppError::NotFound("Contact".to_string());

        assert_eq!(format!("{}", err), "Contact Not found");
        assert_eq!(err.into_response().status(), StatusCode::NOT_FOUND);
    }

    #[test]
    fn duplicate_email_is_unprocessable() {
        let err = AppError::DuplicateEmail {
            name: "E".to_string(),
            email: "a@a.com".to_string(),
        };

        assert!(format!("{}", err).contains("a@a.com"));
        assert_eq!(
            err.into_response().status(),
            StatusCode::UNPROCESSABLE_ENTITY
        );
    }

    #[test]
    fn poisoned_lock_becomes_lock_error() {
        let shared = Arc::new(Mutex::new(0u8));
        let poisoner = Arc::clone(&shared);

        let _ = thread::spawn(move || {
            let _guard = poisoner.lock().unwrap();
            panic!("poison the lock");
        })
        .join();

        let err: AppError = shared.lock().unwrap_err().into();
        assert!(matches!(err, AppError::Lock(_)));
        assert_eq!(err.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }
}
