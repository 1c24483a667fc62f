use actix_web::error::BlockingError;
use actix_web::http::StatusCode;
use actix_web::{HttpResponse, ResponseError};
use log::error;
use petstore_core::RepoError;
use serde::Serialize;
use thiserror::Error;

pub type ApiResult<T> = Result<T, ApiError>;

#[derive(Error, Debug)]
pub enum ApiError {
    #[error("{resource} not found")]
    NotFound { resource: &'static str },

    #[error("repository error: {source}")]
    Repo {
        #[from]
        source: RepoError,
    },

    #[error("blocking task failed")]
    Blocking {
        #[from]
        source: BlockingError,
    },

    #[error("database connection lock poisoned")]
    PoisonedConnection,

    #[error("password hashing failed: {0}")]
    PasswordHash(String),
}

#[derive(Serialize)]
struct ErrorBody<'a> {
    error: &'a str,
}

impl ResponseError for ApiError {
    fn status_code(&self) -> StatusCode {
        match self {
            ApiError::NotFound { .. }
            | ApiError::Repo {
                source: RepoError::NotFound { .. },
            } => StatusCode::NOT_FOUND,
            _ => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn error_response(&self) -> HttpResponse {
        let status = self.status_code();
        if status.is_server_error() {
            error!("event=request_failed module=http status=error error={self}");
            return HttpResponse::build(status).json(ErrorBody {
                error: "internal server error",
            });
        }

        let message = self.to_string();
        HttpResponse::build(status).json(ErrorBody { error: &message })
    }
}
