use actix_web::http::StatusCode;
use actix_web::{HttpResponse, ResponseError};
use sea_orm::DbErr;
use serde::Serialize;
use thiserror::Error;

/// Errors surfaced to HTTP clients, rendered as a `{code, message}` body.
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("The entry that you are trying to insert, already exists")]
    Duplicate(#[source] DbErr),
    #[error("{0}")]
    NotFound(String),
    #[error("Internal error")]
    Db(#[source] DbErr),
}

impl From<DbErr> for ApiError {
    fn from(err: DbErr) -> Self {
        // Postgres unique-violation messages all carry this phrase.
        if err.to_string().contains("duplicate key value") {
            ApiError::Duplicate(err)
        } else {
            ApiError::Db(err)
        }
    }
}

#[derive(Serialize)]
struct ErrorBody {
    code: u16,
    message: String,
}

impl ResponseError for ApiError {
    fn status_code(&self) -> StatusCode {
        match self {
            ApiError::Duplicate(_) => StatusCode::CONFLICT,
            ApiError::NotFound(_) => StatusCode::NOT_FOUND,
            ApiError::Db(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn error_response(&self) -> HttpResponse {
        if let ApiError::Db(e) = self {
            tracing::error!("database error: {e}");
        }

        HttpResponse::build(self.status_code()).json(ErrorBody {
            code: self.status_code().as_u16(),
            message: self.to_string(),
        })
    }
}
