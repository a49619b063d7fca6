use axum::{
    extract::rejection::{PathRejection, QueryRejection},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RosterError {
    #[error("Activity not found")]
    ActivityNotFound,

    #[error("Student already signed up")]
    AlreadySignedUp,

    #[error("Student not signed up for this activity")]
    NotSignedUp,

    #[error("Missing required query parameter: email")]
    MissingEmail,

    #[error("{0}")]
    InvalidRequest(String),
}

impl RosterError {
    pub fn status(&self) -> StatusCode {
        match self {
            RosterError::ActivityNotFound => StatusCode::NOT_FOUND,
            RosterError::AlreadySignedUp | RosterError::NotSignedUp => StatusCode::BAD_REQUEST,
            RosterError::MissingEmail | RosterError::InvalidRequest(_) => {
                StatusCode::UNPROCESSABLE_ENTITY
            }
        }
    }
}

impl From<PathRejection> for RosterError {
    fn from(rejection: PathRejection) -> Self {
        RosterError::InvalidRequest(rejection.body_text())
    }
}

impl From<QueryRejection> for RosterError {
    fn from(rejection: QueryRejection) -> Self {
        RosterError::InvalidRequest(rejection.body_text())
    }
}

#[derive(Debug, Serialize)]
pub struct ErrorBody {
    pub detail: String,
}

impl IntoResponse for RosterError {
    fn into_response(self) -> Response {
        let body = Json(ErrorBody {
            detail: self.to_string(),
        });
        (self.status(), body).into_response()
    }
}

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Invalid value for {key}: {value:?}")]
    Invalid { key: &'static str, value: String },
}

pub type Result<T> = std::result::Result<T, RosterError>;
