use axum::{
    extract::rejection::{PathRejection, QueryRejection},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use std::path::PathBuf;
use thiserror::Error;

/// Client-facing failures of the roster operations.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RosterError {
    #[error("Activity not found")]
    ActivityNotFound,
    #[error("Student not found in this activity")]
    ParticipantNotFound,
    #[error("Student is already signed up for this activity")]
    AlreadySignedUp,
    #[error("Activity is full")]
    ActivityFull,
    #[error("Email is required")]
    MissingEmail,
    /// The path or query string could not be extracted.
    #[error("{0}")]
    InvalidRequest(String),
}

impl RosterError {
    pub fn status(&self) -> StatusCode {
        match self {
            RosterError::ActivityNotFound | RosterError::ParticipantNotFound => {
                StatusCode::NOT_FOUND
            }
            RosterError::AlreadySignedUp
            | RosterError::MissingEmail
            | RosterError::InvalidRequest(_) => StatusCode::BAD_REQUEST,
            RosterError::ActivityFull => StatusCode::CONFLICT,
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
        let body = ErrorBody {
            detail: self.to_string(),
        };
        (self.status(), Json(body)).into_response()
    }
}

/// Problems with the activity set loaded at startup.
#[derive(Debug, Error)]
pub enum SeedError {
    #[error("failed to read seed file {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to parse seed file {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
    #[error("activity names must not be blank")]
    BlankName,
    #[error("activity name {0:?} appears more than once")]
    DuplicateActivity(String),
    #[error("activity {activity:?} lists {email:?} more than once")]
    DuplicateParticipant { activity: String, email: String },
    #[error("activity {activity:?} has {count} participants but room for {max}")]
    OverCapacity {
        activity: String,
        count: usize,
        max: usize,
    },
}
