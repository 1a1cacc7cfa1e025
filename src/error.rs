//! Error types and handling for the world info service

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Serialize;
use thiserror::Error;

/// Main error type for the world info service
#[derive(Error, Debug)]
pub enum WorldInfoError {
    /// Geocoding produced no usable match
    #[error("Place not found: {query}")]
    PlaceNotFound { query: String },

    /// Weather/time lookup failed or returned an unexpected shape
    #[error("Conditions unavailable: {message}")]
    ConditionsUnavailable { message: String },

    /// Configuration-related errors
    #[error("Configuration error: {message}")]
    Config { message: String },

    /// I/O operation errors
    #[error("I/O error: {source}")]
    Io {
        #[from]
        source: std::io::Error,
    },
}

/// JSON body returned for every failed request
#[derive(Debug, Serialize)]
pub struct ErrorPayload {
    pub errore: String,
}

impl WorldInfoError {
    /// Create a new place-not-found error
    pub fn place_not_found<S: Into<String>>(query: S) -> Self {
        Self::PlaceNotFound {
            query: query.into(),
        }
    }

    /// Create a new conditions-unavailable error
    pub fn conditions_unavailable<S: Into<String>>(message: S) -> Self {
        Self::ConditionsUnavailable {
            message: message.into(),
        }
    }

    /// Create a new configuration error
    pub fn config<S: Into<String>>(message: S) -> Self {
        Self::Config {
            message: message.into(),
        }
    }

    /// HTTP status the error is reported with
    #[must_use]
    pub fn status_code(&self) -> StatusCode {
        match self {
            WorldInfoError::PlaceNotFound { .. } => StatusCode::NOT_FOUND,
            WorldInfoError::ConditionsUnavailable { .. }
            | WorldInfoError::Config { .. }
            | WorldInfoError::Io { .. } => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Get the user-facing message placed in the error payload
    #[must_use]
    pub fn user_message(&self) -> String {
        match self {
            WorldInfoError::PlaceNotFound { .. } => "Città non trovata".to_string(),
            WorldInfoError::ConditionsUnavailable { .. } => {
                "Errore nel recupero dati meteo/orario".to_string()
            }
            WorldInfoError::Config { .. } | WorldInfoError::Io { .. } => {
                "Errore interno del servizio".to_string()
            }
        }
    }
}

impl IntoResponse for WorldInfoError {
    fn into_response(self) -> Response {
        let payload = ErrorPayload {
            errore: self.user_message(),
        };
        (self.status_code(), Json(payload)).into_response()
    }
}
