// HTTP response utilities for API errors
use crate::application::errors::ForecastError;
use crate::domain::coordinate::CoordinateError;
use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Serialize;

const UPSTREAM_FAILURE_DETAIL: &str = "Weather provider failed to respond correctly.";
const INTERNAL_ERROR_DETAIL: &str = "An unexpected internal error occurred.";

#[derive(Debug, Serialize)]
struct ErrorBody {
    detail: String,
}

/// Error returned by handlers, rendered as `{"detail": ...}`.
#[derive(Debug)]
pub enum ApiError {
    InvalidCoordinate(CoordinateError),
    UpstreamUnavailable,
    Internal,
}

impl ApiError {
    pub fn status(&self) -> StatusCode {
        match self {
            Self::InvalidCoordinate(_) => StatusCode::UNPROCESSABLE_ENTITY,
            Self::UpstreamUnavailable => StatusCode::BAD_GATEWAY,
            Self::Internal => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn detail(&self) -> String {
        match self {
            Self::InvalidCoordinate(e) => e.to_string(),
            Self::UpstreamUnavailable => UPSTREAM_FAILURE_DETAIL.to_string(),
            Self::Internal => INTERNAL_ERROR_DETAIL.to_string(),
        }
    }
}

impl From<CoordinateError> for ApiError {
    fn from(err: CoordinateError) -> Self {
        Self::InvalidCoordinate(err)
    }
}

impl From<ForecastError> for ApiError {
    fn from(err: ForecastError) -> Self {
        if err.is_upstream_unavailable() {
            Self::UpstreamUnavailable
        } else {
            tracing::error!(error = %err, "Forecast request failed");
            Self::Internal
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let body = ErrorBody {
            detail: self.detail(),
        };
        (self.status(), Json(body)).into_response()
    }
}
