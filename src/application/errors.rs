// Error types shared by the forecast use case
use crate::domain::local_time::TimestampParseError;
use std::sync::Arc;

/// Failure talking to one of the upstream HTTP services.
#[derive(Debug, thiserror::Error)]
pub enum UpstreamError {
    #[error("request to {service} failed: {source}")]
    Transport {
        service: &'static str,
        #[source]
        source: reqwest::Error,
    },
    #[error("{service} responded with status {status}")]
    Status {
        service: &'static str,
        status: reqwest::StatusCode,
    },
    #[error("{service} returned an unreadable payload: {source}")]
    Decode {
        service: &'static str,
        #[source]
        source: serde_json::Error,
    },
}

#[derive(Debug, thiserror::Error)]
pub enum ForecastError {
    /// Shared between every caller that waited on the same cache entry.
    #[error(transparent)]
    Upstream(#[from] Arc<UpstreamError>),
    #[error(transparent)]
    Timestamp(#[from] TimestampParseError),
}

impl ForecastError {
    /// True when the weather provider could not be reached or refused the request.
    pub fn is_upstream_unavailable(&self) -> bool {
        match self {
            Self::Upstream(err) => !matches!(err.as_ref(), UpstreamError::Decode { .. }),
            Self::Timestamp(_) => false,
        }
    }
}

impl From<UpstreamError> for ForecastError {
    fn from(err: UpstreamError) -> Self {
        Self::Upstream(Arc::new(err))
    }
}
