//! The forecasting backend, seen from the client.

use common::ForecastRequest;
use thiserror::Error;

/// The request never reached the backend, or its response never arrived.
#[derive(Error, Debug, Clone, PartialEq)]
#[error("Request failed: {0}")]
pub struct TransportError(pub String);

/// One attempt at `POST /api/predict`, no retries.
///
/// Returns the raw response body whatever the HTTP status: the JSON envelope,
/// not the status code, tells success from failure.
#[allow(async_fn_in_trait)]
pub trait ForecastTransport {
    async fn post_forecast(&self, request: &ForecastRequest) -> Result<String, TransportError>;
}
