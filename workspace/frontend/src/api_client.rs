use gloo_net::http::Request;
use gold_forecast::{ForecastRequest, ForecastTransport, TransportError};
use crate::settings;

/// Posts forecast requests to the prediction endpoint.
///
/// The HTTP status is only logged; the JSON body decides the outcome.
#[derive(Debug, Clone, PartialEq)]
pub struct HttpTransport {
    url: String,
}

impl HttpTransport {
    pub fn new(url: impl Into<String>) -> Self {
        Self { url: url.into() }
    }

    /// Endpoint taken from the global settings
    pub fn from_settings() -> Self {
        Self::new(settings::get_settings().predict_url())
    }

    pub fn url(&self) -> &str {
        &self.url
    }
}

impl ForecastTransport for HttpTransport {
    async fn post_forecast(&self, request: &ForecastRequest) -> Result<String, TransportError> {
        log::debug!("POST request to: {} ({})", self.url, request.horizon);

        let response = Request::post(&self.url)
            .json(request)
            .map_err(|e| {
                let error_msg = format!("Failed to serialize request: {}", e);
                log::error!("POST {} - {}", self.url, error_msg);
                TransportError(error_msg)
            })?
            .send()
            .await
            .map_err(|e| {
                let error_msg = format!("Request failed: {}", e);
                log::error!("POST {} - {}", self.url, error_msg);
                TransportError(error_msg)
            })?;

        if !response.ok() {
            log::warn!("POST {} - HTTP status {}", self.url, response.status());
        }

        log::trace!("POST {} - Response received, reading body", self.url);
        let body = response.text().await.map_err(|e| {
            let error_msg = format!("Failed to read response: {}", e);
            log::error!("POST {} - {}", self.url, error_msg);
            TransportError(error_msg)
        })?;

        log::info!("POST {} - {} bytes", self.url, body.len());
        Ok(body)
    }
}
