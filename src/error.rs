use crate::chart::ChartError;
use crate::transport::TransportError;
use common::DecodeError;
use thiserror::Error;

/// Shown for transport and decode failures alike.
pub const NETWORK_ERROR_MESSAGE: &str = "Network error. Please try again.";

/// Shown when the backend refuses without saying why.
pub const PREDICTION_FAILED_MESSAGE: &str = "Prediction failed";

/// Shown when a chart could not be drawn.
pub const CHART_ERROR_MESSAGE: &str = "Unable to render the forecast chart.";

/// Shown in the header ticker when the bootstrap price could not be loaded.
pub const PRICE_ERROR_MESSAGE: &str = "Error loading price";

/// Error types for a forecast request
#[derive(Error, Debug)]
pub enum ForecastError {
    /// The request never reached the backend or returned from it
    #[error(transparent)]
    Transport(#[from] TransportError),

    /// The response body could not be decoded
    #[error("Decode error: {0}")]
    Decode(#[from] DecodeError),

    /// The backend answered `success: false`
    #[error("Prediction rejected: {}", .0.as_deref().unwrap_or("no message"))]
    Rejected(Option<String>),

    /// The result could not be charted
    #[error(transparent)]
    Chart(#[from] ChartError),
}

impl ForecastError {
    /// Text for the error view.
    pub fn user_message(&self) -> String {
        match self {
            ForecastError::Transport(_) | ForecastError::Decode(_) => {
                NETWORK_ERROR_MESSAGE.to_string()
            }
            ForecastError::Rejected(Some(message)) if !message.is_empty() => message.clone(),
            ForecastError::Rejected(_) => PREDICTION_FAILED_MESSAGE.to_string(),
            ForecastError::Chart(_) => CHART_ERROR_MESSAGE.to_string(),
        }
    }
}

/// Type alias for Result with ForecastError
pub type Result<T> = std::result::Result<T, ForecastError>;
