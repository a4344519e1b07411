//! Common transport-layer types shared between the prediction backend and the
//! browser client. These structs mirror the `/api/predict` request/response
//! payloads so the client can decode responses without duplicating shapes.

mod format;
mod prediction;
mod timestamp;

pub use format::{fixed2, signed_fixed2};
pub use prediction::{
    CurrentPrice, DayForecast, DecodeError, ForecastResponse, MonthForecast, Prediction,
    WeekForecast,
};
pub use timestamp::{format_last_updated, parse_timestamp, INVALID_DATE};

use serde::{Deserialize, Serialize};
use std::fmt;

/// Forecast window requested from the backend.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Horizon {
    /// Next trading day only.
    Day,
    /// Seven daily points.
    Week,
    /// Four weekly averages.
    Month,
}

impl Horizon {
    pub const ALL: [Horizon; 3] = [Horizon::Day, Horizon::Week, Horizon::Month];

    /// Wire name used in the request body.
    pub fn as_str(&self) -> &'static str {
        match self {
            Horizon::Day => "day",
            Horizon::Week => "week",
            Horizon::Month => "month",
        }
    }
}

impl fmt::Display for Horizon {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Request body for `POST /api/predict` (mirrors backend).
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct ForecastRequest {
    #[serde(rename = "type")]
    pub horizon: Horizon,
}

impl ForecastRequest {
    pub fn new(horizon: Horizon) -> Self {
        Self { horizon }
    }

    /// The request issued once at page start to fill the price ticker.
    pub fn bootstrap() -> Self {
        Self::new(Horizon::Day)
    }
}
