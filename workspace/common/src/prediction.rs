use crate::Horizon;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use thiserror::Error;

/// Errors raised while turning a response body into typed forecast data.
#[derive(Error, Debug)]
pub enum DecodeError {
    /// Body is not JSON, or a payload does not have the expected shape.
    #[error("Invalid response JSON: {0}")]
    Json(#[from] serde_json::Error),

    /// A successful response lacks a field it must carry.
    #[error("Response is missing `{0}`")]
    MissingField(&'static str),
}

/// Next-day forecast payload.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct DayForecast {
    pub next_day: f64,
    pub change: f64,
    pub change_percent: f64,
}

/// Seven-day forecast payload. `daily[0]` is day 1.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct WeekForecast {
    pub min: f64,
    pub avg: f64,
    pub max: f64,
    pub daily: [f64; 7],
}

/// Four-week forecast payload. `weekly_avg[0]` is week 1.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct MonthForecast {
    pub min: f64,
    pub avg: f64,
    pub max: f64,
    pub weekly_avg: [f64; 4],
}

/// Horizon-specific forecast payload.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Prediction {
    Day(DayForecast),
    Week(WeekForecast),
    Month(MonthForecast),
}

impl Prediction {
    /// Decodes the `prediction` object using the shape the horizon implies.
    pub fn from_value(horizon: Horizon, value: Value) -> Result<Self, DecodeError> {
        Ok(match horizon {
            Horizon::Day => Prediction::Day(serde_json::from_value(value)?),
            Horizon::Week => Prediction::Week(serde_json::from_value(value)?),
            Horizon::Month => Prediction::Month(serde_json::from_value(value)?),
        })
    }

    pub fn horizon(&self) -> Horizon {
        match self {
            Prediction::Day(_) => Horizon::Day,
            Prediction::Week(_) => Horizon::Week,
            Prediction::Month(_) => Horizon::Month,
        }
    }
}

/// Raw `/api/predict` response. Fields beyond these are ignored, and the
/// ticker fields stay untyped until [`CurrentPrice::decode`] reads them.
#[derive(Debug, Deserialize)]
struct Envelope {
    #[serde(default)]
    success: bool,
    #[serde(default)]
    error: Option<String>,
    #[serde(default)]
    prediction: Option<Value>,
    #[serde(default)]
    current_price: Option<Value>,
    #[serde(default)]
    timestamp: Option<Value>,
}

/// Outcome reported by the backend for one forecast request.
#[derive(Debug, Clone, PartialEq)]
pub enum ForecastResponse {
    Success(Prediction),
    Failure { error: Option<String> },
}

impl ForecastResponse {
    /// Decodes a response body for a request made with `horizon`.
    ///
    /// Only `success: true` is treated as success; a missing flag counts as a
    /// failure without a message.
    pub fn decode(horizon: Horizon, body: &str) -> Result<Self, DecodeError> {
        let envelope: Envelope = serde_json::from_str(body)?;
        if !envelope.success {
            return Ok(ForecastResponse::Failure {
                error: envelope.error,
            });
        }

        let raw = envelope
            .prediction
            .ok_or(DecodeError::MissingField("prediction"))?;
        Ok(ForecastResponse::Success(Prediction::from_value(horizon, raw)?))
    }
}

/// Header ticker data carried by the day response.
#[derive(Debug, Clone, PartialEq)]
pub struct CurrentPrice {
    pub current_price: f64,
    /// Left raw: the backend may send a string or an epoch number.
    pub timestamp: Option<Value>,
}

impl CurrentPrice {
    /// Returns `Ok(None)` when the backend reports `success: false`.
    pub fn decode(body: &str) -> Result<Option<Self>, DecodeError> {
        let envelope: Envelope = serde_json::from_str(body)?;
        if !envelope.success {
            return Ok(None);
        }

        let raw = envelope
            .current_price
            .ok_or(DecodeError::MissingField("current_price"))?;
        let current_price: f64 = serde_json::from_value(raw)?;
        Ok(Some(CurrentPrice {
            current_price,
            timestamp: envelope.timestamp,
        }))
    }
}
