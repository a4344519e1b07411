use crate::error::{Result, PRICE_ERROR_MESSAGE};
use crate::render::{Field, RenderTarget};
use crate::transport::ForecastTransport;
use chrono::{Local, TimeZone};
use common::{fixed2, format_last_updated, parse_timestamp, CurrentPrice, ForecastRequest};
use std::fmt::Display;

/// Fills the header price ticker once at page start.
pub struct BootstrapLoader<T, R> {
    transport: T,
    target: R,
}

impl<T: ForecastTransport, R: RenderTarget> BootstrapLoader<T, R> {
    pub fn new(transport: T, target: R) -> Self {
        Self { transport, target }
    }

    /// Loads the current price, showing the timestamp in the local zone.
    pub async fn load(&self) {
        self.load_in(&Local).await
    }

    pub async fn load_in<Tz>(&self, zone: &Tz)
    where
        Tz: TimeZone,
        Tz::Offset: Display,
    {
        log::debug!("Loading current price");
        match self.fetch().await {
            Ok(Some(price)) => {
                let timestamp = price
                    .timestamp
                    .as_ref()
                    .and_then(|value| parse_timestamp(value, zone));
                self.target
                    .set_text(Field::CurrentPrice, &format!("${}", fixed2(price.current_price)));
                self.target
                    .set_text(Field::LastUpdated, &format_last_updated(timestamp, zone));
                log::info!("Current price loaded: {}", price.current_price);
            }
            Ok(None) => log::warn!("Backend did not report a current price"),
            Err(err) => {
                log::error!("Error loading current price: {}", err);
                self.target.set_error_text(Field::CurrentPrice, PRICE_ERROR_MESSAGE);
            }
        }
    }

    async fn fetch(&self) -> Result<Option<CurrentPrice>> {
        let body = self.transport.post_forecast(&ForecastRequest::bootstrap()).await?;
        Ok(CurrentPrice::decode(&body)?)
    }
}
