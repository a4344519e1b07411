//! Request/render state machine of the gold price forecast page.
//!
//! The page itself (markup, chart library, HTTP, timers) is reached through
//! four small traits: [`RenderTarget`], [`ChartBackend`], [`ForecastTransport`]
//! and [`Scheduler`]. The browser build lives in the `frontend` crate.

pub mod bootstrap;
pub mod chart;
pub mod config;
pub mod controller;
pub mod error;
pub mod render;
pub mod scheduler;
pub mod state;
pub mod transport;
pub mod views;

#[cfg(test)]
mod test_utils;

pub use bootstrap::BootstrapLoader;
pub use chart::{ChartBackend, ChartError, ChartSlot, ChartSlots, ChartSpec, Rgb, SlotId};
pub use config::{ControllerConfig, StalePolicy};
pub use controller::RequestController;
pub use error::{ForecastError, Result};
pub use render::{Field, Region, RenderTarget, Tone};
pub use scheduler::Scheduler;
pub use state::UiState;
pub use transport::{ForecastTransport, TransportError};
pub use views::ResultView;

pub use common::{ForecastRequest, Horizon};
