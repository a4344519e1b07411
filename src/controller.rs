//! The prediction request/render state machine.

use crate::chart::{ChartBackend, ChartSlots};
use crate::config::{ControllerConfig, StalePolicy};
use crate::error::{ForecastError, Result};
use crate::render::{Region, RenderTarget};
use crate::scheduler::Scheduler;
use crate::state::UiState;
use crate::transport::ForecastTransport;
use crate::views::{render_prediction, ErrorView, ResultView};
use common::{ForecastRequest, ForecastResponse, Horizon, Prediction};
use std::cell::Cell;
use std::rc::Rc;

/// Drives one page: issues forecast requests and routes their outcome to the
/// matching view.
///
/// Requests may overlap. Nothing is cancelled; each request still clears the
/// loading indicator when it resolves, and [`StalePolicy`] decides whether a
/// response to a superseded request is rendered.
pub struct RequestController<T, R, C: ChartBackend, S> {
    transport: T,
    target: R,
    charts: ChartSlots<C>,
    scheduler: S,
    config: ControllerConfig,
    state: Rc<Cell<UiState>>,
    error_view: ErrorView<R>,
    generation: Cell<u64>,
}

impl<T, R, C, S> RequestController<T, R, C, S>
where
    T: ForecastTransport,
    R: RenderTarget + Clone + 'static,
    C: ChartBackend + Clone,
    S: Scheduler,
{
    pub fn new(transport: T, target: R, backend: C, scheduler: S, config: ControllerConfig) -> Self {
        let state = Rc::new(Cell::new(UiState::Idle));
        let error_view = ErrorView::new(target.clone(), state.clone(), config.error_dismiss_ms);
        Self {
            transport,
            target,
            charts: ChartSlots::new(backend),
            scheduler,
            config,
            state,
            error_view,
            generation: Cell::new(0),
        }
    }
}

impl<T, R, C, S> RequestController<T, R, C, S>
where
    T: ForecastTransport,
    R: RenderTarget + Clone + 'static,
    C: ChartBackend,
    S: Scheduler,
{
    pub fn state(&self) -> UiState {
        self.state.get()
    }

    pub fn charts(&self) -> &ChartSlots<C> {
        &self.charts
    }

    /// Requests a forecast for `horizon` and renders the outcome.
    ///
    /// Never fails: every error ends up in the error view.
    pub async fn request_forecast(&self, horizon: Horizon) {
        let generation = self.generation.get() + 1;
        self.generation.set(generation);
        log::info!("Requesting {} forecast (request #{})", horizon, generation);

        self.hide_all_results();
        self.target.set_visible(Region::Loading, true);
        self.transition(UiState::Loading);

        let outcome = self.fetch(horizon).await;

        if generation != self.generation.get() {
            match self.config.stale_policy {
                StalePolicy::Discard => {
                    log::debug!(
                        "Discarding response to request #{}, #{} is newer",
                        generation,
                        self.generation.get()
                    );
                    return;
                }
                StalePolicy::Apply => {
                    log::debug!("Applying response to superseded request #{}", generation);
                }
            }
        }

        self.target.set_visible(Region::Loading, false);
        self.transition(UiState::Idle);

        if let Err(err) = outcome.and_then(|prediction| self.show_prediction(&prediction)) {
            log::error!("{} forecast failed: {}", horizon, err);
            self.show_error(&err.user_message());
        }
    }

    /// Hides the three result views and the error view.
    pub fn hide_all_results(&self) {
        for view in [ResultView::Day, ResultView::Week, ResultView::Month] {
            self.target.set_visible(view.region(), false);
        }
        self.error_view.hide();
        if self.state.get().view().is_some() {
            self.transition(UiState::Idle);
        }
    }

    /// Shows `message` in the error view, hiding it again after the
    /// configured delay.
    pub fn show_error(&self, message: &str) {
        for view in [ResultView::Day, ResultView::Week, ResultView::Month] {
            self.target.set_visible(view.region(), false);
        }
        self.error_view.show(&self.scheduler, message);
    }

    async fn fetch(&self, horizon: Horizon) -> Result<Prediction> {
        let request = ForecastRequest::new(horizon);
        let body = self.transport.post_forecast(&request).await?;

        log::trace!("{} forecast - response received, parsing JSON", horizon);
        match ForecastResponse::decode(horizon, &body)? {
            ForecastResponse::Success(prediction) => Ok(prediction),
            ForecastResponse::Failure { error } => Err(ForecastError::Rejected(error)),
        }
    }

    fn show_prediction(&self, prediction: &Prediction) -> Result<()> {
        let view = ResultView::for_horizon(prediction.horizon());
        self.target.set_visible(Region::ResultsContainer, true);
        for other in [ResultView::Day, ResultView::Week, ResultView::Month] {
            if other != view {
                self.target.set_visible(other.region(), false);
            }
        }
        self.error_view.hide();

        if let Err(err) = render_prediction(&self.target, &self.charts, prediction) {
            self.target.set_visible(view.region(), false);
            return Err(err.into());
        }
        self.transition(UiState::showing(view));
        log::info!("{} forecast rendered", prediction.horizon());
        Ok(())
    }

    fn transition(&self, next: UiState) {
        let previous = self.state.replace(next);
        if previous != next {
            log::debug!("UI state: {:?} -> {:?}", previous, next);
        }
    }
}
