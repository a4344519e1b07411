//! Result views: each one fills its region from a payload of matching shape.

use crate::chart::{ChartBackend, ChartError, ChartSlots, SlotId};
use crate::render::{Field, Region, RenderTarget, Tone};
use crate::scheduler::Scheduler;
use crate::state::UiState;
use common::{fixed2, signed_fixed2, DayForecast, Horizon, MonthForecast, Prediction, WeekForecast};
use std::cell::Cell;
use std::rc::Rc;

/// The mutually exclusive result regions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ResultView {
    Day,
    Week,
    Month,
    Error,
}

impl ResultView {
    pub const ALL: [ResultView; 4] = [
        ResultView::Day,
        ResultView::Week,
        ResultView::Month,
        ResultView::Error,
    ];

    pub fn for_horizon(horizon: Horizon) -> Self {
        match horizon {
            Horizon::Day => ResultView::Day,
            Horizon::Week => ResultView::Week,
            Horizon::Month => ResultView::Month,
        }
    }

    pub fn region(&self) -> Region {
        match self {
            ResultView::Day => Region::DayResults,
            ResultView::Week => Region::WeekResults,
            ResultView::Month => Region::MonthResults,
            ResultView::Error => Region::Error,
        }
    }
}

/// Renders `prediction` into the view its shape belongs to.
pub fn render_prediction<R, C>(
    target: &R,
    charts: &ChartSlots<C>,
    prediction: &Prediction,
) -> Result<(), ChartError>
where
    R: RenderTarget,
    C: ChartBackend,
{
    match prediction {
        Prediction::Day(day) => {
            render_day(target, day);
            Ok(())
        }
        Prediction::Week(week) => render_week(target, charts, week),
        Prediction::Month(month) => render_month(target, charts, month),
    }
}

pub fn render_day<R: RenderTarget>(target: &R, day: &DayForecast) {
    target.set_visible(Region::DayResults, true);
    target.set_text(Field::NextDayPrice, &fixed2(day.next_day));
    target.set_text(Field::ChangeAmount, &signed_fixed2(day.change));
    target.set_text(Field::ChangePercent, &signed_fixed2(day.change_percent));
    target.set_change_tone(Tone::of(day.change));
}

pub fn render_week<R, C>(target: &R, charts: &ChartSlots<C>, week: &WeekForecast) -> Result<(), ChartError>
where
    R: RenderTarget,
    C: ChartBackend,
{
    target.set_visible(Region::WeekResults, true);
    target.set_text(Field::WeekMin, &fixed2(week.min));
    target.set_text(Field::WeekAvg, &fixed2(week.avg));
    target.set_text(Field::WeekMax, &fixed2(week.max));
    charts.render(SlotId::Week, SlotId::Week.labels(week.daily.len()), &week.daily)
}

pub fn render_month<R, C>(target: &R, charts: &ChartSlots<C>, month: &MonthForecast) -> Result<(), ChartError>
where
    R: RenderTarget,
    C: ChartBackend,
{
    target.set_visible(Region::MonthResults, true);
    target.set_text(Field::MonthMin, &fixed2(month.min));
    target.set_text(Field::MonthAvg, &fixed2(month.avg));
    target.set_text(Field::MonthMax, &fixed2(month.max));
    charts.render(
        SlotId::Month,
        SlotId::Month.labels(month.weekly_avg.len()),
        &month.weekly_avg,
    )
}

/// The error region and its auto-dismiss timer.
///
/// Every show or hide bumps a generation; a pending timer only hides the
/// region if no later show or hide happened in between.
pub struct ErrorView<R> {
    target: R,
    state: Rc<Cell<UiState>>,
    generation: Rc<Cell<u64>>,
    dismiss_after_ms: u32,
}

impl<R: RenderTarget + Clone + 'static> ErrorView<R> {
    pub fn new(target: R, state: Rc<Cell<UiState>>, dismiss_after_ms: u32) -> Self {
        Self {
            target,
            state,
            generation: Rc::new(Cell::new(0)),
            dismiss_after_ms,
        }
    }

    pub fn show<S: Scheduler>(&self, scheduler: &S, message: &str) {
        let token = self.bump();
        log::warn!("Displaying error to user: {}", message);
        self.target.set_text(Field::ErrorText, message);
        self.target.set_visible(Region::Error, true);
        self.state.set(UiState::ShowingError);

        let target = self.target.clone();
        let state = self.state.clone();
        let generation = self.generation.clone();
        scheduler.schedule(
            self.dismiss_after_ms,
            Box::new(move || {
                if generation.get() != token {
                    log::trace!("Error timer #{} superseded", token);
                    return;
                }
                log::debug!("Auto-dismissing error #{}", token);
                target.set_visible(Region::Error, false);
                if state.get() == UiState::ShowingError {
                    state.set(UiState::Idle);
                }
            }),
        );
    }

    pub fn hide(&self) {
        self.bump();
        self.target.set_visible(Region::Error, false);
    }

    fn bump(&self) -> u64 {
        let next = self.generation.get() + 1;
        self.generation.set(next);
        next
    }
}
