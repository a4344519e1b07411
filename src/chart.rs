//! Chart slots: one owned drawing handle per charted horizon.

use std::cell::RefCell;
use thiserror::Error;

/// Error returned by a [`ChartBackend`] that could not draw.
#[derive(Error, Debug, Clone, PartialEq)]
#[error("Chart error: {0}")]
pub struct ChartError(pub String);

/// The two horizons that render a time series.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SlotId {
    Week,
    Month,
}

impl SlotId {
    /// Id of the canvas region the slot draws into.
    pub fn canvas_id(&self) -> &'static str {
        match self {
            SlotId::Week => "week-chart",
            SlotId::Month => "month-chart",
        }
    }

    pub fn title(&self) -> &'static str {
        match self {
            SlotId::Week => "7-Day Price Forecast",
            SlotId::Month => "Monthly Price Trend (Weekly Averages)",
        }
    }

    pub fn series_label(&self) -> &'static str {
        match self {
            SlotId::Week => "Predicted Price ($)",
            SlotId::Month => "Average Weekly Price ($)",
        }
    }

    /// Warm gold for the week, burnt orange for the month.
    pub fn color(&self) -> Rgb {
        match self {
            SlotId::Week => Rgb::new(255, 215, 0),
            SlotId::Month => Rgb::new(255, 140, 0),
        }
    }

    /// `Day 1`.. or `Week 1`.. for `count` points.
    pub fn labels(&self, count: usize) -> Vec<String> {
        let unit = match self {
            SlotId::Week => "Day",
            SlotId::Month => "Week",
        };
        (1..=count).map(|i| format!("{} {}", unit, i)).collect()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    pub fn css(&self) -> String {
        format!("rgb({}, {}, {})", self.r, self.g, self.b)
    }

    pub fn css_alpha(&self, alpha: f64) -> String {
        format!("rgba({}, {}, {}, {})", self.r, self.g, self.b, alpha)
    }
}

/// Backend-neutral description of one line chart.
#[derive(Debug, Clone, PartialEq)]
pub struct ChartSpec {
    pub title: &'static str,
    pub series_label: &'static str,
    pub labels: Vec<String>,
    pub values: Vec<f64>,
    pub color: Rgb,
    pub fill_alpha: f64,
    /// Curve smoothing, 0.0 draws straight segments.
    pub tension: f64,
    pub fill: bool,
    pub show_legend: bool,
    pub begin_at_zero: bool,
}

impl ChartSpec {
    pub fn new(slot: SlotId, labels: Vec<String>, values: &[f64]) -> Self {
        Self {
            title: slot.title(),
            series_label: slot.series_label(),
            labels,
            values: values.to_vec(),
            color: slot.color(),
            fill_alpha: 0.1,
            tension: 0.4,
            fill: true,
            show_legend: true,
            begin_at_zero: false,
        }
    }

    /// Explicit y-axis range for a chart that must not start at zero.
    ///
    /// `None` means the backend may autoscale: either the axis is zero-based or
    /// there is no finite value to fit.
    pub fn y_range(&self) -> Option<(f64, f64)> {
        if self.begin_at_zero {
            return None;
        }
        let mut finite = self.values.iter().copied().filter(|v| v.is_finite());
        let first = finite.next()?;
        let (lo, hi) = finite.fold((first, first), |(lo, hi), v| (lo.min(v), hi.max(v)));

        let span = hi - lo;
        let pad = if span > 0.0 {
            span * 0.05
        } else if hi != 0.0 {
            hi.abs() * 0.01
        } else {
            1.0
        };
        Some((lo - pad, hi + pad))
    }
}

/// The charting library, seen as a black-box draw/destroy API.
pub trait ChartBackend {
    /// A live chart; it stays live until passed to [`ChartBackend::destroy`].
    type Handle;

    fn draw(&self, slot: SlotId, spec: &ChartSpec) -> Result<Self::Handle, ChartError>;

    fn destroy(&self, handle: Self::Handle);
}

/// Owns at most one live chart for a slot.
pub struct ChartSlot<C: ChartBackend> {
    id: SlotId,
    backend: C,
    live: RefCell<Option<C::Handle>>,
}

impl<C: ChartBackend> ChartSlot<C> {
    pub fn new(id: SlotId, backend: C) -> Self {
        Self {
            id,
            backend,
            live: RefCell::new(None),
        }
    }

    pub fn id(&self) -> SlotId {
        self.id
    }

    pub fn is_live(&self) -> bool {
        self.live.borrow().is_some()
    }

    /// Replaces whatever the slot shows with a fresh chart of `values`.
    ///
    /// The previous handle is destroyed before the new one is drawn, so two
    /// charts never share the canvas. On a draw error the slot is left empty.
    pub fn render(&self, labels: Vec<String>, values: &[f64]) -> Result<(), ChartError> {
        let previous = self.live.borrow_mut().take();
        if let Some(previous) = previous {
            log::trace!("Destroying previous {:?} chart", self.id);
            self.backend.destroy(previous);
        }

        let spec = ChartSpec::new(self.id, labels, values);
        let handle = self.backend.draw(self.id, &spec).map_err(|e| {
            log::error!("Drawing {:?} chart failed: {}", self.id, e);
            e
        })?;
        *self.live.borrow_mut() = Some(handle);
        log::debug!("Rendered {:?} chart with {} points", self.id, spec.values.len());
        Ok(())
    }
}

/// The week and month slots, sharing one backend.
pub struct ChartSlots<C: ChartBackend> {
    week: ChartSlot<C>,
    month: ChartSlot<C>,
}

impl<C: ChartBackend + Clone> ChartSlots<C> {
    pub fn new(backend: C) -> Self {
        Self {
            week: ChartSlot::new(SlotId::Week, backend.clone()),
            month: ChartSlot::new(SlotId::Month, backend),
        }
    }
}

impl<C: ChartBackend> ChartSlots<C> {
    pub fn slot(&self, id: SlotId) -> &ChartSlot<C> {
        match id {
            SlotId::Week => &self.week,
            SlotId::Month => &self.month,
        }
    }

    pub fn render(&self, id: SlotId, labels: Vec<String>, values: &[f64]) -> Result<(), ChartError> {
        self.slot(id).render(labels, values)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::RecordingBackend;

    #[test]
    fn test_labels() {
        assert_eq!(SlotId::Month.labels(4), vec!["Week 1", "Week 2", "Week 3", "Week 4"]);
        assert_eq!(SlotId::Week.labels(7).last().map(String::as_str), Some("Day 7"));
    }

    #[test]
    fn test_slot_colors_differ() {
        assert_eq!(SlotId::Week.color().css(), "rgb(255, 215, 0)");
        assert_eq!(SlotId::Month.color().css_alpha(0.1), "rgba(255, 140, 0, 0.1)");
        assert_ne!(SlotId::Week.color(), SlotId::Month.color());
    }

    #[test]
    fn test_y_range_fits_data() {
        let spec = ChartSpec::new(SlotId::Week, SlotId::Week.labels(3), &[1800.0, 1900.0, 1850.0]);
        let (lo, hi) = spec.y_range().unwrap();
        assert!((lo - 1795.0).abs() < 1e-9);
        assert!((hi - 1905.0).abs() < 1e-9);
    }

    #[test]
    fn test_y_range_flat_and_empty() {
        let flat = ChartSpec::new(SlotId::Month, SlotId::Month.labels(2), &[2000.0, 2000.0]);
        assert_eq!(flat.y_range(), Some((1980.0, 2020.0)));

        let empty = ChartSpec::new(SlotId::Month, Vec::new(), &[]);
        assert_eq!(empty.y_range(), None);

        let mut zero_based = flat.clone();
        zero_based.begin_at_zero = true;
        assert_eq!(zero_based.y_range(), None);
    }

    #[test]
    fn test_slot_replaces_previous_handle() {
        let backend = RecordingBackend::default();
        let slot = ChartSlot::new(SlotId::Week, backend.clone());

        slot.render(SlotId::Week.labels(2), &[1.0, 2.0]).unwrap();
        slot.render(SlotId::Week.labels(2), &[3.0, 4.0]).unwrap();

        assert!(slot.is_live());
        assert_eq!(backend.live_count(SlotId::Week), 1);
        assert_eq!(backend.destroyed(), vec![1]);
        assert_eq!(backend.last_spec(SlotId::Week).unwrap().values, vec![3.0, 4.0]);
    }

    #[test]
    fn test_slot_left_empty_after_failed_draw() {
        let backend = RecordingBackend::default();
        let slot = ChartSlot::new(SlotId::Month, backend.clone());
        slot.render(SlotId::Month.labels(1), &[1.0]).unwrap();

        backend.fail_next_draw("canvas detached");
        let result = slot.render(SlotId::Month.labels(1), &[2.0]);

        assert_eq!(result, Err(ChartError("canvas detached".to_string())));
        assert!(!slot.is_live());
        assert_eq!(backend.live_count(SlotId::Month), 0);
    }

    #[test]
    fn test_slots_are_independent() {
        let backend = RecordingBackend::default();
        let slots = ChartSlots::new(backend.clone());

        slots.render(SlotId::Week, SlotId::Week.labels(1), &[1.0]).unwrap();
        slots.render(SlotId::Month, SlotId::Month.labels(1), &[1.0]).unwrap();
        slots.render(SlotId::Month, SlotId::Month.labels(1), &[2.0]).unwrap();

        assert_eq!(backend.live_count(SlotId::Week), 1);
        assert_eq!(backend.live_count(SlotId::Month), 1);
        assert_eq!(backend.draw_count(SlotId::Week), 1);
    }
}
