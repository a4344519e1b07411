//! The page regions the state machine drives, behind a small view-object
//! interface so views never reach for DOM globals.

/// Regions whose visibility the controller toggles.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Region {
    /// Wrapper around the three result views.
    ResultsContainer,
    Loading,
    DayResults,
    WeekResults,
    MonthResults,
    Error,
}

impl Region {
    /// Regions that must be hidden before a new request starts.
    pub const RESULTS_AND_ERROR: [Region; 4] = [
        Region::DayResults,
        Region::WeekResults,
        Region::MonthResults,
        Region::Error,
    ];

    pub fn element_id(&self) -> &'static str {
        match self {
            Region::ResultsContainer => "results-container",
            Region::Loading => "loading",
            Region::DayResults => "day-results",
            Region::WeekResults => "week-results",
            Region::MonthResults => "month-results",
            Region::Error => "error-message",
        }
    }
}

/// Text fields the views write into.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Field {
    CurrentPrice,
    LastUpdated,
    NextDayPrice,
    ChangeAmount,
    ChangePercent,
    WeekMin,
    WeekAvg,
    WeekMax,
    MonthMin,
    MonthAvg,
    MonthMax,
    ErrorText,
}

impl Field {
    pub fn element_id(&self) -> &'static str {
        match self {
            Field::CurrentPrice => "current-price",
            Field::LastUpdated => "last-updated",
            Field::NextDayPrice => "next-day-price",
            Field::ChangeAmount => "change-amount",
            Field::ChangePercent => "change-percent",
            Field::WeekMin => "week-min",
            Field::WeekAvg => "week-avg",
            Field::WeekMax => "week-max",
            Field::MonthMin => "month-min",
            Field::MonthAvg => "month-avg",
            Field::MonthMax => "month-max",
            Field::ErrorText => "error-text",
        }
    }
}

/// Style of the next-day change block. Zero counts as positive.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Tone {
    Positive,
    Negative,
}

impl Tone {
    pub fn of(change: f64) -> Self {
        if change >= 0.0 {
            Tone::Positive
        } else {
            Tone::Negative
        }
    }

    pub fn css_class(&self) -> &'static str {
        match self {
            Tone::Positive => "positive",
            Tone::Negative => "negative",
        }
    }
}

/// Everything a view may do to the page.
///
/// Implementations are cheap handles (`Clone`) onto shared page state; all
/// calls happen on the UI thread.
pub trait RenderTarget {
    fn set_visible(&self, region: Region, visible: bool);

    fn set_text(&self, field: Field, text: &str);

    /// Writes `text` into `field` styled as an error message.
    fn set_error_text(&self, field: Field, text: &str);

    fn set_change_tone(&self, tone: Tone);
}
