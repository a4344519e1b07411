use crate::views::ResultView;

/// Which region the user is looking at. At most one of them is visible.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum UiState {
    #[default]
    Idle,
    Loading,
    ShowingDay,
    ShowingWeek,
    ShowingMonth,
    ShowingError,
}

impl UiState {
    pub fn showing(view: ResultView) -> Self {
        match view {
            ResultView::Day => UiState::ShowingDay,
            ResultView::Week => UiState::ShowingWeek,
            ResultView::Month => UiState::ShowingMonth,
            ResultView::Error => UiState::ShowingError,
        }
    }

    pub fn is_loading(&self) -> bool {
        matches!(self, UiState::Loading)
    }

    /// The view on screen, if any.
    pub fn view(&self) -> Option<ResultView> {
        match self {
            UiState::ShowingDay => Some(ResultView::Day),
            UiState::ShowingWeek => Some(ResultView::Week),
            UiState::ShowingMonth => Some(ResultView::Month),
            UiState::ShowingError => Some(ResultView::Error),
            UiState::Idle | UiState::Loading => None,
        }
    }
}
