//! UI state and panel visibility

use crate::api::models::ExtractionResult;

/// What the main panel area is showing
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum UiState {
    #[default]
    Idle,
    Loading,
    Result(ExtractionResult),
    Error(String),
}

impl UiState {
    pub fn is_loading(&self) -> bool {
        matches!(self, UiState::Loading)
    }

    /// Panel visibility derived from the state; at most one flag is ever set
    pub fn panels(&self) -> Panels {
        Panels {
            loading: matches!(self, UiState::Loading),
            result: matches!(self, UiState::Result(_)),
            error: matches!(self, UiState::Error(_)),
        }
    }
}

/// Visibility of the loading, result and error panels
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Panels {
    pub loading: bool,
    pub result: bool,
    pub error: bool,
}

impl Panels {
    pub fn visible_count(&self) -> usize {
        [self.loading, self.result, self.error]
            .iter()
            .filter(|v| **v)
            .count()
    }
}
