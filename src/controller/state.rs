use crate::translate::TranslationResult;

/// Lifecycle of the current translation request
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum UiState {
    /// Nothing submitted yet
    #[default]
    Idle,
    /// A request is in flight; submission is disabled
    Loading,
    /// Last request succeeded, optionally with a non-fatal advisory
    Success {
        result: TranslationResult,
        advisory: Option<String>,
    },
    /// Last request failed with a user-facing message
    Failure(String),
}

impl UiState {
    pub fn is_loading(&self) -> bool {
        matches!(self, UiState::Loading)
    }

    pub fn result(&self) -> Option<&TranslationResult> {
        match self {
            UiState::Success { result, .. } => Some(result),
            _ => None,
        }
    }

    /// Banner message carried by this state, if any
    pub fn banner(&self) -> Option<&str> {
        match self {
            UiState::Success { advisory, .. } => advisory.as_deref(),
            UiState::Failure(message) => Some(message),
            _ => None,
        }
    }
}
