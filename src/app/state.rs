// src/app/state.rs

pub(crate) enum AppState {
    /// Waiting for the first snapshot
    Loading(LoadingState),
    Running,
}

impl Default for AppState {
    fn default() -> Self {
        AppState::Loading(LoadingState::default())
    }
}

#[derive(Default, Clone)]
pub(crate) struct LoadingState {
    /// Set when every source failed; the loading screen offers a retry.
    pub(crate) error: Option<String>,
    pub(crate) attempts: usize,
}
