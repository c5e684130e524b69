mod root;
mod state;

pub(crate) use state::{AppState, LoadingState};

pub use root::App;
