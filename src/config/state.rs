// src/config/state.rs
use super::consts::API_KEY_ENV;
use super::options::AppOptions;

#[derive(Clone, Debug)]
pub struct GuiState {
    /// Summarizer credential as typed into the key field.
    /// Seeded from the environment; empty disables summarization.
    pub api_key: String,

    /// Active render style index into views::ALL
    pub current_view_index: usize,
}

impl Default for GuiState {
    fn default() -> Self {
        Self {
            api_key: std::env::var(API_KEY_ENV).unwrap_or_default(),
            current_view_index: 0,
        }
    }
}

#[derive(Clone, Debug)]
pub struct AppState {
    pub options: AppOptions,
    pub gui: GuiState,
}

impl Default for AppState {
    fn default() -> Self {
        Self {
            options: AppOptions::default(),
            gui: GuiState::default(),
        }
    }
}
