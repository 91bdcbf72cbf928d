use serde::{Deserialize, Serialize};

use crate::config::Config;

/// Application state shared across all handlers
pub struct AppState {
    pub config: Config,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiError {
    pub error: String,
    pub message: String,
}
