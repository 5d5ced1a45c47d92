pub mod config;
pub mod error;
pub mod handlers;
pub mod metrics;
pub mod routes;
pub mod state;
pub mod suggest;
pub mod types;
pub mod validation;

pub use crate::config::Config;
pub use crate::error::ApiError;
pub use crate::metrics::TextMetrics;
pub use crate::state::AppState;
pub use crate::types::*;
pub use crate::validation::ValidationError;

#[cfg(test)]
mod tests;
