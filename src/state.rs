use std::sync::Arc;

use crate::config::Config;
use crate::forecast::ForecastEngine;

/// Shared application state.
///
/// The engine is stateless, so cloning the state hands every handler the
/// same immutable wiring; no locks are needed anywhere.
#[derive(Clone)]
pub struct AppState {
    pub cfg: Config,
    pub engine: Arc<ForecastEngine>,
}

impl AppState {
    pub fn new(cfg: Config) -> Self {
        let engine = Arc::new(ForecastEngine::new(cfg.forecast.random_seed));
        Self { cfg, engine }
    }
}
