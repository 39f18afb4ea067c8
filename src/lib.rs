//! Home Energy Forecast - backend forecasting service for a smart-home
//! energy monitoring dashboard.
//!
//! The core is a four-stage heuristic pipeline over historical energy
//! readings: normalization, IQR outlier filtering, pattern-matched
//! prediction with banded synthetic fallback, and confidence-scored 24 h
//! aggregation. An axum API exposes it to the dashboard.

pub mod api;
pub mod config;
pub mod domain;
pub mod forecast;
pub mod state;
pub mod telemetry;
