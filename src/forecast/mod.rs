pub mod confidence;
pub mod engine;
pub mod filter;
pub mod metrics;
pub mod normalize;
pub mod predictor;
pub mod stats;
pub mod synthetic;

pub use engine::*;
pub use metrics::*;
