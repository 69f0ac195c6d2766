pub mod config;
pub mod engine;
pub mod market_data;
pub mod telemetry;

pub use engine::market_index::MarketIndex;
pub use engine::types::{Currency, MarketError, MarketResult, MarketState};
