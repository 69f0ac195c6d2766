// Core: currency/market index over an exchange snapshot
pub mod market_index;
pub mod types;
