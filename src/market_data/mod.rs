// Market data module entrypoint
pub mod adapters;       // exchange clients (Binance REST, in-memory)
pub mod normaliser;     // symbol naming + string -> f64 prices
