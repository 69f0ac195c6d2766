use crate::market_data::adapters::ExchangeClientError;

// A currency as listed by the exchange (one instance per code)
#[derive(Debug, Clone, PartialEq, serde::Serialize)]
pub struct Currency {
    pub code: String,
    pub name: String,
    pub min_confirmations: u32, // placeholder, always 0
    pub withdrawal_fee: f64,    // placeholder, always 0.0
}

impl Currency {
    pub fn new(code: &str) -> Self {
        Self {
            code: code.to_string(),
            name: code.to_string(),
            min_confirmations: 0,
            withdrawal_fee: 0.0,
        }
    }
}

impl std::fmt::Display for Currency {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.code)
    }
}

// Snapshot of a single market at query time
#[derive(Debug, Clone, Copy, PartialEq, serde::Serialize)]
pub struct MarketState {
    pub ask: f64,
    pub bid: f64,
    pub last: f64,
}

impl MarketState {
    pub fn new(ask: f64, bid: f64, last: f64) -> Self {
        Self { ask, bid, last }
    }
}

#[derive(Debug, thiserror::Error)]
pub enum MarketError {
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),
    #[error("Exchange API error: {0}")]
    ExchangeApi(String),
    #[error("Malformed price {value:?} for {symbol}")]
    MalformedPrice { symbol: String, value: String },
    #[error(transparent)]
    Client(#[from] ExchangeClientError),
}

pub type MarketResult<T> = Result<T, MarketError>;
