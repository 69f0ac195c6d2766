// Source: https://api.binance.com/api/v3 (spot market data endpoints)
// Prices stay as strings here; the normaliser parses the one entry a query needs.

// GET /api/v3/exchangeInfo
#[derive(Debug, Clone, serde::Deserialize)]
pub struct ExchangeInfo {
    pub symbols: Vec<SymbolInfo>,
}

#[derive(Debug, Clone, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SymbolInfo {
    #[serde(default)]
    pub status: String, // e.g. "TRADING", "BREAK"
    pub base_asset: String,  // traded currency, e.g. "BTC"
    pub quote_asset: String, // denominating currency, e.g. "USDT"
    // we ignore the filters/permissions for now
}

pub const STATUS_TRADING: &str = "TRADING";

impl SymbolInfo {
    pub fn new(quote_asset: &str, base_asset: &str) -> Self {
        Self {
            status: STATUS_TRADING.into(),
            base_asset: base_asset.into(),
            quote_asset: quote_asset.into(),
        }
    }
}

// GET /api/v3/ticker/price
#[derive(Debug, Clone, serde::Deserialize)]
pub struct TickerPrice {
    pub symbol: String,
    pub price: String, // e.g. "50000.00000000"
}

impl TickerPrice {
    pub fn new(symbol: &str, price: &str) -> Self {
        Self { symbol: symbol.into(), price: price.into() }
    }
}

// GET /api/v3/ticker/bookTicker
#[derive(Debug, Clone, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BookTicker {
    pub symbol: String,
    pub bid_price: String,
    pub ask_price: String,
    // quantities ignored
}

impl BookTicker {
    pub fn new(symbol: &str, ask_price: &str, bid_price: &str) -> Self {
        Self {
            symbol: symbol.into(),
            bid_price: bid_price.into(),
            ask_price: ask_price.into(),
        }
    }
}
