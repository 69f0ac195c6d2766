// Convert wire strings into typed values.

use crate::engine::types::{MarketError, MarketResult};

/// Exchange symbol for a market: market currency code followed by base code, e.g.
/// `symbol_for("USDT", "BTC") == "BTCUSDT"`.
pub fn symbol_for(base_currency_code: &str, market_currency_code: &str) -> String {
    format!("{}{}", market_currency_code, base_currency_code)
}

/// Parse a string-encoded price. Prices are never negative or non-finite.
pub fn parse_price(symbol: &str, raw: &str) -> MarketResult<f64> {
    let malformed = || MarketError::MalformedPrice {
        symbol: symbol.to_string(),
        value: raw.to_string(),
    };
    let value: f64 = raw.trim().parse().map_err(|_| malformed())?;
    if !value.is_finite() || value < 0.0 {
        return Err(malformed());
    }
    Ok(value)
}
