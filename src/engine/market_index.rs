use std::collections::{BTreeMap, BTreeSet};

use crate::engine::types::{Currency, MarketError, MarketResult, MarketState};
use crate::market_data::adapters::binance::BinanceClient;
use crate::market_data::adapters::binance_types::{SymbolInfo, STATUS_TRADING};
use crate::market_data::adapters::ExchangeClient;
use crate::market_data::normaliser::{parse_price, symbol_for};
use tracing::{debug, info, instrument, warn};

/// Currencies and base -> market adjacency, loaded once from the exchange's symbol list.
///
/// Both maps are filled in `load` and never touched again, so a constructed index can be
/// shared freely across tasks. Market state queries always go back to the exchange.
pub struct MarketIndex<C: ExchangeClient = BinanceClient> {
    client: C,
    currencies: BTreeMap<String, Currency>,
    // base (quote asset) code -> market (base asset) codes
    markets: BTreeMap<String, BTreeSet<String>>,
}

impl MarketIndex<BinanceClient> {
    /// Build an index against the live Binance API.
    pub async fn connect(api_key: &str, api_secret: &str) -> MarketResult<Self> {
        Self::load(BinanceClient::new(api_key, api_secret)).await
    }
}

impl<C: ExchangeClient> MarketIndex<C> {
    /// Fetch the symbol list and build the index. Any client failure aborts construction.
    #[instrument(skip(client))]
    pub async fn load(client: C) -> MarketResult<Self> {
        let info = client.get_exchange_info().await?;
        let mut index = Self {
            client,
            currencies: BTreeMap::new(),
            markets: BTreeMap::new(),
        };
        for symbol in &info.symbols {
            index.add_symbol(symbol);
        }
        // Halted/delisted pairs stay in the index; only counted here
        let not_trading = info
            .symbols
            .iter()
            .filter(|s| s.status != STATUS_TRADING)
            .count();
        info!(
            symbols = info.symbols.len(),
            not_trading,
            currencies = index.currencies.len(),
            bases = index.markets.len(),
            "Loaded market index"
        );
        Ok(index)
    }

    fn add_symbol(&mut self, symbol: &SymbolInfo) {
        let base_currency = &symbol.quote_asset;
        let market_currency = &symbol.base_asset;
        self.add_currency(base_currency);
        self.add_currency(market_currency);
        self.markets
            .entry(base_currency.clone())
            .or_default()
            .insert(market_currency.clone());
    }

    // First registration wins
    fn add_currency(&mut self, code: &str) {
        if !self.currencies.contains_key(code) {
            self.currencies.insert(code.to_string(), Currency::new(code));
        }
    }

    pub fn client(&self) -> &C {
        &self.client
    }

    /// Currencies that denominate at least one market, each exactly once.
    pub fn get_base_currencies(&self) -> Vec<&Currency> {
        self.markets
            .keys()
            .filter_map(|code| self.currencies.get(code))
            .collect()
    }

    pub fn get_currency(&self, currency_code: &str) -> MarketResult<&Currency> {
        self.currencies.get(currency_code).ok_or_else(|| {
            MarketError::InvalidArgument(format!("Invalid currency {}", currency_code))
        })
    }

    pub fn get_currencies(&self) -> Vec<&Currency> {
        self.currencies.values().collect()
    }

    /// Currencies tradeable against `base_currency_code`.
    pub fn get_markets(&self, base_currency_code: &str) -> MarketResult<Vec<&Currency>> {
        let markets = self.markets.get(base_currency_code).ok_or_else(|| {
            MarketError::InvalidArgument(format!("Invalid base currency {}", base_currency_code))
        })?;
        Ok(markets
            .iter()
            .filter_map(|code| self.currencies.get(code))
            .collect())
    }

    /// Live ask/bid/last for a market.
    ///
    /// The codes are not checked against the index: an unknown pair simply isn't found on
    /// the exchange and comes back as `ExchangeApi`, same as a known pair that isn't quoted.
    #[instrument(skip(self), level = "debug")]
    pub async fn get_market_state(
        &self,
        base_currency_code: &str,
        market_currency_code: &str,
    ) -> MarketResult<MarketState> {
        let exchange_name = symbol_for(base_currency_code, market_currency_code);

        let tickers = self.client.get_all_tickers().await?;
        // Last listing of the symbol wins
        let price = tickers
            .iter()
            .rev()
            .find(|entry| entry.symbol == exchange_name)
            .map(|entry| entry.price.clone());

        if let Some(price) = price {
            let book_tickers = self.client.get_orderbook_tickers().await?;
            if let Some(entry) = book_tickers.iter().find(|entry| entry.symbol == exchange_name) {
                let state = MarketState::new(
                    parse_price(&exchange_name, &entry.ask_price)?,
                    parse_price(&exchange_name, &entry.bid_price)?,
                    parse_price(&exchange_name, &price)?,
                );
                debug!(symbol = %exchange_name, ask = state.ask, bid = state.bid, last = state.last, "Fetched market state");
                return Ok(state);
            }
        }

        metrics::counter!("binx_market_state_misses_total").increment(1);
        warn!(symbol = %exchange_name, "No market information on exchange");
        Err(MarketError::ExchangeApi(
            "Failed to fetch information for given market".to_string(),
        ))
    }
}
