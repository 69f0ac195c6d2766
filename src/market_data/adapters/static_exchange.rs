// In-memory exchange serving fixed snapshots (tests + offline CLI mode)

use super::binance_types::{BookTicker, ExchangeInfo, SymbolInfo, TickerPrice};
use super::{ClientResult, ExchangeClient};
use std::sync::atomic::{AtomicUsize, Ordering};

#[derive(Debug, Default)]
pub struct StaticExchange {
    pub symbols: Vec<SymbolInfo>,
    pub tickers: Vec<TickerPrice>,
    pub book_tickers: Vec<BookTicker>,
    info_calls: AtomicUsize,
    ticker_calls: AtomicUsize,
    book_calls: AtomicUsize,
}

impl StaticExchange {
    pub fn new(symbols: Vec<SymbolInfo>) -> Self {
        Self { symbols, ..Default::default() }
    }

    pub fn with_tickers(mut self, tickers: Vec<TickerPrice>) -> Self {
        self.tickers = tickers;
        self
    }

    pub fn with_book_tickers(mut self, book_tickers: Vec<BookTicker>) -> Self {
        self.book_tickers = book_tickers;
        self
    }

    /// Small hand-picked snapshot of a few USDT and BTC markets.
    pub fn sample() -> Self {
        let pairs = [("USDT", "BTC"), ("USDT", "ETH"), ("USDT", "BNB"), ("BTC", "ETH"), ("BTC", "BNB")];
        let symbols = pairs.iter().map(|(q, b)| SymbolInfo::new(q, b)).collect();
        Self::new(symbols)
            .with_tickers(vec![
                TickerPrice::new("BTCUSDT", "50000.00000000"),
                TickerPrice::new("ETHUSDT", "3000.00000000"),
                TickerPrice::new("BNBUSDT", "400.00000000"),
                TickerPrice::new("ETHBTC", "0.06000000"),
                TickerPrice::new("BNBBTC", "0.00800000"),
            ])
            .with_book_tickers(vec![
                BookTicker::new("BTCUSDT", "50010.00000000", "49990.00000000"),
                BookTicker::new("ETHUSDT", "3000.50000000", "2999.50000000"),
                BookTicker::new("BNBUSDT", "400.10000000", "399.90000000"),
                BookTicker::new("ETHBTC", "0.06001000", "0.05999000"),
            ])
    }

    pub fn info_calls(&self) -> usize {
        self.info_calls.load(Ordering::Relaxed)
    }

    pub fn ticker_calls(&self) -> usize {
        self.ticker_calls.load(Ordering::Relaxed)
    }

    pub fn book_calls(&self) -> usize {
        self.book_calls.load(Ordering::Relaxed)
    }
}

#[async_trait::async_trait]
impl ExchangeClient for StaticExchange {
    async fn get_exchange_info(&self) -> ClientResult<ExchangeInfo> {
        self.info_calls.fetch_add(1, Ordering::Relaxed);
        Ok(ExchangeInfo { symbols: self.symbols.clone() })
    }

    async fn get_all_tickers(&self) -> ClientResult<Vec<TickerPrice>> {
        self.ticker_calls.fetch_add(1, Ordering::Relaxed);
        Ok(self.tickers.clone())
    }

    async fn get_orderbook_tickers(&self) -> ClientResult<Vec<BookTicker>> {
        self.book_calls.fetch_add(1, Ordering::Relaxed);
        Ok(self.book_tickers.clone())
    }
}
