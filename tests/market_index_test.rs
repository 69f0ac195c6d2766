//! Integration tests driving `MarketIndex` through the in-memory exchange.
use binx_rs::market_data::adapters::binance_types::{BookTicker, SymbolInfo, TickerPrice};
use binx_rs::market_data::adapters::static_exchange::StaticExchange;
use binx_rs::market_data::adapters::{ClientResult, ExchangeClient, ExchangeClientError};
use binx_rs::market_data::adapters::binance_types::ExchangeInfo;
use binx_rs::{MarketError, MarketIndex, MarketState};
use std::collections::HashSet;
use std::sync::Arc;

// Client whose every call fails with an HTTP status
struct DownExchange;

#[async_trait::async_trait]
impl ExchangeClient for DownExchange {
    async fn get_exchange_info(&self) -> ClientResult<ExchangeInfo> {
        Err(ExchangeClientError::Status { status: 503, body: "maintenance".into() })
    }
    async fn get_all_tickers(&self) -> ClientResult<Vec<TickerPrice>> {
        Err(ExchangeClientError::Status { status: 503, body: "maintenance".into() })
    }
    async fn get_orderbook_tickers(&self) -> ClientResult<Vec<BookTicker>> {
        Err(ExchangeClientError::Status { status: 503, body: "maintenance".into() })
    }
}

#[tokio::test]
async fn test_usdt_scenario() {
    let exchange = StaticExchange::new(vec![
        SymbolInfo::new("USDT", "BTC"),
        SymbolInfo::new("USDT", "ETH"),
    ]);
    let index = MarketIndex::load(exchange).await.unwrap();

    let bases: Vec<&str> = index.get_base_currencies().iter().map(|c| c.code.as_str()).collect();
    assert_eq!(bases, vec!["USDT"]);

    let markets: HashSet<&str> = index.get_markets("USDT").unwrap().iter().map(|c| c.code.as_str()).collect();
    assert_eq!(markets, HashSet::from(["BTC", "ETH"]));

    assert_eq!(index.get_currency("BTC").unwrap().code, "BTC");
    assert!(matches!(index.get_markets("BTC"), Err(MarketError::InvalidArgument(_))));
}

#[tokio::test]
async fn test_market_state_scenario() {
    let exchange = StaticExchange::new(vec![SymbolInfo::new("USDT", "BTC")])
        .with_tickers(vec![TickerPrice::new("BTCUSDT", "50000.0")])
        .with_book_tickers(vec![BookTicker::new("BTCUSDT", "50010.0", "49990.0")]);
    let index = MarketIndex::load(exchange).await.unwrap();

    let state = index.get_market_state("USDT", "BTC").await.unwrap();
    assert_eq!(state, MarketState { ask: 50010.0, bid: 49990.0, last: 50000.0 });
}

#[tokio::test]
async fn test_market_state_absent_symbols() {
    let exchange = Arc::new(StaticExchange::sample());
    let index = MarketIndex::load(Arc::clone(&exchange)).await.unwrap();

    // Not listed at all
    let err = index.get_market_state("USDT", "XRP").await.unwrap_err();
    assert!(matches!(err, MarketError::ExchangeApi(_)));
    assert_eq!(exchange.book_calls(), 0);

    // Priced but missing from the order book list
    let err = index.get_market_state("BTC", "BNB").await.unwrap_err();
    assert!(matches!(err, MarketError::ExchangeApi(_)));
    assert_eq!(exchange.book_calls(), 1);
}

#[tokio::test]
async fn test_load_failure_aborts_construction() {
    match MarketIndex::load(DownExchange).await {
        Err(MarketError::Client(ExchangeClientError::Status { status, .. })) => assert_eq!(status, 503),
        Err(other) => panic!("unexpected error: {}", other),
        Ok(_) => panic!("index built from a failing exchange"),
    }
}

#[tokio::test]
async fn test_repeated_queries_are_stable() {
    let index = MarketIndex::load(StaticExchange::sample()).await.unwrap();
    let first = index.get_markets("BTC").unwrap();
    for _ in 0..3 {
        assert_eq!(index.get_markets("BTC").unwrap(), first);
        assert_eq!(index.get_currency("ETH").unwrap(), index.get_currency("ETH").unwrap());
    }
}

#[tokio::test]
async fn test_index_shared_across_tasks() {
    let index = Arc::new(MarketIndex::load(StaticExchange::sample()).await.unwrap());
    let mut handles = Vec::new();
    for market in ["BTC", "ETH", "BNB"] {
        let index = Arc::clone(&index);
        handles.push(tokio::spawn(async move { index.get_market_state("USDT", market).await }));
    }
    for handle in handles {
        assert!(handle.await.unwrap().is_ok());
    }
}
