// Shared trait + error for exchange clients

use self::binance_types::{BookTicker, ExchangeInfo, TickerPrice};

#[derive(Debug, thiserror::Error)]
pub enum ExchangeClientError {
    #[error("HTTP transport error: {0}")]
    Transport(#[from] reqwest::Error),
    #[error("Exchange returned {status}: {body}")]
    Status { status: u16, body: String },
    #[error("Failed to decode {endpoint} response: {source}")]
    Decode {
        endpoint: &'static str,
        #[source]
        source: serde_json::Error,
    },
}

pub type ClientResult<T> = Result<T, ExchangeClientError>;

// Full-snapshot endpoints consumed by the market index. No pagination.
#[async_trait::async_trait]
pub trait ExchangeClient: Send + Sync {
    async fn get_exchange_info(&self) -> ClientResult<ExchangeInfo>;
    async fn get_all_tickers(&self) -> ClientResult<Vec<TickerPrice>>;
    async fn get_orderbook_tickers(&self) -> ClientResult<Vec<BookTicker>>;
}

// Shared clients (e.g. a handle kept for inspection after building an index).
#[async_trait::async_trait]
impl<T: ExchangeClient + ?Sized> ExchangeClient for std::sync::Arc<T> {
    async fn get_exchange_info(&self) -> ClientResult<ExchangeInfo> {
        (**self).get_exchange_info().await
    }

    async fn get_all_tickers(&self) -> ClientResult<Vec<TickerPrice>> {
        (**self).get_all_tickers().await
    }

    async fn get_orderbook_tickers(&self) -> ClientResult<Vec<BookTicker>> {
        (**self).get_orderbook_tickers().await
    }
}

pub mod binance;
pub mod binance_types;
pub mod static_exchange;
