// Binance spot REST adapter (public market data endpoints only)

use super::binance_types::{BookTicker, ExchangeInfo, TickerPrice};
use super::{ClientResult, ExchangeClient, ExchangeClientError};
use serde::de::DeserializeOwned;
use tracing::{debug, instrument};

pub const DEFAULT_BASE_URL: &str = "https://api.binance.com";

const EXCHANGE_INFO_PATH: &str = "/api/v3/exchangeInfo";
const TICKER_PRICE_PATH: &str = "/api/v3/ticker/price";
const BOOK_TICKER_PATH: &str = "/api/v3/ticker/bookTicker";

pub struct BinanceClient {
    pub base_url: String, // "https://api.binance.com"
    api_key: String,
    // Only signed endpoints need the secret; the three snapshots here are public.
    #[allow(dead_code)]
    api_secret: String,
    http: reqwest::Client,
}

impl BinanceClient {
    pub fn new(api_key: &str, api_secret: &str) -> Self {
        Self::with_base_url(api_key, api_secret, DEFAULT_BASE_URL)
    }

    pub fn with_base_url(api_key: &str, api_secret: &str, base_url: &str) -> Self {
        Self::with_http_client(api_key, api_secret, base_url, reqwest::Client::new())
    }

    /// Use a preconfigured HTTP client (timeouts, proxy settings).
    pub fn with_http_client(api_key: &str, api_secret: &str, base_url: &str, http: reqwest::Client) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            api_key: api_key.to_string(),
            api_secret: api_secret.to_string(),
            http,
        }
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    #[instrument(skip(self), level = "debug")]
    async fn get_json<T: DeserializeOwned>(&self, path: &'static str) -> ClientResult<T> {
        metrics::counter!("binx_exchange_requests_total", "endpoint" => path).increment(1);

        let mut req = self.http.get(self.url(path));
        if !self.api_key.is_empty() {
            req = req.header("X-MBX-APIKEY", &self.api_key);
        }
        let res = req.send().await?;

        let status = res.status();
        let body = res.text().await?;
        if !status.is_success() {
            return Err(ExchangeClientError::Status { status: status.as_u16(), body });
        }
        debug!(path, bytes = body.len(), "received response");

        serde_json::from_str(&body)
            .map_err(|source| ExchangeClientError::Decode { endpoint: path, source })
    }
}

#[async_trait::async_trait]
impl ExchangeClient for BinanceClient {
    async fn get_exchange_info(&self) -> ClientResult<ExchangeInfo> {
        self.get_json(EXCHANGE_INFO_PATH).await
    }

    async fn get_all_tickers(&self) -> ClientResult<Vec<TickerPrice>> {
        self.get_json(TICKER_PRICE_PATH).await
    }

    async fn get_orderbook_tickers(&self) -> ClientResult<Vec<BookTicker>> {
        self.get_json(BOOK_TICKER_PATH).await
    }
}
