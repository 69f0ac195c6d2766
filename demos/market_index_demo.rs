// Walk the market index over the built-in sample snapshot (no network)
// Run with: cargo run --example market_index_demo

use binx_rs::market_data::adapters::static_exchange::StaticExchange;
use binx_rs::{telemetry, MarketIndex};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    telemetry::init_tracing("info")?;

    let index = MarketIndex::load(StaticExchange::sample()).await?;

    for base in index.get_base_currencies() {
        println!("== {} ==", base.code);
        for market in index.get_markets(&base.code)? {
            match index.get_market_state(&base.code, &market.code).await {
                Ok(state) => println!(
                    "  {}{}: ask {:.8} | bid {:.8} | last {:.8} | spread {:.8}",
                    market.code, base.code, state.ask, state.bid, state.last, state.ask - state.bid
                ),
                Err(e) => println!("  {}{}: {}", market.code, base.code, e),
            }
        }
    }
    Ok(())
}
