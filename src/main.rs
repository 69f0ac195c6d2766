use std::io::{self, Write};
use std::path::PathBuf;

use binx_rs::config::Settings;
use binx_rs::market_data::adapters::binance::BinanceClient;
use binx_rs::market_data::adapters::static_exchange::StaticExchange;
use binx_rs::market_data::adapters::ExchangeClient;
use binx_rs::{telemetry, Currency, MarketIndex};
use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(name = "binx")]
#[command(about = "Query Binance currencies, markets and live market state")]
struct Cli {
    /// Settings file (defaults to ./binx.toml if present)
    #[arg(long)]
    config: Option<PathBuf>,

    /// Exchange REST base URL
    #[arg(long)]
    base_url: Option<String>,

    /// Log filter used when RUST_LOG is unset
    #[arg(long)]
    log_filter: Option<String>,

    /// Serve a built-in sample snapshot instead of calling the exchange
    #[arg(long)]
    offline: bool,

    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand, Clone)]
enum Command {
    /// List base currencies
    Bases,
    /// List all currencies
    Currencies,
    /// Show a single currency
    Currency { code: String },
    /// List currencies tradeable against a base
    Markets { base: String },
    /// Show ask/bid/last for a market
    State { base: String, market: String },
}

// Helper to print a list of currency codes on one line
fn print_codes(label: &str, currencies: &[&Currency]) {
    let codes: Vec<&str> = currencies.iter().map(|c| c.code.as_str()).collect();
    println!("{} ({}): {}", label, codes.len(), codes.join(" "));
}

async fn run_command<C: ExchangeClient>(index: &MarketIndex<C>, command: &Command) -> anyhow::Result<()> {
    match command {
        Command::Bases => print_codes("Base currencies", &index.get_base_currencies()),
        Command::Currencies => print_codes("Currencies", &index.get_currencies()),
        Command::Currency { code } => {
            let c = index.get_currency(&code.to_uppercase())?;
            println!("{} ({}) min_confirmations={} withdrawal_fee={}", c.code, c.name, c.min_confirmations, c.withdrawal_fee);
        }
        Command::Markets { base } => {
            let base = base.to_uppercase();
            print_codes(&format!("Markets for {}", base), &index.get_markets(&base)?);
        }
        Command::State { base, market } => {
            let (base, market) = (base.to_uppercase(), market.to_uppercase());
            let state = index.get_market_state(&base, &market).await?;
            println!("{}/{}: ask {} | bid {} | last {}", market, base, state.ask, state.bid, state.last);
        }
    }
    Ok(())
}

fn parse_line(line: &str) -> Option<Command> {
    let parts: Vec<&str> = line.split_whitespace().collect();
    match parts.as_slice() {
        ["bases"] => Some(Command::Bases),
        ["currencies"] => Some(Command::Currencies),
        ["currency", code] => Some(Command::Currency { code: code.to_string() }),
        ["markets", base] => Some(Command::Markets { base: base.to_string() }),
        ["state", base, market] => Some(Command::State { base: base.to_string(), market: market.to_string() }),
        _ => None,
    }
}

async fn repl<C: ExchangeClient>(index: &MarketIndex<C>) -> anyhow::Result<()> {
    loop {
        print!("\nBINX> ");
        io::stdout().flush()?;

        let mut input = String::new();
        if io::stdin().read_line(&mut input)? == 0 {
            break; // EOF
        }
        let line = input.trim().to_lowercase();

        match line.as_str() {
            "help" | "h" => {
                println!("Available commands:");
                println!("  bases                  - List base currencies");
                println!("  currencies             - List all currencies");
                println!("  currency <code>        - Show a currency");
                println!("  markets <base>         - List markets for a base currency");
                println!("  state <base> <market>  - Show ask/bid/last (e.g. 'state usdt btc')");
                println!("  quit, q                - Exit");
            }
            "quit" | "q" | "exit" => {
                println!("Goodbye!");
                break;
            }
            "" => continue,
            _ => match parse_line(&line) {
                Some(command) => {
                    if let Err(e) = run_command(index, &command).await {
                        eprintln!("Error: {}", e);
                    }
                }
                None => println!("Unknown command. Type 'help' for available commands."),
            },
        }
    }
    Ok(())
}

async fn run<C: ExchangeClient>(client: C, command: Option<Command>) -> anyhow::Result<()> {
    let index = MarketIndex::load(client).await?;
    match command {
        Some(command) => run_command(&index, &command).await,
        None => repl(&index).await,
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok(); // load .env

    let cli = Cli::parse();
    let mut settings = Settings::load(cli.config.as_deref())?;
    if let Some(url) = cli.base_url {
        settings.base_url = url;
    }
    if let Some(filter) = cli.log_filter {
        settings.log_filter = filter;
    }

    telemetry::init_tracing(&settings.log_filter)?;
    telemetry::init_metrics()?;

    if cli.offline {
        tracing::info!("Using built-in sample snapshot");
        run(StaticExchange::sample(), cli.command).await
    } else {
        tracing::info!(base_url = %settings.base_url, "Connecting to exchange");
        let client = BinanceClient::with_base_url(&settings.api_key, &settings.api_secret, &settings.base_url);
        run(client, cli.command).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_line() {
        assert!(matches!(parse_line("bases"), Some(Command::Bases)));
        assert!(matches!(parse_line("markets usdt"), Some(Command::Markets { base }) if base == "usdt"));
        assert!(matches!(
            parse_line("state usdt  btc"),
            Some(Command::State { base, market }) if base == "usdt" && market == "btc"
        ));
        assert!(parse_line("state usdt").is_none());
        assert!(parse_line("buy 100 10").is_none());
    }

    #[tokio::test]
    async fn test_run_command_offline() {
        let index = MarketIndex::load(StaticExchange::sample()).await.unwrap();
        assert!(run_command(&index, &Command::Markets { base: "usdt".into() }).await.is_ok());
        assert!(run_command(&index, &Command::State { base: "usdt".into(), market: "btc".into() }).await.is_ok());
        // BNBBTC has a price but no book ticker in the sample
        assert!(run_command(&index, &Command::State { base: "btc".into(), market: "bnb".into() }).await.is_err());
        assert!(run_command(&index, &Command::Currency { code: "xyz".into() }).await.is_err());
    }

    #[test]
    fn test_cli_parses_subcommand() {
        let cli = Cli::try_parse_from(["binx", "--offline", "state", "USDT", "BTC"]).unwrap();
        assert!(cli.offline);
        assert!(matches!(cli.command, Some(Command::State { .. })));
    }
}
