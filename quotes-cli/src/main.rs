//! Quotes CLI
//!
//! Prints latest trade prices from the Kraken public API.

mod config;

use std::time::Duration;

use anyhow::{Context, Result, bail};
use clap::{Parser, Subcommand};
use serde::Serialize;
use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

use config::{Config, LogFormat};
use quotes_client::{DEFAULT_BASE_URL, KrakenClient};
use quotes_types::{Pair, Quote, QuoteProvider};

#[derive(Parser)]
#[command(name = "quotes")]
#[command(author, version, about = "Latest trade prices from Kraken", long_about = None)]
struct Cli {
    /// Root URL of the Kraken public API
    #[arg(long, env = "KRAKEN_API_URL", default_value = DEFAULT_BASE_URL)]
    api_url: String,

    /// Give up on a quote after this many seconds
    #[arg(
        long,
        env = "QUOTES_TIMEOUT_SECS",
        default_value_t = 10,
        value_parser = clap::value_parser!(u64).range(1..)
    )]
    timeout_secs: u64,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Fetch the latest trade price for one or more pairs
    Price {
        /// Canonical pair names (btcusd, ethusd, ltcusd, xrpusd)
        #[arg(required = true)]
        pairs: Vec<String>,
        /// Print one JSON object per line
        #[arg(long)]
        json: bool,
    },
    /// List supported pairs and their vendor identifiers
    Pairs,
}

#[derive(Serialize)]
struct PriceLine {
    pair: Pair,
    price: Quote,
}

fn init_tracing(format: LogFormat) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| "warn,quotes_client=info".into());
    let registry = tracing_subscriber::registry().with(filter);

    // stdout carries the quotes, logs go to stderr
    match format {
        LogFormat::Json => registry
            .with(fmt::layer().json().with_writer(std::io::stderr))
            .init(),
        LogFormat::Text => registry
            .with(fmt::layer().with_writer(std::io::stderr))
            .init(),
    }
}

/// Fetches one quote, abandoning the call once `deadline` elapses.
async fn fetch_quote(provider: &dyn QuoteProvider, pair: Pair, deadline: Duration) -> Result<Quote> {
    match tokio::time::timeout(deadline, provider.get_pair_price(pair)).await {
        Ok(result) => result.with_context(|| format!("Failed to fetch {}", pair)),
        Err(_) => bail!(
            "Timed out after {}s waiting for {}",
            deadline.as_secs(),
            pair
        ),
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    let config = Config::from_env()?;
    init_tracing(config.log_format);

    match cli.command {
        Commands::Pairs => {
            for pair in Pair::all() {
                println!("{}\t{}", pair, pair.vendor_id());
            }
        }

        Commands::Price { pairs, json } => {
            // Reject unknown names before anything goes on the wire.
            let pairs = pairs
                .iter()
                .map(|name| name.parse::<Pair>())
                .collect::<Result<Vec<_>, _>>()?;

            let http = reqwest::Client::new();
            let kraken = KrakenClient::new(&http).with_base_url(&cli.api_url);
            let deadline = Duration::from_secs(cli.timeout_secs);
            tracing::debug!(api_url = %kraken.base_url(), count = pairs.len(), "Fetching quotes");

            for pair in pairs {
                let quote = fetch_quote(&kraken, pair, deadline).await?;
                if json {
                    let line = PriceLine { pair, price: quote };
                    println!("{}", serde_json::to_string(&line)?);
                } else {
                    println!("{} {}", pair, quote);
                }
            }
        }
    }

    Ok(())
}
