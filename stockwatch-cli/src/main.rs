//! Stockwatch CLI — inspect a single holding from the command line.
//!
//! Commands:
//! - `show` — build a position and print its two-line summary (or JSON)
//! - `gain` — print the gain/loss percent for a cost/price pair

use anyhow::Result;
use clap::{Parser, Subcommand};
use stockwatch_core::domain::Position;
use tracing::debug;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(
    name = "stockwatch",
    about = "Stockwatch CLI — single-holding gain/loss tracker"
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Build a position and print its summary.
    Show {
        /// Ticker symbol (e.g., AAPL).
        #[arg(long)]
        symbol: String,

        /// Company name. Defaults to the symbol.
        #[arg(long)]
        name: Option<String>,

        /// Per-share purchase price.
        #[arg(long)]
        cost_basis: f64,

        /// Current market price. Defaults to the cost basis.
        #[arg(long)]
        price: Option<f64>,

        /// Emit JSON instead of the text summary.
        #[arg(long, default_value_t = false)]
        json: bool,
    },
    /// Print the gain/loss percent for a cost/price pair.
    Gain {
        /// Per-share purchase price.
        #[arg(long)]
        cost_basis: f64,

        /// Current market price.
        #[arg(long)]
        price: f64,
    },
}

fn main() -> Result<()> {
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Show {
            symbol,
            name,
            cost_basis,
            price,
            json,
        } => run_show(symbol, name, cost_basis, price, json),
        Commands::Gain { cost_basis, price } => run_gain(cost_basis, price),
    }
}

fn run_show(
    symbol: String,
    name: Option<String>,
    cost_basis: f64,
    price: Option<f64>,
    json: bool,
) -> Result<()> {
    let name = name.unwrap_or_else(|| symbol.clone());
    let mut position = Position::new(symbol, name, cost_basis);
    debug!(symbol = position.symbol(), cost_basis, "opened position");

    if let Some(price) = price {
        position.set_current_price(price);
        debug!(symbol = position.symbol(), price, "applied market price");
    }

    if json {
        println!("{}", serde_json::to_string_pretty(&position)?);
    } else {
        println!("{position}");
    }

    Ok(())
}

fn run_gain(cost_basis: f64, price: f64) -> Result<()> {
    let mut position = Position::new("-", "-", cost_basis);
    position.set_current_price(price);

    println!("{:.2}%", position.change_percent() * 100.0);

    Ok(())
}
