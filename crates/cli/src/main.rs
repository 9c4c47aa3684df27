//! Hornero CLI - cost reports from catalog exports.
//!
//! # Usage
//!
//! ```bash
//! # Catalog-wide summary at the configured global margin
//! hornero summary -i ingredients.json -p products.json
//!
//! # One product, current prices, its own margin
//! hornero product medialunas -i ingredients.json -p products.json
//!
//! # Convert a quantity
//! hornero convert 250 g kg
//!
//! # Oven electricity estimate for pre-filling utilities
//! hornero utility --kw 2.5 --minutes 40
//! ```
//!
//! # Commands
//!
//! - `summary` - Portfolio summary with a uniform global margin
//! - `product` - Single product cost breakdown
//! - `convert` - Unit conversion
//! - `utility` - Oven electricity cost estimate

#![cfg_attr(not(test), forbid(unsafe_code))]

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use hornero_core::Unit;
use hornero_costing::ElectricityRate;
use rust_decimal::Decimal;
use tracing_subscriber::EnvFilter;

use crate::commands::OutputFormat;
use crate::config::{CliConfig, LogFormat};

mod commands;
mod config;

#[derive(Parser)]
#[command(name = "hornero")]
#[command(author, version, about = "Hornero bakery cost tools")]
struct Cli {
    /// Output format
    #[arg(short, long, value_enum, default_value_t = OutputFormat::Table, global = true)]
    format: OutputFormat,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Summarize costs and suggested revenue across the catalog
    Summary {
        /// Ingredient export (JSON or YAML)
        #[arg(short, long)]
        ingredients: PathBuf,

        /// Product export (JSON or YAML)
        #[arg(short, long)]
        products: PathBuf,

        /// Global margin override in percent (default: `HORNERO_DEFAULT_MARGIN`)
        #[arg(short, long)]
        margin: Option<Decimal>,
    },
    /// Show the cost breakdown of one product
    Product {
        /// Product ID
        id: String,

        /// Ingredient export (JSON or YAML)
        #[arg(short, long)]
        ingredients: PathBuf,

        /// Product export (JSON or YAML)
        #[arg(short, long)]
        products: PathBuf,

        /// Use line totals stored with the recipe instead of current prices
        #[arg(long)]
        cached: bool,

        /// Price with this margin instead of the product's own
        #[arg(short, long)]
        margin: Option<Decimal>,
    },
    /// Convert a quantity between units
    Convert {
        quantity: Decimal,
        from: Unit,
        to: Unit,
    },
    /// Estimate oven electricity cost
    Utility {
        /// Oven consumption in kW
        #[arg(long)]
        kw: Decimal,

        /// Production time in minutes
        #[arg(long)]
        minutes: Decimal,

        /// Price per kWh (default: `HORNERO_ELECTRICITY_RATE`)
        #[arg(long)]
        rate: Option<Decimal>,
    },
}

fn init_tracing(format: LogFormat) {
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into());
    let builder = tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr);

    match format {
        LogFormat::Pretty => builder.init(),
        LogFormat::Json => builder.json().init(),
    }
}

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    let config = match CliConfig::from_env() {
        Ok(config) => config,
        Err(e) => {
            init_tracing(LogFormat::default());
            tracing::error!("Invalid configuration: {e}");
            std::process::exit(2);
        }
    };
    init_tracing(config.log_format);

    let result: Result<(), Box<dyn std::error::Error>> = run(cli, &config).await;

    if let Err(e) = result {
        tracing::error!("Command failed: {e}");
        std::process::exit(1);
    }
}

async fn run(cli: Cli, config: &CliConfig) -> Result<(), Box<dyn std::error::Error>> {
    match cli.command {
        Commands::Summary {
            ingredients,
            products,
            margin,
        } => {
            let margin = margin.unwrap_or(config.default_margin);
            commands::summary::run(&ingredients, &products, margin, cli.format).await?;
        }
        Commands::Product {
            id,
            ingredients,
            products,
            cached,
            margin,
        } => {
            commands::product::run(&id, &ingredients, &products, cached, margin, cli.format)
                .await?;
        }
        Commands::Convert { quantity, from, to } => {
            commands::convert::run(quantity, from, to, cli.format)?;
        }
        Commands::Utility { kw, minutes, rate } => {
            let rate = rate.map_or(config.electricity_rate, ElectricityRate::new);
            commands::utility::run(kw, minutes, rate, cli.format)?;
        }
    }
    Ok(())
}
