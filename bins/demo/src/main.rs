//! Cashbox demo
//!
//! Loads the configured cassettes into a dispenser and replays the sample
//! session: reserves, four withdrawals, then reserves again.
//!
//! Usage: cargo run --bin cashbox

use anyhow::Context;
use tracing::info;
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

use cashbox_core::{Dispenser, ScanOrder};
use cashbox_shared::AppConfig;
use cashbox_shared::config::LoggingConfig;
use cashbox_shared::types::{Amount, CurrencyCode};

/// Withdrawals replayed against the loaded dispenser.
const REQUESTS: [(Amount, CurrencyCode, ScanOrder); 4] = [
    (1000, CurrencyCode::Rub, ScanOrder::LargestFirst),
    (1000, CurrencyCode::Rub, ScanOrder::SmallestFirst),
    (1000, CurrencyCode::Usd, ScanOrder::SmallestFirst),
    (3, CurrencyCode::Kzt, ScanOrder::LargestFirst),
];

fn main() -> anyhow::Result<()> {
    // Load environment variables from .env file
    dotenvy::dotenv().ok();

    let config = AppConfig::load().context("Failed to load configuration")?;
    init_tracing(&config.logging);

    let mut dispenser = Dispenser::new();
    for cassette in &config.cassettes {
        dispenser.deposit(&cassette.notes, cassette.currency);
    }
    info!(cassettes = config.cassettes.len(), "Dispenser loaded");

    print_reserves(&dispenser);

    for (amount, currency, order) in REQUESTS {
        request(&mut dispenser, amount, currency, order);
    }

    print_reserves(&dispenser);

    let report = serde_json::to_string_pretty(&dispenser.report())?;
    println!("{report}");

    Ok(())
}

/// Installs the subscriber. `RUST_LOG` wins over the configured filter.
fn init_tracing(logging: &LoggingConfig) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(logging.filter.as_str()));
    let registry = tracing_subscriber::registry().with(filter);

    if logging.json {
        registry
            .with(tracing_subscriber::fmt::layer().json().with_writer(std::io::stderr))
            .init();
    } else {
        registry
            .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
            .init();
    }
}

fn print_reserves(dispenser: &Dispenser) {
    println!("Reserves:");
    for currency in CurrencyCode::ALL {
        println!(
            "Currency {} ({currency}): {}",
            currency.code(),
            dispenser.check_reserve(currency)
        );
    }
}

fn request(dispenser: &mut Dispenser, amount: Amount, currency: CurrencyCode, order: ScanOrder) {
    let mode = match order {
        ScanOrder::LargestFirst => "withdraw_large",
        ScanOrder::SmallestFirst => "withdraw_small",
    };

    match dispenser.withdraw(amount, currency, order) {
        Ok(notes) => println!(
            "Asked {mode} for {amount} {currency}, got {} banknotes: {notes:?}",
            notes.len()
        ),
        Err(err) => println!("Asked {mode} for {amount} {currency}: {err} [{}]", err.error_code()),
    }
}
