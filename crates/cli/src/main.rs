//! Shopfront CLI - Inspect and edit a persisted cart.
//!
//! # Usage
//!
//! ```bash
//! # Add a product in size M
//! sf-cart add --id 1 --name "Classic Black Tee" --price 29.99 --image /img/tee.jpg -s M
//!
//! # Change the quantity of a line (0 or less removes it)
//! sf-cart set-quantity 1-M 3
//!
//! # Show contents and total
//! sf-cart show
//!
//! # Check out: print the order summary, record history, empty the cart
//! sf-cart checkout --json
//! ```
//!
//! # Commands
//!
//! - `show`, `total`, `count` - Read the cart
//! - `add`, `remove`, `set-quantity`, `clear` - Change the cart
//! - `checkout` - Summarize and empty the cart
//! - `history` - Show or clear purchase history
//! - `inspect` - Verify the stored cart decodes cleanly
//!
//! Configuration comes from the environment; see
//! [`shopfront_storefront::config`].

#![cfg_attr(not(test), forbid(unsafe_code))]

use std::str::FromStr;

use clap::{Parser, Subcommand};
use rust_decimal::Decimal;
use sentry::integrations::tracing as sentry_tracing;
use shopfront_core::{Product, ProductId};
use shopfront_storefront::store::FileStore;
use shopfront_storefront::{CartConfig, CartItemKey, CartService, PurchaseHistory};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

mod commands;

use commands::CliError;

#[derive(Parser)]
#[command(name = "sf-cart")]
#[command(author, version, about = "Shopfront cart tools")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Show cart contents and total
    Show,
    /// Add one unit of a product
    Add {
        /// Catalog product ID
        #[arg(long)]
        id: String,

        /// Display name
        #[arg(long)]
        name: String,

        /// Unit price (e.g. 29.99)
        #[arg(long, value_parser = parse_price)]
        price: Decimal,

        /// Image URL or path
        #[arg(long)]
        image: String,

        /// Alt text hint for the image
        #[arg(long)]
        image_hint: Option<String>,

        /// Size variant
        #[arg(short, long)]
        size: Option<String>,
    },
    /// Remove a line by key (e.g. `1-M`)
    Remove {
        /// Line key
        key: String,
    },
    /// Set a line's quantity; zero or less removes it
    SetQuantity {
        /// Line key
        key: String,

        /// New quantity
        #[arg(allow_negative_numbers = true)]
        quantity: i64,
    },
    /// Empty the cart
    Clear,
    /// Print the cart total
    Total,
    /// Print the number of units in the cart
    Count,
    /// Print the order summary, record purchase history, and empty the cart
    Checkout {
        /// Print the summary as JSON
        #[arg(long)]
        json: bool,
    },
    /// Show purchase history
    History {
        /// Forget all recorded purchases
        #[arg(long)]
        clear: bool,
    },
    /// Check that the stored cart decodes cleanly
    Inspect,
}

/// Parse a non-negative decimal price.
fn parse_price(raw: &str) -> Result<Decimal, String> {
    let price = Decimal::from_str(raw.trim()).map_err(|e| format!("invalid price {raw:?}: {e}"))?;
    if price.is_sign_negative() {
        return Err(format!("price must not be negative: {raw}"));
    }
    Ok(price)
}

/// Initialize Sentry error tracking and return guard that must be kept alive.
fn init_sentry(config: &CartConfig) -> Option<sentry::ClientInitGuard> {
    let dsn = config.sentry_dsn.as_ref()?;

    let guard = sentry::init((
        dsn.as_str(),
        sentry::ClientOptions {
            release: sentry::release_name!(),
            environment: config
                .sentry_environment
                .clone()
                .map(std::borrow::Cow::Owned),
            attach_stacktrace: true,
            ..Default::default()
        },
    ));

    Some(guard)
}

/// Filter tracing events to Sentry event types.
fn sentry_event_filter(metadata: &tracing::Metadata<'_>) -> sentry_tracing::EventFilter {
    match *metadata.level() {
        tracing::Level::ERROR | tracing::Level::WARN => sentry_tracing::EventFilter::Event,
        tracing::Level::INFO | tracing::Level::DEBUG => sentry_tracing::EventFilter::Breadcrumb,
        _ => sentry_tracing::EventFilter::Ignore,
    }
}

fn main() {
    let cli = Cli::parse();

    // Load configuration from environment (needed for Sentry init)
    let config = CartConfig::from_env();

    // Initialize Sentry (must be done before tracing subscriber)
    let sentry_guard = config.as_ref().ok().and_then(init_sentry);

    // Logs go to stderr so command output stays pipeable
    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| "shopfront_storefront=info,sf_cart=info".into());

    tracing_subscriber::registry()
        .with(env_filter)
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .with(sentry_tracing::layer().event_filter(sentry_event_filter))
        .init();

    let result = config
        .map_err(|e| CliError::from(shopfront_storefront::Error::from(e)))
        .and_then(|config| run(cli, &config));

    match result {
        Ok(output) => print_output(&output),
        Err(e) => {
            tracing::error!("Command failed: {e}");
            // process::exit skips destructors; flush Sentry first
            drop(sentry_guard);
            std::process::exit(1);
        }
    }
}

#[allow(clippy::print_stdout)]
fn print_output(output: &str) {
    if !output.is_empty() {
        println!("{output}");
    }
}

fn run(cli: Cli, config: &CartConfig) -> Result<String, CliError> {
    let store = FileStore::new(&config.store_dir);
    let mut cart = CartService::from_config(&store, config);
    let history = PurchaseHistory::with_key(&store, config.history_key.clone());

    let output = match cli.command {
        Commands::Show => commands::cart::show(&cart),
        Commands::Add {
            id,
            name,
            price,
            image,
            image_hint,
            size,
        } => {
            let product = Product {
                id: ProductId::new(id),
                name,
                price,
                image,
                image_hint,
            };
            commands::cart::add(&mut cart, product, size)
        }
        Commands::Remove { key } => commands::cart::remove(&mut cart, &CartItemKey::new(key)),
        Commands::SetQuantity { key, quantity } => {
            commands::cart::set_quantity(&mut cart, &CartItemKey::new(key), quantity)
        }
        Commands::Clear => commands::cart::clear(&mut cart),
        Commands::Total => cart.total().display(),
        Commands::Count => cart.item_count().to_string(),
        Commands::Checkout { json } => {
            commands::cart::checkout(&mut cart, &history, chrono::Utc::now(), json)?
        }
        Commands::History { clear } => {
            if clear {
                commands::history::clear(&history)?
            } else {
                commands::history::show(&history)
            }
        }
        Commands::Inspect => commands::cart::inspect(&cart)?,
    };
    Ok(output)
}
