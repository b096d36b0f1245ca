//! Order Desk - take one customer order at the counter.
//!
//! # Usage
//!
//! ```bash
//! # Orders are appended to ./customer_orders.txt
//! order-desk
//!
//! # Append somewhere else
//! order-desk --log-file /srv/desk/orders.txt
//!
//! # See what the session is doing (logs go to stderr)
//! RUST_LOG=order_desk_cli=debug order-desk
//! ```
//!
//! # Environment Variables
//!
//! - `ORDER_DESK_LOG_FILE` - Order log path when `--log-file` is not given
//! - `RUST_LOG` - Log filter (default: `order_desk=warn,order_desk_cli=warn`)

#![cfg_attr(not(test), forbid(unsafe_code))]

use std::io;
use std::path::PathBuf;

use clap::Parser;
use order_desk_cli::config::DEFAULT_LOG_FILTER;
use order_desk_cli::{DeskConfig, OrderLog, Prompter, Session};
use order_desk_core::Catalog;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser)]
#[command(name = "order-desk")]
#[command(author, version, about = "Take a customer order and append it to the order log")]
struct Cli {
    /// File completed orders are appended to [default: customer_orders.txt]
    #[arg(long, value_name = "PATH")]
    log_file: Option<PathBuf>,
}

fn main() {
    let cli = Cli::parse();

    // Prompts own stdout, so logs go to stderr and stay quiet unless asked for
    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| DEFAULT_LOG_FILTER.into());

    tracing_subscriber::registry()
        .with(env_filter)
        .with(tracing_subscriber::fmt::layer().with_writer(io::stderr))
        .init();

    let result: Result<(), Box<dyn std::error::Error>> = run(cli);

    if let Err(e) = result {
        tracing::error!("Session failed: {e}");
        #[allow(clippy::print_stderr)]
        {
            eprintln!("Error: {e}");
        }
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> Result<(), Box<dyn std::error::Error>> {
    let config = DeskConfig::load(cli.log_file)?;
    tracing::debug!(log_path = %config.log_path.display(), "Configuration loaded");

    let catalog = Catalog::standard();
    let log = OrderLog::new(config.log_path);

    let mut prompter = Prompter::new(io::stdin().lock(), io::stdout().lock());
    Session::new(&catalog, &log).run(&mut prompter)?;
    Ok(())
}
