//! Order Desk CLI - Interactive order taking at the counter.
//!
//! A session runs the same fixed sequence every time:
//!
//! 1. Collect the customer's name, phone and email (re-prompting until the
//!    phone and email are well-formed).
//! 2. Show the catalog.
//! 3. Collect product id / quantity pairs until the operator types `done`.
//! 4. Ask whether the order is delivered.
//! 5. Price the order, print the total and append the order to the log file.
//!
//! # Modules
//!
//! - [`prompt`] - Line-oriented prompting over any `BufRead` / `Write` pair
//! - [`intake`] - Customer, order line and delivery questions
//! - [`recorder`] - Append-only order log
//! - [`session`] - The sequence above
//! - [`config`] - Log file location
//! - [`error`] - Session and configuration errors

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod config;
pub mod error;
pub mod intake;
pub mod prompt;
pub mod recorder;
pub mod session;

pub use config::DeskConfig;
pub use error::{ConfigError, SessionError};
pub use prompt::Prompter;
pub use recorder::OrderLog;
pub use session::Session;
