//! Order Desk Core - Domain types and pricing rules.
//!
//! This crate provides the types used by the Order Desk components:
//! - `cli` - Interactive order-taking terminal session
//! - `integration-tests` - End-to-end session tests
//!
//! # Architecture
//!
//! The core crate contains only types and pure functions - no terminal I/O,
//! no file access. Everything here can be exercised with plain values.
//!
//! # Modules
//!
//! - [`types`] - Validated newtypes for phones, emails, prices, ids and quantities
//! - [`catalog`] - The fixed product catalog and id resolution
//! - [`order`] - Customer details, order lines and the persisted order record
//! - [`pricing`] - Discount, tax and delivery rules

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod catalog;
pub mod order;
pub mod pricing;
pub mod types;

pub use catalog::{Catalog, CatalogError, Product};
pub use order::{CustomerInfo, OrderLines, OrderRecord};
pub use pricing::{PriceBreakdown, PricingError, PricingRules, calculate_total};
pub use types::*;
