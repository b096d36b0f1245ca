//! Core types for Order Desk.
//!
//! This module provides type-safe wrappers for the values a session collects.

pub mod email;
pub mod id;
pub mod phone;
pub mod price;
pub mod quantity;

pub use email::{Email, EmailError, validate_email};
pub use id::*;
pub use phone::{Phone, PhoneError, validate_phone};
pub use price::Price;
pub use quantity::{Quantity, QuantityError};
