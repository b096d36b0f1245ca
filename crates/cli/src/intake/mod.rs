//! The questions asked during a session.
//!
//! Each function reads until it has a usable answer. Malformed answers are
//! reported to the operator and asked again; only closed input or I/O
//! failure ends the loop early.

mod customer;
mod order;

pub use customer::customer_info;
pub use order::{delivery, order_lines};
