//! Customer details, order lines and the finished order record.

use core::fmt;

use serde::{Deserialize, Serialize};

use crate::types::{Email, Phone, Price, ProductId, Quantity};

/// Contact details captured at the start of a session.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CustomerInfo {
    /// Free-form, not validated.
    pub name: String,
    pub phone: Phone,
    pub email: Email,
}

/// Quantities per product, in the order products were first entered.
///
/// Setting a product a second time replaces its quantity but keeps its
/// original position.
///
/// ```
/// use order_desk_core::{OrderLines, ProductId, Quantity};
///
/// let mut lines = OrderLines::new();
/// let qty = |n| Quantity::new(n).unwrap();
/// lines.set(ProductId::new(3), qty(1));
/// lines.set(ProductId::new(1), qty(2));
/// lines.set(ProductId::new(3), qty(4));
///
/// let entries: Vec<_> = lines.iter().map(|(id, q)| (id.as_u32(), q.get())).collect();
/// assert_eq!(entries, [(3, 4), (1, 2)]);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct OrderLines {
    entries: Vec<(ProductId, Quantity)>,
}

impl OrderLines {
    #[must_use]
    pub const fn new() -> Self {
        Self {
            entries: Vec::new(),
        }
    }

    /// Record `quantity` for `id`, returning the quantity it replaced.
    pub fn set(&mut self, id: ProductId, quantity: Quantity) -> Option<Quantity> {
        match self.entries.iter_mut().find(|(existing, _)| *existing == id) {
            Some((_, slot)) => Some(std::mem::replace(slot, quantity)),
            None => {
                self.entries.push((id, quantity));
                None
            }
        }
    }

    #[must_use]
    pub fn get(&self, id: ProductId) -> Option<Quantity> {
        self.entries
            .iter()
            .find(|(existing, _)| *existing == id)
            .map(|(_, quantity)| *quantity)
    }

    /// Entries in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (ProductId, Quantity)> + '_ {
        self.entries.iter().copied()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl FromIterator<(ProductId, Quantity)> for OrderLines {
    fn from_iter<I: IntoIterator<Item = (ProductId, Quantity)>>(iter: I) -> Self {
        let mut lines = Self::new();
        for (id, quantity) in iter {
            lines.set(id, quantity);
        }
        lines
    }
}

/// The completed order written to the order log once per session.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OrderRecord {
    pub customer: CustomerInfo,
    pub lines: OrderLines,
    pub final_amount: Price,
}

/// Renders the log block, including the blank line that separates records:
///
/// ```text
/// Customer: <name>, Phone: <phone>, Email: <email>
/// Orders:
/// Product ID: <id>, Quantity: <qty>
/// Final Amount: $<amount>
///
/// ```
impl fmt::Display for OrderRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let CustomerInfo { name, phone, email } = &self.customer;
        writeln!(f, "Customer: {name}, Phone: {phone}, Email: {email}")?;
        writeln!(f, "Orders:")?;
        for (id, quantity) in self.lines.iter() {
            writeln!(f, "Product ID: {id}, Quantity: {quantity}")?;
        }
        writeln!(f, "Final Amount: {}", self.final_amount.display())?;
        writeln!(f)
    }
}
