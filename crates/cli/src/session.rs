//! One order-taking session, start to finish.

use std::io::{BufRead, Write};

use order_desk_core::{Catalog, OrderRecord, PricingRules};
use tracing::info;

use crate::error::SessionError;
use crate::intake;
use crate::prompt::Prompter;
use crate::recorder::OrderLog;

/// Runs the fixed sequence: customer, catalog, order lines, delivery,
/// pricing, summary, save.
#[derive(Debug)]
pub struct Session<'a> {
    catalog: &'a Catalog,
    log: &'a OrderLog,
    rules: PricingRules,
}

impl<'a> Session<'a> {
    /// A session using the standard pricing rules.
    #[must_use]
    pub fn new(catalog: &'a Catalog, log: &'a OrderLog) -> Self {
        Self {
            catalog,
            log,
            rules: PricingRules::default(),
        }
    }

    #[must_use]
    pub fn with_rules(mut self, rules: PricingRules) -> Self {
        self.rules = rules;
        self
    }

    /// Take one order and append it to the log.
    ///
    /// Nothing is written to the log unless every step before it succeeds.
    ///
    /// # Errors
    ///
    /// Returns an error if input closes early, the terminal fails, the order
    /// cannot be priced, or the log cannot be written.
    pub fn run<R: BufRead, W: Write>(
        &self,
        prompter: &mut Prompter<R, W>,
    ) -> Result<OrderRecord, SessionError> {
        let customer = intake::customer_info(prompter)?;
        info!(name = %customer.name, "Customer details captured");

        prompter.say("\nAvailable Products:")?;
        for product in self.catalog {
            prompter.say(product)?;
        }

        let lines = intake::order_lines(prompter, self.catalog)?;
        let delivery = intake::delivery(prompter)?;

        let breakdown = self.rules.breakdown(&lines, self.catalog, delivery)?;
        info!(
            lines = lines.len(),
            delivery,
            subtotal = %breakdown.subtotal,
            discount = %breakdown.discount,
            tax = %breakdown.tax,
            total = %breakdown.total,
            "Order priced"
        );

        prompter.say(format_args!("\nCustomer: {}", customer.name))?;
        prompter.say(format_args!(
            "Final amount (including tax and delivery if applicable): {}",
            breakdown.total.display()
        ))?;

        let record = OrderRecord {
            customer,
            lines,
            final_amount: breakdown.total,
        };
        self.log.append(&record)?;
        prompter.say("Order has been saved.")?;

        Ok(record)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use std::io::Cursor;

    use order_desk_core::Price;

    use super::*;

    #[test]
    fn test_custom_rules_are_used() {
        let dir = tempfile::tempdir().unwrap();
        let log = OrderLog::new(dir.path().join("orders.txt"));
        let catalog = Catalog::standard();
        let rules = PricingRules {
            delivery_fee: Price::from_cents(500),
            ..PricingRules::default()
        };

        let input = "Pat\n123-456-7890\npat@example.com\ndone\ny\n";
        let mut prompter = Prompter::new(Cursor::new(input), Vec::new());
        let record = Session::new(&catalog, &log)
            .with_rules(rules)
            .run(&mut prompter)
            .unwrap();

        assert_eq!(record.final_amount.display(), "$5.00");
    }

    #[test]
    fn test_nothing_saved_when_input_ends_early() {
        let dir = tempfile::tempdir().unwrap();
        let log = OrderLog::new(dir.path().join("orders.txt"));
        let catalog = Catalog::standard();

        let input = "Pat\n123-456-7890\npat@example.com\n1\n";
        let mut prompter = Prompter::new(Cursor::new(input), Vec::new());
        let result = Session::new(&catalog, &log).run(&mut prompter);

        assert!(matches!(result, Err(SessionError::InputClosed)));
        assert!(!log.path().exists());
    }
}
