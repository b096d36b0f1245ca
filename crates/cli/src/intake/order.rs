//! Order lines and the delivery question.

use std::io::{BufRead, Write};

use order_desk_core::{Catalog, OrderLines, Quantity};
use tracing::debug;

use crate::error::SessionError;
use crate::prompt::Prompter;

const PRODUCT_PROMPT: &str = "Enter the product ID to order (or 'done' to finish): ";
const DONE: &str = "done";
const INVALID_QUANTITY: &str = "Invalid quantity. Please enter a positive integer.";
const DELIVERY_PROMPT: &str = "Would you like delivery (y/n)? ";

/// Collect product id / quantity pairs until the operator types `done`.
///
/// Ids are checked against `catalog` before the quantity is asked, so every
/// returned line names a real product. After an unknown id or a bad
/// quantity the loop goes back to asking for an id. Entering an id twice
/// replaces the earlier quantity.
///
/// # Errors
///
/// Returns [`SessionError::InputClosed`] if input ends before `done`, or
/// [`SessionError::Io`] on terminal failure.
pub fn order_lines<R: BufRead, W: Write>(
    prompter: &mut Prompter<R, W>,
    catalog: &Catalog,
) -> Result<OrderLines, SessionError> {
    let mut lines = OrderLines::new();

    loop {
        let reply = prompter.ask(PRODUCT_PROMPT)?;
        if reply.eq_ignore_ascii_case(DONE) {
            break;
        }

        let product = match catalog.resolve(&reply) {
            Ok(product) => product,
            Err(e) => {
                debug!(error = %e, "Rejected product id");
                prompter.say(format_args!(
                    "Unknown product ID '{reply}'. Please choose an ID from the list."
                ))?;
                continue;
            }
        };

        let reply = prompter.ask(&format!("Enter the quantity for product ID {}: ", product.id))?;
        match Quantity::parse(&reply) {
            Ok(quantity) => {
                let replaced = lines.set(product.id, quantity);
                debug!(
                    product_id = %product.id,
                    %quantity,
                    replaced = ?replaced.map(|q| q.get()),
                    "Accepted order line"
                );
            }
            Err(e) => {
                debug!(product_id = %product.id, error = %e, "Rejected quantity");
                prompter.say(INVALID_QUANTITY)?;
            }
        }
    }

    Ok(lines)
}

/// Ask whether the order is delivered. Only `y` or `Y` means yes.
///
/// # Errors
///
/// Returns [`SessionError::InputClosed`] or [`SessionError::Io`].
pub fn delivery<R: BufRead, W: Write>(
    prompter: &mut Prompter<R, W>,
) -> Result<bool, SessionError> {
    Ok(prompter.ask(DELIVERY_PROMPT)?.eq_ignore_ascii_case("y"))
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use std::io::Cursor;

    use order_desk_core::ProductId;

    use super::*;

    fn prompter(input: &str) -> Prompter<Cursor<String>, Vec<u8>> {
        Prompter::new(Cursor::new(input.to_owned()), Vec::new())
    }

    fn entries(lines: &OrderLines) -> Vec<(u32, u32)> {
        lines.iter().map(|(id, q)| (id.as_u32(), q.get())).collect()
    }

    #[test]
    fn test_collects_until_done() {
        let mut p = prompter("1\n2\n3\n1\nDONE\n");
        let lines = order_lines(&mut p, &Catalog::standard()).unwrap();
        assert_eq!(entries(&lines), [(1, 2), (3, 1)]);
    }

    #[test]
    fn test_same_id_twice_keeps_last_quantity() {
        let mut p = prompter("4\n1\n2\n5\n4\n3\ndone\n");
        let lines = order_lines(&mut p, &Catalog::standard()).unwrap();
        assert_eq!(entries(&lines), [(4, 3), (2, 5)]);
    }

    #[test]
    fn test_bad_quantity_requires_id_again() {
        let mut p = prompter("2\n0\n2\n-5\n2\nabc\n2\n3\nDone\n");
        let lines = order_lines(&mut p, &Catalog::standard()).unwrap();
        assert_eq!(lines.get(ProductId::new(2)).map(|q| q.get()), Some(3));

        let out = String::from_utf8(p.into_parts().1).unwrap();
        assert_eq!(out.matches(INVALID_QUANTITY).count(), 3);
        assert_eq!(out.matches(PRODUCT_PROMPT).count(), 5);
    }

    #[test]
    fn test_unknown_id_is_rejected_at_intake() {
        let mut p = prompter("9\nmats\n5\n1\ndone\n");
        let lines = order_lines(&mut p, &Catalog::standard()).unwrap();
        assert_eq!(entries(&lines), [(5, 1)]);

        let out = String::from_utf8(p.into_parts().1).unwrap();
        assert!(out.contains("Unknown product ID '9'. Please choose an ID from the list.\n"));
        assert!(out.contains("Unknown product ID 'mats'."));
        // No quantity question for the rejected ids.
        assert_eq!(out.matches("Enter the quantity").count(), 1);
    }

    #[test]
    fn test_done_immediately() {
        let mut p = prompter("done\n");
        assert!(order_lines(&mut p, &Catalog::standard()).unwrap().is_empty());
    }

    #[test]
    fn test_eof_before_done() {
        let mut p = prompter("1\n1\n");
        assert!(matches!(
            order_lines(&mut p, &Catalog::standard()),
            Err(SessionError::InputClosed)
        ));
    }

    #[test]
    fn test_delivery_answers() {
        let cases = [
            ("y", true),
            ("Y", true),
            ("yes", false),
            ("n", false),
            ("", false),
        ];
        for (answer, expected) in cases {
            let mut p = prompter(&format!("{answer}\n"));
            assert_eq!(delivery(&mut p).unwrap(), expected, "answer {answer:?}");
        }
    }
}
