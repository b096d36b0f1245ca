//! Customer contact details.

use std::io::{BufRead, Write};

use order_desk_core::{CustomerInfo, Email, Phone};
use tracing::debug;

use crate::error::SessionError;
use crate::prompt::Prompter;

const NAME_PROMPT: &str = "Enter the customer's name: ";
const PHONE_PROMPT: &str =
    "Enter the customer's phone number (format: (123) 456-7890 or 123-456-7890): ";
const PHONE_RETRY: &str = "Invalid phone number format. Please try again.";
const EMAIL_PROMPT: &str = "Enter the customer's email address: ";
const EMAIL_RETRY: &str = "Invalid email format. Please try again.";

/// Ask for name, phone and email.
///
/// The name is taken as typed. Phone and email are asked again until they
/// parse.
///
/// # Errors
///
/// Returns [`SessionError::InputClosed`] if input ends first, or
/// [`SessionError::Io`] on terminal failure.
pub fn customer_info<R: BufRead, W: Write>(
    prompter: &mut Prompter<R, W>,
) -> Result<CustomerInfo, SessionError> {
    let name = prompter.ask(NAME_PROMPT)?;

    let phone = prompter.ask_until(PHONE_PROMPT, PHONE_RETRY, |reply| {
        Phone::parse(reply)
            .inspect_err(|e| debug!(error = %e, "Rejected phone number"))
            .ok()
    })?;

    let email = prompter.ask_until(EMAIL_PROMPT, EMAIL_RETRY, |reply| {
        Email::parse(reply)
            .inspect_err(|e| debug!(error = %e, "Rejected email"))
            .ok()
    })?;

    Ok(CustomerInfo { name, phone, email })
}
