//! Email/phone validation predicates and per-contact outcomes.
//!
//! Two fixed patterns, compiled once for the process lifetime:
//!
//! - email: exactly one `@` with non-empty, `@`-free text on both sides.
//!   No domain or character-class checks beyond that.
//! - phone: one or more characters drawn from digits, hyphens, and spaces.
//!   The empty string does not match.

use once_cell::sync::Lazy;
use regex::Regex;

use crate::contact::Contact;

static EMAIL_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"^[^@]+@[^@]+$").unwrap());
static PHONE_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"^[\d\- ]+$").unwrap());

/// Outcome of validating one contact. Exactly one of the four variants
/// applies; the message strings are part of the report contract.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Validation {
    Valid,
    PhoneInvalid,
    EmailInvalid,
    BothInvalid,
}

impl Validation {
    /// Whether both fields passed their checks.
    pub fn is_valid(&self) -> bool {
        matches!(self, Validation::Valid)
    }

    /// Fixed human-readable reason string for the contact report.
    pub fn message(&self) -> &'static str {
        match self {
            Validation::Valid => "Valid",
            Validation::PhoneInvalid => "Phone is invalid.",
            Validation::EmailInvalid => "Email is invalid.",
            Validation::BothInvalid => "Email and Phone are invalid.",
        }
    }
}

/// A contact paired with its validation outcome. The outcome is assigned
/// exactly once and the pair is read-only downstream.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidatedContact {
    pub contact: Contact,
    pub validation: Validation,
}

/// True if `email` contains exactly one `@` with non-empty text on each side.
pub fn email_is_valid(email: &str) -> bool {
    EMAIL_RE.is_match(email)
}

/// True if `phone` is non-empty and consists only of digits, hyphens, and
/// spaces.
pub fn phone_is_valid(phone: &str) -> bool {
    PHONE_RE.is_match(phone)
}

/// Evaluate both predicates for one contact and combine them into a single
/// outcome.
pub fn validate(contact: &Contact) -> Validation {
    let email_valid = email_is_valid(&contact.email_address);
    let phone_valid = phone_is_valid(&contact.phone_number);

    match (email_valid, phone_valid) {
        (true, true) => Validation::Valid,
        (true, false) => Validation::PhoneInvalid,
        (false, true) => Validation::EmailInvalid,
        (false, false) => Validation::BothInvalid,
    }
}

/// Validate every contact, preserving input order.
pub fn validate_all(contacts: Vec<Contact>) -> Vec<ValidatedContact> {
    contacts
        .into_iter()
        .map(|contact| {
            let validation = validate(&contact);
            ValidatedContact {
                contact,
                validation,
            }
        })
        .collect()
}
