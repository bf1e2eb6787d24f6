//! # contact-audit - Batch Contact Validation
//!
//! contact-audit reads a JSON array of contact records, checks each record's
//! email and phone fields against fixed pattern rules, and renders two
//! reports: one line per contact with its validation result, and one line per
//! city with its count of invalid contacts.
//!
//! ## Pipeline
//!
//! The tool is a strictly sequential pipeline over an in-memory collection:
//!
//! 1. Load — [`contact::Contact::load_all`] reads and deserializes the input.
//! 2. Validate — [`validate::validate_all`] pairs every contact with its
//!    [`validate::Validation`] outcome.
//! 3. Aggregate — [`aggregate::invalid_counts_by_city`] counts invalid
//!    contacts per city.
//! 4. Report — [`report::contact_report`] and [`report::city_report`] render
//!    sorted tab-separated text.
//!
//! ## Modules
//!
//! - [`contact`] - Contact record model and input loading
//! - [`validate`] - Email/phone predicates and validation outcomes
//! - [`aggregate`] - Per-city invalid-contact counts
//! - [`report`] - Sorted report rendering
//!
//! ## Example
//!
//! ```no_run
//! use std::path::Path;
//! use contact_audit::aggregate::invalid_counts_by_city;
//! use contact_audit::contact::Contact;
//! use contact_audit::report::{city_report, contact_report};
//! use contact_audit::validate::validate_all;
//!
//! let contacts = Contact::load_all(Path::new("contacts.json")).expect("load failed");
//! let validated = validate_all(contacts);
//! let counts = invalid_counts_by_city(&validated);
//! print!("{}", contact_report(&validated));
//! print!("{}", city_report(&counts));
//! ```

pub mod aggregate;
pub mod contact;
pub mod report;
pub mod validate;
