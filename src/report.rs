//! Report rendering for validated contacts and city counts.
//!
//! Both reports are tab-separated, one record per line, no header and no
//! trailing summary. Name ordering is byte-wise ordinal rather than
//! locale-dependent collation so output is identical across hosts.

use std::collections::HashMap;

use crate::validate::ValidatedContact;

/// Render one `fullName<TAB>message` line per contact, sorted ascending by
/// full name.
pub fn contact_report(validated: &[ValidatedContact]) -> String {
    let mut rows: Vec<(&str, &str)> = validated
        .iter()
        .map(|item| (item.contact.full_name.as_str(), item.validation.message()))
        .collect();
    rows.sort();

    let mut output = String::new();
    for (name, message) in rows {
        output.push_str(name);
        output.push('\t');
        output.push_str(message);
        output.push('\n');
    }
    output
}

/// Render one `cityName<TAB>invalidCount` line per city, sorted by count
/// descending. Equal counts are tie-broken by city name ascending.
pub fn city_report(counts: &HashMap<String, usize>) -> String {
    let mut rows: Vec<(&str, usize)> = counts
        .iter()
        .map(|(city, count)| (city.as_str(), *count))
        .collect();
    rows.sort_by(|a, b| b.1.cmp(&a.1).then(a.0.cmp(b.0)));

    let mut output = String::new();
    for (city, count) in rows {
        output.push_str(city);
        output.push('\t');
        output.push_str(&count.to_string());
        output.push('\n');
    }
    output
}
