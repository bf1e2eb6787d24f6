//! Per-city aggregation of invalid contacts.

use std::collections::HashMap;

use crate::validate::ValidatedContact;

/// Count invalid contacts per city.
///
/// Every distinct `cityName` in the input gets an entry, so a city whose
/// contacts all validated cleanly appears with a count of zero. An empty
/// city string is grouped under `""` like any other value. Map order carries
/// no meaning; the city reporter sorts.
pub fn invalid_counts_by_city(validated: &[ValidatedContact]) -> HashMap<String, usize> {
    let mut counts: HashMap<String, usize> = HashMap::new();

    for item in validated {
        counts.entry(item.contact.city_name.clone()).or_insert(0);
    }

    for item in validated {
        if !item.validation.is_valid() {
            if let Some(count) = counts.get_mut(&item.contact.city_name) {
                *count += 1;
            }
        }
    }

    counts
}
