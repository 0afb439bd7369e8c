//! Grouping venues by the city/state pair they are located in.

use std::collections::BTreeMap;

use serde::Serialize;

/// Something that has a city and an optional state.
pub trait Located {
    fn city(&self) -> &str;
    fn state(&self) -> Option<&str>;
}

/// All venues sharing one `(city, state)` pair.
#[derive(Debug, Clone, Serialize)]
pub struct Area<T> {
    pub city: String,
    pub state: Option<String>,
    pub venues: Vec<T>,
}

/// Group `items` by exact `(city, state)` match.
///
/// Areas come back sorted by city then state (no-state first); members keep
/// their input order.
pub fn group_by_location<T: Located>(items: Vec<T>) -> Vec<Area<T>> {
    let mut areas: BTreeMap<(String, Option<String>), Vec<T>> = BTreeMap::new();
    for item in items {
        let key = (item.city().to_string(), item.state().map(str::to_string));
        areas.entry(key).or_default().push(item);
    }

    areas
        .into_iter()
        .map(|((city, state), venues)| Area {
            city,
            state,
            venues,
        })
        .collect()
}
