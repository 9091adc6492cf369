use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use super::Activity;

/// The full set of activities as served by `GET /activities`.
///
/// The wire form is a JSON object keyed by activity name. A catalog is
/// recreated from scratch on every fetch and never mutated in place;
/// iteration is in name order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ActivityCatalog {
    activities: BTreeMap<String, Activity>,
}

impl ActivityCatalog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.activities.len()
    }

    pub fn is_empty(&self) -> bool {
        self.activities.is_empty()
    }

    pub fn get(&self, name: &str) -> Option<&Activity> {
        self.activities.get(name)
    }

    /// Activity names, one per selection-control option.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.activities.keys().map(String::as_str)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&String, &Activity)> {
        self.activities.iter()
    }

    pub fn add_activity(&mut self, name: impl Into<String>, activity: Activity) {
        self.activities.insert(name.into(), activity);
    }
}
