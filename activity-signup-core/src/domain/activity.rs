use serde::{Deserialize, Serialize};

/// A schedulable event with a capacity and a roster of signed-up participants.
///
/// The activity name is not a field; it is the key under which the activity
/// appears in the [`super::ActivityCatalog`]. Participants are identified
/// solely by email address, in server-assigned order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Activity {
    pub description: String,

    /// Human-readable schedule text, e.g. "Fridays, 3:30 PM - 5:00 PM".
    pub schedule: String,

    pub max_participants: u32,

    /// Roster of participant emails. Missing in the wire form means empty.
    #[serde(default)]
    pub participants: Vec<String>,
}

impl Activity {
    /// Remaining capacity, `max_participants - participants.len()`.
    ///
    /// Signed: the server is trusted not to over-fill, but if it does the
    /// deficit is shown rather than clamped.
    pub fn spots_left(&self) -> i64 {
        i64::from(self.max_participants) - self.participants.len() as i64
    }

    pub fn is_full(&self) -> bool {
        self.spots_left() <= 0
    }
}
