//! Splitting events into upcoming and completed ones

use serde::{Deserialize, Serialize};
use time::OffsetDateTime;

use crate::model::EventRecord;

#[cfg(test)]
mod test;

/// Events split at a single instant.
///
/// `upcoming` holds everything at or after that instant, soonest first. `completed` holds
/// everything strictly before it, most recent first.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct EventBoard {
    pub upcoming: Vec<EventRecord>,
    pub completed: Vec<EventRecord>,
}
impl EventBoard {
    pub fn partition(events: Vec<EventRecord>, now: OffsetDateTime) -> Self {
        let (mut upcoming, mut completed): (Vec<_>, Vec<_>) =
            events.into_iter().partition(|e| e.event_date >= now);
        // stable: equal dates keep their order_index order
        upcoming.sort_by(|a, b| a.event_date.cmp(&b.event_date));
        completed.sort_by(|a, b| b.event_date.cmp(&a.event_date));
        Self {
            upcoming,
            completed,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.upcoming.is_empty() && self.completed.is_empty()
    }

    pub fn len(&self) -> usize {
        self.upcoming.len() + self.completed.len()
    }

    /// Look up an event on either side, for the detail overlay
    pub fn find(&self, id: i64) -> Option<&EventRecord> {
        self.upcoming
            .iter()
            .chain(self.completed.iter())
            .find(|e| e.id == id)
    }
}
