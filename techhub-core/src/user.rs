//! Users and their personal calendars.

use serde::{Deserialize, Serialize};

use crate::event::Event;
use crate::events::EventList;

/// Category given to users created on first login.
pub const DEFAULT_CATEGORY: &str = "Student";

/// A hub user. `category` is free form ("Student", "Staff", "Organizer").
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    name: String,
    category: String,
    events: EventList,
}

impl User {
    pub fn new(name: impl Into<String>, category: impl Into<String>) -> Self {
        User {
            name: name.into(),
            category: category.into(),
            events: EventList::new(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn category(&self) -> &str {
        &self.category
    }

    /// The user's personal calendar.
    pub fn events(&self) -> &EventList {
        &self.events
    }

    pub fn is_named(&self, name: &str) -> bool {
        self.name == name
    }

    /// Append a copy of an event to the calendar. No duplicate check.
    pub fn add_event(&mut self, event: Event) {
        self.events.add(event);
    }

    pub fn has_event(&self, name: &str) -> bool {
        self.events.contains(name)
    }

    /// Withdraw every calendar entry with this name. Returns how many went.
    pub fn remove_event(&mut self, name: &str) -> usize {
        let mut removed = 0;
        while self.events.remove_by_name(name).is_some() {
            removed += 1;
        }
        removed
    }
}
