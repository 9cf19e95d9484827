//! Tech event value type.
//!
//! An event is identified by its `name` within a catalog. `organizer`, `time`
//! and `url` are optional when posting and default to [`NOT_PROVIDED`].

use std::fmt;

use serde::{Deserialize, Serialize};

/// Placeholder for fields the organizer left empty.
pub const NOT_PROVIDED: &str = "Not Provided";

/// A posted tech event
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Event {
    name: String,
    organizer: String,
    day: u32,
    time: String,
    url: String,
}

impl Event {
    /// Create an event with only a name and a day; other fields are defaulted.
    pub fn new(name: impl Into<String>, day: u32) -> Self {
        Event {
            name: name.into(),
            organizer: NOT_PROVIDED.to_string(),
            day,
            time: NOT_PROVIDED.to_string(),
            url: NOT_PROVIDED.to_string(),
        }
    }

    pub fn with_organizer(mut self, organizer: impl Into<String>) -> Self {
        self.organizer = organizer.into();
        self
    }

    pub fn with_time(mut self, time: impl Into<String>) -> Self {
        self.time = time.into();
        self
    }

    pub fn with_url(mut self, url: impl Into<String>) -> Self {
        self.url = url.into();
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn organizer(&self) -> &str {
        &self.organizer
    }

    pub fn day(&self) -> u32 {
        self.day
    }

    pub fn time(&self) -> &str {
        &self.time
    }

    pub fn url(&self) -> &str {
        &self.url
    }

    pub fn set_organizer(&mut self, organizer: impl Into<String>) {
        self.organizer = organizer.into();
    }

    pub fn set_time(&mut self, time: impl Into<String>) {
        self.time = time.into();
    }

    pub fn set_url(&mut self, url: impl Into<String>) {
        self.url = url.into();
    }

    /// Exact, case-sensitive name match.
    pub fn is_named(&self, name: &str) -> bool {
        self.name == name
    }

    /// Whether the event falls on a day in `min..=max`.
    pub fn is_in_range(&self, min: u32, max: u32) -> bool {
        self.day >= min && self.day <= max
    }
}

impl fmt::Display for Event {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "[{} : Day {}]", self.name, self.day)
    }
}
