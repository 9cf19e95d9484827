//! Ordered event collection.

use serde::{Deserialize, Serialize};

use crate::event::Event;

/// Events in insertion order.
///
/// Serializes as `{"listofevents": [...]}`, the shape shared by the catalog
/// and every user calendar in the data file.
///
/// Names are not checked for uniqueness here; lookups and removals act on the
/// first match. [`crate::hub::Hub`] is what keeps catalog names unique.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct EventList {
    #[serde(rename = "listofevents")]
    events: Vec<Event>,
}

impl EventList {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add(&mut self, event: Event) {
        self.events.push(event);
    }

    pub fn find_by_name(&self, name: &str) -> Option<&Event> {
        self.events.iter().find(|e| e.is_named(name))
    }

    pub fn find_by_name_mut(&mut self, name: &str) -> Option<&mut Event> {
        self.events.iter_mut().find(|e| e.is_named(name))
    }

    pub fn contains(&self, name: &str) -> bool {
        self.find_by_name(name).is_some()
    }

    /// Remove the first event with this name, returning it if there was one.
    pub fn remove_by_name(&mut self, name: &str) -> Option<Event> {
        let index = self.events.iter().position(|e| e.is_named(name))?;
        Some(self.events.remove(index))
    }

    /// Events on days `min..=max`, in insertion order. Empty when `min > max`.
    pub fn in_day_range(&self, min: u32, max: u32) -> Vec<&Event> {
        self.events.iter().filter(|e| e.is_in_range(min, max)).collect()
    }

    pub fn len(&self) -> usize {
        self.events.len()
    }

    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Event> {
        self.events.iter()
    }
}

impl<'a> IntoIterator for &'a EventList {
    type Item = &'a Event;
    type IntoIter = std::slice::Iter<'a, Event>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl FromIterator<Event> for EventList {
    fn from_iter<I: IntoIterator<Item = Event>>(iter: I) -> Self {
        EventList {
            events: iter.into_iter().collect(),
        }
    }
}
