//! The hub: the global event catalog plus every registered user.
//!
//! Catalog names are unique: [`Hub::post_event`] rejects a second event with
//! an existing name. User calendars hold their own copies of catalog events,
//! taken when the event was added. Removing an event from the catalog also
//! withdraws it from every calendar, so a calendar never lists an event that
//! is no longer posted.

use serde::Serialize;

use crate::audit::AuditLog;
use crate::error::{HubError, HubResult};
use crate::event::Event;
use crate::events::EventList;
use crate::user::{DEFAULT_CATEGORY, User};
use crate::users::UserList;

/// Field changes for [`Hub::update_event`]. `None` leaves a field as is.
#[derive(Debug, Clone, Default)]
pub struct EventUpdate {
    pub organizer: Option<String>,
    pub time: Option<String>,
    pub url: Option<String>,
}

impl EventUpdate {
    pub fn is_empty(&self) -> bool {
        self.organizer.is_none() && self.time.is_none() && self.url.is_none()
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Hub {
    #[serde(rename = "appEvents")]
    events: EventList,
    #[serde(rename = "appUsers")]
    users: UserList,
}

impl Hub {
    pub fn new() -> Self {
        Self::default()
    }

    pub(crate) fn from_parts(events: EventList, users: UserList) -> Self {
        Hub { events, users }
    }

    /// The global catalog.
    pub fn events(&self) -> &EventList {
        &self.events
    }

    pub fn users(&self) -> &UserList {
        &self.users
    }

    // EVENTS:

    pub fn post_event(&mut self, event: Event, log: &mut AuditLog) -> HubResult<()> {
        if self.events.contains(event.name()) {
            return Err(HubError::DuplicateEvent(event.name().to_string()));
        }

        log.record(format!(
            "Added event to general calendar: {} on Day {}",
            event.name(),
            event.day()
        ));
        self.events.add(event);
        Ok(())
    }

    pub fn find_event(&self, name: &str) -> Option<&Event> {
        let found = self.events.find_by_name(name);
        tracing::debug!(name, found = found.is_some(), "event lookup");
        found
    }

    /// Change the optional fields of a posted event.
    /// Calendar copies taken earlier keep their old values. An empty update
    /// only checks that the event exists and records nothing.
    pub fn update_event(
        &mut self,
        name: &str,
        update: EventUpdate,
        log: &mut AuditLog,
    ) -> HubResult<&Event> {
        let event = self
            .events
            .find_by_name_mut(name)
            .ok_or_else(|| HubError::NotFound(format!("event '{name}'")))?;

        if update.is_empty() {
            return Ok(&*event);
        }

        if let Some(organizer) = update.organizer {
            event.set_organizer(organizer);
        }
        if let Some(time) = update.time {
            event.set_time(time);
        }
        if let Some(url) = update.url {
            event.set_url(url);
        }

        log.record(format!("Updated event in general calendar: {name}"));
        Ok(&*event)
    }

    /// Remove an event from the catalog and from every user calendar.
    /// Returns false if the catalog had no event with this name.
    pub fn remove_event(&mut self, name: &str, log: &mut AuditLog) -> bool {
        let Some(removed) = self.events.remove_by_name(name) else {
            return false;
        };

        log.record(format!(
            "Removed event from calendar: {} from Day {}",
            removed.name(),
            removed.day()
        ));

        for user in self.users.iter_mut() {
            if user.remove_event(name) > 0 {
                log.record(format!(
                    "Removed event from user's calendar: User - {} | Event - {}",
                    user.name(),
                    name
                ));
            }
        }

        true
    }

    /// Catalog events on days `min..=max`.
    pub fn filter_by_day_range(&self, min: u32, max: u32) -> Vec<&Event> {
        self.events.in_day_range(min, max)
    }

    // USERS:

    pub fn find_user(&self, name: &str) -> Option<&User> {
        self.users.find_by_name(name)
    }

    /// Create a user. Fails if the name is taken.
    pub fn register_user(
        &mut self,
        name: &str,
        category: &str,
        log: &mut AuditLog,
    ) -> HubResult<&User> {
        if self.users.contains(name) {
            return Err(HubError::UserExists(name.to_string()));
        }

        let (user, _) = self
            .users
            .find_or_insert_with(name, || User::new(name, category));
        log.record(format!("Added user: {name} on the list of user!"));
        Ok(&*user)
    }

    /// Login lookup: returns the existing user, or creates a
    /// [`DEFAULT_CATEGORY`] user on first sight of the name.
    pub fn register_or_find_user(&mut self, name: &str, log: &mut AuditLog) -> &User {
        let (user, inserted) = self
            .users
            .find_or_insert_with(name, || User::new(name, DEFAULT_CATEGORY));
        if inserted {
            log.record(format!("Added user: {name} on the list of user!"));
        }
        &*user
    }

    /// Copy a catalog event into a user's calendar.
    pub fn add_event_to_user(
        &mut self,
        event_name: &str,
        user_name: &str,
        log: &mut AuditLog,
    ) -> HubResult<()> {
        let event = self
            .events
            .find_by_name(event_name)
            .cloned()
            .ok_or_else(|| HubError::NotFound(format!("event '{event_name}'")))?;

        let user = self
            .users
            .find_by_name_mut(user_name)
            .ok_or_else(|| HubError::NotFound(format!("user '{user_name}'")))?;

        if user.has_event(event_name) {
            return Err(HubError::AlreadyInCalendar {
                user: user_name.to_string(),
                event: event_name.to_string(),
            });
        }

        user.add_event(event);
        log.record(format!(
            "Added event to user's calendar: User - {user_name} | Event - {event_name}"
        ));
        Ok(())
    }

    /// A user's calendar, optionally limited to days `min..=max`.
    pub fn user_calendar(&self, name: &str, range: Option<(u32, u32)>) -> HubResult<Vec<&Event>> {
        let user = self
            .find_user(name)
            .ok_or_else(|| HubError::NotFound(format!("user '{name}'")))?;

        Ok(match range {
            Some((min, max)) => user.events().in_day_range(min, max),
            None => user.events().iter().collect(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn hackathon() -> Event {
        Event::new("Hackathon", 3)
            .with_organizer("ACM")
            .with_time("10:00")
            .with_url("http://x")
    }

    #[test]
    fn post_then_find() {
        let mut hub = Hub::new();
        let mut log = AuditLog::new();
        assert!(hub.events().is_empty());

        hub.post_event(hackathon(), &mut log).unwrap();

        assert_eq!(hub.events().len(), 1);
        assert_eq!(hub.find_event("Hackathon").map(Event::day), Some(3));
        assert_eq!(hub.find_event("Hackathon"), Some(&hackathon()));
        assert_eq!(
            log.iter().next().unwrap().description,
            "Added event to general calendar: Hackathon on Day 3"
        );
    }

    #[test]
    fn post_rejects_duplicate_name() {
        let mut hub = Hub::new();
        let mut log = AuditLog::new();
        hub.post_event(hackathon(), &mut log).unwrap();

        let err = hub
            .post_event(Event::new("Hackathon", 40), &mut log)
            .unwrap_err();
        assert!(matches!(err, HubError::DuplicateEvent(name) if name == "Hackathon"));
        assert_eq!(hub.events().len(), 1);
        assert_eq!(hub.find_event("Hackathon").map(Event::day), Some(3));
        assert_eq!(log.len(), 1);
    }

    #[test]
    fn post_accepts_any_day() {
        let mut hub = Hub::new();
        let mut log = AuditLog::new();

        hub.post_event(Event::new("Day zero", 0), &mut log).unwrap();
        hub.post_event(Event::new("Next year", 400), &mut log).unwrap();
        hub.post_event(Event::new("Far off", u32::MAX), &mut log).unwrap();

        assert_eq!(hub.events().len(), 3);
        let open_ended: Vec<_> = hub
            .filter_by_day_range(5, u32::MAX)
            .into_iter()
            .map(Event::name)
            .collect();
        assert_eq!(open_ended, vec!["Next year", "Far off"]);
    }

    #[test]
    fn update_changes_catalog_only() {
        let mut hub = Hub::new();
        let mut log = AuditLog::new();
        hub.post_event(hackathon(), &mut log).unwrap();
        hub.register_user("Alice", "Student", &mut log).unwrap();
        hub.add_event_to_user("Hackathon", "Alice", &mut log).unwrap();

        let update = EventUpdate {
            time: Some("14:00".into()),
            ..Default::default()
        };
        let event = hub.update_event("Hackathon", update, &mut log).unwrap();
        assert_eq!(event.time(), "14:00");
        assert_eq!(event.organizer(), "ACM");

        let copy = hub.user_calendar("Alice", None).unwrap();
        assert_eq!(copy[0].time(), "10:00");
    }

    #[test]
    fn update_missing_event_is_not_found() {
        let mut hub = Hub::new();
        let mut log = AuditLog::new();
        let err = hub
            .update_event("Nope", EventUpdate::default(), &mut log)
            .unwrap_err();
        assert!(matches!(err, HubError::NotFound(_)));
        assert!(log.is_empty());
    }

    #[test]
    fn empty_update_records_nothing() {
        let mut hub = Hub::new();
        let mut log = AuditLog::new();
        hub.post_event(hackathon(), &mut log).unwrap();
        let before = log.len();

        let event = hub
            .update_event("Hackathon", EventUpdate::default(), &mut log)
            .unwrap();
        assert_eq!(event, &hackathon());
        assert_eq!(log.len(), before);
    }

    #[test]
    fn remove_reports_once() {
        let mut hub = Hub::new();
        let mut log = AuditLog::new();
        hub.post_event(hackathon(), &mut log).unwrap();
        hub.post_event(Event::new("Meetup", 7), &mut log).unwrap();

        assert!(hub.remove_event("Hackathon", &mut log));
        assert_eq!(hub.events().len(), 1);
        assert!(hub.find_event("Hackathon").is_none());
        assert!(!hub.remove_event("Hackathon", &mut log));
        assert!(!hub.remove_event("Never posted", &mut log));
        assert_eq!(hub.events().len(), 1);
    }

    #[test]
    fn remove_cascades_to_user_calendars() {
        let mut hub = Hub::new();
        let mut log = AuditLog::new();
        hub.post_event(hackathon(), &mut log).unwrap();
        hub.post_event(Event::new("Meetup", 7), &mut log).unwrap();
        for name in ["Alice", "Bob"] {
            hub.register_user(name, "Student", &mut log).unwrap();
            hub.add_event_to_user("Hackathon", name, &mut log).unwrap();
        }
        hub.add_event_to_user("Meetup", "Bob", &mut log).unwrap();

        assert!(hub.remove_event("Hackathon", &mut log));

        assert!(hub.user_calendar("Alice", None).unwrap().is_empty());
        let bob: Vec<_> = hub
            .user_calendar("Bob", None)
            .unwrap()
            .into_iter()
            .map(Event::name)
            .collect();
        assert_eq!(bob, vec!["Meetup"]);
    }

    #[test]
    fn day_range_scenario() {
        let mut hub = Hub::new();
        let mut log = AuditLog::new();
        hub.post_event(Event::new("Early", 1), &mut log).unwrap();
        hub.post_event(Event::new("Later", 10), &mut log).unwrap();

        let found: Vec<_> = hub
            .filter_by_day_range(5, 15)
            .into_iter()
            .map(Event::name)
            .collect();
        assert_eq!(found, vec!["Later"]);
        assert_eq!(hub.filter_by_day_range(1, 1).len(), 1);
        assert!(Hub::new().filter_by_day_range(0, u32::MAX).is_empty());
    }

    #[test]
    fn find_user_does_not_create() {
        let hub = Hub::new();
        assert!(hub.find_user("Alice").is_none());
        assert!(hub.users().is_empty());
    }

    #[test]
    fn register_twice_fails_and_keeps_first() {
        let mut hub = Hub::new();
        let mut log = AuditLog::new();
        hub.register_user("Alice", "Student", &mut log).unwrap();

        let err = hub.register_user("Alice", "Organizer", &mut log).unwrap_err();
        assert!(matches!(err, HubError::UserExists(name) if name == "Alice"));
        assert_eq!(hub.users().len(), 1);
        assert_eq!(hub.find_user("Alice").map(User::category), Some("Student"));
    }

    // Login keeps the legacy behavior: an unknown name creates a Student.
    #[test]
    fn register_or_find_creates_student_on_first_call_only() {
        let mut hub = Hub::new();
        let mut log = AuditLog::new();

        let user = hub.register_or_find_user("Alice", &mut log);
        assert_eq!(user.category(), DEFAULT_CATEGORY);
        hub.register_or_find_user("Alice", &mut log);

        assert_eq!(hub.users().len(), 1);
        assert_eq!(log.len(), 1);
    }

    #[test]
    fn register_or_find_returns_existing_category() {
        let mut hub = Hub::new();
        let mut log = AuditLog::new();
        hub.register_user("Olga", "Organizer", &mut log).unwrap();

        assert_eq!(hub.register_or_find_user("Olga", &mut log).category(), "Organizer");
    }

    #[test]
    fn add_event_to_user_copies_catalog_event() {
        let mut hub = Hub::new();
        let mut log = AuditLog::new();
        hub.post_event(hackathon(), &mut log).unwrap();
        hub.register_user("Alice", "Student", &mut log).unwrap();

        hub.add_event_to_user("Hackathon", "Alice", &mut log).unwrap();

        let calendar = hub.user_calendar("Alice", None).unwrap();
        assert_eq!(calendar, vec![&hackathon()]);
        assert_eq!(
            log.iter().last().unwrap().description,
            "Added event to user's calendar: User - Alice | Event - Hackathon"
        );
    }

    #[test]
    fn add_event_to_user_checks_both_sides() {
        let mut hub = Hub::new();
        let mut log = AuditLog::new();
        hub.post_event(hackathon(), &mut log).unwrap();
        hub.register_user("Alice", "Student", &mut log).unwrap();

        assert!(matches!(
            hub.add_event_to_user("Nope", "Alice", &mut log),
            Err(HubError::NotFound(_))
        ));
        assert!(matches!(
            hub.add_event_to_user("Hackathon", "Nobody", &mut log),
            Err(HubError::NotFound(_))
        ));

        hub.add_event_to_user("Hackathon", "Alice", &mut log).unwrap();
        assert!(matches!(
            hub.add_event_to_user("Hackathon", "Alice", &mut log),
            Err(HubError::AlreadyInCalendar { .. })
        ));
        assert_eq!(hub.user_calendar("Alice", None).unwrap().len(), 1);
    }

    #[test]
    fn user_calendar_filters_by_day() {
        let mut hub = Hub::new();
        let mut log = AuditLog::new();
        hub.post_event(Event::new("Early", 1), &mut log).unwrap();
        hub.post_event(Event::new("Later", 10), &mut log).unwrap();
        hub.register_user("Alice", "Student", &mut log).unwrap();
        hub.add_event_to_user("Early", "Alice", &mut log).unwrap();
        hub.add_event_to_user("Later", "Alice", &mut log).unwrap();

        let in_range = hub.user_calendar("Alice", Some((5, 15))).unwrap();
        assert_eq!(in_range.len(), 1);
        assert_eq!(in_range[0].name(), "Later");
        assert!(matches!(
            hub.user_calendar("Nobody", None),
            Err(HubError::NotFound(_))
        ));
    }
}
