//! Core types for the techhub ecosystem.
//!
//! This crate provides everything the `techhub` CLI builds on:
//! - `Event`, `EventList`, `User`, `UserList` value types and collections
//! - `Hub`, the catalog of posted events plus registered users
//! - `store` for reading and writing the JSON data file
//! - `AuditLog` for the per-session record of changes

pub mod audit;
pub mod config;
pub mod error;
pub mod event;
pub mod events;
pub mod hub;
pub mod store;
pub mod user;
pub mod users;

pub use crate::audit::{AuditEntry, AuditLog};
pub use crate::config::HubConfig;
pub use crate::error::{HubError, HubResult};
pub use crate::event::{Event, NOT_PROVIDED};
pub use crate::events::EventList;
pub use crate::hub::{EventUpdate, Hub};
pub use crate::user::{DEFAULT_CATEGORY, User};
pub use crate::users::UserList;
