//! JSON persistence for the hub.
//!
//! The data file is a single document:
//!
//! ```json
//! {
//!     "appEvents": { "listofevents": [ { "name", "organizer", "day", "time", "url" } ] },
//!     "appUsers": { "users": [ { "name", "category", "events": { "listofevents": [] } } ] }
//! }
//! ```
//!
//! Every key is required when reading. User calendars are stored as full event
//! copies, the same way they are held in memory.

use std::fs::{self, File};
use std::io::{self, Write};
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use serde_json::ser::PrettyFormatter;

use crate::error::{HubError, HubResult};
use crate::events::EventList;
use crate::hub::Hub;
use crate::user::User;
use crate::users::UserList;

const INDENT: &[u8] = b"    ";

#[derive(Deserialize)]
struct Document {
    #[serde(rename = "appEvents")]
    events: EventList,
    #[serde(rename = "appUsers")]
    users: UsersDocument,
}

#[derive(Deserialize)]
struct UsersDocument {
    users: Vec<User>,
}

pub fn encode(hub: &Hub) -> HubResult<serde_json::Value> {
    serde_json::to_value(hub).map_err(|e| HubError::Serialization(e.to_string()))
}

/// Pretty-printed document with four-space indentation.
pub fn to_string(hub: &Hub) -> HubResult<String> {
    to_pretty_string(hub)
}

fn to_pretty_string<T: Serialize>(value: &T) -> HubResult<String> {
    let mut buf = Vec::new();
    let mut serializer =
        serde_json::Serializer::with_formatter(&mut buf, PrettyFormatter::with_indent(INDENT));
    value
        .serialize(&mut serializer)
        .map_err(|e| HubError::Serialization(e.to_string()))?;

    String::from_utf8(buf).map_err(|e| HubError::Serialization(e.to_string()))
}

/// Rebuild a hub from a document. Users are added in document order; a later
/// user with an already-seen name is dropped.
pub fn decode(content: &str) -> HubResult<Hub> {
    let document: Document =
        serde_json::from_str(content).map_err(|e| HubError::MalformedDocument(e.to_string()))?;

    let mut users = UserList::new();
    for user in document.users.users {
        let name = user.name().to_string();
        if !users.add(user) {
            tracing::warn!(user = %name, "dropping duplicate user from document");
        }
    }

    Ok(Hub::from_parts(document.events, users))
}

/// Write the hub to `path`.
///
/// The document goes to a sibling temporary file first and is renamed over
/// `path` once fully written, so readers see the old file or the new one.
/// The parent directory must already exist.
pub fn write(hub: &Hub, path: &Path) -> HubResult<()> {
    let content = to_string(hub)?;
    let temp = temp_path_for(path);
    let write_failure = |source: io::Error| HubError::WriteFailure {
        path: path.to_path_buf(),
        source,
    };

    let written = File::create(&temp).and_then(|mut file| {
        file.write_all(content.as_bytes())?;
        file.sync_all()
    });
    if let Err(e) = written {
        let _ = fs::remove_file(&temp);
        return Err(write_failure(e));
    }

    if let Err(e) = fs::rename(&temp, path) {
        let _ = fs::remove_file(&temp);
        return Err(write_failure(e));
    }

    tracing::info!(
        path = %path.display(),
        events = hub.events().len(),
        users = hub.users().len(),
        "saved hub"
    );
    Ok(())
}

/// Load a hub from `path`. A missing file is [`HubError::NotFound`].
pub fn read(path: &Path) -> HubResult<Hub> {
    let content = match fs::read_to_string(path) {
        Ok(content) => content,
        Err(e) if e.kind() == io::ErrorKind::NotFound => {
            return Err(HubError::NotFound(path.display().to_string()));
        }
        Err(e) => return Err(e.into()),
    };

    let hub = decode(&content)?;
    tracing::info!(
        path = %path.display(),
        events = hub.events().len(),
        users = hub.users().len(),
        "loaded hub"
    );
    Ok(hub)
}

fn temp_path_for(path: &Path) -> PathBuf {
    let mut name = path.file_name().unwrap_or_default().to_os_string();
    name.push(".tmp");
    path.with_file_name(name)
}
