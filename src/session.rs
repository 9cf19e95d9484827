//! One CLI invocation's view of the data file.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use owo_colors::OwoColorize;
use techhub_core::{AuditLog, Hub, HubError, store};

use crate::render::pluralize;

pub struct Session {
    pub hub: Hub,
    pub log: AuditLog,
    path: PathBuf,
}

impl Session {
    /// Load the hub from `path`. A missing file starts an empty hub.
    pub fn open(path: PathBuf) -> Result<Self> {
        let hub = match store::read(&path) {
            Ok(hub) => {
                eprintln!("{}", load_notice(&path, &hub).dimmed());
                hub
            }
            Err(HubError::NotFound(_)) => {
                tracing::warn!(path = %path.display(), "data file not found, starting empty");
                eprintln!(
                    "{}",
                    format!("No data at {}, starting fresh", path.display()).dimmed()
                );
                Hub::new()
            }
            Err(e) => {
                return Err(e).with_context(|| format!("Failed to load {}", path.display()));
            }
        };

        Ok(Session {
            hub,
            log: AuditLog::new(),
            path,
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Save if anything changed, then optionally print the audit log.
    pub fn finish(self, verbose: bool) -> Result<()> {
        if !self.log.is_empty() {
            self.save()?;
        }

        if verbose && !self.log.is_empty() {
            println!();
            println!("{}", "Audit log".bold());
            print!("{}", self.log);
        }

        Ok(())
    }

    fn save(&self) -> Result<()> {
        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create {}", parent.display()))?;
        }

        store::write(&self.hub, &self.path)
            .with_context(|| format!("Failed to save {}", self.path.display()))?;

        println!("{}", format!("Saved to {}", self.path.display()).dimmed());
        Ok(())
    }
}

fn load_notice(path: &Path, hub: &Hub) -> String {
    let events = hub.events().len();
    let users = hub.users().len();
    format!(
        "Loaded {} {} and {} {} from {}",
        events,
        pluralize("event", events),
        users,
        pluralize("user", users),
        path.display()
    )
}
