use anyhow::Result;

use crate::render::{Render, render_event_list};
use crate::session::Session;

pub fn run(session: &Session, user: &str, range: Option<(u32, u32)>) -> Result<()> {
    let Some(found) = session.hub.find_user(user) else {
        anyhow::bail!("No user named '{}'. Log in first with `techhub login {}`", user, user);
    };
    let events = session.hub.user_calendar(user, range)?;

    println!("{}", found.render());
    let empty = match range {
        Some(_) => "No events found in the specified range.",
        None => "Calendar is empty",
    };
    println!("{}", render_event_list(&events, empty));
    Ok(())
}
