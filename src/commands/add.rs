use anyhow::Result;
use owo_colors::OwoColorize;

use crate::session::Session;

pub fn run(session: &mut Session, user: &str, event: &str) -> Result<()> {
    session.hub.add_event_to_user(event, user, &mut session.log)?;

    println!("{} {} to {}'s calendar", "Added".green(), event.bold(), user);
    Ok(())
}
