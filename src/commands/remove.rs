use anyhow::Result;
use owo_colors::OwoColorize;

use crate::session::Session;

pub fn run(session: &mut Session, name: &str) -> Result<()> {
    if !session.hub.remove_event(name, &mut session.log) {
        anyhow::bail!("No event named '{}'", name);
    }

    println!("{} {}", "Removed".red(), name.bold());
    Ok(())
}
