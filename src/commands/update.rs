use anyhow::Result;
use owo_colors::OwoColorize;
use techhub_core::EventUpdate;

use crate::render::render_details;
use crate::session::Session;

pub fn run(
    session: &mut Session,
    name: &str,
    organizer: Option<String>,
    time: Option<String>,
    url: Option<String>,
) -> Result<()> {
    let update = EventUpdate {
        organizer,
        time,
        url,
    };
    if update.is_empty() {
        anyhow::bail!("Nothing to update. Pass --organizer, --time or --url.");
    }

    let event = session.hub.update_event(name, update, &mut session.log)?;

    println!("{}", "Updated".yellow());
    println!("{}", render_details(event));
    Ok(())
}
