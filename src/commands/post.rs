use anyhow::Result;
use owo_colors::OwoColorize;
use techhub_core::Event;

use crate::render::Render;
use crate::session::Session;

pub fn run(
    session: &mut Session,
    name: String,
    day: u32,
    organizer: Option<String>,
    time: Option<String>,
    url: Option<String>,
) -> Result<()> {
    let mut event = Event::new(name, day);
    if let Some(organizer) = organizer {
        event.set_organizer(organizer);
    }
    if let Some(time) = time {
        event.set_time(time);
    }
    if let Some(url) = url {
        event.set_url(url);
    }

    let rendered = event.render();
    session.hub.post_event(event, &mut session.log)?;

    println!("{} {}", "Posted".green(), rendered);
    Ok(())
}
