use anyhow::Result;
use owo_colors::OwoColorize;

use crate::render::render_event_list;
use crate::session::Session;

pub fn run(session: &Session, range: Option<(u32, u32)>) -> Result<()> {
    let (events, empty) = match range {
        Some((min, max)) => {
            println!("{}", format!("Events from day {min} to day {max}").bold());
            (
                session.hub.filter_by_day_range(min, max),
                "No events found in the specified range.",
            )
        }
        None => {
            println!("{}", "Posted events".bold());
            (session.hub.events().iter().collect(), "There are no events!")
        }
    };

    println!("{}", render_event_list(&events, empty));
    Ok(())
}
