use anyhow::Result;
use owo_colors::OwoColorize;

use crate::render::{Render, pluralize};
use crate::session::Session;

pub fn run(session: &mut Session, name: &str) -> Result<()> {
    let existed = session.hub.find_user(name).is_some();
    let user = session.hub.register_or_find_user(name, &mut session.log);

    if existed {
        let count = user.events().len();
        println!(
            "Welcome back, {} {}",
            user.render(),
            format!("{} {} in calendar", count, pluralize("event", count)).dimmed()
        );
    } else {
        println!("{} {}", "Created".green(), user.render());
    }

    Ok(())
}
