use anyhow::Result;
use owo_colors::OwoColorize;

use crate::render::Render;
use crate::session::Session;

pub fn run(session: &mut Session, name: &str, category: &str) -> Result<()> {
    let user = session.hub.register_user(name, category, &mut session.log)?;

    println!("{} {}", "Registered".green(), user.render());
    Ok(())
}
