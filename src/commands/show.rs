use anyhow::Result;

use crate::render::render_details;
use crate::session::Session;

pub fn run(session: &Session, name: &str) -> Result<()> {
    let Some(event) = session.hub.find_event(name) else {
        anyhow::bail!("No event named '{}'", name);
    };

    println!("{}", render_details(event));
    Ok(())
}
