use anyhow::{Context, Result};
use owo_colors::OwoColorize;
use techhub_core::HubConfig;

use crate::render::pluralize;
use crate::session::Session;

pub fn run(config: &HubConfig, session: &Session, default_category: Option<String>) -> Result<()> {
    let config_path = HubConfig::config_path()?;

    if let Some(category) = default_category {
        let updated = HubConfig {
            default_category: category,
            ..config.clone()
        };
        updated
            .save_to(&config_path)
            .with_context(|| format!("Failed to update {}", config_path.display()))?;

        println!(
            "{} {}",
            "Default category set to".green(),
            updated.default_category
        );
        return Ok(());
    }

    let events = session.hub.events().len();
    let users = session.hub.users().len();

    println!("{}", "Paths".bold());
    println!("  Config:     {}", config_path.display());
    println!("  Data file:  {}", session.path().display());
    println!();
    println!("{}", "Defaults".bold());
    println!("  Category:   {}", config.default_category);
    println!();
    println!("{}", "Data".bold());
    println!("  {} {}, {} {}", events, pluralize("event", events), users, pluralize("user", users));

    Ok(())
}
