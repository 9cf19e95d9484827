//! Colored terminal rendering for techhub types.

use owo_colors::OwoColorize;
use techhub_core::{Event, NOT_PROVIDED, User};

/// Extension trait for TUI rendering with colors.
pub trait Render {
    fn render(&self) -> String;
}

impl Render for Event {
    fn render(&self) -> String {
        let day = format!("Day {}", self.day());
        format!("{} {}", self.name().bold(), day.dimmed())
    }
}

impl Render for User {
    fn render(&self) -> String {
        let category = format!("({})", self.category());
        format!("{} {}", self.name().bold(), category.dimmed())
    }
}

/// Every field of an event, one per line.
pub fn render_details(event: &Event) -> String {
    let mut lines = vec![event.render()];
    lines.push(render_field("organizer", event.organizer()));
    lines.push(render_field("time", event.time()));
    lines.push(render_field("url", event.url()));
    lines.join("\n")
}

fn render_field(label: &str, value: &str) -> String {
    let value = if value == NOT_PROVIDED {
        value.dimmed().to_string()
    } else {
        value.to_string()
    };
    format!("   {}: {}", label.dimmed(), value)
}

/// One indented line per event, or `empty` when there are none.
pub fn render_event_list(events: &[&Event], empty: &str) -> String {
    if events.is_empty() {
        return format!("   {}", empty.dimmed());
    }

    events
        .iter()
        .map(|e| format!("   {}", e.render()))
        .collect::<Vec<_>>()
        .join("\n")
}

/// Simple pluralization helper
pub fn pluralize(word: &str, count: usize) -> String {
    if count == 1 {
        word.to_string()
    } else {
        format!("{word}s")
    }
}
