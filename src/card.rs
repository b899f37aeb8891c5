//! Terminal rendering of reputation cards.
//!
//! Thin presentation layer over [`ReputationRecord`]: the theme picks the
//! card color, absence renders the no-score fallback. Pure string building;
//! printing is left to the caller.

use crate::reputation::{ReputationRecord, Theme};

const RESET: &str = "\x1b[0m";

fn theme_color(theme: Theme) -> &'static str {
    match theme {
        Theme::Gold => "\x1b[33m",
        Theme::Silver => "\x1b[37m",
        Theme::Bronze => "\x1b[31m",
    }
}

/// Render the card for a record, or the no-score fallback for `None`.
pub fn render(username: &str, record: Option<&ReputationRecord>, color: bool) -> String {
    match record {
        Some(record) => render_card(username, record, color),
        None => format!("@{} (No Score)", username),
    }
}

fn render_card(username: &str, record: &ReputationRecord, color: bool) -> String {
    let mut card = format!("@{}  {}\n{} Builder", username, record.score, record.tier);

    if !record.badges.is_empty() {
        let badges: Vec<String> = record
            .badges
            .iter()
            .map(|b| format!("[{}]", b))
            .collect();
        card.push('\n');
        card.push_str(&badges.join(" "));
    }

    if color {
        format!("{}{}{}", theme_color(record.theme), card, RESET)
    } else {
        card
    }
}
