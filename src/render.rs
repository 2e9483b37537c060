// src/render.rs
//! Plain-text screens for the terminal client.

use chrono::Datelike;
use std::fmt::Write as _;

use crate::fetch::FetchResult;
use crate::model::{Sector, Topic};
use crate::nav::Navigation;
use crate::store::{BriefStore, SectorCard};
use crate::view;

pub const APP_TITLE: &str = "The Lean Brief";
const RULE: &str = "------------------------------------------------------------";

/// Full screen for the current state.
pub fn render(store: &BriefStore, endpoint: &str) -> String {
    let mut out = header(store.refresh_enabled());
    match store.fetch_result() {
        FetchResult::Pending => out.push_str(&loading_screen()),
        FetchResult::Failure(msg) => out.push_str(&error_screen(msg, endpoint)),
        FetchResult::Success(_) => {
            match store.current_sector() {
                None => out.push_str(&overview(&store.overview())),
                Some((name, sector)) => out.push_str(&sector_detail(name, &sector)),
            }
            if let Navigation::TopicDetail { topic, .. } = store.navigation() {
                out.push_str(&topic_modal(topic));
            }
        }
    }
    out.push_str(&hints(store.navigation()));
    out.push_str(&footer(chrono::Utc::now().year()));
    out
}

pub fn header(refresh_enabled: bool) -> String {
    let control = if refresh_enabled {
        "[r] Refresh"
    } else {
        "Refreshing..."
    };
    format!("{APP_TITLE}    {control}\n{RULE}\n")
}

pub fn loading_screen() -> String {
    "\nGathering the brief...\nThis may take a moment as we process the latest news.\n\n".to_string()
}

/// The failure message is shown verbatim.
pub fn error_screen(message: &str, endpoint: &str) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "\nOops! Something Went Wrong\n");
    let _ = writeln!(out, "Failed to load market summaries:");
    let _ = writeln!(out, "  {message}\n");
    let _ = writeln!(
        out,
        "Please ensure your backend server is running on {endpoint}\nand check its console for detailed error messages (e.g., API key issues, rate limits).\n"
    );
    out
}

pub fn overview(cards: &[SectorCard<'_>]) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "\nYour Macro Market Snapshot\n");
    for (i, card) in cards.iter().enumerate() {
        let _ = writeln!(out, "[{}] {}", i + 1, card.name);
        let _ = writeln!(out, "    {}", card.sector.landing_summary);
        let _ = writeln!(out, "    Dive Deeper -> {}\n", i + 1);
    }
    out
}

pub fn sector_detail(name: &str, sector: &Sector) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "\n<- [b] Back to All Sectors\n");
    let _ = writeln!(out, "{name} Brief\n");
    let topics = view::sorted_topics(sector);
    if topics.is_empty() {
        let _ = writeln!(
            out,
            "No detailed topics available for this sector recently.\n"
        );
        return out;
    }
    for (i, t) in topics.iter().enumerate() {
        let _ = writeln!(out, "[{}] {}", i + 1, t.name);
        let _ = writeln!(out, "    {}", t.one_sentence_description);
        let _ = writeln!(out, "    Importance: {}/10    Read More -> {}\n", t.importance, i + 1);
    }
    out
}

pub fn topic_modal(topic: &Topic) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "{RULE}");
    let _ = writeln!(out, "{}    [c] close\n", topic.name);
    for p in view::paragraphs(topic) {
        let _ = writeln!(out, "{p}\n");
    }
    let _ = writeln!(out, "Original Sources:");
    for (name, url) in view::citations(topic) {
        let _ = writeln!(out, "  * {name} - {url}");
    }
    let _ = writeln!(out, "\nImportance Score: {}/10", topic.importance);
    let _ = writeln!(out, "{RULE}");
    out
}

fn hints(nav: &Navigation) -> String {
    let local = match nav {
        Navigation::Overview => "1-10 open sector",
        Navigation::SectorDetail { .. } => "<n> open topic  [b] back",
        Navigation::TopicDetail { .. } => "[c] close  [b] back",
    };
    format!("{local}  [r] refresh  [t] trigger processing  [q] quit\n")
}

pub fn footer(year: i32) -> String {
    format!("{RULE}\n© {year} {APP_TITLE}. All rights reserved.\n")
}
