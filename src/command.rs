// src/command.rs
//! Terminal input -> store actions.

use crate::nav::Navigation;
use crate::store::Action;
use crate::taxonomy;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    Quit,
    Refresh,
    TriggerProcessing,
    Back,
    Close,
    /// 1-based number as printed on screen.
    Open(usize),
}

pub fn parse_command(line: &str) -> Option<Command> {
    let t = line.trim();
    if let Ok(n) = t.parse::<usize>() {
        return Some(Command::Open(n));
    }
    match t.to_ascii_lowercase().as_str() {
        "q" | "quit" | "exit" => Some(Command::Quit),
        "r" | "refresh" => Some(Command::Refresh),
        "t" | "trigger" => Some(Command::TriggerProcessing),
        "b" | "back" => Some(Command::Back),
        "c" | "close" | "x" => Some(Command::Close),
        _ => None,
    }
}

/// Store action for a command on the given screen. Quit and trigger are
/// handled by the caller and map to nothing here.
pub fn to_action(cmd: Command, nav: &Navigation) -> Option<Action> {
    match cmd {
        Command::Refresh => Some(Action::Refresh),
        Command::Back => Some(Action::BackToOverview),
        Command::Close => match nav {
            Navigation::TopicDetail { .. } => Some(Action::CloseTopic),
            _ => None,
        },
        Command::Open(n) => match nav {
            Navigation::Overview => {
                taxonomy::sector_at(n).map(|s| Action::SelectSector(s.to_string()))
            }
            Navigation::SectorDetail { .. } => n.checked_sub(1).map(Action::SelectTopicAt),
            Navigation::TopicDetail { .. } => None,
        },
        Command::Quit | Command::TriggerProcessing => None,
    }
}
