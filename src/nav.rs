// src/nav.rs
//! Which screen is active. A topic is only reachable through its sector, so
//! "topic without sector" cannot be expressed.

use crate::model::Topic;

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum Navigation {
    #[default]
    Overview,
    SectorDetail {
        sector: String,
    },
    TopicDetail {
        sector: String,
        topic: Topic,
    },
}

impl Navigation {
    /// From any screen; drops a selected topic.
    pub fn select_sector(&mut self, name: impl Into<String>) {
        *self = Navigation::SectorDetail {
            sector: name.into(),
        };
    }

    /// Opens the topic modal. Only meaningful from a sector detail screen;
    /// elsewhere it is a no-op and returns false.
    pub fn select_topic(&mut self, topic: Topic) -> bool {
        match self {
            Navigation::SectorDetail { sector } => {
                let sector = std::mem::take(sector);
                *self = Navigation::TopicDetail { sector, topic };
                true
            }
            _ => false,
        }
    }

    pub fn close_topic(&mut self) {
        if let Navigation::TopicDetail { sector, .. } = self {
            let sector = std::mem::take(sector);
            *self = Navigation::SectorDetail { sector };
        }
    }

    pub fn back_to_overview(&mut self) {
        *self = Navigation::Overview;
    }

    pub fn sector(&self) -> Option<&str> {
        match self {
            Navigation::Overview => None,
            Navigation::SectorDetail { sector } | Navigation::TopicDetail { sector, .. } => {
                Some(sector)
            }
        }
    }

    pub fn topic(&self) -> Option<&Topic> {
        match self {
            Navigation::TopicDetail { topic, .. } => Some(topic),
            _ => None,
        }
    }
}
