// src/store.rs
//! Application state and its single update entry point.
//!
//! `BriefStore::dispatch` is the only way state changes. It returns the side
//! effects the caller must run (currently only fetches); their results come
//! back in as `Action::FetchCompleted`.

use metrics::counter;
use std::borrow::Cow;
use tracing::{debug, info};

use crate::fetch::FetchResult;
use crate::model::{NewsDataset, Sector, Topic};
use crate::nav::Navigation;
use crate::taxonomy::MARKET_SECTORS;
use crate::view;

/// One overview card: a canonical sector name with the data to show for it.
#[derive(Debug, Clone, PartialEq)]
pub struct SectorCard<'a> {
    pub name: &'a str,
    pub sector: Cow<'a, Sector>,
}

/// Reconcile the fixed taxonomy with whatever the backend returned. Every
/// taxonomy entry yields a card, in taxonomy order; missing sectors (or no
/// dataset at all) get the fallback sector.
pub fn project<'a>(taxonomy: &[&'a str], dataset: Option<&'a NewsDataset>) -> Vec<SectorCard<'a>> {
    taxonomy
        .iter()
        .map(|&name| SectorCard {
            name,
            sector: sector_or_fallback(dataset, name),
        })
        .collect()
}

pub fn sector_or_fallback<'a>(dataset: Option<&'a NewsDataset>, name: &str) -> Cow<'a, Sector> {
    match dataset.and_then(|ds| ds.get(name)) {
        Some(sector) => Cow::Borrowed(sector),
        None => Cow::Owned(Sector::fallback()),
    }
}

/// Dataset keys the taxonomy does not know about, sorted.
pub fn unknown_sectors<'a>(taxonomy: &[&str], dataset: &'a NewsDataset) -> Vec<&'a str> {
    let mut out: Vec<&str> = dataset
        .keys()
        .map(String::as_str)
        .filter(|k| !taxonomy.contains(k))
        .collect();
    out.sort_unstable();
    out
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    /// Start a fetch unless one is already in flight. Also used for the
    /// initial load.
    Refresh,
    FetchCompleted {
        generation: u64,
        result: FetchResult,
    },
    SelectSector(String),
    SelectTopic(Topic),
    /// 0-based index into the current sector's sorted topic list.
    SelectTopicAt(usize),
    CloseTopic,
    BackToOverview,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Effect {
    Fetch { generation: u64 },
}

#[derive(Debug, Clone, Default)]
pub struct BriefStore {
    fetch: FetchResult,
    nav: Navigation,
    generation: u64,
    in_flight: Option<u64>,
}

impl BriefStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn fetch_result(&self) -> &FetchResult {
        &self.fetch
    }

    pub fn navigation(&self) -> &Navigation {
        &self.nav
    }

    /// Generation of the most recently issued request (0 before the first).
    pub fn generation(&self) -> u64 {
        self.generation
    }

    /// The refresh control is inert while a request is in flight.
    pub fn refresh_enabled(&self) -> bool {
        self.in_flight.is_none()
    }

    pub fn overview(&self) -> Vec<SectorCard<'_>> {
        project(&MARKET_SECTORS, self.fetch.dataset())
    }

    /// Selected sector name and its data (fallback if absent).
    pub fn current_sector(&self) -> Option<(&str, Cow<'_, Sector>)> {
        let name = self.nav.sector()?;
        Some((name, sector_or_fallback(self.fetch.dataset(), name)))
    }

    pub fn dispatch(&mut self, action: Action) -> Vec<Effect> {
        match action {
            Action::Refresh => self.refresh(),
            Action::FetchCompleted { generation, result } => {
                self.complete(generation, result);
                Vec::new()
            }
            Action::SelectSector(name) => {
                self.nav.select_sector(name);
                Vec::new()
            }
            Action::SelectTopic(topic) => {
                if !self.nav.select_topic(topic) {
                    debug!("topic selected outside a sector view; ignored");
                }
                Vec::new()
            }
            Action::SelectTopicAt(index) => {
                let picked = self.current_sector().and_then(|(_, sector)| {
                    view::sorted_topics(&sector)
                        .get(index)
                        .map(|t| (*t).clone())
                });
                match picked {
                    Some(topic) => {
                        self.nav.select_topic(topic);
                    }
                    None => debug!(index, "no topic at index"),
                }
                Vec::new()
            }
            Action::CloseTopic => {
                self.nav.close_topic();
                Vec::new()
            }
            Action::BackToOverview => {
                self.nav.back_to_overview();
                Vec::new()
            }
        }
    }

    fn refresh(&mut self) -> Vec<Effect> {
        if let Some(generation) = self.in_flight {
            debug!(generation, "refresh ignored; fetch already in flight");
            return Vec::new();
        }
        self.generation += 1;
        self.in_flight = Some(self.generation);
        self.fetch = FetchResult::Pending;
        info!(generation = self.generation, "digest refresh started");
        vec![Effect::Fetch {
            generation: self.generation,
        }]
    }

    fn complete(&mut self, generation: u64, result: FetchResult) {
        if self.in_flight != Some(generation) {
            crate::fetch::ensure_metrics_described();
            counter!("brief_fetch_stale_discarded_total").increment(1);
            debug!(
                generation,
                latest = self.generation,
                "stale fetch completion discarded"
            );
            return;
        }
        self.in_flight = None;

        if let Some(ds) = result.dataset() {
            let extra = unknown_sectors(&MARKET_SECTORS, ds);
            if !extra.is_empty() {
                debug!(sectors = ?extra, "sectors outside the taxonomy ignored");
            }
        }
        self.fetch = result;
    }
}
