// src/taxonomy.rs
//! Canonical sector list shared by the summarization backend and this client.
//! The client renders sectors in exactly this order, whether or not the
//! backend returned data for them.

pub const MARKET_SECTORS: [&str; 10] = [
    "Technology & Software",
    "Finance & Economy",
    "Healthcare & Biotech",
    "Energy & Materials",
    "Defense & Geopolitics",
    "Cryptocurrency & Blockchain",
    "Artificial Intelligence & Robotics",
    "Retail & Consumer Goods",
    "Automotive & Mobility",
    "Real Estate & Infrastructure",
];

pub fn is_canonical(name: &str) -> bool {
    MARKET_SECTORS.contains(&name)
}

/// 1-based lookup, as shown on the overview cards.
pub fn sector_at(position: usize) -> Option<&'static str> {
    position
        .checked_sub(1)
        .and_then(|i| MARKET_SECTORS.get(i))
        .copied()
}
