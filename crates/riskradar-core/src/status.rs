//! Legal database status banner.
//!
//! Sample data only: there is no scraper behind these figures.

use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum SyncState {
    Active,
    Syncing,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ScraperStatus {
    pub region: &'static str,
    pub status: SyncState,
    pub last_update: &'static str,
    pub docs_count: u32,
}

pub const SYSTEM_HEALTH: &str = "System Operational";
pub const LATENCY_MS: u32 = 45;

pub const INITIAL_SCRAPER_STATUS: &[ScraperStatus] = &[
    ScraperStatus {
        region: "India",
        status: SyncState::Active,
        last_update: "10 mins ago",
        docs_count: 5240,
    },
    ScraperStatus {
        region: "Singapore",
        status: SyncState::Active,
        last_update: "2 mins ago",
        docs_count: 3120,
    },
    ScraperStatus {
        region: "Malaysia",
        status: SyncState::Active,
        last_update: "1 hour ago",
        docs_count: 2890,
    },
    ScraperStatus {
        region: "UAE",
        status: SyncState::Syncing,
        last_update: "Just now",
        docs_count: 1540,
    },
    ScraperStatus {
        region: "Hong Kong",
        status: SyncState::Active,
        last_update: "45 mins ago",
        docs_count: 2100,
    },
];

/// Total documents across all regions.
pub fn total_documents() -> u32 {
    INITIAL_SCRAPER_STATUS.iter().map(|s| s.docs_count).sum()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::region;

    #[test]
    fn one_status_row_per_region() {
        let names: Vec<&str> = region::all().map(|r| r.name).collect();
        let rows: Vec<&str> = INITIAL_SCRAPER_STATUS.iter().map(|s| s.region).collect();
        assert_eq!(names, rows);
    }

    #[test]
    fn totals() {
        assert_eq!(total_documents(), 14_890);
    }
}
