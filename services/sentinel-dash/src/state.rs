// services/sentinel-dash/src/state.rs
//
// Sentinel Console - Reactive State Management
//

use chrono::{DateTime, Utc};
use leptos::*;

use opskit::data::{seed_feeds, seed_threats};
use opskit::filter::{filter_by_region, filter_threats, RegionSelection, ThreatQuery, ALL_FEEDS, ALL_THREATS};
use opskit::types::{Feed, Severity, Threat};

/// Wall clock from the JS Date, as chrono.
pub fn now_utc() -> DateTime<Utc> {
    DateTime::from_timestamp_millis(js_sys::Date::now() as i64).unwrap_or(DateTime::UNIX_EPOCH)
}

/// Surveillance grid state, rebuilt fresh each time the panel mounts.
/// All fields are RwSignal which is Copy, so FeedBoard is Copy.
#[derive(Clone, Copy)]
pub struct FeedBoard {
    pub feeds: RwSignal<Vec<Feed>>,
    pub region: RwSignal<String>,
}

impl FeedBoard {
    pub fn new(now: DateTime<Utc>) -> Self {
        Self {
            feeds: create_rw_signal(seed_feeds(now)),
            region: create_rw_signal(ALL_FEEDS.to_string()),
        }
    }

    /// Feeds visible under the current region selection, board order.
    pub fn visible(&self) -> Vec<Feed> {
        let selection = RegionSelection::from_label(&self.region.get());
        let feeds = self.feeds.get();
        filter_by_region(&feeds, &selection)
            .into_iter()
            .cloned()
            .collect()
    }

    /// Trip the manual alarm on one feed.
    pub fn manual_alert(&self, name: &str) {
        let now = now_utc();
        self.feeds.update(|feeds| {
            if let Err(err) = opskit::sim::manual_alert(feeds, name, now) {
                log::warn!("Manual alert dropped: {}", err);
            }
        });
    }
}

/// Threat desk state, shared by the Overview/Threats/Analytics tabs.
/// The raw select values keep the sentinel spelling "all".
#[derive(Clone, Copy)]
pub struct ThreatDesk {
    pub threats: RwSignal<Vec<Threat>>,
    pub platform: RwSignal<String>,
    pub severity: RwSignal<String>,
    pub search: RwSignal<String>,
}

impl ThreatDesk {
    pub fn new() -> Self {
        Self {
            threats: create_rw_signal(seed_threats()),
            platform: create_rw_signal(ALL_THREATS.to_string()),
            severity: create_rw_signal(ALL_THREATS.to_string()),
            search: create_rw_signal(String::new()),
        }
    }

    pub fn query(&self) -> ThreatQuery {
        ThreatQuery::from_selections(
            &self.platform.get(),
            &self.severity.get(),
            &self.search.get(),
        )
    }

    /// Threats matching the current query, feed order.
    pub fn visible(&self) -> Vec<Threat> {
        let query = self.query();
        let threats = self.threats.get();
        filter_threats(&threats, &query).into_iter().cloned().collect()
    }

    pub fn total(&self) -> usize {
        self.threats.get().len()
    }

    pub fn high_severity(&self) -> usize {
        self.threats
            .get()
            .iter()
            .filter(|t| t.severity == Severity::High)
            .count()
    }
}

impl Default for ThreatDesk {
    fn default() -> Self {
        Self::new()
    }
}
