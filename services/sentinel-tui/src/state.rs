// services/sentinel-tui/src/state.rs
//
// Terminal console state

use chrono::{DateTime, Utc};
use rand::rngs::StdRng;
use rand::SeedableRng;

use opskit::data::{seed_feeds, seed_threats, REGIONS, SECTORS};
use opskit::filter::{
    filter_by_region, filter_threats, RegionSelection, ThreatQuery, ALL_FEEDS, ALL_THREATS,
};
use opskit::sim::{advance_feeds, manual_alert, SimulationConfig};
use opskit::types::{Feed, Platform, Threat};

pub const SEVERITY_CHOICES: [&str; 4] = [ALL_THREATS, "low", "medium", "high"];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tab {
    Feeds,
    WeatherPatrol,
    Maintenance,
    Threats,
}

impl Tab {
    pub const ALL: [Tab; 4] = [
        Tab::Feeds,
        Tab::WeatherPatrol,
        Tab::Maintenance,
        Tab::Threats,
    ];

    pub fn next(self) -> Tab {
        match self {
            Tab::Feeds => Tab::WeatherPatrol,
            Tab::WeatherPatrol => Tab::Maintenance,
            Tab::Maintenance => Tab::Threats,
            Tab::Threats => Tab::Feeds,
        }
    }

    pub fn index(self) -> usize {
        match self {
            Tab::Feeds => 0,
            Tab::WeatherPatrol => 1,
            Tab::Maintenance => 2,
            Tab::Threats => 3,
        }
    }

    pub fn title(self) -> &'static str {
        match self {
            Tab::Feeds => "Satellite & Drone",
            Tab::WeatherPatrol => "Weather & Patrol",
            Tab::Maintenance => "Maintenance",
            Tab::Threats => "Threat Intel",
        }
    }
}

#[derive(Debug, Clone)]
pub struct EventEntry {
    pub timestamp: DateTime<Utc>,
    pub level: String, // INFO, WARN
    pub message: String,
}

pub struct ConsoleState {
    pub tab: Tab,
    pub feeds: Vec<Feed>,
    pub threats: Vec<Threat>,
    pub region_idx: usize,
    pub sector_idx: usize,
    pub platform_idx: usize,
    pub severity_idx: usize,
    pub search: String,
    pub searching: bool,
    pub selected: usize,
    pub paused: bool,
    pub events: Vec<EventEntry>,
    pub sim: SimulationConfig,
    rng: StdRng,
}

impl ConsoleState {
    pub fn new(sim: SimulationConfig, seed: Option<u64>, now: DateTime<Utc>) -> Self {
        let rng = match seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };

        let mut state = Self {
            tab: Tab::Feeds,
            feeds: seed_feeds(now),
            threats: seed_threats(),
            region_idx: 0,
            sector_idx: 0,
            platform_idx: 0,
            severity_idx: 0,
            search: String::new(),
            searching: false,
            selected: 0,
            paused: false,
            events: Vec::new(),
            sim,
            rng,
        };

        state.add_event("INFO", "Sentinel console started", now);
        state.add_event(
            "INFO",
            &format!("Tracking {} watch posts", state.feeds.len()),
            now,
        );
        state
    }

    pub fn region_choices() -> Vec<&'static str> {
        std::iter::once(ALL_FEEDS)
            .chain(REGIONS.iter().copied())
            .collect()
    }

    pub fn region_label(&self) -> &'static str {
        Self::region_choices()[self.region_idx]
    }

    pub fn sector(&self) -> &'static str {
        SECTORS[self.sector_idx]
    }

    pub fn platform_label(&self) -> String {
        if self.platform_idx == 0 {
            ALL_THREATS.to_string()
        } else {
            Platform::ALL[self.platform_idx - 1].to_string()
        }
    }

    pub fn severity_label(&self) -> &'static str {
        SEVERITY_CHOICES[self.severity_idx]
    }

    pub fn visible_feeds(&self) -> Vec<&Feed> {
        let selection = RegionSelection::from_label(self.region_label());
        filter_by_region(&self.feeds, &selection)
    }

    pub fn visible_threats(&self) -> Vec<&Threat> {
        let query = ThreatQuery::from_selections(
            &self.platform_label(),
            self.severity_label(),
            &self.search,
        );
        filter_threats(&self.threats, &query)
    }

    pub fn alert_count(&self) -> usize {
        self.feeds.iter().filter(|f| f.status.is_alert()).count()
    }

    /// Advance the board by one tick and log feeds that just went hot.
    pub fn tick(&mut self, now: DateTime<Utc>) {
        if self.paused {
            return;
        }

        let before: Vec<bool> = self.feeds.iter().map(|f| f.status.is_alert()).collect();
        advance_feeds(&mut self.feeds, &mut self.rng, now, &self.sim);

        // Rising edges only, steady alarms would flood the pane.
        let rising: Vec<String> = self
            .feeds
            .iter()
            .zip(before)
            .filter(|(feed, was_alert)| feed.status.is_alert() && !was_alert)
            .map(|(feed, _)| format!("{}: {}", feed.name, feed.status))
            .collect();
        for message in rising {
            self.add_event("WARN", &message, now);
        }

        self.clamp_selection();
    }

    pub fn raise_manual_alert(&mut self, now: DateTime<Utc>) {
        let Some(name) = self
            .visible_feeds()
            .get(self.selected)
            .map(|f| f.name.clone())
        else {
            return;
        };

        if manual_alert(&mut self.feeds, &name, now).is_ok() {
            self.add_event("WARN", &format!("Manual alert raised for {}", name), now);
        }
    }

    pub fn next_tab(&mut self) {
        self.tab = self.tab.next();
        self.selected = 0;
    }

    pub fn set_tab(&mut self, tab: Tab) {
        if self.tab != tab {
            self.tab = tab;
            self.selected = 0;
        }
    }

    pub fn cycle_region(&mut self) {
        self.region_idx = (self.region_idx + 1) % Self::region_choices().len();
        self.selected = 0;
    }

    pub fn cycle_sector(&mut self) {
        self.sector_idx = (self.sector_idx + 1) % SECTORS.len();
    }

    pub fn cycle_platform(&mut self) {
        self.platform_idx = (self.platform_idx + 1) % (Platform::ALL.len() + 1);
        self.selected = 0;
    }

    pub fn cycle_severity(&mut self) {
        self.severity_idx = (self.severity_idx + 1) % SEVERITY_CHOICES.len();
        self.selected = 0;
    }

    /// Route printable keys into the threat search until the operator
    /// leaves search mode. The table narrows on every keystroke.
    pub fn start_search(&mut self) {
        self.searching = true;
    }

    pub fn push_search(&mut self, c: char) {
        self.search.push(c);
        self.selected = 0;
    }

    pub fn pop_search(&mut self) {
        self.search.pop();
        self.selected = 0;
    }

    /// Leave search mode, keeping the query as a standing filter.
    pub fn finish_search(&mut self) {
        self.searching = false;
    }

    /// Leave search mode and drop the query.
    pub fn clear_search(&mut self) {
        self.search.clear();
        self.searching = false;
        self.selected = 0;
    }

    pub fn select_up(&mut self) {
        self.selected = self.selected.saturating_sub(1);
    }

    pub fn select_down(&mut self) {
        let max = self.selection_len().saturating_sub(1);
        self.selected = (self.selected + 1).min(max);
    }

    pub fn toggle_pause(&mut self, now: DateTime<Utc>) {
        self.paused = !self.paused;
        if self.paused {
            self.add_event("WARN", "Feed simulation paused by operator", now);
        } else {
            self.add_event("INFO", "Feed simulation resumed", now);
        }
    }

    pub fn add_event(&mut self, level: &str, message: &str, now: DateTime<Utc>) {
        self.events.push(EventEntry {
            timestamp: now,
            level: level.to_string(),
            message: message.to_string(),
        });

        // Keep last 100 entries
        if self.events.len() > 100 {
            self.events.remove(0);
        }
    }

    fn selection_len(&self) -> usize {
        match self.tab {
            Tab::Feeds => self.visible_feeds().len(),
            Tab::Threats => self.visible_threats().len(),
            _ => 0,
        }
    }

    fn clamp_selection(&mut self) {
        let len = self.selection_len();
        if len == 0 {
            self.selected = 0;
        } else if self.selected >= len {
            self.selected = len - 1;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;
    use opskit::types::{FeedStatus, Severity};

    fn at(secs: u32) -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 5, 1, 6, 0, secs).unwrap()
    }

    fn demo_state() -> ConsoleState {
        ConsoleState::new(SimulationConfig::default(), Some(7), at(0))
    }

    #[test]
    fn tabs_wrap_in_order() {
        let mut state = demo_state();
        let seen: Vec<Tab> = (0..4)
            .map(|_| {
                let tab = state.tab;
                state.next_tab();
                tab
            })
            .collect();
        assert_eq!(seen, Tab::ALL.to_vec());
        assert_eq!(state.tab, Tab::Feeds);
    }

    #[test]
    fn region_cycle_returns_to_all() {
        let mut state = demo_state();
        assert_eq!(state.region_label(), ALL_FEEDS);

        let count = ConsoleState::region_choices().len();
        for _ in 0..count {
            state.cycle_region();
        }
        assert_eq!(state.region_label(), ALL_FEEDS);
    }

    #[test]
    fn selection_survives_region_narrowing() {
        let mut state = demo_state();
        state.selected = state.visible_feeds().len() - 1;
        state.cycle_region();
        assert_eq!(state.selected, 0);

        state.selected = 99;
        state.tick(at(1));
        let len = state.visible_feeds().len();
        assert!(state.selected < len.max(1));
    }

    #[test]
    fn paused_tick_leaves_feeds_alone() {
        let mut state = demo_state();
        state.toggle_pause(at(0));
        let before = state.feeds.clone();
        state.tick(at(1));
        assert_eq!(state.feeds, before);
    }

    #[test]
    fn manual_alert_hits_selected_feed() {
        let mut state = demo_state();
        state.selected = 2;
        let name = state.visible_feeds()[2].name.clone();

        state.raise_manual_alert(at(5));

        let feed = state.feeds.iter().find(|f| f.name == name).unwrap();
        assert_eq!(feed.status, FeedStatus::ManualAlert);
        assert_eq!(feed.last_alert, Some(at(5)));
    }

    #[test]
    fn threat_filters_compose() {
        let mut state = demo_state();
        assert_eq!(state.visible_threats().len(), state.threats.len());

        state.cycle_platform();
        assert!(state
            .visible_threats()
            .iter()
            .all(|t| t.platform == Platform::X));

        state.cycle_severity();
        assert!(state
            .visible_threats()
            .iter()
            .all(|t| t.platform == Platform::X && t.severity == Severity::Low));
    }

    #[test]
    fn search_narrows_table_per_keystroke() {
        let mut state = demo_state();
        let all = state.visible_threats().len();

        state.start_search();
        assert!(state.searching);
        for c in "drone".chars() {
            state.push_search(c);
        }
        let hits = state.visible_threats();
        assert_eq!(hits.len(), 1);
        assert!(hits[0].content.to_lowercase().contains("drone"));

        // Finishing keeps the query as a standing filter.
        state.finish_search();
        assert!(!state.searching);
        assert_eq!(state.visible_threats().len(), 1);

        state.start_search();
        state.clear_search();
        assert_eq!(state.visible_threats().len(), all);
    }

    #[test]
    fn event_log_capped_at_hundred() {
        let mut state = demo_state();
        for i in 0..150 {
            state.add_event("INFO", &format!("event {}", i), at(0));
        }
        assert_eq!(state.events.len(), 100);
    }
}
