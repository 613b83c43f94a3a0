use crate::types::{EquipmentGroup, Feed, PatrolRoute, Platform, Severity, Threat, WatchPost};

/// Sentinel label used by the feed grid region picker.
pub const ALL_FEEDS: &str = "All";

/// Sentinel label used by the patrol route region picker.
pub const ALL_ROUTES: &str = "All Regions";

/// Sentinel value used by the threat selects.
pub const ALL_THREATS: &str = "all";

/// Anything that belongs to a named region.
pub trait Regional {
    fn region(&self) -> &str;
}

impl Regional for Feed {
    fn region(&self) -> &str {
        &self.region
    }
}

impl Regional for WatchPost {
    fn region(&self) -> &str {
        self.region
    }
}

impl Regional for PatrolRoute {
    fn region(&self) -> &str {
        self.region
    }
}

impl Regional for EquipmentGroup {
    fn region(&self) -> &str {
        self.region
    }
}

/// Region picker state with a distinguished "everything" sentinel.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RegionSelection {
    All,
    Region(String),
}

impl Default for RegionSelection {
    fn default() -> Self {
        Self::All
    }
}

impl RegionSelection {
    /// Interpret a picker label. Any of the sentinel spellings selects all.
    pub fn from_label(label: &str) -> Self {
        match label {
            ALL_FEEDS | ALL_ROUTES | ALL_THREATS => Self::All,
            region => Self::Region(region.to_string()),
        }
    }

    pub fn admits(&self, region: &str) -> bool {
        match self {
            Self::All => true,
            Self::Region(selected) => selected == region,
        }
    }
}

/// Derived view over a regional collection. Order is preserved; the
/// sentinel yields the input untouched.
pub fn filter_by_region<'a, T: Regional>(items: &'a [T], selection: &RegionSelection) -> Vec<&'a T> {
    items
        .iter()
        .filter(|item| selection.admits(item.region()))
        .collect()
}

/// Threat feed query. Criteria combine with AND; `None` selections and an
/// empty search match everything.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ThreatQuery {
    pub platform: Option<Platform>,
    pub severity: Option<Severity>,
    pub search: String,
}

impl ThreatQuery {
    /// Build a query from raw select/input values. The "all" sentinel (or
    /// any unrecognized value) clears that criterion.
    pub fn from_selections(platform: &str, severity: &str, search: &str) -> Self {
        Self {
            platform: platform.parse().ok(),
            severity: severity.parse().ok(),
            search: search.to_string(),
        }
    }

    pub fn matches(&self, threat: &Threat) -> bool {
        self.platform.map_or(true, |p| threat.platform == p)
            && self.severity.map_or(true, |s| threat.severity == s)
            && (self.search.is_empty()
                || threat
                    .content
                    .to_lowercase()
                    .contains(&self.search.to_lowercase()))
    }
}

/// Derived view over the threat feed, order preserved.
pub fn filter_threats<'a>(threats: &'a [Threat], query: &ThreatQuery) -> Vec<&'a Threat> {
    threats.iter().filter(|t| query.matches(t)).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::{patrol_routes, seed_feeds, seed_threats};
    use chrono::Utc;

    #[test]
    fn test_sentinel_returns_everything_unchanged() {
        let feeds = seed_feeds(Utc::now());
        let all = filter_by_region(&feeds, &RegionSelection::from_label(ALL_FEEDS));
        assert_eq!(all.len(), feeds.len());
        for (kept, original) in all.iter().zip(feeds.iter()) {
            assert_eq!(kept.name, original.name);
        }

        let routes = patrol_routes();
        let all = filter_by_region(&routes, &RegionSelection::from_label(ALL_ROUTES));
        assert_eq!(all.len(), routes.len());
    }

    #[test]
    fn test_region_filter_keeps_only_matches() {
        let feeds = seed_feeds(Utc::now());
        let selection = RegionSelection::from_label("Ladakh");

        let visible = filter_by_region(&feeds, &selection);
        assert_eq!(visible.len(), 2);
        for feed in visible {
            assert_eq!(feed.region, "Ladakh");
        }
    }

    #[test]
    fn test_unknown_region_matches_nothing() {
        let routes = patrol_routes();
        let selection = RegionSelection::from_label("Kashmir Valley");
        assert!(filter_by_region(&routes, &selection).is_empty());
    }

    #[test]
    fn test_threat_sentinels_match_everything() {
        let threats = seed_threats();
        let query = ThreatQuery::from_selections(ALL_THREATS, ALL_THREATS, "");

        let visible = filter_threats(&threats, &query);
        assert_eq!(visible.len(), threats.len());
        let ids: Vec<u32> = visible.iter().map(|t| t.id).collect();
        assert_eq!(ids, vec![1, 2, 3, 4, 5]);
    }

    #[test]
    fn test_high_severity_returns_exactly_two() {
        let threats = seed_threats();
        let query = ThreatQuery::from_selections(ALL_THREATS, "high", "");

        let visible = filter_threats(&threats, &query);
        let ids: Vec<u32> = visible.iter().map(|t| t.id).collect();
        assert_eq!(ids, vec![1, 3]);
    }

    #[test]
    fn test_criteria_combine_with_and() {
        let threats = seed_threats();

        let query = ThreatQuery::from_selections("X", ALL_THREATS, "");
        let ids: Vec<u32> = filter_threats(&threats, &query).iter().map(|t| t.id).collect();
        assert_eq!(ids, vec![1, 4]);

        let query = ThreatQuery::from_selections("X", "medium", "");
        let ids: Vec<u32> = filter_threats(&threats, &query).iter().map(|t| t.id).collect();
        assert_eq!(ids, vec![4]);

        let query = ThreatQuery::from_selections("X", "medium", "gathering");
        assert!(filter_threats(&threats, &query).is_empty());
    }

    #[test]
    fn test_search_is_case_insensitive_substring() {
        let threats = seed_threats();

        let query = ThreatQuery::from_selections(ALL_THREATS, ALL_THREATS, "DRONE");
        let ids: Vec<u32> = filter_threats(&threats, &query).iter().map(|t| t.id).collect();
        assert_eq!(ids, vec![3]);

        let query = ThreatQuery::from_selections(ALL_THREATS, ALL_THREATS, "border");
        let ids: Vec<u32> = filter_threats(&threats, &query).iter().map(|t| t.id).collect();
        assert_eq!(ids, vec![1, 5]);

        let query = ThreatQuery::from_selections(ALL_THREATS, ALL_THREATS, "no such post");
        assert!(filter_threats(&threats, &query).is_empty());
    }

    #[test]
    fn test_source_collection_is_untouched() {
        let threats = seed_threats();
        let before = threats.clone();

        let query = ThreatQuery::from_selections("Facebook", "low", "rumors");
        let _ = filter_threats(&threats, &query);

        assert_eq!(threats, before);
    }
}
