use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use strum::{Display, EnumString};

/// Surveillance feed status as rendered on the console.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Display)]
pub enum FeedStatus {
    Normal,
    #[strum(serialize = "Motion detected")]
    MotionDetected,
    #[strum(serialize = "Human detected")]
    HumanDetected,
    #[strum(serialize = "Manual alert")]
    ManualAlert,
}

impl Default for FeedStatus {
    fn default() -> Self {
        Self::Normal
    }
}

impl FeedStatus {
    /// Anything other than Normal is treated as an alert condition.
    pub fn is_alert(&self) -> bool {
        !matches!(self, FeedStatus::Normal)
    }
}

/// Fixed observation point a feed is attached to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct WatchPost {
    pub name: &'static str,
    pub region: &'static str,
}

/// Live satellite/drone feed for one watch post.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Feed {
    pub name: String,
    pub region: String,
    pub status: FeedStatus,
    pub last_updated: DateTime<Utc>,
    pub last_motion: Option<DateTime<Utc>>,
    pub last_alert: Option<DateTime<Utc>>,
    pub running_time_secs: u64,
}

impl Feed {
    pub fn new(post: &WatchPost, now: DateTime<Utc>) -> Self {
        Self {
            name: post.name.to_string(),
            region: post.region.to_string(),
            status: FeedStatus::Normal,
            last_updated: now,
            last_motion: None,
            last_alert: None,
            running_time_secs: 0,
        }
    }

    /// Feed uptime as HH:MM:SS for the card overlay.
    pub fn running_time_display(&self) -> String {
        let hours = self.running_time_secs / 3600;
        let mins = (self.running_time_secs % 3600) / 60;
        let secs = self.running_time_secs % 60;
        format!("{:02}:{:02}:{:02}", hours, mins, secs)
    }
}

/// Patrol route advisory level.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Display, EnumString)]
pub enum Recommendation {
    Recommended,
    #[strum(serialize = "Proceed with Caution")]
    Caution,
    #[strum(serialize = "Not Recommended")]
    NotRecommended,
}

/// Fixed patrol route with its current condition advisory.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct PatrolRoute {
    pub name: &'static str,
    pub region: &'static str,
    pub condition: &'static str,
    pub recommendation: Recommendation,
    pub lat: f64,
    pub lng: f64,
}

/// Reference weather readings for one region.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct WeatherSnapshot {
    pub region: &'static str,
    pub temperature: &'static str,
    pub humidity: &'static str,
    pub wind_speed: &'static str,
    pub visibility: &'static str,
}

/// Tracked equipment with a predicted health percentage.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct EquipmentItem {
    pub name: &'static str,
    pub received: &'static str,
    pub expiry: &'static str,
    pub health: u8,
}

/// Equipment inventory for one maintenance sector.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct EquipmentGroup {
    pub region: &'static str,
    pub items: Vec<EquipmentItem>,
}

/// Utilization gauge shown on the maintenance panel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ResourceMetric {
    pub label: &'static str,
    pub level_pct: u8,
    pub note: &'static str,
}

/// Standing condition report for a fixed installation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct InfrastructureStatus {
    pub name: &'static str,
    pub condition: &'static str,
    pub needs_attention: bool,
}

/// Monitored social platform.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Display, EnumString)]
pub enum Platform {
    X,
    Facebook,
    Instagram,
}

impl Platform {
    pub const ALL: [Platform; 3] = [Platform::X, Platform::Facebook, Platform::Instagram];
}

/// Ordinal threat classification.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize, Display, EnumString,
)]
#[strum(serialize_all = "lowercase")]
pub enum Severity {
    Low,
    Medium,
    High,
}

/// Flagged social media post.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Threat {
    pub id: u32,
    pub platform: Platform,
    pub content: String,
    pub severity: Severity,
    pub timestamp: DateTime<Utc>,
    pub location: String,
    pub link: String,
}

/// One day of per-platform mention counts, indexed by `Platform::ALL` order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct WeeklyActivity {
    pub day: &'static str,
    pub counts: [u32; 3],
}

impl WeeklyActivity {
    pub fn count(&self, platform: Platform) -> u32 {
        self.counts[platform as usize]
    }
}

/// Static digest rendered on the analytics tab.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct IntelligenceSummary {
    pub key_insights: Vec<&'static str>,
    pub emerging_trends: Vec<&'static str>,
    pub recommended_actions: Vec<&'static str>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_display_strings() {
        assert_eq!(FeedStatus::Normal.to_string(), "Normal");
        assert_eq!(FeedStatus::MotionDetected.to_string(), "Motion detected");
        assert_eq!(FeedStatus::HumanDetected.to_string(), "Human detected");
        assert_eq!(FeedStatus::ManualAlert.to_string(), "Manual alert");
    }

    #[test]
    fn test_alert_flag() {
        assert!(!FeedStatus::Normal.is_alert());
        assert!(FeedStatus::MotionDetected.is_alert());
        assert!(FeedStatus::HumanDetected.is_alert());
        assert!(FeedStatus::ManualAlert.is_alert());
    }

    #[test]
    fn test_running_time_display() {
        let mut feed = Feed::new(
            &WatchPost {
                name: "Tawang",
                region: "Arunachal Pradesh",
            },
            Utc::now(),
        );
        assert_eq!(feed.running_time_display(), "00:00:00");

        feed.running_time_secs = 3_661;
        assert_eq!(feed.running_time_display(), "01:01:01");

        feed.running_time_secs = 86_399;
        assert_eq!(feed.running_time_display(), "23:59:59");
    }

    #[test]
    fn test_severity_ordering() {
        assert!(Severity::Low < Severity::Medium);
        assert!(Severity::Medium < Severity::High);
    }

    #[test]
    fn test_select_value_parsing() {
        assert_eq!("X".parse::<Platform>().ok(), Some(Platform::X));
        assert_eq!("Facebook".parse::<Platform>().ok(), Some(Platform::Facebook));
        assert_eq!("high".parse::<Severity>().ok(), Some(Severity::High));
        assert!("all".parse::<Platform>().is_err());
        assert!("all".parse::<Severity>().is_err());
    }
}
