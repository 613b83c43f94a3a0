use chrono::{DateTime, Utc};

use crate::types::{
    EquipmentGroup, EquipmentItem, Feed, InfrastructureStatus, IntelligenceSummary, PatrolRoute,
    Platform, Recommendation, ResourceMetric, Severity, Threat, WatchPost, WeatherSnapshot,
    WeeklyActivity,
};

/// Surveillance regions along the northern frontier.
pub const REGIONS: [&str; 5] = [
    "Ladakh",
    "Himachal Pradesh",
    "Sikkim",
    "Arunachal Pradesh",
    "Uttarakhand",
];

/// Maintenance sectors. A separate vocabulary from the surveillance regions.
pub const SECTORS: [&str; 5] = ["North", "South", "East", "West", "Central"];

/// Shared chart palette for the analytics panels.
pub const CHART_COLORS: [&str; 5] = ["#0088FE", "#00C49F", "#FFBB28", "#FF8042", "#8884D8"];

pub fn watch_posts() -> Vec<WatchPost> {
    vec![
        WatchPost { name: "Pangong Tso Lake", region: "Ladakh" },
        WatchPost { name: "Kaurik", region: "Himachal Pradesh" },
        WatchPost { name: "Jelep La", region: "Sikkim" },
        WatchPost { name: "Tawang", region: "Arunachal Pradesh" },
        WatchPost { name: "Daulat Beg Oldi", region: "Ladakh" },
        WatchPost { name: "Mana Pass", region: "Uttarakhand" },
        WatchPost { name: "Shipki La", region: "Himachal Pradesh" },
        WatchPost { name: "Walong", region: "Arunachal Pradesh" },
    ]
}

/// Fresh feed collection for a newly mounted surveillance panel.
pub fn seed_feeds(now: DateTime<Utc>) -> Vec<Feed> {
    watch_posts().iter().map(|post| Feed::new(post, now)).collect()
}

pub fn patrol_routes() -> Vec<PatrolRoute> {
    use Recommendation::*;

    let rows = [
        ("Route A", "Ladakh", "Clear", Recommended, 34.2268, 77.5619),
        ("Route B", "Ladakh", "Snowy", Caution, 34.1526, 77.5771),
        ("Route C", "Himachal Pradesh", "Foggy", NotRecommended, 31.1048, 77.1734),
        ("Route D", "Himachal Pradesh", "Clear", Recommended, 32.2190, 77.6167),
        ("Route E", "Sikkim", "Rainy", NotRecommended, 27.3389, 88.6065),
        ("Route F", "Sikkim", "Cloudy", Caution, 27.5917, 88.4583),
        ("Route G", "Arunachal Pradesh", "Clear", Recommended, 28.2180, 94.7278),
        ("Route H", "Arunachal Pradesh", "Misty", Caution, 27.0844, 93.6053),
        ("Route I", "Uttarakhand", "Windy", Caution, 30.0668, 79.0193),
        ("Route J", "Uttarakhand", "Clear", Recommended, 30.7333, 79.0667),
    ];

    rows.iter()
        .map(|&(name, region, condition, recommendation, lat, lng)| PatrolRoute {
            name,
            region,
            condition,
            recommendation,
            lat,
            lng,
        })
        .collect()
}

pub fn regional_weather() -> Vec<WeatherSnapshot> {
    vec![
        WeatherSnapshot {
            region: "Ladakh",
            temperature: "5°C",
            humidity: "30%",
            wind_speed: "20 km/h",
            visibility: "Excellent",
        },
        WeatherSnapshot {
            region: "Himachal Pradesh",
            temperature: "15°C",
            humidity: "60%",
            wind_speed: "10 km/h",
            visibility: "Good",
        },
        WeatherSnapshot {
            region: "Sikkim",
            temperature: "18°C",
            humidity: "75%",
            wind_speed: "5 km/h",
            visibility: "Moderate",
        },
        WeatherSnapshot {
            region: "Arunachal Pradesh",
            temperature: "22°C",
            humidity: "80%",
            wind_speed: "8 km/h",
            visibility: "Fair",
        },
        WeatherSnapshot {
            region: "Uttarakhand",
            temperature: "12°C",
            humidity: "55%",
            wind_speed: "15 km/h",
            visibility: "Good",
        },
    ]
}

pub fn weather_for(region: &str) -> Option<WeatherSnapshot> {
    regional_weather().into_iter().find(|w| w.region == region)
}

fn sector_equipment() -> Vec<EquipmentItem> {
    vec![
        EquipmentItem { name: "Drone", received: "2023-01-15", expiry: "2025-01-15", health: 75 },
        EquipmentItem { name: "Camera System", received: "2022-11-30", expiry: "2026-11-30", health: 90 },
        EquipmentItem { name: "Perimeter Sensors", received: "2023-03-01", expiry: "2028-03-01", health: 60 },
        EquipmentItem { name: "Access Control", received: "2022-09-15", expiry: "2027-09-15", health: 85 },
        EquipmentItem { name: "Emergency Generator", received: "2023-05-01", expiry: "2033-05-01", health: 95 },
    ]
}

/// Every sector currently tracks the same standard equipment set.
pub fn equipment_groups() -> Vec<EquipmentGroup> {
    SECTORS
        .iter()
        .map(|&region| EquipmentGroup {
            region,
            items: sector_equipment(),
        })
        .collect()
}

pub fn resource_metrics() -> Vec<ResourceMetric> {
    vec![
        ResourceMetric { label: "Staff Utilization", level_pct: 85, note: "85%" },
        ResourceMetric { label: "Energy Consumption", level_pct: 70, note: "Optimal" },
        ResourceMetric { label: "Supply Inventory", level_pct: 60, note: "Adequate" },
    ]
}

pub fn infrastructure_statuses() -> Vec<InfrastructureStatus> {
    vec![
        InfrastructureStatus {
            name: "Main Building",
            condition: "Good Condition",
            needs_attention: false,
        },
        InfrastructureStatus {
            name: "Perimeter Fence",
            condition: "Maintenance Required (Section E)",
            needs_attention: true,
        },
        InfrastructureStatus {
            name: "Access Control Systems",
            condition: "Optimal",
            needs_attention: false,
        },
        InfrastructureStatus {
            name: "Emergency Power Generator",
            condition: "Scheduled for Testing",
            needs_attention: false,
        },
    ]
}

pub fn seed_threats() -> Vec<Threat> {
    use Platform::*;
    use Severity::*;

    let rows = [
        (1, X, "Suspicious activity near border post A", High, "2023-06-15T10:30:00Z", "Border Post A", "https://x.com/post1"),
        (2, Facebook, "Unusual gathering reported in sector B", Medium, "2023-06-15T11:45:00Z", "Sector B", "https://facebook.com/post2"),
        (3, Instagram, "Unidentified drone sighting in region C", High, "2023-06-15T12:15:00Z", "Region C", "https://instagram.com/post3"),
        (4, X, "Potential smuggling activity detected at checkpoint D", Medium, "2023-06-15T13:00:00Z", "Checkpoint D", "https://x.com/post4"),
        (5, Facebook, "Rumors of illegal border crossing at point E", Low, "2023-06-15T14:30:00Z", "Point E", "https://facebook.com/post5"),
    ];

    rows.iter()
        .map(|&(id, platform, content, severity, timestamp, location, link)| Threat {
            id,
            platform,
            content: content.to_string(),
            severity,
            timestamp: ts(timestamp),
            location: location.to_string(),
            link: link.to_string(),
        })
        .collect()
}

/// Mon..Sun mention counts per platform for the trend chart.
pub fn weekly_activity() -> Vec<WeeklyActivity> {
    vec![
        WeeklyActivity { day: "Mon", counts: [4, 3, 2] },
        WeeklyActivity { day: "Tue", counts: [3, 4, 3] },
        WeeklyActivity { day: "Wed", counts: [5, 2, 4] },
        WeeklyActivity { day: "Thu", counts: [2, 3, 5] },
        WeeklyActivity { day: "Fri", counts: [3, 5, 3] },
        WeeklyActivity { day: "Sat", counts: [4, 4, 2] },
        WeeklyActivity { day: "Sun", counts: [3, 3, 3] },
    ]
}

pub fn severity_distribution() -> Vec<(Severity, u32)> {
    vec![(Severity::Low, 3), (Severity::Medium, 3), (Severity::High, 2)]
}

pub fn location_mentions() -> Vec<(&'static str, u32)> {
    vec![
        ("Border Post A", 2),
        ("Sector B", 1),
        ("Region C", 3),
        ("Checkpoint D", 2),
    ]
}

pub fn intelligence_summary() -> IntelligenceSummary {
    IntelligenceSummary {
        key_insights: vec![
            "X remains the most active platform for potential threats",
            "High severity threats have increased by 15% in the last 7 days",
            "Region C shows the highest concentration of threat activities",
        ],
        emerging_trends: vec![
            "Increase in coordinated disinformation campaigns",
            "Rise in drone-related incidents near border areas",
            "Growing number of social media inquiries about border crossings",
        ],
        recommended_actions: vec![
            "Enhance monitoring of X platform, especially in Region C",
            "Increase patrols and surveillance in high-threat areas",
            "Develop counter-strategies for disinformation campaigns",
            "Implement advanced drone detection systems in vulnerable sectors",
        ],
    }
}

fn ts(s: &str) -> DateTime<Utc> {
    s.parse().expect("static mock timestamp")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_watch_post_regions_are_known() {
        for post in watch_posts() {
            assert!(REGIONS.contains(&post.region), "unknown region {}", post.region);
        }
    }

    #[test]
    fn test_seed_feeds_start_quiet() {
        let now = Utc::now();
        let feeds = seed_feeds(now);

        assert_eq!(feeds.len(), 8);
        for feed in &feeds {
            assert_eq!(feed.status, crate::types::FeedStatus::Normal);
            assert_eq!(feed.running_time_secs, 0);
            assert_eq!(feed.last_updated, now);
            assert!(feed.last_motion.is_none());
            assert!(feed.last_alert.is_none());
        }
    }

    #[test]
    fn test_two_routes_per_region() {
        let routes = patrol_routes();
        assert_eq!(routes.len(), 10);

        for region in REGIONS {
            let count = routes.iter().filter(|r| r.region == region).count();
            assert_eq!(count, 2, "region {} should have two routes", region);
        }
    }

    #[test]
    fn test_weather_lookup() {
        let ladakh = weather_for("Ladakh").unwrap();
        assert_eq!(ladakh.temperature, "5°C");
        assert_eq!(ladakh.visibility, "Excellent");

        assert!(weather_for("All Regions").is_none());
    }

    #[test]
    fn test_equipment_groups_cover_all_sectors() {
        let groups = equipment_groups();
        assert_eq!(groups.len(), SECTORS.len());
        for group in &groups {
            assert_eq!(group.items.len(), 5);
        }
    }

    #[test]
    fn test_seed_threats_fixture() {
        let threats = seed_threats();
        assert_eq!(threats.len(), 5);

        let high = threats.iter().filter(|t| t.severity == Severity::High).count();
        assert_eq!(high, 2);

        // Timestamps parse and keep their order
        for pair in threats.windows(2) {
            assert!(pair[0].timestamp < pair[1].timestamp);
        }
    }

    #[test]
    fn test_weekly_activity_shape() {
        let series = weekly_activity();
        assert_eq!(series.len(), 7);
        assert_eq!(series[0].day, "Mon");
        assert_eq!(series[0].count(Platform::X), 4);
        assert_eq!(series[2].count(Platform::Instagram), 4);
    }
}
