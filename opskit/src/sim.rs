use chrono::{DateTime, Utc};
use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::errors::OpsError;
use crate::types::{Feed, FeedStatus};

/// Simulation knobs, shared by the browser loop and the terminal loop.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct SimulationConfig {
    /// Milliseconds between feed ticks
    #[serde(default = "default_tick_interval_ms")]
    pub tick_interval_ms: u64,

    /// Per-feed chance of a non-Normal status on each tick
    #[serde(default = "default_alert_probability")]
    pub alert_probability: f64,
}

fn default_tick_interval_ms() -> u64 {
    1_000
}

fn default_alert_probability() -> f64 {
    0.2
}

impl Default for SimulationConfig {
    fn default() -> Self {
        Self {
            tick_interval_ms: default_tick_interval_ms(),
            alert_probability: default_alert_probability(),
        }
    }
}

impl SimulationConfig {
    pub fn validate(&self) -> Result<(), OpsError> {
        if self.tick_interval_ms == 0 {
            return Err(OpsError::InvalidConfig(
                "tick_interval_ms must be greater than zero".to_string(),
            ));
        }
        if !(0.0..=1.0).contains(&self.alert_probability) {
            return Err(OpsError::InvalidConfig(format!(
                "alert_probability {} outside 0..=1",
                self.alert_probability
            )));
        }
        Ok(())
    }
}

/// Draw the next status for one feed. Alerts split evenly between
/// motion and human detections.
pub fn draw_status<R: Rng>(rng: &mut R, alert_probability: f64) -> FeedStatus {
    if rng.gen_bool(alert_probability) {
        if rng.gen_bool(0.5) {
            FeedStatus::MotionDetected
        } else {
            FeedStatus::HumanDetected
        }
    } else {
        FeedStatus::Normal
    }
}

/// Apply a drawn status to a feed.
///
/// A rising edge (Normal -> alert) stamps `last_alert` and `last_motion`
/// with the same instant. An alert following an alert refreshes only
/// `last_motion`. Uptime and `last_updated` advance on every tick.
pub fn apply_status(feed: &mut Feed, status: FeedStatus, now: DateTime<Utc>) {
    let rising_edge = status.is_alert() && !feed.status.is_alert();

    if status.is_alert() {
        feed.last_motion = Some(now);
    }
    if rising_edge {
        feed.last_alert = Some(now);
        log::debug!("{}: {}", feed.name, status);
    }

    feed.status = status;
    feed.last_updated = now;
    feed.running_time_secs += 1;
}

/// Advance one feed by one tick.
pub fn advance_feed<R: Rng>(
    feed: &mut Feed,
    rng: &mut R,
    now: DateTime<Utc>,
    config: &SimulationConfig,
) {
    let status = draw_status(rng, config.alert_probability);
    apply_status(feed, status, now);
}

/// Advance the whole board by one tick. Each feed draws independently.
pub fn advance_feeds<R: Rng>(
    feeds: &mut [Feed],
    rng: &mut R,
    now: DateTime<Utc>,
    config: &SimulationConfig,
) {
    for feed in feeds.iter_mut() {
        advance_feed(feed, rng, now, config);
    }
}

/// Operator-raised alert, applied immediately between ticks.
///
/// Sets the status and stamps `last_alert` only; the next tick draws a
/// fresh status over it, matching the console's historical behavior.
pub fn manual_alert(feeds: &mut [Feed], name: &str, now: DateTime<Utc>) -> Result<(), OpsError> {
    let feed = feeds
        .iter_mut()
        .find(|f| f.name == name)
        .ok_or_else(|| OpsError::UnknownFeed(name.to_string()))?;

    feed.status = FeedStatus::ManualAlert;
    feed.last_alert = Some(now);
    log::info!("Manual alert raised for {}", name);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::seed_feeds;
    use chrono::TimeZone;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn at(secs: u32) -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 5, 1, 6, 0, secs).unwrap()
    }

    fn quiet() -> SimulationConfig {
        SimulationConfig {
            alert_probability: 0.0,
            ..SimulationConfig::default()
        }
    }

    fn noisy() -> SimulationConfig {
        SimulationConfig {
            alert_probability: 1.0,
            ..SimulationConfig::default()
        }
    }

    #[test]
    fn test_running_time_counts_ticks() {
        let mut feeds = seed_feeds(at(0));
        let mut rng = StdRng::seed_from_u64(42);

        for i in 1..=5 {
            advance_feeds(&mut feeds, &mut rng, at(i), &quiet());
        }

        for feed in &feeds {
            assert_eq!(feed.running_time_secs, 5);
            assert_eq!(feed.status, FeedStatus::Normal);
            assert_eq!(feed.last_updated, at(5));
            assert!(feed.last_motion.is_none());
            assert!(feed.last_alert.is_none());
        }
    }

    #[test]
    fn test_rising_edge_stamps_both_timestamps() {
        let mut feeds = seed_feeds(at(0));
        let mut rng = StdRng::seed_from_u64(7);

        advance_feeds(&mut feeds, &mut rng, at(1), &noisy());

        for feed in &feeds {
            assert!(feed.status.is_alert());
            assert_eq!(feed.last_motion, Some(at(1)));
            assert_eq!(feed.last_alert, Some(at(1)));
            assert_eq!(feed.last_motion, feed.last_alert);
        }
    }

    #[test]
    fn test_repeated_alert_refreshes_motion_only() {
        let mut feeds = seed_feeds(at(0));
        let mut rng = StdRng::seed_from_u64(7);

        advance_feeds(&mut feeds, &mut rng, at(1), &noisy());
        advance_feeds(&mut feeds, &mut rng, at(2), &noisy());

        for feed in &feeds {
            assert_eq!(feed.last_alert, Some(at(1)), "alert stamp must not refresh");
            assert_eq!(feed.last_motion, Some(at(2)));
            assert_eq!(feed.running_time_secs, 2);
        }
    }

    #[test]
    fn test_recovery_keeps_old_stamps() {
        let mut feed = seed_feeds(at(0)).remove(0);

        apply_status(&mut feed, FeedStatus::MotionDetected, at(1));
        apply_status(&mut feed, FeedStatus::Normal, at(2));

        assert_eq!(feed.status, FeedStatus::Normal);
        assert_eq!(feed.last_motion, Some(at(1)));
        assert_eq!(feed.last_alert, Some(at(1)));
        assert_eq!(feed.last_updated, at(2));
    }

    #[test]
    fn test_alert_to_alert_is_not_a_rising_edge() {
        let mut feed = seed_feeds(at(0)).remove(0);

        apply_status(&mut feed, FeedStatus::MotionDetected, at(1));
        apply_status(&mut feed, FeedStatus::HumanDetected, at(2));

        assert_eq!(feed.last_alert, Some(at(1)));
        assert_eq!(feed.last_motion, Some(at(2)));
    }

    #[test]
    fn test_manual_alert_is_immediate() {
        let mut feeds = seed_feeds(at(0));

        manual_alert(&mut feeds, "Tawang", at(3)).unwrap();

        let tawang = feeds.iter().find(|f| f.name == "Tawang").unwrap();
        assert_eq!(tawang.status, FeedStatus::ManualAlert);
        assert_eq!(tawang.last_alert, Some(at(3)));
        // No tick ran: uptime, update stamp and motion stamp untouched
        assert_eq!(tawang.running_time_secs, 0);
        assert_eq!(tawang.last_updated, at(0));
        assert!(tawang.last_motion.is_none());

        // Other feeds untouched
        let other = feeds.iter().find(|f| f.name != "Tawang").unwrap();
        assert_eq!(other.status, FeedStatus::Normal);
        assert!(other.last_alert.is_none());
    }

    #[test]
    fn test_manual_alert_unknown_feed() {
        let mut feeds = seed_feeds(at(0));
        let err = manual_alert(&mut feeds, "Nathu La", at(1)).unwrap_err();
        assert!(matches!(err, OpsError::UnknownFeed(name) if name == "Nathu La"));
    }

    #[test]
    fn test_next_tick_overwrites_manual_alert() {
        let mut feeds = seed_feeds(at(0));
        let mut rng = StdRng::seed_from_u64(11);

        manual_alert(&mut feeds, "Kaurik", at(1)).unwrap();
        advance_feeds(&mut feeds, &mut rng, at(2), &quiet());

        let kaurik = feeds.iter().find(|f| f.name == "Kaurik").unwrap();
        assert_eq!(kaurik.status, FeedStatus::Normal);
        // The manual stamp survives even though the status was drawn over
        assert_eq!(kaurik.last_alert, Some(at(1)));
    }

    #[test]
    fn test_seeded_runs_are_reproducible() {
        let config = SimulationConfig::default();

        let mut first = seed_feeds(at(0));
        let mut rng = StdRng::seed_from_u64(1337);
        for i in 1..=10 {
            advance_feeds(&mut first, &mut rng, at(i), &config);
        }

        let mut second = seed_feeds(at(0));
        let mut rng = StdRng::seed_from_u64(1337);
        for i in 1..=10 {
            advance_feeds(&mut second, &mut rng, at(i), &config);
        }

        assert_eq!(first, second);
    }

    #[test]
    fn test_config_validation() {
        assert!(SimulationConfig::default().validate().is_ok());

        let bad_probability = SimulationConfig {
            alert_probability: 1.5,
            ..SimulationConfig::default()
        };
        assert!(bad_probability.validate().is_err());

        let bad_tick = SimulationConfig {
            tick_interval_ms: 0,
            ..SimulationConfig::default()
        };
        assert!(bad_tick.validate().is_err());
    }
}
