// services/sentinel-dash/src/sim.rs
//
// Sentinel Console - Browser feed tick loop
//

use gloo_timers::future::TimeoutFuture;
use leptos::*;
use rand::rngs::StdRng;
use rand::SeedableRng;

use opskit::sim::advance_feeds;

use crate::config::ConsoleConfig;
use crate::state::{now_utc, FeedBoard};

/// Start the feed tick loop for a mounted surveillance grid. The loop
/// parks itself once the owning scope is disposed, so switching tabs
/// stops the simulation with the panel.
pub fn start_feed_simulation(board: FeedBoard, config: ConsoleConfig) {
    let alive = store_value(true);
    on_cleanup(move || {
        alive.try_update_value(|flag| *flag = false);
    });

    let mut rng = match config.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };

    log::info!(
        "Feed simulation started: tick {} ms, alert probability {}",
        config.sim.tick_interval_ms,
        config.sim.alert_probability
    );

    spawn_local(async move {
        loop {
            TimeoutFuture::new(config.sim.tick_interval_ms as u32).await;
            if !alive.try_get_value().unwrap_or(false) {
                break;
            }

            let now = now_utc();
            board
                .feeds
                .update(|feeds| advance_feeds(feeds, &mut rng, now, &config.sim));
        }
        log::debug!("Feed simulation stopped");
    });
}
