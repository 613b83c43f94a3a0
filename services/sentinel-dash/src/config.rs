// services/sentinel-dash/src/config.rs
//
// Sentinel Console - Runtime configuration
//
// The host page injects settings via meta tags, e.g.
//   <meta name="sentinel:tick-ms" content="500">
//   <meta name="sentinel:alert-probability" content="0.4">
//   <meta name="sentinel:seed" content="1337">
//

use opskit::sim::SimulationConfig;

/// Effective console settings after reading the host page.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ConsoleConfig {
    pub sim: SimulationConfig,
    /// Fixed RNG seed for demo reproducibility. Entropy when absent.
    pub seed: Option<u64>,
}

impl Default for ConsoleConfig {
    fn default() -> Self {
        Self {
            sim: SimulationConfig::default(),
            seed: None,
        }
    }
}

/// Read configuration from the page's `sentinel:*` meta tags. Bad or
/// missing values fall back to defaults with a console warning.
pub fn from_meta_tags() -> ConsoleConfig {
    let mut config = ConsoleConfig::default();

    if let Some(value) = meta_content("sentinel:tick-ms") {
        match value.parse() {
            Ok(ms) => config.sim.tick_interval_ms = ms,
            Err(_) => log::warn!("Ignoring bad sentinel:tick-ms value {:?}", value),
        }
    }

    if let Some(value) = meta_content("sentinel:alert-probability") {
        match value.parse() {
            Ok(p) => config.sim.alert_probability = p,
            Err(_) => log::warn!("Ignoring bad sentinel:alert-probability value {:?}", value),
        }
    }

    if let Some(value) = meta_content("sentinel:seed") {
        match value.parse() {
            Ok(seed) => config.seed = Some(seed),
            Err(_) => log::warn!("Ignoring bad sentinel:seed value {:?}", value),
        }
    }

    if let Err(err) = config.sim.validate() {
        log::warn!("Ignoring injected simulation settings: {}", err);
        config.sim = SimulationConfig::default();
    }

    config
}

fn meta_content(name: &str) -> Option<String> {
    leptos::document()
        .query_selector(&format!("meta[name='{}']", name))
        .ok()
        .flatten()
        .and_then(|tag| tag.get_attribute("content"))
}
