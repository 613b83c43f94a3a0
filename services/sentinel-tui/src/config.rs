// services/sentinel-tui/src/config.rs
//
// Simulation settings from file and environment

use anyhow::Result;
use config::{Config, File};

use opskit::sim::SimulationConfig;

/// Load simulation settings. Keys missing from the file fall back to
/// the compiled-in defaults, `SENTINEL_*` environment variables win
/// over the file.
pub fn load_simulation(path: Option<&str>) -> Result<SimulationConfig> {
    let mut builder = Config::builder();

    if let Some(path) = path {
        builder = builder.add_source(File::with_name(path));
    }

    let config = builder
        .add_source(config::Environment::with_prefix("SENTINEL"))
        .build()?;

    let sim: SimulationConfig = config.try_deserialize()?;
    sim.validate()?;
    Ok(sim)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_without_file() {
        let sim = load_simulation(None).unwrap();
        assert_eq!(sim, SimulationConfig::default());
    }
}
