//! Configuration loading
//!
//! Parses the embedded watch.toml. Falls back to built-in defaults if it
//! does not parse (build.rs normally rejects such a file first).

use defmt::*;

use stepwake_core::config::{parse_config, WatchConfig};

/// Parse the embedded configuration, or use defaults
pub fn load_config(source: &str) -> WatchConfig {
    match parse_config(source) {
        Ok(config) => {
            info!("Parsed embedded configuration successfully");
            log_config_summary(&config);
            config
        }
        Err(e) => {
            error!("Failed to parse embedded config: {:?}", e);
            error!("Using built-in defaults");
            WatchConfig::default()
        }
    }
}

/// Log a summary of the loaded configuration
fn log_config_summary(config: &WatchConfig) {
    debug!(
        "  clock: {:?}, UTC offset {} min",
        config.clock.style, config.clock.utc_offset_minutes
    );
    debug!(
        "  alarm: {} steps, {} pulses every {} s ({:?})",
        config.alarm.step_goal,
        config.alarm.max_tries,
        config.alarm.pulse_interval_s,
        config.alarm.pattern
    );
    if config.wake.enabled {
        debug!(
            "  wake: {}:{}:{} (daily: {})",
            config.wake.hour, config.wake.minute, config.wake.second, config.wake.repeat_daily
        );
    } else {
        debug!("  wake: disabled");
    }
}
