use crate::error::ConfigError;
use crate::types::{Config, Span};
use std::fs;
use std::path::{Path, PathBuf};

/// Default config location: `<config dir>/warpfield/config.json`.
pub fn config_path() -> PathBuf {
    let base = dirs::config_dir().unwrap_or_else(|| PathBuf::from("."));
    base.join("warpfield").join("config.json")
}

/// Read the config at `path`. A missing file yields the defaults.
pub fn read_config(path: &Path) -> Result<Config, ConfigError> {
    if !path.exists() {
        return Ok(Config::default());
    }
    let contents = fs::read_to_string(path).map_err(|source| ConfigError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    serde_json::from_str(&contents).map_err(ConfigError::Parse)
}

/// Persist the config to disk.
pub fn save_config(path: &Path, config: &Config) -> Result<(), ConfigError> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).map_err(|source| ConfigError::Write {
            path: parent.to_path_buf(),
            source,
        })?;
    }
    let json = serde_json::to_string_pretty(config).map_err(ConfigError::Serialize)?;
    fs::write(path, json).map_err(|source| ConfigError::Write {
        path: path.to_path_buf(),
        source,
    })
}

fn invalid(field: &'static str, reason: impl Into<String>) -> ConfigError {
    ConfigError::Invalid {
        field,
        reason: reason.into(),
    }
}

fn check_radius(field: &'static str, span: &Span) -> Result<(), ConfigError> {
    if !span.min.is_finite() || !span.max.is_finite() {
        return Err(invalid(field, "bounds must be finite"));
    }
    if span.min <= 0.0 {
        return Err(invalid(field, format!("min must be positive, got {}", span.min)));
    }
    if span.max <= span.min {
        return Err(invalid(
            field,
            format!("max ({}) must exceed min ({})", span.max, span.min),
        ));
    }
    Ok(())
}

/// Reject values the simulation can't run with.
pub fn validate(config: &Config) -> Result<(), ConfigError> {
    if !config.density.is_finite() || config.density <= 0.0 {
        return Err(invalid("density", format!("must be positive, got {}", config.density)));
    }
    check_radius("spawnRadius", &config.spawn_radius)?;
    check_radius("respawnRadius", &config.respawn_radius)?;
    if !config.base_speed.is_finite() || config.base_speed < 0.0 {
        return Err(invalid("baseSpeed", "must be zero or positive"));
    }
    if !config.speed_falloff.is_finite() || config.speed_falloff <= 0.0 {
        return Err(invalid("speedFalloff", "must be positive"));
    }
    // Stars must be recycled before they reach the viewer.
    if !config.reset_depth.is_finite() || config.reset_depth < 0.0 {
        return Err(invalid("resetDepth", "must be zero or positive"));
    }
    if !config.glow_blur.is_finite() || config.glow_blur < 0.0 {
        return Err(invalid("glowBlur", "must be zero or positive"));
    }
    if config.frames_per_second == 0 {
        return Err(invalid("framesPerSecond", "must be at least 1"));
    }
    Ok(())
}
