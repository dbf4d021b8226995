//! Minimal TOML parser for the watch configuration
//!
//! Handles only the subset `watch.toml` uses, without allocating.
//!
//! Supported features:
//! - `[section]` headers (`clock`, `alarm`, `wake`)
//! - `key = value` pairs (string, integer, boolean)
//! - Comments (`# ...`), including trailing ones
//!
//! NOT supported:
//! - Arrays, inline tables, dotted keys
//! - Multi-line strings, escapes inside strings
//!
//! Keys that are missing keep their defaults. Unknown sections and keys
//! are rejected so typos do not go unnoticed.

use super::types::{AlarmConfig, ClockConfig, WakeConfig, WatchConfig};
use crate::time::ClockStyle;
use crate::traits::VibePattern;

/// Parse error
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ParseError {
    /// Unknown or malformed section header
    InvalidSection,
    /// Key not valid in its section
    UnknownKey,
    /// Value has the wrong type or is out of range
    InvalidValue,
    /// Line is neither a header nor `key = value`
    MalformedLine,
}

/// Current parsing context
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Section {
    Root,
    Clock,
    Alarm,
    Wake,
}

/// Parse TOML configuration into WatchConfig
pub fn parse_config(input: &str) -> Result<WatchConfig, ParseError> {
    let mut config = WatchConfig::default();
    let mut section = Section::Root;

    for line in input.lines() {
        let line = strip_comment(line).trim();

        // Skip empty lines and comments
        if line.is_empty() {
            continue;
        }

        // Check for section header
        if line.starts_with('[') && line.ends_with(']') {
            section = parse_section_header(&line[1..line.len() - 1])?;
            continue;
        }

        let (key, value) = parse_key_value(line).ok_or(ParseError::MalformedLine)?;
        match section {
            Section::Root => return Err(ParseError::UnknownKey),
            Section::Clock => apply_clock(&mut config.clock, key, value)?,
            Section::Alarm => apply_alarm(&mut config.alarm, key, value)?,
            Section::Wake => apply_wake(&mut config.wake, key, value)?,
        }
    }

    Ok(config)
}

/// Parse section header like "alarm"
fn parse_section_header(header: &str) -> Result<Section, ParseError> {
    match header.trim() {
        "clock" => Ok(Section::Clock),
        "alarm" => Ok(Section::Alarm),
        "wake" => Ok(Section::Wake),
        _ => Err(ParseError::InvalidSection),
    }
}

/// Drop a trailing `# comment` that is not inside a string
fn strip_comment(line: &str) -> &str {
    let mut in_string = false;
    for (i, c) in line.char_indices() {
        match c {
            '"' => in_string = !in_string,
            '#' if !in_string => return &line[..i],
            _ => {}
        }
    }
    line
}

/// Parse "key = value" line
fn parse_key_value(line: &str) -> Option<(&str, &str)> {
    let (key, value) = line.split_once('=')?;
    let key = key.trim();
    let value = value.trim();

    if key.is_empty() || value.is_empty() {
        return None;
    }

    Some((key, value))
}

/// Parse a quoted string value (removes quotes)
fn parse_string(value: &str) -> Result<&str, ParseError> {
    value
        .strip_prefix('"')
        .and_then(|v| v.strip_suffix('"'))
        .ok_or(ParseError::InvalidValue)
}

/// Parse an integer value
fn parse_int<T: core::str::FromStr>(value: &str) -> Result<T, ParseError> {
    value.parse().map_err(|_| ParseError::InvalidValue)
}

/// Parse a boolean value
fn parse_bool(value: &str) -> Result<bool, ParseError> {
    match value {
        "true" => Ok(true),
        "false" => Ok(false),
        _ => Err(ParseError::InvalidValue),
    }
}

fn parse_clock_style(value: &str) -> Result<ClockStyle, ParseError> {
    match parse_string(value)? {
        "24h" => Ok(ClockStyle::TwentyFourHour),
        "12h" => Ok(ClockStyle::TwelveHour),
        _ => Err(ParseError::InvalidValue),
    }
}

fn parse_pattern(value: &str) -> Result<VibePattern, ParseError> {
    match parse_string(value)? {
        "short" => Ok(VibePattern::Short),
        "long" => Ok(VibePattern::Long),
        "double" => Ok(VibePattern::Double),
        _ => Err(ParseError::InvalidValue),
    }
}

fn apply_clock(clock: &mut ClockConfig, key: &str, value: &str) -> Result<(), ParseError> {
    match key {
        "style" => clock.style = parse_clock_style(value)?,
        "utc_offset_minutes" => clock.utc_offset_minutes = parse_int(value)?,
        _ => return Err(ParseError::UnknownKey),
    }
    Ok(())
}

fn apply_alarm(alarm: &mut AlarmConfig, key: &str, value: &str) -> Result<(), ParseError> {
    match key {
        "step_goal" => alarm.step_goal = parse_int(value)?,
        "max_tries" => alarm.max_tries = parse_int(value)?,
        "pulse_interval_s" => alarm.pulse_interval_s = parse_int(value)?,
        "pattern" => alarm.pattern = parse_pattern(value)?,
        _ => return Err(ParseError::UnknownKey),
    }
    Ok(())
}

fn apply_wake(wake: &mut WakeConfig, key: &str, value: &str) -> Result<(), ParseError> {
    match key {
        "enabled" => wake.enabled = parse_bool(value)?,
        "hour" => wake.hour = parse_int(value)?,
        "minute" => wake.minute = parse_int(value)?,
        "second" => wake.second = parse_int(value)?,
        "repeat_daily" => wake.repeat_daily = parse_bool(value)?,
        _ => return Err(ParseError::UnknownKey),
    }
    Ok(())
}
