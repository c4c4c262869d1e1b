//! Duration parsing utilities.

use anyhow::Context;
use std::time::Duration;

/// Parse a duration string like "1h", "30m", "300s", "300" into a [`Duration`].
/// Supports:
/// - Plain numbers (interpreted as seconds): "300"
/// - Seconds suffix: "300s"
/// - Minutes suffix: "30m"
/// - Hours suffix: "1h"
pub fn parse_duration(s: &str) -> anyhow::Result<Duration> {
    let s = s.trim();
    if s.is_empty() {
        anyhow::bail!("Empty duration string");
    }

    // Check for suffix
    if let Some(num_str) = s.strip_suffix('h') {
        let hours: u64 = num_str
            .parse()
            .with_context(|| format!("Invalid hours value: {num_str}"))?;
        let secs = hours
            .checked_mul(3600)
            .with_context(|| format!("Duration too large: {s}"))?;
        return Ok(Duration::from_secs(secs));
    }
    if let Some(num_str) = s.strip_suffix('m') {
        let minutes: u64 = num_str
            .parse()
            .with_context(|| format!("Invalid minutes value: {num_str}"))?;
        let secs = minutes
            .checked_mul(60)
            .with_context(|| format!("Duration too large: {s}"))?;
        return Ok(Duration::from_secs(secs));
    }
    if let Some(num_str) = s.strip_suffix('s') {
        let secs: u64 = num_str
            .parse()
            .with_context(|| format!("Invalid seconds value: {num_str}"))?;
        return Ok(Duration::from_secs(secs));
    }

    // No suffix - treat as seconds
    s.parse::<u64>()
        .map(Duration::from_secs)
        .with_context(|| format!("Invalid duration value: {s}"))
}
