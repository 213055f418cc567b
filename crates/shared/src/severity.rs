//! Three-tier classification used to color severities, temperatures and confidences.
//!
//! Each scale has its own thresholds; they must not be folded into one function.

pub const MIN_SEVERITY: u8 = 0;
pub const MAX_SEVERITY: u8 = 10;
pub const BASELINE_TEMPERATURE: f64 = 36.6;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tier {
    High,
    Medium,
    Low,
}

/// Slider severity: ≥7 high, ≥4 medium.
pub fn symptom_tier(value: i64) -> Tier {
    if value >= 7 {
        Tier::High
    } else if value >= 4 {
        Tier::Medium
    } else {
        Tier::Low
    }
}

/// Server-computed overall severity, same cut points as the sliders but fractional.
pub fn overall_tier(severity: f64) -> Tier {
    if severity >= 7.0 {
        Tier::High
    } else if severity >= 4.0 {
        Tier::Medium
    } else {
        Tier::Low
    }
}

/// Body temperature in °C: ≥38.5 high, ≥37.5 medium.
pub fn temperature_tier(celsius: f64) -> Tier {
    if celsius >= 38.5 {
        Tier::High
    } else if celsius >= 37.5 {
        Tier::Medium
    } else {
        Tier::Low
    }
}

/// Diagnosis confidence in percent: ≥70 high, ≥40 medium.
pub fn confidence_tier(percent: f64) -> Tier {
    if percent >= 70.0 {
        Tier::High
    } else if percent >= 40.0 {
        Tier::Medium
    } else {
        Tier::Low
    }
}

impl Tier {
    pub fn as_str(self) -> &'static str {
        match self {
            Tier::High => "high",
            Tier::Medium => "medium",
            Tier::Low => "low",
        }
    }
}

/// Browser-style integer parse: leading sign and digits are taken, anything after is ignored,
/// and input without leading digits yields `None`.
pub fn parse_leading_int(raw: &str) -> Option<i64> {
    let trimmed = raw.trim_start();
    let (negative, digits) = match trimmed.as_bytes().first() {
        Some(b'-') => (true, &trimmed[1..]),
        Some(b'+') => (false, &trimmed[1..]),
        _ => (false, trimmed),
    };
    let end = digits
        .char_indices()
        .find(|(_, c)| !c.is_ascii_digit())
        .map(|(idx, _)| idx)
        .unwrap_or(digits.len());
    let value: i64 = digits[..end].parse().ok()?;
    Some(if negative { -value } else { value })
}

/// Slider reading clamped to the 0–10 range; malformed input reads as 0.
pub fn parse_severity(raw: &str) -> u8 {
    parse_leading_int(raw)
        .map(|value| value.clamp(i64::from(MIN_SEVERITY), i64::from(MAX_SEVERITY)) as u8)
        .unwrap_or(MIN_SEVERITY)
}

/// Temperature field reading; malformed or non-finite input falls back to the baseline.
pub fn parse_temperature(raw: &str) -> f64 {
    match raw.trim().parse::<f64>() {
        Ok(value) if value.is_finite() => value,
        _ => BASELINE_TEMPERATURE,
    }
}
