//! Colors the controller paints onto labels, summary cards and the severity bar.

use shared::severity::Tier;

pub const ALERT_RED: &str = "#ef4444";
pub const WARNING_AMBER: &str = "#f59e0b";
/// Resting color of slider value labels.
pub const SLIDER_BASELINE_BLUE: &str = "#2563eb";
/// Resting color of summary cards.
pub const SUMMARY_OK_GREEN: &str = "#10b981";

pub fn slider_label_color(tier: Tier) -> &'static str {
    match tier {
        Tier::High => ALERT_RED,
        Tier::Medium => WARNING_AMBER,
        Tier::Low => SLIDER_BASELINE_BLUE,
    }
}

pub fn summary_color(tier: Tier) -> &'static str {
    match tier {
        Tier::High => ALERT_RED,
        Tier::Medium => WARNING_AMBER,
        Tier::Low => SUMMARY_OK_GREEN,
    }
}
