//! TUI color theme
//!
//! Taxi-inspired color scheme for the terminal dashboard.

use ratatui::style::Color;

pub const CAB_YELLOW: Color = Color::Rgb(255, 191, 0);
pub const PICKUP_GREEN: Color = Color::Rgb(0, 220, 90);
pub const ALERT_RED: Color = Color::Rgb(255, 64, 64);
pub const INFO_DIM: Color = Color::Rgb(130, 130, 130);
pub const BACKGROUND: Color = Color::Rgb(12, 12, 16);

/// Color for an hour's share of the day's pickups.
/// - Above 10%: a hot window (yellow)
/// - Above 0%: normal activity (green)
/// - Zero: dimmed
#[must_use]
pub fn share_color(percentage: f64) -> Color {
    if percentage > 10.0 {
        CAB_YELLOW
    } else if percentage > 0.0 {
        PICKUP_GREEN
    } else {
        INFO_DIM
    }
}

/// Fixed-width `▓░` gauge for a percentage in `[0, 100]`.
#[must_use]
pub fn gauge_bar(percentage: f64, width: usize) -> String {
    let clamped = percentage.clamp(0.0, 100.0);
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    let filled = ((clamped / 100.0) * width as f64).round() as usize;
    format!("{}{}", "▓".repeat(filled.min(width)), "░".repeat(width - filled.min(width)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_gauge_bar_bounds() {
        assert_eq!(gauge_bar(0.0, 10), "░░░░░░░░░░");
        assert_eq!(gauge_bar(100.0, 10), "▓▓▓▓▓▓▓▓▓▓");
        assert_eq!(gauge_bar(150.0, 4), "▓▓▓▓");
        assert_eq!(gauge_bar(50.0, 10).chars().count(), 10);
    }

    #[test]
    fn test_share_color_thresholds() {
        assert_eq!(share_color(25.0), CAB_YELLOW);
        assert_eq!(share_color(5.0), PICKUP_GREEN);
        assert_eq!(share_color(0.0), INFO_DIM);
    }
}
