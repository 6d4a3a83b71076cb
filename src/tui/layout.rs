//! Responsive layout engine for the TUI.
//!
//! Adapts the layout based on terminal dimensions so the dashboard stays
//! usable from minimal terminals up to full screen.

use ratatui::layout::Constraint;

// Width breakpoints
const WIDTH_SINGLE_MAP: u16 = 90; // Below this: one map instead of four
const WIDTH_NARROW: u16 = 120; // Below this: drop the summary side panel

// Height breakpoints
const HEIGHT_MINIMAL: u16 = 14; // Below this: histogram only
const HEIGHT_COMPACT: u16 = 24; // Below this: shrink the histogram row

/// Terminal size classification for layout decisions.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum TerminalSize {
    /// Height < 14: histogram + header only
    Minimal,
    /// Height 14-24: maps with a shorter histogram row
    Compact,
    /// Height > 24: full layout
    Normal,
}

/// Computed layout configuration based on terminal dimensions.
#[derive(Debug, Clone)]
pub struct LayoutConfig {
    /// Terminal size classification
    pub size: TerminalSize,

    /// Whether to render the map row at all
    pub show_maps: bool,

    /// Show all four maps side by side; otherwise only the focused one
    pub show_all_maps: bool,

    /// Whether to show the hour-summary side panel
    pub show_summary_panel: bool,

    /// Rows reserved for the histogram panel
    pub histogram_height: u16,
}

impl Default for LayoutConfig {
    fn default() -> Self {
        Self {
            size: TerminalSize::Normal,
            show_maps: true,
            show_all_maps: true,
            show_summary_panel: true,
            histogram_height: 9,
        }
    }
}

impl LayoutConfig {
    /// Constraints for the map row: equal split across visible maps.
    #[must_use]
    pub fn map_constraints(&self) -> Vec<Constraint> {
        if self.show_all_maps {
            vec![Constraint::Ratio(1, 4); 4]
        } else {
            vec![Constraint::Ratio(1, 1)]
        }
    }
}

/// Compute layout configuration based on terminal dimensions.
///
/// # Breakpoints
///
/// | Terminal Size | Behavior |
/// |---------------|----------|
/// | Width < 90    | Show only the focused map |
/// | Width 90-120  | All maps, no summary side panel |
/// | Width > 120   | Full layout |
/// | Height < 14   | Histogram only (no map row) |
/// | Height 14-24  | Shorter histogram row |
#[must_use]
pub fn compute_layout(width: u16, height: u16) -> LayoutConfig {
    let mut config = LayoutConfig::default();

    if width < WIDTH_SINGLE_MAP {
        config.show_all_maps = false;
        config.show_summary_panel = false;
    } else if width <= WIDTH_NARROW {
        config.show_summary_panel = false;
    }

    if height < HEIGHT_MINIMAL {
        config.size = TerminalSize::Minimal;
        config.show_maps = false;
        config.histogram_height = 6;
    } else if height <= HEIGHT_COMPACT {
        config.size = TerminalSize::Compact;
        config.histogram_height = 7;
    }

    config
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normal_layout() {
        let config = compute_layout(160, 40);
        assert_eq!(config.size, TerminalSize::Normal);
        assert!(config.show_maps);
        assert!(config.show_all_maps);
        assert!(config.show_summary_panel);
        assert_eq!(config.map_constraints().len(), 4);
    }

    #[test]
    fn test_narrow_drops_summary_panel() {
        let config = compute_layout(100, 40);
        assert!(config.show_all_maps);
        assert!(!config.show_summary_panel);
    }

    #[test]
    fn test_single_map_below_breakpoint() {
        let config = compute_layout(70, 40);
        assert!(!config.show_all_maps);
        assert_eq!(config.map_constraints().len(), 1);
    }

    #[test]
    fn test_minimal_height_hides_maps() {
        let config = compute_layout(160, 10);
        assert_eq!(config.size, TerminalSize::Minimal);
        assert!(!config.show_maps);
    }

    #[test]
    fn test_compact_height() {
        let config = compute_layout(160, 20);
        assert_eq!(config.size, TerminalSize::Compact);
        assert!(config.show_maps);
        assert!(config.histogram_height < LayoutConfig::default().histogram_height);
    }
}
