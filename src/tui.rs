//! # Terminal User Interface (TUI)
//!
//! Interactive terminal dashboard using `ratatui`.
//!
//! ## Panels
//!
//! - **Maps** - city overview plus the three reference places, scatter of
//!   the hour-filtered pickups
//! - **Histogram** - pickups per minute inside the selected window
//! - **Summary** - counts, share gauge, midpoint, peak minute
//!
//! ## View Modes
//!
//! - **Dashboard** - all panels (default)
//! - **Help** - keyboard overlay
//!
//! The hour selector drives everything: on every change the pure pipeline
//! (filter → histogram → midpoint) is re-invoked through the [`HourlyCache`]
//! and the panels are re-rendered. Empty windows render placeholders, never
//! errors.

// TUI rendering intentionally uses precision-losing casts for clarity
#![allow(clippy::cast_precision_loss, clippy::too_many_lines)]

use anyhow::Result;
use crossterm::{
    event::{self, Event, KeyCode, KeyEventKind},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{
    backend::CrosstermBackend,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Terminal,
};
use std::io;
use std::time::Duration;

pub mod layout;

mod histogram;
mod map;
mod summary;
mod theme;

use histogram::HistogramPanel;
use layout::compute_layout;
use map::MapPanel;
use summary::SummaryPanel;
use theme::{ALERT_RED, BACKGROUND, CAB_YELLOW, INFO_DIM, PICKUP_GREEN};

use crate::analysis::{midpoint, HourView, HourlyCache, Midpoint};
use crate::domain::HourOfDay;
use crate::places::{CITY_ZOOM, REFERENCE_PLACES};
use crate::ride_data::RideData;

// =============================================================================
// STYLE CONSTANTS
// =============================================================================

const STYLE_HEADING: Style = Style::new().fg(CAB_YELLOW).add_modifier(Modifier::BOLD);
const STYLE_DIM: Style = Style::new().fg(INFO_DIM);
const STYLE_KEY: Style = Style::new().fg(CAB_YELLOW);
const STYLE_VALUE: Style = Style::new().fg(PICKUP_GREEN);

/// City overview plus three reference places.
const MAP_COUNT: usize = 4;

/// Current view mode determines what's displayed and how keys are handled
#[derive(Debug, Clone, Copy, PartialEq)]
enum ViewMode {
    /// Main view: maps, histogram, summary
    Dashboard,
    /// Help overlay with keyboard shortcuts
    Help,
}

// =============================================================================
// APP
// =============================================================================

/// TUI application over one immutable session batch.
pub struct App {
    /// Session batch (immutable after load)
    data: RideData,
    /// Per-hour memoization of the pure pipeline
    cache: HourlyCache,
    /// Pipeline results for the selected hour
    current: HourView,
    /// Whole-batch midpoint centering the city map (`None` for an empty batch)
    city_center: Option<Midpoint>,

    // UI state
    hour: HourOfDay,
    /// Which map is focused: 0 = city, 1..=3 = reference places
    focus: usize,
    view_mode: ViewMode,
    should_quit: bool,
}

impl App {
    #[must_use]
    pub fn new(data: RideData, hour: HourOfDay) -> Self {
        let city_center = midpoint(&data).ok();
        let mut cache = HourlyCache::new();
        let current = cache.view(&data, hour).clone();

        Self {
            data,
            cache,
            current,
            city_center,
            hour,
            focus: 0,
            view_mode: ViewMode::Dashboard,
            should_quit: false,
        }
    }

    /// Re-run the pipeline after a selector change (cache-backed).
    fn select_hour(&mut self, hour: HourOfDay) {
        self.hour = hour;
        self.current = self.cache.view(&self.data, hour).clone();
    }

    /// Handle keyboard input
    fn handle_key(&mut self, key: KeyCode) {
        match self.view_mode {
            ViewMode::Dashboard => match key {
                KeyCode::Char('q' | 'Q') => self.should_quit = true,
                KeyCode::Left | KeyCode::Char('h') => self.select_hour(self.hour.prev()),
                KeyCode::Right | KeyCode::Char('l') => self.select_hour(self.hour.next()),
                KeyCode::Tab | KeyCode::Char('m' | 'M') => {
                    self.focus = (self.focus + 1) % MAP_COUNT;
                }
                KeyCode::Char('?') => self.view_mode = ViewMode::Help,
                _ => {}
            },
            // Any key closes help
            ViewMode::Help => self.view_mode = ViewMode::Dashboard,
        }
    }

    /// Map panels in display order: city overview first, then the fixed
    /// reference places.
    fn map_panels(&self) -> Vec<MapPanel> {
        // Fall back to the central railway station when the batch is empty
        let city = self.city_center.map_or(
            (REFERENCE_PLACES[1].lat, REFERENCE_PLACES[1].lon),
            |m| (m.lat, m.lon),
        );

        let mut panels = vec![MapPanel::new(
            format!("Bhopal City {}", self.hour.window_caption()),
            city.0,
            city.1,
            CITY_ZOOM,
        )];
        for place in REFERENCE_PLACES {
            panels.push(MapPanel::new(place.name, place.lat, place.lon, place.zoom));
        }
        panels
    }

    fn render_header(&self, f: &mut ratatui::Frame, area: Rect) {
        let header = Paragraph::new(vec![Line::from(vec![
            Span::styled("RIDEHUD", STYLE_HEADING),
            Span::styled(" | ", STYLE_DIM),
            Span::styled(format!("{} records", self.data.len()), STYLE_VALUE),
            Span::styled(" | ", STYLE_DIM),
            Span::styled(self.hour.window_caption(), Style::new().fg(CAB_YELLOW)),
            Span::styled(" | ", STYLE_DIM),
            Span::styled(format!("cache {}/24", self.cache.populated_hours()), STYLE_DIM),
        ])])
        .block(Block::default().borders(Borders::ALL).border_style(Style::new().fg(PICKUP_GREEN)));
        f.render_widget(header, area);
    }

    fn render_status_bar(&self, f: &mut ratatui::Frame, area: Rect) {
        let status_line = Line::from(vec![
            Span::styled("←/→", STYLE_KEY),
            Span::styled(":Hour ", STYLE_DIM),
            Span::styled("Tab", STYLE_KEY),
            Span::styled(":Focus map ", STYLE_DIM),
            Span::styled("?", STYLE_KEY),
            Span::styled(":Help ", STYLE_DIM),
            Span::styled("Q", STYLE_KEY),
            Span::styled(":Quit ", STYLE_DIM),
            if self.current.batch.is_empty() {
                Span::styled("[Empty window]", Style::new().fg(ALERT_RED))
            } else {
                Span::styled("[Ready]", Style::new().fg(PICKUP_GREEN))
            },
        ]);

        let status = Paragraph::new(vec![status_line]).block(
            Block::default().borders(Borders::ALL).border_style(Style::default().fg(PICKUP_GREEN)),
        );
        f.render_widget(status, area);
    }

    /// Run the TUI event loop
    ///
    /// # Errors
    /// Returns an error if terminal setup or rendering fails
    pub fn run(mut self) -> Result<()> {
        // Setup terminal
        enable_raw_mode()?;
        let mut stdout = io::stdout();
        execute!(stdout, EnterAlternateScreen)?;
        let backend = CrosstermBackend::new(stdout);
        let mut terminal = Terminal::new(backend)?;

        // Main loop
        loop {
            terminal.draw(|f| {
                let config = compute_layout(f.area().width, f.area().height);

                let outer = Layout::default()
                    .direction(Direction::Vertical)
                    .constraints([
                        Constraint::Length(3), // Header
                        Constraint::Min(0),    // Maps
                        Constraint::Length(config.histogram_height),
                        Constraint::Length(3), // Status bar
                    ])
                    .split(f.area());

                self.render_header(f, outer[0]);

                // Map row, with an optional summary side panel
                if config.show_maps {
                    let (summary_area, maps_area) = if config.show_summary_panel {
                        let cols = Layout::default()
                            .direction(Direction::Horizontal)
                            .constraints([Constraint::Percentage(20), Constraint::Percentage(80)])
                            .split(outer[1]);
                        (Some(cols[0]), cols[1])
                    } else {
                        (None, outer[1])
                    };

                    if let Some(area) = summary_area {
                        SummaryPanel::new(&self.current, self.data.len(), self.hour)
                            .render(f, area);
                    }

                    let panels = self.map_panels();
                    let map_areas = Layout::default()
                        .direction(Direction::Horizontal)
                        .constraints(config.map_constraints())
                        .split(maps_area);

                    if config.show_all_maps {
                        for (idx, panel) in panels.iter().enumerate() {
                            panel.render(f, map_areas[idx], &self.current.batch, idx == self.focus);
                        }
                    } else {
                        panels[self.focus].render(f, map_areas[0], &self.current.batch, true);
                    }
                }

                HistogramPanel::render(f, outer[2], &self.current.histogram, self.hour);
                self.render_status_bar(f, outer[3]);

                if self.view_mode == ViewMode::Help {
                    render_help_overlay(f, f.area());
                }
            })?;

            // Handle input
            if event::poll(Duration::from_millis(100))? {
                if let Event::Key(key) = event::read()? {
                    if key.kind == KeyEventKind::Press {
                        self.handle_key(key.code);
                    }
                }
            }

            if self.should_quit {
                break;
            }
        }

        // Cleanup terminal
        disable_raw_mode()?;
        execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
        terminal.show_cursor()?;

        Ok(())
    }
}

/// Launch the dashboard over a loaded batch.
///
/// # Errors
/// Returns an error if terminal setup or rendering fails
pub fn run(data: RideData, hour: HourOfDay) -> Result<()> {
    App::new(data, hour).run()
}

// =============================================================================
// OVERLAYS
// =============================================================================

/// Render the help overlay explaining panels and keyboard shortcuts
fn render_help_overlay(f: &mut ratatui::Frame, area: Rect) {
    let popup_area = centered_popup(area, 70, 18);

    let help_text = vec![
        Line::from(""),
        Line::from(Span::styled("  What You're Looking At", STYLE_HEADING)),
        Line::from(Span::styled(
            "  Each map plots the pickups of the selected hour window around a",
            STYLE_DIM,
        )),
        Line::from(Span::styled(
            "  fixed center: the whole city, the airport and two rail stations.",
            STYLE_DIM,
        )),
        Line::from(Span::styled(
            "  The sparkline below breaks the same window down per minute.",
            STYLE_DIM,
        )),
        Line::from(""),
        Line::from(Span::styled("  Keys", STYLE_HEADING)),
        Line::from(vec![
            Span::styled("  ←/→", STYLE_KEY),
            Span::styled(" Change hour (wraps at midnight)", STYLE_DIM),
        ]),
        Line::from(vec![
            Span::styled("  Tab", STYLE_KEY),
            Span::styled(" Focus the next map (the focused one fills narrow terminals)", STYLE_DIM),
        ]),
        Line::from(vec![
            Span::styled("  ?", STYLE_KEY),
            Span::styled(" This overlay   ", STYLE_DIM),
            Span::styled("Q", STYLE_KEY),
            Span::styled(" Quit", STYLE_DIM),
        ]),
        Line::from(""),
        Line::from(Span::styled("  Press any key to close", STYLE_DIM)),
    ];

    let help_widget = Paragraph::new(help_text).block(
        Block::default()
            .borders(Borders::ALL)
            .title(" Help ")
            .style(Style::new().bg(BACKGROUND).fg(PICKUP_GREEN)),
    );

    f.render_widget(ratatui::widgets::Clear, popup_area);
    f.render_widget(help_widget, popup_area);
}

/// Create a centered popup area with given width percentage and height in lines
fn centered_popup(area: Rect, width_percent: u16, height_lines: u16) -> Rect {
    let vertical = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Fill(1), Constraint::Length(height_lines), Constraint::Fill(1)])
        .split(area);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - width_percent) / 2),
            Constraint::Percentage(width_percent),
            Constraint::Percentage((100 - width_percent) / 2),
        ])
        .split(vertical[1])[1]
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use crate::ride_data::PickupRecord;

    fn sample_app() -> App {
        let ts = |h: u32, m: u32| {
            NaiveDate::from_ymd_opt(2023, 5, 14)
                .unwrap()
                .and_hms_opt(h, m, 0)
                .unwrap()
        };
        let data = RideData::from_records(vec![
            PickupRecord { timestamp: ts(5, 10), lat: 23.2, lon: 77.4 },
            PickupRecord { timestamp: ts(6, 45), lat: 23.3, lon: 77.44 },
        ]);
        App::new(data, HourOfDay::new(5).unwrap())
    }

    #[test]
    fn test_hour_keys_rerun_pipeline() {
        let mut app = sample_app();
        assert_eq!(app.current.batch.len(), 1);

        app.handle_key(KeyCode::Right);
        assert_eq!(app.hour.get(), 6);
        assert_eq!(app.current.batch.len(), 1);

        app.handle_key(KeyCode::Right);
        assert_eq!(app.hour.get(), 7);
        assert!(app.current.batch.is_empty());

        // Three distinct hours touched, all memoized
        assert_eq!(app.cache.populated_hours(), 3);
    }

    #[test]
    fn test_hour_wraps_at_midnight() {
        let mut app = sample_app();
        for _ in 0..19 {
            app.handle_key(KeyCode::Right);
        }
        assert_eq!(app.hour.get(), 0);
        app.handle_key(KeyCode::Left);
        assert_eq!(app.hour.get(), 23);
    }

    #[test]
    fn test_focus_cycles_all_maps() {
        let mut app = sample_app();
        for expected in [1, 2, 3, 0] {
            app.handle_key(KeyCode::Tab);
            assert_eq!(app.focus, expected);
        }
    }

    #[test]
    fn test_help_opens_and_any_key_closes() {
        let mut app = sample_app();
        app.handle_key(KeyCode::Char('?'));
        assert_eq!(app.view_mode, ViewMode::Help);
        app.handle_key(KeyCode::Char('x'));
        assert_eq!(app.view_mode, ViewMode::Dashboard);
    }

    #[test]
    fn test_quit_key() {
        let mut app = sample_app();
        app.handle_key(KeyCode::Char('q'));
        assert!(app.should_quit);
    }

    #[test]
    fn test_map_panels_city_first() {
        let app = sample_app();
        let panels = app.map_panels();
        assert_eq!(panels.len(), MAP_COUNT);
    }
}
