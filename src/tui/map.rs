//! Braille-canvas scatter maps
//!
//! Each panel plots the hour-filtered pickups around a fixed center at a
//! given zoom level. Zoom is the original web-mercator level, converted to
//! a degree span with `360 / 2^zoom`; longitude gets double the latitude
//! span to compensate for terminal cell aspect.

use ratatui::{
    layout::Rect,
    style::Style,
    symbols::Marker,
    text::Line,
    widgets::{
        canvas::{Canvas, Points},
        Block, Borders, Paragraph,
    },
    Frame,
};

use super::theme::{CAB_YELLOW, INFO_DIM, PICKUP_GREEN};
use crate::ride_data::RideData;

/// One map view: a center, a zoom level and a caption.
#[derive(Debug, Clone)]
pub struct MapPanel {
    title: String,
    center_lat: f64,
    center_lon: f64,
    zoom: u8,
}

impl MapPanel {
    #[must_use]
    pub fn new(title: impl Into<String>, center_lat: f64, center_lon: f64, zoom: u8) -> Self {
        Self { title: title.into(), center_lat, center_lon, zoom }
    }

    /// Latitude span shown by this panel, in degrees.
    fn lat_span(&self) -> f64 {
        360.0 / f64::from(1u32 << u32::from(self.zoom.min(20)))
    }

    /// Render the scatter of `batch` around the panel center. An empty
    /// batch renders a placeholder instead of an empty canvas — the
    /// orchestrator skips the visualization rather than crashing.
    pub fn render(&self, f: &mut Frame, area: Rect, batch: &RideData, focused: bool) {
        let border_color = if focused { CAB_YELLOW } else { INFO_DIM };
        let block = Block::default()
            .borders(Borders::ALL)
            .title(self.title.clone())
            .border_style(Style::default().fg(border_color));

        if batch.is_empty() {
            let placeholder = Paragraph::new(vec![
                Line::from(""),
                Line::styled("no pickups in this window", Style::default().fg(INFO_DIM)),
            ])
            .centered()
            .block(block);
            f.render_widget(placeholder, area);
            return;
        }

        let half_lat = self.lat_span() / 2.0;
        let half_lon = self.lat_span(); // 2:1 cell aspect
        let coords: Vec<(f64, f64)> = batch.records().iter().map(|r| (r.lon, r.lat)).collect();
        let (center_lon, center_lat) = (self.center_lon, self.center_lat);

        let canvas = Canvas::default()
            .block(block)
            .marker(Marker::Braille)
            .x_bounds([center_lon - half_lon, center_lon + half_lon])
            .y_bounds([center_lat - half_lat, center_lat + half_lat])
            .paint(|ctx| {
                ctx.draw(&Points { coords: &coords, color: PICKUP_GREEN });
                // Crosshair on the panel center
                ctx.print(center_lon, center_lat, Line::styled("+", Style::default().fg(CAB_YELLOW)));
            });

        f.render_widget(canvas, area);
    }
}
