//! Hour-summary side panel

use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use super::theme::{gauge_bar, share_color, CAB_YELLOW, INFO_DIM, PICKUP_GREEN};
use crate::analysis::HourView;
use crate::domain::HourOfDay;

/// Left-hand panel: how the selected window compares to the whole batch.
pub struct SummaryPanel {
    window: String,
    matched: usize,
    total: usize,
    share_pct: f64,
    midpoint: Option<(f64, f64)>,
    peak: Option<(u8, u32)>,
}

impl SummaryPanel {
    #[must_use]
    pub fn new(view: &HourView, total: usize, hour: HourOfDay) -> Self {
        #[allow(clippy::cast_precision_loss)]
        let share_pct = if total > 0 {
            (view.batch.len() as f64 / total as f64) * 100.0
        } else {
            0.0
        };

        Self {
            window: hour.window_caption(),
            matched: view.batch.len(),
            total,
            share_pct,
            midpoint: view.midpoint.map(|m| (m.lat, m.lon)),
            peak: view.histogram.peak(),
        }
    }

    pub fn render(&self, f: &mut Frame, area: Rect) {
        let share_fg = share_color(self.share_pct);

        let mut lines = vec![
            Line::from(Span::styled(
                format!(" {}", self.window),
                Style::default().fg(CAB_YELLOW).add_modifier(Modifier::BOLD),
            )),
            Line::from(""),
            Line::from(vec![
                Span::styled(" Pickups  ", Style::default().fg(INFO_DIM)),
                Span::styled(format!("{}", self.matched), Style::default().fg(PICKUP_GREEN)),
                Span::styled(format!(" / {}", self.total), Style::default().fg(INFO_DIM)),
            ]),
            Line::from(vec![
                Span::raw(" "),
                Span::styled(gauge_bar(self.share_pct, 12), Style::default().fg(share_fg)),
                Span::styled(format!(" {:.1}%", self.share_pct), Style::default().fg(share_fg)),
            ]),
            Line::from(""),
        ];

        match self.midpoint {
            Some((lat, lon)) => {
                lines.push(Line::from(vec![
                    Span::styled(" Midpoint ", Style::default().fg(INFO_DIM)),
                    Span::styled(format!("{lat:.5}, {lon:.5}"), Style::default().fg(PICKUP_GREEN)),
                ]));
            }
            None => {
                lines.push(Line::from(Span::styled(
                    " Midpoint --",
                    Style::default().fg(INFO_DIM),
                )));
            }
        }

        if let Some((minute, count)) = self.peak {
            lines.push(Line::from(vec![
                Span::styled(" Peak     ", Style::default().fg(INFO_DIM)),
                Span::styled(format!(":{minute:02}"), Style::default().fg(CAB_YELLOW)),
                Span::styled(format!(" ({count} pickups)"), Style::default().fg(INFO_DIM)),
            ]));
        }

        let paragraph = Paragraph::new(lines).block(
            Block::default()
                .borders(Borders::ALL)
                .title("Hour")
                .border_style(Style::default().fg(PICKUP_GREEN)),
        );

        f.render_widget(paragraph, area);
    }
}
