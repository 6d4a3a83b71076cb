//! Minute-of-hour histogram panel
//!
//! Sparkline over the 60 fixed buckets, one column per minute where the
//! terminal allows it, with a caption summarizing total and peak.

use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::Style,
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Sparkline},
    Frame,
};

use super::theme::{CAB_YELLOW, INFO_DIM, PICKUP_GREEN};
use crate::analysis::MinuteHistogram;
use crate::domain::HourOfDay;

pub struct HistogramPanel;

impl HistogramPanel {
    pub fn render(f: &mut Frame, area: Rect, histogram: &MinuteHistogram, hour: HourOfDay) {
        let block = Block::default()
            .borders(Borders::ALL)
            .title(format!("Pickups per minute {}", hour.window_caption()))
            .border_style(Style::default().fg(PICKUP_GREEN));
        let inner = block.inner(area);
        f.render_widget(block, area);

        let rows = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Length(1), Constraint::Min(0)])
            .split(inner);

        // Caption: totals and the busiest minute
        let caption = match histogram.peak() {
            Some((minute, count)) => Line::from(vec![
                Span::styled(" total ", Style::default().fg(INFO_DIM)),
                Span::styled(format!("{}", histogram.total()), Style::default().fg(PICKUP_GREEN)),
                Span::styled("  peak ", Style::default().fg(INFO_DIM)),
                Span::styled(
                    format!("{}:{minute:02}", hour.get()),
                    Style::default().fg(CAB_YELLOW),
                ),
                Span::styled(format!(" ({count})"), Style::default().fg(INFO_DIM)),
            ]),
            None => Line::from(Span::styled(
                " no pickups in this window",
                Style::default().fg(INFO_DIM),
            )),
        };
        f.render_widget(Paragraph::new(caption), rows[0]);

        let data: Vec<u64> = histogram.buckets().iter().map(|&c| u64::from(c)).collect();
        let sparkline = Sparkline::default()
            .data(&data)
            .style(Style::default().fg(PICKUP_GREEN));
        f.render_widget(sparkline, rows[1]);
    }
}
