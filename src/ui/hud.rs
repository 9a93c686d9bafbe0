use super::theme;
use crate::types::FrameStats;
use ratatui::layout::Rect;
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;
use ratatui::Frame;

/// Bottom status line: key hints on the left, counters on the right.
pub fn draw_hud(f: &mut Frame, area: Rect, stats: FrameStats) {
    if area.height == 0 {
        return;
    }
    let line_area = Rect::new(area.x, area.y + area.height - 1, area.width, 1);

    let counters = format!(
        "{} stars  {}  frame {} ",
        stats.stars, stats.viewport, stats.frame
    );
    let hints: [(&str, &str); 2] = [(" [q]", " Quit  "), ("[h]", " Hide HUD  ")];

    let mut spans = Vec::new();
    let mut used = 0usize;
    for (key, label) in hints {
        used += key.chars().count() + label.chars().count();
        spans.push(Span::styled(key, theme::key_hint_style()));
        spans.push(Span::styled(label, theme::footer_style()));
    }
    let pad = (line_area.width as usize).saturating_sub(used + counters.chars().count());
    spans.push(Span::styled(" ".repeat(pad), theme::footer_style()));
    spans.push(Span::styled(counters, theme::footer_style()));

    f.render_widget(Paragraph::new(Line::from(spans)), line_area);
}
