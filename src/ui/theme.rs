use ratatui::style::{Color, Modifier, Style};

// ── Palette ─────────────────────────────────────────────────────
pub const TEXT: Color = Color::Rgb(235, 235, 235);
pub const TEXT_DIM: Color = Color::Rgb(130, 130, 130);
pub const HUD_BG: Color = Color::Rgb(6, 6, 6);

// ── Composite styles ────────────────────────────────────────────
pub fn key_hint_style() -> Style {
    Style::default()
        .fg(TEXT)
        .bg(HUD_BG)
        .add_modifier(Modifier::BOLD)
}

pub fn footer_style() -> Style {
    Style::default().fg(TEXT_DIM).bg(HUD_BG)
}
