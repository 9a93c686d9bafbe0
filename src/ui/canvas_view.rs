use crate::canvas::{PixelCanvas, Rgb};
use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use ratatui::style::{Color, Style};
use ratatui::widgets::Widget;

/// Each terminal cell shows two stacked pixels: the upper half block takes
/// the top pixel as foreground, the cell background is the bottom pixel.
const UPPER_HALF: char = '▀';

/// Pixel size of a terminal area when drawn with half blocks.
pub fn pixel_size(cols: u16, rows: u16) -> (u32, u32) {
    (cols as u32, rows as u32 * 2)
}

/// Blits a `PixelCanvas` into the frame buffer.
pub struct CanvasView<'a> {
    canvas: &'a PixelCanvas,
}

impl<'a> CanvasView<'a> {
    pub fn new(canvas: &'a PixelCanvas) -> Self {
        Self { canvas }
    }
}

fn color(rgb: Rgb) -> Color {
    Color::Rgb(rgb.0, rgb.1, rgb.2)
}

impl Widget for CanvasView<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        for row in 0..area.height {
            for col in 0..area.width {
                let top = self
                    .canvas
                    .pixel(col as u32, row as u32 * 2)
                    .unwrap_or(Rgb::BLACK);
                let bottom = self
                    .canvas
                    .pixel(col as u32, row as u32 * 2 + 1)
                    .unwrap_or(Rgb::BLACK);

                let cell = &mut buf[(area.x + col, area.y + row)];
                cell.set_char(UPPER_HALF);
                cell.set_style(Style::default().fg(color(top)).bg(color(bottom)));
            }
        }
    }
}
