pub mod canvas_view;
pub mod hud;
pub mod theme;

use crate::canvas::PixelCanvas;
use crate::types::FrameStats;
use canvas_view::CanvasView;
use ratatui::Frame;

/// Master render function: the star canvas fills the screen, the HUD sits
/// on top of its last row.
pub fn draw(f: &mut Frame, canvas: &PixelCanvas, stats: FrameStats, show_hud: bool) {
    let area = f.area();

    f.render_widget(CanvasView::new(canvas), area);

    if show_hud {
        hud::draw_hud(f, area, stats);
    }
}
