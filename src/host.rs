use crate::canvas::PixelCanvas;
use crate::driver::FrameHost;
use crate::error::Error;
use crate::input::{self, Controls};
use crate::types::{FrameStats, Viewport};
use crate::ui::{self, canvas_view::pixel_size};
use crossterm::{
    event::{self, Event, KeyEventKind},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io::{self, Stdout};
use std::time::Duration;
use tokio::time::{interval, Interval, MissedTickBehavior};

/// Full-screen terminal that shows the canvas and paces the animation.
pub struct TerminalHost {
    terminal: Terminal<CrosstermBackend<Stdout>>,
    ticker: Interval,
    controls: Controls,
}

impl TerminalHost {
    /// Switch the terminal to raw mode on the alternate screen.
    pub fn enter(frames_per_second: u32, controls: Controls) -> io::Result<Self> {
        enable_raw_mode()?;
        let mut stdout = io::stdout();
        execute!(stdout, EnterAlternateScreen)?;
        let backend = CrosstermBackend::new(stdout);
        let mut terminal = Terminal::new(backend)?;
        terminal.hide_cursor()?;
        terminal.clear()?;

        let period = Duration::from_secs_f64(1.0 / frames_per_second.max(1) as f64);
        let mut ticker = interval(period);
        ticker.set_missed_tick_behavior(MissedTickBehavior::Skip);

        Ok(Self {
            terminal,
            ticker,
            controls,
        })
    }

    /// Current drawable size in half-block pixels.
    pub fn viewport(&self) -> io::Result<Viewport> {
        let size = self.terminal.size()?;
        let (width, height) = pixel_size(size.width, size.height);
        Ok(Viewport::new(width, height))
    }

    /// Give the terminal back to the shell.
    pub fn restore(&mut self) -> io::Result<()> {
        disable_raw_mode()?;
        execute!(self.terminal.backend_mut(), LeaveAlternateScreen)?;
        self.terminal.show_cursor()
    }
}

impl FrameHost<PixelCanvas> for TerminalHost {
    fn present(&mut self, canvas: &PixelCanvas, stats: FrameStats) -> Result<(), Error> {
        let show_hud = self.controls.show_hud;
        self.terminal.draw(|f| ui::draw(f, canvas, stats, show_hud))?;
        Ok(())
    }

    async fn next_frame(&mut self) -> Result<Option<Viewport>, Error> {
        self.ticker.tick().await;

        let mut resized = None;
        while event::poll(Duration::ZERO)? {
            match event::read()? {
                // Only handle key press events, ignore release/repeat
                Event::Key(key) if key.kind == KeyEventKind::Press => {
                    input::handle_key(&mut self.controls, key);
                }
                Event::Resize(cols, rows) => {
                    let (width, height) = pixel_size(cols, rows);
                    resized = Some(Viewport::new(width, height));
                }
                _ => {}
            }
        }
        Ok(resized)
    }
}
