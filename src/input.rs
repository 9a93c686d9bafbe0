use crate::driver::StopFlag;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

/// Interactive state the keyboard can change.
#[derive(Debug, Clone)]
pub struct Controls {
    pub stop: StopFlag,
    pub show_hud: bool,
}

impl Controls {
    pub fn new(stop: StopFlag, show_hud: bool) -> Self {
        Self { stop, show_hud }
    }
}

pub fn handle_key(controls: &mut Controls, key: KeyEvent) {
    // Ctrl+C always quits
    if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
        controls.stop.stop();
        return;
    }

    match key.code {
        KeyCode::Char('q') | KeyCode::Esc => controls.stop.stop(),
        KeyCode::Char('h') => controls.show_hud = !controls.show_hud,
        _ => {}
    }
}
