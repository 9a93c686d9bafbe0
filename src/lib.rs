//! Warp-speed starfield for the terminal, plus a precache manifest checker.

pub mod canvas;
pub mod cli;
pub mod config;
pub mod driver;
pub mod error;
pub mod host;
pub mod input;
pub mod logging;
pub mod manifest;
pub mod random;
pub mod renderer;
pub mod starfield;
pub mod types;
pub mod ui;
