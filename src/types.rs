use serde::{Deserialize, Serialize};

/// A single particle in the field. Position is in pixel space with the
/// origin at the top-left; `z` is depth, larger is farther away.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Star {
    pub x: f64,
    pub y: f64,
    pub z: f64,
    pub radius: f64,
}

/// Size of the drawing surface in pixels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Viewport {
    pub width: u32,
    pub height: u32,
}

impl Viewport {
    pub fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    pub fn center(&self) -> (f64, f64) {
        (self.width as f64 / 2.0, self.height as f64 / 2.0)
    }
}

impl std::fmt::Display for Viewport {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}x{}", self.width, self.height)
    }
}

/// Half-open range `[min, max)` a uniform sample is drawn from.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Span {
    pub min: f64,
    pub max: f64,
}

impl Span {
    pub const fn new(min: f64, max: f64) -> Self {
        Self { min, max }
    }

    /// Map a unit sample `u ∈ [0, 1)` into the range.
    pub fn lerp(&self, u: f64) -> f64 {
        self.min + u * (self.max - self.min)
    }
}

/// Tunables of the field simulation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FieldParams {
    /// Stars per pixel of viewport width.
    pub density: f64,
    /// Radius range for stars created by setup.
    pub spawn_radius: Span,
    /// Radius range for stars recycled after passing the viewer.
    pub respawn_radius: Span,
    pub base_speed: f64,
    /// Distance from center that adds one unit of speed.
    pub speed_falloff: f64,
    /// A star at or below this depth is recycled.
    pub reset_depth: f64,
    /// Glow blur radius in pixels applied to every star.
    pub glow_blur: f64,
}

impl Default for FieldParams {
    fn default() -> Self {
        Self {
            density: 0.05,
            spawn_radius: Span::new(0.2, 0.6),
            respawn_radius: Span::new(0.2, 1.0),
            base_speed: 5.0,
            speed_falloff: 480.0,
            reset_depth: 1.0,
            glow_blur: 6.0,
        }
    }
}

/// Persisted settings. Every field is optional on disk.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Config {
    pub density: f64,
    pub spawn_radius: Span,
    pub respawn_radius: Span,
    pub base_speed: f64,
    pub speed_falloff: f64,
    pub reset_depth: f64,
    pub glow_blur: f64,
    pub frames_per_second: u32,
    /// Fixed seed for a reproducible field; random when absent.
    pub seed: Option<u64>,
    pub show_hud: bool,
    pub log_level: Option<String>,
}

impl Default for Config {
    fn default() -> Self {
        let params = FieldParams::default();
        Self {
            density: params.density,
            spawn_radius: params.spawn_radius,
            respawn_radius: params.respawn_radius,
            base_speed: params.base_speed,
            speed_falloff: params.speed_falloff,
            reset_depth: params.reset_depth,
            glow_blur: params.glow_blur,
            frames_per_second: 60,
            seed: None,
            show_hud: true,
            log_level: None,
        }
    }
}

impl Config {
    pub fn field_params(&self) -> FieldParams {
        FieldParams {
            density: self.density,
            spawn_radius: self.spawn_radius,
            respawn_radius: self.respawn_radius,
            base_speed: self.base_speed,
            speed_falloff: self.speed_falloff,
            reset_depth: self.reset_depth,
            glow_blur: self.glow_blur,
        }
    }
}

/// Counters shown alongside a presented frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct FrameStats {
    pub frame: u64,
    pub stars: usize,
    pub viewport: Viewport,
}
