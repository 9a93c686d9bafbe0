//! The field simulation: spawning, recycling, projecting and advancing stars.
//!
//! Everything here is pure math over a `Vec<Star>`; drawing lives in
//! `renderer`, and randomness is always handed in by the caller.

use crate::random::RandomSource;
use crate::types::{FieldParams, Star, Viewport};

/// Screen-space result of projecting a star through the pinhole.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Projected {
    pub x: f64,
    pub y: f64,
    pub radius: f64,
}

/// Central-projection scale for a point at depth `z`: 1 at the viewer,
/// 0.5 at `z == width`, shrinking towards 0 with distance.
pub fn perspective(width: f64, z: f64) -> f64 {
    width / (width + z)
}

/// Number of stars a viewport of the given width carries.
pub fn star_count(width: u32, density: f64) -> usize {
    (width as f64 * density).floor().max(0.0) as usize
}

/// Fixed-size set of stars, rebuilt wholesale on resize.
#[derive(Debug, Clone)]
pub struct StarField {
    stars: Vec<Star>,
    viewport: Viewport,
    params: FieldParams,
}

impl StarField {
    /// Spawn `floor(width * density)` stars spread across the viewport at
    /// random depths in `[0, width)`.
    pub fn setup(viewport: Viewport, params: FieldParams, rng: &mut impl RandomSource) -> Self {
        let w = viewport.width as f64;
        let h = viewport.height as f64;
        let count = star_count(viewport.width, params.density);

        let stars = (0..count)
            .map(|_| Star {
                x: rng.next_unit() * w,
                y: rng.next_unit() * h,
                z: rng.next_unit() * w,
                radius: params.spawn_radius.lerp(rng.next_unit()),
            })
            .collect();

        Self {
            stars,
            viewport,
            params,
        }
    }

    /// Build a field from explicit stars.
    pub fn from_stars(stars: Vec<Star>, viewport: Viewport, params: FieldParams) -> Self {
        Self {
            stars,
            viewport,
            params,
        }
    }

    pub fn stars(&self) -> &[Star] {
        &self.stars
    }

    pub fn len(&self) -> usize {
        self.stars.len()
    }

    pub fn is_empty(&self) -> bool {
        self.stars.is_empty()
    }

    pub fn viewport(&self) -> Viewport {
        self.viewport
    }

    pub fn params(&self) -> &FieldParams {
        &self.params
    }

    /// Where a star lands on screen this frame.
    pub fn project(&self, star: &Star) -> Projected {
        let w = self.viewport.width as f64;
        let (cx, cy) = self.viewport.center();
        let p = perspective(w, star.z);
        Projected {
            x: cx + (star.x - cx) * p,
            y: cy + (star.y - cy) * p,
            radius: star.radius * p * 2.0,
        }
    }

    pub fn projected(&self) -> impl Iterator<Item = Projected> + '_ {
        self.stars.iter().map(move |s| self.project(s))
    }

    /// Advance every star towards the viewer. Stars farther from the center
    /// move faster; any star that reaches `reset_depth` is recycled in the
    /// same pass.
    pub fn update(&mut self, rng: &mut impl RandomSource) {
        let (cx, cy) = self.viewport.center();
        let viewport = self.viewport;
        let params = self.params;

        for star in &mut self.stars {
            let dx = star.x - cx;
            let dy = star.y - cy;
            let dist = (dx * dx + dy * dy).sqrt();

            star.z -= params.base_speed + dist / params.speed_falloff;

            if star.z <= params.reset_depth {
                reset_star(star, viewport, &params, rng);
            }
        }
    }
}

/// Recycle a star that passed the viewer: new position, pushed back to the
/// far plane, with a radius drawn from the wider respawn range.
pub fn reset_star(
    star: &mut Star,
    viewport: Viewport,
    params: &FieldParams,
    rng: &mut impl RandomSource,
) {
    let w = viewport.width as f64;
    let h = viewport.height as f64;
    star.x = rng.next_unit() * w;
    star.y = rng.next_unit() * h;
    star.z = w;
    star.radius = params.respawn_radius.lerp(rng.next_unit());
}
