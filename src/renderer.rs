use crate::canvas::{Canvas, Paint, Rgb, Shadow};
use crate::random::RandomSource;
use crate::starfield::StarField;
use crate::types::{FieldParams, Star, Viewport};

/// Owns a drawing surface, the star field drawn onto it and the random
/// source used to (re)spawn stars.
pub struct StarfieldRenderer<C, R> {
    canvas: C,
    field: StarField,
    rng: R,
}

impl<C: Canvas, R: RandomSource> StarfieldRenderer<C, R> {
    /// Set up a field sized to the canvas.
    pub fn new(canvas: C, mut rng: R, params: FieldParams) -> Self {
        let viewport = Viewport::new(canvas.width(), canvas.height());
        let field = StarField::setup(viewport, params, &mut rng);
        tracing::debug!(%viewport, stars = field.len(), "star field created");
        Self {
            canvas,
            field,
            rng,
        }
    }

    pub fn canvas(&self) -> &C {
        &self.canvas
    }

    pub fn field(&self) -> &StarField {
        &self.field
    }

    pub fn stars(&self) -> &[Star] {
        self.field.stars()
    }

    pub fn viewport(&self) -> Viewport {
        self.field.viewport()
    }

    /// Replace the field wholesale, e.g. to start from known positions.
    pub fn set_field(&mut self, field: StarField) {
        self.field = field;
    }

    /// Clear to black, then paint every star at its projected position with
    /// a white glow. Stars are painted in insertion order.
    pub fn draw(&mut self) {
        let viewport = self.field.viewport();
        self.canvas.fill_rect(
            0.0,
            0.0,
            viewport.width as f64,
            viewport.height as f64,
            Rgb::BLACK,
        );

        let paint = Paint {
            fill: Rgb::WHITE,
            shadow: Some(Shadow {
                blur: self.field.params().glow_blur,
                color: Rgb::WHITE,
            }),
        };
        for p in self.field.projected() {
            self.canvas.fill_circle(p.x, p.y, p.radius, &paint);
        }
    }

    pub fn update(&mut self) {
        self.field.update(&mut self.rng);
    }

    /// One animation step. Drawing uses the current positions; the update
    /// prepares the next frame.
    pub fn frame(&mut self) {
        self.draw();
        self.update();
    }

    /// Resize the surface and discard the field for a fresh one.
    pub fn resize(&mut self, width: u32, height: u32) {
        self.canvas.set_size(width, height);
        let viewport = Viewport::new(width, height);
        let params = *self.field.params();
        self.field = StarField::setup(viewport, params, &mut self.rng);
        tracing::info!(%viewport, stars = self.field.len(), "viewport resized");
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use crate::random::make_rng;
    use rand::rngs::StdRng;

    #[derive(Debug, Clone, PartialEq)]
    pub enum Op {
        Rect { x: f64, y: f64, w: f64, h: f64, color: Rgb },
        Circle { x: f64, y: f64, r: f64, paint: Paint },
    }

    /// Canvas that records every call instead of rasterising.
    #[derive(Debug, Default)]
    pub struct Recording {
        pub width: u32,
        pub height: u32,
        pub ops: Vec<Op>,
    }

    impl Recording {
        pub fn new(width: u32, height: u32) -> Self {
            Self {
                width,
                height,
                ops: Vec::new(),
            }
        }
    }

    impl Canvas for Recording {
        fn width(&self) -> u32 {
            self.width
        }
        fn height(&self) -> u32 {
            self.height
        }
        fn set_size(&mut self, width: u32, height: u32) {
            self.width = width;
            self.height = height;
        }
        fn fill_rect(&mut self, x: f64, y: f64, w: f64, h: f64, color: Rgb) {
            self.ops.push(Op::Rect { x, y, w, h, color });
        }
        fn fill_circle(&mut self, x: f64, y: f64, r: f64, paint: &Paint) {
            self.ops.push(Op::Circle {
                x,
                y,
                r,
                paint: *paint,
            });
        }
    }

    fn renderer(w: u32, h: u32) -> StarfieldRenderer<Recording, StdRng> {
        StarfieldRenderer::new(Recording::new(w, h), make_rng(Some(42)), FieldParams::default())
    }

    #[test]
    fn single_star_end_to_end() {
        let mut r = renderer(100, 100);
        let viewport = Viewport::new(100, 100);
        let star = Star {
            x: 50.0,
            y: 50.0,
            z: 0.0,
            radius: 1.0,
        };
        r.set_field(StarField::from_stars(vec![star], viewport, FieldParams::default()));

        r.draw();
        match &r.canvas().ops[1] {
            Op::Circle { x, y, r: radius, .. } => {
                assert_eq!((*x, *y, *radius), (50.0, 50.0, 2.0));
            }
            other => panic!("expected a circle, got {other:?}"),
        }

        // dist 0 → speed 5 → z = -5 → recycled to the far plane
        r.update();
        assert_eq!(r.stars()[0].z, 100.0);
    }

    #[test]
    fn draw_clears_then_paints_each_star_with_glow() {
        let mut r = renderer(400, 300);
        r.draw();
        let ops = &r.canvas().ops;
        assert_eq!(
            ops[0],
            Op::Rect {
                x: 0.0,
                y: 0.0,
                w: 400.0,
                h: 300.0,
                color: Rgb::BLACK
            }
        );
        assert_eq!(ops.len(), 1 + 20);
        for op in &ops[1..] {
            let Op::Circle { paint, .. } = op else {
                panic!("expected circles after the clear");
            };
            assert_eq!(paint.fill, Rgb::WHITE);
            assert_eq!(
                paint.shadow,
                Some(Shadow {
                    blur: 6.0,
                    color: Rgb::WHITE
                })
            );
        }
    }

    #[test]
    fn draw_follows_insertion_order() {
        let mut r = renderer(200, 200);
        let stars: Vec<Star> = r.stars().to_vec();
        r.draw();
        let drawn: Vec<(f64, f64)> = r.canvas().ops[1..]
            .iter()
            .filter_map(|op| match op {
                Op::Circle { x, y, .. } => Some((*x, *y)),
                _ => None,
            })
            .collect();
        let expected: Vec<(f64, f64)> = stars
            .iter()
            .map(|s| {
                let p = r.field().project(s);
                (p.x, p.y)
            })
            .collect();
        assert_eq!(drawn, expected);
    }

    #[test]
    fn frame_draws_before_updating() {
        let mut r = renderer(300, 300);
        let before: Vec<Star> = r.stars().to_vec();
        let expected: Vec<f64> = before.iter().map(|s| r.field().project(s).x).collect();
        r.frame();
        let drawn: Vec<f64> = r.canvas().ops[1..]
            .iter()
            .filter_map(|op| match op {
                Op::Circle { x, .. } => Some(*x),
                _ => None,
            })
            .collect();
        assert_eq!(drawn, expected);
        assert_ne!(r.stars(), before.as_slice());
    }

    #[test]
    fn resize_replaces_the_collection() {
        let mut r = renderer(800, 600);
        let old_ptr = r.stars().as_ptr();
        let old_len = r.stars().len();
        r.resize(1200, 700);
        assert_ne!(r.stars().as_ptr(), old_ptr);
        assert_eq!(old_len, 40);
        assert_eq!(r.stars().len(), 60);
        assert_eq!(r.viewport(), Viewport::new(1200, 700));
        assert_eq!((r.canvas().width, r.canvas().height), (1200, 700));
    }

    #[test]
    fn glow_and_resize_follow_the_installed_field() {
        let mut r = renderer(100, 100);
        let params = FieldParams {
            glow_blur: 2.5,
            density: 0.1,
            ..FieldParams::default()
        };
        let star = Star {
            x: 10.0,
            y: 10.0,
            z: 5.0,
            radius: 0.5,
        };
        r.set_field(StarField::from_stars(vec![star], Viewport::new(100, 100), params));

        r.draw();
        let Some(Op::Circle { paint, .. }) = r.canvas().ops.last() else {
            panic!("expected a circle");
        };
        assert_eq!(paint.shadow.map(|s| s.blur), Some(2.5));

        r.resize(200, 50);
        assert_eq!(r.field().params(), &params);
        assert_eq!(r.stars().len(), 20);
    }

    #[test]
    fn resize_to_zero_is_harmless() {
        let mut r = renderer(800, 600);
        r.resize(0, 0);
        assert!(r.stars().is_empty());
        r.frame();
        assert_eq!(r.canvas().ops.len(), 1);
    }
}
