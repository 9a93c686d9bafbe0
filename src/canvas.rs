//! Drawing surface abstraction and its software implementation.

/// 8-bit RGB colour.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Rgb(pub u8, pub u8, pub u8);

impl Rgb {
    pub const BLACK: Rgb = Rgb(0, 0, 0);
    pub const WHITE: Rgb = Rgb(255, 255, 255);

    /// Source-over blend of `src` onto `self` with coverage `alpha`.
    pub fn over(self, src: Rgb, alpha: f64) -> Rgb {
        let a = alpha.clamp(0.0, 1.0);
        let mix = |d: u8, s: u8| (d as f64 + (s as f64 - d as f64) * a).round() as u8;
        Rgb(mix(self.0, src.0), mix(self.1, src.1), mix(self.2, src.2))
    }
}

/// Soft glow drawn underneath a shape.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Shadow {
    pub blur: f64,
    pub color: Rgb,
}

/// How a filled shape is painted.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Paint {
    pub fill: Rgb,
    pub shadow: Option<Shadow>,
}

/// The only surface operations the renderer relies on.
pub trait Canvas {
    fn width(&self) -> u32;
    fn height(&self) -> u32;
    /// Resize the surface. Contents are unspecified afterwards.
    fn set_size(&mut self, width: u32, height: u32);
    fn fill_rect(&mut self, x: f64, y: f64, w: f64, h: f64, color: Rgb);
    /// Fill the full circle centred on `(cx, cy)`.
    fn fill_circle(&mut self, cx: f64, cy: f64, radius: f64, paint: &Paint);
}

/// In-memory RGB pixel buffer.
#[derive(Debug, Clone)]
pub struct PixelCanvas {
    width: u32,
    height: u32,
    pixels: Vec<Rgb>,
}

impl PixelCanvas {
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            pixels: vec![Rgb::BLACK; width as usize * height as usize],
        }
    }

    pub fn pixel(&self, x: u32, y: u32) -> Option<Rgb> {
        if x >= self.width || y >= self.height {
            return None;
        }
        self.pixels.get(self.index(x, y)).copied()
    }

    pub fn pixels(&self) -> &[Rgb] {
        &self.pixels
    }

    fn index(&self, x: u32, y: u32) -> usize {
        y as usize * self.width as usize + x as usize
    }

    /// Integer pixel span `[lo, hi)` covering `[from, to)`, clipped to `limit`.
    fn span(from: f64, to: f64, limit: u32) -> (u32, u32) {
        let lo = from.floor().clamp(0.0, limit as f64) as u32;
        let hi = to.ceil().clamp(0.0, limit as f64) as u32;
        (lo, hi)
    }
}

/// Coverage of a pixel whose centre is `dist` from the centre of a disc of
/// `radius`, with a one-pixel anti-aliased edge.
fn disc_coverage(dist: f64, radius: f64) -> f64 {
    (radius + 0.5 - dist).clamp(0.0, 1.0) * (radius * 2.0).clamp(0.25, 1.0)
}

/// Opacity of a blurred disc at `dist` from its centre. The blur spreads the
/// disc's area over a Gaussian with sigma `blur / 2`, so small discs give a
/// faint halo and large ones a strong one.
fn glow_coverage(dist: f64, radius: f64, blur: f64) -> f64 {
    if blur <= 0.0 {
        return 0.0;
    }
    let sigma = blur / 2.0;
    let two_sigma_sq = 2.0 * sigma * sigma;
    let peak = (radius * radius / two_sigma_sq).min(1.0);
    peak * (-(dist * dist) / two_sigma_sq).exp()
}

impl Canvas for PixelCanvas {
    fn width(&self) -> u32 {
        self.width
    }

    fn height(&self) -> u32 {
        self.height
    }

    fn set_size(&mut self, width: u32, height: u32) {
        self.width = width;
        self.height = height;
        self.pixels.clear();
        self.pixels.resize(width as usize * height as usize, Rgb::BLACK);
    }

    fn fill_rect(&mut self, x: f64, y: f64, w: f64, h: f64, color: Rgb) {
        let (x0, x1) = Self::span(x, x + w, self.width);
        let (y0, y1) = Self::span(y, y + h, self.height);
        if x1 <= x0 {
            return;
        }
        for py in y0..y1 {
            let row = self.index(0, py);
            self.pixels[row + x0 as usize..row + x1 as usize].fill(color);
        }
    }

    fn fill_circle(&mut self, cx: f64, cy: f64, radius: f64, paint: &Paint) {
        if !(radius > 0.0) || !cx.is_finite() || !cy.is_finite() {
            return;
        }
        let reach = radius + 0.5 + paint.shadow.map_or(0.0, |s| s.blur.max(0.0));
        let (x0, x1) = Self::span(cx - reach, cx + reach, self.width);
        let (y0, y1) = Self::span(cy - reach, cy + reach, self.height);

        for py in y0..y1 {
            for px in x0..x1 {
                let dx = px as f64 + 0.5 - cx;
                let dy = py as f64 + 0.5 - cy;
                let dist = (dx * dx + dy * dy).sqrt();
                let idx = self.index(px, py);
                let mut color = self.pixels[idx];

                if let Some(shadow) = paint.shadow {
                    let a = glow_coverage(dist, radius, shadow.blur);
                    if a > 0.0 {
                        color = color.over(shadow.color, a);
                    }
                }
                let a = disc_coverage(dist, radius);
                if a > 0.0 {
                    color = color.over(paint.fill, a);
                }

                self.pixels[idx] = color;
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const WHITE_DOT: Paint = Paint {
        fill: Rgb::WHITE,
        shadow: None,
    };

    #[test]
    fn over_blends_linearly() {
        assert_eq!(Rgb::BLACK.over(Rgb::WHITE, 0.0), Rgb::BLACK);
        assert_eq!(Rgb::BLACK.over(Rgb::WHITE, 1.0), Rgb::WHITE);
        assert_eq!(Rgb::BLACK.over(Rgb(200, 100, 50), 0.5), Rgb(100, 50, 25));
        assert_eq!(Rgb::BLACK.over(Rgb::WHITE, 7.0), Rgb::WHITE);
    }

    #[test]
    fn fill_rect_clips_to_surface() {
        let mut c = PixelCanvas::new(4, 3);
        c.fill_rect(-2.0, 1.0, 100.0, 1.0, Rgb::WHITE);
        for x in 0..4 {
            assert_eq!(c.pixel(x, 0), Some(Rgb::BLACK));
            assert_eq!(c.pixel(x, 1), Some(Rgb::WHITE));
            assert_eq!(c.pixel(x, 2), Some(Rgb::BLACK));
        }
        assert_eq!(c.pixel(4, 0), None);
    }

    #[test]
    fn inverted_rect_draws_nothing() {
        let mut c = PixelCanvas::new(4, 4);
        c.fill_rect(3.0, 3.0, -2.0, -2.0, Rgb::WHITE);
        assert!(c.pixels().iter().all(|p| *p == Rgb::BLACK));
    }

    #[test]
    fn circle_lights_its_centre_pixel() {
        let mut c = PixelCanvas::new(10, 10);
        c.fill_circle(5.5, 5.5, 2.0, &WHITE_DOT);
        assert_eq!(c.pixel(5, 5), Some(Rgb::WHITE));
        assert_eq!(c.pixel(0, 0), Some(Rgb::BLACK));
    }

    #[test]
    fn glow_reaches_past_the_disc() {
        let mut plain = PixelCanvas::new(20, 20);
        plain.fill_circle(10.0, 10.0, 2.0, &WHITE_DOT);

        let mut glowing = PixelCanvas::new(20, 20);
        let paint = Paint {
            fill: Rgb::WHITE,
            shadow: Some(Shadow {
                blur: 6.0,
                color: Rgb::WHITE,
            }),
        };
        glowing.fill_circle(10.0, 10.0, 2.0, &paint);

        assert_eq!(plain.pixel(14, 10), Some(Rgb::BLACK));
        let halo = glowing.pixel(14, 10).unwrap_or_default();
        assert!(halo.0 > 0, "expected a halo, got {halo:?}");
        assert!(halo.0 < 255);
    }

    #[test]
    fn tiny_star_is_still_visible() {
        let mut c = PixelCanvas::new(8, 8);
        c.fill_circle(4.2, 4.3, 0.2, &WHITE_DOT);
        assert!(c.pixel(4, 4).unwrap_or_default().0 > 0);
    }

    #[test]
    fn offscreen_and_degenerate_circles_are_ignored() {
        let mut c = PixelCanvas::new(8, 8);
        c.fill_circle(-50.0, -50.0, 3.0, &WHITE_DOT);
        c.fill_circle(4.0, 4.0, 0.0, &WHITE_DOT);
        c.fill_circle(f64::NAN, 4.0, 1.0, &WHITE_DOT);
        assert!(c.pixels().iter().all(|p| *p == Rgb::BLACK));
    }

    #[test]
    fn set_size_reallocates() {
        let mut c = PixelCanvas::new(2, 2);
        c.set_size(5, 3);
        assert_eq!((c.width(), c.height()), (5, 3));
        assert_eq!(c.pixels().len(), 15);
        c.set_size(0, 0);
        assert!(c.pixels().is_empty());
    }
}
