use std::fmt;

pub type Rgb = [u8; 3];

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Rgba {
    pub rgb: Rgb,
    pub alpha: f32,
}

impl Rgba {
    #[inline]
    pub fn new(rgb: Rgb, alpha: f32) -> Self {
        Self {
            rgb,
            alpha: alpha.clamp(0.0, 1.0),
        }
    }

    /// Scale the channels toward black; `factor` 1.0 keeps the color.
    pub fn darken(self, factor: f32) -> Self {
        let f = factor.clamp(0.0, 1.0);
        let [r, g, b] = self.rgb;
        Self {
            rgb: [
                (r as f32 * f).round() as u8,
                (g as f32 * f).round() as u8,
                (b as f32 * f).round() as u8,
            ],
            alpha: self.alpha,
        }
    }

    #[inline]
    pub fn with_alpha(self, alpha: f32) -> Self {
        Self::new(self.rgb, alpha)
    }

    /// CSS `rgba(...)` string for canvas fill/stroke styles.
    pub fn css(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for Rgba {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let [r, g, b] = self.rgb;
        write!(f, "rgba({}, {}, {}, {:.3})", r, g, b, self.alpha)
    }
}
