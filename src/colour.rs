//! Point colour
use std::fmt;

use derive_getters::Getters;

/// Red, green, blue and alpha channels. Nothing clamps them to `0..=1`.
#[derive(Debug, Copy, Clone, PartialEq, Getters)]
pub struct Rgba {
    red: f32,
    green: f32,
    blue: f32,
    alpha: f32,
}

impl Rgba {
    pub fn new(red: f32, green: f32, blue: f32, alpha: f32) -> Self {
        Rgba { red, green, blue, alpha }
    }

    pub fn set_red(&mut self, red: f32) {
        self.red = red;
    }

    pub fn set_green(&mut self, green: f32) {
        self.green = green;
    }

    pub fn set_blue(&mut self, blue: f32) {
        self.blue = blue;
    }

    pub fn set_alpha(&mut self, alpha: f32) {
        self.alpha = alpha;
    }
}

/// Opaque red.
impl Default for Rgba {
    fn default() -> Self {
        Rgba::new(1.0, 0.0, 0.0, 1.0)
    }
}

impl From<[f32; 4]> for Rgba {
    fn from(c: [f32; 4]) -> Self {
        Rgba::new(c[0], c[1], c[2], c[3])
    }
}

impl fmt::Display for Rgba {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{} {} {} {}", self.red, self.green, self.blue, self.alpha)
    }
}
