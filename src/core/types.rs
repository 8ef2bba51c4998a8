use serde::{Deserialize, Serialize};

/// Host-supplied drawing area in CSS pixels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Viewport {
    pub width: u32,
    pub height: u32,
}

impl Viewport {
    #[must_use]
    pub fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    #[must_use]
    pub fn is_valid(self) -> bool {
        self.width > 0 && self.height > 0
    }

    #[must_use]
    pub fn width_px(self) -> f64 {
        f64::from(self.width)
    }

    #[must_use]
    pub fn height_px(self) -> f64 {
        f64::from(self.height)
    }
}

/// Converts a font size in points to CSS pixels (96 dpi).
#[must_use]
pub fn point_to_px(points: f64) -> f64 {
    points * 96.0 / 72.0
}

#[cfg(test)]
mod tests {
    use super::{Viewport, point_to_px};

    #[test]
    fn zero_sized_viewport_is_invalid() {
        assert!(!Viewport::new(0, 300).is_valid());
        assert!(!Viewport::new(300, 0).is_valid());
        assert!(Viewport::new(1, 1).is_valid());
    }

    #[test]
    fn twelve_points_are_sixteen_pixels() {
        assert_eq!(point_to_px(12.0), 16.0);
    }
}
