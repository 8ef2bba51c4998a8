use super::Color;

/// Deterministic index → color collaborator.
pub trait ColorPalette {
    fn color_by_index(&self, index: usize) -> Color;
}

impl<T: ColorPalette + ?Sized> ColorPalette for &T {
    fn color_by_index(&self, index: usize) -> Color {
        (**self).color_by_index(index)
    }
}

impl<T: ColorPalette + ?Sized> ColorPalette for Box<T> {
    fn color_by_index(&self, index: usize) -> Color {
        (**self).color_by_index(index)
    }
}

const DEFAULT_DATA_COLORS: [(u8, u8, u8); 12] = [
    (0x01, 0xb8, 0xaa),
    (0x37, 0x46, 0x49),
    (0xfd, 0x62, 0x5e),
    (0xf2, 0xc8, 0x0f),
    (0x5f, 0x6b, 0x6d),
    (0x8a, 0xd4, 0xeb),
    (0xfe, 0x96, 0x66),
    (0xa6, 0x69, 0x99),
    (0x35, 0x99, 0xb8),
    (0xdf, 0xbf, 0xbf),
    (0x4a, 0xc5, 0xbb),
    (0x5f, 0x6b, 0x6d),
];

/// Cycles the host's default data colors.
#[derive(Debug, Clone, Copy, Default)]
pub struct DefaultColorPalette;

impl ColorPalette for DefaultColorPalette {
    fn color_by_index(&self, index: usize) -> Color {
        let (red, green, blue) = DEFAULT_DATA_COLORS[index % DEFAULT_DATA_COLORS.len()];
        Color::from_rgb8(red, green, blue)
    }
}

/// Palette backed by an explicit color list, cycling when exhausted.
#[derive(Debug, Clone, PartialEq)]
pub struct FixedColorPalette {
    colors: Vec<Color>,
}

impl FixedColorPalette {
    /// Returns `None` for an empty list.
    #[must_use]
    pub fn new(colors: Vec<Color>) -> Option<Self> {
        if colors.is_empty() {
            return None;
        }
        Some(Self { colors })
    }
}

impl ColorPalette for FixedColorPalette {
    fn color_by_index(&self, index: usize) -> Color {
        self.colors[index % self.colors.len()]
    }
}

#[cfg(test)]
mod tests {
    use super::{ColorPalette, DefaultColorPalette, FixedColorPalette};
    use crate::core::Color;

    #[test]
    fn default_palette_cycles() {
        let palette = DefaultColorPalette;
        assert_eq!(palette.color_by_index(0), palette.color_by_index(12));
        assert_eq!(palette.color_by_index(0).to_hex(), "#01b8aa");
    }

    #[test]
    fn fixed_palette_rejects_empty_list() {
        assert!(FixedColorPalette::new(Vec::new()).is_none());
        let palette = FixedColorPalette::new(vec![Color::BLACK, Color::WHITE]).expect("palette");
        assert_eq!(palette.color_by_index(3), Color::WHITE);
    }
}
