use crate::core::{
    CachedTextMeasurer, ColorPalette, DefaultColorPalette, FormatStringFormatter,
    HeuristicTextMeasurer, NumberFormatter, TextBox, TextMeasurer,
};

/// External collaborators every layout stage reads through.
///
/// All three are pure from the pipeline's point of view; swapping one in never
/// changes which stages run, only the numbers they produce.
pub struct LayoutServices {
    measurer: Box<dyn TextMeasurer>,
    formatter: Box<dyn NumberFormatter>,
    palette: Box<dyn ColorPalette>,
}

impl Default for LayoutServices {
    fn default() -> Self {
        Self {
            measurer: Box::new(CachedTextMeasurer::new(HeuristicTextMeasurer)),
            formatter: Box::new(FormatStringFormatter),
            palette: Box::new(DefaultColorPalette),
        }
    }
}

impl std::fmt::Debug for LayoutServices {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("LayoutServices").finish_non_exhaustive()
    }
}

impl LayoutServices {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_measurer(mut self, measurer: impl TextMeasurer + 'static) -> Self {
        self.measurer = Box::new(measurer);
        self
    }

    #[must_use]
    pub fn with_formatter(mut self, formatter: impl NumberFormatter + 'static) -> Self {
        self.formatter = Box::new(formatter);
        self
    }

    #[must_use]
    pub fn with_palette(mut self, palette: impl ColorPalette + 'static) -> Self {
        self.palette = Box::new(palette);
        self
    }

    #[must_use]
    pub fn measurer(&self) -> &dyn TextMeasurer {
        self.measurer.as_ref()
    }

    #[must_use]
    pub fn formatter(&self) -> &dyn NumberFormatter {
        self.formatter.as_ref()
    }

    #[must_use]
    pub fn palette(&self) -> &dyn ColorPalette {
        self.palette.as_ref()
    }

    pub(super) fn measure(&self, font_family: &str, font_size_px: f64, text: &str) -> TextBox {
        self.measurer.measure_text_box(font_family, font_size_px, text)
    }

    pub(super) fn format(&self, value: f64, format_string: &str) -> String {
        self.formatter.format(value, format_string)
    }
}
