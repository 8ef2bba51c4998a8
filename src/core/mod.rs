pub mod color;
pub mod dataset;
pub mod measure;
pub mod number_format;
pub mod palette;
pub mod scale;
pub mod types;

pub use color::Color;
pub use dataset::{CategoricalDataset, DetailSeries, SortBySeries, ValueSeries};
pub use measure::{
    CachedTextMeasurer, HeuristicTextMeasurer, TextBox, TextMeasureCacheStats, TextMeasurer,
    ellipsize_to_width, wrap_to_width,
};
pub use number_format::{DEFAULT_FORMAT_STRING, FormatStringFormatter, NumberFormatter};
pub use palette::{ColorPalette, DefaultColorPalette, FixedColorPalette};
pub use scale::LinearScale;
pub use types::{Viewport, point_to_px};
