//! Text measurement hooks for layout.
//!
//! Layout never touches a drawing surface; every width/height it needs comes
//! from a [`TextMeasurer`]. Hosts plug in real shaping (canvas `measureText`,
//! a font rasterizer, ...) or use [`HeuristicTextMeasurer`].

use std::cell::RefCell;
use std::collections::HashMap;

use serde::{Deserialize, Serialize};

/// Rendered bounding box of one line of text.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct TextBox {
    pub width: f64,
    pub height: f64,
}

impl TextBox {
    #[must_use]
    pub const fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }
}

/// Pure text measurement collaborator.
///
/// Implementations must be deterministic for a given `(font_family,
/// font_size_px, text)` triple.
pub trait TextMeasurer {
    fn measure_text_box(&self, font_family: &str, font_size_px: f64, text: &str) -> TextBox;
}

impl<T: TextMeasurer + ?Sized> TextMeasurer for &T {
    fn measure_text_box(&self, font_family: &str, font_size_px: f64, text: &str) -> TextBox {
        (**self).measure_text_box(font_family, font_size_px, text)
    }
}

impl<T: TextMeasurer + ?Sized> TextMeasurer for Box<T> {
    fn measure_text_box(&self, font_family: &str, font_size_px: f64, text: &str) -> TextBox {
        (**self).measure_text_box(font_family, font_size_px, text)
    }
}

/// Average-glyph measurer: ~0.6em advance per character, 1em line box.
#[derive(Debug, Clone, Copy, Default)]
pub struct HeuristicTextMeasurer;

impl TextMeasurer for HeuristicTextMeasurer {
    fn measure_text_box(&self, _font_family: &str, font_size_px: f64, text: &str) -> TextBox {
        let width = 0.6 * font_size_px * text.chars().count() as f64;
        TextBox::new(width, font_size_px)
    }
}

/// Runtime metrics exposed by [`CachedTextMeasurer`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct TextMeasureCacheStats {
    pub hits: u64,
    pub misses: u64,
    pub size: usize,
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
struct TextMeasureKey {
    font_family: String,
    font_size_bits: u64,
    text: String,
}

#[derive(Debug, Default)]
struct TextMeasureCache {
    entries: HashMap<TextMeasureKey, TextBox>,
    hits: u64,
    misses: u64,
}

/// Memoizing wrapper around another measurer.
///
/// Caching is invisible to callers: a hit returns exactly what the inner
/// measurer returned for the same key.
#[derive(Debug, Default)]
pub struct CachedTextMeasurer<M> {
    inner: M,
    cache: RefCell<TextMeasureCache>,
}

impl<M: TextMeasurer> CachedTextMeasurer<M> {
    const MAX_ENTRIES: usize = 4096;

    #[must_use]
    pub fn new(inner: M) -> Self {
        Self {
            inner,
            cache: RefCell::new(TextMeasureCache::default()),
        }
    }

    #[must_use]
    pub fn stats(&self) -> TextMeasureCacheStats {
        let cache = self.cache.borrow();
        TextMeasureCacheStats {
            hits: cache.hits,
            misses: cache.misses,
            size: cache.entries.len(),
        }
    }

    pub fn clear(&self) {
        self.cache.borrow_mut().entries.clear();
    }

    #[must_use]
    pub fn into_inner(self) -> M {
        self.inner
    }
}

impl<M: TextMeasurer> TextMeasurer for CachedTextMeasurer<M> {
    fn measure_text_box(&self, font_family: &str, font_size_px: f64, text: &str) -> TextBox {
        let key = TextMeasureKey {
            font_family: font_family.to_owned(),
            font_size_bits: font_size_px.to_bits(),
            text: text.to_owned(),
        };

        let mut cache = self.cache.borrow_mut();
        if let Some(text_box) = cache.entries.get(&key).copied() {
            cache.hits = cache.hits.saturating_add(1);
            return text_box;
        }

        let text_box = self.inner.measure_text_box(font_family, font_size_px, text);
        cache.misses = cache.misses.saturating_add(1);
        if cache.entries.len() >= Self::MAX_ENTRIES {
            cache.entries.clear();
        }
        cache.entries.insert(key, text_box);
        text_box
    }
}

const ELLIPSIS: &str = "...";

/// Clips `text` so its measured width fits `max_width`, appending `...` when
/// anything was removed. Returns the text unchanged when it already fits.
#[must_use]
pub fn ellipsize_to_width(
    measurer: &dyn TextMeasurer,
    font_family: &str,
    font_size_px: f64,
    text: &str,
    max_width: f64,
) -> String {
    if measurer
        .measure_text_box(font_family, font_size_px, text)
        .width
        <= max_width
    {
        return text.to_owned();
    }

    let chars: Vec<char> = text.chars().collect();
    for keep in (0..chars.len()).rev() {
        let mut candidate: String = chars[..keep].iter().collect();
        candidate.push_str(ELLIPSIS);
        if measurer
            .measure_text_box(font_family, font_size_px, &candidate)
            .width
            <= max_width
        {
            return candidate;
        }
    }
    ELLIPSIS.to_owned()
}

/// Greedy word wrap: splits `text` on whitespace and packs words into lines
/// whose measured width stays within `max_width`. A single word wider than
/// the limit still gets its own line.
#[must_use]
pub fn wrap_to_width(
    measurer: &dyn TextMeasurer,
    font_family: &str,
    font_size_px: f64,
    text: &str,
    max_width: f64,
) -> Vec<String> {
    let mut lines = Vec::new();
    let mut current = String::new();

    for word in text.split_whitespace() {
        if current.is_empty() {
            current.push_str(word);
            continue;
        }
        let candidate = format!("{current} {word}");
        if measurer
            .measure_text_box(font_family, font_size_px, &candidate)
            .width
            > max_width
        {
            lines.push(std::mem::take(&mut current));
            current.push_str(word);
        } else {
            current = candidate;
        }
    }
    if !current.is_empty() {
        lines.push(current);
    }
    lines
}
