use serde::{Deserialize, Serialize};

use crate::error::{GapChartError, GapChartResult};

/// RGBA color in normalized 0..=1 channel values.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Color {
    pub red: f64,
    pub green: f64,
    pub blue: f64,
    pub alpha: f64,
}

impl Color {
    pub const BLACK: Self = Self::rgb(0.0, 0.0, 0.0);
    pub const WHITE: Self = Self::rgb(1.0, 1.0, 1.0);

    #[must_use]
    pub const fn rgba(red: f64, green: f64, blue: f64, alpha: f64) -> Self {
        Self {
            red,
            green,
            blue,
            alpha,
        }
    }

    #[must_use]
    pub const fn rgb(red: f64, green: f64, blue: f64) -> Self {
        Self::rgba(red, green, blue, 1.0)
    }

    #[must_use]
    pub fn from_rgb8(red: u8, green: u8, blue: u8) -> Self {
        Self::rgb(
            f64::from(red) / 255.0,
            f64::from(green) / 255.0,
            f64::from(blue) / 255.0,
        )
    }

    /// Parses the CSS color notations hosts hand us in property bags:
    /// `#rgb`, `#rrggbb`, `rgb(r, g, b)`, `rgba(r, g, b, a)` and a few names.
    #[must_use]
    pub fn from_css(value: &str) -> Option<Self> {
        let value = value.trim();
        if let Some(hex) = value.strip_prefix('#') {
            return parse_hex(hex);
        }

        let lower = value.to_ascii_lowercase();
        if let Some(body) = lower
            .strip_prefix("rgba(")
            .and_then(|rest| rest.strip_suffix(')'))
        {
            return parse_channels(body, true);
        }
        if let Some(body) = lower
            .strip_prefix("rgb(")
            .and_then(|rest| rest.strip_suffix(')'))
        {
            return parse_channels(body, false);
        }

        named_color(&lower)
    }

    #[must_use]
    pub fn to_hex(self) -> String {
        let channel = |value: f64| (value.clamp(0.0, 1.0) * 255.0).round() as u8;
        format!(
            "#{:02x}{:02x}{:02x}",
            channel(self.red),
            channel(self.green),
            channel(self.blue)
        )
    }

    pub fn validate(self) -> GapChartResult<()> {
        for (channel, value) in [
            ("red", self.red),
            ("green", self.green),
            ("blue", self.blue),
            ("alpha", self.alpha),
        ] {
            if !value.is_finite() || !(0.0..=1.0).contains(&value) {
                return Err(GapChartError::InvalidData(format!(
                    "color channel `{channel}` must be finite and in [0, 1]"
                )));
            }
        }
        Ok(())
    }
}

fn parse_hex(hex: &str) -> Option<Color> {
    let digits: Vec<u8> = hex
        .chars()
        .map(|c| c.to_digit(16).map(|d| d as u8))
        .collect::<Option<_>>()?;
    match digits.as_slice() {
        [r, g, b] => Some(Color::from_rgb8(r * 17, g * 17, b * 17)),
        [r1, r0, g1, g0, b1, b0] => Some(Color::from_rgb8(
            r1 * 16 + r0,
            g1 * 16 + g0,
            b1 * 16 + b0,
        )),
        _ => None,
    }
}

fn parse_channels(body: &str, with_alpha: bool) -> Option<Color> {
    let parts: Vec<&str> = body.split(',').map(str::trim).collect();
    let expected = if with_alpha { 4 } else { 3 };
    if parts.len() != expected {
        return None;
    }

    let mut rgb = [0.0_f64; 3];
    for (slot, part) in rgb.iter_mut().zip(&parts) {
        let value: f64 = part.parse().ok()?;
        if !(0.0..=255.0).contains(&value) {
            return None;
        }
        *slot = value / 255.0;
    }
    let alpha = if with_alpha {
        let value: f64 = parts[3].parse().ok()?;
        if !(0.0..=1.0).contains(&value) {
            return None;
        }
        value
    } else {
        1.0
    };

    Some(Color::rgba(rgb[0], rgb[1], rgb[2], alpha))
}

fn named_color(name: &str) -> Option<Color> {
    let color = match name {
        "black" => Color::BLACK,
        "white" => Color::WHITE,
        "red" => Color::from_rgb8(255, 0, 0),
        "green" => Color::from_rgb8(0, 128, 0),
        "blue" => Color::from_rgb8(0, 0, 255),
        "orange" => Color::from_rgb8(255, 165, 0),
        "purple" => Color::from_rgb8(128, 0, 128),
        "yellow" => Color::from_rgb8(255, 255, 0),
        "magenta" => Color::from_rgb8(255, 0, 255),
        "gold" => Color::from_rgb8(255, 215, 0),
        "gray" | "grey" => Color::from_rgb8(128, 128, 128),
        "transparent" => Color::rgba(0.0, 0.0, 0.0, 0.0),
        _ => return None,
    };
    Some(color)
}

#[cfg(test)]
mod tests {
    use super::Color;

    #[test]
    fn parses_short_and_long_hex() {
        assert_eq!(Color::from_css("#777"), Some(Color::from_rgb8(119, 119, 119)));
        assert_eq!(Color::from_css("#4884d9"), Some(Color::from_rgb8(72, 132, 217)));
    }

    #[test]
    fn parses_rgb_function_with_spaces() {
        assert_eq!(
            Color::from_css("rgb(1, 184, 170)"),
            Some(Color::from_rgb8(1, 184, 170))
        );
        assert_eq!(
            Color::from_css("rgba(0,0,0,0.5)"),
            Some(Color::rgba(0.0, 0.0, 0.0, 0.5))
        );
    }

    #[test]
    fn rejects_garbage() {
        assert_eq!(Color::from_css("#12"), None);
        assert_eq!(Color::from_css("rgb(300, 0, 0)"), None);
        assert_eq!(Color::from_css("chartreuse-ish"), None);
    }

    #[test]
    fn hex_round_trips_named_color() {
        let orange = Color::from_css("orange").expect("named color");
        assert_eq!(orange.to_hex(), "#ffa500");
    }
}
