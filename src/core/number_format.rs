//! Number formatting collaborator and the built-in format-string formatter.

use rust_decimal::prelude::FromPrimitive;
use rust_decimal::{Decimal, RoundingStrategy};

/// Format string used when neither the series nor the property bag names one.
pub const DEFAULT_FORMAT_STRING: &str = "G";

/// Upper bound on decimals the general format keeps before trimming zeros.
const GENERAL_MAX_DECIMALS: u32 = 10;

/// Pure number formatting collaborator.
pub trait NumberFormatter {
    fn format(&self, value: f64, format_string: &str) -> String;
}

impl<T: NumberFormatter + ?Sized> NumberFormatter for &T {
    fn format(&self, value: f64, format_string: &str) -> String {
        (**self).format(value, format_string)
    }
}

impl<T: NumberFormatter + ?Sized> NumberFormatter for Box<T> {
    fn format(&self, value: f64, format_string: &str) -> String {
        (**self).format(value, format_string)
    }
}

/// Formatter for the spreadsheet-style format strings hosts attach to value
/// columns (`"0.00"`, `"#,0"`, `"00.00%"`, `"$#,0.00;($#,0.00)"`, `"G"`).
///
/// Rounding is decimal midpoint-away-from-zero, so `2.675` with `"0.00"`
/// yields `2.68` rather than the binary-float `2.67`.
#[derive(Debug, Clone, Copy, Default)]
pub struct FormatStringFormatter;

impl NumberFormatter for FormatStringFormatter {
    fn format(&self, value: f64, format_string: &str) -> String {
        if !value.is_finite() {
            return value.to_string();
        }

        let sections: Vec<&str> = format_string.split(';').collect();
        let (section, value, signed) = if value < 0.0 && sections.len() >= 2 {
            (sections[1], value.abs(), false)
        } else if value == 0.0 && sections.len() >= 3 {
            (sections[2], value, false)
        } else {
            (sections[0], value, true)
        };

        if is_general(section) {
            return format_general(value);
        }
        NumericPattern::parse(section).apply(value, signed)
    }
}

fn is_general(section: &str) -> bool {
    let trimmed = section.trim();
    trimmed.is_empty() || trimmed.eq_ignore_ascii_case("g") || trimmed.eq_ignore_ascii_case("general")
}

fn format_general(value: f64) -> String {
    match Decimal::from_f64(value) {
        Some(decimal) => {
            let rounded = decimal
                .round_dp_with_strategy(GENERAL_MAX_DECIMALS, RoundingStrategy::MidpointAwayFromZero)
                .normalize();
            if rounded.is_zero() {
                "0".to_owned()
            } else {
                rounded.to_string()
            }
        }
        None => value.to_string(),
    }
}

#[derive(Debug, Clone, PartialEq, Default)]
struct NumericPattern {
    prefix: String,
    suffix: String,
    has_placeholders: bool,
    min_integer_digits: usize,
    min_fraction_digits: u32,
    max_fraction_digits: u32,
    grouping: bool,
    percent: bool,
    thousands_scale: i32,
}

impl NumericPattern {
    fn parse(section: &str) -> Self {
        let chars: Vec<char> = section.chars().collect();
        let is_body = |c: char| matches!(c, '0' | '#' | ',' | '.');
        let is_placeholder = |c: char| matches!(c, '0' | '#');

        // A '.' only belongs to the number when it directly precedes the
        // first placeholder and is not the tail of a word (`"Rs."`).
        let start = match chars.iter().position(|&c| is_placeholder(c)) {
            Some(first)
                if first > 0
                    && chars[first - 1] == '.'
                    && (first < 2 || !chars[first - 2].is_alphanumeric()) =>
            {
                first - 1
            }
            Some(first) => first,
            None => chars.len(),
        };
        let run_end = chars[start..]
            .iter()
            .position(|&c| !is_body(c))
            .map_or(chars.len(), |offset| start + offset);
        let mut end = chars[start..run_end]
            .iter()
            .rposition(|&c| is_placeholder(c))
            .map_or(start, |offset| start + offset + 1);
        while end < run_end && chars[end] == ',' {
            end += 1;
        }

        let prefix = literal_text(&chars[..start]);
        let suffix = literal_text(&chars[end..]);
        let body: String = chars[start..end].iter().collect();

        let (integer_part, fraction_part) = match body.split_once('.') {
            Some((integer, fraction)) => (integer, fraction),
            None => (body.as_str(), ""),
        };
        let trailing_commas = integer_part.len() - integer_part.trim_end_matches(',').len();
        let integer_core = integer_part.trim_end_matches(',');

        let min_fraction_digits = fraction_part.chars().filter(|&c| c == '0').count() as u32;
        let optional_fraction_digits = fraction_part.chars().filter(|&c| c == '#').count() as u32;

        Self {
            percent: prefix.contains('%') || suffix.contains('%'),
            prefix,
            suffix,
            has_placeholders: body.chars().any(is_placeholder),
            min_integer_digits: integer_core.chars().filter(|&c| c == '0').count(),
            min_fraction_digits,
            max_fraction_digits: min_fraction_digits + optional_fraction_digits,
            grouping: integer_core.contains(','),
            thousands_scale: trailing_commas as i32,
        }
    }

    fn apply(&self, value: f64, signed: bool) -> String {
        if !self.has_placeholders {
            return format!("{}{}", self.prefix, self.suffix);
        }

        let mut scaled = value;
        if self.percent {
            scaled *= 100.0;
        }
        if self.thousands_scale > 0 {
            scaled /= 1000_f64.powi(self.thousands_scale);
        }

        let (integer_digits, fraction_digits) = self.round_digits(scaled.abs());
        let is_zero = integer_digits.chars().all(|c| c == '0')
            && fraction_digits.chars().all(|c| c == '0');

        let mut integer_digits = integer_digits;
        if self.min_integer_digits == 0 && integer_digits == "0" {
            integer_digits.clear();
        }
        while integer_digits.len() < self.min_integer_digits {
            integer_digits.insert(0, '0');
        }
        if self.grouping {
            integer_digits = group_thousands(&integer_digits);
        }

        let mut out = String::new();
        if signed && scaled < 0.0 && !is_zero {
            out.push('-');
        }
        out.push_str(&self.prefix);
        out.push_str(&integer_digits);
        if !fraction_digits.is_empty() {
            out.push('.');
            out.push_str(&fraction_digits);
        }
        out.push_str(&self.suffix);
        out
    }

    /// Rounds to `max_fraction_digits` and trims optional trailing zeros.
    fn round_digits(&self, magnitude: f64) -> (String, String) {
        let text = match Decimal::from_f64(magnitude) {
            Some(decimal) => decimal
                .round_dp_with_strategy(
                    self.max_fraction_digits,
                    RoundingStrategy::MidpointAwayFromZero,
                )
                .to_string(),
            None => format!("{:.*}", self.max_fraction_digits as usize, magnitude),
        };

        let (integer, fraction) = match text.split_once('.') {
            Some((integer, fraction)) => (integer.to_owned(), fraction.to_owned()),
            None => (text, String::new()),
        };

        let mut fraction = fraction;
        while (fraction.len() as u32) < self.max_fraction_digits {
            fraction.push('0');
        }
        while (fraction.len() as u32) > self.min_fraction_digits && fraction.ends_with('0') {
            fraction.pop();
        }
        (integer, fraction)
    }
}

fn literal_text(chars: &[char]) -> String {
    chars.iter().filter(|&&c| c != '"' && c != '\\').collect()
}

fn group_thousands(digits: &str) -> String {
    let len = digits.len();
    let mut out = String::with_capacity(len + len / 3);
    for (index, digit) in digits.chars().enumerate() {
        if index > 0 && (len - index) % 3 == 0 {
            out.push(',');
        }
        out.push(digit);
    }
    out
}
