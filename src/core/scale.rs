use serde::{Deserialize, Serialize};

use crate::error::{GapChartError, GapChartResult};

/// Linear mapping from a value domain onto a horizontal pixel range.
///
/// A degenerate domain (`min == max`) maps every value to the range start,
/// so a dataset whose values are all equal still lays out.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LinearScale {
    domain_start: f64,
    domain_end: f64,
    range_start: f64,
    range_end: f64,
}

impl LinearScale {
    pub fn new(domain: (f64, f64), range: (f64, f64)) -> GapChartResult<Self> {
        let (domain_start, domain_end) = domain;
        let (range_start, range_end) = range;
        if !domain_start.is_finite() || !domain_end.is_finite() {
            return Err(GapChartError::InvalidData(
                "scale domain must be finite".to_owned(),
            ));
        }
        if !range_start.is_finite() || !range_end.is_finite() {
            return Err(GapChartError::InvalidData(
                "scale range must be finite".to_owned(),
            ));
        }

        Ok(Self {
            domain_start,
            domain_end,
            range_start,
            range_end,
        })
    }

    #[must_use]
    pub fn domain(self) -> (f64, f64) {
        (self.domain_start, self.domain_end)
    }

    #[must_use]
    pub fn range(self) -> (f64, f64) {
        (self.range_start, self.range_end)
    }

    #[must_use]
    pub fn map(self, value: f64) -> f64 {
        let span = self.domain_end - self.domain_start;
        if span == 0.0 {
            return self.range_start;
        }
        let normalized = (value - self.domain_start) / span;
        self.range_start + normalized * (self.range_end - self.range_start)
    }
}

#[cfg(test)]
mod tests {
    use super::LinearScale;

    #[test]
    fn degenerate_domain_maps_to_range_start() {
        let scale = LinearScale::new((5.0, 5.0), (20.0, 300.0)).expect("valid scale");
        assert_eq!(scale.map(5.0), 20.0);
        assert_eq!(scale.map(-100.0), 20.0);
    }

    #[test]
    fn non_finite_domain_is_rejected() {
        assert!(LinearScale::new((f64::NAN, 1.0), (0.0, 1.0)).is_err());
        assert!(LinearScale::new((0.0, 1.0), (0.0, f64::INFINITY)).is_err());
    }
}
