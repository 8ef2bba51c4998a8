use crate::core::Viewport;
use crate::error::{GapChartError, GapChartResult};

use super::GapChartConfig;

pub(super) fn validate_viewport(viewport: Viewport) -> GapChartResult<Viewport> {
    if !viewport.is_valid() {
        return Err(GapChartError::InvalidViewport {
            width: viewport.width,
            height: viewport.height,
        });
    }
    Ok(viewport)
}

/// Rejects resolved settings no layout pass can work with.
pub fn validate_config(config: &GapChartConfig) -> GapChartResult<()> {
    for (name, value) in [
        ("statement font size", config.statement.font_size),
        ("data label font size", config.data_label.font_size),
        ("legend font size", config.legend.font_size_pt),
        ("legend circle radius", config.legend.circle_radius),
        ("hover font size", config.hover.font_size_pt),
        ("gap bar height", config.gap_bar.height),
        ("gap label font size", config.gap_label.font_size),
        ("general font size", config.general.font_size),
        ("statement label clip width", config.statement.label_clip_width),
        ("legend label clip width", config.legend.label_clip_width),
    ] {
        ensure_positive(name, value)?;
    }

    if !config.selector_height.is_finite() || config.selector_height < 0.0 {
        return Err(GapChartError::InvalidConfig(
            "selector height must be finite and >= 0".to_owned(),
        ));
    }

    if config.fonts.data_family.trim().is_empty() || config.fonts.statement_family.trim().is_empty()
    {
        return Err(GapChartError::InvalidConfig(
            "font families must not be empty".to_owned(),
        ));
    }

    for color in [
        config.statement.font_color,
        config.node.group_color,
        config.node.baseline_color,
        config.data_label.color,
        config.gap_bar.color,
        config.gap_bar.improvement_color,
        config.gap_bar.regression_color,
        config.gap_label.color_on_bar,
        config.gap_label.color_below_bar,
        config.general.font_color,
    ] {
        color
            .validate()
            .map_err(|err| GapChartError::InvalidConfig(err.to_string()))?;
    }

    Ok(())
}

fn ensure_positive(name: &str, value: f64) -> GapChartResult<()> {
    if !value.is_finite() || value <= 0.0 {
        return Err(GapChartError::InvalidConfig(format!(
            "{name} must be finite and > 0"
        )));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::{validate_config, validate_viewport};
    use crate::api::GapChartConfig;
    use crate::core::Viewport;
    use crate::error::GapChartError;

    #[test]
    fn default_config_is_valid() {
        assert!(validate_config(&GapChartConfig::default()).is_ok());
    }

    #[test]
    fn non_positive_bar_height_is_rejected() {
        let config = GapChartConfig::default().with_gap_bar_height(0.0);
        let err = validate_config(&config).expect_err("zero bar height");
        assert!(matches!(err, GapChartError::InvalidConfig(message) if message.contains("gap bar height")));
    }

    #[test]
    fn zero_viewport_is_rejected() {
        assert!(matches!(
            validate_viewport(Viewport::new(0, 10)),
            Err(GapChartError::InvalidViewport { width: 0, height: 10 })
        ));
    }
}
