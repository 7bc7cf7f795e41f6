//! Pure UI helpers extracted from the DOM binding for non-wasm testing.

use serde_json::Value;
use vitrine_core::{CarouselConfig, CarouselError};

/// Attribute on a carousel root holding JSON configuration overrides.
pub const CONFIG_ATTRIBUTE: &str = "data-carousel-config";

/// CSS length in pixels.
#[must_use]
pub fn px(value: f64) -> String {
    format!("{value}px")
}

/// CSS `transform` value shifting the track horizontally.
#[must_use]
pub fn translate_x(offset: f64) -> String {
    format!("translateX({offset}px)")
}

/// Resolve the configuration for one root.
///
/// Keys present in `attribute` override `fallback`; a missing or blank
/// attribute yields `fallback` unchanged.
///
/// # Errors
/// Returns [`CarouselError::ConfigParse`] when the attribute is not a JSON
/// object or names unknown fields, and [`CarouselError::InvalidConfig`] when
/// the merged configuration fails validation.
pub fn resolve_root_config(
    attribute: Option<&str>,
    fallback: &CarouselConfig,
) -> Result<CarouselConfig, CarouselError> {
    let Some(raw) = attribute.filter(|raw| !raw.trim().is_empty()) else {
        return Ok(fallback.clone());
    };
    let mut merged = serde_json::to_value(fallback).map_err(parse_error)?;
    let overrides: Value = serde_json::from_str(raw).map_err(parse_error)?;
    let (Some(base), Value::Object(patch)) = (merged.as_object_mut(), overrides) else {
        return Err(CarouselError::ConfigParse {
            detail: "configuration must be a JSON object".to_string(),
        });
    };
    base.extend(patch);
    let config: CarouselConfig = serde_json::from_value(merged).map_err(parse_error)?;
    config.validate()?;
    Ok(config)
}

fn parse_error(err: serde_json::Error) -> CarouselError {
    CarouselError::ConfigParse {
        detail: err.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn css_values_format_whole_and_fractional_pixels() {
        assert_eq!(px(0.0), "0px");
        assert_eq!(px(300.0), "300px");
        assert_eq!(px(412.5), "412.5px");
        assert_eq!(translate_x(-900.0), "translateX(-900px)");
        assert_eq!(translate_x(0.0), "translateX(0px)");
    }

    #[test]
    fn missing_attribute_uses_fallback() -> anyhow::Result<()> {
        let fallback = CarouselConfig {
            hidden_class: "gone".to_string(),
            ..CarouselConfig::default()
        };
        assert_eq!(resolve_root_config(None, &fallback)?, fallback);
        assert_eq!(resolve_root_config(Some("  "), &fallback)?, fallback);
        Ok(())
    }

    #[test]
    fn attribute_overrides_fallback_fields() -> anyhow::Result<()> {
        let fallback = CarouselConfig {
            hidden_class: "gone".to_string(),
            ..CarouselConfig::default()
        };
        let config = resolve_root_config(Some(r#"{"current_class":"active"}"#), &fallback)?;
        assert_eq!(config.current_class, "active");
        assert_eq!(config.hidden_class, "gone");
        Ok(())
    }

    #[test]
    fn non_object_attribute_is_rejected() {
        let result = resolve_root_config(Some("[1, 2]"), &CarouselConfig::default());
        assert!(matches!(result, Err(CarouselError::ConfigParse { .. })));
    }

    #[test]
    fn unknown_or_invalid_fields_are_rejected() {
        let unknown = resolve_root_config(Some(r#"{"loop":false}"#), &CarouselConfig::default());
        assert!(matches!(unknown, Err(CarouselError::ConfigParse { .. })));

        let invalid = resolve_root_config(
            Some(r#"{"current_class":""}"#),
            &CarouselConfig::default(),
        );
        assert!(matches!(
            invalid,
            Err(CarouselError::InvalidConfig {
                field: "current_class",
                ..
            })
        ));
    }
}
