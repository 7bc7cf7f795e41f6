//! Markup contract for locating and marking carousel elements.
//!
//! # Design
//! - Defaults match the stock carousel markup, so most pages need no config.
//! - Partial JSON overrides fill the remaining fields from defaults.
//! - Class names are validated up front; the DOM rejects them at toggle time.

use serde::{Deserialize, Serialize};

use crate::error::{CarouselError, Result};

/// Default selector for carousel root containers.
pub const DEFAULT_ROOT_SELECTOR: &str = ".carousel";
/// Default selector for the sliding track.
pub const DEFAULT_TRACK_SELECTOR: &str = ".carousel-track";
/// Default selector for the next arrow.
pub const DEFAULT_NEXT_SELECTOR: &str = ".carousel-btn.next";
/// Default selector for the previous arrow.
pub const DEFAULT_PREV_SELECTOR: &str = ".carousel-btn.prev";
/// Default selector for the dot navigation container.
pub const DEFAULT_NAV_SELECTOR: &str = ".carousel-nav";
/// Default selector a click target is matched against to find its dot.
pub const DEFAULT_DOT_SELECTOR: &str = "button";
/// Default class marking the current slide and dot.
pub const DEFAULT_CURRENT_CLASS: &str = "current-slide";
/// Default class marking a hidden arrow.
pub const DEFAULT_HIDDEN_CLASS: &str = "is-hidden";

/// Selectors and marker classes for one carousel.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct CarouselConfig {
    /// Selector for carousel roots when mounting a whole document.
    pub root_selector: String,
    /// Selector for the track, relative to the root.
    pub track_selector: String,
    /// Selector for the next arrow, relative to the root.
    pub next_selector: String,
    /// Selector for the previous arrow, relative to the root.
    pub prev_selector: String,
    /// Selector for the dot navigation container, relative to the root.
    pub nav_selector: String,
    /// Selector matched by the nearest ancestor of a click to find a dot.
    pub dot_selector: String,
    /// Class toggled on the current slide and dot.
    pub current_class: String,
    /// Class toggled on hidden arrows.
    pub hidden_class: String,
}

impl Default for CarouselConfig {
    fn default() -> Self {
        Self {
            root_selector: DEFAULT_ROOT_SELECTOR.to_string(),
            track_selector: DEFAULT_TRACK_SELECTOR.to_string(),
            next_selector: DEFAULT_NEXT_SELECTOR.to_string(),
            prev_selector: DEFAULT_PREV_SELECTOR.to_string(),
            nav_selector: DEFAULT_NAV_SELECTOR.to_string(),
            dot_selector: DEFAULT_DOT_SELECTOR.to_string(),
            current_class: DEFAULT_CURRENT_CLASS.to_string(),
            hidden_class: DEFAULT_HIDDEN_CLASS.to_string(),
        }
    }
}

impl CarouselConfig {
    /// Parse a JSON override document and validate the result.
    ///
    /// # Errors
    /// Returns [`CarouselError::ConfigParse`] for malformed JSON or unknown
    /// fields, and [`CarouselError::InvalidConfig`] when validation fails.
    pub fn from_json(raw: &str) -> Result<Self> {
        let config: Self =
            serde_json::from_str(raw).map_err(|err| CarouselError::ConfigParse {
                detail: err.to_string(),
            })?;
        config.validate()?;
        Ok(config)
    }

    /// Check that every selector is set and marker classes are usable.
    ///
    /// # Errors
    /// Returns [`CarouselError::InvalidConfig`] naming the first bad field.
    pub fn validate(&self) -> Result<()> {
        let selectors = [
            ("root_selector", &self.root_selector),
            ("track_selector", &self.track_selector),
            ("next_selector", &self.next_selector),
            ("prev_selector", &self.prev_selector),
            ("nav_selector", &self.nav_selector),
            ("dot_selector", &self.dot_selector),
        ];
        for (field, value) in selectors {
            if value.trim().is_empty() {
                return Err(CarouselError::InvalidConfig {
                    field,
                    reason: "selector must not be empty",
                });
            }
        }
        for (field, value) in [
            ("current_class", &self.current_class),
            ("hidden_class", &self.hidden_class),
        ] {
            validate_class(field, value)?;
        }
        Ok(())
    }
}

fn validate_class(field: &'static str, value: &str) -> Result<()> {
    if value.is_empty() {
        return Err(CarouselError::InvalidConfig {
            field,
            reason: "class name must not be empty",
        });
    }
    if value.chars().any(char::is_whitespace) {
        return Err(CarouselError::InvalidConfig {
            field,
            reason: "class name must not contain whitespace",
        });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_stock_markup() {
        let config = CarouselConfig::default();
        assert_eq!(config.track_selector, ".carousel-track");
        assert_eq!(config.next_selector, ".carousel-btn.next");
        assert_eq!(config.prev_selector, ".carousel-btn.prev");
        assert_eq!(config.nav_selector, ".carousel-nav");
        assert_eq!(config.current_class, "current-slide");
        assert_eq!(config.hidden_class, "is-hidden");
        assert_eq!(config.validate(), Ok(()));
    }

    #[test]
    fn partial_json_keeps_defaults() -> Result<()> {
        let config = CarouselConfig::from_json(r#"{ "current_class": "active" }"#)?;
        assert_eq!(config.current_class, "active");
        assert_eq!(config.hidden_class, DEFAULT_HIDDEN_CLASS);
        assert_eq!(config.dot_selector, DEFAULT_DOT_SELECTOR);
        Ok(())
    }

    #[test]
    fn unknown_fields_are_rejected() {
        let err = CarouselConfig::from_json(r#"{ "autoplay": true }"#);
        assert!(matches!(err, Err(CarouselError::ConfigParse { .. })));
    }

    #[test]
    fn malformed_json_is_rejected() {
        let err = CarouselConfig::from_json("{ current_class");
        assert!(matches!(err, Err(CarouselError::ConfigParse { .. })));
    }

    #[test]
    fn empty_selector_is_rejected() {
        let err = CarouselConfig::from_json(r#"{ "nav_selector": "  " }"#);
        assert_eq!(
            err,
            Err(CarouselError::InvalidConfig {
                field: "nav_selector",
                reason: "selector must not be empty",
            })
        );
    }

    #[test]
    fn class_names_with_whitespace_are_rejected() {
        let config = CarouselConfig {
            hidden_class: "is hidden".to_string(),
            ..CarouselConfig::default()
        };
        assert_eq!(
            config.validate(),
            Err(CarouselError::InvalidConfig {
                field: "hidden_class",
                reason: "class name must not contain whitespace",
            })
        );
    }
}
