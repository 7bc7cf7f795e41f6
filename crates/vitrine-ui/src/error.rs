//! Errors raised while binding a carousel to page markup.

use thiserror::Error;
use vitrine_core::CarouselError;

/// Failure to mount a carousel onto a root element.
#[derive(Debug, Error)]
pub enum MountError {
    /// No browser window was available.
    #[error("browser window unavailable")]
    MissingWindow,
    /// A required element was not found under the root.
    #[error("carousel element not found")]
    MissingElement {
        /// Selector that matched nothing.
        selector: String,
    },
    /// A slide or track was not an HTML element and cannot be styled.
    #[error("carousel element is not styleable")]
    NotHtmlElement {
        /// Selector or description of the offending element.
        selector: String,
    },
    /// The browser rejected a selector query.
    #[error("carousel selector query failed")]
    Query {
        /// Selector passed to the query.
        selector: String,
        /// Browser-provided detail.
        detail: String,
    },
    /// The root's configuration attribute was unusable.
    #[error("carousel configuration rejected")]
    Config(#[source] CarouselError),
    /// The markup violated carousel preconditions.
    #[error("carousel markup rejected")]
    Carousel(#[from] CarouselError),
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::error::Error as _;

    #[test]
    fn markup_errors_convert_and_keep_source() {
        let err = MountError::from(CarouselError::NoSlides);
        assert!(matches!(err, MountError::Carousel(CarouselError::NoSlides)));
        assert_eq!(err.to_string(), "carousel markup rejected");
        assert!(err.source().is_some());
    }
}
