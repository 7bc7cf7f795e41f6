//! Error types for carousel construction and navigation.

use thiserror::Error;

/// Primary error type for carousel operations.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum CarouselError {
    /// The track holds no slides.
    #[error("carousel has no slides")]
    NoSlides,
    /// Slide and dot sequences are not index-paired.
    #[error("slide and dot counts differ")]
    IndicatorMismatch {
        /// Number of slides found in the track.
        slides: usize,
        /// Number of dots found in the navigation container.
        dots: usize,
    },
    /// More than one slide carried the current marker at startup.
    #[error("more than one slide marked current")]
    MultipleCurrent {
        /// Indices of every slide carrying the marker.
        indices: Vec<usize>,
    },
    /// A slide index did not address a slide.
    #[error("slide index out of range")]
    IndexOutOfRange {
        /// Requested index.
        index: usize,
        /// Number of slides.
        len: usize,
    },
    /// A configuration field held an unusable value.
    #[error("invalid carousel configuration")]
    InvalidConfig {
        /// Name of the offending field.
        field: &'static str,
        /// Machine-readable reason for the failure.
        reason: &'static str,
    },
    /// Configuration payload was not valid JSON for [`crate::CarouselConfig`].
    #[error("malformed carousel configuration")]
    ConfigParse {
        /// Parser error detail.
        detail: String,
    },
}

/// Convenience alias for carousel results.
pub type Result<T> = std::result::Result<T, CarouselError>;
