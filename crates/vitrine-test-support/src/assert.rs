//! Assertions over recorded carousel state.

use anyhow::{Result, bail, ensure};
use vitrine_core::Arrow;

use crate::surface::RecordingSurface;

/// Confirms exactly one slide and its paired dot are current; returns the index.
///
/// # Errors
/// Fails when zero or several slides or dots are marked, or when the marked
/// slide and dot disagree.
pub fn single_current(surface: &RecordingSurface) -> Result<usize> {
    let slides = surface.current_slides();
    let dots = surface.current_dots();
    let [slide] = slides.as_slice() else {
        bail!("expected exactly one current slide, found {slides:?}");
    };
    let [dot] = dots.as_slice() else {
        bail!("expected exactly one current dot, found {dots:?}");
    };
    ensure!(slide == dot, "current slide {slide} paired with dot {dot}");
    Ok(*slide)
}

/// Confirms the arrows' hidden markers match the expectation.
///
/// # Errors
/// Fails naming the first arrow whose marker differs.
pub fn arrows(surface: &RecordingSurface, previous_hidden: bool, next_hidden: bool) -> Result<()> {
    for (arrow, expected) in [
        (Arrow::Previous, previous_hidden),
        (Arrow::Next, next_hidden),
    ] {
        let actual = surface.arrow_hidden(arrow);
        ensure!(
            actual == expected,
            "{arrow:?} arrow hidden={actual}, expected {expected}"
        );
    }
    Ok(())
}

/// Confirms the recorded track translation equals `expected` pixels.
///
/// # Errors
/// Fails when no translation was written or it differs from `expected`.
pub fn track_at(surface: &RecordingSurface, expected: f64) -> Result<()> {
    let Some(offset) = surface.track_offset() else {
        bail!("track translation never written");
    };
    ensure!(
        (offset - expected).abs() < f64::EPSILON,
        "track at {offset}px, expected {expected}px"
    );
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn single_current_rejects_unpaired_markers() {
        let surface = RecordingSurface::new(3, 100.0).with_marked(&[2]);
        assert!(single_current(&surface).is_err());
    }

    #[test]
    fn single_current_accepts_paired_markers() -> Result<()> {
        let surface = RecordingSurface::new(3, 100.0);
        assert_eq!(single_current(&surface)?, 0);
        Ok(())
    }

    #[test]
    fn track_at_requires_a_write() {
        let surface = RecordingSurface::new(1, 100.0);
        assert!(track_at(&surface, 0.0).is_err());
    }
}
