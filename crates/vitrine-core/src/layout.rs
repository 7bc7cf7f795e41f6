//! Geometry and navigation rules shared by every carousel host.
//!
//! # Design
//! - Slides sit side by side; slide `i` starts at `i * width`.
//! - The track is shifted left by the current slide's offset.
//! - Navigation wraps in both directions.

/// Navigation arrow controls flanking the track.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Arrow {
    /// Moves to the preceding slide.
    Previous,
    /// Moves to the following slide.
    Next,
}

/// Hidden state for both arrows at a given slide index.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ArrowVisibility {
    /// Whether the previous arrow is hidden.
    pub previous_hidden: bool,
    /// Whether the next arrow is hidden.
    pub next_hidden: bool,
}

impl ArrowVisibility {
    /// Hidden flag for a single arrow.
    #[must_use]
    pub const fn hidden(self, arrow: Arrow) -> bool {
        match arrow {
            Arrow::Previous => self.previous_hidden,
            Arrow::Next => self.next_hidden,
        }
    }
}

/// Horizontal offset of the slide at `index`.
#[must_use]
pub fn slide_left(index: usize, width: f64) -> f64 {
    width * index as f64
}

/// Track translation that brings a slide with the given `left` to the origin.
#[must_use]
pub fn track_offset(left: f64) -> f64 {
    // Subtracting from zero keeps the first slide at 0 rather than -0.
    0.0 - left
}

/// Successor of `current`, wrapping to the first slide after the last.
#[must_use]
pub const fn next_index(current: usize, len: usize) -> usize {
    if current + 1 >= len { 0 } else { current + 1 }
}

/// Predecessor of `current`, wrapping to the last slide before the first.
#[must_use]
pub const fn previous_index(current: usize, len: usize) -> usize {
    if current == 0 {
        len.saturating_sub(1)
    } else {
        current - 1
    }
}

/// Arrow visibility for `index` in a carousel whose last slide is `last`.
///
/// The first-slide rule is checked first, so a single-slide carousel shows
/// only the next arrow.
#[must_use]
pub const fn arrow_visibility(index: usize, last: usize) -> ArrowVisibility {
    if index == 0 {
        ArrowVisibility {
            previous_hidden: true,
            next_hidden: false,
        }
    } else if index == last {
        ArrowVisibility {
            previous_hidden: false,
            next_hidden: true,
        }
    } else {
        ArrowVisibility {
            previous_hidden: false,
            next_hidden: false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn slides_are_laid_out_by_width() {
        assert!((slide_left(0, 300.0) - 0.0).abs() < f64::EPSILON);
        assert!((slide_left(3, 300.0) - 900.0).abs() < f64::EPSILON);
        assert!((slide_left(2, 412.5) - 825.0).abs() < f64::EPSILON);
    }

    #[test]
    fn track_offset_is_negated_without_negative_zero() {
        assert!(track_offset(0.0).is_sign_positive());
        assert!((track_offset(600.0) + 600.0).abs() < f64::EPSILON);
    }

    #[test]
    fn navigation_wraps_at_both_ends() {
        assert_eq!(next_index(0, 4), 1);
        assert_eq!(next_index(3, 4), 0);
        assert_eq!(previous_index(2, 4), 1);
        assert_eq!(previous_index(0, 4), 3);
        assert_eq!(next_index(0, 1), 0);
        assert_eq!(previous_index(0, 1), 0);
    }

    #[test]
    fn arrows_follow_position() {
        let first = arrow_visibility(0, 3);
        assert!(first.hidden(Arrow::Previous));
        assert!(!first.hidden(Arrow::Next));

        let last = arrow_visibility(3, 3);
        assert!(!last.hidden(Arrow::Previous));
        assert!(last.hidden(Arrow::Next));

        let middle = arrow_visibility(1, 3);
        assert!(!middle.previous_hidden);
        assert!(!middle.next_hidden);
    }

    #[test]
    fn single_slide_prefers_first_slide_rule() {
        let only = arrow_visibility(0, 0);
        assert!(only.previous_hidden);
        assert!(!only.next_hidden);
    }
}
