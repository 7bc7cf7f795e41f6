//! Carousel controller: tracks the current slide and drives the surface.
//!
//! # Design
//! - The current index is explicit state, updated with the visual markers.
//! - Markup preconditions are checked once at construction.
//! - Every transition moves the track, syncs the dot, then refreshes arrows.

use tracing::{debug, warn};

use crate::error::{CarouselError, Result};
use crate::layout::{
    Arrow, arrow_visibility, next_index, previous_index, slide_left, track_offset,
};
use crate::surface::CarouselSurface;

/// Controller for a single carousel instance.
#[derive(Debug)]
pub struct Carousel<S> {
    surface: S,
    len: usize,
    current: usize,
    width: f64,
}

impl<S: CarouselSurface> Carousel<S> {
    /// Capture the surface, lay out the slides and normalize markers.
    ///
    /// When no slide is marked current the first slide becomes current.
    ///
    /// # Errors
    /// Returns [`CarouselError::NoSlides`] for an empty track,
    /// [`CarouselError::IndicatorMismatch`] when dots and slides are not
    /// index-paired, [`CarouselError::MultipleCurrent`] when several slides
    /// are marked, and [`CarouselError::IndexOutOfRange`] when the surface
    /// reports a marked index past the end.
    pub fn new(surface: S) -> Result<Self> {
        let len = surface.slide_count();
        if len == 0 {
            return Err(CarouselError::NoSlides);
        }
        let dots = surface.dot_count();
        if dots != len {
            return Err(CarouselError::IndicatorMismatch { slides: len, dots });
        }
        let current = match surface.slides_marked_current().as_slice() {
            [] => {
                warn!(slides = len, "no slide marked current; starting at first");
                0
            }
            [index] if *index < len => *index,
            [index] => {
                return Err(CarouselError::IndexOutOfRange { index: *index, len });
            }
            indices => {
                return Err(CarouselError::MultipleCurrent {
                    indices: indices.to_vec(),
                });
            }
        };

        let width = surface.measure_slide_width();
        let mut carousel = Self {
            surface,
            len,
            current,
            width,
        };
        carousel.layout_slides();
        for index in 0..len {
            carousel.surface.set_slide_current(index, index == current);
            carousel.surface.set_dot_current(index, index == current);
        }
        carousel.center_track();
        carousel.update_arrow_visibility(current);
        debug!(slides = len, current, width, "carousel initialized");
        Ok(carousel)
    }

    /// Index of the current slide and dot.
    #[must_use]
    pub const fn current_index(&self) -> usize {
        self.current
    }

    /// Number of slides (and dots).
    #[must_use]
    pub const fn slide_count(&self) -> usize {
        self.len
    }

    /// Slide width from the most recent measurement.
    #[must_use]
    pub const fn slide_width(&self) -> f64 {
        self.width
    }

    /// Borrow the underlying surface.
    #[must_use]
    pub const fn surface(&self) -> &S {
        &self.surface
    }

    /// Release the underlying surface.
    #[must_use]
    pub fn into_surface(self) -> S {
        self.surface
    }

    /// Handle a click on the previous arrow, wrapping to the last slide.
    pub fn on_previous_click(&mut self) {
        let target = previous_index(self.current, self.len);
        self.transition(target);
    }

    /// Handle a click on the next arrow, wrapping to the first slide.
    pub fn on_next_click(&mut self) {
        let target = next_index(self.current, self.len);
        self.transition(target);
    }

    /// Handle a click inside the dot navigation.
    ///
    /// `dot` is the index of the dot the click resolved to, or `None` when it
    /// landed elsewhere. Unresolved or out-of-range clicks are ignored.
    /// Returns the new current index when a transition happened.
    pub fn on_dot_click(&mut self, dot: Option<usize>) -> Option<usize> {
        let Some(target) = dot.filter(|index| *index < self.len) else {
            debug!(?dot, "ignoring click outside dot controls");
            return None;
        };
        self.transition(target);
        Some(target)
    }

    /// Move directly to a slide.
    ///
    /// # Errors
    /// Returns [`CarouselError::IndexOutOfRange`] when `index` is not a slide.
    pub fn show(&mut self, index: usize) -> Result<()> {
        if index >= self.len {
            return Err(CarouselError::IndexOutOfRange {
                index,
                len: self.len,
            });
        }
        self.transition(index);
        Ok(())
    }

    /// Re-measure the slide width, re-lay out slides and re-center the track.
    pub fn on_resize(&mut self) {
        self.width = self.surface.measure_slide_width();
        self.layout_slides();
        self.center_track();
        debug!(width = self.width, current = self.current, "carousel resized");
    }

    fn transition(&mut self, target: usize) {
        let from = self.current;
        self.go_to_slide(from, target);
        self.sync_indicator(from, target);
        self.update_arrow_visibility(target);
        self.current = target;
        debug!(from, to = target, "carousel moved");
    }

    fn go_to_slide(&mut self, current: usize, target: usize) {
        self.surface
            .set_track_offset(track_offset(slide_left(target, self.width)));
        self.surface.set_slide_current(current, false);
        self.surface.set_slide_current(target, true);
    }

    fn sync_indicator(&mut self, current: usize, target: usize) {
        self.surface.set_dot_current(current, false);
        self.surface.set_dot_current(target, true);
    }

    fn update_arrow_visibility(&mut self, target: usize) {
        let visibility = arrow_visibility(target, self.len - 1);
        for arrow in [Arrow::Previous, Arrow::Next] {
            self.surface.set_arrow_hidden(arrow, visibility.hidden(arrow));
        }
    }

    fn layout_slides(&mut self) {
        for index in 0..self.len {
            self.surface
                .set_slide_left(index, slide_left(index, self.width));
        }
    }

    fn center_track(&mut self) {
        self.surface
            .set_track_offset(track_offset(slide_left(self.current, self.width)));
    }
}
