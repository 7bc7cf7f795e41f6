//! In-memory carousel surface that records every write.

use std::cell::Cell;
use std::rc::Rc;

use vitrine_core::{Arrow, CarouselSurface};

/// Shared handle to the simulated viewport width.
///
/// Cloned out of a [`RecordingSurface`] before the surface moves into a
/// controller, so tests can resize the page afterwards.
#[derive(Clone, Debug)]
pub struct Viewport {
    width: Rc<Cell<f64>>,
}

impl Viewport {
    /// Change the width the next measurement will report.
    pub fn set_width(&self, width: f64) {
        self.width.set(width);
    }

    /// Width the next measurement will report.
    #[must_use]
    pub fn width(&self) -> f64 {
        self.width.get()
    }
}

/// Everything a controller has written to the surface.
#[derive(Clone, Debug, PartialEq)]
pub struct SurfaceSnapshot {
    /// Applied `left` offsets, `None` until written.
    pub lefts: Vec<Option<f64>>,
    /// Applied track translation, `None` until written.
    pub track_offset: Option<f64>,
    /// Current marker per slide.
    pub slide_current: Vec<bool>,
    /// Current marker per dot.
    pub dot_current: Vec<bool>,
    /// Hidden marker on the previous arrow.
    pub previous_hidden: bool,
    /// Hidden marker on the next arrow.
    pub next_hidden: bool,
}

/// Recording implementation of [`CarouselSurface`].
#[derive(Debug)]
pub struct RecordingSurface {
    viewport: Viewport,
    state: SurfaceSnapshot,
}

impl RecordingSurface {
    /// Surface with `slides` slides, as many dots, and the first slide marked.
    #[must_use]
    pub fn new(slides: usize, width: f64) -> Self {
        let mut slide_current = vec![false; slides];
        let mut dot_current = vec![false; slides];
        if let Some(first) = slide_current.first_mut() {
            *first = true;
        }
        if let Some(first) = dot_current.first_mut() {
            *first = true;
        }
        Self {
            viewport: Viewport {
                width: Rc::new(Cell::new(width)),
            },
            state: SurfaceSnapshot {
                lefts: vec![None; slides],
                track_offset: None,
                slide_current,
                dot_current,
                previous_hidden: false,
                next_hidden: false,
            },
        }
    }

    /// Replace the dot sequence with `dots` unmarked dots.
    #[must_use]
    pub fn with_dots(mut self, dots: usize) -> Self {
        self.state.dot_current = vec![false; dots];
        self
    }

    /// Replace the slide markers so exactly `indices` are marked current.
    #[must_use]
    pub fn with_marked(mut self, indices: &[usize]) -> Self {
        for (index, marked) in self.state.slide_current.iter_mut().enumerate() {
            *marked = indices.contains(&index);
        }
        self
    }

    /// Handle for changing the viewport width later.
    #[must_use]
    pub fn viewport(&self) -> Viewport {
        self.viewport.clone()
    }

    /// Copy of everything written so far.
    #[must_use]
    pub fn snapshot(&self) -> SurfaceSnapshot {
        self.state.clone()
    }

    /// Applied `left` of a slide.
    #[must_use]
    pub fn slide_left(&self, index: usize) -> Option<f64> {
        self.state.lefts.get(index).copied().flatten()
    }

    /// Applied track translation.
    #[must_use]
    pub const fn track_offset(&self) -> Option<f64> {
        self.state.track_offset
    }

    /// Indices of slides marked current.
    #[must_use]
    pub fn current_slides(&self) -> Vec<usize> {
        marked(&self.state.slide_current)
    }

    /// Indices of dots marked current.
    #[must_use]
    pub fn current_dots(&self) -> Vec<usize> {
        marked(&self.state.dot_current)
    }

    /// Hidden marker on an arrow.
    #[must_use]
    pub const fn arrow_hidden(&self, arrow: Arrow) -> bool {
        match arrow {
            Arrow::Previous => self.state.previous_hidden,
            Arrow::Next => self.state.next_hidden,
        }
    }
}

fn marked(flags: &[bool]) -> Vec<usize> {
    flags
        .iter()
        .enumerate()
        .filter_map(|(index, flag)| flag.then_some(index))
        .collect()
}

impl CarouselSurface for RecordingSurface {
    fn slide_count(&self) -> usize {
        self.state.slide_current.len()
    }

    fn dot_count(&self) -> usize {
        self.state.dot_current.len()
    }

    fn slides_marked_current(&self) -> Vec<usize> {
        self.current_slides()
    }

    fn measure_slide_width(&self) -> f64 {
        self.viewport.width()
    }

    fn set_slide_left(&mut self, index: usize, left: f64) {
        if let Some(slot) = self.state.lefts.get_mut(index) {
            *slot = Some(left);
        }
    }

    fn set_track_offset(&mut self, offset: f64) {
        self.state.track_offset = Some(offset);
    }

    fn set_slide_current(&mut self, index: usize, current: bool) {
        if let Some(flag) = self.state.slide_current.get_mut(index) {
            *flag = current;
        }
    }

    fn set_dot_current(&mut self, index: usize, current: bool) {
        if let Some(flag) = self.state.dot_current.get_mut(index) {
            *flag = current;
        }
    }

    fn set_arrow_hidden(&mut self, arrow: Arrow, hidden: bool) {
        match arrow {
            Arrow::Previous => self.state.previous_hidden = hidden,
            Arrow::Next => self.state.next_hidden = hidden,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_surface_marks_first_slide_and_dot() {
        let surface = RecordingSurface::new(3, 100.0);
        assert_eq!(surface.current_slides(), vec![0]);
        assert_eq!(surface.current_dots(), vec![0]);
        assert_eq!(surface.slide_left(0), None);
    }

    #[test]
    fn viewport_handle_drives_measurement() {
        let surface = RecordingSurface::new(2, 100.0);
        let viewport = surface.viewport();
        viewport.set_width(250.0);
        assert!((surface.measure_slide_width() - 250.0).abs() < f64::EPSILON);
    }

    #[test]
    fn out_of_range_writes_are_dropped() {
        let mut surface = RecordingSurface::new(2, 100.0);
        surface.set_slide_left(5, 10.0);
        surface.set_dot_current(5, true);
        assert_eq!(surface.current_dots(), vec![0]);
        assert_eq!(surface.snapshot().lefts, vec![None, None]);
    }
}
