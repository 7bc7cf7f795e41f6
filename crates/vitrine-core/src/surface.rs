//! Host surface the controller reads from and writes to.

use crate::layout::Arrow;

/// Page elements backing a carousel.
///
/// Indices address slides and dots in document order; implementations
/// guarantee the sequences stay fixed for the surface's lifetime. Writes are
/// infallible from the controller's point of view, so hosts report their own
/// failures.
pub trait CarouselSurface {
    /// Number of slide elements in the track.
    fn slide_count(&self) -> usize;

    /// Number of dot controls in the navigation container.
    fn dot_count(&self) -> usize;

    /// Indices of slides that carry the current marker.
    fn slides_marked_current(&self) -> Vec<usize>;

    /// Rendered width of the first slide, in pixels.
    fn measure_slide_width(&self) -> f64;

    /// Apply the horizontal offset of a slide.
    fn set_slide_left(&mut self, index: usize, left: f64);

    /// Apply the horizontal translation of the track.
    fn set_track_offset(&mut self, offset: f64);

    /// Toggle the current marker on a slide.
    fn set_slide_current(&mut self, index: usize, current: bool);

    /// Toggle the current marker on a dot.
    fn set_dot_current(&mut self, index: usize, current: bool);

    /// Toggle the hidden marker on an arrow.
    fn set_arrow_hidden(&mut self, arrow: Arrow, hidden: bool);
}
