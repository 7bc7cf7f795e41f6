#![forbid(unsafe_code)]
#![deny(
    dead_code,
    unused,
    unused_imports,
    unused_must_use,
    unreachable_pub,
    clippy::all,
    clippy::pedantic,
    clippy::nursery,
    rustdoc::broken_intra_doc_links,
    rustdoc::bare_urls,
    missing_docs
)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::cast_precision_loss)]

//! DOM-free carousel controller.
//!
//! The controller owns a [`CarouselSurface`] describing the page elements and
//! keeps the current slide, its dot and the arrows in step. Browser bindings
//! live in `vitrine-ui`; everything here compiles and tests natively.

pub mod config;
pub mod controller;
pub mod error;
pub mod layout;
pub mod surface;

pub use config::CarouselConfig;
pub use controller::Carousel;
pub use error::{CarouselError, Result};
pub use layout::{Arrow, ArrowVisibility};
pub use surface::CarouselSurface;
