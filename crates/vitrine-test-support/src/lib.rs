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

//! Shared test helpers used across integration suites.
//! Layout: surface.rs (in-memory recording surface), assert.rs (invariant assertions).

pub mod assert;
pub mod surface;

pub use surface::{RecordingSurface, SurfaceSnapshot, Viewport};
