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
#![allow(clippy::multiple_crate_versions)]
//! Vitrine browser binding.
//! This crate mounts the carousel controller onto existing page markup and wires its click and resize listeners.

pub mod error;
pub mod logic;

pub use error::MountError;

#[cfg(target_arch = "wasm32")]
mod dom;

#[cfg(target_arch = "wasm32")]
pub use dom::{CarouselHandle, mount, mount_all};

#[cfg(target_arch = "wasm32")]
use vitrine_core::CarouselConfig;
#[cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::*;

/// Mount every carousel on the current page with default configuration.
///
/// Carousels stay attached for the lifetime of the page.
#[cfg(target_arch = "wasm32")]
pub fn run_app() {
    console_error_panic_hook::set_once();
    let document = gloo::utils::document();
    for handle in mount_all(&document, &CarouselConfig::default()) {
        handle.forget();
    }
}

/// Mount every carousel on the page from JavaScript, returning how many mounted.
///
/// `config` is an optional JSON document overriding the default selectors
/// and marker classes.
///
/// # Errors
/// Rejects malformed or invalid configuration.
#[cfg(target_arch = "wasm32")]
#[wasm_bindgen(js_name = mountCarousels)]
pub fn mount_carousels(config: Option<String>) -> Result<usize, JsValue> {
    let config = logic::resolve_root_config(config.as_deref(), &CarouselConfig::default())
        .map_err(|err| JsValue::from_str(&format!("{err}: {err:?}")))?;
    let handles = mount_all(&gloo::utils::document(), &config);
    let mounted = handles.len();
    for handle in handles {
        handle.forget();
    }
    Ok(mounted)
}
