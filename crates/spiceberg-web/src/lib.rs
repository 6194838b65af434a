#![forbid(unsafe_code)]

//! WASM front-end for the SPICE BERG landing page.
//!
//! The page state lives in [`spiceberg_core::LandingController`]; this crate
//! resolves the DOM anchors it needs, renders through a `web-sys` surface,
//! and forwards browser events into the controller. Initialization runs
//! automatically when the module is instantiated (once the document is
//! ready) and fails fast if a required anchor is missing.
//!
//! Anchor resolution is host-agnostic and tested natively; the DOM
//! binding only compiles for `wasm32`.

pub mod anchors;

#[cfg(target_arch = "wasm32")]
mod dom;
#[cfg(target_arch = "wasm32")]
mod wasm;

#[cfg(target_arch = "wasm32")]
pub use wasm::SpiceBerg;
