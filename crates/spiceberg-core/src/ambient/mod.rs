#![forbid(unsafe_code)]

//! Non-interactive page effects: parallax, particles, reveal-on-view, and
//! smooth in-page navigation.
//!
//! Each submodule is pure math or bookkeeping; the host applies results.

pub mod anchor;
pub mod parallax;
pub mod particles;
pub mod reveal;

pub use anchor::{IN_PAGE_LINK_SELECTOR, scroll_target};
pub use parallax::{FrameGate, HeroFade, layer_offset, parse_speed};
pub use particles::ParticleSpec;
pub use reveal::{REVEAL_SELECTORS, RevealOptions, RevealTracker};

/// Selectors of elements that move with scroll depth.
pub const PARALLAX_SELECTORS: [&str; 2] = [".parallax-layer", ".menu-parallax"];
/// Optional hero banner that fades out while scrolling.
pub const HERO_SELECTOR: &str = ".hero-content";
/// Attribute carrying a parallax element's speed multiplier.
pub const PARALLAX_SPEED_ATTR: &str = "data-parallax-speed";
