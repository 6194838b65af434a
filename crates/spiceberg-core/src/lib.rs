#![forbid(unsafe_code)]

//! Host-agnostic model of the SPICE BERG landing page.
//!
//! # Role
//! `spiceberg-core` holds everything about the page that can be decided
//! without a browser: the cyclic dish carousel, the theme table, gesture
//! classification, and the math behind parallax, particles, and
//! reveal-on-view. The wasm front-end (`spiceberg-web`) binds these to the
//! DOM; native tests drive them through [`surface::RecordingSurface`].
//!
//! # This crate provides
//! - [`LandingController`], the single owner of mutable page state.
//! - [`Carousel`] and [`SlideState`], the pure slide state machine.
//! - [`ThemeTable`] and [`Theme`], the fixed palette configuration.
//! - [`Surface`], the presentation seam every host implements.
//! - [`LandingConfig`], named tunables with validated JSON overrides.

pub mod ambient;
pub mod carousel;
pub mod config;
pub mod controller;
pub mod css;
pub mod error;
pub mod gesture;
pub mod surface;
pub mod theme;

pub use carousel::{Carousel, DishItem, Emphasis, SlideState, Step};
pub use config::LandingConfig;
pub use controller::{LandingController, key_step};
pub use error::{LandingError, Result};
pub use surface::{RecordingSurface, Surface};
pub use theme::{Theme, ThemeTable, ThemeVar};
