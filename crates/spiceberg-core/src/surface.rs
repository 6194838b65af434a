#![forbid(unsafe_code)]

//! Presentation seam between the controller and whatever renders the page.
//!
//! The controller never formats or writes styles itself; it calls a
//! [`Surface`] with typed values. The wasm host implements it over the DOM;
//! [`RecordingSurface`] keeps the last value of everything for native tests
//! and headless hosts.

use core::time::Duration;
use std::collections::BTreeMap;

use crate::ambient::{HeroFade, ParticleSpec};
use crate::css::CardLook;
use crate::theme::ThemeVar;

pub trait Surface {
    /// Write one page-global CSS custom property.
    fn set_theme_var(&mut self, var: ThemeVar, value: &str);
    /// Update the theme indicator's text and its border/text colour.
    fn set_theme_label(&mut self, name: &str, color: &str);
    /// Flash the whole page for `duration`. The surface owns the timer.
    fn flash_theme(&mut self, duration: Duration);
    /// Recolour every particle rendered so far.
    fn recolor_particles(&mut self, color: &str, shadow: &str);
    /// Insert decorative particles. Called once at startup.
    fn spawn_particles(&mut self, particles: &[ParticleSpec]);

    fn set_track_offset(&mut self, px: f64);
    fn set_track_grabbing(&mut self, grabbing: bool);
    fn set_progress(&mut self, percent: f64);
    fn set_card(&mut self, card: usize, look: CardLook);

    fn set_layer_offset(&mut self, layer: usize, px: f64);
    fn set_hero(&mut self, fade: HeroFade);

    /// Park a reveal-on-view element below its rest position, transparent.
    fn hide_for_reveal(&mut self, element: usize, offset: f64);
    /// Fade a reveal-on-view element in and slide it to rest.
    fn reveal(&mut self, element: usize);
}

/// Reveal state of an element as seen by a [`RecordingSurface`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum RevealState {
    Hidden { offset: f64 },
    Revealed,
}

/// In-memory [`Surface`] that records the latest value of every output.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RecordingSurface {
    pub vars: BTreeMap<&'static str, String>,
    pub label: Option<(String, String)>,
    pub flashes: Vec<Duration>,
    pub particle_color: Option<(String, String)>,
    pub particles: Vec<ParticleSpec>,
    pub track_offset: Option<f64>,
    pub grabbing: bool,
    pub progress: Option<f64>,
    pub cards: BTreeMap<usize, CardLook>,
    /// Opacity survives transform-only updates, like an inline style would.
    pub card_opacity: BTreeMap<usize, f64>,
    pub layers: BTreeMap<usize, f64>,
    pub hero: Option<HeroFade>,
    pub reveals: BTreeMap<usize, RevealState>,
    /// Total number of surface calls.
    pub writes: usize,
}

impl RecordingSurface {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn var(&self, var: ThemeVar) -> Option<&str> {
        self.vars.get(var.css_name()).map(String::as_str)
    }

    #[must_use]
    pub fn label_text(&self) -> Option<&str> {
        self.label.as_ref().map(|(name, _)| name.as_str())
    }
}

impl Surface for RecordingSurface {
    fn set_theme_var(&mut self, var: ThemeVar, value: &str) {
        self.writes += 1;
        self.vars.insert(var.css_name(), value.to_owned());
    }

    fn set_theme_label(&mut self, name: &str, color: &str) {
        self.writes += 1;
        self.label = Some((name.to_owned(), color.to_owned()));
    }

    fn flash_theme(&mut self, duration: Duration) {
        self.writes += 1;
        self.flashes.push(duration);
    }

    fn recolor_particles(&mut self, color: &str, shadow: &str) {
        self.writes += 1;
        self.particle_color = Some((color.to_owned(), shadow.to_owned()));
    }

    fn spawn_particles(&mut self, particles: &[ParticleSpec]) {
        self.writes += 1;
        self.particles.extend_from_slice(particles);
    }

    fn set_track_offset(&mut self, px: f64) {
        self.writes += 1;
        self.track_offset = Some(px);
    }

    fn set_track_grabbing(&mut self, grabbing: bool) {
        self.writes += 1;
        self.grabbing = grabbing;
    }

    fn set_progress(&mut self, percent: f64) {
        self.writes += 1;
        self.progress = Some(percent);
    }

    fn set_card(&mut self, card: usize, look: CardLook) {
        self.writes += 1;
        if let Some(opacity) = look.opacity {
            self.card_opacity.insert(card, opacity);
        }
        self.cards.insert(card, look);
    }

    fn set_layer_offset(&mut self, layer: usize, px: f64) {
        self.writes += 1;
        self.layers.insert(layer, px);
    }

    fn set_hero(&mut self, fade: HeroFade) {
        self.writes += 1;
        self.hero = Some(fade);
    }

    fn hide_for_reveal(&mut self, element: usize, offset: f64) {
        self.writes += 1;
        self.reveals.insert(element, RevealState::Hidden { offset });
    }

    fn reveal(&mut self, element: usize) {
        self.writes += 1;
        self.reveals.insert(element, RevealState::Revealed);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::css::CardTransform;

    #[test]
    fn opacity_persists_across_transform_only_updates() {
        let mut s = RecordingSurface::new();
        s.set_card(
            0,
            CardLook {
                transform: CardTransform::Scale(0.95),
                opacity: Some(0.6),
            },
        );
        s.set_card(
            0,
            CardLook {
                transform: CardTransform::Scale(1.05),
                opacity: None,
            },
        );
        assert_eq!(s.card_opacity.get(&0), Some(&0.6));
        assert_eq!(s.cards[&0].transform, CardTransform::Scale(1.05));
        assert_eq!(s.writes, 2);
    }

    #[test]
    fn vars_are_keyed_by_css_name() {
        let mut s = RecordingSurface::new();
        s.set_theme_var(ThemeVar::Accent, "#fff");
        assert_eq!(s.vars.get("--accent-color").map(String::as_str), Some("#fff"));
        assert_eq!(s.var(ThemeVar::Accent), Some("#fff"));
    }
}
