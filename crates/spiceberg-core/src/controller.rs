#![forbid(unsafe_code)]

//! Carousel/theme controller.
//!
//! [`LandingController`] owns every piece of mutable page state: the carousel
//! index, the active theme key, in-flight gesture coordinates, the scroll
//! frame gate, and reveal bookkeeping. The host constructs it once, shares it
//! between event callbacks, and passes a [`Surface`] into each call.
//!
//! State transitions are computed by the pure types in [`crate::carousel`],
//! [`crate::gesture`], and [`crate::ambient`]; this module only sequences them
//! and renders the results.

use rand::Rng;

use crate::ambient::{self, FrameGate, HeroFade, RevealOptions, RevealTracker};
use crate::carousel::{Carousel, DishItem, Emphasis, SlideState, Step};
use crate::config::LandingConfig;
use crate::css::{CardLook, CardTransform};
use crate::error::Result;
use crate::gesture::{DragTracker, SwipeTracker, Tilt};
use crate::surface::Surface;
use crate::theme::ThemeTable;

/// Map a DOM `KeyboardEvent.key` value to a carousel step.
#[must_use]
pub fn key_step(key: &str) -> Option<Step> {
    match key {
        "ArrowLeft" => Some(Step::Previous),
        "ArrowRight" => Some(Step::Next),
        _ => None,
    }
}

#[derive(Debug, Clone)]
pub struct LandingController {
    config: LandingConfig,
    themes: ThemeTable,
    carousel: Carousel,
    active_theme: String,
    swipe: SwipeTracker,
    drag: DragTracker,
    frame_gate: FrameGate,
    layer_speeds: Vec<f64>,
    reveal: RevealTracker,
}

impl LandingController {
    /// Validate `config` and build a controller over `items`.
    ///
    /// Nothing is rendered until [`boot`](Self::boot).
    pub fn new(config: LandingConfig, themes: ThemeTable, items: Vec<DishItem>) -> Result<Self> {
        config.validate()?;
        let carousel = Carousel::new(items, config.slide_stride())?;
        Ok(Self {
            swipe: SwipeTracker::new(config.swipe_threshold),
            drag: DragTracker::new(config.drag_threshold, config.drag_multiplier),
            active_theme: config.default_theme.clone(),
            themes,
            carousel,
            frame_gate: FrameGate::new(),
            layer_speeds: Vec::new(),
            reveal: RevealTracker::default(),
            config,
        })
    }

    #[must_use]
    pub fn config(&self) -> &LandingConfig {
        &self.config
    }

    #[must_use]
    pub fn themes(&self) -> &ThemeTable {
        &self.themes
    }

    #[must_use]
    pub fn carousel(&self) -> &Carousel {
        &self.carousel
    }

    #[must_use]
    pub const fn active_index(&self) -> usize {
        self.carousel.index()
    }

    #[must_use]
    pub fn active_theme(&self) -> &str {
        &self.active_theme
    }

    /// Startup: lay out particles, then show the first slide (which applies
    /// its theme if it differs from the default).
    pub fn boot<S: Surface + ?Sized, R: Rng + ?Sized>(&mut self, surface: &mut S, rng: &mut R) {
        let particles = ambient::particles::spawn(rng, self.config.particle_count);
        surface.spawn_particles(&particles);
        self.go_to_slide(0, surface);
        tracing::info!(
            cards = self.carousel.len(),
            particles = particles.len(),
            theme = %self.active_theme,
            "landing page booted"
        );
    }

    // ───────────────────────────── Themes ─────────────────────────────

    /// Apply a theme by key. Unknown keys change nothing and return `false`.
    pub fn apply_theme<S: Surface + ?Sized>(&mut self, key: &str, surface: &mut S) -> bool {
        let Some(theme) = self.themes.get(key).copied() else {
            return false;
        };
        for (var, value) in theme.vars() {
            surface.set_theme_var(var, value);
        }
        surface.set_theme_label(theme.name, theme.accent);
        surface.flash_theme(self.config.flash_duration());
        surface.recolor_particles(theme.particle, &theme.particle_shadow());
        tracing::debug!(from = %self.active_theme, to = theme.key, "theme applied");
        self.active_theme.clear();
        self.active_theme.push_str(theme.key);
        true
    }

    // ──────────────────────────── Navigation ────────────────────────────

    /// Move to `target` (wrapping) and render the slide.
    pub fn go_to_slide<S: Surface + ?Sized>(&mut self, target: isize, surface: &mut S) {
        let state = self.carousel.go_to(target);
        self.render_slide(&state, surface);
    }

    pub fn step<S: Surface + ?Sized>(&mut self, step: Step, surface: &mut S) {
        self.go_to_slide(self.carousel.index() as isize + step.delta(), surface);
    }

    pub fn next<S: Surface + ?Sized>(&mut self, surface: &mut S) {
        self.step(Step::Next, surface);
    }

    pub fn prev<S: Surface + ?Sized>(&mut self, surface: &mut S) {
        self.step(Step::Previous, surface);
    }

    fn render_slide<S: Surface + ?Sized>(&mut self, state: &SlideState, surface: &mut S) {
        surface.set_track_offset(state.track_offset);
        surface.set_progress(state.progress_percent);

        if let Some(key) = state.theme.as_deref() {
            if key != self.active_theme && !self.apply_theme(key, surface) {
                tracing::warn!(card = state.index, theme = key, "card names an unknown theme");
            }
        }

        for (card, emphasis) in self.carousel.emphases().enumerate() {
            surface.set_card(card, self.resting_look(emphasis, true));
        }
        tracing::debug!(
            index = state.index,
            progress = state.progress_percent,
            "slide shown"
        );
    }

    fn resting_look(&self, emphasis: Emphasis, with_opacity: bool) -> CardLook {
        let (scale, opacity) = match emphasis {
            Emphasis::Active => (self.config.active_scale, 1.0),
            Emphasis::Inactive => (self.config.inactive_scale, self.config.inactive_opacity),
        };
        CardLook {
            transform: CardTransform::Scale(scale),
            opacity: with_opacity.then_some(opacity),
        }
    }

    /// Keyboard navigation. Returns `true` if the key was handled.
    pub fn key_down<S: Surface + ?Sized>(&mut self, key: &str, surface: &mut S) -> bool {
        match key_step(key) {
            Some(step) => {
                self.step(step, surface);
                true
            }
            None => false,
        }
    }

    // ───────────────────────────── Gestures ─────────────────────────────

    pub fn touch_start(&mut self, x: f64) {
        self.swipe.touch_start(x);
    }

    /// Finish a swipe; navigates by one step if it cleared the threshold.
    pub fn touch_end<S: Surface + ?Sized>(&mut self, x: f64, surface: &mut S) -> Option<Step> {
        let step = self.swipe.touch_end(x)?;
        self.step(step, surface);
        Some(step)
    }

    /// `x` is relative to the track's left edge.
    pub fn mouse_down<S: Surface + ?Sized>(&mut self, x: f64, surface: &mut S) {
        self.drag.mouse_down(x);
        surface.set_track_grabbing(true);
    }

    pub fn mouse_leave<S: Surface + ?Sized>(&mut self, surface: &mut S) {
        self.drag.mouse_leave();
        surface.set_track_grabbing(false);
    }

    /// Finish a drag; navigates by one step if it cleared the threshold.
    pub fn mouse_up<S: Surface + ?Sized>(&mut self, x: f64, surface: &mut S) -> Option<Step> {
        surface.set_track_grabbing(false);
        let step = self.drag.mouse_up(x)?;
        self.step(step, surface);
        Some(step)
    }

    /// Pointer moved over a card: tilt it toward the pointer.
    pub fn card_hover<S: Surface + ?Sized>(
        &mut self,
        card: usize,
        x: f64,
        y: f64,
        width: f64,
        height: f64,
        surface: &mut S,
    ) {
        if card >= self.carousel.len() {
            return;
        }
        let tilt = Tilt::from_pointer(x, y, width, height, self.config.tilt_damping);
        surface.set_card(
            card,
            CardLook {
                transform: CardTransform::Tilt {
                    perspective: self.config.tilt_perspective,
                    tilt,
                    scale: self.config.active_scale,
                },
                opacity: None,
            },
        );
    }

    /// Pointer left a card: restore its resting scale.
    pub fn card_leave<S: Surface + ?Sized>(&mut self, card: usize, surface: &mut S) {
        if card >= self.carousel.len() {
            return;
        }
        surface.set_card(card, self.resting_look(self.carousel.emphasis(card), false));
    }

    // ─────────────────────────── Scroll effects ───────────────────────────

    /// Register parallax layers by their raw `data-parallax-speed` values.
    pub fn set_parallax_layers<'a, I>(&mut self, speeds: I)
    where
        I: IntoIterator<Item = Option<&'a str>>,
    {
        let default = self.config.default_parallax_speed;
        self.layer_speeds = speeds
            .into_iter()
            .map(|raw| ambient::parse_speed(raw, default))
            .collect();
    }

    #[must_use]
    pub fn layer_speeds(&self) -> &[f64] {
        &self.layer_speeds
    }

    /// A scroll event fired. Returns `true` if the host should schedule an
    /// animation frame; `false` when one is already pending.
    pub fn scroll_requested(&mut self) -> bool {
        self.frame_gate.request()
    }

    #[must_use]
    pub const fn frame_pending(&self) -> bool {
        self.frame_gate.is_pending()
    }

    /// Animation-frame callback: reposition parallax layers and, if the
    /// page has one, fade the hero banner.
    pub fn animation_frame<S: Surface + ?Sized>(
        &mut self,
        scroll_y: f64,
        viewport_height: f64,
        has_hero: bool,
        surface: &mut S,
    ) {
        for (layer, &speed) in self.layer_speeds.iter().enumerate() {
            surface.set_layer_offset(layer, ambient::layer_offset(scroll_y, speed));
        }
        if has_hero {
            surface.set_hero(HeroFade::at(
                scroll_y,
                viewport_height,
                self.config.hero_speed,
            ));
        }
        self.frame_gate.complete();
    }

    // ──────────────────────────── Reveal on view ────────────────────────────

    #[must_use]
    pub fn reveal_options(&self) -> RevealOptions {
        RevealOptions {
            threshold: self.config.reveal_threshold,
            bottom_margin: self.config.reveal_bottom_margin,
            hidden_offset: self.config.reveal_offset,
        }
    }

    /// Start tracking `count` reveal-on-view elements, hiding each one.
    pub fn track_reveals<S: Surface + ?Sized>(&mut self, count: usize, surface: &mut S) {
        self.reveal = RevealTracker::new(count);
        for element in 0..count {
            surface.hide_for_reveal(element, self.config.reveal_offset);
        }
    }

    /// Visibility observer callback for one element.
    pub fn reveal_observed<S: Surface + ?Sized>(
        &mut self,
        element: usize,
        intersecting: bool,
        surface: &mut S,
    ) -> bool {
        let reveal = self.reveal.observe(element, intersecting);
        if reveal {
            surface.reveal(element);
        }
        reveal
    }

    #[must_use]
    pub fn all_revealed(&self) -> bool {
        self.reveal.all_revealed()
    }
}
