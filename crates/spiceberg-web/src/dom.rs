#![forbid(unsafe_code)]

//! `web-sys` implementations of [`ElementLookup`] and [`Surface`].

use core::time::Duration;

use spiceberg_core::ambient::{HeroFade, ParticleSpec};
use spiceberg_core::css::{self, CardLook};
use spiceberg_core::{Surface, ThemeVar};
use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;
use web_sys::{Document, HtmlElement};

use crate::anchors::{ElementLookup, PageAnchors};

const PARTICLE_CLASS: &str = "particle";
const PARTICLE_SELECTOR: &str = ".particle";
const FLASH_CLASS: &str = "theme-transition";
const REVEAL_TRANSITION: &str = "all 0.6s ease-out";

/// Set one inline style property, ignoring host rejections.
pub(crate) fn set_style(element: &HtmlElement, property: &str, value: &str) {
    let _ = element.style().set_property(property, value);
}

impl ElementLookup for Document {
    type Element = HtmlElement;

    fn by_id(&self, id: &str) -> Option<HtmlElement> {
        self.get_element_by_id(id)?.dyn_into::<HtmlElement>().ok()
    }

    fn select_all(&self, selector: &str) -> Vec<HtmlElement> {
        let Ok(nodes) = self.query_selector_all(selector) else {
            return Vec::new();
        };
        (0..nodes.length())
            .filter_map(|i| nodes.item(i))
            .filter_map(|node| node.dyn_into::<HtmlElement>().ok())
            .collect()
    }

    fn attribute(&self, element: &HtmlElement, name: &str) -> Option<String> {
        element.get_attribute(name)
    }
}

/// DOM-backed presentation surface.
pub struct DomSurface {
    document: Document,
    root: HtmlElement,
    body: HtmlElement,
    anchors: PageAnchors<HtmlElement>,
}

impl DomSurface {
    pub fn new(document: Document, anchors: PageAnchors<HtmlElement>) -> Result<Self, JsValue> {
        let root = document
            .document_element()
            .ok_or_else(|| JsValue::from_str("document has no root element"))?
            .dyn_into::<HtmlElement>()
            .map_err(|_| JsValue::from_str("document root is not an HTML element"))?;
        let body = document
            .body()
            .ok_or_else(|| JsValue::from_str("document has no body"))?;
        Ok(Self {
            document,
            root,
            body,
            anchors,
        })
    }

    pub fn anchors(&self) -> &PageAnchors<HtmlElement> {
        &self.anchors
    }

    fn schedule_flash_end(&self, duration: Duration) {
        let Some(window) = web_sys::window() else {
            return;
        };
        let body = self.body.clone();
        let clear = Closure::once_into_js(move || {
            let _ = body.class_list().remove_1(FLASH_CLASS);
        });
        let millis = i32::try_from(duration.as_millis()).unwrap_or(i32::MAX);
        let _ = window.set_timeout_with_callback_and_timeout_and_arguments_0(
            clear.unchecked_ref(),
            millis,
        );
    }
}

impl Surface for DomSurface {
    fn set_theme_var(&mut self, var: ThemeVar, value: &str) {
        set_style(&self.root, var.css_name(), value);
    }

    fn set_theme_label(&mut self, name: &str, color: &str) {
        let label = &self.anchors.theme_label;
        label.set_text_content(Some(name));
        set_style(label, "border-color", color);
        set_style(label, "color", color);
    }

    fn flash_theme(&mut self, duration: Duration) {
        let _ = self.body.class_list().add_1(FLASH_CLASS);
        self.schedule_flash_end(duration);
    }

    /// Recolours every particle in the field, including any shipped in the
    /// markup.
    fn recolor_particles(&mut self, color: &str, shadow: &str) {
        let Ok(nodes) = self
            .anchors
            .particle_field
            .query_selector_all(PARTICLE_SELECTOR)
        else {
            return;
        };
        let particles = (0..nodes.length())
            .filter_map(|i| nodes.item(i))
            .filter_map(|node| node.dyn_into::<HtmlElement>().ok());
        for particle in particles {
            set_style(&particle, "background", color);
            set_style(&particle, "box-shadow", shadow);
        }
    }

    fn spawn_particles(&mut self, particles: &[ParticleSpec]) {
        for spec in particles {
            let Some(particle) = self
                .document
                .create_element("div")
                .ok()
                .and_then(|el| el.dyn_into::<HtmlElement>().ok())
            else {
                tracing::warn!("could not create particle element");
                return;
            };
            particle.set_class_name(PARTICLE_CLASS);
            set_style(&particle, "left", &css::percent(spec.left_percent));
            set_style(&particle, "animation-duration", &css::seconds(spec.duration_secs));
            set_style(&particle, "animation-delay", &css::seconds(spec.delay_secs));
            if self.anchors.particle_field.append_child(&particle).is_err() {
                tracing::warn!("could not attach particle element");
            }
        }
    }

    fn set_track_offset(&mut self, px: f64) {
        set_style(&self.anchors.track, "transform", &css::translate_x(px));
    }

    fn set_track_grabbing(&mut self, grabbing: bool) {
        let cursor = if grabbing { "grabbing" } else { "grab" };
        set_style(&self.anchors.track, "cursor", cursor);
    }

    fn set_progress(&mut self, percent: f64) {
        set_style(&self.anchors.progress, "width", &css::percent(percent));
    }

    fn set_card(&mut self, card: usize, look: CardLook) {
        let Some(element) = self.anchors.cards.get(card) else {
            return;
        };
        set_style(element, "transform", &look.transform.to_string());
        if let Some(opacity) = look.opacity {
            set_style(element, "opacity", &opacity.to_string());
        }
    }

    fn set_layer_offset(&mut self, layer: usize, px: f64) {
        if let Some(element) = self.anchors.parallax_layers.get(layer) {
            set_style(element, "transform", &css::translate_y(px));
        }
    }

    fn set_hero(&mut self, fade: HeroFade) {
        if let Some(hero) = &self.anchors.hero {
            set_style(hero, "opacity", &fade.opacity.to_string());
            set_style(hero, "transform", &css::translate_y(fade.offset_y));
        }
    }

    fn hide_for_reveal(&mut self, element: usize, offset: f64) {
        if let Some(target) = self.anchors.reveal_targets.get(element) {
            set_style(target, "opacity", "0");
            set_style(target, "transform", &css::translate_y(offset));
            set_style(target, "transition", REVEAL_TRANSITION);
        }
    }

    fn reveal(&mut self, element: usize) {
        if let Some(target) = self.anchors.reveal_targets.get(element) {
            set_style(target, "opacity", "1");
            set_style(target, "transform", &css::translate_y(0.0));
        }
    }
}
