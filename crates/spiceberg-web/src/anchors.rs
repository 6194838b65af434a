#![forbid(unsafe_code)]

//! UI anchors the landing page binds to, and fail-fast resolution.
//!
//! Resolution is generic over [`ElementLookup`] so it runs against the DOM
//! on wasm and against an in-memory page in native tests. A missing
//! required anchor is a boot error naming the selector.

use spiceberg_core::ambient::{HERO_SELECTOR, PARALLAX_SELECTORS, REVEAL_SELECTORS};
use spiceberg_core::{DishItem, LandingConfig, LandingError, Result};

pub const TRACK_ID: &str = "dishTrack";
pub const PREV_BUTTON_ID: &str = "prevBtn";
pub const NEXT_BUTTON_ID: &str = "nextBtn";
pub const PROGRESS_ID: &str = "progressFill";
pub const THEME_LABEL_ID: &str = "themeIndicator";
pub const AMBIENT_BG_ID: &str = "ambientBg";
pub const PARTICLE_FIELD_ID: &str = "particles";
pub const CARD_SELECTOR: &str = ".dish-card";
/// Attribute naming a card's theme key.
pub const CARD_THEME_ATTR: &str = "data-theme";
/// Optional JSON config overrides on `<body>`.
pub const CONFIG_ATTR: &str = "data-spiceberg-config";

/// Minimal element queries needed to resolve anchors.
pub trait ElementLookup {
    type Element: Clone;

    fn by_id(&self, id: &str) -> Option<Self::Element>;
    /// All elements matching `selector`, in document order.
    fn select_all(&self, selector: &str) -> Vec<Self::Element>;
    fn first(&self, selector: &str) -> Option<Self::Element> {
        self.select_all(selector).into_iter().next()
    }
    fn attribute(&self, element: &Self::Element, name: &str) -> Option<String>;
}

/// Every element the page touches, resolved once at boot.
#[derive(Debug, Clone)]
pub struct PageAnchors<E> {
    pub track: E,
    pub prev_button: E,
    pub next_button: E,
    pub progress: E,
    pub theme_label: E,
    pub ambient_bg: E,
    pub particle_field: E,
    pub cards: Vec<E>,
    pub parallax_layers: Vec<E>,
    pub hero: Option<E>,
    pub reveal_targets: Vec<E>,
}

impl<E: Clone> PageAnchors<E> {
    pub fn resolve<L>(page: &L) -> Result<Self>
    where
        L: ElementLookup<Element = E>,
    {
        let required = |id: &str| {
            page.by_id(id)
                .ok_or_else(|| LandingError::missing_anchor(format!("#{id}")))
        };
        let cards = page.select_all(CARD_SELECTOR);
        if cards.is_empty() {
            return Err(LandingError::missing_anchor(CARD_SELECTOR));
        }
        Ok(Self {
            track: required(TRACK_ID)?,
            prev_button: required(PREV_BUTTON_ID)?,
            next_button: required(NEXT_BUTTON_ID)?,
            progress: required(PROGRESS_ID)?,
            theme_label: required(THEME_LABEL_ID)?,
            ambient_bg: required(AMBIENT_BG_ID)?,
            particle_field: required(PARTICLE_FIELD_ID)?,
            cards,
            parallax_layers: PARALLAX_SELECTORS
                .iter()
                .flat_map(|selector| page.select_all(selector))
                .collect(),
            hero: page.first(HERO_SELECTOR),
            reveal_targets: REVEAL_SELECTORS
                .iter()
                .flat_map(|selector| page.select_all(selector))
                .collect(),
        })
    }

    /// Carousel items, one per card, carrying each card's theme key.
    pub fn dish_items<L>(&self, page: &L) -> Vec<DishItem>
    where
        L: ElementLookup<Element = E>,
    {
        self.cards
            .iter()
            .map(|card| DishItem {
                theme: page
                    .attribute(card, CARD_THEME_ATTR)
                    .filter(|key| !key.is_empty()),
            })
            .collect()
    }

    /// Raw `data-parallax-speed` value of every parallax layer.
    pub fn layer_speeds<L>(&self, page: &L) -> Vec<Option<String>>
    where
        L: ElementLookup<Element = E>,
    {
        self.parallax_layers
            .iter()
            .map(|layer| page.attribute(layer, spiceberg_core::ambient::PARALLAX_SPEED_ATTR))
            .collect()
    }
}

/// Parse optional JSON overrides; absent means defaults.
pub fn read_config(raw: Option<&str>) -> Result<LandingConfig> {
    match raw.map(str::trim) {
        None | Some("") => Ok(LandingConfig::default()),
        Some(json) => LandingConfig::from_json(json),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use std::collections::HashMap;

    /// Opaque element handle in the fake page.
    type Handle = usize;

    #[derive(Default)]
    struct FakePage {
        ids: HashMap<String, Handle>,
        classes: Vec<(String, Handle)>,
        attrs: HashMap<(Handle, String), String>,
        next: Handle,
    }

    impl FakePage {
        fn with_required() -> Self {
            let mut page = Self::default();
            for id in [
                TRACK_ID,
                PREV_BUTTON_ID,
                NEXT_BUTTON_ID,
                PROGRESS_ID,
                THEME_LABEL_ID,
                AMBIENT_BG_ID,
                PARTICLE_FIELD_ID,
            ] {
                page.add_id(id);
            }
            page
        }

        fn add_id(&mut self, id: &str) -> Handle {
            let h = self.alloc();
            self.ids.insert(id.to_owned(), h);
            h
        }

        fn add(&mut self, selector: &str, attrs: &[(&str, &str)]) -> Handle {
            let h = self.alloc();
            self.classes.push((selector.to_owned(), h));
            for (name, value) in attrs {
                self.attrs.insert((h, (*name).to_owned()), (*value).to_owned());
            }
            h
        }

        fn alloc(&mut self) -> Handle {
            self.next += 1;
            self.next
        }
    }

    impl ElementLookup for FakePage {
        type Element = Handle;

        fn by_id(&self, id: &str) -> Option<Handle> {
            self.ids.get(id).copied()
        }

        fn select_all(&self, selector: &str) -> Vec<Handle> {
            self.classes
                .iter()
                .filter(|(s, _)| s == selector)
                .map(|&(_, h)| h)
                .collect()
        }

        fn attribute(&self, element: &Handle, name: &str) -> Option<String> {
            self.attrs.get(&(*element, name.to_owned())).cloned()
        }
    }

    #[test]
    fn resolves_complete_page() {
        let mut page = FakePage::with_required();
        page.add(CARD_SELECTOR, &[(CARD_THEME_ATTR, "truffle")]);
        page.add(CARD_SELECTOR, &[(CARD_THEME_ATTR, "ocean")]);
        page.add(CARD_SELECTOR, &[]);
        page.add(".parallax-layer", &[("data-parallax-speed", "0.3")]);
        page.add(".menu-parallax", &[]);
        page.add(".menu-item", &[]);
        page.add(".reservation-card", &[]);

        let anchors = PageAnchors::resolve(&page).expect("all anchors present");
        assert_eq!(anchors.cards.len(), 3);
        assert_eq!(anchors.parallax_layers.len(), 2);
        assert_eq!(anchors.reveal_targets.len(), 2);
        assert!(anchors.hero.is_none());
        assert_eq!(
            anchors.dish_items(&page),
            vec![
                DishItem::themed("truffle"),
                DishItem::themed("ocean"),
                DishItem::unthemed(),
            ]
        );
        assert_eq!(
            anchors.layer_speeds(&page),
            vec![Some("0.3".to_owned()), None]
        );
    }

    #[test]
    fn missing_required_anchor_fails_fast() {
        let mut page = FakePage::with_required();
        page.add(CARD_SELECTOR, &[]);
        page.ids.remove(PROGRESS_ID);
        let err = PageAnchors::resolve(&page).unwrap_err();
        assert_eq!(err.to_string(), "missing required UI anchor: #progressFill");
    }

    #[test]
    fn page_without_cards_fails_fast() {
        let page = FakePage::with_required();
        let err = PageAnchors::resolve(&page).unwrap_err();
        assert_eq!(err.to_string(), "missing required UI anchor: .dish-card");
    }

    #[test]
    fn hero_is_optional_but_picked_up() {
        let mut page = FakePage::with_required();
        page.add(CARD_SELECTOR, &[]);
        let hero = page.add(HERO_SELECTOR, &[]);
        let anchors = PageAnchors::resolve(&page).expect("all anchors present");
        assert_eq!(anchors.hero, Some(hero));
    }

    #[test]
    fn empty_theme_attribute_means_unthemed() {
        let mut page = FakePage::with_required();
        page.add(CARD_SELECTOR, &[(CARD_THEME_ATTR, "")]);
        let anchors = PageAnchors::resolve(&page).expect("all anchors present");
        assert_eq!(anchors.dish_items(&page), vec![DishItem::unthemed()]);
    }

    #[test]
    fn config_attribute_is_optional() {
        assert_eq!(read_config(None).unwrap(), LandingConfig::default());
        assert_eq!(read_config(Some("  ")).unwrap(), LandingConfig::default());
        assert_eq!(
            read_config(Some(r#"{"particle_count": 5}"#))
                .unwrap()
                .particle_count,
            5
        );
        assert!(read_config(Some("not json")).is_err());
    }
}
