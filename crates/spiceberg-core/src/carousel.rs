#![forbid(unsafe_code)]

//! Cyclic dish carousel state machine.
//!
//! The carousel owns a single index into a fixed, non-empty list of
//! [`DishItem`]s. [`Carousel::go_to`] is a pure transition: it wraps the
//! target, stores it, and returns a [`SlideState`] describing what the
//! presentation layer should show. Nothing here touches a surface.
//!
//! # Invariants
//!
//! 1. `index() < len()` at all times.
//! 2. Out-of-range targets wrap (`-1 → len-1`, `len → 0`), never clamp.
//! 3. Exactly one item is [`Emphasis::Active`]: the one at `index()`.
//! 4. `progress_percent` is `(index+1) * 100 / len`, so `100` at the last
//!    item and `100/len` at the first.

use crate::error::{LandingError, Result};

/// One carousel slide.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct DishItem {
    /// Theme key carried by the card, if any.
    pub theme: Option<String>,
}

impl DishItem {
    #[must_use]
    pub fn themed(key: impl Into<String>) -> Self {
        Self {
            theme: Some(key.into()),
        }
    }

    #[must_use]
    pub const fn unthemed() -> Self {
        Self { theme: None }
    }
}

/// Visual emphasis of a card relative to the active slide.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Emphasis {
    Active,
    Inactive,
}

/// Presentation-ready result of a slide transition.
#[derive(Debug, Clone, PartialEq)]
pub struct SlideState {
    pub index: usize,
    /// Horizontal track translation in CSS pixels (zero or negative).
    pub track_offset: f64,
    /// Width of the progress fill, in percent.
    pub progress_percent: f64,
    /// Theme key of the now-active card.
    pub theme: Option<String>,
}

/// Navigation direction requested by a button, key, or gesture.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Step {
    Previous,
    Next,
}

impl Step {
    #[must_use]
    pub const fn delta(self) -> isize {
        match self {
            Self::Previous => -1,
            Self::Next => 1,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Carousel {
    items: Vec<DishItem>,
    index: usize,
    stride: f64,
}

impl Carousel {
    /// Create a carousel positioned at the first item.
    ///
    /// `stride` is the distance between adjacent card origins (card width
    /// plus gap).
    pub fn new(items: Vec<DishItem>, stride: f64) -> Result<Self> {
        if items.is_empty() {
            return Err(LandingError::EmptyCarousel);
        }
        Ok(Self {
            items,
            index: 0,
            stride,
        })
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Always `false`; construction rejects empty item lists.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    #[must_use]
    pub const fn index(&self) -> usize {
        self.index
    }

    #[must_use]
    pub fn items(&self) -> &[DishItem] {
        &self.items
    }

    #[must_use]
    pub fn active_item(&self) -> &DishItem {
        &self.items[self.index]
    }

    /// Map any target onto `0..len`.
    #[must_use]
    pub fn wrap(&self, target: isize) -> usize {
        let len = self.items.len() as isize;
        target.rem_euclid(len) as usize
    }

    /// Move to `target` (wrapping) and describe the resulting slide.
    pub fn go_to(&mut self, target: isize) -> SlideState {
        self.index = self.wrap(target);
        self.state()
    }

    pub fn step(&mut self, step: Step) -> SlideState {
        self.go_to(self.index as isize + step.delta())
    }

    pub fn next(&mut self) -> SlideState {
        self.step(Step::Next)
    }

    pub fn prev(&mut self) -> SlideState {
        self.step(Step::Previous)
    }

    /// Describe the current slide without moving.
    #[must_use]
    pub fn state(&self) -> SlideState {
        let len = self.items.len() as f64;
        SlideState {
            index: self.index,
            track_offset: 0.0 - self.index as f64 * self.stride,
            progress_percent: (self.index + 1) as f64 * 100.0 / len,
            theme: self.active_item().theme.clone(),
        }
    }

    #[must_use]
    pub fn emphasis(&self, item: usize) -> Emphasis {
        if item == self.index {
            Emphasis::Active
        } else {
            Emphasis::Inactive
        }
    }

    /// Emphasis of every item, in item order.
    pub fn emphases(&self) -> impl Iterator<Item = Emphasis> + '_ {
        (0..self.items.len()).map(|i| self.emphasis(i))
    }
}
