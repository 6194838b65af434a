#![forbid(unsafe_code)]

//! One-shot fade-in of content as it scrolls into view.
//!
//! The host observes elements with a visibility observer configured from
//! [`RevealOptions`] and forwards each callback to [`RevealTracker::observe`].
//! An element is revealed the first time it intersects; later callbacks for
//! the same element, including it leaving the viewport, change nothing.

/// Element category selectors that fade in on first view.
pub const REVEAL_SELECTORS: [&str; 2] = [".menu-item", ".reservation-card"];

/// Observer tuning derived from the landing config.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RevealOptions {
    /// Fraction of the element that must be visible.
    pub threshold: f64,
    /// Pixels trimmed off the bottom of the viewport.
    pub bottom_margin: f64,
    /// Downward offset of hidden elements.
    pub hidden_offset: f64,
}

impl RevealOptions {
    /// Root margin in CSS shorthand, e.g. `0px 0px -100px 0px`.
    #[must_use]
    pub fn root_margin(&self) -> String {
        format!("0px 0px -{}px 0px", self.bottom_margin)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RevealTracker {
    revealed: Vec<bool>,
}

impl RevealTracker {
    /// Track `count` elements, all initially hidden.
    #[must_use]
    pub fn new(count: usize) -> Self {
        Self {
            revealed: vec![false; count],
        }
    }

    /// Record an observer callback. Returns `true` when the element should
    /// be revealed now (first intersection only).
    pub fn observe(&mut self, element: usize, intersecting: bool) -> bool {
        match self.revealed.get_mut(element) {
            Some(seen) if intersecting && !*seen => {
                *seen = true;
                true
            }
            _ => false,
        }
    }

    #[must_use]
    pub fn is_revealed(&self, element: usize) -> bool {
        self.revealed.get(element).copied().unwrap_or(false)
    }

    /// `true` once every tracked element has been revealed; the host may
    /// then disconnect its observer.
    #[must_use]
    pub fn all_revealed(&self) -> bool {
        self.revealed.iter().all(|&seen| seen)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reveals_once_on_first_intersection() {
        let mut tracker = RevealTracker::new(2);
        assert!(!tracker.observe(0, false));
        assert!(tracker.observe(0, true));
        assert!(!tracker.observe(0, true));
        assert!(!tracker.observe(0, false));
        assert!(tracker.is_revealed(0));
        assert!(!tracker.is_revealed(1));
    }

    #[test]
    fn out_of_range_elements_are_ignored() {
        let mut tracker = RevealTracker::new(1);
        assert!(!tracker.observe(5, true));
        assert!(!tracker.is_revealed(5));
    }

    #[test]
    fn all_revealed_after_each_intersects() {
        let mut tracker = RevealTracker::new(2);
        tracker.observe(1, true);
        assert!(!tracker.all_revealed());
        tracker.observe(0, true);
        assert!(tracker.all_revealed());
    }

    #[test]
    fn root_margin_trims_viewport_bottom() {
        let options = RevealOptions {
            threshold: 0.1,
            bottom_margin: 100.0,
            hidden_offset: 30.0,
        };
        assert_eq!(options.root_margin(), "0px 0px -100px 0px");
    }
}
