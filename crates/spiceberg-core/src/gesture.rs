#![forbid(unsafe_code)]

//! Touch swipe, mouse drag, and hover tilt classification.
//!
//! Trackers hold only the transient coordinates of one gesture and return
//! a [`Step`] when the gesture qualifies as navigation. Threshold checks
//! are strict: a displacement equal to the threshold is ignored.

use crate::carousel::Step;

/// Touch swipe tracker.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct SwipeTracker {
    threshold: f64,
    start_x: Option<f64>,
}

impl SwipeTracker {
    #[must_use]
    pub const fn new(threshold: f64) -> Self {
        Self {
            threshold,
            start_x: None,
        }
    }

    pub fn touch_start(&mut self, x: f64) {
        self.start_x = Some(x);
    }

    /// Finish the gesture. Swiping left (start > end) means next.
    pub fn touch_end(&mut self, x: f64) -> Option<Step> {
        let start = self.start_x.take()?;
        let diff = start - x;
        if diff.abs() > self.threshold {
            Some(if diff > 0.0 { Step::Next } else { Step::Previous })
        } else {
            tracing::trace!(diff, threshold = self.threshold, "swipe below threshold");
            None
        }
    }

    #[must_use]
    pub const fn in_progress(&self) -> bool {
        self.start_x.is_some()
    }
}

/// Mouse drag tracker for the carousel track.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct DragTracker {
    threshold: f64,
    multiplier: f64,
    start_x: Option<f64>,
}

impl DragTracker {
    #[must_use]
    pub const fn new(threshold: f64, multiplier: f64) -> Self {
        Self {
            threshold,
            multiplier,
            start_x: None,
        }
    }

    /// `x` is relative to the track's left edge.
    pub fn mouse_down(&mut self, x: f64) {
        self.start_x = Some(x);
    }

    /// Pointer left the track: abandon the drag without navigating.
    pub fn mouse_leave(&mut self) {
        self.start_x = None;
    }

    /// Finish the drag. Dragging right reveals the previous card.
    pub fn mouse_up(&mut self, x: f64) -> Option<Step> {
        let start = self.start_x.take()?;
        let walk = (x - start) * self.multiplier;
        if walk > self.threshold {
            Some(Step::Previous)
        } else if walk < -self.threshold {
            Some(Step::Next)
        } else {
            tracing::trace!(walk, threshold = self.threshold, "drag below threshold");
            None
        }
    }

    #[must_use]
    pub const fn is_dragging(&self) -> bool {
        self.start_x.is_some()
    }
}

/// 3D hover tilt of a card, in degrees.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Tilt {
    pub rotate_x: f64,
    pub rotate_y: f64,
}

impl Tilt {
    /// Tilt for a pointer at `(x, y)` inside a `width × height` card.
    ///
    /// The card leans away from the pointer: below centre tips the top
    /// forward, right of centre turns the card to the left.
    #[must_use]
    pub fn from_pointer(x: f64, y: f64, width: f64, height: f64, damping: f64) -> Self {
        let center_x = width / 2.0;
        let center_y = height / 2.0;
        Self {
            rotate_x: (y - center_y) / damping,
            rotate_y: (center_x - x) / damping,
        }
    }
}
