#![forbid(unsafe_code)]

//! CSS value formatting shared by every surface that writes inline styles.

use std::fmt;

use crate::gesture::Tilt;

/// Transform of a single dish card.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum CardTransform {
    /// Flat card at the given scale.
    Scale(f64),
    /// Hover tilt with perspective, keeping the active scale.
    Tilt {
        perspective: f64,
        tilt: Tilt,
        scale: f64,
    },
}

impl fmt::Display for CardTransform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Scale(scale) => write!(f, "scale({scale})"),
            Self::Tilt {
                perspective,
                tilt,
                scale,
            } => write!(
                f,
                "perspective({perspective}px) rotateX({}deg) rotateY({}deg) scale({scale})",
                tilt.rotate_x, tilt.rotate_y
            ),
        }
    }
}

/// Inline style changes for one card. `opacity: None` leaves it untouched.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CardLook {
    pub transform: CardTransform,
    pub opacity: Option<f64>,
}

#[must_use]
pub fn translate_x(px: f64) -> String {
    format!("translateX({px}px)")
}

#[must_use]
pub fn translate_y(px: f64) -> String {
    format!("translateY({px}px)")
}

#[must_use]
pub fn percent(value: f64) -> String {
    format!("{value}%")
}

#[must_use]
pub fn seconds(value: f64) -> String {
    format!("{value}s")
}
