#![forbid(unsafe_code)]

//! Scroll-driven parallax and hero fade.

/// Single-slot pending-update flag coalescing scroll events into at most
/// one update per animation frame.
///
/// The host calls [`request`](Self::request) on every scroll event and only
/// schedules a frame callback when it returns `true`; the frame callback
/// calls [`complete`](Self::complete) once it has run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FrameGate {
    pending: bool,
}

impl FrameGate {
    #[must_use]
    pub const fn new() -> Self {
        Self { pending: false }
    }

    /// Returns `true` if the caller should schedule a frame.
    pub fn request(&mut self) -> bool {
        if self.pending {
            false
        } else {
            self.pending = true;
            true
        }
    }

    pub fn complete(&mut self) {
        self.pending = false;
    }

    #[must_use]
    pub const fn is_pending(&self) -> bool {
        self.pending
    }
}

/// Parse a `data-parallax-speed` attribute, falling back to `default`.
#[must_use]
pub fn parse_speed(attr: Option<&str>, default: f64) -> f64 {
    attr.and_then(|raw| raw.trim().parse::<f64>().ok())
        .filter(|speed| speed.is_finite())
        .unwrap_or(default)
}

/// Vertical offset in CSS pixels for a parallax layer.
#[must_use]
pub fn layer_offset(scroll_y: f64, speed: f64) -> f64 {
    -(scroll_y * speed)
}

/// Opacity and drift of the hero banner for a scroll position.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HeroFade {
    pub opacity: f64,
    pub offset_y: f64,
}

impl HeroFade {
    /// Fully opaque at the top, fully transparent one viewport down.
    #[must_use]
    pub fn at(scroll_y: f64, viewport_height: f64, speed: f64) -> Self {
        let opacity = if viewport_height > 0.0 {
            (1.0 - scroll_y / viewport_height).max(0.0)
        } else {
            0.0
        };
        Self {
            opacity,
            offset_y: scroll_y * speed,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn gate_coalesces_until_completed() {
        let mut gate = FrameGate::new();
        assert!(gate.request());
        assert!(!gate.request());
        assert!(!gate.request());
        assert!(gate.is_pending());
        gate.complete();
        assert!(gate.request());
    }

    #[test]
    fn speed_attribute_parses_or_defaults() {
        assert_eq!(parse_speed(Some("0.3"), 0.5), 0.3);
        assert_eq!(parse_speed(Some(" 1.25 "), 0.5), 1.25);
        assert_eq!(parse_speed(None, 0.5), 0.5);
        assert_eq!(parse_speed(Some("fast"), 0.5), 0.5);
        assert_eq!(parse_speed(Some("NaN"), 0.5), 0.5);
    }

    #[test]
    fn layer_moves_up_as_page_scrolls() {
        assert_eq!(layer_offset(200.0, 0.5), -100.0);
        assert_eq!(layer_offset(200.0, -0.25), 50.0);
    }

    #[test]
    fn hero_fades_over_one_viewport() {
        assert_eq!(HeroFade::at(0.0, 800.0, 0.5).opacity, 1.0);
        assert_eq!(HeroFade::at(400.0, 800.0, 0.5).opacity, 0.5);
        assert_eq!(HeroFade::at(800.0, 800.0, 0.5).opacity, 0.0);
        assert_eq!(HeroFade::at(1600.0, 800.0, 0.5).opacity, 0.0);
    }

    #[test]
    fn hero_drifts_down_with_speed() {
        assert_eq!(HeroFade::at(300.0, 800.0, 0.5).offset_y, 150.0);
    }

    #[test]
    fn zero_height_viewport_hides_hero() {
        assert_eq!(HeroFade::at(0.0, 0.0, 0.5).opacity, 0.0);
    }
}
