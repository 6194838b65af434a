#![forbid(unsafe_code)]

//! Decorative floating particles.
//!
//! Particles are laid out once at startup and never recycled; only their
//! colour changes afterwards (see `Surface::recolor_particles`).

use rand::Rng;

/// Randomised placement and timing of one particle.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ParticleSpec {
    /// Horizontal position, percent of the container width in `[0, 100)`.
    pub left_percent: f64,
    /// Animation duration in seconds, in `[10, 20)`.
    pub duration_secs: f64,
    /// Animation delay in seconds, in `[0, 5)`.
    pub delay_secs: f64,
}

impl ParticleSpec {
    pub fn random<R: Rng + ?Sized>(rng: &mut R) -> Self {
        Self {
            left_percent: rng.random::<f64>() * 100.0,
            duration_secs: rng.random::<f64>() * 10.0 + 10.0,
            delay_secs: rng.random::<f64>() * 5.0,
        }
    }
}

/// Lay out `count` particles.
pub fn spawn<R: Rng + ?Sized>(rng: &mut R, count: usize) -> Vec<ParticleSpec> {
    (0..count).map(|_| ParticleSpec::random(rng)).collect()
}
