//! Decorative background bubbles.
//!
//! The page background is a fixed set of blurred, slowly floating circles.
//! They are generated once per visit from a seed; the same seed always
//! produces the same set, so the background holds still while the visitor
//! navigates.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use serde::{Deserialize, Serialize};

/// Number of bubbles drawn.
pub const BUBBLE_COUNT: usize = 16;

/// Number of gradient colour variants a bubble can use.
pub const HUE_VARIANTS: usize = 3;

/// One decorative bubble.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Bubble {
    /// Diameter in pixels (80–260).
    pub size: u32,
    /// Horizontal position in percent (0–100).
    pub left: u32,
    /// Vertical position in percent (0–100).
    pub top: u32,
    /// Float animation duration in seconds (14–24).
    pub duration: u32,
    /// Animation start delay in seconds (0–8).
    pub delay: u32,
    /// Colour variant, `0..HUE_VARIANTS`.
    pub hue: usize,
}

impl Bubble {
    fn random<R: Rng + ?Sized>(rng: &mut R) -> Self {
        Self {
            size: rng.random_range(80..=260),
            left: rng.random_range(0..=100),
            top: rng.random_range(0..=100),
            duration: rng.random_range(14..=24),
            delay: rng.random_range(0..=8),
            hue: rng.random_range(0..HUE_VARIANTS),
        }
    }
}

/// Generate the background for `seed`.
#[must_use]
pub fn generate(seed: u64) -> Vec<Bubble> {
    generate_with(&mut StdRng::seed_from_u64(seed))
}

/// Generate a background from any random source.
pub fn generate_with<R: Rng + ?Sized>(rng: &mut R) -> Vec<Bubble> {
    (0..BUBBLE_COUNT).map(|_| Bubble::random(rng)).collect()
}

/// Pick a fresh seed for a new visit.
#[must_use]
pub fn fresh_seed() -> u64 {
    rand::rng().random()
}
