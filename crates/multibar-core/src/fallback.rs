/// Fallback colours for segments that have no explicit colour when the
/// palette is empty.
use crate::model::Color;
use rand::rngs::ThreadRng;
use rand::Rng;

/// Lowest value any fallback channel may take.
pub const FALLBACK_CHANNEL_MIN: f32 = 0.2;
/// Highest value any fallback channel may take.
pub const FALLBACK_CHANNEL_MAX: f32 = 0.8;

/// Source of colours used when nothing else applies.
pub trait FallbackColors {
    fn next_color(&mut self) -> Color;
}

/// Draws every channel uniformly from `[0.2, 0.8]` with full opacity.
///
/// The narrow range keeps bars away from pure black and white so labels
/// drawn next to them stay readable.
#[derive(Debug, Clone)]
pub struct RandomFallback<R = ThreadRng> {
    rng: R,
}

impl RandomFallback<ThreadRng> {
    /// Unseeded source backed by the thread-local RNG.
    pub fn new() -> Self {
        Self {
            rng: rand::thread_rng(),
        }
    }
}

impl Default for RandomFallback<ThreadRng> {
    fn default() -> Self {
        Self::new()
    }
}

impl<R: Rng> RandomFallback<R> {
    /// Use a caller-provided RNG, e.g. a seeded `StdRng` in tests.
    pub fn with_rng(rng: R) -> Self {
        Self { rng }
    }
}

impl<R: Rng> FallbackColors for RandomFallback<R> {
    fn next_color(&mut self) -> Color {
        let range = FALLBACK_CHANNEL_MIN..=FALLBACK_CHANNEL_MAX;
        let r = self.rng.gen_range(range.clone());
        let g = self.rng.gen_range(range.clone());
        let b = self.rng.gen_range(range);
        Color::rgb(r, g, b)
    }
}

/// Whether `color` could have come from [`RandomFallback`].
pub fn is_fallback_color(color: Color) -> bool {
    let in_range = |c: f32| (FALLBACK_CHANNEL_MIN..=FALLBACK_CHANNEL_MAX).contains(&c);
    in_range(color.r) && in_range(color.g) && in_range(color.b) && color.a == 1.0
}
