use rand::rngs::ThreadRng;
use rand::Rng;

/// A source of uniform draws in `[0, 1)`.
///
/// The generator consumes one draw per "pick uniformly" step, in a fixed
/// order. Quality of the randomness is the caller's concern; the engine
/// only requires the `[0, 1)` range.
pub trait RandomSource {
    fn next_unit(&mut self) -> f64;

    /// Draw an index uniformly from a pool of `len` elements.
    fn pick_index(&mut self, len: usize) -> usize {
        assert!(len > 0, "cannot sample from an empty pool");
        let index = (self.next_unit() * len as f64) as usize;
        // clamp for sources that return exactly 1.0
        index.min(len - 1)
    }
}

/// Non-deterministic source backed by the thread-local generator.
pub struct ThreadSource {
    rng: ThreadRng,
}

impl ThreadSource {
    pub fn new() -> Self {
        ThreadSource {
            rng: rand::thread_rng(),
        }
    }
}

impl Default for ThreadSource {
    fn default() -> Self {
        Self::new()
    }
}

impl RandomSource for ThreadSource {
    fn next_unit(&mut self) -> f64 {
        self.rng.gen::<f64>()
    }
}

/// The deterministic linear-congruential source behind seeded generation.
///
/// state₀ = seed; stateₙ₊₁ = (stateₙ · 9301 + 49297) mod 233280, with
/// 32-bit unsigned wraparound before the modulus. The constants are a
/// compatibility contract: equal seeds must reproduce identical profiles
/// across releases, so they must never change.
#[derive(Clone, Debug)]
pub struct Lcg {
    state: u32,
}

impl Lcg {
    const MULTIPLIER: u32 = 9301;
    const INCREMENT: u32 = 49297;
    const MODULUS: u32 = 233280;

    pub fn new(seed: u32) -> Self {
        Lcg { state: seed }
    }

    fn next_state(&mut self) -> u32 {
        self.state = self
            .state
            .wrapping_mul(Self::MULTIPLIER)
            .wrapping_add(Self::INCREMENT)
            % Self::MODULUS;
        self.state
    }
}

impl RandomSource for Lcg {
    fn next_unit(&mut self) -> f64 {
        f64::from(self.next_state()) / f64::from(Self::MODULUS)
    }
}
