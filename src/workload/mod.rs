//! Workload generation.
//!
//! Produces lazy, finite streams of [`TextId`] requests under one of three
//! distributions. The generator is deterministic given a seed and supports
//! reseeding, so repeated runs are reproducible for testing and so every
//! policy in a comparison can replay an identical stream.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::common::{HotspotConfig, TextId};

/// One of the three request distributions.
#[derive(Debug, Clone, PartialEq)]
pub enum AccessPattern {
    /// Every id in `1..=N` drawn with equal probability.
    Uniform,

    /// Requests cluster around `lambda` following a Poisson-shaped curve,
    /// folded into the id range.
    Poisson { lambda: f64 },

    /// A contiguous hot range absorbs a fixed probability mass, split
    /// uniformly among its members; the rest of the mass is split uniformly
    /// over all other ids.
    Hotspot(HotspotConfig),
}

impl AccessPattern {
    /// Human-readable label used in reports.
    pub fn label(&self) -> String {
        match self {
            AccessPattern::Uniform => "uniform".to_string(),
            AccessPattern::Poisson { lambda } => format!("poisson(lambda={})", lambda),
            AccessPattern::Hotspot(h) => format!(
                "hotspot({}-{} @ {:.0}%)",
                h.first,
                h.last,
                h.weight * 100.0
            ),
        }
    }
}

/// Seedable source of request streams over a fixed universe.
pub struct WorkloadGenerator {
    rng: StdRng,
    universe: u32,
}

impl WorkloadGenerator {
    /// Create a generator over ids `1..=universe` with an explicit seed.
    pub fn new(universe: u32, seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
            universe,
        }
    }

    /// Restart the random stream from a new seed.
    pub fn reseed(&mut self, seed: u64) {
        self.rng = StdRng::seed_from_u64(seed);
    }

    /// Draw a single request id under the given pattern.
    pub fn draw(&mut self, pattern: &AccessPattern) -> TextId {
        let id = match pattern {
            AccessPattern::Uniform => self.rng.gen_range(1..=self.universe),
            AccessPattern::Poisson { lambda } => self.draw_poisson(*lambda),
            AccessPattern::Hotspot(h) => self.draw_hotspot(h),
        };

        TextId::new(id)
    }

    /// A lazy stream of `n` requests under the given pattern.
    pub fn requests<'a>(
        &'a mut self,
        pattern: &'a AccessPattern,
        n: usize,
    ) -> impl Iterator<Item = TextId> + 'a {
        let mut remaining = n;
        std::iter::from_fn(move || {
            if remaining == 0 {
                return None;
            }
            remaining -= 1;
            Some(self.draw(pattern))
        })
    }

    /// Knuth's algorithm: multiply uniform draws until the product falls
    /// below e^-lambda. The sample count follows a Poisson(lambda)
    /// distribution; folding by the universe keeps the tail in range.
    fn draw_poisson(&mut self, lambda: f64) -> u32 {
        let threshold = (-lambda).exp();
        let mut k: u64 = 0;
        let mut p: f64 = 1.0;

        while p > threshold {
            k += 1;
            p *= self.rng.gen::<f64>();
        }

        // k >= 1 on exit; map k-1 into the universe, shifted to 1-based ids
        ((k - 1) % self.universe as u64) as u32 + 1
    }

    fn draw_hotspot(&mut self, h: &HotspotConfig) -> u32 {
        let hot_len = h.len();
        let cold_len = self.universe - hot_len;

        if cold_len == 0 || self.rng.gen::<f64>() < h.weight {
            h.first + self.rng.gen_range(0..hot_len)
        } else {
            // Draw an index over the cold ids and skip across the hot range
            let mut id = self.rng.gen_range(0..cold_len) + 1;
            if id >= h.first {
                id += hot_len;
            }
            id
        }
    }
}
