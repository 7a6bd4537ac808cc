//! Configuration values for caches and simulation runs.
//!
//! All configuration is validated at construction time, so a malformed run
//! is rejected before it starts. There is no process-wide mutable config;
//! values are passed explicitly into cache and runner constructors.

use std::time::Duration;

use crate::common::{Error, Result};

/// Default cache capacity (resident entries).
pub const DEFAULT_CAPACITY: usize = 10;

/// Default text universe size: ids 1..=100.
pub const DEFAULT_UNIVERSE: u32 = 100;

/// Default number of simulated clients per run.
pub const DEFAULT_CLIENTS: usize = 3;

/// Default number of requests each simulated client issues.
pub const DEFAULT_REQUESTS_PER_CLIENT: usize = 200;

/// Configuration for a single cache instance.
///
/// # Example
/// ```
/// use textcache::CacheConfig;
///
/// let config = CacheConfig::new(10, 100).unwrap();
/// assert_eq!(config.capacity, 10);
///
/// // Zero capacity is rejected up front
/// assert!(CacheConfig::new(0, 100).is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CacheConfig {
    /// Maximum number of resident entries. Must be at least 1.
    pub capacity: usize,

    /// Size of the text universe: valid ids are `1..=universe`.
    pub universe: u32,
}

impl CacheConfig {
    /// Create a validated cache configuration.
    ///
    /// # Errors
    /// Returns `Error::Config` if capacity or universe is zero.
    pub fn new(capacity: usize, universe: u32) -> Result<Self> {
        let config = Self { capacity, universe };
        config.validate()?;
        Ok(config)
    }

    /// Check that this configuration can back a real cache.
    pub fn validate(&self) -> Result<()> {
        if self.capacity == 0 {
            return Err(Error::Config("cache capacity must be at least 1".into()));
        }
        if self.universe == 0 {
            return Err(Error::Config("text universe must be at least 1".into()));
        }
        Ok(())
    }
}

impl Default for CacheConfig {
    fn default() -> Self {
        Self {
            capacity: DEFAULT_CAPACITY,
            universe: DEFAULT_UNIVERSE,
        }
    }
}

/// A contiguous range of popular texts and the probability mass it absorbs.
///
/// The reference deployment concentrates 43% of all requests on ids 30..=40.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HotspotConfig {
    /// First id of the hot range (inclusive).
    pub first: u32,

    /// Last id of the hot range (inclusive).
    pub last: u32,

    /// Aggregate probability mass of the hot range, in (0, 1).
    pub weight: f64,
}

impl HotspotConfig {
    /// Number of ids in the hot range.
    pub fn len(&self) -> u32 {
        self.last - self.first + 1
    }

    /// A range is never empty once validated, but clippy wants the pair.
    pub fn is_empty(&self) -> bool {
        self.last < self.first
    }
}

impl Default for HotspotConfig {
    fn default() -> Self {
        Self {
            first: 30,
            last: 40,
            weight: 0.43,
        }
    }
}

/// Configuration for a full comparison run.
///
/// Fields are public so callers can tweak a `Default` value; the runner
/// validates the whole surface before touching any cache.
#[derive(Debug, Clone, PartialEq)]
pub struct SimulationConfig {
    /// Capacity and universe shared by every cache in the comparison.
    pub cache: CacheConfig,

    /// Number of simulated clients per (policy, pattern) combination.
    pub clients: usize,

    /// Number of requests each client issues.
    pub requests_per_client: usize,

    /// Seed for the workload generator. `None` draws a fresh seed and
    /// records it in the report so the run can be replayed.
    pub seed: Option<u64>,

    /// Artificial latency of one backing-store fetch (the "slow disk").
    pub disk_delay: Duration,

    /// Rate parameter for the Poisson-clustered pattern.
    pub poisson_lambda: f64,

    /// Hot range for the weighted hotspot pattern.
    pub hotspot: HotspotConfig,
}

impl SimulationConfig {
    /// Check every knob before a run starts.
    ///
    /// # Errors
    /// Returns `Error::Config` describing the first offending value.
    pub fn validate(&self) -> Result<()> {
        self.cache.validate()?;

        if self.clients == 0 {
            return Err(Error::Config("client count must be at least 1".into()));
        }
        if self.requests_per_client == 0 {
            return Err(Error::Config(
                "requests per client must be at least 1".into(),
            ));
        }
        if !self.poisson_lambda.is_finite() || self.poisson_lambda <= 0.0 {
            return Err(Error::Config(format!(
                "poisson lambda must be positive, got {}",
                self.poisson_lambda
            )));
        }
        if self.hotspot.is_empty() {
            return Err(Error::Config(format!(
                "hotspot range {}..={} is empty",
                self.hotspot.first, self.hotspot.last
            )));
        }
        if self.hotspot.first < 1 || self.hotspot.last > self.cache.universe {
            return Err(Error::Config(format!(
                "hotspot range {}..={} falls outside the universe 1..={}",
                self.hotspot.first, self.hotspot.last, self.cache.universe
            )));
        }
        let weight = self.hotspot.weight;
        if !weight.is_finite() || weight <= 0.0 || weight >= 1.0 {
            return Err(Error::Config(format!(
                "hotspot weight must be in (0, 1), got {}",
                self.hotspot.weight
            )));
        }

        Ok(())
    }
}

impl Default for SimulationConfig {
    fn default() -> Self {
        Self {
            cache: CacheConfig::default(),
            clients: DEFAULT_CLIENTS,
            requests_per_client: DEFAULT_REQUESTS_PER_CLIENT,
            seed: None,
            disk_delay: Duration::from_millis(1),
            poisson_lambda: 30.0,
            hotspot: HotspotConfig::default(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_is_valid() {
        assert!(CacheConfig::default().validate().is_ok());
        assert!(SimulationConfig::default().validate().is_ok());
    }

    #[test]
    fn test_zero_capacity_rejected() {
        assert!(CacheConfig::new(0, 100).is_err());
    }

    #[test]
    fn test_zero_universe_rejected() {
        assert!(CacheConfig::new(10, 0).is_err());
    }

    #[test]
    fn test_zero_clients_rejected() {
        let config = SimulationConfig {
            clients: 0,
            ..Default::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_hotspot_outside_universe_rejected() {
        let config = SimulationConfig {
            hotspot: HotspotConfig {
                first: 90,
                last: 110,
                weight: 0.43,
            },
            ..Default::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_hotspot_weight_bounds() {
        for weight in [0.0, 1.0, 1.5] {
            let config = SimulationConfig {
                hotspot: HotspotConfig {
                    weight,
                    ..Default::default()
                },
                ..Default::default()
            };
            assert!(config.validate().is_err(), "weight {} should fail", weight);
        }
    }

    #[test]
    fn test_hotspot_len() {
        let hotspot = HotspotConfig::default();
        assert_eq!(hotspot.len(), 11);
        assert!(!hotspot.is_empty());
    }
}
