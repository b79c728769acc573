//! Reproducible ordered inputs for tests and benchmarks.

use std::collections::BTreeSet;

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::{TestkitError, TestkitResult};

/// Describes a pair of strictly ascending `i32` inputs.
///
/// The regular inputs are `left_start..end` and `right_start..end`, each
/// with every multiple of its `*_skip_every` removed. The random inputs keep
/// each value of `0..end` independently with probability `random_density`,
/// drawn from a generator seeded with `seed`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FixtureConfig {
    /// Exclusive upper bound of every generated value.
    pub end: i32,
    pub left_start: i32,
    pub right_start: i32,
    /// Multiples of this are missing from the left input.
    pub left_skip_every: i32,
    /// Multiples of this are missing from the right input.
    pub right_skip_every: i32,
    /// Probability that a value appears in a random input.
    pub random_density: f64,
    pub seed: u64,
}

impl Default for FixtureConfig {
    /// The classic pair: `0..1000` without multiples of 13 against
    /// `1..1000` without multiples of 23.
    fn default() -> Self {
        Self {
            end: 1000,
            left_start: 0,
            right_start: 1,
            left_skip_every: 13,
            right_skip_every: 23,
            random_density: 0.5,
            seed: 0x5eed,
        }
    }
}

impl FixtureConfig {
    /// A short pair for unit tests.
    pub fn small() -> Self {
        Self {
            end: 64,
            left_skip_every: 3,
            right_skip_every: 5,
            ..Default::default()
        }
    }

    /// A long pair for throughput benchmarks.
    pub fn large() -> Self {
        Self {
            end: 1_000_000,
            ..Default::default()
        }
    }

    /// Parse a TOML description; missing keys fall back to [`Default`].
    pub fn from_toml_str(s: &str) -> TestkitResult<Self> {
        let config: Self = toml::from_str(s)?;
        config.validate()?;
        Ok(config)
    }

    /// Reject descriptions that cannot produce inputs.
    pub fn validate(&self) -> TestkitResult<()> {
        if self.left_skip_every <= 0 || self.right_skip_every <= 0 {
            return Err(TestkitError::InvalidFixture(format!(
                "skip moduli must be positive, got left={} right={}",
                self.left_skip_every, self.right_skip_every
            )));
        }
        if !(self.random_density > 0.0 && self.random_density <= 1.0) {
            return Err(TestkitError::InvalidFixture(format!(
                "random_density must be in (0, 1], got {}",
                self.random_density
            )));
        }
        Ok(())
    }

    pub fn left(&self) -> Vec<i32> {
        regular(self.left_start, self.end, self.left_skip_every)
    }

    pub fn right(&self) -> Vec<i32> {
        regular(self.right_start, self.end, self.right_skip_every)
    }

    /// Both regular inputs.
    pub fn pair(&self) -> (Vec<i32>, Vec<i32>) {
        let (left, right) = (self.left(), self.right());
        debug!(left = left.len(), right = right.len(), "built regular fixture");
        (left, right)
    }

    /// Both random inputs. The same config always yields the same pair.
    pub fn random_pair(&self) -> (Vec<i32>, Vec<i32>) {
        let density = if self.random_density.is_nan() {
            0.0
        } else {
            self.random_density.clamp(0.0, 1.0)
        };
        let mut rng = StdRng::seed_from_u64(self.seed);
        let mut left = Vec::new();
        let mut right = Vec::new();
        for value in 0..self.end.max(0) {
            if rng.gen_bool(density) {
                left.push(value);
            }
            if rng.gen_bool(density) {
                right.push(value);
            }
        }
        debug!(left = left.len(), right = right.len(), seed = self.seed, "built random fixture");
        (left, right)
    }
}

/// `start..end` without multiples of `skip_every`.
fn regular(start: i32, end: i32, skip_every: i32) -> Vec<i32> {
    (start..end)
        .filter(|x| skip_every <= 0 || x % skip_every != 0)
        .collect()
}

/// Sort and dedup arbitrary values into a valid input.
pub fn normalize(values: impl IntoIterator<Item = i32>) -> Vec<i32> {
    values.into_iter().collect::<BTreeSet<_>>().into_iter().collect()
}
