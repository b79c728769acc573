//! Test support for orddiff.
//!
//! Nothing here is used by the merge itself. The crate collects what the
//! tests and benchmarks share: a hash-based reference implementation to
//! check results against, reproducible input fixtures, proptest strategies
//! for ordered inputs, and a way to count how far a cursor was pulled.
//!
//! # Key Types
//!
//! - [`FixtureConfig`] -- Describes a pair of generated ordered inputs
//! - [`CountingIter`] / [`PullCounter`] -- Counts values pulled from a source
//! - [`oracle`] -- Unordered symmetric difference by hash membership

pub mod counting;
pub mod error;
pub mod fixtures;
pub mod oracle;
pub mod strategies;

pub use counting::{counted, CountingIter, PullCounter};
pub use error::{TestkitError, TestkitResult};
pub use fixtures::FixtureConfig;

/// Install a fmt subscriber that writes through the test harness.
///
/// Safe to call from every test; only the first call installs anything.
pub fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_max_level(tracing::Level::DEBUG)
        .with_test_writer()
        .try_init();
}
