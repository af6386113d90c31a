//! Epoch (period) sources
//!
//! Quota windows are keyed by an epoch supplied by the host. The engine only
//! compares epochs for equality; sources promise they never go backwards.

use chrono::Utc;
use serde::Serialize;
use std::fmt;
use std::sync::atomic::{AtomicU64, Ordering};

use crate::config::EpochConfig;

/// Opaque period marker
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(transparent)]
pub struct Epoch(pub u64);

impl Epoch {
    pub const GENESIS: Epoch = Epoch(0);

    pub fn next(self) -> Self {
        Epoch(self.0.saturating_add(1))
    }
}

impl fmt::Display for Epoch {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "epoch {}", self.0)
    }
}

/// Supplies the current epoch
pub trait EpochSource {
    fn current_epoch(&self) -> Epoch;
}

/// Host-driven epoch counter
#[derive(Debug, Default)]
pub struct ManualEpoch {
    current: AtomicU64,
}

impl ManualEpoch {
    pub fn new(start: Epoch) -> Self {
        Self {
            current: AtomicU64::new(start.0),
        }
    }

    /// Move to `epoch`. Earlier epochs are ignored.
    pub fn set(&self, epoch: Epoch) {
        self.current.fetch_max(epoch.0, Ordering::SeqCst);
    }

    /// Advance by one epoch and return the new value
    pub fn advance(&self) -> Epoch {
        let prev = self
            .current
            .fetch_update(Ordering::SeqCst, Ordering::SeqCst, |e| {
                Some(e.saturating_add(1))
            })
            .unwrap_or(u64::MAX);
        Epoch(prev.saturating_add(1))
    }
}

impl EpochSource for ManualEpoch {
    fn current_epoch(&self) -> Epoch {
        Epoch(self.current.load(Ordering::SeqCst))
    }
}

/// Wall-clock epoch source
///
/// Epoch `n` covers `[genesis + n * duration, genesis + (n + 1) * duration)`.
/// Timestamps before genesis map to epoch 0.
#[derive(Debug, Clone)]
pub struct SystemEpochClock {
    config: EpochConfig,
}

impl SystemEpochClock {
    pub fn new(config: EpochConfig) -> Self {
        Self { config }
    }

    /// Epoch containing the unix `timestamp`
    pub fn epoch_at(&self, timestamp: i64) -> Epoch {
        let elapsed = timestamp.saturating_sub(self.config.genesis_timestamp);
        if elapsed <= 0 {
            return Epoch::GENESIS;
        }
        let duration = self.config.epoch_duration_secs.max(1);
        Epoch(elapsed as u64 / duration)
    }
}

impl Default for SystemEpochClock {
    fn default() -> Self {
        Self::new(EpochConfig::default())
    }
}

impl EpochSource for SystemEpochClock {
    fn current_epoch(&self) -> Epoch {
        self.epoch_at(Utc::now().timestamp())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_manual_epoch_advance() {
        let source = ManualEpoch::new(Epoch(1));
        assert_eq!(source.current_epoch(), Epoch(1));
        assert_eq!(source.advance(), Epoch(2));
        assert_eq!(source.current_epoch(), Epoch(2));
    }

    #[test]
    fn test_manual_epoch_never_goes_backwards() {
        let source = ManualEpoch::new(Epoch(5));
        source.set(Epoch(3));
        assert_eq!(source.current_epoch(), Epoch(5));
        source.set(Epoch(9));
        assert_eq!(source.current_epoch(), Epoch(9));
    }

    #[test]
    fn test_epoch_next_saturates() {
        assert_eq!(Epoch(u64::MAX).next(), Epoch(u64::MAX));
        assert_eq!(Epoch(7).next(), Epoch(8));
    }

    #[test]
    fn test_system_clock_boundaries() {
        let clock = SystemEpochClock::new(EpochConfig {
            genesis_timestamp: 1_000,
            epoch_duration_secs: 100,
        });

        assert_eq!(clock.epoch_at(0), Epoch(0));
        assert_eq!(clock.epoch_at(1_000), Epoch(0));
        assert_eq!(clock.epoch_at(1_099), Epoch(0));
        assert_eq!(clock.epoch_at(1_100), Epoch(1));
        assert_eq!(clock.epoch_at(1_250), Epoch(2));
    }

    #[test]
    fn test_system_clock_is_monotonic_now() {
        let clock = SystemEpochClock::default();
        let first = clock.current_epoch();
        let second = clock.current_epoch();
        assert!(second >= first);
    }
}
