//! Per-capability quota window
//!
//! A window tracks how much was minted in the last epoch it saw. Rollover is
//! lazy: a new epoch only resets the window when a mint is admitted in it.

use serde::Serialize;
use treasury_core::Epoch;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct QuotaWindow {
    /// Maximum mintable per epoch, fixed at creation
    ceiling: u64,
    /// Last epoch in which a mint was committed (or the issue epoch)
    period: Epoch,
    /// Amount minted during `period`
    consumed: u64,
}

/// Rejected request, measured against the requested epoch
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct QuotaExceeded {
    pub requested: u64,
    pub minted: u64,
    pub ceiling: u64,
}

/// A checked request that has not been applied yet
#[must_use]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Admission {
    period: Epoch,
    consumed: u64,
    rolled_over: bool,
}

impl Admission {
    pub fn rolled_over(&self) -> bool {
        self.rolled_over
    }

    /// Window consumption after commit
    pub fn consumed(&self) -> u64 {
        self.consumed
    }
}

impl QuotaWindow {
    pub fn new(ceiling: u64, period: Epoch) -> Self {
        Self {
            ceiling,
            period,
            consumed: 0,
        }
    }

    pub fn ceiling(&self) -> u64 {
        self.ceiling
    }

    pub fn period(&self) -> Epoch {
        self.period
    }

    pub fn consumed(&self) -> u64 {
        self.consumed
    }

    fn consumed_in(&self, period: Epoch) -> u64 {
        if self.period == period {
            self.consumed
        } else {
            0
        }
    }

    /// Quota still available in `period`
    pub fn remaining(&self, period: Epoch) -> u64 {
        self.ceiling.saturating_sub(self.consumed_in(period))
    }

    /// Check whether `amount` fits in `period` without touching the window
    pub fn admit(&self, amount: u64, period: Epoch) -> Result<Admission, QuotaExceeded> {
        let minted = self.consumed_in(period);
        let exceeded = QuotaExceeded {
            requested: amount,
            minted,
            ceiling: self.ceiling,
        };

        let consumed = minted.checked_add(amount).ok_or(exceeded)?;
        if consumed > self.ceiling {
            return Err(exceeded);
        }

        Ok(Admission {
            period,
            consumed,
            rolled_over: self.period != period,
        })
    }

    pub fn commit(&mut self, admission: Admission) {
        self.period = admission.period;
        self.consumed = admission.consumed;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn consume(window: &mut QuotaWindow, amount: u64, period: u64) -> Result<(), QuotaExceeded> {
        let admission = window.admit(amount, Epoch(period))?;
        window.commit(admission);
        Ok(())
    }

    #[test]
    fn test_fill_to_ceiling() {
        let mut window = QuotaWindow::new(500, Epoch(1));

        consume(&mut window, 300, 1).unwrap();
        consume(&mut window, 200, 1).unwrap();
        assert_eq!(window.consumed(), 500);
        assert_eq!(window.remaining(Epoch(1)), 0);

        let err = consume(&mut window, 1, 1).unwrap_err();
        assert_eq!(
            err,
            QuotaExceeded {
                requested: 1,
                minted: 500,
                ceiling: 500
            }
        );
        assert_eq!(window.consumed(), 500);
    }

    #[test]
    fn test_no_partial_fill() {
        let mut window = QuotaWindow::new(500, Epoch(1));
        consume(&mut window, 450, 1).unwrap();

        assert!(consume(&mut window, 100, 1).is_err());
        assert_eq!(window.consumed(), 450);
    }

    #[test]
    fn test_rollover_resets_once() {
        let mut window = QuotaWindow::new(500, Epoch(1));
        consume(&mut window, 500, 1).unwrap();

        // several skipped epochs reset exactly like one
        let admission = window.admit(400, Epoch(7)).unwrap();
        assert!(admission.rolled_over());
        assert_eq!(admission.consumed(), 400);
        window.commit(admission);

        assert_eq!(window.period(), Epoch(7));
        assert_eq!(window.consumed(), 400);
    }

    #[test]
    fn test_rejected_rollover_keeps_old_period() {
        let mut window = QuotaWindow::new(500, Epoch(1));
        consume(&mut window, 200, 1).unwrap();

        assert!(consume(&mut window, 501, 2).is_err());
        assert_eq!(window.period(), Epoch(1));
        assert_eq!(window.consumed(), 200);
        assert_eq!(window.remaining(Epoch(2)), 500);
    }

    #[test]
    fn test_zero_ceiling_never_mints() {
        let window = QuotaWindow::new(0, Epoch(0));
        assert!(window.admit(1, Epoch(0)).is_err());
        assert!(window.admit(1, Epoch(100)).is_err());
        // a zero amount fits any ceiling
        assert!(window.admit(0, Epoch(0)).is_ok());
    }

    #[test]
    fn test_overflow_is_quota_exceeded() {
        let mut window = QuotaWindow::new(u64::MAX, Epoch(0));
        consume(&mut window, u64::MAX - 1, 0).unwrap();

        let err = consume(&mut window, 2, 0).unwrap_err();
        assert_eq!(err.minted, u64::MAX - 1);
        assert_eq!(window.consumed(), u64::MAX - 1);
    }
}
