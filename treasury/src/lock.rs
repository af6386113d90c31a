//! Treasury Lock
//!
//! Wraps the unrestricted `TreasuryCap<C>` and re-delegates minting to any
//! number of `MintCapability<C>` holders. Each mint goes through:
//!
//! 1. revocation check
//! 2. quota window admission (lazy epoch rollover)
//! 3. the underlying treasury cap
//!
//! The capability is only updated once all three succeed.

use serde::Serialize;
use std::fmt;
use tracing::{debug, info, warn};

use crate::capability::{AdminCapability, MintCapability};
use crate::error::{Result, TreasuryError};
use crate::quota::Admission;
use crate::revocation::RevocationSet;
use economics::{Balance, Coin, Currency, SupplyStats, TreasuryCap};
use treasury_core::{Epoch, EpochSource, ObjectId};

/// Point-in-time view of a lock, suitable for audit output
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LockReport {
    pub lock_id: ObjectId,
    pub currency: String,
    pub supply: SupplyStats,
    pub banned: Vec<ObjectId>,
}

/// Shared mint authority for `C`
///
/// Only one lock can exist per currency, since it consumes the currency's
/// single `TreasuryCap`. Capabilities of another currency do not type-check:
///
/// ```compile_fail
/// use treasury::{currency, TreasuryCap, TreasuryLock};
///
/// currency!(struct Gold, "GLD", 2);
/// currency!(struct Silver, "SLV", 2);
///
/// let (mut gold, _gold_admin) = TreasuryLock::create(TreasuryCap::<Gold>::new().unwrap());
/// let (_silver, silver_admin) = TreasuryLock::create(TreasuryCap::<Silver>::new().unwrap());
/// gold.treasury_cap_mut(&silver_admin);
/// ```
pub struct TreasuryLock<C> {
    id: ObjectId,
    treasury_cap: TreasuryCap<C>,
    banned: RevocationSet,
}

impl<C: Currency> TreasuryLock<C> {
    /// Lock away `treasury_cap`, returning the lock and its only admin capability
    pub fn create(treasury_cap: TreasuryCap<C>) -> (Self, AdminCapability<C>) {
        let lock = Self {
            id: ObjectId::random(),
            treasury_cap,
            banned: RevocationSet::new(),
        };
        let admin = AdminCapability::new();

        info!(
            lock_id = %lock.id,
            admin_id = %admin.id(),
            currency = C::SYMBOL,
            supply = lock.treasury_cap.total_supply(),
            "treasury_lock_created"
        );

        (lock, admin)
    }

    pub fn id(&self) -> ObjectId {
        self.id
    }

    /// Read-only view of the underlying treasury cap
    pub fn treasury_cap(&self) -> &TreasuryCap<C> {
        &self.treasury_cap
    }

    /// Direct access to the underlying treasury cap
    ///
    /// Anything done through the returned reference bypasses every quota
    /// and every ban.
    pub fn treasury_cap_mut(&mut self, admin: &AdminCapability<C>) -> &mut TreasuryCap<C> {
        info!(
            lock_id = %self.id,
            admin_id = %admin.id(),
            "treasury_cap_borrowed"
        );
        &mut self.treasury_cap
    }

    /// Ban a mint capability. Returns false if it was already banned.
    pub fn ban(&mut self, admin: &AdminCapability<C>, cap_id: ObjectId) -> bool {
        let changed = self.banned.insert(cap_id);
        info!(
            lock_id = %self.id,
            admin_id = %admin.id(),
            cap_id = %cap_id,
            changed,
            "mint_capability_banned"
        );
        changed
    }

    /// Lift a ban. Returns false if the capability was not banned.
    pub fn unban(&mut self, admin: &AdminCapability<C>, cap_id: ObjectId) -> bool {
        let changed = self.banned.remove(&cap_id);
        info!(
            lock_id = %self.id,
            admin_id = %admin.id(),
            cap_id = %cap_id,
            changed,
            "mint_capability_unbanned"
        );
        changed
    }

    pub fn is_banned(&self, cap_id: &ObjectId) -> bool {
        self.banned.contains(cap_id)
    }

    pub fn banned_ids(&self) -> &RevocationSet {
        &self.banned
    }

    /// Mint `amount` as a coin using `cap`'s quota for `current_period`
    pub fn mint(
        &mut self,
        cap: &mut MintCapability<C>,
        amount: u64,
        current_period: Epoch,
    ) -> Result<Coin<C>> {
        self.mint_with(cap, amount, current_period, |treasury_cap, amount| {
            treasury_cap.mint(amount)
        })
    }

    /// Mint `amount` as a bare balance using `cap`'s quota for `current_period`
    pub fn mint_balance(
        &mut self,
        cap: &mut MintCapability<C>,
        amount: u64,
        current_period: Epoch,
    ) -> Result<Balance<C>> {
        self.mint_with(cap, amount, current_period, |treasury_cap, amount| {
            treasury_cap.mint_balance(amount)
        })
    }

    /// Mint `amount` in whatever epoch `source` currently reports
    pub fn mint_now<S>(&mut self, cap: &mut MintCapability<C>, amount: u64, source: &S) -> Result<Coin<C>>
    where
        S: EpochSource + ?Sized,
    {
        self.mint(cap, amount, source.current_epoch())
    }

    pub fn report(&self) -> LockReport {
        LockReport {
            lock_id: self.id,
            currency: C::SYMBOL.to_string(),
            supply: self.treasury_cap.stats().clone(),
            banned: self.banned.iter().copied().collect(),
        }
    }

    fn mint_with<V, F>(
        &mut self,
        cap: &mut MintCapability<C>,
        amount: u64,
        current_period: Epoch,
        mint: F,
    ) -> Result<V>
    where
        F: FnOnce(&mut TreasuryCap<C>, u64) -> economics::Result<V>,
    {
        let admission = self.authorize(cap, amount, current_period)?;
        let minted = mint(&mut self.treasury_cap, amount)?;

        if admission.rolled_over() {
            debug!(
                cap_id = %cap.id(),
                from = cap.last_period().0,
                to = current_period.0,
                "quota_window_rolled_over"
            );
        }
        cap.commit(admission);

        debug!(
            lock_id = %self.id,
            cap_id = %cap.id(),
            amount,
            minted_in_period = cap.minted_in_period(),
            period = current_period.0,
            "mint_succeeded"
        );
        Ok(minted)
    }

    /// Run the ban and quota checks without changing anything
    fn authorize(
        &self,
        cap: &MintCapability<C>,
        amount: u64,
        current_period: Epoch,
    ) -> Result<Admission> {
        let cap_id = cap.id();

        // Checked before the window so a banned cap never rolls over
        if self.banned.contains(&cap_id) {
            warn!(
                lock_id = %self.id,
                cap_id = %cap_id,
                amount,
                "mint_rejected_banned"
            );
            return Err(TreasuryError::Banned { cap_id });
        }

        cap.window().admit(amount, current_period).map_err(|exceeded| {
            warn!(
                lock_id = %self.id,
                cap_id = %cap_id,
                requested = exceeded.requested,
                minted = exceeded.minted,
                ceiling = exceeded.ceiling,
                period = current_period.0,
                "mint_rejected_quota_exceeded"
            );
            TreasuryError::QuotaExceeded {
                cap_id,
                requested: exceeded.requested,
                minted: exceeded.minted,
                ceiling: exceeded.ceiling,
            }
        })
    }
}

impl<C: Currency> fmt::Debug for TreasuryLock<C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TreasuryLock")
            .field("id", &self.id)
            .field("treasury_cap", &self.treasury_cap)
            .field("banned", &self.banned)
            .finish()
    }
}
