//! Concurrently shared treasury lock
//!
//! Every operation takes the lock for its full check-then-commit sequence,
//! so operations on the shared state never interleave. Mints through
//! different capabilities only contend on the lock itself; a single
//! capability is serialized by its holder's `&mut` borrow.

use std::sync::Arc;
use tokio::sync::RwLock;

use crate::capability::{AdminCapability, MintCapability};
use crate::error::Result;
use crate::lock::{LockReport, TreasuryLock};
use economics::{Balance, Coin, Currency, TreasuryCap};
use treasury_core::{Epoch, ObjectId};

pub struct SharedTreasuryLock<C> {
    id: ObjectId,
    inner: Arc<RwLock<TreasuryLock<C>>>,
}

impl<C: Currency> SharedTreasuryLock<C> {
    /// Create a lock in shared form
    pub fn create(treasury_cap: TreasuryCap<C>) -> (Self, AdminCapability<C>) {
        let (lock, admin) = TreasuryLock::create(treasury_cap);
        (Self::from(lock), admin)
    }

    pub fn id(&self) -> ObjectId {
        self.id
    }

    pub async fn ban(&self, admin: &AdminCapability<C>, cap_id: ObjectId) -> bool {
        self.inner.write().await.ban(admin, cap_id)
    }

    pub async fn unban(&self, admin: &AdminCapability<C>, cap_id: ObjectId) -> bool {
        self.inner.write().await.unban(admin, cap_id)
    }

    pub async fn is_banned(&self, cap_id: &ObjectId) -> bool {
        self.inner.read().await.is_banned(cap_id)
    }

    pub async fn mint(
        &self,
        cap: &mut MintCapability<C>,
        amount: u64,
        current_period: Epoch,
    ) -> Result<Coin<C>> {
        self.inner.write().await.mint(cap, amount, current_period)
    }

    pub async fn mint_balance(
        &self,
        cap: &mut MintCapability<C>,
        amount: u64,
        current_period: Epoch,
    ) -> Result<Balance<C>> {
        self.inner
            .write()
            .await
            .mint_balance(cap, amount, current_period)
    }

    /// Run `f` against the underlying treasury cap, bypassing quotas and bans
    pub async fn with_treasury_cap<R, F>(&self, admin: &AdminCapability<C>, f: F) -> R
    where
        F: FnOnce(&mut TreasuryCap<C>) -> R,
    {
        let mut lock = self.inner.write().await;
        f(lock.treasury_cap_mut(admin))
    }

    pub async fn total_supply(&self) -> u64 {
        self.inner.read().await.treasury_cap().total_supply()
    }

    pub async fn report(&self) -> LockReport {
        self.inner.read().await.report()
    }
}

impl<C: Currency> From<TreasuryLock<C>> for SharedTreasuryLock<C> {
    fn from(lock: TreasuryLock<C>) -> Self {
        Self {
            id: lock.id(),
            inner: Arc::new(RwLock::new(lock)),
        }
    }
}

impl<C> Clone for SharedTreasuryLock<C> {
    fn clone(&self) -> Self {
        Self {
            id: self.id,
            inner: Arc::clone(&self.inner),
        }
    }
}
