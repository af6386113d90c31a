//! Bearer capabilities
//!
//! Holding a capability is the authorization. Neither type is `Clone` or
//! `Deserialize`, so the only way to obtain one is to be handed it by its
//! current owner.

use serde::Serialize;
use std::fmt;
use std::marker::PhantomData;
use tracing::info;

use crate::quota::{Admission, QuotaWindow};
use economics::Currency;
use treasury_core::{Epoch, ObjectId};

/// Administrative authority over a `TreasuryLock<C>`
///
/// Exactly one is created per lock, by `TreasuryLock::create`. It cannot be
/// revoked.
pub struct AdminCapability<C> {
    id: ObjectId,
    _currency: PhantomData<fn() -> C>,
}

impl<C: Currency> AdminCapability<C> {
    pub(crate) fn new() -> Self {
        Self {
            id: ObjectId::random(),
            _currency: PhantomData,
        }
    }

    pub fn id(&self) -> ObjectId {
        self.id
    }
}

impl<C: Currency> fmt::Debug for AdminCapability<C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AdminCapability")
            .field("id", &self.id)
            .field("currency", &C::SYMBOL)
            .finish()
    }
}

/// Rate-limited minting right
#[derive(Serialize)]
#[serde(bound = "")]
pub struct MintCapability<C> {
    id: ObjectId,
    window: QuotaWindow,
    #[serde(skip)]
    _currency: PhantomData<fn() -> C>,
}

impl<C: Currency> MintCapability<C> {
    /// Issue a new mint capability allowing `max_per_period` per epoch
    ///
    /// A ceiling of zero is accepted and yields a capability that can never
    /// mint a non-zero amount.
    pub fn issue(admin: &AdminCapability<C>, max_per_period: u64, current_period: Epoch) -> Self {
        let cap = Self {
            id: ObjectId::random(),
            window: QuotaWindow::new(max_per_period, current_period),
            _currency: PhantomData,
        };

        info!(
            admin_id = %admin.id(),
            cap_id = %cap.id,
            currency = C::SYMBOL,
            max_per_period,
            period = current_period.0,
            "mint_capability_issued"
        );

        cap
    }

    pub fn id(&self) -> ObjectId {
        self.id
    }

    pub fn max_per_period(&self) -> u64 {
        self.window.ceiling()
    }

    pub fn last_period(&self) -> Epoch {
        self.window.period()
    }

    /// Amount minted during `last_period`
    pub fn minted_in_period(&self) -> u64 {
        self.window.consumed()
    }

    /// Quota available in `current_period`, without rolling the window
    pub fn remaining(&self, current_period: Epoch) -> u64 {
        self.window.remaining(current_period)
    }

    pub fn window(&self) -> &QuotaWindow {
        &self.window
    }

    pub(crate) fn commit(&mut self, admission: Admission) {
        self.window.commit(admission);
    }
}

impl<C: Currency> fmt::Debug for MintCapability<C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("MintCapability")
            .field("id", &self.id)
            .field("currency", &C::SYMBOL)
            .field("window", &self.window)
            .finish()
    }
}
