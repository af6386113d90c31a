//! Supply management and tracking
//!
//! `TreasuryCap<C>` is the only way to create or destroy units of `C`. It is
//! not `Clone`, and at most one can ever be created per currency in a
//! process, so whoever owns it holds the unrestricted minting power for `C`.

use parking_lot::Mutex;
use serde::{Deserialize, Serialize};
use std::any::TypeId;
use std::collections::BTreeSet;
use std::fmt;
use std::marker::PhantomData;

use crate::balance::{Balance, Coin};
use crate::error::{Result, SupplyError};
use treasury_core::ObjectId;

/// Currencies whose treasury cap has been handed out
static CREATED: Mutex<BTreeSet<TypeId>> = Mutex::new(BTreeSet::new());

/// Marker for a mintable currency
///
/// Declare currencies with [`currency!`](crate::currency).
pub trait Currency: 'static + Send + Sync {
    const SYMBOL: &'static str;
    const DECIMALS: u8;

    /// Smallest-unit amount of one whole token, `None` if `DECIMALS > 19`
    fn unit() -> Option<u64> {
        10u64.checked_pow(Self::DECIMALS as u32)
    }
}

/// Declare a currency marker type
///
/// ```
/// economics::currency!(pub struct Gold, "GLD", 2);
///
/// use economics::Currency;
/// assert_eq!(Gold::SYMBOL, "GLD");
/// ```
#[macro_export]
macro_rules! currency {
    ($(#[$meta:meta])* $vis:vis struct $name:ident, $symbol:expr, $decimals:expr) => {
        $(#[$meta])*
        $vis struct $name;

        impl $crate::Currency for $name {
            const SYMBOL: &'static str = $symbol;
            const DECIMALS: u8 = $decimals;
        }
    };
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SupplyStats {
    pub total_minted: u64,
    pub total_burned: u64,
    pub circulating_supply: u64,
}

/// Unrestricted mint authority for currency `C`
pub struct TreasuryCap<C> {
    id: ObjectId,
    stats: SupplyStats,
    _currency: PhantomData<fn() -> C>,
}

impl<C: Currency> TreasuryCap<C> {
    /// Create the treasury cap for `C`
    ///
    /// Succeeds once per currency for the lifetime of the process, even if
    /// the first cap is later dropped.
    pub fn new() -> Result<Self> {
        if !CREATED.lock().insert(TypeId::of::<C>()) {
            return Err(SupplyError::CurrencyAlreadyCreated { symbol: C::SYMBOL });
        }

        Ok(Self {
            id: ObjectId::random(),
            stats: SupplyStats::default(),
            _currency: PhantomData,
        })
    }

    pub fn id(&self) -> ObjectId {
        self.id
    }

    /// Mint a new coin worth `amount`
    pub fn mint(&mut self, amount: u64) -> Result<Coin<C>> {
        self.increase_supply(amount)?;
        Ok(Coin::from_balance(Balance::new(amount)))
    }

    /// Mint `amount` as a bare balance, for depositing into shared pools
    pub fn mint_balance(&mut self, amount: u64) -> Result<Balance<C>> {
        self.increase_supply(amount)?;
        Ok(Balance::new(amount))
    }

    /// Destroy a coin, returning the burned amount
    pub fn burn(&mut self, coin: Coin<C>) -> u64 {
        self.burn_balance(coin.into_balance())
    }

    pub fn burn_balance(&mut self, balance: Balance<C>) -> u64 {
        // every balance of C came from this cap, so burned never passes minted
        let amount = balance.destroy();
        self.stats.total_burned = self.stats.total_burned.saturating_add(amount);
        self.stats.circulating_supply = self.stats.circulating_supply.saturating_sub(amount);
        amount
    }

    pub fn total_supply(&self) -> u64 {
        self.stats.circulating_supply
    }

    pub fn stats(&self) -> &SupplyStats {
        &self.stats
    }

    fn increase_supply(&mut self, amount: u64) -> Result<()> {
        let supply = self.stats.circulating_supply;
        let overflow = SupplyError::SupplyOverflow {
            requested: amount,
            supply,
        };
        let circulating = supply.checked_add(amount).ok_or(overflow.clone())?;
        let minted = self.stats.total_minted.checked_add(amount).ok_or(overflow)?;

        self.stats.circulating_supply = circulating;
        self.stats.total_minted = minted;
        Ok(())
    }
}

impl<C: Currency> fmt::Debug for TreasuryCap<C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TreasuryCap")
            .field("id", &self.id)
            .field("currency", &C::SYMBOL)
            .field("stats", &self.stats)
            .finish()
    }
}
