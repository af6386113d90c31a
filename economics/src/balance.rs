//! Coin and balance values

use serde::Serialize;
use std::fmt;
use std::marker::PhantomData;

use crate::error::{Result, SupplyError};
use crate::supply::Currency;
use treasury_core::ObjectId;

/// An amount of `C` without its own identity
///
/// Balances can only be created by a `TreasuryCap<C>` or by splitting an
/// existing balance, so the sum of live balances always equals the supply.
#[derive(Serialize)]
#[serde(bound = "")]
pub struct Balance<C> {
    value: u64,
    #[serde(skip)]
    _currency: PhantomData<fn() -> C>,
}

impl<C: Currency> Balance<C> {
    pub(crate) fn new(value: u64) -> Self {
        Self {
            value,
            _currency: PhantomData,
        }
    }

    pub fn zero() -> Self {
        Self::new(0)
    }

    pub fn value(&self) -> u64 {
        self.value
    }

    /// Merge `other` into this balance, returning the new value
    ///
    /// Balances minted by the single cap of `C` never sum past `u64::MAX`.
    pub fn join(&mut self, other: Balance<C>) -> Result<u64> {
        self.value = self
            .value
            .checked_add(other.value)
            .ok_or(SupplyError::BalanceOverflow {
                held: self.value,
                incoming: other.value,
            })?;
        Ok(self.value)
    }

    /// Take `amount` out of this balance
    pub fn split(&mut self, amount: u64) -> Result<Balance<C>> {
        if amount > self.value {
            return Err(SupplyError::InsufficientBalance {
                requested: amount,
                available: self.value,
            });
        }
        self.value -= amount;
        Ok(Balance::new(amount))
    }

    pub(crate) fn destroy(self) -> u64 {
        self.value
    }
}

impl<C: Currency> fmt::Debug for Balance<C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Balance({} {})", self.value, C::SYMBOL)
    }
}

/// An owned, transferable amount of `C` with its own identity
#[derive(Serialize)]
#[serde(bound = "")]
pub struct Coin<C> {
    id: ObjectId,
    balance: Balance<C>,
}

impl<C: Currency> Coin<C> {
    pub fn from_balance(balance: Balance<C>) -> Self {
        Self {
            id: ObjectId::random(),
            balance,
        }
    }

    pub fn id(&self) -> ObjectId {
        self.id
    }

    pub fn value(&self) -> u64 {
        self.balance.value()
    }

    pub fn into_balance(self) -> Balance<C> {
        self.balance
    }

    /// Split `amount` off into a new coin
    pub fn split(&mut self, amount: u64) -> Result<Coin<C>> {
        Ok(Coin::from_balance(self.balance.split(amount)?))
    }

    /// Absorb `other`; its identity ceases to exist
    pub fn join(&mut self, other: Coin<C>) -> Result<u64> {
        self.balance.join(other.balance)
    }
}

impl<C: Currency> fmt::Debug for Coin<C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Coin")
            .field("id", &self.id)
            .field("value", &self.value())
            .field("currency", &C::SYMBOL)
            .finish()
    }
}
