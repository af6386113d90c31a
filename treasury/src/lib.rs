//! Treasury Lock Module
//!
//! Rate-limited, revocable delegation of an unrestricted mint authority:
//! - `TreasuryLock` owns the `TreasuryCap` and the revocation set
//! - `AdminCapability` issues mint capabilities and bans or unbans them
//! - `MintCapability` mints up to a fixed amount per epoch
//!
//! Capabilities are bearer tokens: whoever holds one may use it.

pub mod capability;
pub mod error;
pub mod lock;
pub mod quota;
pub mod revocation;
pub mod shared;

pub use capability::{AdminCapability, MintCapability};
pub use error::{Result, TreasuryError};
pub use lock::{LockReport, TreasuryLock};
pub use quota::{Admission, QuotaExceeded, QuotaWindow};
pub use revocation::RevocationSet;
pub use shared::SharedTreasuryLock;

pub use economics::{currency, Balance, Coin, Currency, SupplyError, TreasuryCap};
pub use treasury_core::{Epoch, EpochSource, ObjectId};
