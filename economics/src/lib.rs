//! Supply Economics Module
//!
//! Implements the unrestricted supply primitive:
//! - Currency markers
//! - Minting and burning through a single treasury capability
//! - Coin and balance values
//! - Supply tracking

pub mod balance;
pub mod error;
pub mod supply;

pub use balance::{Balance, Coin};
pub use error::{Result, SupplyError};
pub use supply::{Currency, SupplyStats, TreasuryCap};

/// Economic constants
pub mod constants {
    /// Decimal places used by the bundled currencies
    pub const DEFAULT_DECIMALS: u8 = 8;

    /// One whole token at `DEFAULT_DECIMALS`
    pub const TOKEN_UNIT: u64 = 100_000_000;
}
