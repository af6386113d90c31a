//! Treasury error types

use economics::SupplyError;
use thiserror::Error;
use treasury_core::ObjectId;

/// Mint authorization errors
///
/// Every variant aborts the attempt before any state changes.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TreasuryError {
    #[error("Mint capability {cap_id} is banned")]
    Banned { cap_id: ObjectId },

    #[error("Quota exceeded for {cap_id}: requested {requested}, already minted {minted} of {ceiling}")]
    QuotaExceeded {
        cap_id: ObjectId,
        requested: u64,
        minted: u64,
        ceiling: u64,
    },

    #[error("Supply error: {0}")]
    Supply(#[from] SupplyError),
}

pub type Result<T> = std::result::Result<T, TreasuryError>;
