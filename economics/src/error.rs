//! Supply error types

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SupplyError {
    #[error("Treasury cap for {symbol} was already created")]
    CurrencyAlreadyCreated { symbol: &'static str },

    #[error("Supply overflow: minting {requested} on top of {supply}")]
    SupplyOverflow { requested: u64, supply: u64 },

    #[error("Balance overflow: joining {incoming} onto {held}")]
    BalanceOverflow { held: u64, incoming: u64 },

    #[error("Insufficient balance: requested {requested}, available {available}")]
    InsufficientBalance { requested: u64, available: u64 },
}

pub type Result<T> = std::result::Result<T, SupplyError>;
