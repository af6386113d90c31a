//! Treasury Core Library
//!
//! Host substrate shared by the supply and treasury crates:
//! - Object identities
//! - Epoch (period) sources
//! - Configuration

pub mod config;
pub mod epoch;
pub mod object;

// Re-export main types
pub use config::{ConfigError, EpochConfig};
pub use epoch::{Epoch, EpochSource, ManualEpoch, SystemEpochClock};
pub use object::{ObjectId, ParseObjectIdError};
