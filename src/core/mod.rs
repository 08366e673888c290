pub mod config;
pub mod error;
pub mod types;

pub use config::{config, set_config, ProgressConfig};
pub use error::{Result, TierError};
pub use types::{Exp, UserId};
