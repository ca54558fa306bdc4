pub mod config;
pub mod error;
pub mod types;

pub use config::{config, DevelopmentConfig};
pub use error::{FoalError, Result};
pub use types::{AgeDays, FoalId, Timestamp};
