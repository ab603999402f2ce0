pub mod config;
pub mod error;
pub mod types;

pub use config::{ChatConfig, TratonConfig};
pub use error::{Result, TratonError};
pub use types::*;
