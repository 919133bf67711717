// Library interface for joker
pub mod commands;
pub mod config;
pub mod env;
pub mod error;
pub mod settings;
pub mod suggest;

// Re-export commonly used items
pub use error::{JokerError, Result};
