//! Configuration module for moneyio
//!
//! - Path resolution for settings and data
//! - User settings persistence

pub mod paths;
pub mod settings;

pub use paths::MoneyioPaths;
pub use settings::Settings;
