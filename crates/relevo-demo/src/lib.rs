pub mod config;
pub mod corpus;
pub mod render;
pub mod runner;

pub use config::{ConfigError, DemoConfig, DemoMode};
pub use runner::{Demo, DemoError};
