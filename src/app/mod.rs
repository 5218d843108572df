//! Application glue module
//!
//! Configuration loading for hosts embedding the views.

mod config;

pub use config::{Config, ConfigError};
