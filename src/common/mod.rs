//! Common utilities: errors, configuration, paths and logging

pub mod config;
pub mod error;
pub mod logging;
pub mod paths;

pub use error::{Error, Result};
