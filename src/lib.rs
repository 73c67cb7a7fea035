//! Debugging example - a breakpoint target for debugger tutorials
//!
//! A naive recursive Fibonacci function and a driver that prints a fixed,
//! deterministic report. Lines worth breaking on carry a
//! `// BREAKPOINT_MARKER: <name>` comment on the line above.

pub mod cli;
pub mod commands;
pub mod common;
pub mod driver;
pub mod fibonacci;

pub use common::{Error, Result};
pub use driver::{Flavor, OutputFormat, Program, Report};
pub use fibonacci::{fibonacci, MAX_INPUT};
