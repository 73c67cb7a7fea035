//! CLI argument definitions

use clap::Args;
use std::path::PathBuf;

use crate::driver::{Flavor, OutputFormat};

/// Flags for a run; every one of them is optional
#[derive(Args, Debug, Default)]
pub struct RunArgs {
    /// Sample input (repeatable, replaces the default 5, 8, 10)
    #[arg(long = "input", short = 'n', value_name = "N")]
    pub inputs: Vec<u32>,

    /// Startup banner flavor
    #[arg(long, value_enum)]
    pub flavor: Option<Flavor>,

    /// Output format
    #[arg(long, value_enum)]
    pub format: Option<OutputFormat>,

    /// Path to a config file (default: platform config dir)
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,
}
