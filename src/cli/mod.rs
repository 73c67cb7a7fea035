//! CLI command handling
//!
//! Merges flags with the config file and writes the report to stdout.

use std::io;

use crate::commands::RunArgs;
use crate::common::config::{Config, RunConfig};
use crate::common::Result;
use crate::driver::{OutputFormat, Program, DEFAULT_INPUTS};

/// Run the program described by `args`
pub fn dispatch(args: RunArgs) -> Result<()> {
    let config = match &args.config {
        Some(path) => Config::load_from(path)?,
        None => Config::load()?,
    };

    let (program, format) = resolve(&args, &config.run);
    tracing::debug!(?program, ?format, "Resolved run settings");

    let report = program.execute()?;

    let stdout = io::stdout();
    let mut out = stdout.lock();
    report.write_to(format, &mut out)
}

/// Apply precedence: CLI flag, then config file, then built-in default
pub fn resolve(args: &RunArgs, config: &RunConfig) -> (Program, OutputFormat) {
    let inputs = if !args.inputs.is_empty() {
        args.inputs.clone()
    } else if let Some(inputs) = &config.inputs {
        inputs.clone()
    } else {
        DEFAULT_INPUTS.to_vec()
    };

    let program = Program {
        flavor: args.flavor.or(config.flavor).unwrap_or_default(),
        inputs,
    };
    let format = args.format.or(config.format).unwrap_or_default();

    (program, format)
}
