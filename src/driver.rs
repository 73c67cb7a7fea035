//! Report driver
//!
//! Runs the Fibonacci function over an ordered list of sample inputs and
//! renders the result between a startup banner and a completion banner.

use std::io::Write;

use clap::ValueEnum;
use serde::{Deserialize, Serialize};

use crate::common::{Error, Result};
use crate::fibonacci::{fibonacci, MAX_INPUT};

/// Sample inputs used when neither the CLI nor the config file provides any
pub const DEFAULT_INPUTS: [u32; 3] = [5, 8, 10];

/// Last line of every report
pub const COMPLETION_BANNER: &str = "Debugging complete!";

/// Which startup banner the report opens with
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "snake_case")]
pub enum Flavor {
    #[default]
    Go,
    Python,
}

impl Flavor {
    pub fn banner(self) -> &'static str {
        match self {
            Flavor::Go => "Go Debugging Example",
            Flavor::Python => "Python Debugging Example",
        }
    }
}

/// How the report is written to the output stream
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "snake_case")]
pub enum OutputFormat {
    /// One line per entry, the classic console output
    #[default]
    Text,
    /// The whole report as a single JSON document
    Json,
}

/// What to run: banner flavor plus ordered inputs
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Program {
    pub flavor: Flavor,
    pub inputs: Vec<u32>,
}

impl Default for Program {
    fn default() -> Self {
        Self {
            flavor: Flavor::default(),
            inputs: DEFAULT_INPUTS.to_vec(),
        }
    }
}

/// A single computed entry
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Outcome {
    pub n: u32,
    pub value: u64,
}

/// Full output of one run, in print order
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Report {
    pub banner: String,
    pub results: Vec<Outcome>,
    pub footer: String,
}

impl Program {
    /// Compute every input in order.
    ///
    /// All inputs are checked against `MAX_INPUT` before any work is done, so
    /// a rejected program produces no partial report.
    pub fn execute(&self) -> Result<Report> {
        if let Some(&n) = self.inputs.iter().find(|&&n| n > MAX_INPUT) {
            return Err(Error::InputTooLarge { n, max: MAX_INPUT });
        }

        // BREAKPOINT_MARKER: before_loop
        let mut results = Vec::with_capacity(self.inputs.len());
        for &n in &self.inputs {
            let value = fibonacci(n);
            tracing::debug!(n, value, "Computed Fibonacci number");
            results.push(Outcome { n, value });
        }

        // BREAKPOINT_MARKER: after_loop
        Ok(Report {
            banner: self.flavor.banner().to_string(),
            results,
            footer: COMPLETION_BANNER.to_string(),
        })
    }
}

impl Report {
    /// Text lines in print order
    pub fn lines(&self) -> Vec<String> {
        let mut lines = Vec::with_capacity(self.results.len() + 2);
        lines.push(self.banner.clone());
        lines.extend(
            self.results
                .iter()
                .map(|r| format!("Fibonacci({}) = {}", r.n, r.value)),
        );
        lines.push(self.footer.clone());
        lines
    }

    pub fn write_to<W: Write>(&self, format: OutputFormat, out: &mut W) -> Result<()> {
        match format {
            OutputFormat::Text => {
                for line in self.lines() {
                    writeln!(out, "{line}")?;
                }
            }
            OutputFormat::Json => {
                serde_json::to_writer_pretty(&mut *out, self)?;
                writeln!(out)?;
            }
        }
        out.flush()?;
        Ok(())
    }
}
