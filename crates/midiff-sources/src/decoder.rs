//! Trusted decoder run as a subprocess.
//!
//! The decoder is given the MIDI file path and must print its dump, one
//! message per line, on stdout. The captured stdout is the reference dump;
//! no intermediate output file is involved.

use std::path::{Path, PathBuf};
use std::process::{Command, Stdio};

use midiff_core::config::DecoderConfig;

use crate::{decode_lossy, DumpSource, SourceError};

/// Placeholder in decoder arguments replaced by the input file path.
pub const INPUT_PLACEHOLDER: &str = "{input}";

/// A decoder invocation for one input file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DecoderCommand {
    program: String,
    args: Vec<String>,
    input: PathBuf,
}

impl DecoderCommand {
    /// `args` may contain [`INPUT_PLACEHOLDER`]. If none does, the input path
    /// is appended as the last argument.
    pub fn new(program: impl Into<String>, args: Vec<String>, input: impl Into<PathBuf>) -> Self {
        Self {
            program: program.into(),
            args,
            input: input.into(),
        }
    }

    pub fn from_config(config: &DecoderConfig, input: impl Into<PathBuf>) -> Self {
        Self::new(config.program.clone(), config.args.clone(), input)
    }

    pub fn input(&self) -> &Path {
        &self.input
    }

    /// Arguments with the placeholder substituted.
    pub fn resolved_args(&self) -> Vec<String> {
        let input = self.input.to_string_lossy();
        let mut args: Vec<String> = self
            .args
            .iter()
            .map(|arg| arg.replace(INPUT_PLACEHOLDER, &input))
            .collect();
        if !self.args.iter().any(|arg| arg.contains(INPUT_PLACEHOLDER)) {
            args.push(input.into_owned());
        }
        args
    }
}

impl DumpSource for DecoderCommand {
    fn describe(&self) -> String {
        format!("decoder `{}` on {}", self.program, self.input.display())
    }

    fn read(&self) -> Result<String, SourceError> {
        let args = self.resolved_args();
        tracing::info!(program = %self.program, ?args, "running trusted decoder");

        let output = Command::new(&self.program)
            .args(&args)
            .stdin(Stdio::null())
            .output()
            .map_err(|source| SourceError::Spawn {
                program: self.program.clone(),
                source,
            })?;

        if !output.status.success() {
            return Err(SourceError::DecoderFailed {
                program: self.program.clone(),
                status: output.status,
                stderr: String::from_utf8_lossy(&output.stderr).trim().to_string(),
            });
        }

        tracing::debug!(bytes = output.stdout.len(), "captured decoder output");
        Ok(decode_lossy(output.stdout, &self.describe()))
    }
}
