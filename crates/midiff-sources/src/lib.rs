//! midiff-sources — where the two dumps come from.
//!
//! Each source produces one dump as a string: a dump file on disk, standard
//! input, or the trusted decoder run as a subprocess with its stdout
//! captured. Failing to obtain a dump is reported here, before the
//! normalizer or comparator ever run.

pub mod decoder;
pub mod file;
pub mod stdin;

pub use decoder::DecoderCommand;
pub use file::FileDump;
pub use stdin::StdinDump;

use std::path::PathBuf;

/// Errors raised while obtaining a dump.
#[derive(Debug, thiserror::Error)]
pub enum SourceError {
    #[error("cannot read dump {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("cannot read dump from stdin: {0}")]
    Stdin(#[source] std::io::Error),

    #[error("cannot start decoder `{program}`: {source}")]
    Spawn {
        program: String,
        #[source]
        source: std::io::Error,
    },

    #[error("decoder `{program}` exited with {status}: {stderr}")]
    DecoderFailed {
        program: String,
        status: std::process::ExitStatus,
        stderr: String,
    },
}

/// Anything that can produce a dump.
pub trait DumpSource {
    /// Human-readable origin, used in logs and error context.
    fn describe(&self) -> String;

    /// Produce the whole dump.
    fn read(&self) -> Result<String, SourceError>;
}

/// `-` means standard input; anything else is a dump file path.
pub fn from_arg(arg: &str) -> Box<dyn DumpSource> {
    if arg == "-" {
        Box::new(StdinDump)
    } else {
        Box::new(FileDump::new(arg))
    }
}

/// Decode captured bytes, replacing invalid UTF-8 rather than failing so a
/// garbled dump still reaches the comparator.
pub(crate) fn decode_lossy(bytes: Vec<u8>, origin: &str) -> String {
    match String::from_utf8(bytes) {
        Ok(text) => text,
        Err(err) => {
            tracing::warn!(origin, "dump is not valid UTF-8; replacing invalid bytes");
            String::from_utf8_lossy(err.as_bytes()).into_owned()
        }
    }
}
