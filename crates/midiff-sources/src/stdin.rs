//! Dump piped on standard input.

use std::io::Read;

use crate::{decode_lossy, DumpSource, SourceError};

/// Reads the whole of standard input once.
#[derive(Debug, Clone, Copy, Default)]
pub struct StdinDump;

impl DumpSource for StdinDump {
    fn describe(&self) -> String {
        "stdin".to_string()
    }

    fn read(&self) -> Result<String, SourceError> {
        let mut bytes = Vec::new();
        std::io::stdin()
            .lock()
            .read_to_end(&mut bytes)
            .map_err(SourceError::Stdin)?;
        tracing::debug!(bytes = bytes.len(), "read dump from stdin");
        Ok(decode_lossy(bytes, "stdin"))
    }
}
