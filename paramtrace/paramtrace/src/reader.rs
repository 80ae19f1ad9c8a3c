//! Memory-mapped data file access.

use std::{fs, io, ops::Deref, path::Path};

use memmap2::Mmap;
use paramtrace_core::TraceError;
use tracing::debug;

/// Read-only view of a data file's bytes.
///
/// Non-empty files are memory-mapped; an empty file yields an empty buffer.
#[derive(Debug)]
pub struct DataFile {
    map: Option<Mmap>,
}

impl DataFile {
    pub fn open(path: impl AsRef<Path>) -> Result<Self, TraceError> {
        let path = path.as_ref();
        let io_err = |e: io::Error| TraceError::io(path.display().to_string(), e);

        let file = fs::File::open(path).map_err(io_err)?;
        let len = file.metadata().map_err(io_err)?.len();
        if len == 0 {
            debug!(path = %path.display(), "data file is empty");
            return Ok(Self { map: None });
        }
        // SAFETY: the mapping is read-only and lives no longer than this value.
        let map = unsafe { Mmap::map(&file) }.map_err(io_err)?;
        debug!(path = %path.display(), len, "mapped data file");
        Ok(Self { map: Some(map) })
    }

    pub fn as_bytes(&self) -> &[u8] {
        self.map.as_deref().unwrap_or_default()
    }
}

impl Deref for DataFile {
    type Target = [u8];

    fn deref(&self) -> &[u8] {
        self.as_bytes()
    }
}
