//! A format definition held together with its source text and file path.

use std::{
    fs, io,
    path::{Path, PathBuf},
};

use paramtrace_core::{Schema, TraceError};
use tracing::debug;

use crate::loader::load_schema;

/// Editable format definition document.
///
/// Every load parses into a temporary first; a failed load leaves the
/// previously held schema, text, and path untouched.
#[derive(Debug, Clone, Default)]
pub struct FormatDocument {
    schema: Option<Schema>,
    text: String,
    path: Option<PathBuf>,
}

impl FormatDocument {
    pub fn new() -> Self {
        Self::default()
    }

    /// Load a document from a file into a fresh [`FormatDocument`].
    pub fn open(path: impl AsRef<Path>) -> Result<Self, TraceError> {
        let mut doc = Self::new();
        doc.load_from_file(path)?;
        Ok(doc)
    }

    /// Replace the held document with the contents of `path`.
    pub fn load_from_file(&mut self, path: impl AsRef<Path>) -> Result<(), TraceError> {
        let path = path.as_ref();
        let bytes = fs::read(path).map_err(|e| TraceError::io(path.display().to_string(), e))?;
        let schema = load_schema(&bytes)?;
        let text = String::from_utf8(bytes).map_err(TraceError::parse)?;

        debug!(path = %path.display(), "format document loaded from file");
        self.schema = Some(schema);
        self.text = text;
        self.path = Some(path.to_path_buf());
        Ok(())
    }

    /// Replace the held schema and text, keeping the current path.
    pub fn load_from_text(&mut self, text: impl Into<String>) -> Result<(), TraceError> {
        let text = text.into();
        let schema = load_schema(&text)?;
        self.schema = Some(schema);
        self.text = text;
        Ok(())
    }

    /// Write the held text verbatim to the held path.
    pub fn save(&self) -> Result<(), TraceError> {
        let path = self.path.as_deref().ok_or_else(|| {
            TraceError::io(
                "",
                io::Error::new(io::ErrorKind::InvalidInput, "format document has no path"),
            )
        })?;
        fs::write(path, self.text.as_bytes())
            .map_err(|e| TraceError::io(path.display().to_string(), e))
    }

    /// Record `path` as the document path, then save.
    pub fn save_as(&mut self, path: impl AsRef<Path>) -> Result<(), TraceError> {
        let path = path.as_ref();
        if path.as_os_str().is_empty() {
            return Err(TraceError::io(
                "",
                io::Error::new(io::ErrorKind::InvalidInput, "format document path is empty"),
            ));
        }
        self.path = Some(path.to_path_buf());
        self.save()
    }

    pub fn clear(&mut self) {
        *self = Self::default();
    }

    pub fn has_format(&self) -> bool {
        self.schema.is_some()
    }

    pub fn schema(&self) -> Option<&Schema> {
        self.schema.as_ref()
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn path(&self) -> Option<&Path> {
        self.path.as_deref()
    }
}
