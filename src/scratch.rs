//! Per-run scratch directory lifecycle.

use crate::constants::SCRATCH_DIR_PREFIX;
use crate::error::Result;
use std::io;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// Uniquely named temporary directory holding one installed tool.
///
/// Owned by the top-level run only. `remove()` deletes the tree and
/// tolerates an already-gone directory; dropping an un-removed value still
/// deletes it, so every exit path releases the directory.
pub struct ScratchDir {
    dir: Option<TempDir>,
    path: PathBuf,
}

impl ScratchDir {
    pub fn new() -> Result<Self> {
        let dir = tempfile::Builder::new()
            .prefix(SCRATCH_DIR_PREFIX)
            .tempdir()?;
        let path = dir.path().to_path_buf();
        Ok(Self {
            dir: Some(dir),
            path,
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Recursively delete the directory. Idempotent.
    pub fn remove(&mut self) -> Result<()> {
        let Some(dir) = self.dir.take() else {
            return Ok(());
        };

        match dir.close() {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(()),
            Err(e) => Err(e.into()),
        }
    }
}
