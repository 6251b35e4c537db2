use std::fs;
use std::io::{self, Write};
use std::path::{Path, PathBuf};

use tempfile::NamedTempFile;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum PersistError {
    #[error("output directory {path:?} missing or not writable: {reason}")]
    OutputDir { path: PathBuf, reason: String },
    #[error("io error: {0}")]
    Io(#[from] io::Error),
}

fn output_dir_error(dir: &Path, reason: impl ToString) -> PersistError {
    PersistError::OutputDir {
        path: dir.to_path_buf(),
        reason: reason.to_string(),
    }
}

/// Ensure output directory exists; create if missing.
pub fn ensure_output_dir(dir: &Path) -> Result<(), PersistError> {
    if dir.exists() {
        let meta = fs::metadata(dir).map_err(|e| output_dir_error(dir, e))?;
        if !meta.is_dir() {
            return Err(output_dir_error(dir, "path is not a directory"));
        }
    } else {
        fs::create_dir_all(dir).map_err(|e| output_dir_error(dir, e))?;
    }
    Ok(())
}

/// Writes whole files into one directory: temp file first, then a rename over the target.
///
/// Readers never observe a half-written file, and a failed write leaves any
/// previous file untouched.
pub struct AtomicFileWriter {
    dir: PathBuf,
}

impl AtomicFileWriter {
    pub fn new(dir: PathBuf) -> Self {
        Self { dir }
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    pub fn write(&self, filename: &str, content: impl AsRef<[u8]>) -> Result<PathBuf, PersistError> {
        ensure_output_dir(&self.dir)?;

        let target = self.dir.join(filename);
        let mut tmp = NamedTempFile::new_in(&self.dir)?;
        tmp.write_all(content.as_ref())?;
        tmp.flush()?;
        tmp.as_file_mut().sync_all()?;

        tmp.persist(&target).map_err(|e| PersistError::Io(e.error))?;
        Ok(target)
    }
}
