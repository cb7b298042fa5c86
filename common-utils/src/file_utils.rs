//! # File utils
//!
//! This module contains structures and functionality related to the filenames derived from an
//! output prefix and to writing output files without ever exposing a half written file.
//!

use std::{
    ffi::OsString,
    fs::File,
    path::{Path, PathBuf},
};

use tempfile::NamedTempFile;

use crate::error::{PipelineError, Result};

/// Struct providing settings for the filenames of the files belonging to one prefix.
pub struct RecordFilesConfig;

impl RecordFilesConfig {
    /// The extension of the file holding one `<date> <url>` record per line.
    pub const RECORDS_EXTENSION: &'static str = ".txt";
    /// The extension of the file holding the ranked TLD report.
    pub const REPORT_EXTENSION: &'static str = ".out";
}

/// Appends the extension to the prefix verbatim. Unlike `Path::with_extension` this keeps any
/// dots already present in the prefix.
pub fn path_with_extension<P: AsRef<Path>>(prefix: P, extension: &str) -> PathBuf {
    let mut path: OsString = prefix.as_ref().as_os_str().to_owned();
    path.push(extension);
    PathBuf::from(path)
}

/// The two files written for a prefix.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutputPaths {
    /// `<prefix>.txt`
    pub records: PathBuf,
    /// `<prefix>.out`
    pub report: PathBuf,
}

impl OutputPaths {
    pub fn from_prefix<P: AsRef<Path>>(prefix: P) -> Self {
        Self {
            records: path_with_extension(prefix.as_ref(), RecordFilesConfig::RECORDS_EXTENSION),
            report: path_with_extension(prefix.as_ref(), RecordFilesConfig::REPORT_EXTENSION),
        }
    }
}

// The directory a file will be placed in. A bare filename lives in the working directory.
fn parent_directory(path: &Path) -> &Path {
    match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    }
}

/// Creates the directory the given prefix points into if it does not exist yet.
pub fn ensure_parent_directory<P: AsRef<Path>>(prefix: P) -> Result<()> {
    let directory = parent_directory(prefix.as_ref());
    if !directory.exists() {
        std::fs::create_dir_all(directory).map_err(|e| PipelineError::io(directory, e))?;
    }
    Ok(())
}

/// A file that is written to a temporary location next to its destination and only moved into
/// place by [`StagedFile::commit`]. Dropping an uncommitted `StagedFile` removes the temporary file
/// and leaves the destination untouched.
pub struct StagedFile {
    target: PathBuf,
    temp: NamedTempFile,
}

impl StagedFile {
    pub fn create<P: AsRef<Path>>(target: P) -> Result<Self> {
        let target = target.as_ref().to_path_buf();
        let directory = parent_directory(target.as_path());
        let temp = NamedTempFile::new_in(directory).map_err(|e| PipelineError::io(directory, e))?;
        Ok(Self { target, temp })
    }

    pub fn as_file_mut(&mut self) -> &mut File {
        self.temp.as_file_mut()
    }

    /// Atomically replaces the destination with everything written so far.
    /// Callers must have flushed their writers.
    pub fn commit(self) -> Result<PathBuf> {
        let target = self.target;
        self.temp
            .persist(target.as_path())
            .map_err(|e| PipelineError::io(target.as_path(), e.error))?;
        Ok(target)
    }
}
