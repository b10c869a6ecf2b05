use crate::domain::model::{CopyOutcome, CopyReport};
use crate::utils::error::Result;
use std::path::{Path, PathBuf};

/// Filesystem access. Symbolic links are never followed: `exists` and
/// `is_dir` look at the link itself, and copies recreate links as links.
pub trait Storage {
    fn exists(&self, path: &Path) -> bool;
    fn is_dir(&self, path: &Path) -> bool;
    fn create_dir_all(&self, path: &Path) -> Result<()>;
    fn canonicalize(&self, path: &Path) -> Result<PathBuf>;
    /// Copies one file or link, overwriting `dest`. Returns the byte count.
    fn copy_file(&self, src: &Path, dest: &Path) -> Result<u64>;
    /// Copies a directory tree under `dest`. Returns the byte count.
    fn copy_tree(&self, src: &Path, dest: &Path) -> Result<u64>;
}

pub trait ConfigProvider {
    fn root(&self) -> &Path;
    fn output_dir(&self) -> &Path;
    fn files(&self) -> &[String];
}

pub trait Pipeline {
    fn output_dir(&self) -> PathBuf;
    fn prepare(&self) -> Result<PathBuf>;
    fn copy_all(&self) -> Result<Vec<CopyOutcome>>;
    fn plan(&self) -> Result<Vec<CopyOutcome>>;
}

/// Anything that wants the finished report, e.g. a JSON file writer.
pub trait ReportSink {
    fn write_report(&self, report: &CopyReport) -> Result<()>;
}
