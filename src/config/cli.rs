use crate::core::{ReportSink, Storage};
use crate::domain::model::CopyReport;
use crate::utils::error::Result;
use std::fs;
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

#[derive(Debug, Clone, Default)]
pub struct LocalStorage;

impl LocalStorage {
    pub fn new() -> Self {
        Self
    }
}

/// Clears a file or link left at `dest` by an earlier run so that writing
/// never goes through a stale link.
fn remove_stale(dest: &Path) -> Result<()> {
    match fs::symlink_metadata(dest) {
        Ok(meta) if !meta.is_dir() => fs::remove_file(dest)?,
        _ => {}
    }
    Ok(())
}

fn copy_symlink(src: &Path, dest: &Path) -> Result<()> {
    let target = fs::read_link(src)?;
    remove_stale(dest)?;

    #[cfg(unix)]
    std::os::unix::fs::symlink(&target, dest)?;

    #[cfg(windows)]
    {
        if src.is_dir() {
            std::os::windows::fs::symlink_dir(&target, dest)?;
        } else {
            std::os::windows::fs::symlink_file(&target, dest)?;
        }
    }

    Ok(())
}

fn copy_one(src: &Path, dest: &Path, is_symlink: bool) -> Result<u64> {
    if is_symlink {
        copy_symlink(src, dest)?;
        return Ok(0);
    }

    remove_stale(dest)?;
    Ok(fs::copy(src, dest)?)
}

impl Storage for LocalStorage {
    fn exists(&self, path: &Path) -> bool {
        fs::symlink_metadata(path).is_ok()
    }

    fn is_dir(&self, path: &Path) -> bool {
        fs::symlink_metadata(path)
            .map(|meta| meta.is_dir())
            .unwrap_or(false)
    }

    fn create_dir_all(&self, path: &Path) -> Result<()> {
        fs::create_dir_all(path)?;
        Ok(())
    }

    fn canonicalize(&self, path: &Path) -> Result<PathBuf> {
        Ok(fs::canonicalize(path)?)
    }

    fn copy_file(&self, src: &Path, dest: &Path) -> Result<u64> {
        if let Some(parent) = dest.parent() {
            fs::create_dir_all(parent)?;
        }

        let is_symlink = fs::symlink_metadata(src)?.file_type().is_symlink();
        copy_one(src, dest, is_symlink)
    }

    fn copy_tree(&self, src: &Path, dest: &Path) -> Result<u64> {
        let mut total = 0;

        for entry in WalkDir::new(src).follow_links(false).sort_by_file_name() {
            let entry = entry?;
            let Ok(relative) = entry.path().strip_prefix(src) else {
                continue;
            };
            let target = dest.join(relative);
            let file_type = entry.file_type();

            if file_type.is_dir() {
                fs::create_dir_all(&target)?;
            } else {
                total += copy_one(entry.path(), &target, file_type.is_symlink())?;
            }
        }

        Ok(total)
    }
}

/// Writes the build report as pretty JSON.
#[derive(Debug, Clone)]
pub struct JsonReportFile {
    path: PathBuf,
}

impl JsonReportFile {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl ReportSink for JsonReportFile {
    fn write_report(&self, report: &CopyReport) -> Result<()> {
        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent)?;
        }

        fs::write(&self.path, report.to_json()?)?;
        tracing::debug!("Report written to {}", self.path.display());
        Ok(())
    }
}
