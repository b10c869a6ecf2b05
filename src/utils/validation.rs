use crate::utils::error::{BuildError, Result};
use std::collections::HashSet;
use std::path::{Component, Path, PathBuf};

pub trait Validate {
    fn validate(&self) -> Result<()>;
}

pub fn validate_path(field_name: &str, path: &str) -> Result<()> {
    if path.trim().is_empty() {
        return Err(BuildError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: path.to_string(),
            reason: "Path cannot be empty".to_string(),
        });
    }

    if path.contains('\0') {
        return Err(BuildError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: path.to_string(),
            reason: "Path contains null bytes".to_string(),
        });
    }

    Ok(())
}

pub fn validate_existing_dir(field_name: &str, path: &Path) -> Result<()> {
    validate_path(field_name, &path.to_string_lossy())?;

    if !path.is_dir() {
        return Err(BuildError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: path.display().to_string(),
            reason: "Directory does not exist".to_string(),
        });
    }

    Ok(())
}

/// Drops `.` components, so `./a/./b` and `a/b` compare equal.
pub fn normalize_relative(path: &Path) -> PathBuf {
    path.components()
        .filter(|c| !matches!(c, Component::CurDir))
        .collect()
}

/// Checks that an entry stays inside both the project root and the output
/// directory once joined onto them.
pub fn validate_relative_entry(field_name: &str, entry: &str) -> Result<()> {
    validate_path(field_name, entry)?;

    for component in Path::new(entry).components() {
        let reason = match component {
            Component::Prefix(_) | Component::RootDir => "Entry must be a relative path",
            Component::ParentDir => "Entry cannot contain '..'",
            Component::CurDir | Component::Normal(_) => continue,
        };
        return Err(BuildError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: entry.to_string(),
            reason: reason.to_string(),
        });
    }

    if normalize_relative(Path::new(entry)).as_os_str().is_empty() {
        return Err(BuildError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: entry.to_string(),
            reason: "Entry must name a file or directory below the root".to_string(),
        });
    }

    Ok(())
}

/// A relative output directory must not be the root itself nor sit inside
/// any listed entry. Absolute ones are checked again at copy time.
pub fn validate_output_placement(output_dir: &Path, files: &[String]) -> Result<()> {
    if output_dir.is_absolute() {
        return Ok(());
    }

    let output = normalize_relative(output_dir);
    if output.as_os_str().is_empty() {
        return Err(BuildError::InvalidConfigValueError {
            field: "output_dir".to_string(),
            value: output_dir.display().to_string(),
            reason: "Output directory cannot be the project root".to_string(),
        });
    }

    for file in files {
        if output.starts_with(normalize_relative(Path::new(file))) {
            return Err(BuildError::InvalidConfigValueError {
                field: "files".to_string(),
                value: file.clone(),
                reason: format!("Entry contains the output directory '{}'", output.display()),
            });
        }
    }

    Ok(())
}

pub fn validate_file_list(field_name: &str, files: &[String]) -> Result<()> {
    if files.is_empty() {
        return Err(BuildError::ConfigValidationError {
            field: field_name.to_string(),
            message: "At least one file must be listed".to_string(),
        });
    }

    let mut seen = HashSet::new();
    for file in files {
        validate_relative_entry(field_name, file)?;
        if !seen.insert(file.as_str()) {
            return Err(BuildError::InvalidConfigValueError {
                field: field_name.to_string(),
                value: file.clone(),
                reason: "Duplicate entry".to_string(),
            });
        }
    }

    Ok(())
}
