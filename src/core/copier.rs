use crate::core::{ConfigProvider, Pipeline, Storage};
use crate::domain::model::CopyOutcome;
use crate::utils::error::{BuildError, Result};
use crate::utils::validation::normalize_relative;
use std::path::{Path, PathBuf};

/// Copies every listed entry from the project root into the output directory.
pub struct AssetCopier<S: Storage, C: ConfigProvider> {
    storage: S,
    config: C,
}

impl<S: Storage, C: ConfigProvider> AssetCopier<S, C> {
    pub fn new(storage: S, config: C) -> Self {
        Self { storage, config }
    }

    pub fn source_path(&self, file: &str) -> PathBuf {
        self.config.root().join(file)
    }

    pub fn destination_path(&self, file: &str) -> PathBuf {
        self.output_dir().join(file)
    }

    /// Refuses entries whose destination is the source itself or lies
    /// inside it. Both sides are resolved through the real root and output
    /// directory, so `--output-dir .` or an absolute alias is caught too.
    fn check_overlap(&self, file: &str) -> Result<()> {
        let root = self.storage.canonicalize(self.config.root())?;
        let output_dir = self.storage.canonicalize(&self.output_dir())?;
        let entry = normalize_relative(Path::new(file));
        let src = root.join(&entry);
        let dest = output_dir.join(&entry);

        if src == dest {
            return Err(BuildError::SameSourceAndDestination {
                file: file.to_string(),
            });
        }
        if dest.starts_with(&src) {
            return Err(BuildError::DestinationInsideSource {
                file: file.to_string(),
            });
        }
        Ok(())
    }

    fn copy_entry(&self, file: &str, src: &Path, dest: &Path) -> Result<u64> {
        self.check_overlap(file)?;

        if self.storage.is_dir(src) {
            self.storage.copy_tree(src, dest)
        } else {
            self.storage.copy_file(src, dest)
        }
    }

    fn missing(&self, file: &str, source: PathBuf) -> CopyOutcome {
        let err = BuildError::MissingSource {
            file: file.to_string(),
        };
        tracing::debug!(file, "{}", err.recovery_suggestion());
        eprintln!("{}", err);
        CopyOutcome::Missing {
            file: file.to_string(),
            source,
        }
    }
}

impl<S: Storage, C: ConfigProvider> Pipeline for AssetCopier<S, C> {
    fn output_dir(&self) -> PathBuf {
        // join keeps an absolute output_dir as is
        self.config.root().join(self.config.output_dir())
    }

    fn prepare(&self) -> Result<PathBuf> {
        let output_dir = self.output_dir();
        if self.storage.is_dir(&output_dir) {
            tracing::debug!("Output directory {} already exists", output_dir.display());
        } else {
            tracing::info!("Creating output directory {}", output_dir.display());
        }
        self.storage.create_dir_all(&output_dir)?;
        Ok(output_dir)
    }

    fn copy_all(&self) -> Result<Vec<CopyOutcome>> {
        let display_dir = self.config.output_dir().display().to_string();
        let mut outcomes = Vec::with_capacity(self.config.files().len());

        for file in self.config.files() {
            let source = self.source_path(file);
            let destination = self.destination_path(file);
            tracing::debug!(
                file = file.as_str(),
                "{} -> {}",
                source.display(),
                destination.display()
            );

            if !self.storage.exists(&source) {
                outcomes.push(self.missing(file, source));
                continue;
            }

            let bytes = self.copy_entry(file, &source, &destination)?;
            tracing::debug!(file = file.as_str(), bytes, "Copied");
            println!("{} copied to {}", file, display_dir);
            outcomes.push(CopyOutcome::Copied {
                file: file.clone(),
                source,
                destination,
                bytes,
            });
        }

        Ok(outcomes)
    }

    fn plan(&self) -> Result<Vec<CopyOutcome>> {
        let display_dir = self.config.output_dir().display().to_string();

        Ok(self
            .config
            .files()
            .iter()
            .map(|file| {
                let source = self.source_path(file);
                if !self.storage.exists(&source) {
                    return self.missing(file, source);
                }
                println!("{} would be copied to {}", file, display_dir);
                CopyOutcome::Planned {
                    file: file.clone(),
                    source,
                    destination: self.destination_path(file),
                }
            })
            .collect())
    }
}
