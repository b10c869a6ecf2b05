pub mod cli;
pub mod toml_config;

use crate::core::ConfigProvider;
use crate::utils::error::Result;
use crate::utils::validation::{self, Validate};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

pub const DEFAULT_FILES: [&str; 3] = ["index.html", "styles.css", "main.js"];
pub const DEFAULT_OUTPUT_DIR: &str = "dist";

pub fn default_files() -> Vec<String> {
    DEFAULT_FILES.iter().map(|f| f.to_string()).collect()
}

/// Fully resolved copier settings, whichever front end produced them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AssetConfig {
    pub root: PathBuf,
    pub output_dir: PathBuf,
    pub files: Vec<String>,
}

impl Default for AssetConfig {
    fn default() -> Self {
        Self {
            root: PathBuf::from("."),
            output_dir: PathBuf::from(DEFAULT_OUTPUT_DIR),
            files: default_files(),
        }
    }
}

impl AssetConfig {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self {
            root: root.into(),
            ..Self::default()
        }
    }

    pub fn with_output_dir(mut self, output_dir: impl Into<PathBuf>) -> Self {
        self.output_dir = output_dir.into();
        self
    }

    pub fn with_files<I, S>(mut self, files: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.files = files.into_iter().map(Into::into).collect();
        self
    }
}

impl ConfigProvider for AssetConfig {
    fn root(&self) -> &Path {
        &self.root
    }

    fn output_dir(&self) -> &Path {
        &self.output_dir
    }

    fn files(&self) -> &[String] {
        &self.files
    }
}

impl Validate for AssetConfig {
    fn validate(&self) -> Result<()> {
        validation::validate_existing_dir("root", &self.root)?;
        validation::validate_path("output_dir", &self.output_dir.to_string_lossy())?;
        validation::validate_file_list("files", &self.files)?;
        validation::validate_output_placement(&self.output_dir, &self.files)
    }
}

#[cfg(feature = "cli")]
pub use cli_args::CliConfig;

#[cfg(feature = "cli")]
mod cli_args {
    use super::{default_files, AssetConfig, DEFAULT_OUTPUT_DIR};
    use crate::utils::logger::LogFormat;
    use clap::Parser;
    use std::path::PathBuf;

    #[derive(Debug, Clone, Parser)]
    #[command(name = "dist-copy")]
    #[command(about = "Copy static site files into a dist directory")]
    pub struct CliConfig {
        /// Project root containing the files to copy
        #[arg(long, default_value = ".")]
        pub root: PathBuf,

        /// Output directory, relative to the project root
        #[arg(long, default_value = DEFAULT_OUTPUT_DIR)]
        pub output_dir: PathBuf,

        /// Ordered list of files to copy
        #[arg(long, value_delimiter = ',', default_values_t = default_files())]
        pub files: Vec<String>,

        /// TOML configuration file; replaces --root, --output-dir and --files
        #[arg(short, long)]
        pub config: Option<PathBuf>,

        /// Report what would be copied without touching the filesystem
        #[arg(long)]
        pub dry_run: bool,

        /// Write a JSON build report to this path
        #[arg(long)]
        pub report: Option<PathBuf>,

        #[arg(short, long, help = "Enable verbose output")]
        pub verbose: bool,

        #[arg(long, value_enum, default_value_t = LogFormat::Compact)]
        pub log_format: LogFormat,
    }

    impl CliConfig {
        pub fn asset_config(&self) -> AssetConfig {
            AssetConfig {
                root: self.root.clone(),
                output_dir: self.output_dir.clone(),
                files: self.files.clone(),
            }
        }
    }
}
