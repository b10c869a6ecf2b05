pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::CliConfig;

pub use config::cli::{JsonReportFile, LocalStorage};
pub use config::{toml_config::TomlConfig, AssetConfig};
pub use core::{copier::AssetCopier, engine::BuildEngine};
pub use domain::model::{CopyOutcome, CopyReport};
pub use utils::error::{BuildError, Result};
