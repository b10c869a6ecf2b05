pub mod copier;
pub mod engine;

pub use crate::domain::model::{CopyOutcome, CopyReport};
pub use crate::domain::ports::{ConfigProvider, Pipeline, ReportSink, Storage};
pub use crate::utils::error::Result;
