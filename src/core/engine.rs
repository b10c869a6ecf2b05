use crate::core::Pipeline;
use crate::domain::model::CopyReport;
use crate::utils::error::Result;
use chrono::Utc;
use std::time::Instant;

pub struct BuildEngine<P: Pipeline> {
    pipeline: P,
    dry_run: bool,
}

impl<P: Pipeline> BuildEngine<P> {
    pub fn new(pipeline: P) -> Self {
        Self {
            pipeline,
            dry_run: false,
        }
    }

    pub fn with_dry_run(mut self, dry_run: bool) -> Self {
        self.dry_run = dry_run;
        self
    }

    /// Runs one full pass. Missing sources end up in the report; only
    /// filesystem failures are returned as errors.
    pub fn run(&self) -> Result<CopyReport> {
        let started_at = Utc::now();
        let timer = Instant::now();

        let (output_dir, outcomes) = if self.dry_run {
            tracing::info!("Dry run: nothing will be written");
            (self.pipeline.output_dir(), self.pipeline.plan()?)
        } else {
            let output_dir = self.pipeline.prepare()?;
            (output_dir, self.pipeline.copy_all()?)
        };

        let report = CopyReport {
            output_dir,
            dry_run: self.dry_run,
            started_at,
            finished_at: Utc::now(),
            outcomes,
        };

        tracing::info!(
            copied = report.copied_count(),
            missing = report.missing_count(),
            bytes = report.bytes_copied(),
            "Finished in {:.2?}",
            timer.elapsed()
        );
        if report.missing_count() > 0 {
            tracing::debug!("Missing files: {}", report.missing_files().join(", "));
        }

        Ok(report)
    }
}
