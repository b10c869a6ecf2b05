use clap::Parser;
use dist_copy::core::ReportSink;
use dist_copy::utils::{logger, validation::Validate};
use dist_copy::{
    AssetConfig, AssetCopier, BuildEngine, BuildError, CliConfig, JsonReportFile, LocalStorage,
    TomlConfig,
};

fn resolve_config(cli: &CliConfig) -> Result<AssetConfig, BuildError> {
    let config = match &cli.config {
        Some(path) => {
            tracing::info!("Loading configuration from {}", path.display());
            TomlConfig::from_file(path)?.into_asset_config()
        }
        None => cli.asset_config(),
    };
    config.validate()?;
    Ok(config)
}

fn fail(e: &BuildError) -> ! {
    tracing::error!("{}", e);
    eprintln!("❌ {}", e.user_friendly_message());
    eprintln!("💡 {}", e.recovery_suggestion());
    std::process::exit(1);
}

fn main() {
    let cli = CliConfig::parse();

    logger::init_cli_logger(cli.verbose, cli.log_format);
    tracing::debug!("CLI config: {:?}", cli);

    let config = resolve_config(&cli).unwrap_or_else(|e| fail(&e));
    tracing::info!(
        root = %config.root.display(),
        output_dir = %config.output_dir.display(),
        "Copying {} file(s)",
        config.files.len()
    );

    let copier = AssetCopier::new(LocalStorage::new(), config);
    let engine = BuildEngine::new(copier).with_dry_run(cli.dry_run);

    // Missing sources never change the exit status.
    let report = engine.run().unwrap_or_else(|e| fail(&e));

    if let Some(path) = &cli.report {
        if let Err(e) = JsonReportFile::new(path).write_report(&report) {
            fail(&e);
        }
    }
}
