use dist_copy::core::ReportSink;
use dist_copy::{
    AssetConfig, AssetCopier, BuildEngine, CopyOutcome, JsonReportFile, LocalStorage, TomlConfig,
};
use std::fs;
use std::path::Path;
use tempfile::TempDir;

fn write_sources(root: &Path, files: &[(&str, &str)]) {
    for (name, content) in files {
        fs::write(root.join(name), content).unwrap();
    }
}

fn engine_for(config: AssetConfig) -> BuildEngine<AssetCopier<LocalStorage, AssetConfig>> {
    BuildEngine::new(AssetCopier::new(LocalStorage::new(), config))
}

#[test]
fn test_missing_main_js_is_reported_and_skipped() {
    let temp_dir = TempDir::new().unwrap();
    let root = temp_dir.path();
    write_sources(
        root,
        &[
            ("index.html", "<!doctype html><title>t</title>"),
            ("styles.css", "body { margin: 0; }"),
        ],
    );

    let report = engine_for(AssetConfig::new(root)).run().unwrap();

    let dist = root.join("dist");
    assert_eq!(
        fs::read(dist.join("index.html")).unwrap(),
        fs::read(root.join("index.html")).unwrap()
    );
    assert_eq!(
        fs::read(dist.join("styles.css")).unwrap(),
        fs::read(root.join("styles.css")).unwrap()
    );
    assert!(!dist.join("main.js").exists());

    assert_eq!(report.copied_count(), 2);
    assert_eq!(report.missing_files(), vec!["main.js"]);
}

#[test]
fn test_all_files_copied_and_dist_created() {
    let temp_dir = TempDir::new().unwrap();
    let root = temp_dir.path();
    write_sources(
        root,
        &[
            ("index.html", "<html></html>"),
            ("styles.css", "h1 { color: red; }"),
            ("main.js", "console.log('hi');"),
        ],
    );
    assert!(!root.join("dist").exists());

    let report = engine_for(AssetConfig::new(root)).run().unwrap();

    assert!(root.join("dist").is_dir());
    assert_eq!(report.copied_count(), 3);
    assert_eq!(report.missing_count(), 0);
    for name in ["index.html", "styles.css", "main.js"] {
        assert_eq!(
            fs::read(root.join("dist").join(name)).unwrap(),
            fs::read(root.join(name)).unwrap()
        );
    }
}

#[test]
fn test_outcomes_follow_list_order() {
    let temp_dir = TempDir::new().unwrap();
    let root = temp_dir.path();
    write_sources(root, &[("main.js", "1"), ("index.html", "2")]);

    let config = AssetConfig::new(root).with_files(["main.js", "styles.css", "index.html"]);
    let report = engine_for(config).run().unwrap();

    let order: Vec<&str> = report.outcomes.iter().map(CopyOutcome::file).collect();
    assert_eq!(order, vec!["main.js", "styles.css", "index.html"]);
    assert!(report.outcomes[1].is_missing());
}

#[test]
fn test_existing_output_dir_is_left_in_place() {
    let temp_dir = TempDir::new().unwrap();
    let root = temp_dir.path();
    fs::create_dir_all(root.join("dist")).unwrap();
    fs::write(root.join("dist/robots.txt"), "User-agent: *").unwrap();
    write_sources(root, &[("index.html", "<html></html>")]);

    let result = engine_for(AssetConfig::new(root)).run();

    assert!(result.is_ok());
    assert_eq!(
        fs::read_to_string(root.join("dist/robots.txt")).unwrap(),
        "User-agent: *"
    );
}

#[test]
fn test_second_run_is_idempotent() {
    let temp_dir = TempDir::new().unwrap();
    let root = temp_dir.path();
    write_sources(
        root,
        &[("index.html", "<html></html>"), ("main.js", "let a = 1;")],
    );

    let engine = engine_for(AssetConfig::new(root));
    engine.run().unwrap();
    let snapshot = |name: &str| fs::read(root.join("dist").join(name)).ok();
    let first: Vec<_> = ["index.html", "styles.css", "main.js"]
        .iter()
        .map(|n| snapshot(*n))
        .collect();

    engine.run().unwrap();
    let second: Vec<_> = ["index.html", "styles.css", "main.js"]
        .iter()
        .map(|n| snapshot(*n))
        .collect();

    assert_eq!(first, second);
    let entries = fs::read_dir(root.join("dist")).unwrap().count();
    assert_eq!(entries, 2);
}

#[test]
fn test_changed_source_overwrites_destination() {
    let temp_dir = TempDir::new().unwrap();
    let root = temp_dir.path();
    write_sources(root, &[("main.js", "old")]);

    let engine = engine_for(AssetConfig::new(root));
    engine.run().unwrap();
    write_sources(root, &[("main.js", "new")]);
    engine.run().unwrap();

    assert_eq!(
        fs::read_to_string(root.join("dist/main.js")).unwrap(),
        "new"
    );
}

#[test]
fn test_dry_run_leaves_filesystem_untouched() {
    let temp_dir = TempDir::new().unwrap();
    let root = temp_dir.path();
    write_sources(root, &[("index.html", "<html></html>")]);

    let report = engine_for(AssetConfig::new(root))
        .with_dry_run(true)
        .run()
        .unwrap();

    assert!(report.dry_run);
    assert!(!root.join("dist").exists());
    assert_eq!(report.missing_count(), 2);
    assert_eq!(report.copied_count(), 0);
}

#[test]
fn test_custom_output_dir_and_nested_entries() {
    let temp_dir = TempDir::new().unwrap();
    let root = temp_dir.path();
    fs::create_dir_all(root.join("assets")).unwrap();
    write_sources(root, &[("assets/app.css", "a{}")]);

    let config = AssetConfig::new(root)
        .with_output_dir("build/public")
        .with_files(["assets/app.css"]);
    let report = engine_for(config).run().unwrap();

    assert_eq!(report.output_dir, root.join("build/public"));
    assert_eq!(
        fs::read_to_string(root.join("build/public/assets/app.css")).unwrap(),
        "a{}"
    );
}

#[test]
fn test_toml_config_drives_copy_and_report_is_written() {
    let temp_dir = TempDir::new().unwrap();
    let site = temp_dir.path().join("site");
    fs::create_dir_all(&site).unwrap();
    write_sources(&site, &[("index.html", "<html></html>")]);

    let config_path = temp_dir.path().join("assets.toml");
    fs::write(
        &config_path,
        r#"
[project]
root = "site"
output_dir = "out"

[assets]
files = ["index.html", "404.html"]
"#,
    )
    .unwrap();

    let config = TomlConfig::from_file(&config_path)
        .unwrap()
        .into_asset_config();
    let report = engine_for(config).run().unwrap();
    assert!(site.join("out/index.html").exists());

    let report_path = temp_dir.path().join("reports/build.json");
    JsonReportFile::new(&report_path)
        .write_report(&report)
        .unwrap();

    let json: serde_json::Value =
        serde_json::from_str(&fs::read_to_string(&report_path).unwrap()).unwrap();
    let outcomes = json["outcomes"].as_array().unwrap();
    assert_eq!(outcomes.len(), 2);
    assert_eq!(outcomes[0]["status"], "copied");
    assert_eq!(outcomes[0]["bytes"], 13);
    assert_eq!(outcomes[1]["status"], "missing");
    assert_eq!(outcomes[1]["file"], "404.html");
}
