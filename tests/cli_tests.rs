#[cfg(test)]
mod tests {
    use clap::Parser;
    use std::ffi::OsString;
    use std::fs;
    use std::path::Path;
    use tempfile::tempdir;
    use tokcompare::cli::Cli;
    use tokcompare::models::{OutputFormat, Preset};
    use tokcompare::{resolve_config, run};

    const TEN_TOKENS: &str = "hello world hello world hello world hello world hello world";

    fn write(root: &Path, relative: &str, content: &str) {
        let path = root.join(relative);
        fs::create_dir_all(path.parent().unwrap()).unwrap();
        fs::write(path, content).unwrap();
    }

    #[test]
    fn test_defaults() {
        let cli = Cli::parse_from(["tokcompare"]);
        assert_eq!(cli.root, Path::new("."));
        assert_eq!(cli.preset, Preset::Default);
        assert_eq!(cli.format, OutputFormat::Markdown);

        let config = resolve_config(&cli).unwrap();
        assert_eq!(config, Preset::Default.config());
    }

    #[test]
    fn test_overrides() {
        let cli = Cli::parse_from([
            "tokcompare",
            "--preset",
            "comparison",
            "--baseline",
            "Rust",
            "--exclude-dir",
            "node_modules",
        ]);
        let config = resolve_config(&cli).unwrap();

        assert_eq!(config.baseline, "Rust");
        assert!(config.thesis);
        assert!(config.excluded_dirs.contains("node_modules"));

        let cli = Cli::parse_from(["tokcompare", "--no-exclude", "--thesis"]);
        let config = resolve_config(&cli).unwrap();
        assert!(config.excluded_dirs.is_empty());
        assert!(config.thesis);
    }

    #[test]
    fn test_unknown_baseline_fails() {
        let cli = Cli::parse_from(["tokcompare", "--baseline", "Cobol"]);
        assert!(resolve_config(&cli).is_err());
    }

    #[test]
    fn test_run_writes_report() {
        let dir = tempdir().unwrap();
        write(dir.path(), "python/todo_cli/main.py", "Hello, world!");
        write(dir.path(), "rust/todo_cli/main.rs", TEN_TOKENS);
        write(dir.path(), "python/rest_api/app.py", "Hello, world!");
        write(dir.path(), "rust/rest_api/src/lib.rs", TEN_TOKENS);
        let output = dir.path().join("report.md");

        let args: Vec<OsString> = vec![
            "tokcompare".into(),
            dir.path().into(),
            "--preset".into(),
            "comparison".into(),
            "--no-progress".into(),
            "--output".into(),
            output.as_path().into(),
        ];
        let cli = Cli::parse_from(args);
        run(&cli).unwrap();

        let report = fs::read_to_string(&output).unwrap();
        assert!(report.contains("Rust/Py"));
        assert!(report.contains("Total: Python 8 | Rust 20 | Rust 2.5x"));
        assert!(report.contains("--- rest_api (rust) ---\n  src/lib.rs: 10 tokens"));
    }

    #[test]
    fn test_thesis_failure_after_report() {
        let dir = tempdir().unwrap();
        write(dir.path(), "python/todo_cli/main.py", TEN_TOKENS);
        write(dir.path(), "rust/todo_cli/main.rs", "Hello, world!");
        let config = dir.path().join("bench.json");
        fs::write(
            &config,
            r#"{
                "benchmarks": ["todo_cli"],
                "languages": [
                    {"name": "Python", "dir": "python", "extensions": ["py"]},
                    {"name": "Rust", "dir": "rust", "extensions": ["rs"]}
                ],
                "baseline": "Python",
                "thesis": true
            }"#,
        )
        .unwrap();
        let output = dir.path().join("report.json");

        let args: Vec<OsString> = vec![
            "tokcompare".into(),
            dir.path().into(),
            "--config".into(),
            config.as_path().into(),
            "--format".into(),
            "json".into(),
            "--no-progress".into(),
            "--output".into(),
            output.as_path().into(),
        ];
        let cli = Cli::parse_from(args);
        let err = run(&cli).unwrap_err();
        assert!(format!("{err:#}").contains("does not exceed Python"));

        // The report was written before the check failed
        let value: serde_json::Value =
            serde_json::from_str(&fs::read_to_string(&output).unwrap()).unwrap();
        assert_eq!(value["totals"][0]["tokens"], 10);
        assert_eq!(value["ratios"][0]["value"], 0.4);
    }
}
