#[cfg(test)]
mod tests {
    use std::path::Path;
    use tokcompare::models::{HarnessConfig, Language, Preset, DEFAULT_EXCLUDED_DIRS};
    use tokcompare::HarnessError;

    #[test]
    fn test_default_preset() {
        let config = Preset::Default.config();

        assert_eq!(config.benchmarks, vec!["todo_cli", "rest_api"]);
        let names: Vec<&str> = config.languages.iter().map(|l| l.name.as_str()).collect();
        assert_eq!(names, vec!["Python", "Rust", "Elixir"]);
        assert_eq!(config.baseline, "Python");
        assert_eq!(config.excluded_dirs.len(), DEFAULT_EXCLUDED_DIRS.len());
        assert!(config.excluded_dirs.contains("__pycache__"));
        assert!(!config.thesis);
        assert!(config.validate().is_ok());

        let python = config.baseline_language().unwrap();
        assert!(python.extensions.contains("py"));
        assert!(python.extensions.contains("toml"));
    }

    #[test]
    fn test_comparison_preset() {
        let config = Preset::Comparison.config();

        assert_eq!(config.languages.len(), 2);
        assert!(config.excluded_dirs.is_empty());
        assert!(config.thesis);
        let compared: Vec<&str> = config.compared_languages().map(|l| l.name.as_str()).collect();
        assert_eq!(compared, vec!["Rust"]);
    }

    #[test]
    fn test_language_extensions_are_normalized() {
        let language = Language::new("Elixir", "elixir", [".ex", "exs", "..heex"]);
        let exts: Vec<&str> = language.extensions.iter().map(String::as_str).collect();
        assert_eq!(exts, vec!["ex", "exs", "heex"]);
        assert_eq!(
            language.benchmark_dir(Path::new("/bench"), "todo_cli"),
            Path::new("/bench/elixir/todo_cli")
        );
    }

    #[test]
    fn test_config_from_json() {
        let json = r#"{
            "benchmarks": ["todo_cli", "rest_api"],
            "languages": [
                {"name": "Python", "dir": "python", "extensions": [".py", ".toml"]},
                {"name": "Rust", "dir": "rust", "extensions": [".rs", ".toml"]}
            ],
            "baseline": "Python",
            "thesis": true
        }"#;

        let config = HarnessConfig::from_json_str(json, Path::new("bench.json")).unwrap();
        assert_eq!(config, Preset::Comparison.config());
    }

    #[test]
    fn test_malformed_json_is_reported() {
        let err = HarnessConfig::from_json_str("{\"benchmarks\": [", Path::new("bad.json"))
            .unwrap_err();
        match err {
            HarnessError::ConfigParse { path, .. } => assert_eq!(path, Path::new("bad.json")),
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn test_missing_config_file() {
        let err = HarnessConfig::from_file(Path::new("/nonexistent/tokcompare.json")).unwrap_err();
        assert!(matches!(err, HarnessError::ConfigRead { .. }));
    }

    #[test]
    fn test_validation() {
        let mut config = HarnessConfig::default();
        config.baseline = "Go".to_string();
        assert!(matches!(
            config.validate(),
            Err(HarnessError::UnknownBaseline(_))
        ));

        let mut config = HarnessConfig::default();
        config.benchmarks.clear();
        assert!(matches!(
            config.validate(),
            Err(HarnessError::InvalidConfig(_))
        ));

        let mut config = HarnessConfig::default();
        config
            .languages
            .push(Language::new("Rust", "rust2", ["rs"]));
        assert!(matches!(
            config.validate(),
            Err(HarnessError::InvalidConfig(_))
        ));

        let mut config = HarnessConfig::default();
        config.benchmarks.push("todo_cli".to_string());
        assert!(matches!(
            config.validate(),
            Err(HarnessError::InvalidConfig(_))
        ));
    }
}
