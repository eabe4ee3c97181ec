//! Integration tests for CLI functionality

#[cfg(feature = "cli")]
mod cli_integration_tests {
    use std::fs;
    use tempfile::TempDir;

    use liboverlap::automaton::SeparatorPolicy;
    use liboverlap::cli::args::InputArgs;
    use liboverlap::cli::commands::resolve_config;
    use liboverlap::cli::paths::{load_config, load_config_file};
    use liboverlap::cli::{parse_input, read_input};
    use liboverlap::config::OverlapConfig;
    use liboverlap::overlap::ExpectedOverlap;

    #[test]
    fn test_read_input_file() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("input.txt");
        fs::write(&path, "3\nabc\nbcd\ncde\n").unwrap();

        let strings = read_input(Some(path.as_path())).unwrap();
        assert_eq!(strings.len(), 3);

        let report = ExpectedOverlap::default().compute(&strings).unwrap();
        assert_eq!(report.expected, 666_666_673);
    }

    #[test]
    fn test_read_missing_input() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("missing.txt");
        let err = read_input(Some(path.as_path())).unwrap_err();
        assert!(err.to_string().contains("missing.txt"));
    }

    #[test]
    fn test_parse_input_rejects_trailing_tokens() {
        let err = parse_input(b"2\nab\nba\nextra\n").unwrap_err();
        assert!(err.to_string().contains("Unexpected"));
    }

    #[test]
    fn test_parse_input_rejects_short_input() {
        let err = parse_input(b"4\nab\nba\n").unwrap_err();
        assert!(err.to_string().contains("Expected 4 strings, found 2"));
    }

    #[test]
    fn test_load_config_file() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("config.json");
        fs::write(
            &path,
            r#"{ "modulus": 998244353, "separators": "Omit", "validate_automaton": true }"#,
        )
        .unwrap();

        let config = load_config_file(&path).unwrap();
        assert_eq!(config.modulus, 998_244_353);
        assert_eq!(config.separators, SeparatorPolicy::Omit);
        assert!(config.validate_automaton);
        assert_eq!(config.max_strings, OverlapConfig::default().max_strings);

        let explicit = load_config(Some(path.as_path())).unwrap();
        assert_eq!(explicit, config);
    }

    #[test]
    fn test_load_config_rejects_bad_files() {
        let temp_dir = TempDir::new().unwrap();

        let toml = temp_dir.path().join("config.toml");
        fs::write(&toml, "modulus = 7").unwrap();
        assert!(load_config_file(&toml).is_err());

        let broken = temp_dir.path().join("broken.json");
        fs::write(&broken, "{ modulus: ").unwrap();
        let err = load_config_file(&broken).unwrap_err();
        assert!(err.to_string().contains("Failed to parse config"));
    }

    #[test]
    fn test_cli_flags_override_file() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("config.json");
        fs::write(&path, r#"{ "modulus": 998244353, "max_total_length": 8 }"#).unwrap();
        let base = load_config_file(&path).unwrap();

        let args = InputArgs {
            modulus: Some(1_000_000_007),
            separators: Some(SeparatorPolicy::Omit),
            ..InputArgs::default()
        };
        let config = resolve_config(&args, base).unwrap();
        assert_eq!(config.modulus, 1_000_000_007);
        assert_eq!(config.max_total_length, 8);
        assert_eq!(config.separators, SeparatorPolicy::Omit);
    }

    #[test]
    fn test_file_limits_apply_to_input() {
        let temp_dir = TempDir::new().unwrap();
        let config_path = temp_dir.path().join("config.json");
        fs::write(&config_path, r#"{ "max_total_length": 3 }"#).unwrap();
        let input_path = temp_dir.path().join("input.txt");
        fs::write(&input_path, "2 ab ba").unwrap();

        let base = load_config(Some(config_path.as_path())).unwrap();
        let config = resolve_config(&InputArgs::default(), base).unwrap();
        let strings = read_input(Some(input_path.as_path())).unwrap();
        assert!(ExpectedOverlap::new(config).unwrap().compute(&strings).is_err());
    }
}
