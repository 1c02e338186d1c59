use super::*;
use tempfile::TempDir;

mod load {
    use super::*;

    #[test]
    fn test_load_missing_file_returns_default() {
        let temp = TempDir::new().unwrap();
        let path = TypeaheadConfig::path(temp.path());

        let config = TypeaheadConfig::load(&path).unwrap();

        assert_eq!(config, TypeaheadConfig::default());
    }

    #[test]
    fn test_load_partial_file_fills_defaults() {
        let temp = TempDir::new().unwrap();
        let path = TypeaheadConfig::path(temp.path());
        std::fs::write(&path, "debounce_ms = 120\nrequest_timeout_ms = 5000\n").unwrap();

        let config = TypeaheadConfig::load(&path).unwrap();

        assert_eq!(config.debounce(), Duration::from_millis(120));
        assert_eq!(config.request_timeout(), Some(Duration::from_secs(5)));
        assert_eq!(config.min_query_len, 1);
        assert_eq!(config.max_results, 50);
    }

    #[test]
    fn test_load_rejects_malformed_toml() {
        let temp = TempDir::new().unwrap();
        let path = TypeaheadConfig::path(temp.path());
        std::fs::write(&path, "debounce_ms = \"soon\"").unwrap();

        let err = TypeaheadConfig::load(&path).unwrap_err();

        assert!(matches!(err, ConfigError::Parse(_)));
    }
}

mod save {
    use super::*;

    #[test]
    fn test_save_then_load_preserves_values() {
        let temp = TempDir::new().unwrap();
        let path = TypeaheadConfig::path(temp.path());
        let config = TypeaheadConfig {
            debounce_ms: 80,
            min_query_len: 2,
            max_results: 10,
            request_timeout_ms: Some(2500),
        };

        config.save(&path).unwrap();
        let loaded = TypeaheadConfig::load(&path).unwrap();

        assert_eq!(loaded, config);
    }

    #[test]
    fn test_save_omits_unset_timeout() {
        let temp = TempDir::new().unwrap();
        let path = TypeaheadConfig::path(temp.path());

        TypeaheadConfig::default().save(&path).unwrap();
        let content = std::fs::read_to_string(&path).unwrap();

        assert!(!content.contains("request_timeout_ms"));
    }
}

mod validate {
    use super::*;

    #[test]
    fn test_default_is_valid() {
        assert!(TypeaheadConfig::default().validate().is_empty());
    }

    #[test]
    fn test_zero_values_are_reported() {
        let config = TypeaheadConfig {
            debounce_ms: 0,
            min_query_len: 0,
            max_results: 0,
            request_timeout_ms: Some(0),
        };

        let errors = config.validate();

        assert_eq!(errors.len(), 3);
    }

    #[test]
    fn test_with_defaults_for_invalid_repairs_values() {
        let config = TypeaheadConfig {
            debounce_ms: 0,
            min_query_len: 0,
            max_results: 0,
            request_timeout_ms: Some(0),
        };

        let repaired = config.with_defaults_for_invalid();

        assert!(repaired.validate().is_empty());
        assert_eq!(repaired.debounce_ms, 0);
        assert_eq!(repaired.min_query_len, 1);
        assert_eq!(repaired.max_results, 50);
        assert_eq!(repaired.request_timeout_ms, None);
    }
}
