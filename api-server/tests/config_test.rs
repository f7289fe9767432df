use looker_export_api_server::config::{ServerConfig, ENV_PREFIX};
use std::path::PathBuf;

fn env_from(pairs: &[(&str, &str)]) -> config::Environment {
    let vars: config::Map<String, String> = pairs
        .iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect();
    config::Environment::with_prefix(ENV_PREFIX)
        .try_parsing(true)
        .source(Some(vars))
}

#[test]
fn test_file_values_are_loaded() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("looker-export.toml");
    std::fs::write(
        &path,
        r#"
backend_url = "https://exports.internal"
log_dir = "/var/log/looker-export"
body_limit_bytes = 2048
"#,
    )
    .unwrap();

    let cfg = ServerConfig::from_sources(Some(path.as_path()), env_from(&[])).unwrap();

    assert_eq!(cfg.backend_url, "https://exports.internal");
    assert_eq!(cfg.log_dir, Some(PathBuf::from("/var/log/looker-export")));
    assert_eq!(cfg.body_limit_bytes, 2048);
    assert_eq!(cfg.bind_addr, "127.0.0.1:8080");
}

#[test]
fn test_environment_wins_over_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("looker-export.toml");
    std::fs::write(&path, "backend_url = \"https://from-file\"\n").unwrap();

    let cfg = ServerConfig::from_sources(
        Some(path.as_path()),
        env_from(&[("LOOKER_EXPORT_BACKEND_URL", "https://from-env")]),
    )
    .unwrap();

    assert_eq!(cfg.backend_url, "https://from-env");
}

#[test]
fn test_missing_file_is_an_error() {
    let path = PathBuf::from("/nonexistent/looker-export.toml");
    assert!(ServerConfig::from_sources(Some(path.as_path()), env_from(&[])).is_err());
}
