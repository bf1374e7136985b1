use super::load::{load_settings_from, resolve_settings};
use super::*;
use tempfile::tempdir;

#[test]
fn missing_file_yields_defaults() {
    let dir = tempdir().unwrap();
    let settings = load_settings_from(&dir.path().join(CONFIG_FILE_NAME)).unwrap();
    assert_eq!(settings, AppSettings::default());
    assert_eq!(settings.api_base_url, DEFAULT_API_BASE_URL);
    assert!(settings.check_health_on_startup);
}

#[test]
fn partial_file_fills_remaining_keys_with_defaults() {
    let dir = tempdir().unwrap();
    let path = dir.path().join(CONFIG_FILE_NAME);
    std::fs::write(&path, "check_health_on_startup = false\n").unwrap();
    let settings = load_settings_from(&path).unwrap();
    assert_eq!(settings.api_base_url, DEFAULT_API_BASE_URL);
    assert!(!settings.check_health_on_startup);
}

#[test]
fn malformed_file_is_reported_with_path() {
    let dir = tempdir().unwrap();
    let path = dir.path().join(CONFIG_FILE_NAME);
    std::fs::write(&path, "api_base_url = [").unwrap();
    let err = load_settings_from(&path).unwrap_err();
    assert!(matches!(err, ConfigError::ParseToml { .. }));
    assert!(err.to_string().contains(CONFIG_FILE_NAME));
}

#[test]
fn env_override_beats_file_and_file_beats_default() {
    let dir = tempdir().unwrap();
    let path = dir.path().join(CONFIG_FILE_NAME);
    std::fs::write(&path, "api_base_url = \"https://fwi.example.org/\"\n").unwrap();

    let from_file = resolve_settings(&path, None).unwrap();
    assert_eq!(from_file.api_base_url, "https://fwi.example.org");

    let from_env = resolve_settings(&path, Some("http://10.0.0.5:8080".to_string())).unwrap();
    assert_eq!(from_env.api_base_url, "http://10.0.0.5:8080");

    let blank_env = resolve_settings(&path, Some("  ".to_string())).unwrap();
    assert_eq!(blank_env.api_base_url, "https://fwi.example.org");
}

#[test]
fn rejects_unusable_base_urls() {
    for raw in ["localhost:5000", "ftp://example.org", "not a url", "http://x.org/?a=1"] {
        let err = normalize_base_url(raw).unwrap_err();
        assert!(
            matches!(err, ConfigError::InvalidApiUrl { .. }),
            "expected rejection for {raw}"
        );
    }
}

#[test]
fn keeps_path_prefix_of_base_url() {
    assert_eq!(
        normalize_base_url(" https://example.org/fwi/ ").unwrap(),
        "https://example.org/fwi"
    );
}

#[test]
fn save_then_load_preserves_settings() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("nested").join(CONFIG_FILE_NAME);
    let settings = AppSettings {
        api_base_url: "https://fwi.example.org".to_string(),
        check_health_on_startup: false,
    };
    save_to_path(&settings, &path).unwrap();
    assert_eq!(load_settings_from(&path).unwrap(), settings);

    let leftovers = std::fs::read_dir(path.parent().unwrap())
        .unwrap()
        .filter_map(|entry| entry.ok())
        .filter(|entry| entry.file_name().to_string_lossy().contains(".tmp-"))
        .count();
    assert_eq!(leftovers, 0);
}
