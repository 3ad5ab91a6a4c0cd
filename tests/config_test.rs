// tests/config_test.rs
use git_autotag::config::{load_config, Config};
use std::io::Write;
use tempfile::NamedTempFile;

#[test]
fn test_load_default_config() {
    let config = Config::default();
    assert_eq!(config.branches.integration, "main");
    assert_eq!(config.branches.release, "release");
    assert_eq!(config.branches.feature_prefix, "feature/");
    assert_eq!(config.branches.fix_prefix, "fix/");
    assert_eq!(config.remote, "origin");
    assert_eq!(config.manifest, "Cargo.toml");
}

#[test]
fn test_load_from_file() {
    let mut temp_file = NamedTempFile::new().unwrap();
    let toml_content = r#"
remote = "upstream"
manifest = "package/Cargo.toml"

[branches]
feature_prefix = "feat/"
integration = "develop"
"#;
    temp_file.write_all(toml_content.as_bytes()).unwrap();
    temp_file.flush().unwrap();

    let config = load_config(Some(temp_file.path().to_str().unwrap())).unwrap();
    assert_eq!(config.remote, "upstream");
    assert_eq!(config.manifest, "package/Cargo.toml");
    assert_eq!(config.branches.feature_prefix, "feat/");
    assert_eq!(config.branches.integration, "develop");
    // Unspecified fields keep their defaults
    assert_eq!(config.branches.fix_prefix, "fix/");
    assert_eq!(config.branches.release, "release");
}

#[test]
fn test_load_invalid_file_fails() {
    let mut temp_file = NamedTempFile::new().unwrap();
    temp_file.write_all(b"not [ valid toml").unwrap();
    temp_file.flush().unwrap();

    assert!(load_config(Some(temp_file.path().to_str().unwrap())).is_err());
}

#[test]
fn test_load_missing_explicit_path_fails() {
    assert!(load_config(Some("/nonexistent/autotag.toml")).is_err());
}

#[test]
fn test_taxonomy_mirrors_branch_config() {
    let mut config = Config::default();
    config.branches.integration = "trunk".to_string();

    let taxonomy = config.taxonomy();
    assert_eq!(taxonomy.integration_branch, "trunk");
    assert_eq!(taxonomy.feature_prefix, "feature/");
}
