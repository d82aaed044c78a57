use crate::error::{Result, ScoreError};
use crate::types::config::ScoreConfig;
use std::path::{Path, PathBuf};
use toml::map::Map;
use toml::Value;

pub const DEFAULT_CONFIG_FILE: &str = "resumescore.toml";
pub const DEFAULT_LOCAL_FILE: &str = ".resumescore/local.toml";
pub const DEFAULT_GLOBAL_CONFIG_FILE: &str = ".config/resumescore/config.toml";

pub fn load_config(root: &Path) -> Result<Option<ScoreConfig>> {
    let global = std::env::var_os("HOME")
        .map(PathBuf::from)
        .map(|home| home.join(DEFAULT_GLOBAL_CONFIG_FILE));
    load_config_with_global(root, global.as_deref())
}

/// An explicit file replaces discovery entirely.
pub fn load_config_file(path: &Path) -> Result<ScoreConfig> {
    if !path.exists() {
        return Err(ScoreError::ConfigNotFound(path.display().to_string()));
    }
    let value = read_toml_value(path)?;
    value
        .try_into()
        .map_err(|e: toml::de::Error| ScoreError::ConfigParse(format!("{}: {}", path.display(), e)))
}

pub(crate) fn load_config_with_global(
    root: &Path,
    global_path: Option<&Path>,
) -> Result<Option<ScoreConfig>> {
    let mut merged = Value::Table(Map::new());
    let mut found = false;
    if let Some(path) = global_path {
        found |= merge_file_if_exists(&mut merged, path)?;
    }
    found |= merge_file_if_exists(&mut merged, &root.join(DEFAULT_CONFIG_FILE))?;
    found |= merge_file_if_exists(&mut merged, &root.join(DEFAULT_LOCAL_FILE))?;

    if !found {
        return Ok(None);
    }

    let cfg: ScoreConfig = merged
        .try_into()
        .map_err(|e: toml::de::Error| ScoreError::ConfigParse(e.to_string()))?;
    Ok(Some(cfg))
}

fn merge_file_if_exists(merged: &mut Value, path: &Path) -> Result<bool> {
    if !path.exists() {
        return Ok(false);
    }
    tracing::debug!(path = %path.display(), "merging config layer");
    let value = read_toml_value(path)?;
    merge_toml(merged, value);
    Ok(true)
}

fn read_toml_value(path: &Path) -> Result<Value> {
    let content = std::fs::read_to_string(path)?;
    toml::from_str(&content)
        .map_err(|e| ScoreError::ConfigParse(format!("{}: {}", path.display(), e)))
}

fn merge_toml(base: &mut Value, overlay: Value) {
    match (base, overlay) {
        (Value::Table(base_table), Value::Table(overlay_table)) => {
            for (key, value) in overlay_table {
                match base_table.get_mut(&key) {
                    Some(existing) => merge_toml(existing, value),
                    None => {
                        base_table.insert(key, value);
                    }
                }
            }
        }
        (slot, value) => {
            *slot = value;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn load_config_returns_none_when_no_layer_exists() {
        let dir = TempDir::new().expect("temp dir should be created");
        let cfg = load_config_with_global(dir.path(), None).expect("load should not fail");
        assert!(cfg.is_none());
    }

    #[test]
    fn load_config_merges_global_repo_and_local_in_order() {
        let root = TempDir::new().expect("root temp dir should be created");
        let global_root = TempDir::new().expect("global temp dir should be created");
        let global_path = global_root.path().join("config.toml");

        fs::write(
            &global_path,
            r#"
[scoring]
resume_score_cap = 89

[enrichment]
timeout_secs = 5
"#,
        )
        .expect("global config should write");

        fs::write(
            root.path().join(DEFAULT_CONFIG_FILE),
            r#"
[enrichment]
timeout_secs = 7
github_token_env = "GH_TOKEN"

[roles]
"qa engineer" = ["selenium"]
"#,
        )
        .expect("repo config should write");

        fs::create_dir_all(root.path().join(".resumescore")).expect("local dir should create");
        fs::write(
            root.path().join(DEFAULT_LOCAL_FILE),
            r#"
[scoring]
resume_score_cap = 95
"#,
        )
        .expect("local override should write");

        let cfg = load_config_with_global(root.path(), Some(&global_path))
            .expect("load should succeed")
            .expect("merged config should exist");

        assert_eq!(cfg.resume_score_cap(), 95);
        let settings = cfg.enrichment_settings();
        assert_eq!(settings.timeout.as_secs(), 7);
        assert_eq!(settings.github_token_env, "GH_TOKEN");
        assert!(cfg
            .roles
            .as_ref()
            .is_some_and(|roles| roles.contains_key("qa engineer")));
    }

    #[test]
    fn global_layer_alone_is_loaded() {
        let root = TempDir::new().expect("root temp dir should be created");
        let global_root = TempDir::new().expect("global temp dir should be created");
        let global_path = global_root.path().join("config.toml");
        fs::write(&global_path, "[scoring]\nresume_score_cap = 80\n")
            .expect("global config should write");

        let cfg = load_config_with_global(root.path(), Some(&global_path))
            .expect("load should succeed")
            .expect("global config should be used");
        assert_eq!(cfg.resume_score_cap(), 80);
    }

    #[test]
    fn malformed_layer_reports_path() {
        let root = TempDir::new().expect("root temp dir should be created");
        fs::write(root.path().join(DEFAULT_CONFIG_FILE), "[scoring\n")
            .expect("broken config should write");
        let err = load_config_with_global(root.path(), None).expect_err("parse should fail");
        assert!(matches!(err, ScoreError::ConfigParse(_)));
        assert!(err.to_string().contains(DEFAULT_CONFIG_FILE));
    }

    #[test]
    fn explicit_config_with_wrong_types_is_a_parse_error() {
        let root = TempDir::new().expect("root temp dir should be created");
        let path = root.path().join("custom.toml");
        fs::write(&path, "[scoring]\nresume_score_cap = \"high\"\n")
            .expect("typed config should write");
        let err = load_config_file(&path).expect_err("wrong type should fail");
        assert!(matches!(err, ScoreError::ConfigParse(_)));
        assert!(err.to_string().contains("custom.toml"));
    }

    #[test]
    fn explicit_config_file_must_exist() {
        let root = TempDir::new().expect("root temp dir should be created");
        let err = load_config_file(&root.path().join("missing.toml"))
            .expect_err("missing file should fail");
        assert!(matches!(err, ScoreError::ConfigNotFound(_)));
    }
}
