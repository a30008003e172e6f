use crate::error::{CogloadError, Result};
use crate::types::config::CogloadConfig;
use std::path::{Path, PathBuf};
use toml::map::Map;
use toml::Value;
use tracing::debug;

pub const DEFAULT_CONFIG_FILE: &str = "cogload.toml";
pub const DEFAULT_LOCAL_FILE: &str = ".cogload/local.toml";
pub const DEFAULT_GLOBAL_CONFIG_FILE: &str = ".config/cogload/config.toml";

pub fn load_config(root: &Path) -> Result<CogloadConfig> {
    let global = std::env::var_os("HOME")
        .map(PathBuf::from)
        .map(|home| home.join(DEFAULT_GLOBAL_CONFIG_FILE));
    load_config_with_global(root, global.as_deref())
}

/// Merge global, repo and local layers, later layers winning key by key.
/// Absent files are skipped, so no config at all yields the defaults.
pub(crate) fn load_config_with_global(
    root: &Path,
    global_path: Option<&Path>,
) -> Result<CogloadConfig> {
    let mut merged = Value::Table(Map::new());
    if let Some(path) = global_path {
        merge_file_if_exists(&mut merged, path)?;
    }
    merge_file_if_exists(&mut merged, &root.join(DEFAULT_CONFIG_FILE))?;
    merge_file_if_exists(&mut merged, &root.join(DEFAULT_LOCAL_FILE))?;

    let cfg: CogloadConfig = merged
        .try_into()
        .map_err(|e: toml::de::Error| CogloadError::ConfigParse(e.to_string()))?;
    cfg.validate()?;
    Ok(cfg)
}

fn merge_file_if_exists(merged: &mut Value, path: &Path) -> Result<()> {
    if !path.exists() {
        return Ok(());
    }
    let value = read_toml_value(path)?;
    merge_toml(merged, value);
    debug!(path = %path.display(), "merged config layer");
    Ok(())
}

fn read_toml_value(path: &Path) -> Result<Value> {
    let content = std::fs::read_to_string(path)?;
    toml::from_str(&content)
        .map_err(|e| CogloadError::ConfigParse(format!("{}: {}", path.display(), e)))
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
    use crate::types::config::SamplingDefaults;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn missing_files_resolve_to_defaults() {
        let dir = TempDir::new().expect("temp dir should be created");
        let cfg = load_config_with_global(dir.path(), None).expect("load should not fail");
        assert_eq!(cfg.sampling_defaults(), SamplingDefaults::default());
    }

    #[test]
    fn load_config_merges_global_repo_and_local_in_order() {
        let root = TempDir::new().expect("root temp dir should be created");
        let global_root = TempDir::new().expect("global temp dir should be created");
        let global_path = global_root.path().join("config.toml");

        fs::write(
            &global_path,
            r#"
[sampling]
sample_pct = 10
min_loc = 1000
identifier_count = 5
"#,
        )
        .expect("global config should write");

        fs::write(
            root.path().join(DEFAULT_CONFIG_FILE),
            r#"
[sampling]
sample_pct = 40
"#,
        )
        .expect("repo config should write");

        fs::create_dir_all(root.path().join(".cogload")).expect("local dir should create");
        fs::write(
            root.path().join(DEFAULT_LOCAL_FILE),
            r#"
[sampling]
identifier_count = 12
"#,
        )
        .expect("local override should write");

        let cfg = load_config_with_global(root.path(), Some(&global_path))
            .expect("load should succeed");
        let resolved = cfg.sampling_defaults();

        assert_eq!(resolved.sample_pct, 40);
        assert_eq!(resolved.min_loc, 1000);
        assert_eq!(resolved.identifier_count, 12);
    }

    #[test]
    fn malformed_repo_config_is_a_parse_error() {
        let root = TempDir::new().expect("root temp dir should be created");
        fs::write(root.path().join(DEFAULT_CONFIG_FILE), "[sampling\nsample_pct = ")
            .expect("repo config should write");

        let result = load_config_with_global(root.path(), None);
        assert!(matches!(result, Err(CogloadError::ConfigParse(_))));
    }

    #[test]
    fn wrongly_typed_setting_is_a_parse_error() {
        let root = TempDir::new().expect("root temp dir should be created");
        fs::write(
            root.path().join(DEFAULT_CONFIG_FILE),
            "[sampling]\nsample_pct = \"x\"\n",
        )
        .expect("repo config should write");

        let result = load_config_with_global(root.path(), None);
        assert!(matches!(result, Err(CogloadError::ConfigParse(_))));
    }

    #[test]
    fn out_of_range_sample_pct_is_rejected() {
        let root = TempDir::new().expect("root temp dir should be created");
        fs::write(
            root.path().join(DEFAULT_CONFIG_FILE),
            "[sampling]\nsample_pct = 101\n",
        )
        .expect("repo config should write");

        assert!(load_config_with_global(root.path(), None).is_err());
    }
}
