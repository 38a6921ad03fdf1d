//! JSON file store for the VNet configuration.

use crate::error::StoreError;
use crate::models::Configuration;
use std::io::ErrorKind;

/// Read the configuration from `path`, or return the default if the file does
/// not exist.
///
/// # Returns
/// * `Ok(Configuration)` - The stored or default configuration
/// * `Err` - If the file exists but cannot be read or parsed
pub fn load_config(path: &str) -> Result<Configuration, StoreError> {
    let json = match std::fs::read_to_string(path) {
        Ok(json) => json,
        Err(e) if e.kind() == ErrorKind::NotFound => {
            log::info!("Config file not found: {path}, using default configuration");
            return Ok(Configuration::default());
        }
        Err(source) => {
            return Err(StoreError::Io {
                path: path.to_string(),
                source,
            })
        }
    };

    log::info!("Reading config file: {path}");
    let mut deserializer = serde_json::Deserializer::from_str(&json);
    let config: Configuration =
        serde_path_to_error::deserialize(&mut deserializer).map_err(|e| {
            log::error!("Config file {path} is not valid JSON configuration");
            StoreError::Parse {
                path: path.to_string(),
                json_path: e.path().to_string(),
                message: e.inner().to_string(),
            }
        })?;

    log::debug!("Loaded {} subnets from {path}", config.subnets.len());
    Ok(config)
}

/// Write the configuration to `path`, replacing any previous content.
pub fn save_config(path: &str, config: &Configuration) -> Result<(), StoreError> {
    let json = serde_json::to_string_pretty(config)?;
    std::fs::write(path, json).map_err(|source| StoreError::Io {
        path: path.to_string(),
        source,
    })?;
    log::info!("Saved config with {} subnets to {path}", config.subnets.len());
    Ok(())
}

/// Delete the stored configuration and return the default one.
///
/// A missing file is not an error. The default is not written back; the
/// next save persists it.
pub fn reset_config(path: &str) -> Result<Configuration, StoreError> {
    match std::fs::remove_file(path) {
        Ok(()) => log::warn!("Removed config file: {path}"),
        Err(e) if e.kind() == ErrorKind::NotFound => {
            log::debug!("No config file to remove at {path}")
        }
        Err(source) => {
            return Err(StoreError::Io {
                path: path.to_string(),
                source,
            })
        }
    }
    Ok(Configuration::default())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::SubnetEntry;

    fn temp_path(dir: &tempfile::TempDir) -> String {
        dir.path().join("vnet_config.json").to_string_lossy().to_string()
    }

    #[test]
    fn test_load_missing_returns_default() {
        let dir = tempfile::tempdir().unwrap();
        let config = load_config(&temp_path(&dir)).unwrap();
        assert_eq!(config, Configuration::default());
    }

    #[test]
    fn test_save_then_load() {
        let dir = tempfile::tempdir().unwrap();
        let path = temp_path(&dir);
        let config = Configuration::new(
            "172.16.0.0/12",
            vec![
                SubnetEntry::new("web", "172.16.0.0/24"),
                SubnetEntry::new("broken", "not-a-cidr"),
            ],
        );
        save_config(&path, &config).unwrap();
        assert_eq!(load_config(&path).unwrap(), config);
    }

    #[test]
    fn test_load_reads_camel_case_blob() {
        let dir = tempfile::tempdir().unwrap();
        let path = temp_path(&dir);
        std::fs::write(
            &path,
            r#"{"vnetCidr":"10.1.0.0/16","subnets":[{"name":"a","cidr":"10.1.0.0/24"}]}"#,
        )
        .unwrap();
        let config = load_config(&path).unwrap();
        assert_eq!(config.vnet_cidr, "10.1.0.0/16");
        assert_eq!(config.subnets, vec![SubnetEntry::new("a", "10.1.0.0/24")]);
    }

    #[test]
    fn test_load_reports_json_path() {
        let dir = tempfile::tempdir().unwrap();
        let path = temp_path(&dir);
        std::fs::write(&path, r#"{"vnetCidr":"10.1.0.0/16","subnets":[{"name":7}]}"#).unwrap();
        match load_config(&path) {
            Err(StoreError::Parse { json_path, .. }) => assert_eq!(json_path, "subnets[0].name"),
            other => panic!("expected parse error, got {other:?}"),
        }
    }

    #[test]
    fn test_reset_config() {
        let dir = tempfile::tempdir().unwrap();
        let path = temp_path(&dir);
        save_config(&path, &Configuration::new("10.0.0.0/16", vec![])).unwrap();

        let config = reset_config(&path).unwrap();
        assert_eq!(config, Configuration::default());
        assert!(!std::path::Path::new(&path).exists());
        // second reset with no file is fine
        assert!(reset_config(&path).is_ok());
    }
}
