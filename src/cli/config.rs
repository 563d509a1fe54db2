// FILE: src/cli/config.rs

use crate::error::{ConverterError, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::io::ErrorKind;

#[derive(Debug, Default, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConfigFile {
    pub class_name: Option<String>,
    pub layer: Option<String>,
    pub format: Option<String>,
    pub output: Option<String>,
}

pub fn load(config_path: &str) -> Result<ConfigFile> {
    let config_content = fs::read_to_string(config_path).map_err(|e| match e.kind() {
        ErrorKind::NotFound => ConverterError::FileNotFound {
            path: format!("config file {}", config_path),
        },
        _ => ConverterError::Io(e),
    })?;

    let config = if config_path.ends_with(".json") {
        serde_json::from_str(&config_content)
            .map_err(|e| ConverterError::config(config_path, format!("Invalid JSON config: {}", e)))?
    } else if config_path.ends_with(".toml") {
        toml::from_str(&config_content)
            .map_err(|e| ConverterError::config(config_path, format!("Invalid TOML config: {}", e)))?
    } else {
        return Err(ConverterError::invalid_format(
            "Config file must be .json or .toml format",
        ));
    };

    log::info!("Loaded configuration from {}", config_path);
    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn write_config(dir: &TempDir, name: &str, content: &str) -> String {
        let path = dir.path().join(name);
        fs::write(&path, content).unwrap();
        path.to_string_lossy().into_owned()
    }

    #[test]
    fn test_load_toml() {
        let dir = TempDir::new().unwrap();
        let path = write_config(&dir, "twconv.toml", "class_name = \"card\"\nformat = \"json\"\n");

        let config = load(&path).unwrap();
        assert_eq!(config.class_name.as_deref(), Some("card"));
        assert_eq!(config.format.as_deref(), Some("json"));
        assert_eq!(config.layer, None);
    }

    #[test]
    fn test_load_json() {
        let dir = TempDir::new().unwrap();
        let path = write_config(&dir, "twconv.json", r#"{ "layer": "utilities", "output": "out.txt" }"#);

        let config = load(&path).unwrap();
        assert_eq!(config.layer.as_deref(), Some("utilities"));
        assert_eq!(config.output.as_deref(), Some("out.txt"));
    }

    #[test]
    fn test_empty_toml_is_default() {
        let dir = TempDir::new().unwrap();
        let path = write_config(&dir, "empty.toml", "");

        assert_eq!(load(&path).unwrap(), ConfigFile::default());
    }

    #[test]
    fn test_invalid_config() {
        let dir = TempDir::new().unwrap();
        let path = write_config(&dir, "broken.toml", "class_name = ");
        assert!(matches!(load(&path), Err(ConverterError::Config { .. })));

        let path = write_config(&dir, "twconv.yaml", "class_name: card");
        assert!(matches!(load(&path), Err(ConverterError::InvalidFormat { .. })));
    }

    #[test]
    fn test_missing_config() {
        assert!(matches!(
            load("/no/such/twconv.toml"),
            Err(ConverterError::FileNotFound { .. })
        ));
    }
}
