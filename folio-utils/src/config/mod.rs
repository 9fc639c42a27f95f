//! Configuration loading and merging.
//!
//! Folio settings come from three layers: built-in defaults, an optional
//! TOML/JSON file, and `FOLIO_*` environment variables. Later layers
//! override earlier ones.

use serde::{Deserialize, Serialize};
use std::path::Path;

/// Load a configuration value from a file (format detected by extension).
pub fn load_config<T>(path: &Path) -> crate::Result<T>
where
    T: for<'de> Deserialize<'de>,
{
    let extension = path
        .extension()
        .and_then(|ext| ext.to_str())
        .unwrap_or("")
        .to_lowercase();

    let content = std::fs::read_to_string(path)?;

    let result = match extension.as_str() {
        "toml" => {
            let toml_value: toml::Value = toml::from_str(&content)
                .map_err(|e| crate::UtilError::Config(format!("TOML parse error: {}", e)))?;
            T::deserialize(toml_value)
                .map_err(|e| crate::UtilError::Config(format!("TOML deserialization error: {}", e)))
        }
        "json" => serde_json::from_str(&content)
            .map_err(|e| crate::UtilError::Config(format!("JSON parse error: {}", e))),
        _ => {
            return Err(crate::UtilError::Config(format!(
                "Unsupported config format: {}",
                extension
            )));
        }
    }?;

    Ok(result)
}

/// Load settings through the layered `config` stack: the serialized
/// defaults of `T`, then the file at `path` (if given), then `FOLIO_*`
/// environment variables.
pub fn load_layered<T>(path: Option<&Path>) -> crate::Result<T>
where
    T: Default + Serialize + for<'de> Deserialize<'de>,
{
    let defaults = serde_json::to_string(&T::default())
        .map_err(|e| crate::UtilError::Serialization(format!("default serialization: {}", e)))?;

    let mut builder = config::Config::builder().add_source(config::File::from_str(
        &defaults,
        config::FileFormat::Json,
    ));

    if let Some(path) = path {
        builder = builder.add_source(config::File::from(path.to_path_buf()));
    }

    builder = builder.add_source(config::Environment::with_prefix("FOLIO").separator("__"));

    let settings = builder
        .build()
        .map_err(|e| crate::UtilError::Config(format!("config build error: {}", e)))?;

    settings
        .try_deserialize()
        .map_err(|e| crate::UtilError::Config(format!("config deserialization error: {}", e)))
}

/// Merge two configurations; fields of `override_config` win.
pub fn merge_configs<T>(base: &mut T, override_config: T) -> crate::Result<()>
where
    T: Serialize + for<'de> Deserialize<'de>,
{
    let mut base_value = serde_json::to_value(&*base)
        .map_err(|e| crate::UtilError::Serialization(format!("Base serialization error: {}", e)))?;

    let override_value = serde_json::to_value(override_config).map_err(|e| {
        crate::UtilError::Serialization(format!("Override serialization error: {}", e))
    })?;

    merge_json_values(&mut base_value, override_value);

    *base = serde_json::from_value(base_value).map_err(|e| {
        crate::UtilError::Serialization(format!("Result deserialization error: {}", e))
    })?;

    Ok(())
}

/// Merge two JSON values (second overrides first)
fn merge_json_values(base: &mut serde_json::Value, override_value: serde_json::Value) {
    match (base, override_value) {
        (serde_json::Value::Object(base_obj), serde_json::Value::Object(override_obj)) => {
            for (key, value) in override_obj {
                if let Some(existing) = base_obj.get_mut(&key) {
                    merge_json_values(existing, value);
                } else {
                    base_obj.insert(key, value);
                }
            }
        }
        (base_value, override_value) => {
            *base_value = override_value;
        }
    }
}

/// Configuration builder for fluent API
#[derive(Debug)]
pub struct ConfigBuilder<T> {
    config: T,
}

impl<T> ConfigBuilder<T>
where
    T: Default + Serialize + for<'de> Deserialize<'de>,
{
    /// Create new config builder with defaults
    pub fn new() -> Self {
        Self {
            config: T::default(),
        }
    }

    /// Load from file and merge
    pub fn load_file(mut self, path: &Path) -> crate::Result<Self> {
        let file_config: T = load_config(path)?;
        merge_configs(&mut self.config, file_config)?;
        Ok(self)
    }

    /// Merge with another config
    pub fn merge(mut self, other: T) -> crate::Result<Self> {
        merge_configs(&mut self.config, other)?;
        Ok(self)
    }

    /// Build the final config
    pub fn build(self) -> T {
        self.config
    }
}

impl<T> Default for ConfigBuilder<T>
where
    T: Default + Serialize + for<'de> Deserialize<'de>,
{
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[derive(Debug, Default, Serialize, Deserialize, PartialEq)]
    struct TestConfig {
        name: String,
        tick_ms: u64,
        dark: bool,
        sections: Vec<String>,
    }

    #[test]
    fn test_load_config_toml() -> crate::Result<()> {
        let temp_dir = tempdir()?;
        let config_path = temp_dir.path().join("test.toml");

        let toml_content = r#"
name = "test"
tick_ms = 250
dark = true
sections = ["about", "projects"]
        "#;

        std::fs::write(&config_path, toml_content)?;

        let config: TestConfig = load_config(&config_path)?;

        assert_eq!(config.name, "test");
        assert_eq!(config.tick_ms, 250);
        assert!(config.dark);
        assert_eq!(config.sections, vec!["about", "projects"]);

        Ok(())
    }

    #[test]
    fn test_load_config_json() -> crate::Result<()> {
        let temp_dir = tempdir()?;
        let config_path = temp_dir.path().join("test.json");

        let json_content = r#"{
            "name": "test",
            "tick_ms": 100,
            "dark": false,
            "sections": []
        }"#;

        std::fs::write(&config_path, json_content)?;

        let config: TestConfig = load_config(&config_path)?;
        assert_eq!(config.tick_ms, 100);
        assert!(!config.dark);

        Ok(())
    }

    #[test]
    fn test_unsupported_format() {
        let temp_dir = tempdir().unwrap();
        let config_path = temp_dir.path().join("test.ini");
        std::fs::write(&config_path, "name=x").unwrap();

        let result: crate::Result<TestConfig> = load_config(&config_path);
        assert!(result.is_err());
    }

    #[test]
    fn test_merge_configs() -> crate::Result<()> {
        let mut base = TestConfig {
            name: "base".to_string(),
            tick_ms: 250,
            dark: false,
            sections: vec!["about".to_string()],
        };

        let override_config = TestConfig {
            name: "override".to_string(),
            tick_ms: 100,
            dark: true,
            sections: vec!["projects".to_string(), "awards".to_string()],
        };

        merge_configs(&mut base, override_config)?;

        assert_eq!(base.name, "override");
        assert_eq!(base.tick_ms, 100);
        assert!(base.dark);
        assert_eq!(base.sections, vec!["projects", "awards"]);

        Ok(())
    }

    #[test]
    fn test_config_builder() -> crate::Result<()> {
        let temp_dir = tempdir()?;
        let config_path = temp_dir.path().join("builder.toml");

        std::fs::write(
            &config_path,
            "name = \"built\"\ntick_ms = 50\ndark = true\nsections = []\n",
        )?;

        let config: TestConfig = ConfigBuilder::new().load_file(&config_path)?.build();

        assert_eq!(config.name, "built");
        assert_eq!(config.tick_ms, 50);

        Ok(())
    }
}
