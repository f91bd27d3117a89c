use serde::Deserialize;
use std::{fs, io, path::Path};
use thiserror::Error as ThisError;

///
/// ConfigError
///

#[derive(Debug, ThisError)]
pub enum ConfigError {
    #[error("failed to read metadata config '{path}': {source}")]
    Io {
        path: String,
        #[source]
        source: io::Error,
    },

    #[error("invalid metadata config: {0}")]
    Toml(#[from] toml::de::Error),
}

///
/// MetadataConfig
///
/// ```toml
/// id_field_names = ["id", "_id"]
/// unclassified_fields = "reject"
/// ```
///

#[derive(Clone, Debug, Deserialize, Eq, PartialEq)]
#[serde(default, deny_unknown_fields)]
pub struct MetadataConfig {
    /// Field names treated as the primary key when no field is marked.
    pub id_field_names: Vec<String>,

    pub unclassified_fields: UnclassifiedFieldPolicy,
}

impl MetadataConfig {
    pub fn from_toml_str(s: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(s)?)
    }

    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let text = fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.display().to_string(),
            source,
        })?;

        Self::from_toml_str(&text)
    }

    #[must_use]
    pub fn is_id_field_name(&self, name: &str) -> bool {
        self.id_field_names.iter().any(|n| n == name)
    }
}

impl Default for MetadataConfig {
    fn default() -> Self {
        Self {
            id_field_names: vec!["id".to_string(), "_id".to_string()],
            unclassified_fields: UnclassifiedFieldPolicy::default(),
        }
    }
}

///
/// UnclassifiedFieldPolicy
/// What to do with a field that is neither transient nor any column kind.
///

#[derive(Clone, Copy, Debug, Default, Deserialize, Eq, PartialEq)]
#[serde(rename_all = "snake_case")]
pub enum UnclassifiedFieldPolicy {
    /// Drop the field silently.
    #[default]
    Ignore,
    /// Fail column collection with a configuration error.
    Reject,
}
