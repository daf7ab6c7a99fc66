use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use fakedocs_generate::Variant;
use fakedocs_generate::output::OutputFormat;
use fakedocs_generate::variant::{REQUIRED_FIELD_KEY, SEED_KEY};
use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum SettingsError {
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
    #[error("invalid settings file: {0}")]
    Toml(#[from] toml::de::Error),
}

/// Contents of a `fakedocs.toml` file.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct FileSettings {
    pub reader: ReaderSection,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ReaderSection {
    pub variant: Option<Variant>,
    pub count: Option<RawCount>,
    pub required_field: Option<String>,
    pub seed: Option<u64>,
    pub pools: Option<PathBuf>,
    pub format: Option<OutputFormat>,
}

/// Record count as written in the file; text is parsed later like any host value.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum RawCount {
    Number(i64),
    Text(String),
}

impl RawCount {
    pub fn as_config_value(&self) -> String {
        match self {
            RawCount::Number(value) => value.to_string(),
            RawCount::Text(value) => value.clone(),
        }
    }
}

pub fn load_settings(path: &Path) -> Result<FileSettings, SettingsError> {
    let content = std::fs::read_to_string(path)?;
    let settings: FileSettings = toml::from_str(&content)?;
    Ok(settings)
}

/// Merged command-line and file options, flags taking precedence.
#[derive(Debug, Clone, Default)]
pub struct ResolvedSettings {
    pub variant: Variant,
    pub count: Option<String>,
    pub required_field: Option<String>,
    pub seed: Option<u64>,
    pub pools: Option<PathBuf>,
    pub format: OutputFormat,
}

impl ResolvedSettings {
    pub fn merge(file: FileSettings, overrides: ResolvedOverrides) -> Self {
        let reader = file.reader;
        Self {
            variant: overrides.variant.or(reader.variant).unwrap_or_default(),
            count: overrides
                .count
                .or_else(|| reader.count.map(|count| count.as_config_value())),
            required_field: overrides.required_field.or(reader.required_field),
            seed: overrides.seed.or(reader.seed),
            pools: overrides.pools.or(reader.pools),
            format: overrides.format.or(reader.format).unwrap_or_default(),
        }
    }

    /// Host-style option map the reader resolves its configuration from.
    pub fn config_map(&self) -> BTreeMap<String, String> {
        let mut map = BTreeMap::new();
        if let Some(count) = &self.count {
            map.insert(self.variant.count_key().to_string(), count.clone());
        }
        if let Some(field) = &self.required_field {
            map.insert(REQUIRED_FIELD_KEY.to_string(), field.clone());
        }
        if let Some(seed) = self.seed {
            map.insert(SEED_KEY.to_string(), seed.to_string());
        }
        map
    }
}

/// Values supplied on the command line.
#[derive(Debug, Clone, Default)]
pub struct ResolvedOverrides {
    pub variant: Option<Variant>,
    pub count: Option<String>,
    pub required_field: Option<String>,
    pub seed: Option<u64>,
    pub pools: Option<PathBuf>,
    pub format: Option<OutputFormat>,
}
