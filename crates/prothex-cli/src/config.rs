use std::path::{Path, PathBuf};

use prothex_narrative::bedrock::DEFAULT_MODEL_ID;
use serde::{Deserialize, Serialize};

/// Current config version. Bump this when adding fields or changing shape.
/// Each bump requires a corresponding entry in [`migrate`].
const CURRENT_VERSION: u32 = 1;

const DEFAULT_REGION: &str = "us-east-1";

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProthexConfig {
    /// Schema version. Missing or 0 = pre-versioned config.
    #[serde(default)]
    pub config_version: u32,
    pub region: String,
    /// Bedrock model used for weekly narratives. Added in v1.
    pub model_id: String,
    /// Where records, profiles and summaries live. `None` means the
    /// platform data directory.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub data_dir: Option<PathBuf>,
    pub credentials: CredentialSource,
}

impl Default for ProthexConfig {
    fn default() -> Self {
        Self {
            config_version: CURRENT_VERSION,
            region: DEFAULT_REGION.to_string(),
            model_id: DEFAULT_MODEL_ID.to_string(),
            data_dir: None,
            credentials: CredentialSource::DefaultChain,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum CredentialSource {
    Inline {
        access_key_id: String,
        secret_access_key: String,
        #[serde(skip_serializing_if = "Option::is_none", default)]
        session_token: Option<String>,
    },
    Profile {
        profile_name: String,
    },
    DefaultChain,
}

impl ProthexConfig {
    /// The store directory, falling back to the platform data directory.
    pub fn data_dir(&self) -> eyre::Result<PathBuf> {
        match &self.data_dir {
            Some(dir) => Ok(dir.clone()),
            None => {
                let base =
                    dirs::data_dir().ok_or_else(|| eyre::eyre!("no data directory found"))?;
                Ok(base.join("prothex"))
            }
        }
    }

    /// Apply `PROTHEX_DATA_DIR`, `PROTHEX_MODEL_ID` and `AWS_REGION`.
    ///
    /// `lookup` is the environment; tests pass a closure instead.
    pub fn apply_env_overrides(&mut self, lookup: impl Fn(&str) -> Option<String>) {
        if let Some(dir) = lookup("PROTHEX_DATA_DIR").filter(|v| !v.is_empty()) {
            self.data_dir = Some(PathBuf::from(dir));
        }
        if let Some(model_id) = lookup("PROTHEX_MODEL_ID").filter(|v| !v.is_empty()) {
            self.model_id = model_id;
        }
        if let Some(region) = lookup("AWS_REGION").filter(|v| !v.is_empty()) {
            self.region = region;
        }
    }
}

pub fn default_config_path() -> eyre::Result<PathBuf> {
    let base = dirs::config_dir().ok_or_else(|| eyre::eyre!("no config directory found"))?;
    Ok(base.join("prothex").join("config.json"))
}

/// Load the config at `path` (or the default location) and apply
/// environment overrides.
///
/// A missing file is not an error: defaults are used.
pub fn load_config(path: Option<&Path>) -> eyre::Result<ProthexConfig> {
    let path = match path {
        Some(p) => p.to_path_buf(),
        None => default_config_path()?,
    };

    let mut config = if path.exists() {
        read_config(&path)?
    } else {
        tracing::debug!(path = %path.display(), "no config file, using defaults");
        ProthexConfig::default()
    };
    config.apply_env_overrides(|key| std::env::var(key).ok());
    Ok(config)
}

/// Read and migrate a config file without applying overrides.
pub fn read_config(path: &Path) -> eyre::Result<ProthexConfig> {
    let contents = std::fs::read_to_string(path)
        .map_err(|e| eyre::eyre!("failed to read config at {}: {e}", path.display()))?;

    // Parse as raw JSON so we can run migrations before deserializing.
    let json: serde_json::Value = serde_json::from_str(&contents)?;
    let on_disk_version = json
        .get("config_version")
        .and_then(|v| v.as_u64())
        .unwrap_or(0) as u32;

    let migrated = migrate(json, on_disk_version)?;
    let config: ProthexConfig = serde_json::from_value(migrated)?;
    Ok(config)
}

/// Run sequential migrations from `from_version` up to [`CURRENT_VERSION`].
///
/// Each migration is a pure transform on the raw JSON value.
fn migrate(mut json: serde_json::Value, from_version: u32) -> eyre::Result<serde_json::Value> {
    if from_version > CURRENT_VERSION {
        return Err(eyre::eyre!(
            "config_version {from_version} is newer than this build supports ({CURRENT_VERSION}). \
             Please update prothex."
        ));
    }

    // v0 → v1: add model_id
    if from_version < 1 {
        let obj = json
            .as_object_mut()
            .ok_or_else(|| eyre::eyre!("config is not a JSON object"))?;
        obj.entry("model_id")
            .or_insert(serde_json::Value::String(DEFAULT_MODEL_ID.to_string()));
        obj.insert(
            "config_version".to_string(),
            serde_json::Value::Number(1.into()),
        );
        tracing::info!("migrated config v0 → v1 (added model_id)");
    }

    Ok(json)
}

pub fn save_config(config: &ProthexConfig, path: &Path) -> eyre::Result<()> {
    let dir = path
        .parent()
        .ok_or_else(|| eyre::eyre!("config path has no parent: {}", path.display()))?;
    std::fs::create_dir_all(dir)?;

    // Always write the current version, regardless of what was loaded.
    let mut stamped = config.clone();
    stamped.config_version = CURRENT_VERSION;

    let json = serde_json::to_string_pretty(&stamped)?;

    // Write to a temp file then rename for atomicity
    let tmp_path = path.with_extension("json.tmp");
    std::fs::write(&tmp_path, json.as_bytes())?;

    // Credentials may be inline, so keep the file private on Unix
    #[cfg(unix)]
    {
        use std::os::unix::fs::PermissionsExt;
        std::fs::set_permissions(&tmp_path, std::fs::Permissions::from_mode(0o600))?;
    }

    std::fs::rename(&tmp_path, path)?;

    tracing::info!(path = %path.display(), "config saved");
    Ok(())
}

/// Write a default config to `path`.
///
/// An existing file is left alone unless `force` is set.
pub fn init_config(path: &Path, force: bool) -> eyre::Result<ProthexConfig> {
    if path.exists() && !force {
        return Err(eyre::eyre!(
            "config already exists at {} (use --force to overwrite)",
            path.display()
        ));
    }
    let config = ProthexConfig::default();
    save_config(&config, path)?;
    Ok(config)
}
