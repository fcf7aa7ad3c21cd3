use std::env;
use std::fs;
use std::path::{Path, PathBuf};

use carnet_core::domain::Gender;
use serde::Deserialize;
use thiserror::Error;

const APP_DIR: &str = "carnet";
const CONFIG_FILENAME: &str = "config.toml";

#[derive(Debug, Clone, Default)]
pub struct AppConfig {
    pub output: OutputConfig,
    pub defaults: DefaultsConfig,
}

#[derive(Debug, Clone, Default)]
pub struct OutputConfig {
    pub format: OutputFormat,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

/// Values used to pre-fill a new contact when the caller leaves them out.
#[derive(Debug, Clone, Default)]
pub struct DefaultsConfig {
    pub gender: Option<Gender>,
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("missing home directory")]
    MissingHomeDir,
    #[error("invalid config path: {0}")]
    InvalidConfigPath(PathBuf),
    #[error("config file not found: {0}")]
    MissingConfigFile(PathBuf),
    #[error("config file permissions too permissive: {0}")]
    InsecurePermissions(PathBuf),
    #[error("invalid defaults.gender value: {0}")]
    InvalidDefaultGender(String),
    #[error("failed to read config file {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to parse config file {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },
}

pub type Result<T> = std::result::Result<T, ConfigError>;

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct ConfigFile {
    output: Option<OutputFile>,
    defaults: Option<DefaultsFile>,
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct OutputFile {
    format: Option<OutputFormat>,
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct DefaultsFile {
    gender: Option<String>,
}

pub fn load(config_path: Option<PathBuf>) -> Result<AppConfig> {
    let required = config_path.is_some();
    let path = match resolve_config_path(config_path) {
        Ok(path) => path,
        Err(ConfigError::MissingHomeDir) if !required => return Ok(AppConfig::default()),
        Err(ConfigError::InvalidConfigPath(_)) if !required => return Ok(AppConfig::default()),
        Err(err) => return Err(err),
    };
    match load_at_path(&path, required)? {
        Some(config) => Ok(config),
        None => Ok(AppConfig::default()),
    }
}

pub fn resolve_config_path(custom: Option<PathBuf>) -> Result<PathBuf> {
    match custom {
        Some(path) => {
            if path.as_os_str().is_empty() {
                return Err(ConfigError::InvalidConfigPath(path));
            }
            Ok(path)
        }
        None => {
            let base = if let Some(dir) = env::var_os("XDG_CONFIG_HOME") {
                let path = PathBuf::from(dir);
                if path.as_os_str().is_empty() {
                    return Err(ConfigError::InvalidConfigPath(path));
                }
                path
            } else {
                let home = dirs::home_dir().ok_or(ConfigError::MissingHomeDir)?;
                home.join(".config")
            };
            Ok(base.join(APP_DIR).join(CONFIG_FILENAME))
        }
    }
}

fn load_at_path(path: &Path, required: bool) -> Result<Option<AppConfig>> {
    if !path.exists() {
        if required {
            return Err(ConfigError::MissingConfigFile(path.to_path_buf()));
        }
        return Ok(None);
    }

    ensure_permissions(path)?;
    let contents = fs::read_to_string(path).map_err(|source| ConfigError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    let parsed: ConfigFile = toml::from_str(&contents).map_err(|source| ConfigError::Parse {
        path: path.to_path_buf(),
        source,
    })?;
    Ok(Some(merge_config(parsed)?))
}

fn merge_config(parsed: ConfigFile) -> Result<AppConfig> {
    let mut config = AppConfig::default();

    if let Some(output) = parsed.output {
        if let Some(format) = output.format {
            config.output.format = format;
        }
    }

    if let Some(defaults) = parsed.defaults {
        if let Some(raw) = defaults.gender {
            let gender = raw
                .parse::<Gender>()
                .map_err(|_| ConfigError::InvalidDefaultGender(raw.clone()))?;
            config.defaults.gender = Some(gender);
        }
    }

    Ok(config)
}

#[cfg(unix)]
fn ensure_permissions(path: &Path) -> Result<()> {
    use std::os::unix::fs::PermissionsExt;

    let metadata = fs::metadata(path).map_err(|source| ConfigError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    let mode = metadata.permissions().mode();
    if mode & 0o077 != 0 {
        return Err(ConfigError::InsecurePermissions(path.to_path_buf()));
    }
    Ok(())
}

#[cfg(not(unix))]
fn ensure_permissions(_path: &Path) -> Result<()> {
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::{
        load_at_path, merge_config, ConfigError, ConfigFile, DefaultsFile, OutputFile,
        OutputFormat,
    };
    use carnet_core::domain::Gender;
    use std::fs;
    use std::path::Path;
    use tempfile::TempDir;

    fn restrict_permissions(path: &Path) {
        #[cfg(unix)]
        {
            use std::os::unix::fs::PermissionsExt;
            let mut perms = fs::metadata(path).expect("metadata").permissions();
            perms.set_mode(0o600);
            fs::set_permissions(path, perms).expect("chmod");
        }
    }

    #[test]
    fn merge_config_applies_values() {
        let parsed = ConfigFile {
            output: Some(OutputFile {
                format: Some(OutputFormat::Json),
            }),
            defaults: Some(DefaultsFile {
                gender: Some("female".to_string()),
            }),
        };
        let merged = merge_config(parsed).expect("merge");
        assert_eq!(merged.output.format, OutputFormat::Json);
        assert_eq!(merged.defaults.gender, Some(Gender::Female));
    }

    #[test]
    fn merge_config_rejects_unknown_gender() {
        let parsed = ConfigFile {
            output: None,
            defaults: Some(DefaultsFile {
                gender: Some("robot".to_string()),
            }),
        };
        let err = merge_config(parsed).unwrap_err();
        assert!(matches!(err, ConfigError::InvalidDefaultGender(value) if value == "robot"));
    }

    #[test]
    fn load_at_path_requires_file_when_requested() {
        let temp = TempDir::new().expect("tempdir");
        let missing = temp.path().join("config.toml");
        let err = load_at_path(&missing, true).unwrap_err();
        let message = err.to_string();
        assert!(message.contains("config file not found"));
    }

    #[test]
    fn load_at_path_skips_missing_optional_file() {
        let temp = TempDir::new().expect("tempdir");
        let missing = temp.path().join("config.toml");
        assert!(load_at_path(&missing, false).expect("load").is_none());
    }

    #[test]
    fn load_at_path_parses_toml() {
        let temp = TempDir::new().expect("tempdir");
        let path = temp.path().join("config.toml");
        fs::write(
            &path,
            "[output]\nformat = \"json\"\n[defaults]\ngender = \"NoGender\"\n",
        )
        .expect("write config");
        restrict_permissions(&path);

        let config = load_at_path(&path, true).expect("load").expect("config");
        assert_eq!(config.output.format, OutputFormat::Json);
        assert_eq!(config.defaults.gender, Some(Gender::NoGender));
    }

    #[test]
    fn load_at_path_rejects_unknown_keys() {
        let temp = TempDir::new().expect("tempdir");
        let path = temp.path().join("config.toml");
        fs::write(&path, "[output]\ncolour = true\n").expect("write config");
        restrict_permissions(&path);

        let err = load_at_path(&path, true).unwrap_err();
        assert!(matches!(err, ConfigError::Parse { .. }));
    }

    #[cfg(unix)]
    #[test]
    fn load_at_path_rejects_world_readable_file() {
        use std::os::unix::fs::PermissionsExt;

        let temp = TempDir::new().expect("tempdir");
        let path = temp.path().join("config.toml");
        fs::write(&path, "").expect("write config");
        let mut perms = fs::metadata(&path).expect("metadata").permissions();
        perms.set_mode(0o644);
        fs::set_permissions(&path, perms).expect("chmod");

        let err = load_at_path(&path, true).unwrap_err();
        assert!(matches!(err, ConfigError::InsecurePermissions(_)));
    }
}
