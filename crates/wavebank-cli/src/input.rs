//! Input loading for bank configs and legacy sources.
//!
//! Configs come from a JSON file or, when no file is given, the built-in
//! PPG Wave 2.2 preset. Sources are read whole and hashed for provenance.

use std::path::{Path, PathBuf};

use thiserror::Error;
use wavebank_spec::BankConfig;

/// Where a config came from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigOrigin {
    /// The built-in PPG Wave 2.2 curation.
    Preset,
    /// A JSON file.
    File(PathBuf),
}

impl ConfigOrigin {
    /// Returns a short label for console output.
    pub fn label(&self) -> String {
        match self {
            ConfigOrigin::Preset => "built-in ppg_wave_22 preset".to_string(),
            ConfigOrigin::File(path) => path.display().to_string(),
        }
    }
}

/// Errors raised while loading inputs.
#[derive(Debug, Error)]
pub enum InputError {
    /// File could not be read.
    #[error("failed to read file '{}': {source}", path.display())]
    FileRead {
        /// The file that failed.
        path: PathBuf,
        /// Underlying I/O error.
        source: std::io::Error,
    },

    /// Config JSON could not be parsed.
    #[error("failed to parse config '{}': {message}", path.display())]
    JsonParse {
        /// The config file.
        path: PathBuf,
        /// Parser message.
        message: String,
    },
}

/// A loaded config.
#[derive(Debug, Clone)]
pub struct ConfigLoad {
    /// The parsed config.
    pub config: BankConfig,
    /// Where it came from.
    pub origin: ConfigOrigin,
}

/// A loaded legacy source.
#[derive(Debug, Clone)]
pub struct SourceLoad {
    /// Source text.
    pub text: String,
    /// BLAKE3 hash of the source bytes.
    pub hash: String,
}

fn read_file(path: &Path) -> Result<String, InputError> {
    std::fs::read_to_string(path).map_err(|e| InputError::FileRead {
        path: path.to_path_buf(),
        source: e,
    })
}

/// Loads a config file, or the preset when `path` is `None`.
pub fn load_config(path: Option<&Path>) -> Result<ConfigLoad, InputError> {
    let Some(path) = path else {
        return Ok(ConfigLoad {
            config: BankConfig::ppg_wave_22(),
            origin: ConfigOrigin::Preset,
        });
    };

    let content = read_file(path)?;
    let config = BankConfig::from_json(&content).map_err(|e| InputError::JsonParse {
        path: path.to_path_buf(),
        message: e.to_string(),
    })?;

    Ok(ConfigLoad {
        config,
        origin: ConfigOrigin::File(path.to_path_buf()),
    })
}

/// Reads a legacy source file.
pub fn load_source(path: &Path) -> Result<SourceLoad, InputError> {
    let text = read_file(path)?;
    let hash = blake3::hash(text.as_bytes()).to_hex().to_string();
    Ok(SourceLoad { text, hash })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_config_path_uses_preset() {
        let loaded = load_config(None).unwrap();
        assert_eq!(loaded.origin, ConfigOrigin::Preset);
        assert_eq!(loaded.config, BankConfig::ppg_wave_22());
    }

    #[test]
    fn test_config_file_parse_error() {
        let tmp = tempfile::tempdir().unwrap();
        let path = tmp.path().join("banks.json");
        std::fs::write(&path, "{ not json").unwrap();

        let err = load_config(Some(&path)).unwrap_err();
        assert!(matches!(err, InputError::JsonParse { .. }));
        assert!(err.to_string().contains("banks.json"));
    }

    #[test]
    fn test_missing_source() {
        let tmp = tempfile::tempdir().unwrap();
        let err = load_source(&tmp.path().join("missing.c")).unwrap_err();
        assert!(matches!(err, InputError::FileRead { .. }));
    }

    #[test]
    fn test_source_hash() {
        let tmp = tempfile::tempdir().unwrap();
        let path = tmp.path().join("ppg_data.c");
        std::fs::write(&path, "hello world").unwrap();

        let loaded = load_source(&path).unwrap();
        assert_eq!(
            loaded.hash,
            "d74981efa70a0c880b8d8c1985d075dbcbf679b99a5f9914e5aaf96b831a9e24"
        );
    }
}
