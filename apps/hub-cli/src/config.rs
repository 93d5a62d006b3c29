use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct HubConfig {
    pub bus: u8,
    pub address: u16,
    pub interval_ms: u64,
}

impl Default for HubConfig {
    fn default() -> Self {
        Self {
            bus: hub_transport::DEFAULT_BUS,
            address: hub_transport::DEFAULT_ADDRESS,
            interval_ms: 1000,
        }
    }
}

impl HubConfig {
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let contents = fs::read_to_string(path)
            .with_context(|| format!("reading config: {}", path.display()))?;
        serde_json::from_str(&contents)
            .with_context(|| format!("parsing config: {}", path.display()))
    }

    /// File values if a path is given, defaults otherwise.
    pub fn load_or_default(path: Option<&Path>) -> Result<Self> {
        match path {
            Some(p) => Self::load(p),
            None => Ok(Self::default()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_defaults_match_hub_wiring() {
        let cfg = HubConfig::default();
        assert_eq!(cfg.bus, 1);
        assert_eq!(cfg.address, 0x17);
        assert_eq!(cfg.interval_ms, 1000);
    }

    #[test]
    fn test_partial_file_keeps_defaults() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, r#"{{ "bus": 3 }}"#).unwrap();
        let cfg = HubConfig::load(file.path()).unwrap();
        assert_eq!(cfg.bus, 3);
        assert_eq!(cfg.address, 0x17);
    }

    #[test]
    fn test_missing_file_is_an_error() {
        let err = HubConfig::load("/nonexistent/hub.json").unwrap_err();
        assert!(err.to_string().contains("reading config"));
        assert_eq!(HubConfig::load_or_default(None).unwrap(), HubConfig::default());
    }
}
