// src/config/mod.rs
use anyhow::{anyhow, Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

pub const ENV_CONFIG_PATH: &str = "BRIEF_CONFIG_PATH";
pub const ENV_ENDPOINT: &str = "BRIEF_ENDPOINT";
pub const DEFAULT_CONFIG_PATH: &str = "config/brief.toml";

pub const DEFAULT_ENDPOINT: &str = "http://localhost:5000/api/summarize_news";
pub const DEFAULT_TRIGGER_ENDPOINT: &str = "http://localhost:5000/api/trigger_processing";

fn default_endpoint() -> String {
    DEFAULT_ENDPOINT.to_string()
}
fn default_trigger_endpoint() -> String {
    DEFAULT_TRIGGER_ENDPOINT.to_string()
}
// Summaries are produced on demand by an LLM pipeline; allow a long wait.
fn default_timeout_secs() -> u64 {
    120
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BriefConfig {
    #[serde(default = "default_endpoint")]
    pub endpoint: String,
    #[serde(default = "default_trigger_endpoint")]
    pub trigger_endpoint: String,
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

impl Default for BriefConfig {
    fn default() -> Self {
        Self {
            endpoint: default_endpoint(),
            trigger_endpoint: default_trigger_endpoint(),
            timeout_secs: default_timeout_secs(),
        }
    }
}

impl BriefConfig {
    pub fn load_from_file(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)
            .with_context(|| format!("reading brief config from {}", path.display()))?;
        let mut cfg: BriefConfig = toml::from_str(&content)
            .with_context(|| format!("parsing brief config {}", path.display()))?;
        cfg.sanitize();
        Ok(cfg)
    }

    /// Resolution order:
    /// 1) $BRIEF_CONFIG_PATH
    /// 2) config/brief.toml
    /// 3) built-in defaults
    ///
    /// $BRIEF_ENDPOINT then overrides the endpoint.
    pub fn load_default() -> Result<Self> {
        let mut cfg = if let Ok(p) = std::env::var(ENV_CONFIG_PATH) {
            let pb = PathBuf::from(p);
            if !pb.exists() {
                return Err(anyhow!("{ENV_CONFIG_PATH} points to non-existent path"));
            }
            Self::load_from_file(&pb)?
        } else {
            let default_p = PathBuf::from(DEFAULT_CONFIG_PATH);
            if default_p.exists() {
                Self::load_from_file(&default_p)?
            } else {
                Self::default()
            }
        };

        if let Ok(ep) = std::env::var(ENV_ENDPOINT) {
            if !ep.trim().is_empty() {
                cfg.endpoint = ep.trim().to_string();
            }
        }
        Ok(cfg)
    }

    fn sanitize(&mut self) {
        self.endpoint = self.endpoint.trim().to_string();
        self.trigger_endpoint = self.trigger_endpoint.trim().to_string();
        if self.endpoint.is_empty() {
            self.endpoint = default_endpoint();
        }
        if self.trigger_endpoint.is_empty() {
            self.trigger_endpoint = default_trigger_endpoint();
        }
        if self.timeout_secs == 0 {
            self.timeout_secs = default_timeout_secs();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::{env, fs};

    #[test]
    fn partial_file_keeps_defaults_and_sanitizes() {
        let dir = tempfile::tempdir().unwrap();
        let p = dir.path().join("brief.toml");
        fs::write(&p, "endpoint = \"  http://news.local/api  \"\ntimeout_secs = 0\n").unwrap();
        let cfg = BriefConfig::load_from_file(&p).unwrap();
        assert_eq!(cfg.endpoint, "http://news.local/api");
        assert_eq!(cfg.trigger_endpoint, DEFAULT_TRIGGER_ENDPOINT);
        assert_eq!(cfg.timeout_secs, 120);
    }

    #[serial_test::serial]
    #[test]
    fn default_uses_env_then_fallbacks() {
        let old = env::current_dir().unwrap();
        let tmp = tempfile::tempdir().unwrap();
        env::set_current_dir(tmp.path()).unwrap();
        env::remove_var(ENV_CONFIG_PATH);
        env::remove_var(ENV_ENDPOINT);

        // Nothing on disk -> defaults
        assert_eq!(BriefConfig::load_default().unwrap(), BriefConfig::default());

        // ./config/brief.toml
        fs::create_dir_all(tmp.path().join("config")).unwrap();
        fs::write(
            tmp.path().join(DEFAULT_CONFIG_PATH),
            "endpoint = \"http://from-file/api\"",
        )
        .unwrap();
        assert_eq!(
            BriefConfig::load_default().unwrap().endpoint,
            "http://from-file/api"
        );

        // Env path wins over the fallback file
        let p_env = tmp.path().join("other.toml");
        fs::write(&p_env, "endpoint = \"http://from-env-file/api\"").unwrap();
        env::set_var(ENV_CONFIG_PATH, p_env.display().to_string());
        assert_eq!(
            BriefConfig::load_default().unwrap().endpoint,
            "http://from-env-file/api"
        );

        // Endpoint override wins over any file
        env::set_var(ENV_ENDPOINT, "http://override/api");
        assert_eq!(
            BriefConfig::load_default().unwrap().endpoint,
            "http://override/api"
        );

        // Missing env path is an error
        env::set_var(ENV_CONFIG_PATH, tmp.path().join("missing.toml"));
        assert!(BriefConfig::load_default().is_err());

        env::remove_var(ENV_CONFIG_PATH);
        env::remove_var(ENV_ENDPOINT);
        env::set_current_dir(&old).unwrap();
    }
}
