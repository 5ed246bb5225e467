use crate::assets::{AssetResolver, DEFAULT_ASSET_DIR, DEFAULT_FALLBACK_DIR};
use crate::{Error, Result};
use cyberpet_types::HungerScale;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::str::FromStr;
use std::time::Duration;

/// Environment variable naming an explicit config file.
pub const CONFIG_ENV: &str = "CYBERPET_CONFIG";
/// Environment variable forcing the display mode (`auto`, `rich`, `plain`).
pub const DISPLAY_ENV: &str = "CYBERPET_DISPLAY";
/// Environment variable replacing the primary asset root.
pub const ASSETS_ENV: &str = "CYBERPET_ASSETS";

/// Resolve the config file path based on priority:
/// 1. Explicit path (with tilde expansion)
/// 2. CYBERPET_CONFIG environment variable (with tilde expansion)
/// 3. XDG config directory
/// 4. ~/.cyberpet/config.toml (fallback for systems without XDG)
pub fn resolve_config_path(explicit_path: Option<&str>) -> Result<PathBuf> {
    if let Some(path) = explicit_path {
        return Ok(expand_tilde(path));
    }

    if let Ok(env_path) = std::env::var(CONFIG_ENV) {
        return Ok(expand_tilde(&env_path));
    }

    if let Some(config_dir) = dirs::config_dir() {
        return Ok(config_dir.join("cyberpet").join("config.toml"));
    }

    if let Some(home) = std::env::var_os("HOME") {
        return Ok(PathBuf::from(home).join(".cyberpet").join("config.toml"));
    }

    Err(Error::Config(
        "Could not determine config path: no HOME directory or XDG config directory found"
            .to_string(),
    ))
}

/// Expand tilde (~) in paths to the user's home directory
fn expand_tilde(path: &str) -> PathBuf {
    if let Some(stripped) = path.strip_prefix("~/")
        && let Some(home) = std::env::var_os("HOME")
    {
        return PathBuf::from(home).join(stripped);
    }
    PathBuf::from(path)
}

/// Which output path the library should take.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DisplayPreference {
    /// Probe for a notebook surface once at startup.
    #[default]
    Auto,
    Rich,
    Plain,
}

impl FromStr for DisplayPreference {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "auto" => Ok(DisplayPreference::Auto),
            "rich" | "html" | "jupyter" => Ok(DisplayPreference::Rich),
            "plain" | "text" | "terminal" => Ok(DisplayPreference::Plain),
            other => Err(Error::Config(format!("unknown display preference '{}'", other))),
        }
    }
}

/// Default waits for the blocking presenters.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PacingConfig {
    pub animation_delay_ms: u64,
    pub thinking_ms: u64,
    pub api_latency_ms: u64,
}

impl Default for PacingConfig {
    fn default() -> Self {
        Self {
            animation_delay_ms: 500,
            thinking_ms: 2000,
            api_latency_ms: 1000,
        }
    }
}

impl PacingConfig {
    pub fn animation_delay(&self) -> Duration {
        Duration::from_millis(self.animation_delay_ms)
    }

    pub fn thinking(&self) -> Duration {
        Duration::from_millis(self.thinking_ms)
    }

    pub fn api_latency(&self) -> Duration {
        Duration::from_millis(self.api_latency_ms)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub display: DisplayPreference,
    pub asset_root: PathBuf,
    pub fallback_roots: Vec<PathBuf>,
    pub hunger_scale: HungerScale,
    pub pacing: PacingConfig,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            display: DisplayPreference::Auto,
            asset_root: PathBuf::from(DEFAULT_ASSET_DIR),
            fallback_roots: vec![PathBuf::from(DEFAULT_FALLBACK_DIR)],
            hunger_scale: HungerScale::default(),
            pacing: PacingConfig::default(),
        }
    }
}

impl Config {
    /// Load from the resolved default path, then apply environment overrides.
    pub fn load() -> Result<Self> {
        let config_path = Self::default_path()?;
        Ok(Self::load_from(&config_path)?.with_env_overrides())
    }

    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }

        let content = std::fs::read_to_string(path)?;
        let config: Config = toml::from_str(&content)?;
        Ok(config)
    }

    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let content = toml::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        Ok(())
    }

    pub fn default_path() -> Result<PathBuf> {
        resolve_config_path(None)
    }

    /// Apply `CYBERPET_DISPLAY` and `CYBERPET_ASSETS`. An unparsable display
    /// value is logged and ignored.
    pub fn with_env_overrides(mut self) -> Self {
        if let Ok(raw) = std::env::var(DISPLAY_ENV) {
            match raw.parse::<DisplayPreference>() {
                Ok(pref) => self.display = pref,
                Err(err) => tracing::warn!(var = DISPLAY_ENV, error = %err, "ignoring display override"),
            }
        }

        if let Ok(root) = std::env::var(ASSETS_ENV)
            && !root.is_empty()
        {
            self.asset_root = expand_tilde(&root);
        }

        self
    }

    pub fn asset_resolver(&self) -> AssetResolver {
        self.fallback_roots
            .iter()
            .fold(AssetResolver::new(&self.asset_root), |resolver, root| {
                resolver.with_fallback(root)
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_config_default() {
        let config = Config::default();
        assert_eq!(config.display, DisplayPreference::Auto);
        assert_eq!(config.asset_root, PathBuf::from("assets/images"));
        assert_eq!(config.fallback_roots.len(), 1);
        assert_eq!(config.pacing.animation_delay(), Duration::from_millis(500));
    }

    #[test]
    fn test_config_save_and_load() -> Result<()> {
        let temp_dir = TempDir::new()?;
        let config_path = temp_dir.path().join("nested").join("config.toml");

        let config = Config {
            display: DisplayPreference::Plain,
            asset_root: PathBuf::from("/srv/course/images"),
            fallback_roots: Vec::new(),
            hunger_scale: HungerScale::Inverted,
            pacing: PacingConfig {
                animation_delay_ms: 10,
                ..PacingConfig::default()
            },
        };

        config.save_to(&config_path)?;
        assert!(config_path.exists());

        let loaded = Config::load_from(&config_path)?;
        assert_eq!(loaded, config);

        Ok(())
    }

    #[test]
    fn test_partial_file_keeps_defaults() -> Result<()> {
        let temp_dir = TempDir::new()?;
        let config_path = temp_dir.path().join("config.toml");
        std::fs::write(&config_path, "display = \"rich\"\n\n[pacing]\nthinking_ms = 5\n")?;

        let loaded = Config::load_from(&config_path)?;
        assert_eq!(loaded.display, DisplayPreference::Rich);
        assert_eq!(loaded.pacing.thinking_ms, 5);
        assert_eq!(loaded.pacing.api_latency_ms, 1000);
        assert_eq!(loaded.hunger_scale, HungerScale::Direct);

        Ok(())
    }

    #[test]
    fn test_invalid_file_is_config_error() -> Result<()> {
        let temp_dir = TempDir::new()?;
        let config_path = temp_dir.path().join("config.toml");
        std::fs::write(&config_path, "display = \"sideways\"\n")?;

        let err = Config::load_from(&config_path).unwrap_err();
        assert!(matches!(err, Error::Config(_)));

        Ok(())
    }

    #[test]
    fn test_load_nonexistent_returns_default() -> Result<()> {
        let temp_dir = TempDir::new()?;
        let config_path = temp_dir.path().join("nonexistent.toml");

        let config = Config::load_from(&config_path)?;
        assert_eq!(config, Config::default());

        Ok(())
    }

    #[test]
    fn test_display_preference_parsing() {
        assert_eq!("RICH".parse::<DisplayPreference>().unwrap(), DisplayPreference::Rich);
        assert_eq!("terminal".parse::<DisplayPreference>().unwrap(), DisplayPreference::Plain);
        assert!("sideways".parse::<DisplayPreference>().is_err());
    }

    #[test]
    fn test_explicit_path_wins() -> Result<()> {
        let path = resolve_config_path(Some("/tmp/cyberpet.toml"))?;
        assert_eq!(path, PathBuf::from("/tmp/cyberpet.toml"));
        Ok(())
    }

    #[test]
    fn test_asset_resolver_uses_roots_in_order() {
        let config = Config {
            asset_root: PathBuf::from("primary"),
            fallback_roots: vec![PathBuf::from("second"), PathBuf::from("third")],
            ..Config::default()
        };
        let resolver = config.asset_resolver();
        assert_eq!(
            resolver.roots(),
            [
                PathBuf::from("primary"),
                PathBuf::from("second"),
                PathBuf::from("third")
            ]
        );
    }
}
