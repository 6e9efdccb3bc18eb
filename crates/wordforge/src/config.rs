//! Layered configuration: defaults for generation flags read from TOML.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::error::WordforgeError;
use crate::output::DEFAULT_OUTPUT;
use crate::pipeline::GenerateOptions;

/// Environment variable naming an extra config file.
pub const CONFIG_ENV: &str = "WORDFORGE_CONFIG";

/// System-wide config file.
pub const SYSTEM_CONFIG: &str = "/etc/wordforge/config.toml";

/// Defaults for any generation flag. Unset fields fall through to the next
/// layer.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct WordforgeConfig {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub output: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub symbols: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub seps: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone_min: Option<usize>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone_max: Option<usize>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub repeat: Option<usize>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub combo: Option<usize>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max: Option<usize>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_length: Option<usize>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub caps: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub leet: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub shuffle: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub enforce_upper: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub enforce_symbol: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub include_common: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub append_common_verbatim: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub inner_symbols: Option<bool>,
}

impl WordforgeConfig {
    /// Built-in defaults, matching the command-line defaults.
    pub fn builtin() -> Self {
        Self::from_options(&GenerateOptions::default(), Path::new(DEFAULT_OUTPUT))
    }

    /// Snapshot of fully resolved options, for `--print-config`.
    pub fn from_options(opts: &GenerateOptions, output: &Path) -> Self {
        Self {
            output: Some(output.display().to_string()),
            symbols: Some(opts.symbols.clone()),
            seps: Some(opts.seps.clone()),
            phone_min: Some(opts.phone_min),
            phone_max: Some(opts.phone_max),
            repeat: Some(opts.repeat),
            combo: Some(opts.combo),
            max: Some(opts.max),
            max_length: opts.max_length,
            caps: Some(opts.caps),
            leet: Some(opts.leet),
            shuffle: Some(opts.shuffle),
            enforce_upper: Some(opts.enforce_upper),
            enforce_symbol: Some(opts.enforce_symbol),
            include_common: Some(opts.include_common),
            append_common_verbatim: Some(opts.append_common_verbatim),
            inner_symbols: Some(opts.inner_symbols),
        }
    }

    /// Load configuration from files and environment.
    ///
    /// Priority (highest to lowest):
    /// 1. `explicit` (the `--config` flag)
    /// 2. WORDFORGE_CONFIG environment variable (path to config file)
    /// 3. ~/.config/wordforge/config.toml
    /// 4. /etc/wordforge/config.toml
    /// 5. Built-in defaults
    pub fn load(explicit: Option<&Path>) -> Result<Self> {
        Self::load_from(
            Some(PathBuf::from(SYSTEM_CONFIG)),
            Self::user_config_path(),
            std::env::var(CONFIG_ENV).ok(),
            explicit,
        )
    }

    fn load_from(
        system: Option<PathBuf>,
        user: Option<PathBuf>,
        env_path: Option<String>,
        explicit: Option<&Path>,
    ) -> Result<Self> {
        let mut config = Self::builtin();

        for path in [system, user].into_iter().flatten() {
            if path.exists() {
                debug!("Loading config from {:?}", path);
                config = Self::merge(config, Self::load_file(&path)?);
            }
        }

        if let Some(env_path) = env_path {
            let path = PathBuf::from(shellexpand::tilde(&env_path).to_string());
            info!("Loading config from {}: {:?}", CONFIG_ENV, path);
            config = Self::merge(config, Self::load_required(&path)?);
        }

        if let Some(path) = explicit {
            info!("Loading config from {:?}", path);
            config = Self::merge(config, Self::load_required(path)?);
        }

        Ok(config)
    }

    fn user_config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|p| p.join("wordforge").join("config.toml"))
    }

    fn load_required(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Err(WordforgeError::InvalidConfig {
                path: path.to_path_buf(),
                message: "file not found".to_string(),
            }
            .into());
        }
        Self::load_file(path)
    }

    fn load_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("reading config file: {:?}", path))?;
        let config: Self = toml::from_str(&content).map_err(|e| WordforgeError::InvalidConfig {
            path: path.to_path_buf(),
            message: e.message().to_string(),
        })?;
        Ok(config)
    }

    fn merge(base: Self, overlay: Self) -> Self {
        Self {
            output: overlay.output.or(base.output),
            symbols: overlay.symbols.or(base.symbols),
            seps: overlay.seps.or(base.seps),
            phone_min: overlay.phone_min.or(base.phone_min),
            phone_max: overlay.phone_max.or(base.phone_max),
            repeat: overlay.repeat.or(base.repeat),
            combo: overlay.combo.or(base.combo),
            max: overlay.max.or(base.max),
            max_length: overlay.max_length.or(base.max_length),
            caps: overlay.caps.or(base.caps),
            leet: overlay.leet.or(base.leet),
            shuffle: overlay.shuffle.or(base.shuffle),
            enforce_upper: overlay.enforce_upper.or(base.enforce_upper),
            enforce_symbol: overlay.enforce_symbol.or(base.enforce_symbol),
            include_common: overlay.include_common.or(base.include_common),
            append_common_verbatim: overlay.append_common_verbatim.or(base.append_common_verbatim),
            inner_symbols: overlay.inner_symbols.or(base.inner_symbols),
        }
    }

    /// Copy every set field into `opts`.
    pub fn apply_to(&self, opts: &mut GenerateOptions) {
        fn set<T: Clone>(target: &mut T, value: &Option<T>) {
            if let Some(v) = value {
                *target = v.clone();
            }
        }
        set(&mut opts.symbols, &self.symbols);
        set(&mut opts.seps, &self.seps);
        set(&mut opts.phone_min, &self.phone_min);
        set(&mut opts.phone_max, &self.phone_max);
        set(&mut opts.repeat, &self.repeat);
        set(&mut opts.combo, &self.combo);
        set(&mut opts.max, &self.max);
        set(&mut opts.caps, &self.caps);
        set(&mut opts.leet, &self.leet);
        set(&mut opts.shuffle, &self.shuffle);
        set(&mut opts.enforce_upper, &self.enforce_upper);
        set(&mut opts.enforce_symbol, &self.enforce_symbol);
        set(&mut opts.include_common, &self.include_common);
        set(&mut opts.append_common_verbatim, &self.append_common_verbatim);
        set(&mut opts.inner_symbols, &self.inner_symbols);
        if self.max_length.is_some() {
            opts.max_length = self.max_length;
        }
    }

    /// Output path from config, or the built-in default.
    pub fn output_path(&self) -> PathBuf {
        let raw = self.output.as_deref().unwrap_or(DEFAULT_OUTPUT);
        PathBuf::from(shellexpand::tilde(raw).to_string())
    }

    /// Render as pretty TOML.
    pub fn to_toml(&self) -> String {
        toml::to_string_pretty(self).unwrap_or_default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn write(dir: &Path, name: &str, body: &str) -> PathBuf {
        let path = dir.join(name);
        std::fs::write(&path, body).unwrap();
        path
    }

    #[test]
    fn test_builtin_matches_options_default() {
        let mut opts = GenerateOptions::default();
        WordforgeConfig::builtin().apply_to(&mut opts);
        assert_eq!(opts, GenerateOptions::default());
    }

    #[test]
    fn test_layers_override_in_priority_order() {
        let dir = tempfile::tempdir().unwrap();
        let system = write(dir.path(), "system.toml", "max = 10\ncaps = true\n");
        let user = write(dir.path(), "user.toml", "max = 20\nsymbols = \"@#\"\n");
        let env = write(dir.path(), "env.toml", "leet = true\n");
        let explicit = write(dir.path(), "explicit.toml", "max = 30\n");

        let config = WordforgeConfig::load_from(
            Some(system),
            Some(user),
            Some(env.display().to_string()),
            Some(&explicit),
        )
        .unwrap();

        assert_eq!(config.max, Some(30));
        assert_eq!(config.caps, Some(true));
        assert_eq!(config.leet, Some(true));
        assert_eq!(config.symbols.as_deref(), Some("@#"));
        assert_eq!(config.combo, Some(2), "untouched fields keep built-in values");
    }

    #[test]
    fn test_missing_optional_layers_are_skipped() {
        let dir = tempfile::tempdir().unwrap();
        let config = WordforgeConfig::load_from(
            Some(dir.path().join("absent.toml")),
            None,
            None,
            None,
        )
        .unwrap();
        assert_eq!(config, WordforgeConfig::builtin());
    }

    #[test]
    fn test_missing_explicit_file_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("absent.toml");
        let err = WordforgeConfig::load_from(None, None, None, Some(&missing)).unwrap_err();
        let err = err.downcast_ref::<WordforgeError>().unwrap();
        assert_eq!(err.exit_code(), 2);
    }

    #[test]
    fn test_unknown_keys_rejected() {
        let dir = tempfile::tempdir().unwrap();
        let bad = write(dir.path(), "bad.toml", "maximum = 5\n");
        let err = WordforgeConfig::load_from(None, None, None, Some(&bad)).unwrap_err();
        assert!(matches!(
            err.downcast_ref::<WordforgeError>(),
            Some(WordforgeError::InvalidConfig { .. })
        ));
    }

    #[test]
    fn test_to_toml_round_trips_builtin() {
        let rendered = WordforgeConfig::builtin().to_toml();
        assert!(rendered.contains("max = 200000"));
        let parsed: WordforgeConfig = toml::from_str(&rendered).unwrap();
        assert_eq!(parsed, WordforgeConfig::builtin());
    }
}
