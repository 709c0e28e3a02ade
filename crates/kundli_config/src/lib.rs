//! TOML configuration for the kundli engine.
//!
//! ```toml
//! [chart]
//! ayanamsha = "lahiri"
//! node-mode = "mean"
//! grahan-orb-deg = 10.0
//!
//! [output]
//! format = "text"
//! ```
//!
//! Every key is optional. [`discover`] looks at `$KUNDLI_CONFIG`, then
//! `./kundli.toml`, and falls back to defaults when neither exists.

pub mod error;

use std::fmt::{Display, Formatter};
use std::path::{Path, PathBuf};

use kundli_jyotish::{ChartConfig, DEFAULT_GRAHAN_ORB_DEG};
use kundli_vedic_base::{AyanamshaSystem, NodeMode};
use log::{debug, info};
use serde::{Deserialize, Serialize};

pub use error::ConfigError;

/// Environment variable naming an explicit config file.
pub const CONFIG_ENV_VAR: &str = "KUNDLI_CONFIG";

/// File name looked up in the working directory.
pub const DEFAULT_CONFIG_FILE: &str = "kundli.toml";

/// Root of the configuration file.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct KundliConfig {
    pub chart: ChartSection,
    pub output: OutputSection,
}

/// `[chart]` table.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "kebab-case", deny_unknown_fields)]
pub struct ChartSection {
    pub ayanamsha: AyanamshaSystem,
    pub node_mode: NodeMode,
    pub grahan_orb_deg: f64,
}

impl Default for ChartSection {
    fn default() -> Self {
        Self {
            ayanamsha: AyanamshaSystem::default(),
            node_mode: NodeMode::default(),
            grahan_orb_deg: DEFAULT_GRAHAN_ORB_DEG,
        }
    }
}

/// `[output]` table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct OutputSection {
    pub format: OutputFormat,
}

/// How the CLI renders results.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

impl Display for OutputFormat {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(match self {
            Self::Text => "text",
            Self::Json => "json",
        })
    }
}

impl KundliConfig {
    /// Parse and validate TOML text.
    pub fn from_toml_str(s: &str) -> Result<Self, ConfigError> {
        let cfg: Self = toml::from_str(s)?;
        cfg.chart_config().validate()?;
        Ok(cfg)
    }

    /// Read, parse and validate a config file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let cfg = Self::from_toml_str(&text)?;
        info!("loaded config from {}", path.display());
        Ok(cfg)
    }

    /// Engine configuration from the `[chart]` table.
    pub fn chart_config(&self) -> ChartConfig {
        ChartConfig {
            ayanamsha: self.chart.ayanamsha,
            node_mode: self.chart.node_mode,
            grahan_orb_deg: self.chart.grahan_orb_deg,
        }
    }
}

/// Candidate config paths in lookup order.
pub fn candidate_paths(env_value: Option<&str>, cwd: &Path) -> Vec<PathBuf> {
    let mut paths = Vec::with_capacity(2);
    if let Some(p) = env_value.filter(|p| !p.is_empty()) {
        paths.push(PathBuf::from(p));
    }
    paths.push(cwd.join(DEFAULT_CONFIG_FILE));
    paths
}

/// Load the first config found among `paths`, or defaults.
///
/// A file that exists but fails to read or parse is an error; it is not
/// skipped.
pub fn load_first(paths: &[PathBuf]) -> Result<KundliConfig, ConfigError> {
    for path in paths {
        if path.is_file() {
            return KundliConfig::load(path);
        }
        debug!("no config at {}", path.display());
    }
    debug!("using default config");
    Ok(KundliConfig::default())
}

/// Find and load the config from `$KUNDLI_CONFIG` or `./kundli.toml`.
pub fn discover() -> Result<KundliConfig, ConfigError> {
    let env_value = std::env::var(CONFIG_ENV_VAR).ok();
    let cwd = std::env::current_dir().unwrap_or_else(|_| PathBuf::from("."));
    load_first(&candidate_paths(env_value.as_deref(), &cwd))
}
