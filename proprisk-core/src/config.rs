//! Configuration file support for proprisk
//!
//! Loads project-specific configuration from JSON files.
//!
//! Search order:
//! 1. Explicit path (--config CLI flag)
//! 2. `.propriskrc.json` in project root
//! 3. `proprisk.config.json` in project root
//! 4. `"proprisk"` key in `package.json`
//!
//! All fields are optional. CLI flags take precedence over config file values.

use crate::postcodes::{is_known_state, is_valid_postcode, PremiumPostcodes};
use crate::risk::{MAX_RATING, MIN_RATING};
use crate::scoring::{ScorerSettings, DEFAULT_KEY_RISK_MIN_RATING, DEFAULT_MAX_KEY_RISK_FACTORS};
use anyhow::{Context, Result};
use globset::{Glob, GlobSet, GlobSetBuilder};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

/// Default exclude patterns applied when no config is specified
const DEFAULT_EXCLUDES: &[&str] = &[
    "**/package.json",
    "**/.propriskrc.json",
    "**/proprisk.config.json",
    "**/node_modules/**",
];

/// proprisk configuration loaded from a JSON config file
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct PropriskConfig {
    /// Glob patterns for property files to include (default: all .json files)
    #[serde(default)]
    pub include: Vec<String>,

    /// Glob patterns for files to exclude (default: config files, node_modules)
    #[serde(default)]
    pub exclude: Vec<String>,

    /// Per-state premium postcode lists, replacing the built-in list for each state given
    #[serde(default)]
    pub premium_postcodes: Option<BTreeMap<String, Vec<String>>>,

    /// Key risk factor selection
    #[serde(default)]
    pub key_risk: Option<KeyRiskConfig>,

    /// Minimum average rating to report (default: report all)
    #[serde(default)]
    pub min_average: Option<f64>,

    /// Maximum number of results to show
    #[serde(default)]
    pub top: Option<usize>,
}

/// Key risk factor selection
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct KeyRiskConfig {
    /// Minimum category rating counted as a key risk (default: 4)
    pub min_rating: Option<u8>,
    /// Maximum key risk factors reported (default: 3)
    pub max_factors: Option<usize>,
}

/// Resolved configuration with compiled glob patterns
#[derive(Debug)]
pub struct ResolvedConfig {
    /// Compiled include patterns (None means include all)
    pub include: Option<GlobSet>,
    /// Compiled exclude patterns
    pub exclude: GlobSet,
    /// Whether the exclude set is the built-in default
    pub default_excludes: bool,
    /// Scorer data (postcode table, key risk selection)
    pub scorer: ScorerSettings,
    /// Filters
    pub min_average: Option<f64>,
    pub top_n: Option<usize>,
    /// Path the config was loaded from (None if defaults)
    pub config_path: Option<PathBuf>,
}

impl PropriskConfig {
    /// Validate the configuration for logical errors
    pub fn validate(&self) -> Result<()> {
        if let Some(ref table) = self.premium_postcodes {
            for (state, postcodes) in table {
                if !is_known_state(state) {
                    anyhow::bail!(
                        "premium_postcodes: unknown state '{}' (expected one of NSW, VIC, QLD, WA, SA, TAS, ACT, NT)",
                        state
                    );
                }
                for postcode in postcodes {
                    if !is_valid_postcode(postcode) {
                        anyhow::bail!(
                            "premium_postcodes.{}: invalid postcode '{}' (expected four digits)",
                            state,
                            postcode
                        );
                    }
                }
            }
        }

        if let Some(ref k) = self.key_risk {
            if let Some(min) = k.min_rating {
                if !(MIN_RATING..=MAX_RATING).contains(&min) {
                    anyhow::bail!(
                        "key_risk.min_rating must be between {} and {} (got {})",
                        MIN_RATING,
                        MAX_RATING,
                        min
                    );
                }
            }
            if let Some(max) = k.max_factors {
                if max == 0 {
                    anyhow::bail!("key_risk.max_factors must be at least 1 (got 0)");
                }
            }
        }

        if let Some(min) = self.min_average {
            if !(f64::from(MIN_RATING)..=f64::from(MAX_RATING)).contains(&min) {
                anyhow::bail!("min_average must be between 1.0 and 5.0 (got {})", min);
            }
        }

        // Validate glob patterns compile
        for pattern in &self.include {
            Glob::new(pattern).with_context(|| format!("invalid include pattern: {}", pattern))?;
        }
        for pattern in &self.exclude {
            Glob::new(pattern).with_context(|| format!("invalid exclude pattern: {}", pattern))?;
        }

        Ok(())
    }

    /// Resolve config into compiled form ready for use
    pub fn resolve(&self) -> Result<ResolvedConfig> {
        self.validate()?;

        let include = if self.include.is_empty() {
            None
        } else {
            let mut builder = GlobSetBuilder::new();
            for pattern in &self.include {
                builder.add(Glob::new(pattern)?);
            }
            Some(builder.build()?)
        };

        // User excludes replace the defaults rather than extending them
        let exclude = {
            let mut builder = GlobSetBuilder::new();
            if self.exclude.is_empty() {
                for pattern in DEFAULT_EXCLUDES {
                    builder.add(Glob::new(pattern)?);
                }
            } else {
                for pattern in &self.exclude {
                    builder.add(Glob::new(pattern)?);
                }
            }
            builder.build()?
        };

        let mut premium_postcodes = PremiumPostcodes::builtin();
        if let Some(ref table) = self.premium_postcodes {
            for (state, postcodes) in table {
                premium_postcodes.set_state(state, postcodes);
            }
        }

        let (key_risk_min_rating, max_key_risk_factors) = match &self.key_risk {
            Some(k) => (
                k.min_rating.unwrap_or(DEFAULT_KEY_RISK_MIN_RATING),
                k.max_factors.unwrap_or(DEFAULT_MAX_KEY_RISK_FACTORS),
            ),
            None => (DEFAULT_KEY_RISK_MIN_RATING, DEFAULT_MAX_KEY_RISK_FACTORS),
        };

        Ok(ResolvedConfig {
            include,
            exclude,
            default_excludes: self.exclude.is_empty(),
            scorer: ScorerSettings {
                premium_postcodes,
                key_risk_min_rating,
                max_key_risk_factors,
            },
            min_average: self.min_average,
            top_n: self.top,
            config_path: None,
        })
    }
}

impl ResolvedConfig {
    /// Check if a file path should be included based on include/exclude patterns
    pub fn should_include(&self, path: &Path) -> bool {
        let path_str = path.to_string_lossy();

        // Check exclude first
        if self.exclude.is_match(path_str.as_ref()) {
            return false;
        }

        // If include patterns exist, file must match at least one
        if let Some(ref include) = self.include {
            return include.is_match(path_str.as_ref());
        }

        true
    }

    /// Build a ResolvedConfig with all defaults (no config file)
    pub fn defaults() -> Result<Self> {
        PropriskConfig::default().resolve()
    }
}

/// Discover and load a config file from the project root
///
/// Search order:
/// 1. `.propriskrc.json`
/// 2. `proprisk.config.json`
/// 3. `"proprisk"` key in `package.json`
///
/// Returns `None` if no config file is found (use defaults).
pub fn discover_config(project_root: &Path) -> Result<Option<(PropriskConfig, PathBuf)>> {
    for name in [".propriskrc.json", "proprisk.config.json"] {
        let path = project_root.join(name);
        if path.exists() {
            log::debug!("found config file {}", path.display());
            let config = load_config_file(&path)?;
            return Ok(Some((config, path)));
        }
    }

    let pkg_path = project_root.join("package.json");
    if pkg_path.exists() {
        if let Some(config) = load_from_package_json(&pkg_path)? {
            log::debug!("found proprisk key in {}", pkg_path.display());
            return Ok(Some((config, pkg_path)));
        }
    }

    Ok(None)
}

/// Load config from an explicit file path
pub fn load_config_file(path: &Path) -> Result<PropriskConfig> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read config file: {}", path.display()))?;

    let config: PropriskConfig = serde_json::from_str(&content)
        .with_context(|| format!("failed to parse config file: {}", path.display()))?;

    config
        .validate()
        .with_context(|| format!("invalid config in: {}", path.display()))?;

    Ok(config)
}

/// Load config from the "proprisk" key in package.json
fn load_from_package_json(path: &Path) -> Result<Option<PropriskConfig>> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read {}", path.display()))?;

    let pkg: serde_json::Value = serde_json::from_str(&content)
        .with_context(|| format!("failed to parse {}", path.display()))?;

    match pkg.get("proprisk") {
        Some(value) => {
            let config: PropriskConfig = serde_json::from_value(value.clone())
                .with_context(|| format!("invalid proprisk config in {}", path.display()))?;
            config
                .validate()
                .with_context(|| format!("invalid proprisk config in {}", path.display()))?;
            Ok(Some(config))
        }
        None => Ok(None),
    }
}

/// Load and resolve config for a project
///
/// If `config_path` is provided, loads from that file.
/// Otherwise, discovers config from the project root.
/// Returns default config if nothing is found.
pub fn load_and_resolve(project_root: &Path, config_path: Option<&Path>) -> Result<ResolvedConfig> {
    let (config, source_path) = if let Some(path) = config_path {
        let config = load_config_file(path)?;
        (config, Some(path.to_path_buf()))
    } else {
        match discover_config(project_root)? {
            Some((config, path)) => (config, Some(path)),
            None => {
                log::debug!(
                    "no config file under {}, using defaults",
                    project_root.display()
                );
                (PropriskConfig::default(), None)
            }
        }
    };

    let mut resolved = config.resolve()?;
    resolved.config_path = source_path;
    Ok(resolved)
}
