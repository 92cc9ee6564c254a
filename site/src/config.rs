//! Configuration types and loading.
//!
//! Settings come from three places, highest precedence first: command line
//! flags, an optional TOML config file, built-in defaults.

use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

use crate::theme::Theme;

/// Where the projects API lives when nothing else says so.
pub const DEFAULT_API_BASE: &str = "http://localhost:5001";

/// Default tracing filter.
pub const DEFAULT_LOG_LEVEL: &str = "info";

/// Config file format.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct SiteConfig {
    /// Base URL of the backend, e.g. `https://s-steel.example`
    pub api_base: Option<String>,
    /// Output HTML file
    pub output: Option<String>,
    /// Theme override file (TOML)
    pub theme: Option<String>,
    /// Tracing filter, e.g. `info` or `ssteel_site=debug`
    pub log_level: Option<String>,
    /// Request timeout for the projects API
    pub request_timeout_ms: Option<u64>,
}

/// Fully resolved settings.
#[derive(Clone, Debug)]
pub struct ResolvedParams {
    /// Base URL of the projects API
    pub api_base: String,
    /// `None` writes to stdout
    pub output: Option<PathBuf>,
    /// Built-in theme extended by the theme file, if any
    pub theme: Theme,
    /// Tracing filter
    pub log_level: String,
    /// `None` waits for the API indefinitely
    pub request_timeout: Option<Duration>,
}

/// CLI options that can override config file settings.
///
/// Lets the binary hand its arguments to [`resolve_params`] without this
/// crate depending on clap.
pub trait CliOptions {
    /// `--api-base`
    fn api_base(&self) -> Option<String>;
    /// `--out`
    fn output(&self) -> Option<PathBuf>;
    /// `--theme`
    fn theme(&self) -> Option<PathBuf>;
    /// `--log-level`
    fn log_level(&self) -> Option<String>;
    /// `--timeout-ms`
    fn request_timeout_ms(&self) -> Option<u64>;
}

/// Expand a leading `~/` to the home directory.
pub fn expand_path(raw: impl AsRef<str>) -> PathBuf {
    let s = raw.as_ref();
    if let Some(stripped) = s.strip_prefix("~/")
        && let Some(home) = std::env::var_os("HOME")
    {
        return PathBuf::from(home).join(stripped);
    }
    PathBuf::from(s)
}

/// Load a config file. A missing file is not an error.
pub fn load_config(path: &Path) -> Result<Option<SiteConfig>> {
    if !path.exists() {
        return Ok(None);
    }
    let data = fs::read_to_string(path)
        .with_context(|| format!("failed to read config {}", path.display()))?;
    let cfg: SiteConfig = toml::from_str(&data)
        .with_context(|| format!("failed to parse toml config {}", path.display()))?;
    Ok(Some(cfg))
}

/// Resolve runtime parameters from CLI options and config file.
///
/// CLI options take precedence over config file settings. The theme file,
/// if any, is loaded here so the returned theme is final.
pub fn resolve_params<C: CliOptions>(cli: &C, config: Option<&SiteConfig>) -> Result<ResolvedParams> {
    let api_base = cli
        .api_base()
        .or_else(|| config.and_then(|c| c.api_base.clone()))
        .unwrap_or_else(|| DEFAULT_API_BASE.to_string());

    let output = cli
        .output()
        .or_else(|| config.and_then(|c| c.output.as_ref().map(expand_path)));

    let theme_path = cli
        .theme()
        .or_else(|| config.and_then(|c| c.theme.as_ref().map(expand_path)));
    let theme = match theme_path {
        Some(path) => Theme::load(&path)?,
        None => Theme::steel(),
    };

    let log_level = cli
        .log_level()
        .or_else(|| config.and_then(|c| c.log_level.clone()))
        .unwrap_or_else(|| DEFAULT_LOG_LEVEL.to_string());

    let request_timeout = cli
        .request_timeout_ms()
        .or_else(|| config.and_then(|c| c.request_timeout_ms))
        .map(Duration::from_millis);

    Ok(ResolvedParams {
        api_base,
        output,
        theme,
        log_level,
        request_timeout,
    })
}
