//! # ssteel-site
//!
//! Renders the S-Steel Construction homepage against the live projects API.
//!
//! ## Usage
//!
//! ```bash
//! # Render to stdout using http://localhost:5001
//! ssteel-site render
//!
//! # Production backend, custom theme, written to a file
//! ssteel-site render --api-base https://s-steel.example --theme brand.toml --out index.html
//!
//! # Inspect the generated CSS or the merged theme
//! ssteel-site css
//! ssteel-site theme --theme brand.toml
//! ```

use std::fs;
use std::io::{self, Write};
use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand};
use tracing::{debug, info, warn};

use ssteel_site::api::HttpProjectSource;
use ssteel_site::config::{CliOptions, ResolvedParams, expand_path, load_config, resolve_params};
use ssteel_site::{home, render_home_page, styles};

/// Config file looked up in the working directory when `--config` is absent.
const DEFAULT_CONFIG: &str = "ssteel-site.toml";

#[derive(Parser, Debug)]
#[command(name = "ssteel-site")]
#[command(about = "Render the S-Steel Construction homepage")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Command,
    /// Log level (trace, debug, info, warn, error). RUST_LOG wins when set.
    #[arg(long, global = true)]
    log_level: Option<String>,
    /// Optional config file (default ./ssteel-site.toml)
    #[arg(long, global = true)]
    config: Option<PathBuf>,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Fetch featured projects and render the homepage document.
    Render(RenderArgs),
    /// Print the generated stylesheet.
    Css(ThemeArgs),
    /// Print the resolved theme as TOML.
    Theme(ThemeArgs),
}

#[derive(Args, Debug, Clone, Default)]
struct RenderArgs {
    /// Base URL of the projects API.
    #[arg(long)]
    api_base: Option<String>,
    /// Output file (stdout when absent).
    #[arg(long)]
    out: Option<PathBuf>,
    /// Request timeout in milliseconds (no timeout when absent).
    #[arg(long)]
    timeout_ms: Option<u64>,
    #[command(flatten)]
    theme: ThemeArgs,
}

#[derive(Args, Debug, Clone, Default)]
struct ThemeArgs {
    /// TOML file merged over the built-in theme.
    #[arg(long)]
    theme: Option<PathBuf>,
}

/// Flags of one invocation, seen through [`CliOptions`].
struct Overrides<'a> {
    log_level: Option<&'a str>,
    render: Option<&'a RenderArgs>,
    theme: &'a ThemeArgs,
}

impl CliOptions for Overrides<'_> {
    fn api_base(&self) -> Option<String> {
        self.render.and_then(|r| r.api_base.clone())
    }
    fn output(&self) -> Option<PathBuf> {
        self.render.and_then(|r| r.out.clone())
    }
    fn theme(&self) -> Option<PathBuf> {
        self.theme.theme.clone()
    }
    fn log_level(&self) -> Option<String> {
        self.log_level.map(str::to_string)
    }
    fn request_timeout_ms(&self) -> Option<u64> {
        self.render.and_then(|r| r.timeout_ms)
    }
}

fn init_tracing(level: &str) {
    // stdout carries the rendered document, logs go to stderr
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| level.parse().unwrap_or_default()),
        )
        .init();
}

async fn run() -> Result<()> {
    let cli = Cli::parse();

    let config_path = cli
        .config
        .clone()
        .unwrap_or_else(|| expand_path(DEFAULT_CONFIG));
    let config = load_config(&config_path)?;

    let overrides = match &cli.command {
        Command::Render(args) => Overrides {
            log_level: cli.log_level.as_deref(),
            render: Some(args),
            theme: &args.theme,
        },
        Command::Css(args) | Command::Theme(args) => Overrides {
            log_level: cli.log_level.as_deref(),
            render: None,
            theme: args,
        },
    };
    let params = resolve_params(&overrides, config.as_ref())?;

    init_tracing(&params.log_level);
    debug!(
        config = %config_path.display(),
        loaded = config.is_some(),
        "configuration resolved"
    );

    match cli.command {
        Command::Render(_) => run_render(params).await,
        Command::Css(_) => write_stdout(&styles::stylesheet(&params.theme)),
        Command::Theme(_) => {
            let toml = toml::to_string_pretty(&params.theme).context("failed to serialize theme")?;
            write_stdout(&toml)
        }
    }
}

async fn run_render(params: ResolvedParams) -> Result<()> {
    info!(
        "Starting ssteel-site v{} (api: {})",
        env!("CARGO_PKG_VERSION"),
        params.api_base
    );

    let source = HttpProjectSource::new(&params.api_base, params.request_timeout)
        .context("failed to build HTTP client")?;
    let mut page = home::mount(source);

    let state = tokio::select! {
        state = page.settled() => state,
        _ = tokio::signal::ctrl_c() => {
            warn!("interrupted while loading, unmounting");
            page.unmount().await;
            return Ok(());
        }
    };

    let Some(state) = state else {
        anyhow::bail!("homepage was unmounted before projects settled");
    };
    let html = render_home_page(&state, &params.theme);

    match params.output {
        Some(path) => {
            if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
                fs::create_dir_all(parent)
                    .with_context(|| format!("failed to create {}", parent.display()))?;
            }
            fs::write(&path, &html).with_context(|| format!("failed to write {}", path.display()))?;
            info!(path = %path.display(), bytes = html.len(), "homepage written");
        }
        None => write_stdout(&html)?,
    }

    page.unmount().await;
    Ok(())
}

fn write_stdout(text: &str) -> Result<()> {
    let mut stdout = io::stdout().lock();
    stdout
        .write_all(text.as_bytes())
        .and_then(|()| stdout.flush())
        .context("failed to write to stdout")
}

#[tokio::main]
async fn main() -> ExitCode {
    match run().await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("[ssteel-site] Error: {:#}", e);
            ExitCode::FAILURE
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn render_flags_parse() {
        let cli = Cli::parse_from([
            "ssteel-site",
            "render",
            "--api-base",
            "http://api:8080",
            "--timeout-ms",
            "500",
            "--theme",
            "brand.toml",
            "--log-level",
            "debug",
        ]);

        let Command::Render(args) = &cli.command else {
            panic!("expected render");
        };
        let overrides = Overrides {
            log_level: cli.log_level.as_deref(),
            render: Some(args),
            theme: &args.theme,
        };
        assert_eq!(overrides.api_base().as_deref(), Some("http://api:8080"));
        assert_eq!(overrides.request_timeout_ms(), Some(500));
        assert_eq!(overrides.theme(), Some(PathBuf::from("brand.toml")));
        assert_eq!(overrides.log_level().as_deref(), Some("debug"));
        assert_eq!(overrides.output(), None);
    }

    #[test]
    fn css_ignores_render_settings() {
        let cli = Cli::parse_from(["ssteel-site", "css"]);
        let Command::Css(args) = &cli.command else {
            panic!("expected css");
        };
        let overrides = Overrides {
            log_level: None,
            render: None,
            theme: args,
        };
        assert_eq!(overrides.api_base(), None);
        assert_eq!(overrides.theme(), None);
    }

    #[test]
    fn cli_definition_is_valid() {
        use clap::CommandFactory;
        Cli::command().debug_assert();
    }
}
