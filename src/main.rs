#![allow(non_snake_case)]

mod app;
mod components;
pub mod context;
mod data;
mod pages;
mod theme;

use std::path::{Path, PathBuf};
use std::sync::OnceLock;

use anyhow::Context as _;
use clap::Parser;
use dioxus::desktop::{Config, WindowBuilder};

use crate::theme::ThemeConfig;

/// Theme tokens resolved at startup, set from command line
static THEME: OnceLock<ThemeConfig> = OnceLock::new();

/// Whether the showcase starts in dark mode, set from command line
static START_DARK: OnceLock<bool> = OnceLock::new();

/// Get the resolved theme tokens (from --theme or the built-in palette).
pub fn get_theme() -> ThemeConfig {
    THEME.get().cloned().unwrap_or_default()
}

/// Get the startup color scheme (true = dark).
pub fn get_start_dark() -> bool {
    START_DARK.get().copied().unwrap_or(false)
}

/// CozyUI - hand-drawn component library showcase
#[derive(Parser, Debug)]
#[command(name = "cozyui-desktop")]
#[command(about = "CozyUI - hand-drawn component library and showcase")]
struct Args {
    /// Theme token file (JSON). Missing or broken files fall back to the
    /// built-in palette.
    #[arg(short, long)]
    theme: Option<PathBuf>,

    /// Start in dark mode
    #[arg(short, long)]
    dark: bool,

    /// Window width in logical pixels
    #[arg(long, default_value_t = 1180.0)]
    window_width: f64,

    /// Window height in logical pixels
    #[arg(long, default_value_t = 860.0)]
    window_height: f64,
}

fn load_theme(path: &Path) -> anyhow::Result<ThemeConfig> {
    let raw = std::fs::read_to_string(path)
        .with_context(|| format!("reading theme file {}", path.display()))?;
    let config: ThemeConfig = serde_json::from_str(&raw)
        .with_context(|| format!("parsing theme file {}", path.display()))?;
    Ok(config)
}

fn main() {
    tracing_subscriber::fmt::init();

    let args = Args::parse();

    // Resolve theme tokens; a broken --theme file logs and falls back
    let theme = match args.theme {
        Some(ref path) => match load_theme(path) {
            Ok(config) => {
                tracing::info!("Loaded theme tokens from {:?}", path);
                config
            }
            Err(e) => {
                tracing::error!("Failed to load theme, using built-in palette: {:#}", e);
                ThemeConfig::default()
            }
        },
        None => ThemeConfig::default(),
    };

    // Store startup options globally
    let _ = THEME.set(theme);
    let _ = START_DARK.set(args.dark);

    tracing::info!(
        "Starting CozyUI showcase ({}x{}, {} mode)",
        args.window_width,
        args.window_height,
        if args.dark { "dark" } else { "light" }
    );

    // Configure desktop window
    let config = Config::new().with_window(
        WindowBuilder::new()
            .with_title("CozyUI - Bileşen Kütüphanesi")
            .with_inner_size(dioxus::desktop::LogicalSize::new(
                args.window_width,
                args.window_height,
            ))
            .with_resizable(true),
    );

    dioxus::LaunchBuilder::desktop()
        .with_cfg(config)
        .launch(app::App);
}
