//! Entry point for the EternaVerse desktop app.

use clap::Parser;
use dioxus::desktop::{Config, LogicalSize, WindowBuilder};
use tracing_subscriber::EnvFilter;

use eterna_ethers::Backend;
use eterna_verse::components::App;
use eterna_verse::config::Cli;
use eterna_verse::{STYLES_CSS, state};

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&cli.log_level)),
        )
        .with_target(false)
        .init();

    tracing::info!("Starting EternaVerse");

    let backend = Backend::from_config(&cli.chain_config())?;
    if !state::install(backend.into_board()) {
        anyhow::bail!("poem board was already installed");
    }

    dioxus::LaunchBuilder::desktop()
        .with_cfg(
            Config::new()
                .with_window(
                    WindowBuilder::new()
                        .with_title("EternaVerse")
                        .with_inner_size(LogicalSize::new(820.0, 900.0)),
                )
                .with_custom_head(format!(r#"<style>{}</style>"#, STYLES_CSS)),
        )
        .launch(App);

    Ok(())
}
