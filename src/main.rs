#![cfg_attr(target_os = "windows", windows_subsystem = "windows")]

mod app;
mod cli_args;
mod domain;
mod infra;
mod ui;
mod util;

use std::sync::Arc;

use clap::Parser;
use dioxus::prelude::*;
use tracing::{error, info};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

#[cfg(feature = "desktop")]
use dioxus_desktop::{tao::window::WindowBuilder, Config as DesktopConfig};

use crate::{
    app::LaunchData,
    cli_args::Cli,
    domain::AppState,
    infra::config::load_catalog,
    util::{persistence::load_persisted_state, version::window_title},
};

fn main() {
    let args = Cli::parse();

    tracing_subscriber::registry()
        .with(fmt::layer())
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let catalog = match load_catalog(&args.config_paths()) {
        Ok(catalog) => catalog,
        Err(err) => {
            error!("failed to load trade data: {err}");
            eprintln!("Failed to load trade data: {err}");
            std::process::exit(1);
        }
    };

    let persisted = if args.no_restore {
        None
    } else {
        load_persisted_state()
    };
    let saved_origin = persisted.as_ref().and_then(|saved| saved.selected_origin.clone());
    let initial_state = AppState::for_catalog(&catalog, persisted);
    let restored_origin = saved_origin.filter(|origin| {
        initial_state.selected_origin.as_deref() == Some(origin.as_str())
    });
    info!(
        origin = initial_state.selected_origin.as_deref().unwrap_or("<none>"),
        "starting {}",
        window_title()
    );

    // Wayland explicit-sync crashes on some drivers; fall back to GL unless the caller opts in.
    if std::env::var("WAYLAND_DISPLAY").is_ok() && std::env::var("WGPU_BACKEND").is_err() {
        std::env::set_var("WGPU_BACKEND", "gl");
    }

    // WebKit's DMABUF renderer opts into explicit sync; disable it unless the user overrides.
    if std::env::var("WAYLAND_DISPLAY").is_ok()
        && std::env::var("WEBKIT_DISABLE_DMABUF_RENDERER").is_err()
    {
        std::env::set_var("WEBKIT_DISABLE_DMABUF_RENDERER", "1");
    }

    let builder = LaunchBuilder::new().with_context(LaunchData {
        catalog: Arc::new(catalog),
        initial_state,
        restored_origin,
    });

    #[cfg(feature = "desktop")]
    let builder = {
        let config = desktop! {
            DesktopConfig::new().with_window(
                WindowBuilder::new()
                    .with_title(window_title())
            )
        };
        builder.with_cfg(config)
    };

    builder.launch(app::App);
}
