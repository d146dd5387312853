//! ZooConnect UI server - browse, filter and view wildlife volunteering experiences.

mod pages;
mod routes;
mod state;

use std::net::SocketAddr;
use std::path::{Path, PathBuf};

use axum::Router;
use clap::Parser;
use tower_http::cors::{Any, CorsLayer};
use tower_http::services::ServeDir;
use tracing::info;

use zooconnect::io::catalog_store::load_catalog_or_default;
use zooconnect::io::config::{DEFAULT_CONFIG_FILE, load_config};

use crate::state::AppState;

#[derive(Parser)]
#[command(name = "zooconnect-ui")]
#[command(about = "Web front end for browsing wildlife volunteering experiences")]
struct Args {
    /// Address to bind the server to
    #[arg(long, default_value = "127.0.0.1")]
    bind: String,

    /// Port to listen on
    #[arg(long, default_value = "3001")]
    port: u16,

    /// Site config file (TOML)
    #[arg(long, default_value = DEFAULT_CONFIG_FILE)]
    config: PathBuf,

    /// Catalog JSON file (overrides `catalog_path` from the config)
    #[arg(long)]
    catalog: Option<PathBuf>,

    /// Directory served under `/assets` (images, styles)
    #[arg(long)]
    assets_dir: Option<PathBuf>,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("zooconnect_ui=info".parse()?),
        )
        .init();

    let args = Args::parse();

    let config = load_config(&args.config)?;
    let catalog_path = args.catalog.clone().or_else(|| config.catalog_path.clone());
    let catalog = load_catalog_or_default(catalog_path.as_deref())?;
    info!(
        experiences = catalog.len(),
        catalog = ?catalog_path,
        "catalog loaded"
    );

    let state = AppState::new(catalog, config);
    let app = build_app(state, args.assets_dir.as_deref());

    let addr: SocketAddr = format!("{}:{}", args.bind, args.port).parse()?;
    info!(addr = %addr, "listening");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}

/// Assemble pages, API and optional static assets.
fn build_app(state: AppState, assets_dir: Option<&Path>) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    let mut app = Router::new()
        .merge(pages::page_router())
        .nest("/api", routes::api_router());

    match assets_dir {
        Some(dir) if dir.exists() => {
            info!(assets_dir = %dir.display(), "serving static assets");
            app = app.nest_service("/assets", ServeDir::new(dir));
        }
        Some(dir) => {
            info!(assets_dir = %dir.display(), "assets directory not found, pages only");
        }
        None => {}
    }

    app.fallback(pages::fallback).layer(cors).with_state(state)
}

#[cfg(test)]
fn test_app() -> Router {
    use zooconnect::io::catalog_store::default_catalog;
    use zooconnect::io::config::SiteConfig;

    let mut config = SiteConfig::default();
    config.auth.delay_ms = 0;
    config.application.delay_ms = 0;
    config.media.fallback_delay_ms = 0;
    let catalog = default_catalog().expect("embedded catalog");
    build_app(AppState::new(catalog, config), None)
}
