use std::net::SocketAddr;
use std::path::PathBuf;

use clap::Parser;
use tracing_subscriber::EnvFilter;

use rpager::config::Config;
use rpager::state::AppState;
use rpager::web::context;
use rpager::{assets, orders};

#[derive(Parser)]
#[command(name = "rpager", version, about = "Pagination control demo server")]
struct Cli {
    /// Path to config file
    #[arg(short, long, default_value = "config.toml")]
    config: PathBuf,

    /// Validate the config file and exit
    #[arg(long)]
    check_config: bool,
}

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    // Load configuration
    let config = Config::load(&cli.config).unwrap_or_else(|e| {
        eprintln!("Error loading config: {e}");
        std::process::exit(1);
    });

    if cli.check_config {
        println!("Config OK: {}", cli.config.display());
        return;
    }

    // Setup tracing/logging
    let filter =
        EnvFilter::try_new(&config.server.log_level).unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt().with_env_filter(filter).init();

    // Load demo data
    let orders = orders::load_orders(&config.demo.orders_path).unwrap_or_else(|e| {
        tracing::error!("Failed to load orders: {e}");
        std::process::exit(1);
    });
    tracing::info!(
        "Orders loaded: {} from {}",
        orders.len(),
        config.demo.orders_path.display()
    );

    // Initialize Tera templates
    let mut tera = assets::load_templates().unwrap_or_else(|e| {
        tracing::error!("Failed to load templates: {e}");
        std::process::exit(1);
    });
    context::register_functions(&mut tera, config.pager.clone());
    tracing::info!("Templates loaded");

    let addr = SocketAddr::new(
        config.server.host.parse().unwrap_or_else(|_| {
            tracing::warn!(
                "Invalid host '{}', falling back to 0.0.0.0",
                config.server.host
            );
            std::net::Ipv4Addr::UNSPECIFIED.into()
        }),
        config.server.port,
    );

    tracing::info!("rpager v{}", env!("CARGO_PKG_VERSION"));
    tracing::info!("Listening on {addr}");

    let state = AppState::new(config, tera, orders);
    let app = rpager::build_router(state);

    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .unwrap_or_else(|e| {
            tracing::error!("Failed to bind to {addr}: {e}");
            std::process::exit(1);
        });

    axum::serve(listener, app).await.unwrap_or_else(|e| {
        tracing::error!("Server error: {e}");
        std::process::exit(1);
    });
}
