//! Trending Repos Viewer - a self-contained trending repositories page
//!
//! # Usage
//! ```bash
//! trending-viewer                 # Start server on port 3001
//! trending-viewer --open          # Start and open browser
//! trending-viewer --port 8080     # Custom port
//! ```

use anyhow::Context;
use clap::Parser;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use trending_viewer::Config;

/// Trending Repos Viewer - browse trending GitHub repositories locally
#[derive(Parser)]
#[command(name = "trending-viewer")]
#[command(about = "A self-contained trending repositories page", long_about = None)]
struct Cli {
    /// Port to run the server on
    #[arg(short, long)]
    port: Option<u16>,

    /// Upstream trending API URL
    #[arg(long, value_name = "URL")]
    upstream: Option<String>,

    /// Cache TTL in seconds for the upstream response
    #[arg(long, value_name = "SECS")]
    ttl: Option<u64>,

    /// Open browser automatically after starting
    #[arg(short, long)]
    open: bool,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Initialize tracing (quieter for production)
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(
            std::env::var("RUST_LOG").unwrap_or_else(|_| "warn".into()),
        ))
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Environment first, then CLI flags on top
    let mut config = Config::from_env().context("Invalid configuration")?;
    if let Some(port) = cli.port {
        config.port = port;
    }
    if let Some(upstream) = cli.upstream {
        config.upstream_url = upstream;
    }
    if let Some(secs) = cli.ttl {
        config.cache_ttl = std::time::Duration::from_secs(secs);
    }

    // CORS configuration
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    let app = trending_viewer::app(&config)
        .layer(cors)
        .layer(TraceLayer::new_for_http());

    let addr = format!("127.0.0.1:{}", config.port);
    let listener = match tokio::net::TcpListener::bind(&addr).await {
        Ok(l) => l,
        Err(e) => {
            eprintln!("✗ Failed to bind to port {}: {}", config.port, e);
            eprintln!("  Try a different port with --port <PORT>");
            std::process::exit(1);
        }
    };

    let url = format!("http://{}", addr);
    println!();
    println!("  ┌─────────────────────────────────────────────┐");
    println!("  │            Trending Repos Viewer            │");
    println!("  └─────────────────────────────────────────────┘");
    println!();
    println!("  Upstream:  {}", config.upstream_url);
    println!("  Cache TTL: {}s", config.cache_ttl.as_secs());
    println!("  Server:    {}", url);
    println!();
    println!("  Press Ctrl+C to stop");
    println!();

    // Open browser if requested
    if cli.open {
        if let Err(e) = open::that(&url) {
            eprintln!("  Warning: Could not open browser: {}", e);
        }
    }

    // Set up graceful shutdown
    let shutdown = async {
        tokio::signal::ctrl_c()
            .await
            .expect("Failed to listen for Ctrl+C");
        println!("\n  Shutting down...");
    };

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown)
        .await?;

    Ok(())
}
