//! # Storefront
//!
//! Browse the product catalog from the terminal.
//!
//! ## Components
//!
//! - `model`: The `Product` record served by the catalog.
//! - `clients`: The HTTP catalog and the screen clients over each mounted resource.
//! - `product_list` / `product_detail`: The two screens and what they render.
//! - `lifecycle`: Config and the `Storefront` app that mounts and unmounts screens.
//!
//! ## Usage
//!
//! ```bash
//! storefront list
//! storefront show 3
//! storefront open /product/3
//! STOREFRONT_BASE_URL=http://localhost:8080 storefront list
//! ```

use clap::{Parser, Subcommand};
use storefront::lifecycle::{setup_tracing, Storefront, StorefrontConfig, StorefrontError};
use storefront::model::ProductId;
use storefront::navigation::Route;
use tracing::{error, info};

#[derive(Parser, Debug)]
#[command(name = "storefront", version, about = "Browse the product catalog")]
struct Cli {
    /// Base URL of the catalog service [default: $STOREFRONT_BASE_URL or https://fakestoreapi.com]
    #[arg(long, global = true)]
    base_url: Option<String>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Show the product list
    List,
    /// Show the detail screen of one product
    Show { id: ProductId },
    /// Open a route path such as `/product/3`
    Open { route: Route },
}

#[tokio::main]
async fn main() -> Result<(), StorefrontError> {
    // Setup tracing once for the entire application
    setup_tracing();

    let cli = Cli::parse();
    let config = match cli.base_url.as_deref() {
        Some(url) => StorefrontConfig::from_url(url)?,
        None => StorefrontConfig::from_env()?,
    };
    info!(base_url = %config.base_url, "Starting storefront");

    let mut app = Storefront::start(&config).await?;

    let route = match cli.command {
        Command::List => Route::ProductList,
        Command::Show { id } => Route::ProductDetail { id },
        Command::Open { route } => route,
    };
    if route != Route::ProductList {
        app.navigate(route).await?;
    }

    match app.settled_render().await {
        Ok(screen) => print!("{screen}"),
        Err(e) => error!(error = %e, "Screen never settled"),
    }

    app.shutdown().await?;
    Ok(())
}
