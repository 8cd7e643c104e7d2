//! # Cinelog Binary
//!
//! Headless assembly of the catalog engine: reads connection settings from
//! the environment, wires the HTTP gateway into a store, loads the catalog,
//! and prints the current projection. Presentation layers wire the same
//! pieces together and read the same derivations.

use std::sync::Arc;
use std::time::Duration;

use anyhow::Context;
use cl_core::CatalogStore;
use cl_gateway_http::{GatewayConfig, HttpCatalogGateway};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let base_url =
        std::env::var("CINELOG_BASE_URL").context("CINELOG_BASE_URL must be set")?;
    let timeout_secs: u64 = match std::env::var("CINELOG_TIMEOUT_SECS") {
        Ok(raw) => raw.parse().context("CINELOG_TIMEOUT_SECS must be an integer")?,
        Err(_) => 30,
    };

    let mut config = GatewayConfig::new(base_url);
    config.request_timeout = Duration::from_secs(timeout_secs);
    let gateway = HttpCatalogGateway::new(config)?;

    let mut store = CatalogStore::new(Arc::new(gateway));
    store.load_movies().await?;
    store.load_all_reviews().await?;

    tracing::info!(
        movies = store.movies().len(),
        reviews = store.reviews().len(),
        "catalog loaded"
    );

    for movie in store.visible_movies() {
        let average = store.average_rating(movie.id);
        // 0.0 means "no reviews yet"; fall back to the intrinsic rating.
        let shown = if average == 0.0 { movie.rating } else { average };
        println!(
            "{:>6}  {}  ({})  {:.1}/10  [{}]  {} views",
            movie.id,
            movie.title,
            movie.year,
            shown,
            movie.genres.join(", "),
            movie.view_count,
        );
    }

    Ok(())
}
