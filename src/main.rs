use std::sync::Arc;

use listing_search::filters::default_quick_filters;
use listing_search::sources::{
    sample_listings, HttpListingSource, InMemoryListingSource, ListingSource,
};
use listing_search::{SearchConfig, SearchFilterEngine, SearchSession, ViewCap, ViewerRole};
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    // Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let config = SearchConfig::load()?;

    let mut args = std::env::args().skip(1);
    let query = args.next().unwrap_or_default();
    let quick_label = args.next();

    let mut engine = SearchFilterEngine::from_query_str(&query);

    let quick_filters = default_quick_filters();
    if let Some(label) = quick_label {
        match quick_filters.iter().find(|f| f.label.eq_ignore_ascii_case(&label)) {
            Some(quick_filter) => {
                engine.apply_quick_filter(quick_filter);
            }
            None => warn!("Unknown quick filter: {}", label),
        }
    }

    info!("Query: {}", engine.serialize_for_fetch().to_query_string());

    match &config.api_base_url {
        Some(_) => {
            let source = Arc::new(HttpListingSource::new(&config)?);
            run(&engine, source, &config).await?;
        }
        None => {
            let source = Arc::new(InMemoryListingSource::new(sample_listings(), config.page_size));
            run(&engine, source, &config).await?;
        }
    }

    for quick_filter in &quick_filters {
        let marker = if engine.is_quick_filter_active(quick_filter) { "x" } else { " " };
        println!("[{}] {}", marker, quick_filter.label);
    }

    Ok(())
}

async fn run<S: ListingSource>(
    engine: &SearchFilterEngine,
    source: Arc<S>,
    config: &SearchConfig,
) -> anyhow::Result<()> {
    info!("Searching {}", source.source_name());
    let session = SearchSession::new(source);
    let cap = ViewCap::for_role(ViewerRole::Guest, 0, config);

    let Some(results) = session.refresh(engine.state(), cap).await? else {
        return Ok(());
    };

    info!(
        "Page {} of {} ({} listings)",
        results.page, results.total_pages, results.total
    );

    for (i, property) in results.items.iter().enumerate() {
        println!("{}. {} ({} €)", i + 1, property.title, property.price);
        println!(
            "   {}, {} sq ft, {} rooms",
            property.location.city, property.surface, property.rooms
        );
        if let Some(neighborhood) = &property.location.neighborhood {
            println!("   Neighborhood: {}", neighborhood);
        }
        println!("   ID: {}", property.id);
        println!("   Features: {}", property.features.join(", "));
        println!();
    }

    if results.at_cap {
        warn!("Guest viewing limit reached, sign in to see more listings");
    }

    Ok(())
}
