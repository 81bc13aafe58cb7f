mod api;
mod card;
mod config;
mod filter;
mod history;
mod landing;
mod model;
mod normalizer;
mod search;
mod source;
#[cfg(test)]
mod test_support;

use api::{ApiPoller, ApiRoutes, MESSAGE_PATH};
use card::ProductCard;
use clap::{Parser, Subcommand};
use config::{AppConfig, apply_env, load_config};
use filter::{STORE_OPTIONS, SearchQuery};
use landing::SearchBar;
use model::ConfigError;
use search::SearchPage;
use source::{build_sources, http_client};
use tokio::time::Duration;
use tracing::{error, info, warn};
use tracing_subscriber::EnvFilter;

/// Browse discounted clearance products from local stores.
#[derive(Parser)]
#[command(name = "rabatjaeger", version, about)]
struct Cli {
    /// Path to the JSON configuration file
    #[arg(long, global = true, default_value = "config.json")]
    config: String,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Load products and list the ones passing the filters
    Search {
        /// Search route URL or query string, e.g. "searchTerm=milk&selectedStore=Netto"
        #[arg(long)]
        query: Option<String>,

        /// Free-text term, applied after the query string
        #[arg(long)]
        term: Option<String>,

        /// Store name or "All Stores", applied after the query string
        #[arg(long)]
        store: Option<String>,

        /// Inclusive price ceiling
        #[arg(long)]
        max_price: Option<f64>,

        /// Output as JSON instead of human-readable text
        #[arg(long)]
        json: bool,
    },
    /// Show the detail view of one product
    Show {
        /// Product EAN
        id: String,
    },
    /// Build the search route URL the landing search bar redirects to
    Landing {
        #[arg(long, default_value = "")]
        term: String,

        #[arg(long, default_value = filter::ALL_STORES)]
        store: String,
    },
    /// Poll the message endpoint until interrupted
    Poll {
        /// Stop after this many responses
        #[arg(long)]
        ticks: Option<usize>,
    },
}

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    let config = match load_config(&cli.config) {
        Ok(cfg) => cfg,
        Err(ConfigError::Io(e)) if e.kind() == std::io::ErrorKind::NotFound => {
            warn!("Config {} not found, using defaults", cli.config);
            AppConfig::default()
        }
        Err(e) => {
            error!("Config load error: {}", e);
            return;
        }
    };
    let config = apply_env(config, std::env::var("NODE_ENV").ok());

    let client = match http_client() {
        Ok(c) => c,
        Err(e) => {
            error!("Failed to build HTTP client: {}", e);
            return;
        }
    };

    match cli.command {
        Commands::Search { query, term, store, max_price, json } => {
            let query = match query.as_deref() {
                Some(q) if q.contains('?') => SearchQuery::from_url(q),
                Some(q) => SearchQuery::parse(q),
                None => SearchQuery::default(),
            };
            let mut page = SearchPage::new(&query);
            page.set_price(config.default_price_ceiling);
            page.load(&build_sources(&config.sources, &client), &config.placeholder_image)
                .await;

            if let Some(term) = term {
                page.set_search_term(&term);
            }
            if let Some(store) = store {
                if !STORE_OPTIONS.contains(&store.as_str()) {
                    warn!("Store '{}' is not one of {:?}", store, STORE_OPTIONS);
                }
                page.set_store(&store);
            }
            if let Some(price) = max_price {
                page.set_price(price);
            }

            print_results(&page, json);
        }
        Commands::Show { id } => {
            let mut page = SearchPage::new(&SearchQuery::default());
            page.load(&build_sources(&config.sources, &client), &config.placeholder_image)
                .await;
            match page.find(&id) {
                Some(product) => {
                    let history = history::dummy_history(&mut rand::rng());
                    print!("{}", ProductCard::new(product).detail(&history));
                }
                None => warn!("No product with id {}", id),
            }
        }
        Commands::Landing { term, store } => {
            println!("{}", SearchBar::new(&term, &store).redirect_url());
        }
        Commands::Poll { ticks } => {
            let routes = ApiRoutes::new(config.environment, &config.base_url);
            let url = routes.resolve(MESSAGE_PATH);
            info!("Polling {} every {}s", url, config.poll_interval_seconds);

            let mut handle = ApiPoller::new(client, url, Duration::from_secs(config.poll_interval_seconds.max(1))).spawn();
            let mut seen = 0;
            loop {
                tokio::select! {
                    Some(status) = handle.next_update() => {
                        println!("{}", status.display());
                        seen += 1;
                        if ticks.is_some_and(|n| seen >= n) {
                            break;
                        }
                    }
                    _ = tokio::signal::ctrl_c() => {
                        info!("Received SIGINT, stopping poller.");
                        break;
                    }
                }
            }
            info!("Last status: {}", handle.status().display());
        }
    }
}

fn print_results(page: &SearchPage, json: bool) {
    let filtered = page.filtered();
    if json {
        match serde_json::to_string_pretty(filtered) {
            Ok(out) => println!("{}", out),
            Err(e) => error!("Failed to serialize results: {}", e),
        }
        return;
    }

    let filters = page.filters();
    println!(
        "Search Results ({} of {}) | up to {} KR | {} | \"{}\"",
        filtered.len(),
        page.products().len(),
        filters.price_ceiling,
        filters.store,
        filters.search_term
    );
    for product in filtered {
        println!("[{}] {}", product.id, ProductCard::new(product).summary());
    }
}
