mod catalog;

use clap::{Parser, Subcommand};
use glasswood_catalog::{PriceBand, SortMode, FEATURED_LINEUP_LIMIT};
use glasswood_client::StorefrontClient;
use glasswood_core::ProductLine;
use tracing_subscriber::EnvFilter;

#[derive(Debug, Parser)]
#[command(name = "glasswood")]
#[command(about = "Catalog tooling for the glasswood storefront")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// List the catalog for one product line, filtered and sorted
    List {
        #[arg(long, default_value = "stained-glass")]
        line: ProductLine,
        /// Facet label: "All", "On sale", or a category tag
        #[arg(long)]
        category: Option<String>,
        #[arg(long, default_value = "")]
        search: String,
        /// any, under100, 100to250, 250to500, over500
        #[arg(long, default_value = "any")]
        price: PriceBand,
        /// recent, featured, lowest, highest
        #[arg(long, default_value = "recent")]
        sort: SortMode,
        /// Emit the filtered products as JSON instead of a table
        #[arg(long)]
        json: bool,
    },
    /// Print the sidebar facets and counts for one product line
    Facets {
        #[arg(long, default_value = "stained-glass")]
        line: ProductLine,
    },
    /// Print the featured carousel lineup and its initial window
    Featured {
        #[arg(long, default_value_t = FEATURED_LINEUP_LIMIT)]
        limit: usize,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    dotenvy::dotenv().ok();
    let config = glasswood_core::load_app_config()?;
    let env_filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(config.log_level.clone()))?;
    tracing_subscriber::fmt().with_env_filter(env_filter).init();

    let client = StorefrontClient::new(
        &config.api_base,
        config.http_timeout_secs,
        &config.http_user_agent,
    )?;
    match cli.command {
        Commands::List {
            line,
            category,
            search,
            price,
            sort,
            json,
        } => catalog::list(&client, line, category.as_deref(), &search, price, sort, json).await,
        Commands::Facets { line } => catalog::facets(&client, line).await,
        Commands::Featured { limit } => catalog::featured(&client, limit, &config).await,
    }
}
