use anyhow::{Context, Result};
use clap::{Parser, Subcommand, ValueEnum};
use dataset_search::config::{find_config_file, load_config, SearchConfig};
use dataset_search::models::SearchQuery;
use dataset_search::render::{MemoryTarget, RenderTarget};
use dataset_search::search::{SearchOutcome, Searcher};
use dataset_search::transport::HttpTransport;
use dataset_search::ui::{print_error, ConsoleTarget};
use dataset_search::utils::Location;
use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// Dataset Search - Query a Solr dataset catalogue and render paginated results
#[derive(Parser, Debug)]
#[command(name = "dataset-search")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Query a Solr dataset catalogue and render paginated results", long_about = None)]
#[command(propagate_version = true)]
struct Cli {
    /// Enable verbose logging (can be used multiple times for more verbosity: -v, -vv)
    #[arg(long, short, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    /// Suppress non-error output (the query URL region is not printed)
    #[arg(long, short, global = true)]
    quiet: bool,

    /// Output format
    #[arg(long, short, value_enum, global = true, default_value_t = OutputFormat::Plain)]
    output: OutputFormat,

    /// Configuration file path
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Request timeout in seconds
    #[arg(long, global = true, default_value_t = 30)]
    timeout: u64,

    #[command(subcommand)]
    command: Commands,
}

/// Output format for rendered regions
#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
enum OutputFormat {
    /// Print each region's markup under a header
    Plain,
    /// Print all regions and form state as one JSON object
    Json,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Search the catalogue
    #[command(alias = "s")]
    Search {
        /// Free-text query
        #[arg(default_value = "")]
        query: String,

        /// Core area (keyword facet) to filter on; "any" for none
        #[arg(long, short)]
        core_area: Option<String>,

        /// Offset of the first result
        #[arg(long, short, default_value_t = 0)]
        start: u64,

        /// Page URL used as the base for page links
        #[arg(long, default_value = "search.html")]
        page_url: String,
    },

    /// Load a search page URL: read q/start/coreArea from it and search
    Open {
        /// Page URL, e.g. "search.html?q=soil&start=10&coreArea=Vegetation"
        page_url: String,

        /// Values offered by the page's category selector (repeatable)
        #[arg(long = "core-area-option")]
        core_area_options: Vec<String>,
    },

    /// Print the query URL without sending it
    Url {
        /// Free-text query
        #[arg(default_value = "")]
        query: String,

        /// Core area (keyword facet) to filter on
        #[arg(long, short)]
        core_area: Option<String>,

        /// Offset of the first result
        #[arg(long, short, default_value_t = 0)]
        start: u64,
    },

    /// Print the effective configuration as TOML
    Config,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize tracing based on verbosity
    let log_level = match cli.verbose {
        0 => "warn",
        1 => "debug",
        _ => "trace",
    };

    let env_filter = if cli.quiet { "error" } else { log_level };

    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(
            std::env::var("RUST_LOG").unwrap_or_else(|_| format!("dataset_search={}", env_filter)),
        ))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    // Load configuration from file if specified or found in default locations
    let config_path = cli.config.clone().or_else(find_config_file);
    if let Some(path) = &config_path {
        tracing::info!("Using config file: {}", path.display());
    }
    let config = Arc::new(
        load_config(config_path.as_deref()).context("Failed to load configuration")?,
    );

    let transport = Arc::new(
        HttpTransport::with_timeout(Duration::from_secs(cli.timeout))
            .context("Failed to create HTTP client")?,
    );

    match cli.command {
        Commands::Search {
            ref query,
            ref core_area,
            start,
            ref page_url,
        } => {
            let mut search_query = SearchQuery::new(query.trim()).start_offset(start);
            search_query.core_area = core_area.clone();
            let location = Location::new(page_url.as_str());

            run(&cli, config, transport, Vec::new(), |searcher| async move {
                searcher.search(location.href(), &search_query).await
            })
            .await
        }
        Commands::Open {
            ref page_url,
            ref core_area_options,
        } => {
            let location = Location::new(page_url.as_str());

            run(
                &cli,
                config,
                transport,
                core_area_options.clone(),
                |searcher| async move { searcher.bootstrap(&location).await },
            )
            .await
        }
        Commands::Url {
            ref query,
            ref core_area,
            start,
        } => {
            let mut search_query = SearchQuery::new(query.trim()).start_offset(start);
            search_query.core_area = core_area.clone();
            let searcher = Searcher::new(config, transport, Arc::new(MemoryTarget::new()))?;
            println!("{}", searcher.build_query_url(&search_query));
            Ok(())
        }
        Commands::Config => {
            print!("{}", config.to_toml()?);
            Ok(())
        }
    }
}

/// Build a searcher for the selected output format and run `op` with it.
async fn run<F, Fut>(
    cli: &Cli,
    config: Arc<SearchConfig>,
    transport: Arc<HttpTransport>,
    category_options: Vec<String>,
    op: F,
) -> Result<()>
where
    F: FnOnce(Arc<Searcher<HttpTransport, DynTarget>>) -> Fut,
    Fut: std::future::Future<Output = Result<SearchOutcome, dataset_search::SearchError>>,
{
    let target = match cli.output {
        OutputFormat::Plain => {
            let mut console = ConsoleTarget::new(category_options);
            if cli.quiet {
                console = console.hide(config.elements.url.clone());
            }
            DynTarget::Console(console)
        }
        OutputFormat::Json => {
            DynTarget::Memory(MemoryTarget::with_category_options(category_options))
        }
    };

    let target = Arc::new(target);
    let searcher = Arc::new(Searcher::new(config, transport, Arc::clone(&target))?);

    let result = op(Arc::clone(&searcher)).await;

    if let DynTarget::Memory(memory) = target.as_ref() {
        println!("{}", serde_json::to_string_pretty(&memory.snapshot())?);
    }

    match result {
        Ok(SearchOutcome::Rendered(_)) | Ok(SearchOutcome::Superseded) => Ok(()),
        Err(e) => {
            if cli.output == OutputFormat::Json {
                print_error(&e.to_string());
            }
            Err(e.into())
        }
    }
}

/// Render target chosen at runtime from `--output`
enum DynTarget {
    Console(ConsoleTarget),
    Memory(MemoryTarget),
}

impl RenderTarget for DynTarget {
    fn set_content(&self, element_id: &str, html: &str) {
        match self {
            DynTarget::Console(t) => t.set_content(element_id, html),
            DynTarget::Memory(t) => t.set_content(element_id, html),
        }
    }

    fn set_busy(&self, busy: bool) {
        match self {
            DynTarget::Console(t) => t.set_busy(busy),
            DynTarget::Memory(t) => t.set_busy(busy),
        }
    }

    fn alert(&self, message: &str) {
        match self {
            DynTarget::Console(t) => t.alert(message),
            DynTarget::Memory(t) => t.alert(message),
        }
    }

    fn set_query_field(&self, value: &str) {
        match self {
            DynTarget::Console(t) => t.set_query_field(value),
            DynTarget::Memory(t) => t.set_query_field(value),
        }
    }

    fn category_options(&self) -> Vec<String> {
        match self {
            DynTarget::Console(t) => t.category_options(),
            DynTarget::Memory(t) => t.category_options(),
        }
    }

    fn select_category(&self, index: Option<usize>) {
        match self {
            DynTarget::Console(t) => t.select_category(index),
            DynTarget::Memory(t) => t.select_category(index),
        }
    }
}
