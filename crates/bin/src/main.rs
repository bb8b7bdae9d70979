//! finview CLI binary.
//!
//! Searches companies and shows, copies or downloads their financial
//! statements.

mod render;

use clap::{Parser, Subcommand, ValueEnum};
use finview::{
    ApiClient, CommandClipboard, CompanyDirectory, DEFAULT_BASE_URL, DirectoryDownloads,
    DirectoryLoader, StatementPanel, StatementSelection, StatementView, StatementViewer,
    ViewState, filter_companies,
};
use std::path::PathBuf;
use std::process;
use std::sync::Arc;
use std::time::Duration;
use tracing::debug;
use tracing_subscriber::prelude::*;

type CliResult<T> = Result<T, Box<dyn std::error::Error>>;

#[derive(Parser)]
#[command(name = "finview")]
#[command(about = "View company financial statements", long_about = None)]
#[command(version)]
struct Cli {
    /// Statements backend address
    #[arg(long, global = true, env = "FINVIEW_API_URL", default_value = DEFAULT_BASE_URL)]
    api_url: String,

    /// Company directory file (SEC company_tickers.json layout); fetched from
    /// the SEC when absent
    #[arg(long, global = true, env = "FINVIEW_DIRECTORY")]
    directory: Option<PathBuf>,

    /// User agent sent to the SEC: "AppName/Version (contact@email.com)"
    #[arg(
        long,
        global = true,
        env = "FINVIEW_USER_AGENT",
        default_value = concat!("finview/", env!("CARGO_PKG_VERSION"))
    )]
    user_agent: String,

    /// Request timeout in seconds for the statements backend
    #[arg(long, global = true)]
    timeout: Option<u64>,

    /// Log debug output
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

/// Company to look up.
#[derive(clap::Args)]
struct Target {
    /// Ticker, company name or part of either
    query: String,

    /// Statements to include (all, is, bs, cf)
    #[arg(long = "type", default_value = "all")]
    selection: StatementSelection,

    /// Send the query to the backend as given instead of resolving it to a CIK
    #[arg(long)]
    raw: bool,
}

#[derive(Clone, Copy, ValueEnum)]
enum Format {
    Text,
    Json,
    /// Long-format data frame (metric, period, value)
    Frame,
}

#[derive(Subcommand)]
enum Commands {
    /// Search the company directory
    Search {
        /// Ticker, company name or part of either
        query: String,

        /// Maximum number of results
        #[arg(long, default_value_t = finview::search::DEFAULT_SUGGESTION_LIMIT)]
        limit: usize,
    },

    /// Show a company's statements
    Show {
        #[command(flatten)]
        target: Target,

        /// Output format
        #[arg(long, value_enum, default_value = "text")]
        format: Format,
    },

    /// Save a company's statements as CSV files
    Export {
        #[command(flatten)]
        target: Target,

        /// Directory the files are written to
        #[arg(long, default_value = ".")]
        out: PathBuf,
    },

    /// Copy one statement to the system clipboard
    Copy {
        #[command(flatten)]
        target: Target,
    },
}

#[tokio::main]
async fn main() {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    if let Err(e) = run(cli).await {
        eprintln!("Error: {e}");
        process::exit(1);
    }
}

fn init_logging(verbose: bool) {
    let default = if verbose { "finview=debug" } else { "finview=info" };
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| default.into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}

async fn run(cli: Cli) -> CliResult<()> {
    match &cli.command {
        Commands::Search { query, limit } => {
            let directory = load_directory(&cli).await?;
            let matches = filter_companies(directory.entries(), query, *limit);
            if matches.is_empty() {
                println!("No companies match \"{query}\"");
            }
            for entry in matches {
                println!("{}", render::render_entry(entry));
            }
        }
        Commands::Show { target, format } => {
            let view = open(&cli, target).await?;
            match format {
                Format::Text => render::print_view(&view),
                Format::Json => println!("{}", render::view_json(&view)?),
                Format::Frame => println!("{}", render::render_frames(&view)?),
            }
        }
        Commands::Export { target, out } => {
            let view = open(&cli, target).await?;
            let panels = selected_panels(&view)?;
            let downloads = DirectoryDownloads::new(out);
            for panel in &panels {
                let note = view.download(panel, &downloads).await;
                if !note.is_success() {
                    return Err(note.message.into());
                }
                println!("{note}");
            }
        }
        Commands::Copy { target } => {
            let view = open(&cli, target).await?;
            let panels = selected_panels(&view)?;
            let panel = &panels[0];
            if panels.len() > 1 {
                debug!(statements = panels.len(), "Copying the first selected statement");
            }
            let clipboard = CommandClipboard::detect();
            debug!(clipboard = ?clipboard, "Using system clipboard");
            let note = view.copy(panel, &clipboard).await;
            if !note.is_success() {
                return Err(note.message.into());
            }
            println!("{note}");
        }
    }

    Ok(())
}

/// Panels of the view's selection; an empty selection is an error.
fn selected_panels(view: &StatementView) -> CliResult<Vec<StatementPanel<'_>>> {
    let panels = view.panels();
    if panels.is_empty() {
        return Err(format!("No {} for {}", view.selection(), view.ticker()).into());
    }
    Ok(panels)
}

/// Loads the company directory from the configured file or the SEC.
async fn load_directory(cli: &Cli) -> finview::Result<CompanyDirectory> {
    match &cli.directory {
        Some(path) => DirectoryLoader::load_file(path).await,
        None => DirectoryLoader::new(&cli.user_agent)?.fetch_sec().await,
    }
}

/// Resolves a target and fetches its statements.
async fn open(cli: &Cli, target: &Target) -> CliResult<StatementView> {
    let directory = if target.raw {
        CompanyDirectory::default()
    } else {
        load_directory(cli).await?
    };

    let client = match cli.timeout {
        Some(secs) => ApiClient::with_timeout(&cli.api_url, Duration::from_secs(secs))?,
        None => ApiClient::new(&cli.api_url),
    };
    let viewer = StatementViewer::new(Arc::new(client), Arc::new(directory));

    let navigation = if target.raw {
        viewer.navigate_raw(&target.query)
    } else {
        viewer
            .navigate(&target.query)
            .ok_or("Enter a ticker or company name")?
    };
    debug!(identifier = %navigation.identifier, ticker = %navigation.ticker, "Resolved company");

    match viewer.load(navigation).await {
        Some(ViewState::Loaded(mut view)) => {
            view.select(target.selection);
            Ok(view)
        }
        Some(ViewState::Failed { error, .. }) => Err(error.into()),
        Some(state) => Err(state.message().unwrap_or_default().into()),
        None => Err("Navigation superseded".into()),
    }
}
