use clap::{Parser, Subcommand, ValueEnum};
use dialoguer::Input;
use std::process;
use tracing_subscriber::EnvFilter;
use tvmaze_browse::{
    BrowseError, CacheKind, DEFAULT_BASE_URL, DefaultController, Page, Redirect, Renderer, Route,
    SearchForm, Settings, SummaryPolicy, TextRenderer, open_controller,
};

/// Search TVMaze for tv shows and browse show details
#[derive(Debug, Parser)]
#[command(version, about)]
struct Cli {
    #[command(subcommand)]
    command: Command,

    /// Base URL of the TVMaze API
    #[arg(long, default_value = DEFAULT_BASE_URL)]
    api_url: String,

    /// Where show details are cached
    #[arg(long, value_enum, default_value_t = CacheArg::File)]
    cache: CacheArg,

    /// Display show summaries as the HTML TVMaze provides, without stripping markup
    #[arg(long)]
    trust_summary_html: bool,

    /// Increase log verbosity (-v debug, -vv trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Search shows by keywords, asking for them if none are given
    Search { keywords: Option<String> },
    /// Show details and cast of a show
    Show { id: u64 },
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum CacheArg {
    File,
    Memory,
}

impl From<CacheArg> for CacheKind {
    fn from(arg: CacheArg) -> Self {
        match arg {
            CacheArg::File => CacheKind::File,
            CacheArg::Memory => CacheKind::Memory,
        }
    }
}

fn init_tracing(verbose: u8) {
    let filter = match verbose {
        0 => EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        1 => EnvFilter::new("tvmaze_browse=debug"),
        _ => EnvFilter::new("tvmaze_browse=trace"),
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

/// Asks for keywords on the terminal and submits the search form
fn prompt_search_form() -> Result<Redirect, BrowseError> {
    let form = SearchForm::build(None);
    let keywords: String = Input::new()
        .with_prompt(SearchForm::FIELD_LABEL)
        .allow_empty(true)
        .interact_text()?;

    Ok(form.submit(&keywords))
}

/// Resolves a route to the page it displays, printing the show title first
fn visit(controller: &DefaultController, route: &Route) -> Result<Page, BrowseError> {
    tracing::debug!(route = route.name(), path = %route, "visiting");

    match route {
        Route::Search { keywords } => Ok(Page::Search(controller.index(keywords.as_deref())?)),
        Route::Show { id } => {
            let title = controller.show_title(*id)?;
            tracing::debug!(%title, "page title");
            Ok(Page::Show(controller.show(*id)?))
        }
    }
}

fn run(cli: Cli) -> Result<String, BrowseError> {
    let settings = Settings {
        base_url: cli.api_url,
        cache: cli.cache.into(),
        summary_policy: if cli.trust_summary_html {
            SummaryPolicy::TrustUpstream
        } else {
            SummaryPolicy::PlainText
        },
        ..Settings::default()
    };
    let controller = open_controller(&settings)?;

    let route = match cli.command {
        Command::Search { keywords: None } => prompt_search_form()?.route,
        Command::Search { keywords } => Route::Search { keywords },
        Command::Show { id } => Route::Show { id },
    };

    let page = visit(&controller, &route)?;
    Ok(TextRenderer.render(&page))
}

fn main() {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    match run(cli) {
        Ok(output) => println!("{}", output),
        Err(e) => {
            eprintln!("Error: {}", e);
            process::exit(1);
        }
    }
}
