use std::path::PathBuf;

use clap::{builder::ArgAction, Parser, Subcommand};
use console::style;
use errors::DeckCliError;
use paperdeck::{
  repository::MockRepository,
  route::{self, Location},
  screens::{categories::Categories, dashboard::Dashboard, papers::PapersScreen, search::SearchScreen},
  DeckConfig, Subject,
};
use terminal::{ConsoleNotifier, BOOKS, LOOKING_GLASS, PAPER, WARNING};
use tracing::{debug, trace};
use tracing_subscriber::EnvFilter;

pub mod browse;
pub mod errors;
pub mod terminal;

#[derive(Parser)]
#[command(author, version, about = "Browse arXiv papers from the terminal")]
struct Cli {
  /// Verbose mode (-v, -vv, -vvv)
  #[arg(
        short,
        long,
        action = ArgAction::Count,
        global = true,
        help = "Increase logging verbosity"
    )]
  verbose: u8,

  /// Path to a JSON configuration file
  #[arg(long, short, global = true)]
  config: Option<PathBuf>,

  #[command(subcommand)]
  command: Commands,
}

#[derive(Subcommand)]
enum Commands {
  /// Show repository statistics and the latest papers
  Dashboard,
  /// List the popular categories
  Categories {
    /// Only show categories whose code or name contains this text
    #[arg(long, short)]
    filter: Option<String>,
  },
  /// List papers page by page
  Papers {
    /// Category code to list (e.g. cs.AI)
    #[arg(long)]
    category: Option<String>,
    /// Subject to search in ("All Subjects", "Computer Science", "Physics", ...)
    #[arg(long)]
    subject:  Option<Subject>,
    /// Free-text search term
    #[arg(long)]
    search:   Option<String>,
    /// Number of pages to load
    #[arg(long, default_value_t = 1)]
    pages:    usize,
    /// Print the loaded papers as JSON
    #[arg(long)]
    json:     bool,
  },
  /// Search papers by title, abstract or author
  Search {
    /// Search term
    term:    String,
    /// Subject to search in
    #[arg(long)]
    subject: Option<Subject>,
    /// Print the results as JSON
    #[arg(long)]
    json:    bool,
  },
  /// Browse interactively
  Browse,
}

/// Setup logging with the specified verbosity level
fn setup_logging(verbosity: u8) {
  let filter = match verbosity {
    0 => "warn",
    1 => "info",
    2 => "debug",
    _ => "trace",
  };

  let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(filter));

  tracing_subscriber::fmt()
    .with_env_filter(filter)
    .with_writer(std::io::stderr)
    .with_file(true)
    .with_line_number(true)
    .with_thread_ids(true)
    .with_target(true)
    .init();
}

/// Load the configuration given on the command line, or the user's default one
fn load_config(path: Option<PathBuf>) -> Result<DeckConfig, DeckCliError> {
  let config = match path {
    Some(path) => DeckConfig::load(path)?,
    None => DeckConfig::load_or_default(DeckConfig::default_path())?,
  };
  trace!("Using configuration: {config:?}");
  Ok(config)
}

#[tokio::main]
async fn main() -> Result<(), DeckCliError> {
  let cli = Cli::parse();
  setup_logging(cli.verbose);

  let config = load_config(cli.config)?;
  let repo = MockRepository::from_config(&config);
  let mut notifier = ConsoleNotifier;

  match cli.command {
    Commands::Dashboard => {
      let mut dashboard = Dashboard::new(config.dashboard_count);
      dashboard.load(&repo, &mut notifier).await;

      if let Some(stats) = &dashboard.stats {
        terminal::print_stats(stats);
      }
      if !dashboard.papers.is_empty() {
        println!("\n{} Latest papers:", style(PAPER).green());
        terminal::print_papers(&dashboard.papers, 1);
      }
      Ok(())
    },

    Commands::Categories { filter } => {
      let mut screen = Categories::new();
      if let Some(filter) = &filter {
        screen.on_search_input(filter);
      }

      let categories = screen.filtered();
      if categories.is_empty() {
        println!(
          "{} No categories match: {}",
          style(WARNING).yellow(),
          style(filter.unwrap_or_default()).yellow()
        );
      } else {
        println!("{} Categories:", style(BOOKS).cyan());
        categories.into_iter().for_each(terminal::print_category);
      }
      Ok(())
    },

    Commands::Papers { category, subject, search, pages, json } => {
      let mut location = Location::new(route::PAPERS);
      if let Some(category) = category {
        location = location.with_param(route::PARAM_CATEGORY, category);
      }
      if let Some(subject) = subject {
        location = location.with_param(route::PARAM_SUBJECT, subject.label());
      }
      if let Some(search) = search {
        location = location.with_param(route::PARAM_SEARCH_TERM, search);
      }
      debug!("Opening {location}");

      let mut screen = PapersScreen::from_params(&location.params, config.page_limit)?;
      if !json {
        println!("{} Loading {}", style(LOOKING_GLASS).cyan(), style(&location).yellow());
      }
      screen.load(&repo, &mut notifier).await;
      for _ in 1..pages {
        if screen.reach_bottom(&repo).await.is_none() {
          break;
        }
      }

      let state = screen.state();
      if json {
        println!("{}", serde_json::to_string_pretty(&state.items)?);
      } else if state.items.is_empty() {
        println!("{} No papers found", style(WARNING).yellow());
      } else {
        terminal::print_papers(&state.items, 1);
        println!(
          "\n{} {} papers, page {}{}",
          style(PAPER).green(),
          style(state.items.len()).yellow(),
          style(state.current_page).yellow(),
          if state.has_more { ", more available" } else { "" }
        );
      }
      Ok(())
    },

    Commands::Search { term, subject, json } => {
      let mut screen = SearchScreen::new(config.search_limit)?;
      screen.on_search_input(&term);
      if let Some(subject) = subject {
        screen.select_subject(subject);
      }

      if !json {
        println!("{} Searching for: {}", style(LOOKING_GLASS).cyan(), style(&term).yellow());
      }
      screen.submit(&repo, &mut notifier).await;

      if json {
        println!("{}", serde_json::to_string_pretty(&screen.papers)?);
      } else if screen.has_searched && screen.papers.is_empty() {
        println!("{} No papers found matching: {}", style(WARNING).yellow(), style(&term).yellow());
      } else if screen.has_searched {
        println!("\n{} Found {} papers:", style(PAPER).green(), style(screen.papers.len()).yellow());
        terminal::print_papers(&screen.papers, 1);
      }
      Ok(())
    },

    Commands::Browse => browse::run(&repo, &config).await,
  }
}
