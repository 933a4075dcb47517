//! Interactive browsing.
//!
//! Pages are kept on a [`RouteStack`]; each page builds its screen from the location's
//! parameters and drives it with prompts until the user navigates elsewhere.

use std::fmt;

use console::style;
use dialoguer::{Input, Select};
use paperdeck::{
  host::{Navigator, NoticeKind, Notifier, RouteStack},
  pagination::PageState,
  route::{self, Location},
  screens::{
    card::PaperCard, categories::Categories, dashboard::Dashboard, papers::PapersScreen,
    search::SearchScreen,
  },
  DeckConfig, Paper, PaperRepository, Subject, POPULAR_CATEGORIES,
};
use tracing::{debug, warn};

use crate::{
  errors::DeckCliError,
  terminal::{self, ConsoleNotifier, TerminalClipboard, PAPER, SUCCESS, WARNING},
};

/// Something the user can do on the papers page.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum PapersAction {
  LoadMore,
  NewSearch,
  ChangeSubject,
  ReadAbstract,
  CopyLink,
  Refresh,
  Back,
}

impl PapersAction {
  /// The actions that apply to the list in its current state.
  fn offered(state: &PageState, has_category: bool) -> Vec<Self> {
    let mut actions = Vec::new();
    if state.has_more {
      actions.push(PapersAction::LoadMore);
    }
    if !has_category {
      actions.extend([PapersAction::NewSearch, PapersAction::ChangeSubject]);
    }
    if !state.items.is_empty() {
      actions.extend([PapersAction::ReadAbstract, PapersAction::CopyLink]);
    }
    actions.extend([PapersAction::Refresh, PapersAction::Back]);
    actions
  }
}

impl fmt::Display for PapersAction {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.write_str(match self {
      PapersAction::LoadMore => "Load more papers",
      PapersAction::NewSearch => "Search",
      PapersAction::ChangeSubject => "Change subject",
      PapersAction::ReadAbstract => "Read an abstract",
      PapersAction::CopyLink => "Copy a paper link",
      PapersAction::Refresh => "Refresh",
      PapersAction::Back => "Back",
    })
  }
}

/// Something the user can do on the search page.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum SearchAction {
  NewSearch,
  ChangeSubject,
  ReadAbstract,
  CopyLink,
  Clear,
  Back,
}

impl SearchAction {
  /// The actions that apply to the form, given whether it shows results.
  fn offered(has_results: bool) -> Vec<Self> {
    let mut actions = vec![SearchAction::NewSearch, SearchAction::ChangeSubject];
    if has_results {
      actions.extend([SearchAction::ReadAbstract, SearchAction::CopyLink]);
    }
    actions.extend([SearchAction::Clear, SearchAction::Back]);
    actions
  }
}

impl fmt::Display for SearchAction {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.write_str(match self {
      SearchAction::NewSearch => "Search",
      SearchAction::ChangeSubject => "Change subject",
      SearchAction::ReadAbstract => "Read an abstract",
      SearchAction::CopyLink => "Copy a paper link",
      SearchAction::Clear => "Clear",
      SearchAction::Back => "Back",
    })
  }
}

/// Runs the interactive browser until the user quits from the dashboard.
pub async fn run(repo: &dyn PaperRepository, config: &DeckConfig) -> Result<(), DeckCliError> {
  let mut nav = RouteStack::new();
  let mut notifier = ConsoleNotifier;

  loop {
    let location = nav.current().clone();
    debug!("Showing {location}");

    match location.path.as_str() {
      route::DASHBOARD => {
        if !dashboard(repo, config, &mut nav, &mut notifier).await? {
          break;
        }
      },
      route::CATEGORIES => categories(&mut nav)?,
      route::PAPERS => papers(&location, repo, config, &mut nav, &mut notifier).await?,
      route::SEARCH => search(&location, repo, config, &mut nav, &mut notifier).await?,
      other => {
        warn!("No page at {other}");
        if nav.depth() == 1 {
          break;
        }
        nav.navigate_back();
      },
    }
  }

  println!("{} Bye!", style(SUCCESS).green());
  Ok(())
}

/// Shows the dashboard. Returns `false` when the user quits.
async fn dashboard(
  repo: &dyn PaperRepository,
  config: &DeckConfig,
  nav: &mut RouteStack,
  notifier: &mut ConsoleNotifier,
) -> Result<bool, DeckCliError> {
  let mut screen = Dashboard::new(config.dashboard_count);
  screen.load(repo, notifier).await;

  loop {
    if let Some(stats) = &screen.stats {
      terminal::print_stats(stats);
    }
    if !screen.papers.is_empty() {
      println!("\n{} Latest papers:", style(PAPER).green());
      terminal::print_papers(&screen.papers, 1);
    }

    let choice = Select::new()
      .with_prompt("What would you like to do?")
      .items(&["Browse categories", "Search papers", "Open a category", "Refresh", "Quit"])
      .default(0)
      .interact()?;

    match choice {
      0 => screen.open_page("categories", nav),
      1 => screen.open_page("search", nav),
      2 => {
        let codes: Vec<String> =
          POPULAR_CATEGORIES.iter().map(|c| format!("{:<16} {}", c.code, c.name)).collect();
        let index = Select::new().with_prompt("Category").items(&codes).default(0).interact()?;
        screen.open_category(&POPULAR_CATEGORIES[index].code, nav);
      },
      3 => {
        screen.refresh(repo, notifier).await;
        continue;
      },
      _ => return Ok(false),
    }
    return Ok(true);
  }
}

/// Shows the category list behind a filter prompt.
fn categories(nav: &mut RouteStack) -> Result<(), DeckCliError> {
  let mut screen = Categories::new();
  let filter: String = Input::new()
    .with_prompt("Filter categories (empty for all)")
    .allow_empty(true)
    .interact_text()?;
  screen.on_search_input(&filter);

  let filtered = screen.filtered();
  if filtered.is_empty() {
    println!("{} No categories match: {}", style(WARNING).yellow(), style(&filter).yellow());
  }
  let mut items: Vec<String> =
    filtered.iter().map(|c| format!("{:<16} {}", c.code, c.name)).collect();
  items.push("Back".to_string());

  let choice = Select::new().with_prompt("Category").items(&items).default(0).interact()?;
  match filtered.get(choice) {
    Some(category) => screen.open_category(&category.code, nav),
    None => screen.back(nav),
  }
  Ok(())
}

/// Shows a paged paper list until the user leaves it.
async fn papers(
  location: &Location,
  repo: &dyn PaperRepository,
  config: &DeckConfig,
  nav: &mut RouteStack,
  notifier: &mut ConsoleNotifier,
) -> Result<(), DeckCliError> {
  let mut screen = PapersScreen::from_params(&location.params, config.page_limit)?;
  screen.load(repo, notifier).await;
  // Number of papers already printed
  let mut shown = 0;

  loop {
    let state = screen.state();
    let fresh = state.items.get(shown..).unwrap_or_default();
    terminal::print_papers(fresh, shown + 1);
    shown = state.items.len();
    if state.items.is_empty() {
      println!("{} No papers found", style(WARNING).yellow());
    }

    let actions = PapersAction::offered(state, screen.category.is_some());
    match choose(&actions)? {
      PapersAction::LoadMore => {
        screen.reach_bottom(repo).await;
      },
      PapersAction::NewSearch => {
        let term: String = Input::new()
          .with_prompt("Search")
          .with_initial_text(screen.search_term.clone())
          .allow_empty(true)
          .interact_text()?;
        screen.on_search_input(&term);
        screen.submit_search(repo, notifier).await;
        shown = 0;
      },
      PapersAction::ChangeSubject => {
        let subject = choose_subject(screen.subject)?;
        screen.change_subject(subject, repo, notifier).await;
        shown = 0;
      },
      PapersAction::ReadAbstract => read_abstract(&screen.state().items)?,
      PapersAction::CopyLink => copy_link(&screen.state().items, notifier)?,
      PapersAction::Refresh => {
        screen.pull_down_refresh(repo, notifier).await;
        shown = 0;
      },
      PapersAction::Back => {
        screen.back(nav);
        return Ok(());
      },
    }
  }
}

/// Shows the search form until the user leaves it.
async fn search(
  location: &Location,
  repo: &dyn PaperRepository,
  config: &DeckConfig,
  nav: &mut RouteStack,
  notifier: &mut ConsoleNotifier,
) -> Result<(), DeckCliError> {
  let mut screen = SearchScreen::new(config.search_limit)?;
  screen.enter(&location.params, repo, notifier).await;
  if !screen.has_searched {
    prompt_search(&mut screen, repo, notifier).await?;
  }

  loop {
    if screen.has_searched {
      if screen.papers.is_empty() {
        println!(
          "{} No papers found matching: {}",
          style(WARNING).yellow(),
          style(&screen.search_term).yellow()
        );
      } else {
        println!(
          "\n{} Found {} papers ({}):",
          style(PAPER).green(),
          style(screen.papers.len()).yellow(),
          style(screen.subject).cyan()
        );
        terminal::print_papers(&screen.papers, 1);
      }
    }

    let actions = SearchAction::offered(!screen.papers.is_empty());
    match choose(&actions)? {
      SearchAction::NewSearch => prompt_search(&mut screen, repo, notifier).await?,
      SearchAction::ChangeSubject => {
        let subject = choose_subject(screen.subject)?;
        screen.select_subject(subject);
        if screen.has_searched {
          screen.submit(repo, notifier).await;
        }
      },
      SearchAction::ReadAbstract => read_abstract(&screen.papers)?,
      SearchAction::CopyLink => copy_link(&screen.papers, notifier)?,
      SearchAction::Clear => screen.clear(),
      SearchAction::Back => {
        screen.back(nav);
        return Ok(());
      },
    }
  }
}

/// Asks for a search term and submits it.
async fn prompt_search(
  screen: &mut SearchScreen,
  repo: &dyn PaperRepository,
  notifier: &mut ConsoleNotifier,
) -> Result<(), DeckCliError> {
  let term: String = Input::new()
    .with_prompt("Search")
    .with_initial_text(screen.search_term.clone())
    .allow_empty(true)
    .interact_text()?;
  screen.on_search_input(&term);
  screen.submit(repo, notifier).await;
  Ok(())
}

fn choose<A: Copy + fmt::Display>(actions: &[A]) -> Result<A, DeckCliError> {
  let index = Select::new().with_prompt("What next?").items(actions).default(0).interact()?;
  Ok(actions[index])
}

fn choose_subject(current: Subject) -> Result<Subject, DeckCliError> {
  let labels: Vec<&str> = Subject::CHOICES.iter().map(|subject| subject.label()).collect();
  let default = Subject::CHOICES.iter().position(|subject| *subject == current).unwrap_or(0);
  let index = Select::new().with_prompt("Subject").items(&labels).default(default).interact()?;
  Ok(Subject::CHOICES[index])
}

/// Asks for a paper number from the printed list.
fn choose_paper(papers: &[Paper]) -> Result<Option<&Paper>, DeckCliError> {
  let number: usize = Input::new()
    .with_prompt(format!("Paper number (1-{})", papers.len()))
    .interact_text()?;
  let paper = number.checked_sub(1).and_then(|index| papers.get(index));
  if paper.is_none() {
    println!("{} No paper number {number}", style(WARNING).yellow());
  }
  Ok(paper)
}

fn read_abstract(papers: &[Paper]) -> Result<(), DeckCliError> {
  if let Some(paper) = choose_paper(papers)? {
    let mut card = PaperCard::new(paper);
    card.toggle_abstract();
    println!("\n{}", style(&paper.title).white().bold());
    println!("{}", card.abstract_text());
  }
  Ok(())
}

fn copy_link(papers: &[Paper], notifier: &mut dyn Notifier) -> Result<(), DeckCliError> {
  if let Some(paper) = choose_paper(papers)? {
    if let Err(e) = PaperCard::new(paper).copy_link(&mut TerminalClipboard, notifier) {
      notifier.notify(&format!("Could not copy link: {e}"), NoticeKind::Error);
    }
  }
  Ok(())
}
