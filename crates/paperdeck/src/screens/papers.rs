//! The paged paper list.
//!
//! The list shows either one category or the results of a free-text search, depending on how
//! the screen was opened. The two sources treat the subject differently: category listings
//! never forward it, free-text searches forward it to the repository (omitting "All
//! Subjects"). This mirrors long-standing behavior and is pinned by the tests below.

use super::*;

/// Where the list's papers come from.
#[derive(Debug, Clone, PartialEq, Eq)]
enum PageSource {
  /// Papers of one category; the subject is not forwarded.
  Category(String),
  /// Free-text search results.
  Search {
    /// The search term, possibly empty
    term:    String,
    /// The subject forwarded to the repository
    subject: Subject,
  },
}

impl PageSource {
  /// Fetches one page from `repo`.
  async fn fetch(
    &self,
    repo: &dyn PaperRepository,
    request: PageRequest,
  ) -> Result<Vec<Paper>, DeckError> {
    match self {
      PageSource::Category(code) => repo.fetch(request.limit, Some(code)).await,
      PageSource::Search { term, subject } => {
        let query = Query::new(request.limit)?
          .with_page(request.page)?
          .with_search_term(term.as_str())
          .with_subject(*subject);
        repo.search(&query).await
      },
    }
  }
}

/// View state and actions of the papers screen.
#[derive(Debug)]
pub struct PapersScreen {
  /// Pagination over the listed papers.
  pager:           Paginator,
  /// The search term typed by the user
  pub search_term: String,
  /// The category being listed, if any
  pub category:    Option<String>,
  /// The selected subject
  pub subject:     Subject,
}

impl PapersScreen {
  /// Creates the screen with the given page size and no filters.
  ///
  /// # Errors
  ///
  /// Returns [`DeckError::InvalidLimit`] if `limit` is zero.
  pub fn new(limit: usize) -> Result<Self, DeckError> {
    Ok(Self {
      pager:       Paginator::new(limit)?,
      search_term: String::new(),
      category:    None,
      subject:     Subject::All,
    })
  }

  /// Creates the screen from navigation parameters (`category`, `subject`, `searchTerm`).
  ///
  /// Empty parameters are ignored, and so is an unknown subject label.
  pub fn from_params(params: &BTreeMap<String, String>, limit: usize) -> Result<Self, DeckError> {
    let mut screen = Self::new(limit)?;
    let param = |name: &str| params.get(name).filter(|value| !value.is_empty());

    screen.category = param(route::PARAM_CATEGORY).cloned();
    if let Some(term) = param(route::PARAM_SEARCH_TERM) {
      screen.search_term = term.clone();
    }
    if let Some(label) = param(route::PARAM_SUBJECT) {
      match label.parse() {
        Ok(subject) => screen.subject = subject,
        Err(e) => warn!("Ignoring subject parameter: {e}"),
      }
    }
    Ok(screen)
  }

  /// The list state to render.
  pub fn state(&self) -> &PageState { self.pager.state() }

  /// Loads the first page, replacing what is shown. Used when the screen opens.
  ///
  /// A failure shows an error notification.
  pub async fn load(&mut self, repo: &dyn PaperRepository, notifier: &mut dyn Notifier) {
    let source = self.source();
    let outcome =
      self.pager.refresh(|request| async move { source.fetch(repo, request).await }).await;
    if let Some(LoadOutcome::Failed(_)) = outcome {
      notifier.notify(LOAD_FAILED, NoticeKind::Error);
    }
  }

  /// Loads the next page when the user scrolls to the bottom.
  ///
  /// Does nothing while loading or after the last page. A failure rolls the page cursor back
  /// without notifying; scrolling again retries.
  pub async fn reach_bottom(&mut self, repo: &dyn PaperRepository) -> Option<LoadOutcome> {
    let source = self.source();
    self.pager.load_next(|request| async move { source.fetch(repo, request).await }).await
  }

  /// Clears the list and loads the first page again.
  pub async fn reset_and_load(&mut self, repo: &dyn PaperRepository, notifier: &mut dyn Notifier) {
    self.pager.reset();
    self.load(repo, notifier).await
  }

  /// Pull-to-refresh.
  pub async fn pull_down_refresh(
    &mut self,
    repo: &dyn PaperRepository,
    notifier: &mut dyn Notifier,
  ) {
    self.reset_and_load(repo, notifier).await
  }

  /// Stores new search text without searching.
  pub fn on_search_input(&mut self, input: &str) { self.search_term = input.to_string(); }

  /// Runs the typed search as a new query.
  pub async fn submit_search(&mut self, repo: &dyn PaperRepository, notifier: &mut dyn Notifier) {
    self.reset_and_load(repo, notifier).await
  }

  /// Switches the subject and reloads.
  pub async fn change_subject(
    &mut self,
    subject: Subject,
    repo: &dyn PaperRepository,
    notifier: &mut dyn Notifier,
  ) {
    self.subject = subject;
    self.reset_and_load(repo, notifier).await
  }

  /// Leaves the screen.
  pub fn back(&self, nav: &mut dyn Navigator) { nav.navigate_back(); }

  /// The source the current filters select.
  fn source(&self) -> PageSource {
    match &self.category {
      Some(code) => PageSource::Category(code.clone()),
      None => PageSource::Search { term: self.search_term.clone(), subject: self.subject },
    }
  }
}

#[cfg(test)]
mod tests {
  use tokio_test::assert_ok;

  use super::*;
  use crate::repository::tests::{quiet_mock, Call, ScriptedRepository};

  fn params(pairs: &[(&str, &str)]) -> BTreeMap<String, String> {
    pairs.iter().map(|(k, v)| (k.to_string(), v.to_string())).collect()
  }

  #[test]
  fn test_from_params() {
    let screen = assert_ok!(PapersScreen::from_params(
      &params(&[("category", "cs.CV"), ("subject", "Physics"), ("searchTerm", "vision")]),
      20
    ));
    assert_eq!(screen.category.as_deref(), Some("cs.CV"));
    assert_eq!(screen.subject, Subject::Physics);
    assert_eq!(screen.search_term, "vision");

    let screen =
      assert_ok!(PapersScreen::from_params(&params(&[("category", ""), ("subject", "Art")]), 20));
    assert_eq!(screen.category, None);
    assert_eq!(screen.subject, Subject::All);

    assert!(matches!(PapersScreen::from_params(&params(&[]), 0), Err(DeckError::InvalidLimit)));
  }

  #[tokio::test]
  async fn test_category_listing_pages_until_short_batch() {
    let repo = ScriptedRepository::new(vec![Some(20), Some(20), Some(5)]);
    let mut notices = Notices::default();
    let mut screen = PapersScreen::from_params(&params(&[("category", "cs.AI")]), 20).unwrap();

    screen.load(&repo, &mut notices).await;
    assert_eq!(screen.state().items.len(), 20);
    assert!(screen.state().has_more);
    assert_eq!(screen.state().current_page, 1);

    screen.reach_bottom(&repo).await;
    screen.reach_bottom(&repo).await;
    assert_eq!(screen.state().items.len(), 45);
    assert!(!screen.state().has_more);
    assert_eq!(screen.state().current_page, 3);

    assert!(screen.reach_bottom(&repo).await.is_none());
    assert_eq!(repo.calls().len(), 3);
    assert!(notices.drain().is_empty());
  }

  #[tokio::test]
  async fn test_category_listing_ignores_subject() {
    let repo = ScriptedRepository::new(vec![Some(20), Some(20)]);
    let mut notices = Notices::default();
    let mut screen =
      PapersScreen::from_params(&params(&[("category", "cs.RO"), ("subject", "Physics")]), 20)
        .unwrap();

    screen.load(&repo, &mut notices).await;
    screen.change_subject(Subject::Mathematics, &repo, &mut notices).await;

    let expected = Call::Fetch { count: 20, category: Some("cs.RO".into()) };
    assert_eq!(repo.calls(), vec![expected.clone(), expected]);
  }

  #[tokio::test]
  async fn test_search_listing_forwards_subject() {
    let repo = ScriptedRepository::new(vec![Some(20), Some(3), Some(20)]);
    let mut notices = Notices::default();
    let mut screen =
      PapersScreen::from_params(&params(&[("searchTerm", "graphs"), ("subject", "Physics")]), 20)
        .unwrap();

    screen.load(&repo, &mut notices).await;
    screen.reach_bottom(&repo).await;
    screen.change_subject(Subject::All, &repo, &mut notices).await;

    let base = Query::new(20).unwrap().with_search_term("graphs");
    assert_eq!(repo.calls(), vec![
      Call::Search(base.clone().with_subject(Subject::Physics)),
      Call::Search(base.clone().with_subject(Subject::Physics).with_page(2).unwrap()),
      Call::Search(base),
    ]);
    assert_eq!(screen.state().items.len(), 20);
    assert_eq!(screen.state().current_page, 1);
  }

  #[tokio::test]
  async fn test_submit_search_resets_results() {
    let repo = quiet_mock();
    let mut notices = Notices::default();
    let mut screen = PapersScreen::new(20).unwrap();

    screen.load(&repo, &mut notices).await;
    screen.reach_bottom(&repo).await;
    assert_eq!(screen.state().items.len(), 40);

    screen.on_search_input("no mock paper says this");
    screen.submit_search(&repo, &mut notices).await;
    assert!(screen.state().items.is_empty());
    assert!(!screen.state().has_more);
    assert_eq!(screen.state().current_page, 1);
  }

  #[tokio::test]
  async fn test_failures() {
    let repo = ScriptedRepository::new(vec![None, Some(20), None]);
    let mut notices = Notices::default();
    let mut screen = PapersScreen::new(20).unwrap();

    // Entry load failure is reported
    screen.load(&repo, &mut notices).await;
    assert!(screen.state().items.is_empty());
    assert!(!screen.state().loading);
    assert_eq!(notices.drain(), vec![(LOAD_FAILED.to_string(), NoticeKind::Error)]);

    // Pull to refresh recovers
    screen.pull_down_refresh(&repo, &mut notices).await;
    assert_eq!(screen.state().items.len(), 20);

    // Load-more failure rolls back quietly and keeps results
    let outcome = screen.reach_bottom(&repo).await;
    assert!(matches!(outcome, Some(LoadOutcome::Failed(_))));
    assert_eq!(screen.state().items.len(), 20);
    assert_eq!(screen.state().current_page, 1);
    assert!(notices.drain().is_empty());
  }
}
