//! The search form.
//!
//! Unlike the papers screen this shows a single batch of results per submission and has no
//! pagination.

use super::*;

/// View state and actions of the search screen.
#[derive(Debug, Clone)]
pub struct SearchScreen {
  /// Results of the last successful search
  pub papers:       Vec<Paper>,
  /// Whether a search is in flight
  pub loading:      bool,
  /// The search term typed by the user
  pub search_term:  String,
  /// The selected subject
  pub subject:      Subject,
  /// Whether a search was submitted since the last clear
  pub has_searched: bool,
  /// Template for submitted queries.
  query:            Query,
}

impl SearchScreen {
  /// Creates an empty search form returning up to `limit` results.
  ///
  /// # Errors
  ///
  /// Returns [`DeckError::InvalidLimit`] if `limit` is zero.
  pub fn new(limit: usize) -> Result<Self, DeckError> {
    Ok(Self {
      papers:       Vec::new(),
      loading:      false,
      search_term:  String::new(),
      subject:      Subject::All,
      has_searched: false,
      query:        Query::new(limit)?,
    })
  }

  /// Applies navigation parameters when the screen opens.
  ///
  /// A `subject` parameter selects that subject only when it is exactly one of the picker
  /// labels; a non-empty `searchTerm` is searched for right away.
  pub async fn enter(
    &mut self,
    params: &BTreeMap<String, String>,
    repo: &dyn PaperRepository,
    notifier: &mut dyn Notifier,
  ) {
    let subject = params.get(route::PARAM_SUBJECT).and_then(|label| Subject::from_label(label));
    if let Some(subject) = subject {
      self.subject = subject;
    }
    if let Some(term) = params.get(route::PARAM_SEARCH_TERM).filter(|term| !term.is_empty()) {
      self.search_term = term.clone();
      self.submit(repo, notifier).await;
    }
  }

  /// Stores new search text without searching.
  pub fn on_search_input(&mut self, input: &str) { self.search_term = input.to_string(); }

  /// Selects a subject for the next search.
  pub fn select_subject(&mut self, subject: Subject) { self.subject = subject; }

  /// Searches for the typed term.
  ///
  /// A blank term only shows a hint. A failed search shows an error notification and keeps
  /// the previous results.
  pub async fn submit(&mut self, repo: &dyn PaperRepository, notifier: &mut dyn Notifier) {
    if self.search_term.trim().is_empty() {
      notifier.notify(EMPTY_SEARCH, NoticeKind::None);
      return;
    }

    self.loading = true;
    self.has_searched = true;

    let query =
      self.query.clone().with_search_term(self.search_term.as_str()).with_subject(self.subject);
    match repo.search(&query).await {
      Ok(papers) => {
        debug!("Search for {:?} returned {} papers", self.search_term, papers.len());
        self.papers = papers;
      },
      Err(e) => {
        warn!("Search for {:?} failed: {e}", self.search_term);
        notifier.notify(SEARCH_FAILED, NoticeKind::Error);
      },
    }
    self.loading = false;
  }

  /// Empties the form and its results.
  pub fn clear(&mut self) {
    self.search_term.clear();
    self.papers.clear();
    self.has_searched = false;
  }

  /// Leaves the screen.
  pub fn back(&self, nav: &mut dyn Navigator) { nav.navigate_back(); }
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::repository::tests::{quiet_mock, Call, ScriptedRepository};

  #[traced_test]
  #[tokio::test]
  async fn test_blank_term_only_hints() {
    let repo = ScriptedRepository::new(vec![]);
    let mut notices = Notices::default();
    let mut screen = SearchScreen::new(20).unwrap();

    screen.on_search_input("   ");
    screen.submit(&repo, &mut notices).await;

    assert!(repo.calls().is_empty());
    assert!(!screen.has_searched);
    assert_eq!(notices.drain(), vec![(EMPTY_SEARCH.to_string(), NoticeKind::None)]);
  }

  #[tokio::test]
  async fn test_submit_forwards_subject_without_category() {
    let repo = ScriptedRepository::new(vec![Some(4), Some(4)]);
    let mut notices = Notices::default();
    let mut screen = SearchScreen::new(20).unwrap();

    screen.on_search_input("graphs");
    screen.select_subject(Subject::Mathematics);
    screen.submit(&repo, &mut notices).await;
    screen.select_subject(Subject::All);
    screen.submit(&repo, &mut notices).await;

    let base = Query::new(20).unwrap().with_search_term("graphs");
    assert_eq!(repo.calls(), vec![
      Call::Search(base.clone().with_subject(Subject::Mathematics)),
      Call::Search(base),
    ]);
    assert!(screen.has_searched);
    assert!(!screen.loading);
    assert_eq!(screen.papers.len(), 4);
  }

  #[traced_test]
  #[tokio::test]
  async fn test_failure_keeps_results() {
    let repo = ScriptedRepository::new(vec![Some(2), None]);
    let mut notices = Notices::default();
    let mut screen = SearchScreen::new(20).unwrap();

    screen.on_search_input("learning");
    screen.submit(&repo, &mut notices).await;
    let shown = screen.papers.clone();

    screen.submit(&repo, &mut notices).await;
    assert_eq!(screen.papers, shown);
    assert!(!screen.loading);
    assert_eq!(notices.drain(), vec![(SEARCH_FAILED.to_string(), NoticeKind::Error)]);
    assert!(logs_contain("Search for \"learning\" failed"));
  }

  #[tokio::test]
  async fn test_enter_with_params() {
    let repo = quiet_mock();
    let mut notices = Notices::default();
    let mut screen = SearchScreen::new(20).unwrap();

    let params = BTreeMap::from([
      ("searchTerm".to_string(), "diffusion".to_string()),
      ("subject".to_string(), "Astrology".to_string()),
    ]);
    screen.enter(&params, &repo, &mut notices).await;
    assert_eq!(screen.subject, Subject::All);
    assert!(screen.has_searched);
    assert!(screen.papers.iter().all(|paper| paper.title.starts_with("Diffusion Models")));

    screen.clear();
    assert!(screen.search_term.is_empty());
    assert!(screen.papers.is_empty());
    assert!(!screen.has_searched);

    let params = BTreeMap::from([("subject".to_string(), "Physics".to_string())]);
    screen.enter(&params, &repo, &mut notices).await;
    assert_eq!(screen.subject, Subject::Physics);
    assert!(!screen.has_searched);

    // Labels must match exactly
    for label in ["mathematics", " Mathematics", "MATHEMATICS"] {
      let params = BTreeMap::from([("subject".to_string(), label.to_string())]);
      screen.enter(&params, &repo, &mut notices).await;
      assert_eq!(screen.subject, Subject::Physics);
    }
  }
}
