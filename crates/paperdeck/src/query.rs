//! The in-memory query engine.
//!
//! Filtering is a plain case-insensitive substring match: a paper matches a search term when
//! its title, its abstract, or any of its authors contains the term. There is no tokenizing
//! or ranking and the input order is always preserved.
//!
//! A subject can be carried on a [`Query`] and is forwarded to repositories, but the engine
//! itself never narrows by subject. Callers disagree on whether subject should narrow
//! results, so both behaviors stay where they are (see the papers screen).
//!
//! # Examples
//!
//! ```
//! use paperdeck::{query, Paper};
//!
//! # fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let corpus = vec![
//!   Paper::new("Alpha Study", "", "2024.1", vec![], "cs.AI")?,
//!   Paper::new("Gamma", "", "2024.2", vec![], "cs.AI")?,
//! ];
//! let hits = query::search(&corpus, Some("STUDY"), None);
//! assert_eq!(hits.len(), 1);
//! assert_eq!(hits[0].title, "Alpha Study");
//! # Ok(())
//! # }
//! ```

use super::*;

/// Default page size used by the papers and search screens.
pub const DEFAULT_LIMIT: usize = 20;

/// A request for one page of papers.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Query {
  /// Free-text term matched against title, abstract and authors
  pub search_term: Option<String>,
  /// Category code the results are drawn from
  pub category:    Option<String>,
  /// Subject forwarded to the repository, `None` for all subjects
  pub subject:     Option<Subject>,
  /// Maximum number of papers per page
  pub limit:       usize,
  /// 1-based page number
  pub page:        usize,
}

impl Query {
  /// Creates a query for the first page with the given page size.
  ///
  /// # Errors
  ///
  /// Returns [`DeckError::InvalidLimit`] if `limit` is zero.
  pub fn new(limit: usize) -> Result<Self, DeckError> {
    if limit == 0 {
      return Err(DeckError::InvalidLimit);
    }
    Ok(Self { search_term: None, category: None, subject: None, limit, page: 1 })
  }

  /// Sets the free-text search term. Empty terms are stored as no term.
  pub fn with_search_term(mut self, term: impl Into<String>) -> Self {
    let term = term.into();
    self.search_term = (!term.is_empty()).then_some(term);
    self
  }

  /// Restricts the query to a category code.
  pub fn with_category(mut self, category: impl Into<String>) -> Self {
    self.category = Some(category.into());
    self
  }

  /// Sets the subject, dropping [`Subject::All`].
  pub fn with_subject(mut self, subject: Subject) -> Self {
    self.subject = subject.as_filter();
    self
  }

  /// Moves the query to another page.
  ///
  /// # Errors
  ///
  /// Returns [`DeckError::InvalidPage`] if `page` is zero.
  pub fn with_page(mut self, page: usize) -> Result<Self, DeckError> {
    if page == 0 {
      return Err(DeckError::InvalidPage);
    }
    self.page = page;
    Ok(self)
  }

  /// Checks whether a single paper satisfies this query's search term.
  pub fn matches(&self, paper: &Paper) -> bool {
    match self.search_term.as_deref() {
      Some(term) => matches_term(paper, &term.to_lowercase()),
      None => true,
    }
  }
}

/// Filters `corpus` by a free-text term.
///
/// An absent or empty `term` returns the corpus unchanged. Otherwise the papers whose title,
/// abstract, or any author contains `term` (ignoring case) are returned in their original
/// order. `subject` does not narrow the results.
pub fn search(corpus: &[Paper], term: Option<&str>, subject: Option<Subject>) -> Vec<Paper> {
  let Some(term) = term.filter(|term| !term.is_empty()) else {
    return corpus.to_vec();
  };

  let needle = term.to_lowercase();
  let hits: Vec<Paper> =
    corpus.iter().filter(|paper| matches_term(paper, &needle)).cloned().collect();

  debug!(
    "Search for {term:?} (subject: {subject:?}) matched {} of {} papers",
    hits.len(),
    corpus.len()
  );
  hits
}

/// Filters categories by a case-insensitive substring of their code or name.
///
/// An empty term returns every category.
pub fn filter_categories<'a>(categories: &'a [Category], term: &str) -> Vec<&'a Category> {
  let needle = term.to_lowercase();
  categories
    .iter()
    .filter(|category| {
      needle.is_empty()
        || category.code.to_lowercase().contains(&needle)
        || category.name.to_lowercase().contains(&needle)
    })
    .collect()
}

/// Matches an already lowercased `needle` against title, abstract and authors.
fn matches_term(paper: &Paper, needle: &str) -> bool {
  paper.title.to_lowercase().contains(needle)
    || paper.abstract_text.to_lowercase().contains(needle)
    || paper.authors.iter().any(|author| author.to_lowercase().contains(needle))
}

#[cfg(test)]
mod tests {
  use super::*;

  /// Helper function to create a test paper
  fn create_test_paper(title: &str, abstract_text: &str, authors: &[&str]) -> Paper {
    Paper::new(
      title,
      abstract_text,
      format!("2024.{}", title.len()),
      authors.iter().map(|a| a.to_string()).collect(),
      "cs.AI",
    )
    .unwrap()
  }

  fn corpus() -> Vec<Paper> {
    vec![
      create_test_paper("Alpha Study", "Graphs and more graphs", &["Ada Lovelace"]),
      create_test_paper("Beta Study", "Transformers for text", &["Alan Turing"]),
      create_test_paper("Gamma", "Nothing in particular", &[]),
    ]
  }

  #[traced_test]
  #[test]
  fn test_search_by_title_preserves_order() {
    let hits = search(&corpus(), Some("study"), None);
    let titles: Vec<&str> = hits.iter().map(|p| p.title.as_str()).collect();
    assert_eq!(titles, vec!["Alpha Study", "Beta Study"]);
    assert!(logs_contain("matched 2 of 3 papers"));
  }

  #[test]
  fn test_search_matches_abstract_and_authors() {
    let corpus = corpus();
    let hits = search(&corpus, Some("TRANSFORMERS"), None);
    assert_eq!(hits.len(), 1);
    assert_eq!(hits[0].title, "Beta Study");

    let hits = search(&corpus, Some("lovelace"), None);
    assert_eq!(hits.len(), 1);
    assert_eq!(hits[0].title, "Alpha Study");
  }

  #[test]
  fn test_empty_term_is_identity() {
    let corpus = corpus();
    assert_eq!(search(&corpus, None, None), corpus);
    assert_eq!(search(&corpus, Some(""), Some(Subject::Physics)), corpus);
    assert!(search(&[], Some("anything"), None).is_empty());
  }

  #[test]
  fn test_subject_does_not_narrow() {
    let corpus = corpus();
    assert_eq!(search(&corpus, Some("study"), Some(Subject::Mathematics)).len(), 2);
  }

  #[test]
  fn test_no_match_is_empty() {
    assert!(search(&corpus(), Some("quantum"), None).is_empty());
  }

  #[test]
  fn test_every_hit_contains_term() {
    let corpus = corpus();
    for term in ["a", "study", "graphs", "TURING", "xyz", " "] {
      let needle = term.to_lowercase();
      for paper in search(&corpus, Some(term), None) {
        assert!(
          paper.title.to_lowercase().contains(&needle)
            || paper.abstract_text.to_lowercase().contains(&needle)
            || paper.authors.iter().any(|a| a.to_lowercase().contains(&needle)),
          "{} should not match {term:?}",
          paper.title
        );
      }
    }
  }

  #[test]
  fn test_query_builder() {
    assert!(matches!(Query::new(0), Err(DeckError::InvalidLimit)));

    let query = Query::new(20).unwrap().with_search_term("").with_subject(Subject::All);
    assert_eq!(query.search_term, None);
    assert_eq!(query.subject, None);
    assert_eq!(query.page, 1);
    assert!(matches!(query.clone().with_page(0), Err(DeckError::InvalidPage)));

    let query = query.with_search_term("beta").with_category("cs.AI");
    let corpus = corpus();
    assert!(!query.matches(&corpus[0]));
    assert!(query.matches(&corpus[1]));
  }

  #[test]
  fn test_filter_categories() {
    let all = filter_categories(&POPULAR_CATEGORIES, "");
    assert_eq!(all.len(), POPULAR_CATEGORIES.len());

    let vision = filter_categories(&POPULAR_CATEGORIES, "VISION");
    assert_eq!(vision.len(), 1);
    assert_eq!(vision[0].code, "cs.CV");

    let stat = filter_categories(&POPULAR_CATEGORIES, "stat.");
    assert_eq!(stat.len(), 1);
    assert!(filter_categories(&POPULAR_CATEGORIES, "biology").is_empty());
  }
}
