//! Page paths and navigation locations.
//!
//! A [`Location`] is a page path plus string parameters, written the way a mini-app router
//! expects them: `/pages/arxiv/papers/papers?category=cs.AI`. Parameters are form-urlencoded,
//! so search terms with spaces or symbols survive the round trip.
//!
//! ```
//! use paperdeck::route::{self, Location};
//!
//! # fn example() -> Result<(), paperdeck::DeckError> {
//! let location = Location::new(route::PAPERS).with_param("searchTerm", "graph networks");
//! assert_eq!(location.to_string(), "/pages/arxiv/papers/papers?searchTerm=graph+networks");
//!
//! let parsed: Location = location.to_string().parse()?;
//! assert_eq!(parsed.param("searchTerm"), Some("graph networks"));
//! # Ok(())
//! # }
//! ```

use url::{form_urlencoded, Url};

use super::*;

/// The dashboard page.
pub const DASHBOARD: &str = "/pages/arxiv/dashboard/dashboard";
/// The category list page.
pub const CATEGORIES: &str = "/pages/arxiv/categories/categories";
/// The paged paper list page.
pub const PAPERS: &str = "/pages/arxiv/papers/papers";
/// The search page.
pub const SEARCH: &str = "/pages/arxiv/search/search";

/// Parameter carrying a category code.
pub const PARAM_CATEGORY: &str = "category";
/// Parameter carrying a subject label.
pub const PARAM_SUBJECT: &str = "subject";
/// Parameter carrying a search term.
pub const PARAM_SEARCH_TERM: &str = "searchTerm";

/// Base used to parse relative locations.
const PARSE_BASE: &str = "http://localhost";

/// Builds the path of a page under `/pages/arxiv`, e.g. `"search"` becomes
/// `"/pages/arxiv/search/search"`.
pub fn page_path(page: &str) -> String { format!("/pages/arxiv/{page}/{page}") }

/// A page path with its parameters.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Location {
  /// The page path
  pub path:   String,
  /// Page parameters, sorted by name
  pub params: BTreeMap<String, String>,
}

impl Location {
  /// Creates a location without parameters.
  pub fn new(path: impl Into<String>) -> Self { Self { path: path.into(), params: BTreeMap::new() } }

  /// Adds a parameter.
  pub fn with_param(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
    self.params.insert(name.into(), value.into());
    self
  }

  /// Looks up a parameter.
  pub fn param(&self, name: &str) -> Option<&str> { self.params.get(name).map(String::as_str) }
}

impl fmt::Display for Location {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    if self.params.is_empty() {
      return f.write_str(&self.path);
    }
    let query = form_urlencoded::Serializer::new(String::new()).extend_pairs(&self.params).finish();
    write!(f, "{}?{}", self.path, query)
  }
}

impl FromStr for Location {
  type Err = DeckError;

  fn from_str(s: &str) -> Result<Self, Self::Err> {
    let url = Url::parse(PARSE_BASE)?.join(s)?;
    Ok(Self {
      path:   url.path().to_string(),
      params: url.query_pairs().map(|(k, v)| (k.into_owned(), v.into_owned())).collect(),
    })
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn test_page_paths() {
    assert_eq!(page_path("dashboard"), DASHBOARD);
    assert_eq!(page_path("categories"), CATEGORIES);
    assert_eq!(page_path("papers"), PAPERS);
    assert_eq!(page_path("search"), SEARCH);
  }

  #[test]
  fn test_location_round_trip_with_symbols() -> anyhow::Result<()> {
    let location = Location::new(PAPERS)
      .with_param(PARAM_CATEGORY, "physics.comp-ph")
      .with_param(PARAM_SEARCH_TERM, "a&b = c?");
    let parsed: Location = location.to_string().parse()?;
    assert_eq!(parsed, location);
    Ok(())
  }

  #[test]
  fn test_plain_path() -> anyhow::Result<()> {
    let location: Location = CATEGORIES.parse()?;
    assert_eq!(location.to_string(), CATEGORIES);
    assert!(location.params.is_empty());
    assert_eq!(location.param(PARAM_CATEGORY), None);
    Ok(())
  }
}
