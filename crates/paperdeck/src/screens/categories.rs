//! The category list with an inline filter.

use super::*;

/// View state and actions of the categories screen.
#[derive(Debug, Clone)]
pub struct Categories {
  /// All categories, in display order
  pub categories:  Vec<Category>,
  /// The lowercased filter text
  pub search_term: String,
}

impl Categories {
  /// Creates the screen with the popular categories and no filter.
  pub fn new() -> Self { Self { categories: POPULAR_CATEGORIES.clone(), search_term: String::new() } }

  /// Stores new filter text.
  pub fn on_search_input(&mut self, input: &str) { self.search_term = input.to_lowercase(); }

  /// The categories matching the current filter.
  pub fn filtered(&self) -> Vec<&Category> {
    query::filter_categories(&self.categories, &self.search_term)
  }

  /// Opens the paper list of a category.
  pub fn open_category(&self, code: &str, nav: &mut dyn Navigator) {
    let location = Location::new(route::PAPERS).with_param(route::PARAM_CATEGORY, code);
    nav.navigate_to(&location.path, &location.params);
  }

  /// Leaves the screen.
  pub fn back(&self, nav: &mut dyn Navigator) { nav.navigate_back(); }
}

impl Default for Categories {
  fn default() -> Self { Self::new() }
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::host::RouteStack;

  #[test]
  fn test_filter_input() {
    let mut screen = Categories::new();
    assert_eq!(screen.filtered().len(), 10);

    screen.on_search_input("ROBOT");
    assert_eq!(screen.search_term, "robot");
    let codes: Vec<&str> = screen.filtered().iter().map(|c| c.code.as_str()).collect();
    assert_eq!(codes, vec!["cs.RO"]);

    screen.on_search_input("learning");
    let codes: Vec<&str> = screen.filtered().iter().map(|c| c.code.as_str()).collect();
    assert_eq!(codes, vec!["cs.LG", "stat.ML"]);

    screen.on_search_input("");
    assert_eq!(screen.filtered().len(), 10);
  }

  #[test]
  fn test_open_and_back() -> anyhow::Result<()> {
    let screen = Categories::new();
    let mut nav = RouteStack::starting_at(route::CATEGORIES.parse()?);

    screen.open_category("stat.ML", &mut nav);
    assert_eq!(nav.current().param(route::PARAM_CATEGORY), Some("stat.ML"));

    screen.back(&mut nav);
    screen.back(&mut nav);
    assert_eq!(nav.current().path, route::CATEGORIES);
    Ok(())
  }
}
