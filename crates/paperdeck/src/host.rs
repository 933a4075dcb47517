//! Platform services the screens rely on but do not implement.
//!
//! A front-end embedding the screens provides navigation, a clipboard and transient
//! notifications by implementing these traits. The crate also ships [`RouteStack`], an
//! in-memory navigator that is enough for terminal front-ends and tests.

use super::*;

/// The flavor of a transient notification.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum NoticeKind {
  /// An action completed
  Success,
  /// An action failed
  Error,
  /// Neutral information
  None,
}

/// Moves between pages.
pub trait Navigator {
  /// Opens the page at `path` with the given parameters.
  fn navigate_to(&mut self, path: &str, params: &BTreeMap<String, String>);

  /// Returns to the previous page.
  fn navigate_back(&mut self);
}

/// Copies text for the user.
pub trait Clipboard {
  /// Places `text` on the clipboard.
  fn copy(&mut self, text: &str) -> Result<(), DeckError>;
}

/// Shows short-lived messages.
pub trait Notifier {
  /// Shows `message` with the given flavor.
  fn notify(&mut self, message: &str, kind: NoticeKind);
}

/// A navigator that keeps the visited pages on a stack.
///
/// ```
/// use std::collections::BTreeMap;
///
/// use paperdeck::{host::{Navigator, RouteStack}, route};
///
/// let mut stack = RouteStack::new();
/// let params = BTreeMap::from([("category".to_string(), "cs.AI".to_string())]);
/// stack.navigate_to(route::PAPERS, &params);
/// assert_eq!(stack.current().path, route::PAPERS);
///
/// stack.navigate_back();
/// assert_eq!(stack.current().path, route::DASHBOARD);
/// ```
#[derive(Debug, Clone)]
pub struct RouteStack {
  /// Visited locations, the current one last. Never empty.
  stack: Vec<Location>,
}

impl RouteStack {
  /// Creates a stack positioned on the dashboard.
  pub fn new() -> Self { Self::starting_at(Location::new(route::DASHBOARD)) }

  /// Creates a stack positioned on `location`.
  pub fn starting_at(location: Location) -> Self { Self { stack: vec![location] } }

  /// The page currently shown.
  pub fn current(&self) -> &Location {
    // `navigate_back` never pops the last entry
    &self.stack[self.stack.len() - 1]
  }

  /// Number of pages on the stack.
  pub fn depth(&self) -> usize { self.stack.len() }
}

impl Default for RouteStack {
  fn default() -> Self { Self::new() }
}

impl Navigator for RouteStack {
  fn navigate_to(&mut self, path: &str, params: &BTreeMap<String, String>) {
    let location = Location { path: path.to_string(), params: params.clone() };
    debug!("Navigating to {location}");
    self.stack.push(location);
  }

  fn navigate_back(&mut self) {
    if self.stack.len() > 1 {
      self.stack.pop();
      debug!("Navigated back to {}", self.current());
    } else {
      trace!("Already on the first page, ignoring back navigation");
    }
  }
}
