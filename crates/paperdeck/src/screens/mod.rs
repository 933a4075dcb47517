//! Screen controllers for the paper browser.
//!
//! Each screen owns its view state and turns user input into repository calls. Platform
//! services are passed in per call as [`host`](crate::host) trait objects, so the same
//! controllers can sit behind a terminal UI or a test harness.
//!
//! # Screens
//!
//! - [`dashboard`] - summary numbers and the latest papers
//! - [`categories`] - the popular category list with an inline filter
//! - [`papers`] - a paged paper list for a category or a search term
//! - [`search`] - a one-shot search form
//! - [`card`] - a single paper as shown in every list
//!
//! # Examples
//!
//! ```no_run
//! use paperdeck::{
//!   host::RouteStack,
//!   repository::MockRepository,
//!   screens::{dashboard::Dashboard, Notices},
//! };
//!
//! # async fn example() {
//! let repo = MockRepository::new();
//! let mut notices = Notices::default();
//! let mut nav = RouteStack::new();
//!
//! let mut dashboard = Dashboard::new(6);
//! dashboard.load(&repo, &mut notices).await;
//! dashboard.open_category("cs.AI", &mut nav);
//! # }
//! ```

pub mod card;
pub mod categories;
pub mod dashboard;
pub mod papers;
pub mod search;

use super::*;

/// Shown when a screen fails to load its data.
pub const LOAD_FAILED: &str = "Failed to load";
/// Shown when a search request fails.
pub const SEARCH_FAILED: &str = "Search failed";
/// Shown when a blank search is submitted.
pub const EMPTY_SEARCH: &str = "Please enter a search term";
/// Shown after a paper link was copied.
pub const LINK_COPIED: &str = "Link copied";

/// A notifier that collects messages for later display.
///
/// Front-ends that render in batches drain it after each action.
#[derive(Debug, Default)]
pub struct Notices {
  /// Messages in the order they were raised.
  pending: Vec<(String, NoticeKind)>,
}

impl Notices {
  /// Takes every pending message.
  pub fn drain(&mut self) -> Vec<(String, NoticeKind)> { std::mem::take(&mut self.pending) }
}

impl Notifier for Notices {
  fn notify(&mut self, message: &str, kind: NoticeKind) {
    self.pending.push((message.to_string(), kind));
  }
}
