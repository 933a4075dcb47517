//! Page-by-page loading of paper lists.
//!
//! A [`Paginator`] owns the [`PageState`] of exactly one screen. The state only changes
//! through the paginator's transitions:
//!
//! - [`Paginator::reset`] starts a new query: items are cleared, the cursor returns to page 1
//!   and `has_more` is set again.
//! - [`Paginator::refresh`] loads the first batch, replacing the items.
//! - [`Paginator::load_next`] advances the cursor and appends the next batch.
//!
//! A batch shorter than the page limit is the only end-of-data signal, so a result set whose
//! size is an exact multiple of the limit needs one extra, empty load before `has_more` turns
//! false.
//!
//! Loads can be split into [`Paginator::begin_next`] / [`Paginator::begin_refresh`] and
//! [`Paginator::apply`] when a fetch has to stay in flight while other transitions happen.
//! Every [`LoadTicket`] carries the generation that was current when it was issued; a reset
//! bumps the generation, and results applied with an older ticket are dropped as
//! [`LoadOutcome::Stale`].
//!
//! # Examples
//!
//! ```
//! use paperdeck::{pagination::{LoadOutcome, Paginator}, DeckError};
//!
//! # fn example() -> Result<(), DeckError> {
//! let mut pager = Paginator::new(2)?;
//!
//! let ticket = pager.begin_next().expect("idle with more to load");
//! assert!(pager.begin_next().is_none()); // already loading
//!
//! let outcome = pager.apply(ticket, Err(DeckError::FetchFailure("offline".into())));
//! assert!(matches!(outcome, LoadOutcome::Failed(_)));
//! assert_eq!(pager.state().current_page, 1);
//! assert!(!pager.state().loading);
//! # Ok(())
//! # }
//! ```

use std::future::Future;

use super::*;

/// View state of a paged paper list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PageState {
  /// Papers loaded so far, oldest batch first
  pub items:        Vec<Paper>,
  /// Whether a load is in flight
  pub loading:      bool,
  /// Whether another load may return more papers
  pub has_more:     bool,
  /// The page cursor, starting at 1
  pub current_page: usize,
}

impl Default for PageState {
  fn default() -> Self { Self { items: Vec::new(), loading: false, has_more: true, current_page: 1 } }
}

/// What a fetch is asked for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageRequest {
  /// The 1-based page to load
  pub page:  usize,
  /// The page size
  pub limit: usize,
}

/// Which transition a ticket belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoadKind {
  /// First-page load that replaces the items
  Refresh,
  /// Next-page load that appends to the items
  Next,
}

/// Proof that a load was started, needed to apply its result.
#[derive(Debug)]
pub struct LoadTicket {
  /// Generation current when the load started.
  generation: u64,
  /// The transition that started the load.
  kind:       LoadKind,
  /// The page requested from the fetch.
  request:    PageRequest,
}

impl LoadTicket {
  /// The page and limit the fetch should use.
  pub fn request(&self) -> PageRequest { self.request }

  /// The generation this ticket was issued in.
  pub fn generation(&self) -> u64 { self.generation }
}

/// Result of applying a fetch to the page state.
#[derive(Debug)]
pub enum LoadOutcome {
  /// The batch was merged into the items.
  Loaded {
    /// Number of papers in the batch
    added: usize,
  },
  /// The fetch failed; the cursor was rolled back and the items kept.
  Failed(DeckError),
  /// The state was reset while the fetch was in flight; nothing changed.
  Stale,
}

/// Pagination controller for a single screen.
#[derive(Debug)]
pub struct Paginator {
  /// The state rendered by the owning screen.
  state:      PageState,
  /// Page size used for every load.
  limit:      usize,
  /// Incremented on every reset.
  generation: u64,
}

impl Paginator {
  /// Creates an idle paginator on page 1.
  ///
  /// # Errors
  ///
  /// Returns [`DeckError::InvalidLimit`] if `limit` is zero.
  pub fn new(limit: usize) -> Result<Self, DeckError> {
    if limit == 0 {
      return Err(DeckError::InvalidLimit);
    }
    Ok(Self { state: PageState::default(), limit, generation: 0 })
  }

  /// The current view state.
  pub fn state(&self) -> &PageState { &self.state }

  /// The page size.
  pub fn limit(&self) -> usize { self.limit }

  /// The current query generation.
  pub fn generation(&self) -> u64 { self.generation }

  /// Starts over for a new query.
  ///
  /// Any load still in flight belongs to the previous generation and will be ignored when it
  /// completes.
  pub fn reset(&mut self) {
    self.generation += 1;
    self.state = PageState::default();
    debug!("Pagination reset, generation {}", self.generation);
  }

  /// Starts a first-page load, unless a load is already in flight.
  pub fn begin_refresh(&mut self) -> Option<LoadTicket> {
    if self.state.loading {
      trace!("Refresh skipped, a load is already in flight");
      return None;
    }
    self.state.loading = true;
    Some(self.ticket(LoadKind::Refresh))
  }

  /// Starts a next-page load, advancing the cursor.
  ///
  /// Returns `None` and changes nothing while a load is in flight or when there is nothing
  /// more to load.
  pub fn begin_next(&mut self) -> Option<LoadTicket> {
    if self.state.loading || !self.state.has_more {
      trace!(
        "Load skipped (loading: {}, has_more: {})",
        self.state.loading,
        self.state.has_more
      );
      return None;
    }
    self.state.loading = true;
    self.state.current_page += 1;
    Some(self.ticket(LoadKind::Next))
  }

  /// Applies the result of the fetch started with `ticket`.
  pub fn apply(
    &mut self,
    ticket: LoadTicket,
    result: Result<Vec<Paper>, DeckError>,
  ) -> LoadOutcome {
    if ticket.generation != self.generation {
      warn!(
        "Dropping result of page {} from generation {} (current generation {})",
        ticket.request.page, ticket.generation, self.generation
      );
      return LoadOutcome::Stale;
    }

    self.state.loading = false;
    match result {
      Ok(batch) => {
        let added = batch.len();
        self.state.has_more = added == self.limit;
        match ticket.kind {
          LoadKind::Refresh => self.state.items = batch,
          LoadKind::Next => self.state.items.extend(batch),
        }
        debug!(
          "Loaded {added} papers for page {} ({} total, has_more: {})",
          ticket.request.page,
          self.state.items.len(),
          self.state.has_more
        );
        LoadOutcome::Loaded { added }
      },
      Err(e) => {
        if ticket.kind == LoadKind::Next {
          self.state.current_page = ticket.request.page - 1;
        }
        warn!("Loading page {} failed: {e}", ticket.request.page);
        LoadOutcome::Failed(e)
      },
    }
  }

  /// Loads the first page with `fetch`, replacing the items.
  ///
  /// Returns `None` without calling `fetch` when a load is already in flight.
  pub async fn refresh<F, Fut>(&mut self, fetch: F) -> Option<LoadOutcome>
  where
    F: FnOnce(PageRequest) -> Fut,
    Fut: Future<Output = Result<Vec<Paper>, DeckError>>, {
    let ticket = self.begin_refresh()?;
    let result = fetch(ticket.request()).await;
    Some(self.apply(ticket, result))
  }

  /// Loads the next page with `fetch`, appending to the items.
  ///
  /// Returns `None` without calling `fetch` when a load is in flight or nothing more is
  /// available.
  pub async fn load_next<F, Fut>(&mut self, fetch: F) -> Option<LoadOutcome>
  where
    F: FnOnce(PageRequest) -> Fut,
    Fut: Future<Output = Result<Vec<Paper>, DeckError>>, {
    let ticket = self.begin_next()?;
    let result = fetch(ticket.request()).await;
    Some(self.apply(ticket, result))
  }

  /// Issues a ticket for the current generation and page.
  fn ticket(&self, kind: LoadKind) -> LoadTicket {
    LoadTicket {
      generation: self.generation,
      kind,
      request: PageRequest { page: self.state.current_page, limit: self.limit },
    }
  }
}
