//! A small library for browsing arXiv-style papers: a mock paper repository, an in-memory
//! query engine, a pagination controller, and the screen controllers that drive them.
//!
//! # Example
//! ```rust,no_run
//! use paperdeck::{pagination::Paginator, repository::MockRepository, PaperRepository};
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!   let repo = MockRepository::new();
//!   let mut pager = Paginator::new(20)?;
//!
//!   // Load the first batch of machine learning papers
//!   pager.refresh(|request| repo.fetch(request.limit, Some("cs.LG"))).await;
//!   for paper in &pager.state().items {
//!     println!("{} ({})", paper.title, paper.arxiv_id);
//!   }
//!
//!   Ok(())
//! }
//! ```

#![warn(missing_docs, clippy::missing_docs_in_private_items)]
use std::{collections::BTreeMap, fmt, str::FromStr, time::Duration};

use async_trait::async_trait;
use chrono::{Datelike, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use tracing::{debug, trace, warn};
#[cfg(test)] use tracing_test::traced_test;

pub mod config;
pub mod errors;
pub mod format;
pub mod host;
pub mod pagination;
pub mod paper;
pub mod query;
pub mod repository;
pub mod route;
pub mod screens;

pub use config::DeckConfig;
pub use errors::DeckError;
use host::{Clipboard, Navigator, NoticeKind, Notifier};
use pagination::{LoadOutcome, PageRequest, PageState, Paginator};
pub use paper::{Category, Paper, Subject, POPULAR_CATEGORIES};
use query::Query;
pub use repository::{PaperRepository, Stats};
use route::Location;
