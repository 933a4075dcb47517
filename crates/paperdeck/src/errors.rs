//! Error types for the paperdeck library.
//!
//! Every fallible operation in the library returns [`DeckError`]. At runtime the only
//! failure the browsing core has to recover from is [`DeckError::FetchFailure`]; the other
//! variants cover input validation, location parsing and configuration loading.
//!
//! # Examples
//!
//! ```
//! use paperdeck::{errors::DeckError, Subject};
//!
//! match "Astrology".parse::<Subject>() {
//!   Err(DeckError::InvalidSubject(s)) => println!("Unknown subject: {}", s),
//!   Err(e) => println!("Other error: {}", e),
//!   Ok(subject) => println!("Subject: {}", subject),
//! }
//! ```

use thiserror::Error;

/// Errors that can occur when working with the paperdeck library.
#[derive(Error, Debug)]
pub enum DeckError {
  /// A repository fetch failed.
  ///
  /// This is the only failure a screen has to recover from while browsing. The pagination
  /// controller rolls its page cursor back and keeps the results it already has; screens
  /// report it through the notification host.
  #[error("Failed to fetch papers: {0}")]
  FetchFailure(String),

  /// The provided subject label isn't one of the known subjects.
  ///
  /// The string parameter contains the rejected label.
  #[error("Invalid subject, see `paperdeck::paper::Subject`: {0}")]
  InvalidSubject(String),

  /// A page size of zero was requested.
  #[error("Page limit must be a positive integer")]
  InvalidLimit,

  /// A page number of zero was requested; pages start at 1.
  #[error("Page number must be a positive integer")]
  InvalidPage,

  /// A paper record is missing its title or identifier.
  #[error("Invalid paper: {0}")]
  InvalidPaper(String),

  /// Failed to parse a navigation location.
  #[error(transparent)]
  InvalidUrl(#[from] url::ParseError),

  /// The clipboard host refused to take the text.
  #[error("Clipboard error: {0}")]
  Clipboard(String),

  /// A file system operation failed, typically while reading configuration.
  #[error(transparent)]
  Io(#[from] std::io::Error),

  /// A configuration file could not be parsed.
  #[error(transparent)]
  Json(#[from] serde_json::Error),
}
