//! Error types for the deck CLI application.
//!
//! The CLI wraps the library error together with the failures of its own surroundings:
//! interactive prompts, terminal IO and JSON output. All variants are transparent so the
//! underlying message reaches the user unchanged.

use thiserror::Error;

/// Errors that can occur while running a deck command.
///
/// # Examples
///
/// ```no_run
/// use deck::errors::DeckCliError;
///
/// # fn example() -> Result<(), DeckCliError> {
/// // Configuration problems come from the library
/// let config = paperdeck::DeckConfig::load("missing.json")?;
///
/// // User interactions may result in Dialoguer errors
/// let term = dialoguer::Input::<String>::new().with_prompt("Search").interact_text()?;
/// # Ok(())
/// # }
/// ```
#[derive(Error, Debug)]
pub enum DeckCliError {
  /// Errors from user interaction dialogs
  #[error(transparent)]
  Dialoguer(#[from] dialoguer::Error),

  /// Errors from the underlying paperdeck library
  #[error(transparent)]
  Deck(#[from] paperdeck::DeckError),

  /// File system and IO operation errors
  #[error(transparent)]
  IO(#[from] std::io::Error),

  /// Errors while writing JSON output
  #[error(transparent)]
  Json(#[from] serde_json::Error),
}
