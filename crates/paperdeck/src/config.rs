//! Configuration for the paper browser.
//!
//! Settings live in a small JSON file. Every field is optional; missing fields fall back to
//! the defaults below, so an empty object `{}` is a valid configuration.
//!
//! ```json
//! {
//!   "page_limit": 20,
//!   "dashboard_count": 6,
//!   "search_limit": 20,
//!   "fetch_latency_ms": 500,
//!   "stats_latency_ms": 300,
//!   "seed": null
//! }
//! ```

use std::path::{Path, PathBuf};

use super::*;

/// Browser settings shared by the screens and the mock repository.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DeckConfig {
  /// Page size of the papers screen
  pub page_limit:       usize,
  /// Number of latest papers shown on the dashboard
  pub dashboard_count:  usize,
  /// Maximum number of results of the search screen
  pub search_limit:     usize,
  /// Simulated latency of paper fetches, in milliseconds
  pub fetch_latency_ms: u64,
  /// Simulated latency of the stats call, in milliseconds
  pub stats_latency_ms: u64,
  /// Seed for reproducible mock data
  pub seed:             Option<u64>,
}

impl Default for DeckConfig {
  fn default() -> Self {
    Self {
      page_limit:       query::DEFAULT_LIMIT,
      dashboard_count:  6,
      search_limit:     query::DEFAULT_LIMIT,
      fetch_latency_ms: 500,
      stats_latency_ms: 300,
      seed:             None,
    }
  }
}

impl DeckConfig {
  /// Get default configuration path in user's config directory
  pub fn default_path() -> PathBuf {
    dirs::config_dir().unwrap_or_else(|| PathBuf::from(".")).join("paperdeck").join("config.json")
  }

  /// Read and validate a configuration file.
  ///
  /// # Errors
  ///
  /// Returns an error if the file can't be read or parsed, or if a page size is zero.
  pub fn load(path: impl AsRef<Path>) -> Result<Self, DeckError> {
    let path = path.as_ref();
    debug!("Loading configuration from {}", path.display());
    let config: Self = serde_json::from_str(&std::fs::read_to_string(path)?)?;
    config.validate()?;
    Ok(config)
  }

  /// Like [`DeckConfig::load`], but returns the defaults when the file doesn't exist.
  pub fn load_or_default(path: impl AsRef<Path>) -> Result<Self, DeckError> {
    let path = path.as_ref();
    if path.exists() {
      Self::load(path)
    } else {
      debug!("No configuration at {}, using defaults", path.display());
      Ok(Self::default())
    }
  }

  /// Rejects zero page sizes.
  pub fn validate(&self) -> Result<(), DeckError> {
    if self.page_limit == 0 || self.dashboard_count == 0 || self.search_limit == 0 {
      return Err(DeckError::InvalidLimit);
    }
    Ok(())
  }

  /// Simulated latency of paper fetches.
  pub fn fetch_latency(&self) -> Duration { Duration::from_millis(self.fetch_latency_ms) }

  /// Simulated latency of the stats call.
  pub fn stats_latency(&self) -> Duration { Duration::from_millis(self.stats_latency_ms) }
}
