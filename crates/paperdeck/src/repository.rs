//! Paper repositories: the network boundary of the browser.
//!
//! [`PaperRepository`] is the contract every screen talks to. The crate ships a single
//! implementation, [`MockRepository`], which synthesizes placeholder papers after a short
//! simulated latency. A real client only needs to implement the same three async operations.
//!
//! # Examples
//!
//! ```no_run
//! use paperdeck::{repository::MockRepository, PaperRepository};
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let repo = MockRepository::new();
//!
//! let papers = repo.fetch(5, Some("cs.RO")).await?;
//! assert_eq!(papers.len(), 5);
//! assert!(papers.iter().all(|paper| paper.subjects == "cs.RO"));
//!
//! let stats = repo.stats().await?;
//! println!("{} papers in {} categories", stats.paper_count, stats.category_count);
//! # Ok(())
//! # }
//! ```

use std::{collections::HashSet, sync::Mutex};

use super::*;

/// Subjects string used when no category is requested.
pub const DEFAULT_SUBJECTS: &str = "Computer Science (cs.AI); Machine Learning (cs.LG)";

/// Topics the mock draws titles and abstracts from.
pub const TOPICS: [&str; 8] = [
  "Deep Learning",
  "Reinforcement Learning",
  "Computer Vision",
  "Natural Language Processing",
  "Graph Neural Networks",
  "Transformer Models",
  "GANs",
  "Diffusion Models",
];

/// Placeholder author list given to every generated paper.
const MOCK_AUTHORS: [&str; 4] = ["Author One", "Author Two", "Author Three", "Author Four"];

/// Comment attached to every generated paper.
const MOCK_COMMENTS: &str = "Accepted at Conference 202X";

/// Exclusive upper bound of the random part of generated identifiers.
const ID_SPACE: u32 = 10_000_000;

/// Summary numbers shown on the dashboard.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Stats {
  /// Number of papers known to the repository
  pub paper_count:    u64,
  /// Number of categories known to the repository
  pub category_count: u64,
  /// Date of the most recent update
  pub latest_update:  NaiveDate,
}

/// The operations a paper source has to provide.
///
/// All operations are asynchronous to mirror network latency, even when an implementation
/// answers from memory.
#[async_trait]
pub trait PaperRepository: Send + Sync {
  /// Fetches `count` papers, optionally from a single category.
  async fn fetch(&self, count: usize, category: Option<&str>) -> Result<Vec<Paper>, DeckError>;

  /// Fetches up to `query.limit` papers matching `query`.
  async fn search(&self, query: &Query) -> Result<Vec<Paper>, DeckError>;

  /// Returns the dashboard summary.
  async fn stats(&self) -> Result<Stats, DeckError>;
}

/// A repository that invents papers instead of fetching them.
///
/// Generated records have a fixed shape and randomized content. Identifiers are built from
/// the current year and a random number below ten million, re-drawn on collision so they are
/// unique within one batch (but not across batches).
///
/// # Examples
///
/// ```
/// use std::time::Duration;
///
/// use paperdeck::repository::MockRepository;
///
/// // Reproducible output without simulated latency, handy in tests
/// let repo = MockRepository::new().with_seed(7).with_latency(Duration::ZERO, Duration::ZERO);
/// let a = repo.generate(3, None).unwrap();
/// let b = MockRepository::new().with_seed(7).generate(3, None).unwrap();
/// assert_eq!(a[0].arxiv_id, b[0].arxiv_id);
/// ```
pub struct MockRepository {
  /// Source of randomness for topics and identifiers.
  rng:           Mutex<fastrand::Rng>,
  /// Simulated latency of `fetch` and `search`.
  fetch_latency: Duration,
  /// Simulated latency of `stats`.
  stats_latency: Duration,
}

impl MockRepository {
  /// Simulated latency of paper fetches.
  pub const FETCH_LATENCY: Duration = Duration::from_millis(500);
  /// Simulated latency of the stats call.
  pub const STATS_LATENCY: Duration = Duration::from_millis(300);

  /// Creates a mock repository with default latency and an entropy-seeded generator.
  pub fn new() -> Self {
    Self {
      rng:           Mutex::new(fastrand::Rng::new()),
      fetch_latency: Self::FETCH_LATENCY,
      stats_latency: Self::STATS_LATENCY,
    }
  }

  /// Creates a mock repository set up from a configuration.
  pub fn from_config(config: &DeckConfig) -> Self {
    let repo = Self::new().with_latency(config.fetch_latency(), config.stats_latency());
    match config.seed {
      Some(seed) => repo.with_seed(seed),
      None => repo,
    }
  }

  /// Seeds the generator so the produced papers are reproducible.
  pub fn with_seed(self, seed: u64) -> Self {
    Self { rng: Mutex::new(fastrand::Rng::with_seed(seed)), ..self }
  }

  /// Overrides the simulated latency. A zero duration skips the sleep entirely.
  pub fn with_latency(self, fetch_latency: Duration, stats_latency: Duration) -> Self {
    Self { fetch_latency, stats_latency, ..self }
  }

  /// Synthesizes `count` papers without any latency.
  ///
  /// Each paper's `subjects` is `category` when given, else [`DEFAULT_SUBJECTS`].
  ///
  /// # Errors
  ///
  /// Returns [`DeckError::FetchFailure`] if `count` exceeds the number of distinct
  /// identifiers available to one batch.
  pub fn generate(&self, count: usize, category: Option<&str>) -> Result<Vec<Paper>, DeckError> {
    if count > ID_SPACE as usize {
      return Err(DeckError::FetchFailure(format!(
        "cannot generate {count} papers with unique identifiers, at most {ID_SPACE} fit in a batch"
      )));
    }

    // The generator stays valid even if a previous holder panicked
    let mut rng = self.rng.lock().unwrap_or_else(|poisoned| poisoned.into_inner());
    let year = Utc::now().year();
    let subjects = category.unwrap_or(DEFAULT_SUBJECTS);
    let mut seen = HashSet::with_capacity(count);
    let mut papers = Vec::with_capacity(count);

    for i in 0..count {
      let topic = TOPICS[rng.usize(..TOPICS.len())];
      let mut id = rng.u32(..ID_SPACE);
      while !seen.insert(id) {
        trace!("Identifier {id} already used in this batch, drawing again");
        id = rng.u32(..ID_SPACE);
      }

      let paper = Paper::new(
        format!("{topic}: A Novel Approach for Solving Complex Problems {}", i + 1),
        format!(
          "We present a new method for {} that achieves state-of-the-art results on benchmark \
           datasets. Our approach combines the strengths of multiple existing methods while \
           addressing their limitations. Experimental results show significant improvements \
           over baseline methods.",
          topic.to_lowercase()
        ),
        format!("{year}.{id}"),
        MOCK_AUTHORS.iter().map(|author| author.to_string()).collect(),
        subjects,
      )?
      .with_comments(MOCK_COMMENTS);
      trace!("Generated paper {}", paper.arxiv_id);
      papers.push(paper);
    }

    Ok(papers)
  }

  /// Waits for `latency`, yielding to the runtime.
  async fn simulate_latency(latency: Duration) {
    if !latency.is_zero() {
      tokio::time::sleep(latency).await;
    }
  }
}

impl Default for MockRepository {
  fn default() -> Self { Self::new() }
}

#[async_trait]
impl PaperRepository for MockRepository {
  async fn fetch(&self, count: usize, category: Option<&str>) -> Result<Vec<Paper>, DeckError> {
    debug!("Fetching {count} mock papers for category {category:?}");
    Self::simulate_latency(self.fetch_latency).await;
    self.generate(count, category)
  }

  async fn search(&self, query: &Query) -> Result<Vec<Paper>, DeckError> {
    debug!("Searching mock papers: {query:?}");
    let papers = self.generate(query.limit, query.category.as_deref())?;
    Self::simulate_latency(self.fetch_latency).await;
    Ok(crate::query::search(&papers, query.search_term.as_deref(), query.subject))
  }

  async fn stats(&self) -> Result<Stats, DeckError> {
    Self::simulate_latency(self.stats_latency).await;
    Ok(Stats { paper_count: 1234, category_count: 42, latest_update: Utc::now().date_naive() })
  }
}

#[cfg(test)]
pub(crate) mod tests {
  use std::collections::VecDeque;

  use super::*;

  /// Instant, seeded mock for tests.
  pub(crate) fn quiet_mock() -> MockRepository {
    MockRepository::new().with_seed(42).with_latency(Duration::ZERO, Duration::ZERO)
  }

  /// A call recorded by [`ScriptedRepository`].
  #[derive(Debug, Clone, PartialEq, Eq)]
  pub(crate) enum Call {
    Fetch { count: usize, category: Option<String> },
    Search(Query),
    Stats,
  }

  /// Repository answering with a scripted sequence of batches, recording every call.
  ///
  /// `None` entries answer with a fetch failure. Once the script runs out every call fails.
  pub(crate) struct ScriptedRepository {
    script: Mutex<VecDeque<Option<usize>>>,
    calls:  Mutex<Vec<Call>>,
  }

  impl ScriptedRepository {
    pub(crate) fn new(script: Vec<Option<usize>>) -> Self {
      Self { script: Mutex::new(script.into()), calls: Mutex::new(Vec::new()) }
    }

    pub(crate) fn calls(&self) -> Vec<Call> { self.calls.lock().unwrap().clone() }

    fn next_batch(&self, category: Option<&str>) -> Result<Vec<Paper>, DeckError> {
      match self.script.lock().unwrap().pop_front().flatten() {
        Some(size) => quiet_mock().generate(size, category),
        None => Err(DeckError::FetchFailure("scripted failure".into())),
      }
    }
  }

  #[async_trait]
  impl PaperRepository for ScriptedRepository {
    async fn fetch(&self, count: usize, category: Option<&str>) -> Result<Vec<Paper>, DeckError> {
      self
        .calls
        .lock()
        .unwrap()
        .push(Call::Fetch { count, category: category.map(str::to_string) });
      self.next_batch(category)
    }

    async fn search(&self, query: &Query) -> Result<Vec<Paper>, DeckError> {
      self.calls.lock().unwrap().push(Call::Search(query.clone()));
      self.next_batch(query.category.as_deref())
    }

    async fn stats(&self) -> Result<Stats, DeckError> {
      self.calls.lock().unwrap().push(Call::Stats);
      Ok(Stats { paper_count: 1, category_count: 1, latest_update: Utc::now().date_naive() })
    }
  }

  #[tokio::test]
  async fn test_fetch_produces_exact_count() -> anyhow::Result<()> {
    let repo = quiet_mock();
    for count in [0, 1, 6, 20] {
      assert_eq!(repo.fetch(count, None).await?.len(), count);
    }
    Ok(())
  }

  #[tokio::test]
  async fn test_fetch_subjects_follow_category() -> anyhow::Result<()> {
    let repo = quiet_mock();
    let papers = repo.fetch(4, Some("cs.CV")).await?;
    assert!(papers.iter().all(|paper| paper.subjects == "cs.CV"));

    let papers = repo.fetch(4, None).await?;
    assert!(papers.iter().all(|paper| paper.subjects == DEFAULT_SUBJECTS));
    Ok(())
  }

  #[tokio::test]
  async fn test_generated_papers_are_well_formed() -> anyhow::Result<()> {
    let repo = quiet_mock();
    let year = Utc::now().year();
    let papers = repo.fetch(200, None).await?;

    let ids: HashSet<&str> = papers.iter().map(|paper| paper.arxiv_id.as_str()).collect();
    assert_eq!(ids.len(), papers.len());

    for (i, paper) in papers.iter().enumerate() {
      assert!(!paper.title.is_empty());
      assert!(paper.title.ends_with(&format!("Complex Problems {}", i + 1)));
      assert!(paper.arxiv_id.starts_with(&format!("{year}.")));
      assert_eq!(paper.arxiv_url, format!("https://arxiv.org/abs/{}", paper.arxiv_id));
      assert_eq!(paper.authors.len(), 4);
      assert_eq!(paper.comments.as_deref(), Some("Accepted at Conference 202X"));
      assert!(TOPICS.iter().any(|topic| paper.title.starts_with(topic)));
    }
    Ok(())
  }

  #[test]
  fn test_oversized_batch_fails_instead_of_spinning() {
    let repo = quiet_mock();
    let result = repo.generate(ID_SPACE as usize + 1, None);
    assert!(matches!(result, Err(DeckError::FetchFailure(_))));
  }

  #[test]
  fn test_seeded_generation_is_reproducible() -> anyhow::Result<()> {
    let a = quiet_mock().generate(10, None)?;
    let b = quiet_mock().generate(10, None)?;
    let ids = |papers: &[Paper]| papers.iter().map(|p| p.arxiv_id.clone()).collect::<Vec<_>>();
    assert_eq!(ids(&a), ids(&b));
    Ok(())
  }

  #[tokio::test]
  async fn test_search_filters_generated_batch() -> anyhow::Result<()> {
    let repo = quiet_mock();

    let query = Query::new(20)?;
    assert_eq!(repo.search(&query).await?.len(), 20);

    // Every mock paper is written by "Author One"
    let query = Query::new(20)?.with_search_term("author one");
    assert_eq!(repo.search(&query).await?.len(), 20);

    let query = Query::new(20)?.with_search_term("no paper mentions this");
    assert!(repo.search(&query).await?.is_empty());

    let query = Query::new(8)?.with_search_term("gans").with_category("cs.LG");
    let hits = repo.search(&query).await?;
    assert!(hits.len() <= 8);
    assert!(hits.iter().all(|paper| paper.title.starts_with("GANs") && paper.subjects == "cs.LG"));
    Ok(())
  }

  #[tokio::test]
  async fn test_stats() -> anyhow::Result<()> {
    let stats = quiet_mock().stats().await?;
    assert_eq!(stats.paper_count, 1234);
    assert_eq!(stats.category_count, 42);
    assert_eq!(stats.latest_update, Utc::now().date_naive());
    Ok(())
  }

  #[tokio::test]
  async fn test_fetch_simulates_latency() -> anyhow::Result<()> {
    let latency = Duration::from_millis(30);
    let repo = MockRepository::new().with_latency(latency, latency);
    let start = tokio::time::Instant::now();
    repo.fetch(1, None).await?;
    repo.stats().await?;
    assert!(start.elapsed() >= latency * 2);
    Ok(())
  }
}
