//! The landing screen: repository statistics and the most recent papers.

use super::*;

/// View state and actions of the dashboard.
#[derive(Debug, Clone, Default)]
pub struct Dashboard {
  /// The latest papers
  pub papers:   Vec<Paper>,
  /// Repository statistics, once loaded
  pub stats:    Option<Stats>,
  /// Whether a load is in flight
  pub loading:  bool,
  /// How many latest papers to show.
  latest_count: usize,
}

impl Dashboard {
  /// Creates an empty dashboard showing `latest_count` papers once loaded.
  pub fn new(latest_count: usize) -> Self { Self { latest_count, ..Self::default() } }

  /// Loads statistics, then the latest papers.
  ///
  /// On failure an error notification is shown and whatever was displayed before stays.
  pub async fn load(&mut self, repo: &dyn PaperRepository, notifier: &mut dyn Notifier) {
    self.loading = true;
    let result = async {
      let stats = repo.stats().await?;
      let papers = repo.fetch(self.latest_count, None).await?;
      Ok::<_, DeckError>((stats, papers))
    }
    .await;
    self.loading = false;

    match result {
      Ok((stats, papers)) => {
        debug!("Dashboard loaded {} papers", papers.len());
        self.stats = Some(stats);
        self.papers = papers;
      },
      Err(e) => {
        warn!("Failed to load dashboard: {e}");
        notifier.notify(LOAD_FAILED, NoticeKind::Error);
      },
    }
  }

  /// Pull-to-refresh: loads everything again.
  pub async fn refresh(&mut self, repo: &dyn PaperRepository, notifier: &mut dyn Notifier) {
    self.load(repo, notifier).await
  }

  /// Opens the paper list of a category.
  pub fn open_category(&self, code: &str, nav: &mut dyn Navigator) {
    let location = Location::new(route::PAPERS).with_param(route::PARAM_CATEGORY, code);
    nav.navigate_to(&location.path, &location.params);
  }

  /// Opens another arXiv page by name, e.g. `"search"` or `"categories"`.
  pub fn open_page(&self, page: &str, nav: &mut dyn Navigator) {
    nav.navigate_to(&route::page_path(page), &BTreeMap::new());
  }
}
