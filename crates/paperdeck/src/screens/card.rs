//! A single paper as shown in every list.

use super::*;

/// Display state of one paper in a list.
#[derive(Debug, Clone)]
pub struct PaperCard<'a> {
  /// The paper shown
  pub paper:              &'a Paper,
  /// Whether the full abstract is expanded
  pub show_full_abstract: bool,
}

impl<'a> PaperCard<'a> {
  /// Creates a collapsed card.
  pub fn new(paper: &'a Paper) -> Self { Self { paper, show_full_abstract: false } }

  /// Expands or collapses the abstract.
  pub fn toggle_abstract(&mut self) { self.show_full_abstract = !self.show_full_abstract; }

  /// The author line.
  pub fn authors(&self) -> String { format::format_authors(&self.paper.authors) }

  /// The abstract, previewed unless expanded.
  pub fn abstract_text(&self) -> String {
    if self.show_full_abstract {
      self.paper.abstract_text.clone()
    } else {
      format::preview_abstract(&self.paper.abstract_text, None)
    }
  }

  /// Copies the paper's link and confirms with a success notification.
  ///
  /// A clipboard failure is returned without notifying.
  pub fn copy_link(
    &self,
    clipboard: &mut dyn Clipboard,
    notifier: &mut dyn Notifier,
  ) -> Result<(), DeckError> {
    clipboard.copy(&self.paper.arxiv_url)?;
    notifier.notify(LINK_COPIED, NoticeKind::Success);
    Ok(())
  }
}
