//! Terminal implementations of the platform services and the rendering of screen state.

use console::{style, Emoji};
use paperdeck::{
  host::{Clipboard, NoticeKind, Notifier},
  screens::card::PaperCard,
  Category, DeckError, Paper, Stats,
};
use tracing::debug;

pub static LOOKING_GLASS: Emoji<'_, '_> = Emoji("🔍 ", "");
pub static BOOKS: Emoji<'_, '_> = Emoji("📚 ", "");
pub static PAPER: Emoji<'_, '_> = Emoji("📄 ", "");
pub static LINK: Emoji<'_, '_> = Emoji("🔗 ", "");
pub static WARNING: Emoji<'_, '_> = Emoji("⚠️  ", "");
pub static SUCCESS: Emoji<'_, '_> = Emoji("✨ ", "");

/// Prints notifications as they are raised.
#[derive(Debug, Default)]
pub struct ConsoleNotifier;

impl Notifier for ConsoleNotifier {
  fn notify(&mut self, message: &str, kind: NoticeKind) {
    debug!("Notification ({kind:?}): {message}");
    match kind {
      NoticeKind::Success => println!("{} {}", style(SUCCESS).green(), style(message).green()),
      NoticeKind::Error => println!("{} {}", style(WARNING).red(), style(message).red().bold()),
      NoticeKind::None => println!("{} {}", style("ℹ").blue(), message),
    }
  }
}

/// Writes copied text to stdout, where it can be selected or piped into a clipboard tool.
#[derive(Debug, Default)]
pub struct TerminalClipboard;

impl Clipboard for TerminalClipboard {
  fn copy(&mut self, text: &str) -> Result<(), DeckError> {
    println!("{} {}", style(LINK).cyan(), style(text).blue().underlined());
    Ok(())
  }
}

/// Prints the dashboard statistics.
pub fn print_stats(stats: &Stats) {
  println!("\n{} Repository overview:", style(BOOKS).cyan());
  println!("   {} {}", style("Papers:").green().bold(), style(stats.paper_count).yellow());
  println!("   {} {}", style("Categories:").green().bold(), style(stats.category_count).yellow());
  println!("   {} {}", style("Last update:").green().bold(), style(stats.latest_update).yellow());
}

/// Prints one category line.
pub fn print_category(category: &Category) {
  println!("   {} {}", style(format!("{:<16}", category.code)).cyan(), style(&category.name).white());
}

/// Prints a numbered paper card.
pub fn print_paper(number: usize, paper: &Paper) {
  let card = PaperCard::new(paper);
  println!("\n{}. {}", style(number).yellow(), style(&paper.title).white().bold());
  println!("   {} {}", style("Authors:").green(), style(card.authors()).white());
  println!(
    "   {} {} {}",
    style("arXiv:").green(),
    style(&paper.arxiv_id).yellow(),
    style(&paper.arxiv_url).blue().underlined()
  );
  println!("   {} {}", style("Subjects:").green(), style(&paper.subjects).cyan());
  if let Some(comments) = &paper.comments {
    println!("   {} {}", style("Comments:").green(), style(comments).white());
  }
  if !paper.abstract_text.is_empty() {
    println!("   {} {}", style("Abstract:").green(), style(card.abstract_text()).white().italic());
  }
}

/// Prints a list of papers, numbering from `first_number`.
pub fn print_papers(papers: &[Paper], first_number: usize) {
  for (i, paper) in papers.iter().enumerate() {
    print_paper(first_number + i, paper);
  }
}
