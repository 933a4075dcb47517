//! Text formatting helpers for rendering paper cards.
//!
//! Screens show authors and abstracts in a compact form: long author lists are cut after the
//! third name and abstracts are previewed up to a length limit, ending on a word boundary.
//!
//! # Examples
//!
//! ```
//! use paperdeck::format;
//!
//! let authors = vec!["Ada".to_string(), "Grace".to_string()];
//! assert_eq!(format::format_authors(&authors), "Ada, Grace");
//! assert_eq!(format::format_authors(&[]), "Unknown Authors");
//!
//! let preview = format::preview_abstract("We present a new method for graphs", Some(20));
//! assert_eq!(preview, "We present a new...");
//! ```

/// Shown in place of an empty author list.
pub const UNKNOWN_AUTHORS: &str = "Unknown Authors";

/// Default abstract preview length in characters.
pub const DEFAULT_PREVIEW_LENGTH: usize = 100;

/// Formats an author list for display.
///
/// - An empty list renders as [`UNKNOWN_AUTHORS`]
/// - Up to three authors are joined with `", "`
/// - Longer lists show the first three followed by `"et al."`
pub fn format_authors(authors: &[String]) -> String {
  match authors {
    [] => UNKNOWN_AUTHORS.to_string(),
    [first, second, third, _, ..] => format!("{first}, {second}, {third}, et al."),
    authors => authors.join(", "),
  }
}

/// Produces a short preview of an abstract.
///
/// Whitespace runs collapse to single spaces. If the result is longer than `max_length`
/// characters (default [`DEFAULT_PREVIEW_LENGTH`]), it is cut at the last word that fits and
/// `"..."` is appended. A single word longer than the limit is cut mid-word.
pub fn preview_abstract(abstract_text: &str, max_length: Option<usize>) -> String {
  let collapsed = abstract_text.split_whitespace().collect::<Vec<&str>>().join(" ");

  let max_length = max_length.unwrap_or(DEFAULT_PREVIEW_LENGTH);

  if collapsed.chars().count() <= max_length {
    return collapsed;
  }

  let mut result = String::new();
  let mut length = 0;

  // Build the preview word by word until we hit the limit
  for word in collapsed.split(' ') {
    let word_length = word.chars().count();
    let separator = usize::from(!result.is_empty());
    if length + separator + word_length > max_length {
      break;
    }
    if separator == 1 {
      result.push(' ');
    }
    result.push_str(word);
    length += separator + word_length;
  }

  if result.is_empty() {
    result = collapsed.chars().take(max_length).collect();
  }

  result.push_str("...");
  result
}

#[cfg(test)]
mod tests {
  use super::*;

  fn names(names: &[&str]) -> Vec<String> { names.iter().map(|n| n.to_string()).collect() }

  #[test]
  fn test_format_authors() {
    assert_eq!(format_authors(&[]), "Unknown Authors");
    assert_eq!(format_authors(&names(&["Author One"])), "Author One");
    assert_eq!(format_authors(&names(&["A", "B", "C"])), "A, B, C");
    assert_eq!(
      format_authors(&names(&["Author One", "Author Two", "Author Three", "Author Four"])),
      "Author One, Author Two, Author Three, et al."
    );
  }

  #[test]
  fn test_preview_abstract() {
    assert_eq!(preview_abstract("short", None), "short");
    assert_eq!(preview_abstract("No    extra    spaces", None), "No extra spaces");
    assert_eq!(
      preview_abstract("This Is A Very Long Abstract Indeed", Some(20)),
      "This Is A Very Long..."
    );
    assert_eq!(preview_abstract("Supercalifragilistic", Some(5)), "Super...");
    assert_eq!(preview_abstract("", Some(5)), "");
  }
}
