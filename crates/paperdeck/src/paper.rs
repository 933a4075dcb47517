//! Paper records and the static reference data used to browse them.
//!
//! This module provides the [`Paper`] record every screen renders, the [`Category`]
//! reference list shown on the categories screen, and the [`Subject`] choices offered by the
//! papers and search screens.
//!
//! # Examples
//!
//! ```
//! use paperdeck::paper::{Paper, Subject, POPULAR_CATEGORIES};
//!
//! # fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let paper = Paper::new(
//!   "Diffusion Models: A Novel Approach",
//!   "We present a new method for diffusion models.",
//!   "2024.1234567",
//!   vec!["Author One".into()],
//!   "cs.LG",
//! )?;
//! assert_eq!(paper.arxiv_url, "https://arxiv.org/abs/2024.1234567");
//!
//! let subject: Subject = "physics".parse()?;
//! assert_eq!(subject.to_string(), "Physics");
//!
//! assert_eq!(POPULAR_CATEGORIES[0].code, "cs.AI");
//! # Ok(())
//! # }
//! ```

use lazy_static::lazy_static;

use super::*;

/// Base of every canonical arXiv abstract link.
const ARXIV_ABS_BASE: &str = "https://arxiv.org/abs/";

/// A single arXiv-like paper record.
///
/// Records coming out of a [`PaperRepository`] always have a non-empty `title` and
/// `arxiv_id`. `authors` may be empty but is never missing; it deserializes to an empty list
/// when the field is absent.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Paper {
  /// The paper's title
  pub title:         String,
  /// The paper's abstract text
  #[serde(rename = "abstract")]
  pub abstract_text: String,
  /// The arXiv identifier, unique within one fetched batch
  pub arxiv_id:      String,
  /// Canonical link to the paper's abstract page, derived from `arxiv_id`
  pub arxiv_url:     String,
  /// Author names in listing order
  #[serde(default)]
  pub authors:       Vec<String>,
  /// Free-text classification (e.g. "Computer Science (cs.AI)")
  pub subjects:      String,
  /// Author comments such as venue or page count, if any
  pub comments:      Option<String>,
  /// The date the record was fetched or generated
  pub fetched_at:    NaiveDate,
}

impl Paper {
  /// Creates a paper fetched today, deriving its link from `arxiv_id`.
  ///
  /// # Errors
  ///
  /// Returns [`DeckError::InvalidPaper`] if `title` or `arxiv_id` is blank.
  pub fn new(
    title: impl Into<String>,
    abstract_text: impl Into<String>,
    arxiv_id: impl Into<String>,
    authors: Vec<String>,
    subjects: impl Into<String>,
  ) -> Result<Self, DeckError> {
    let title = title.into();
    let arxiv_id = arxiv_id.into();
    if title.trim().is_empty() {
      return Err(DeckError::InvalidPaper("title is empty".into()));
    }
    if arxiv_id.trim().is_empty() {
      return Err(DeckError::InvalidPaper(format!("{title:?} has no arXiv identifier")));
    }

    let arxiv_url = arxiv_url_for(&arxiv_id);
    Ok(Self {
      title,
      abstract_text: abstract_text.into(),
      arxiv_id,
      arxiv_url,
      authors,
      subjects: subjects.into(),
      comments: None,
      fetched_at: Utc::now().date_naive(),
    })
  }

  /// Attaches author comments to the record.
  pub fn with_comments(mut self, comments: impl Into<String>) -> Self {
    self.comments = Some(comments.into());
    self
  }
}

/// Builds the canonical abstract-page link for an arXiv identifier.
///
/// The identifier is appended verbatim, so prefixed (`arXiv:2301.07041`) and old-style
/// (`math/0211159`) identifiers keep their form.
///
/// ```
/// use paperdeck::paper::arxiv_url_for;
///
/// assert_eq!(arxiv_url_for("2301.07041"), "https://arxiv.org/abs/2301.07041");
/// assert_eq!(arxiv_url_for("math/0211159"), "https://arxiv.org/abs/math/0211159");
/// ```
pub fn arxiv_url_for(arxiv_id: &str) -> String { format!("{ARXIV_ABS_BASE}{arxiv_id}") }

/// An arXiv category shown on the categories screen.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Category {
  /// The arXiv category code (e.g. "cs.AI")
  pub code: String,
  /// Human readable name of the category
  pub name: String,
}

impl Category {
  /// Creates a category from its code and display name.
  pub fn new(code: impl Into<String>, name: impl Into<String>) -> Self {
    Self { code: code.into(), name: name.into() }
  }
}

lazy_static! {
  /// The popular categories offered for browsing, in display order.
  pub static ref POPULAR_CATEGORIES: Vec<Category> = vec![
    Category::new("cs.AI", "Artificial Intelligence"),
    Category::new("cs.CL", "Computation and Language"),
    Category::new("cs.CV", "Computer Vision"),
    Category::new("cs.LG", "Machine Learning"),
    Category::new("cs.RO", "Robotics"),
    Category::new("stat.ML", "Statistics - Machine Learning"),
    Category::new("physics.comp-ph", "Computational Physics"),
    Category::new("cs.NE", "Neural and Evolutionary Computing"),
    Category::new("cs.CY", "Computers and Society"),
    Category::new("cs.HC", "Human-Computer Interaction"),
  ];
}

/// Subject filter choices offered by the papers and search screens.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Subject {
  /// No subject filter
  #[default]
  #[serde(rename = "All Subjects")]
  All,
  /// Computer science papers
  #[serde(rename = "Computer Science")]
  ComputerScience,
  /// Physics papers
  Physics,
  /// Mathematics papers
  Mathematics,
  /// Anything else
  Other,
}

impl Subject {
  /// Every subject in picker order.
  pub const CHOICES: [Subject; 5] =
    [Subject::All, Subject::ComputerScience, Subject::Physics, Subject::Mathematics, Subject::Other];

  /// The label shown in the subject picker.
  pub fn label(self) -> &'static str {
    match self {
      Subject::All => "All Subjects",
      Subject::ComputerScience => "Computer Science",
      Subject::Physics => "Physics",
      Subject::Mathematics => "Mathematics",
      Subject::Other => "Other",
    }
  }

  /// The subject whose picker label is exactly `label`.
  ///
  /// Unlike parsing, this does not ignore case or surrounding whitespace.
  pub fn from_label(label: &str) -> Option<Subject> {
    Subject::CHOICES.into_iter().find(|subject| subject.label() == label)
  }

  /// The subject to send to the repository, `None` for [`Subject::All`].
  pub fn as_filter(self) -> Option<Subject> {
    match self {
      Subject::All => None,
      subject => Some(subject),
    }
  }
}

impl fmt::Display for Subject {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result { f.write_str(self.label()) }
}

impl FromStr for Subject {
  type Err = DeckError;

  fn from_str(s: &str) -> Result<Self, Self::Err> {
    Subject::CHOICES
      .into_iter()
      .find(|subject| subject.label().eq_ignore_ascii_case(s.trim()))
      .ok_or_else(|| DeckError::InvalidSubject(s.to_owned()))
  }
}
