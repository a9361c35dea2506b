//! Keyword categorizer.
//!
//! The keyword set and the match order are load-bearing: every persisted
//! event was classified with exactly these rules, so changing either would
//! silently reshuffle existing data. The server applies this function
//! authoritatively at creation time; clients may re-run it as a preview
//! but never submit the result.

use crate::event::Category;

/// Assign a [`Category`] from an event title.
///
/// Case-insensitive substring match, first match wins: "meeting" or
/// "project" → [`Category::Work`]; otherwise "birthday" or "party" →
/// [`Category::Personal`]; otherwise [`Category::Other`]. Total and pure:
/// every title classifies, and nothing else is consulted.
pub fn categorize(title: &str) -> Category {
  let title = title.to_lowercase();
  if title.contains("meeting") || title.contains("project") {
    Category::Work
  } else if title.contains("birthday") || title.contains("party") {
    Category::Personal
  } else {
    Category::Other
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn work_keywords_match_any_case_and_position() {
    assert_eq!(categorize("Team meeting"), Category::Work);
    assert_eq!(categorize("MEETING with legal"), Category::Work);
    assert_eq!(categorize("kickoff: Project Phoenix"), Category::Work);
    assert_eq!(categorize("projections review"), Category::Work);
  }

  #[test]
  fn personal_keywords_match_without_work_keyword() {
    assert_eq!(categorize("Mum's birthday"), Category::Personal);
    assert_eq!(categorize("BIRTHDAY brunch"), Category::Personal);
    assert_eq!(categorize("House party"), Category::Personal);
  }

  #[test]
  fn work_wins_over_personal() {
    assert_eq!(categorize("birthday party planning meeting"), Category::Work);
    assert_eq!(categorize("project: party supplies"), Category::Work);
  }

  #[test]
  fn everything_else_is_other() {
    assert_eq!(categorize("Dentist"), Category::Other);
    assert_eq!(categorize("meetin"), Category::Other);
    assert_eq!(categorize(""), Category::Other);
  }
}
