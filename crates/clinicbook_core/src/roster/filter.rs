//! Predicates for the filtered person view.

use crate::model::person::{Person, Role};
use crate::roster::model::PersonPredicate;

/// Matches people whose name contains any keyword as a whole word,
/// ignoring case.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NameContainsKeywordsPredicate {
    keywords: Vec<String>,
}

impl NameContainsKeywordsPredicate {
    /// Blank keywords are dropped; they would never match a word.
    pub fn new<I, S>(keywords: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let keywords = keywords
            .into_iter()
            .map(Into::into)
            .map(|keyword| keyword.trim().to_string())
            .filter(|keyword| !keyword.is_empty())
            .collect();
        Self { keywords }
    }

    pub fn keywords(&self) -> &[String] {
        &self.keywords
    }

    pub fn test(&self, person: &Person) -> bool {
        self.keywords
            .iter()
            .any(|keyword| contains_word_ignore_case(person.name().as_str(), keyword))
    }

    pub fn into_predicate(self) -> PersonPredicate {
        Box::new(move |person: &Person| self.test(person))
    }
}

/// Restricts the view to one role.
pub fn role_predicate(role: Role) -> PersonPredicate {
    Box::new(move |person: &Person| person.role() == role)
}

fn contains_word_ignore_case(sentence: &str, word: &str) -> bool {
    sentence
        .split_whitespace()
        .any(|candidate| candidate.eq_ignore_ascii_case(word))
}
