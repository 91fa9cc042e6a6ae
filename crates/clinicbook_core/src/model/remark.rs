//! Free-text remark attached to people and appointments.

use serde::{Deserialize, Serialize};
use std::fmt::{Display, Formatter};

/// Free-text annotation. Empty text means "no remark".
///
/// Setting an empty remark is a deletion, never a no-op; callers branch on
/// [`Remark::is_empty`] rather than treating empty input as invalid.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Remark(String);

impl Remark {
    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    /// The "no remark" sentinel.
    pub fn empty() -> Self {
        Self(String::new())
    }

    pub fn value(&self) -> &str {
        &self.0
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl Display for Remark {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for Remark {
    fn from(value: &str) -> Self {
        Self::new(value)
    }
}

#[cfg(test)]
mod tests {
    use super::Remark;

    #[test]
    fn empty_remark_is_the_absent_sentinel() {
        assert!(Remark::empty().is_empty());
        assert!(Remark::new("").is_empty());
        assert_eq!(Remark::default(), Remark::empty());
    }

    #[test]
    fn whitespace_is_kept_verbatim() {
        let remark = Remark::new("  ");
        assert!(!remark.is_empty());
        assert_eq!(remark.value(), "  ");
    }
}
