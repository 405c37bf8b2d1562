use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Author-assigned identifier of a question record.
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct QuestionId(u64);

impl QuestionId {
    /// Creates a new `QuestionId`
    #[must_use]
    pub fn new(id: u64) -> Self {
        Self(id)
    }

    /// Returns the underlying u64 value
    #[must_use]
    pub fn value(&self) -> u64 {
        self.0
    }
}

impl fmt::Debug for QuestionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "QuestionId({})", self.0)
    }
}

impl fmt::Display for QuestionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for QuestionId {
    type Err = std::num::ParseIntError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.trim().parse::<u64>().map(Self)
    }
}

impl From<u64> for QuestionId {
    fn from(value: u64) -> Self {
        Self(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn serializes_as_bare_number() {
        let id = QuestionId::new(7);
        assert_eq!(serde_json::to_string(&id).unwrap(), "7");
        let parsed: QuestionId = serde_json::from_str("12").unwrap();
        assert_eq!(parsed.value(), 12);
    }

    #[test]
    fn parses_from_trimmed_string() {
        assert_eq!(" 42 ".parse::<QuestionId>().unwrap(), QuestionId::new(42));
        assert!("forty-two".parse::<QuestionId>().is_err());
    }
}
