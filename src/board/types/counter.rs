//! Half-move and full-move counters as they appear in FEN.

use std::fmt;

/// A FEN move counter.
///
/// Positions fed to the rules engine often carry `-` in the counter fields, so a
/// counter is either a real number or a placeholder that is written back verbatim.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Counter {
    Placeholder,
    Value(u64),
}

impl Counter {
    /// Parse a counter field. Numbers must be canonical (no leading zeros).
    pub(crate) fn parse(field: &str) -> Option<Counter> {
        if field == "-" {
            return Some(Counter::Placeholder);
        }
        if field.is_empty() || !field.bytes().all(|b| b.is_ascii_digit()) {
            return None;
        }
        if field.len() > 1 && field.starts_with('0') {
            return None;
        }
        field.parse().ok().map(Counter::Value)
    }

    /// The numeric value, if this is not a placeholder.
    #[must_use]
    pub const fn value(self) -> Option<u64> {
        match self {
            Counter::Placeholder => None,
            Counter::Value(n) => Some(n),
        }
    }

    #[must_use]
    pub(crate) fn increment(self) -> Counter {
        match self {
            Counter::Placeholder => Counter::Placeholder,
            Counter::Value(n) => Counter::Value(n.saturating_add(1)),
        }
    }

    #[must_use]
    pub(crate) fn reset(self) -> Counter {
        match self {
            Counter::Placeholder => Counter::Placeholder,
            Counter::Value(_) => Counter::Value(0),
        }
    }
}

impl fmt::Display for Counter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Counter::Placeholder => f.write_str("-"),
            Counter::Value(n) => write!(f, "{n}"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_counter_parse() {
        assert_eq!(Counter::parse("-"), Some(Counter::Placeholder));
        assert_eq!(Counter::parse("0"), Some(Counter::Value(0)));
        assert_eq!(Counter::parse("42"), Some(Counter::Value(42)));
        assert_eq!(Counter::parse("007"), None);
        assert_eq!(Counter::parse("x"), None);
        assert_eq!(Counter::parse(""), None);
        assert_eq!(Counter::parse("-1"), None);
    }

    #[test]
    fn test_counter_beyond_u32() {
        let counter = Counter::parse("4294967296").unwrap();
        assert_eq!(counter.value(), Some(4_294_967_296));
        assert_eq!(counter.to_string(), "4294967296");
        assert_eq!(Counter::Placeholder.value(), None);
        assert_eq!(Counter::parse("18446744073709551616"), None);
    }

    #[test]
    fn test_placeholder_is_sticky() {
        assert_eq!(Counter::Placeholder.increment(), Counter::Placeholder);
        assert_eq!(Counter::Placeholder.reset(), Counter::Placeholder);
        assert_eq!(Counter::Value(3).increment(), Counter::Value(4));
        assert_eq!(Counter::Value(3).reset(), Counter::Value(0));
    }
}
