//! Character-offset spans over a document's text

use serde::{Deserialize, Serialize};

/// Half-open interval `[start, end)` of character offsets
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Span {
    /// First character covered by the span
    pub start: usize,
    /// One past the last character covered by the span
    pub end: usize,
}

impl Span {
    /// Create a new span
    pub fn new(start: usize, end: usize) -> Self {
        debug_assert!(start <= end, "span start must not exceed its end");
        Self { start, end }
    }

    /// Number of characters covered
    pub fn len(&self) -> usize {
        self.end.saturating_sub(self.start)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// True if `other` lies entirely within this span
    pub fn encloses(&self, other: &Span) -> bool {
        self.start <= other.start && other.end <= self.end
    }

    /// Re-express this span with `origin.start` as offset zero
    ///
    /// Returns `None` if this span starts before the origin.
    pub fn relative(&self, origin: &Span) -> Option<Span> {
        let start = self.start.checked_sub(origin.start)?;
        let end = self.end.checked_sub(origin.start)?;
        Some(Span { start, end })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_encloses() {
        let outer = Span::new(10, 30);
        assert!(outer.encloses(&Span::new(15, 18)));
        assert!(outer.encloses(&Span::new(10, 30)));
        assert!(outer.encloses(&Span::new(30, 30)));
        assert!(!outer.encloses(&Span::new(5, 9)));
        assert!(!outer.encloses(&Span::new(25, 31)));
    }

    #[test]
    fn test_relative() {
        let origin = Span::new(10, 30);
        assert_eq!(Span::new(15, 18).relative(&origin), Some(Span::new(5, 8)));
        assert_eq!(Span::new(10, 30).relative(&origin), Some(Span::new(0, 20)));
        assert_eq!(Span::new(5, 9).relative(&origin), None);
    }

    #[test]
    fn test_len_and_empty() {
        assert_eq!(Span::new(3, 8).len(), 5);
        assert!(Span::new(4, 4).is_empty());
    }

    #[test]
    fn test_json_shape() {
        let span: Span = serde_json::from_str(r#"{"start": 2, "end": 7}"#).unwrap();
        assert_eq!(span, Span::new(2, 7));
    }
}
