use crate::SourcePosition;

/// A span of source text from start to end position.
///
/// The span is a half-open interval: `[start_inclusive, end_exclusive)`.
/// - `start_inclusive`: Position of the first character of the source text
/// - `end_exclusive`: Position immediately after the last character
#[derive(Clone, Debug, Eq, PartialEq, serde::Serialize)]
pub struct SourceSpan {
    pub start_inclusive: SourcePosition,
    pub end_exclusive: SourcePosition,
}

impl SourceSpan {
    pub fn new(start: SourcePosition, end: SourcePosition) -> Self {
        Self {
            start_inclusive: start,
            end_exclusive: end,
        }
    }

    /// A zero-width span at the very start of a document.
    pub fn empty() -> Self {
        let zero = SourcePosition::new(0, 0, 0);
        Self::new(zero.clone(), zero)
    }

    /// The byte range covered by this span, for slicing the source text.
    pub fn byte_range(&self) -> std::ops::Range<usize> {
        self.start_inclusive.byte_offset()..self.end_exclusive.byte_offset()
    }
}
