use crate::SourceSpan;

/// Append the source text for `span` to `sink` by slicing directly from
/// `source` via byte offsets.
pub(crate) fn append_span_source_slice(
    span: &SourceSpan,
    sink: &mut String,
    source: &str,
) {
    let start = span.start_inclusive.byte_offset();
    let end = span.end_exclusive.byte_offset();
    debug_assert!(
        start <= end,
        "append_span_source_slice: inverted span (start {start} > end {end})",
    );
    debug_assert!(
        end <= source.len(),
        "append_span_source_slice: span byte range {start}..{end} exceeds \
         source length {}",
        source.len(),
    );
    sink.push_str(&source[start..end]);
}

/// Trait implemented by all AST node types. Provides source
/// reconstruction methods.
///
/// All AST node types implement this trait via `#[inherent] impl AstNode`,
/// giving each node both inherent methods (no trait import needed) and a
/// trait bound for generic utilities.
///
/// # Source Reconstruction Modes
///
/// - **Source-slice mode (lossless):** When `source` is `Some(s)`,
///   [`append_source`](AstNode::append_source) slices
///   `&s[span.start.byte_offset..span.end.byte_offset]`.
///
/// - **Canonical mode (lossy):** When `source` is `None`,
///   [`append_source`](AstNode::append_source) walks the AST and emits
///   keywords, names, string literals and punctuation with standard
///   spacing. Fields are emitted before fragment spreads in every
///   selection set, so the output parses back to an equivalent document
///   but is not formatting-identical.
pub trait AstNode {
    /// Append this node's source representation to `sink`.
    fn append_source(&self, sink: &mut String, source: Option<&str>);

    /// Return this node as a source string.
    ///
    /// Convenience wrapper around [`append_source`](AstNode::append_source).
    fn to_source(&self, source: Option<&str>) -> String {
        let mut s = String::new();
        self.append_source(&mut s, source);
        s
    }
}
