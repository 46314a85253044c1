use crate::ErrorNote;
use crate::ErrorNoteKind;
use crate::ErrorNotes;
use crate::ParseErrorKind;
use crate::SourceSpan;

/// A parse error with location information and contextual notes.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
#[error("{}", self.format_oneline())]
pub struct ParseError {
    /// Human-readable primary error message, e.g.
    /// "field: expected token to be , or { but got IDENT (b)".
    message: String,

    /// Where the error was detected. For token mismatches this is the
    /// offending token's span; for a missing operation it is the end of the
    /// document.
    span: SourceSpan,

    kind: ParseErrorKind,

    notes: ErrorNotes,
}

impl ParseError {
    /// Creates a new parse error with no notes.
    pub fn new(message: impl Into<String>, span: SourceSpan, kind: ParseErrorKind) -> Self {
        Self {
            message: message.into(),
            span,
            kind,
            notes: ErrorNotes::new(),
        }
    }

    /// Creates a new parse error with notes (e.g. carried over from an
    /// illegal token).
    pub fn with_notes(
        message: impl Into<String>,
        span: SourceSpan,
        kind: ParseErrorKind,
        notes: ErrorNotes,
    ) -> Self {
        Self {
            message: message.into(),
            span,
            kind,
            notes,
        }
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    pub fn span(&self) -> &SourceSpan {
        &self.span
    }

    pub fn kind(&self) -> &ParseErrorKind {
        &self.kind
    }

    pub fn notes(&self) -> &ErrorNotes {
        &self.notes
    }

    /// Adds a general note without a span.
    pub fn add_note(&mut self, message: impl Into<String>) {
        self.notes.push(ErrorNote::general(message));
    }

    /// Adds a help note without a span.
    pub fn add_help(&mut self, message: impl Into<String>) {
        self.notes.push(ErrorNote::help(message));
    }

    /// Formats this error as a diagnostic string for CLI output.
    ///
    /// Produces output like:
    /// ```text
    /// error: field: expected token to be , or { but got IDENT (b)
    ///   --> <input>:1:11
    ///    |
    ///  1 | query { a b }
    ///    |           ^
    ///    = help: Separate fields with `,`
    /// ```
    ///
    /// `source` is used for snippet extraction; when `None`, only the
    /// location line is shown.
    pub fn format_detailed(&self, source: Option<&str>) -> String {
        let mut output = String::new();

        output.push_str("error: ");
        output.push_str(&self.message);
        output.push('\n');

        let line = self.span.start_inclusive.line() + 1;
        let column = self.span.start_inclusive.col() + 1;
        output.push_str(&format!("  --> <input>:{line}:{column}\n"));

        if let Some(src) = source
            && let Some(snippet) = format_source_snippet(src, &self.span)
        {
            output.push_str(&snippet);
        }

        for note in &self.notes {
            let prefix = match note.kind {
                ErrorNoteKind::General => "note",
                ErrorNoteKind::Help => "help",
            };
            output.push_str(&format!("   = {prefix}: {}\n", note.message));

            if let (Some(note_span), Some(src)) = (&note.span, source)
                && let Some(snippet) = format_note_snippet(src, note_span)
            {
                output.push_str(&snippet);
            }
        }

        output
    }

    /// Formats this error as a single-line summary:
    /// ```text
    /// <input>:1:11: error: field: expected token to be , or { but got IDENT (b)
    /// ```
    pub fn format_oneline(&self) -> String {
        let line = self.span.start_inclusive.line() + 1;
        let column = self.span.start_inclusive.col() + 1;
        format!("<input>:{line}:{column}: error: {}", self.message)
    }
}

/// Returns the 0-based `line_num`th line of `source`. `\n`, `\r\n` and a
/// lone `\r` each end a line, matching the lexer's line counting.
fn source_line(source: &str, line_num: usize) -> Option<&str> {
    let bytes = source.as_bytes();
    let mut line = 0;
    let mut line_start = 0;
    let mut i = 0;
    while i < bytes.len() {
        if bytes[i] == b'\n' || bytes[i] == b'\r' {
            if line == line_num {
                return Some(&source[line_start..i]);
            }
            if bytes[i] == b'\r' && bytes.get(i + 1) == Some(&b'\n') {
                i += 1;
            }
            line += 1;
            line_start = i + 1;
        }
        i += 1;
    }
    (line == line_num).then(|| &source[line_start..])
}

/// Formats the source line containing `span` with a caret underline.
fn format_source_snippet(source: &str, span: &SourceSpan) -> Option<String> {
    let line_num = span.start_inclusive.line();
    let line_content = source_line(source, line_num)?;
    let display_line_num = line_num + 1;
    let width = display_line_num.to_string().len().max(2);

    let col_start = span.start_inclusive.col();
    let col_end = if span.end_exclusive.line() == line_num {
        span.end_exclusive.col()
    } else {
        line_content.chars().count()
    };
    let underline_len = col_end.saturating_sub(col_start).max(1);

    let mut output = String::new();
    output.push_str(&format!("{:>width$} |\n", ""));
    output.push_str(&format!("{display_line_num:>width$} | {line_content}\n"));
    output.push_str(&format!(
        "{:>width$} | {:>col_start$}{}\n",
        "",
        "",
        "^".repeat(underline_len),
    ));
    Some(output)
}

/// Formats the source line of a note's span with a single `-` marker.
fn format_note_snippet(source: &str, span: &SourceSpan) -> Option<String> {
    let line_num = span.start_inclusive.line();
    let line_content = source_line(source, line_num)?;
    let display_line_num = line_num + 1;
    let width = display_line_num.to_string().len().max(2);
    let col_start = span.start_inclusive.col();

    let mut output = String::new();
    output.push_str(&format!("     {display_line_num:>width$} | {line_content}\n"));
    output.push_str(&format!("     {:>width$} | {:>col_start$}-\n", "", ""));
    Some(output)
}
