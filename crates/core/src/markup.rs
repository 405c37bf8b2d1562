//! Explanation markup.
//!
//! Explanations are plain text with two kinds of markup:
//!
//! - fenced code blocks delimited by triple backticks, where the first line of
//!   the block may carry a language tag (```` ```python ````);
//! - `**bold**` spans inside the text between code blocks. A bold span never
//!   crosses a line break.
//!
//! Unmatched delimiters never fail the parse: an unterminated fence turns the
//! remainder into a code block and a stray `**` stays literal text.

const FENCE: &str = "```";
const BOLD: &str = "**";

/// Inline run inside a text segment.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Span {
    Plain(String),
    Bold(String),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CodeBlock {
    pub language: Option<String>,
    pub code: String,
}

impl CodeBlock {
    fn from_fenced(body: &str) -> Self {
        let Some((first, code)) = body.split_once('\n') else {
            return Self {
                language: None,
                code: body.trim().to_owned(),
            };
        };

        let tag = first.trim();
        // A first line with whitespace in it is code, not a language tag.
        if tag.contains(char::is_whitespace) {
            return Self {
                language: None,
                code: strip_trailing_newline(body).to_owned(),
            };
        }

        Self {
            language: (!tag.is_empty()).then(|| tag.to_owned()),
            code: strip_trailing_newline(code).to_owned(),
        }
    }

    fn is_empty(&self) -> bool {
        self.language.is_none() && self.code.trim().is_empty()
    }
}

/// One block of a parsed explanation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Segment {
    Text(Vec<Span>),
    Code(CodeBlock),
}

/// Split explanation markup into text and code segments, in source order.
#[must_use]
pub fn parse_explanation(input: &str) -> Vec<Segment> {
    let mut segments = Vec::new();
    let mut rest = input;

    while let Some(start) = rest.find(FENCE) {
        push_text(&mut segments, &rest[..start]);

        let after = &rest[start + FENCE.len()..];
        let (body, remaining) = match after.find(FENCE) {
            Some(end) => (&after[..end], &after[end + FENCE.len()..]),
            None => (after, ""),
        };

        let block = CodeBlock::from_fenced(body);
        if !block.is_empty() {
            segments.push(Segment::Code(block));
        }
        rest = remaining;
    }
    push_text(&mut segments, rest);

    segments
}

/// Split a text run into plain and bold spans.
#[must_use]
pub fn parse_spans(text: &str) -> Vec<Span> {
    let mut spans = Vec::new();
    let mut plain = String::new();
    let mut rest = text;

    while let Some(open) = rest.find(BOLD) {
        let after = &rest[open + BOLD.len()..];
        match after.find(BOLD) {
            Some(close) if close > 0 && !after[..close].contains('\n') => {
                plain.push_str(&rest[..open]);
                if !plain.is_empty() {
                    spans.push(Span::Plain(std::mem::take(&mut plain)));
                }
                spans.push(Span::Bold(after[..close].to_owned()));
                rest = &after[close + BOLD.len()..];
            }
            _ => {
                plain.push_str(&rest[..open + BOLD.len()]);
                rest = after;
            }
        }
    }

    plain.push_str(rest);
    if !plain.is_empty() {
        spans.push(Span::Plain(plain));
    }
    spans
}

fn push_text(segments: &mut Vec<Segment>, text: &str) {
    if text.is_empty() {
        return;
    }
    segments.push(Segment::Text(parse_spans(text)));
}

fn strip_trailing_newline(code: &str) -> &str {
    code.strip_suffix("\r\n")
        .or_else(|| code.strip_suffix('\n'))
        .unwrap_or(code)
}
