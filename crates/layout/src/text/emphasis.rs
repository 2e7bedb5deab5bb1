//! Inline emphasis tokenizer for `**bold**` and `*italic*` markers.
//!
//! At each `*` the tokenizer first tries a bold span, then an italic span.
//! A bold span closes at the first `**` that starts at least one character
//! after the opener, so its content may contain single `*`. An italic span
//! closes at the first `*` at least one character after the opener. Markers
//! do not nest, there is no escape syntax, and a `*` that opens neither span
//! stays in the surrounding plain text.

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Emphasis {
    Plain,
    Bold,
    Italic,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Span<'a> {
    pub text: &'a str,
    pub emphasis: Emphasis,
}

impl<'a> Span<'a> {
    fn new(text: &'a str, emphasis: Emphasis) -> Self {
        Self { text, emphasis }
    }
}

struct Matched {
    content_start: usize,
    content_end: usize,
    resume_at: usize,
    emphasis: Emphasis,
}

/// Splits `input` into ordered spans. Empty input yields one empty plain span.
pub fn tokenize(input: &str) -> Vec<Span<'_>> {
    if input.is_empty() {
        return vec![Span::new(input, Emphasis::Plain)];
    }

    let bytes = input.as_bytes();
    let mut spans = Vec::new();
    let mut plain_start = 0;
    let mut i = 0;

    while i < bytes.len() {
        if bytes[i] != b'*' {
            i += 1;
            continue;
        }
        match match_at(bytes, i) {
            Some(m) => {
                if plain_start < i {
                    spans.push(Span::new(&input[plain_start..i], Emphasis::Plain));
                }
                spans.push(Span::new(
                    &input[m.content_start..m.content_end],
                    m.emphasis,
                ));
                i = m.resume_at;
                plain_start = i;
            }
            None => i += 1,
        }
    }

    if plain_start < bytes.len() {
        spans.push(Span::new(&input[plain_start..], Emphasis::Plain));
    }
    spans
}

fn match_at(bytes: &[u8], i: usize) -> Option<Matched> {
    if bytes.get(i + 1) == Some(&b'*') {
        if let Some(close) = find(bytes, i + 3, b"**") {
            return Some(Matched {
                content_start: i + 2,
                content_end: close,
                resume_at: close + 2,
                emphasis: Emphasis::Bold,
            });
        }
    }
    find(bytes, i + 2, b"*").map(|close| Matched {
        content_start: i + 1,
        content_end: close,
        resume_at: close + 1,
        emphasis: Emphasis::Italic,
    })
}

// Markers are ASCII, so every hit is a char boundary.
fn find(bytes: &[u8], from: usize, marker: &[u8]) -> Option<usize> {
    if from >= bytes.len() {
        return None;
    }
    bytes[from..]
        .windows(marker.len())
        .position(|window| window == marker)
        .map(|offset| offset + from)
}
