use crate::constants::{FALLBACK_SEPARATOR, PLACEHOLDER_CLOSE, PLACEHOLDER_OPEN};
use regex::Regex;
use std::sync::LazyLock;

/// Shortest `<<…>>` run on a single line with at least one inner character.
static PLACEHOLDER_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"<<(.+?)>>").expect("placeholder pattern is valid"));

/// Byte range of a piece in the template source.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Span {
    pub start: usize,
    pub end: usize,
}

impl Span {
    pub fn new(start: usize, end: usize) -> Self {
        Self { start, end }
    }

    /// The same range counted in `char`s of `source`, for editors that address
    /// text by character rather than by byte.
    pub fn char_range(&self, source: &str) -> (usize, usize) {
        let start = source[..self.start].chars().count();
        let len = source[self.start..self.end].chars().count();
        (start, start + len)
    }

    pub fn len(&self) -> usize {
        self.end - self.start
    }

    pub fn is_empty(&self) -> bool {
        self.start == self.end
    }
}

/// A `<<key>>` or `<<key|fallback>>` marker.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Placeholder {
    /// Column name, trimmed of surrounding whitespace.
    pub key: String,
    /// Text after the first `|`, verbatim. `Some("")` for `<<key|>>`.
    pub fallback: Option<String>,
    pub span: Span,
}

impl Placeholder {
    /// The marker shown in place of a missing value that has no fallback.
    pub fn marker(&self) -> String {
        format!("{PLACEHOLDER_OPEN}{}{PLACEHOLDER_CLOSE}", self.key)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Piece {
    Literal { text: String, span: Span },
    Placeholder(Placeholder),
}

impl Piece {
    pub fn span(&self) -> Span {
        match self {
            Piece::Literal { span, .. } => *span,
            Piece::Placeholder(p) => p.span,
        }
    }
}

/// A parsed template.
///
/// Parsing never fails: anything that does not form a complete placeholder
/// (an unmatched `<<`, `<<>>`, a marker broken by a newline) stays literal text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Template {
    source: String,
    pieces: Vec<Piece>,
}

impl Template {
    pub fn parse(source: impl Into<String>) -> Self {
        let source = source.into();
        let pieces = tokenize(&source);
        Self { source, pieces }
    }

    pub fn source(&self) -> &str {
        &self.source
    }

    pub fn pieces(&self) -> &[Piece] {
        &self.pieces
    }

    /// Placeholders in source order, duplicates included.
    pub fn placeholders(&self) -> impl Iterator<Item = &Placeholder> {
        self.pieces.iter().filter_map(|piece| match piece {
            Piece::Placeholder(p) => Some(p),
            Piece::Literal { .. } => None,
        })
    }

    /// Distinct placeholder keys in order of first appearance.
    pub fn keys(&self) -> Vec<&str> {
        let mut keys: Vec<&str> = Vec::new();
        for placeholder in self.placeholders() {
            if !keys.contains(&placeholder.key.as_str()) {
                keys.push(&placeholder.key);
            }
        }
        keys
    }
}

impl std::str::FromStr for Template {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Template::parse(s))
    }
}

/// Parses template text into its pieces.
pub fn parse(source: &str) -> Template {
    Template::parse(source)
}

fn tokenize(source: &str) -> Vec<Piece> {
    let mut pieces = Vec::new();
    let mut last = 0;

    for captures in PLACEHOLDER_PATTERN.captures_iter(source) {
        let (Some(whole), Some(inner)) = (captures.get(0), captures.get(1)) else {
            continue;
        };
        if whole.start() > last {
            pieces.push(Piece::Literal {
                text: source[last..whole.start()].to_string(),
                span: Span::new(last, whole.start()),
            });
        }

        let (key, fallback) = match inner.as_str().split_once(FALLBACK_SEPARATOR) {
            Some((key, fallback)) => (key, Some(fallback.to_string())),
            None => (inner.as_str(), None),
        };
        pieces.push(Piece::Placeholder(Placeholder {
            key: key.trim().to_string(),
            fallback,
            span: Span::new(whole.start(), whole.end()),
        }));
        last = whole.end();
    }

    if last < source.len() {
        pieces.push(Piece::Literal {
            text: source[last..].to_string(),
            span: Span::new(last, source.len()),
        });
    }
    pieces
}
