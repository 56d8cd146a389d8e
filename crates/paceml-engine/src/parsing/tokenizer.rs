//! # Tokenizer - Classifying PaceML Source
//!
//! First stage of parsing: the source is scanned left to right and every
//! non-blank region is classified into a [`TokenKind`].
//!
//! ## Matcher Priority
//!
//! At each scan position the matchers are tried in a fixed order and the
//! first one that matches wins. The order is load-bearing:
//!
//! 1. `#` comments, before anything else can claim the line
//! 2. well-formed directives (`@title{..}`, `@define_zone[..]{..}{..}{..}`, ...)
//! 3. malformed directives, which keep their directive kind so the parser can
//!    reject them with a format error instead of silently keeping a note
//! 4. notes, which accept whatever is left on the line
//!
//! ## Lines and Whitespace
//!
//! Matches never cross a line break, and line breaks are never part of a
//! token. Blank lines and whitespace-only remainders produce no token.
//! Leading whitespace is only admitted by the interval matcher, where it
//! marks the interval as indented under a repetition.

use std::fmt;
use std::sync::OnceLock;

use regex::Regex;

use super::span::Span;

/// Lexical category of a token.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TokenKind {
    Comment,
    Title,
    Date,
    Athlete,
    Zone,
    Interval,
    Reps,
    Calculation,
    Note,
}

impl TokenKind {
    /// Upper-case name used in token dumps.
    pub fn name(self) -> &'static str {
        match self {
            TokenKind::Comment => "COMMENT",
            TokenKind::Title => "TITLE",
            TokenKind::Date => "DATE",
            TokenKind::Athlete => "ATHLETE",
            TokenKind::Zone => "ZONE",
            TokenKind::Interval => "INTERVAL",
            TokenKind::Reps => "REPS",
            TokenKind::Calculation => "CALCULATION",
            TokenKind::Note => "NOTE",
        }
    }
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A classified region of the source.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Token<'a> {
    pub kind: TokenKind,
    /// The matched source text, including any leading indentation.
    pub text: &'a str,
    /// Byte span of `text` in the source.
    pub span: Span,
    /// 1-based line the token starts on.
    pub line: usize,
}

struct Matcher {
    kind: TokenKind,
    pattern: Regex,
}

const PATTERNS: &[(TokenKind, &str)] = &[
    (TokenKind::Comment, r"^#.*"),
    (TokenKind::Title, r"^@title\{.*?\}"),
    (TokenKind::Date, r"^@date\{.*?\}"),
    (TokenKind::Athlete, r"^@athlete\{.*?\}"),
    (TokenKind::Zone, r"^@define_zone\[\w+\]\{.*?\}\{.*?\}\{.*?\}"),
    (
        TokenKind::Interval,
        r"^[ \t]*@interval(?:\[.*?\])?\{[^{}]+\}\{[^{}]+\}(?:\{[^{}]*\})?",
    ),
    (TokenKind::Reps, r"^@reps(?:\[.*?\])?\{[^{}]+\}"),
    (TokenKind::Calculation, r"^@total_(?:distance|time)"),
    // Malformed directives: the rest of the line, still tagged with the directive kind.
    (TokenKind::Title, r"^@title\b.*"),
    (TokenKind::Date, r"^@date\b.*"),
    (TokenKind::Athlete, r"^@athlete\b.*"),
    (TokenKind::Zone, r"^@define_zone\b.*"),
    (TokenKind::Interval, r"^[ \t]*@interval\b.*"),
    (TokenKind::Reps, r"^@reps\b.*"),
    (TokenKind::Note, r"^.+"),
];

fn matchers() -> &'static [Matcher] {
    static MATCHERS: OnceLock<Vec<Matcher>> = OnceLock::new();
    MATCHERS.get_or_init(|| {
        PATTERNS
            .iter()
            .map(|&(kind, pattern)| Matcher {
                kind,
                pattern: Regex::new(pattern).expect("Invalid token pattern"),
            })
            .collect()
    })
}

/// Classifies the start of `line`, returning the kind and matched length.
fn classify(line: &str) -> (TokenKind, usize) {
    matchers()
        .iter()
        .find_map(|m| {
            m.pattern
                .find(line)
                .filter(|found| found.end() > 0)
                .map(|found| (m.kind, found.end()))
        })
        .unwrap_or((TokenKind::Note, line.len()))
}

/// Streaming tokenizer over a PaceML document.
pub struct Tokenizer<'a> {
    source: &'a str,
    pos: usize,
    line: usize,
}

impl<'a> Tokenizer<'a> {
    pub fn new(source: &'a str) -> Self {
        Self {
            source,
            pos: 0,
            line: 1,
        }
    }
}

impl<'a> Iterator for Tokenizer<'a> {
    type Item = Token<'a>;

    fn next(&mut self) -> Option<Token<'a>> {
        loop {
            let rest = &self.source[self.pos..];
            if rest.is_empty() {
                return None;
            }

            let line_len = rest.find('\n').unwrap_or(rest.len());
            if line_len == 0 {
                self.pos += 1;
                self.line += 1;
                continue;
            }

            let raw_line = &rest[..line_len];
            let line = raw_line.strip_suffix('\r').unwrap_or(raw_line);
            if line.trim().is_empty() {
                self.pos += line_len;
                continue;
            }

            let (kind, len) = classify(line);
            let span = Span::new(self.pos, self.pos + len);
            self.pos = span.end;

            return Some(Token {
                kind,
                text: span.slice(self.source),
                span,
                line: self.line,
            });
        }
    }
}

/// Tokenizes a whole document, preserving source order.
pub fn tokenize(source: &str) -> Vec<Token<'_>> {
    Tokenizer::new(source).collect()
}
