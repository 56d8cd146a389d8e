use thiserror::Error;

/// A directive whose text does not have the shape its kind requires.
///
/// Every variant is fatal: parsing stops at the first malformed directive
/// and no partial workout is returned.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    #[error("invalid zone directive on line {line}: {reason}: {text}")]
    Zone {
        line: usize,
        text: String,
        reason: String,
    },

    #[error("invalid interval directive on line {line}: {reason}: {text}")]
    Interval {
        line: usize,
        text: String,
        reason: String,
    },

    #[error("invalid repetition directive on line {line}: {reason}: {text}")]
    Repetition {
        line: usize,
        text: String,
        reason: String,
    },
}

impl ParseError {
    /// The raw text of the offending directive.
    pub fn text(&self) -> &str {
        match self {
            ParseError::Zone { text, .. }
            | ParseError::Interval { text, .. }
            | ParseError::Repetition { text, .. } => text,
        }
    }

    /// 1-based line of the offending directive.
    pub fn line(&self) -> usize {
        match self {
            ParseError::Zone { line, .. }
            | ParseError::Interval { line, .. }
            | ParseError::Repetition { line, .. } => *line,
        }
    }
}
