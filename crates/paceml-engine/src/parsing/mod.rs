//! # Workout Parsing
//!
//! Two-phase parsing of PaceML text into a [`Workout`].
//!
//! ## Parsing Phases
//!
//! 1. **Tokenization** (`tokenizer`): the source is split into classified
//!    tokens, one per directive, comment or note, in source order
//!
//! 2. **Document building** (`builder`): a `WorkoutBuilder` consumes the
//!    tokens once, tracking whether indented intervals should be grouped
//!    under the most recent repetition
//!
//! ## Modules
//!
//! - **`tokenizer`**: `Tokenizer`, `Token` and `TokenKind`
//! - **`directives`**: takes individual directive tokens apart
//! - **`builder`**: `WorkoutBuilder` state machine
//! - **`error`**: `ParseError`
//! - **`span`**: byte spans into the source
//!
//! ## Key Invariants
//!
//! - `Workout::elements` keeps intervals and repetitions in document order
//! - Only one level of nesting exists: repetitions never contain repetitions
//! - The first malformed directive aborts the parse; no partial workout escapes

pub mod builder;
pub mod directives;
pub mod error;
pub mod span;
pub mod tokenizer;

#[cfg(test)]
mod tests;

pub use builder::WorkoutBuilder;
pub use error::ParseError;
pub use span::Span;
pub use tokenizer::{Token, TokenKind, Tokenizer, tokenize};

use crate::models::Workout;

/// Parser over a single document.
///
/// Each parser owns its tokens and output, so independent documents can be
/// parsed concurrently.
pub struct Parser<'a> {
    tokens: Vec<Token<'a>>,
    index: usize,
    builder: WorkoutBuilder,
}

impl<'a> Parser<'a> {
    pub fn new(text: &'a str) -> Self {
        Self {
            tokens: tokenize(text),
            index: 0,
            builder: WorkoutBuilder::new(),
        }
    }

    /// The full token stream of the document.
    pub fn tokens(&self) -> &[Token<'a>] {
        &self.tokens
    }

    pub fn parse(mut self) -> Result<Workout, ParseError> {
        log::debug!("parsing workout from {} tokens", self.tokens.len());

        while let Some(token) = self.tokens.get(self.index) {
            self.builder.push(token)?;
            self.index += 1;
        }

        let workout = self.builder.finish();
        log::debug!(
            "parsed workout: {} zones, {} elements, {} calculations, {} notes",
            workout.zones.len(),
            workout.elements.len(),
            workout.calculations.len(),
            workout.notes.len()
        );
        Ok(workout)
    }
}

/// Parses PaceML text into a [`Workout`].
pub fn parse_workout(text: &str) -> Result<Workout, ParseError> {
    Parser::new(text).parse()
}
