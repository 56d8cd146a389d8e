use crate::models::{Calculation, Element, Workout};

use super::{
    directives,
    error::ParseError,
    tokenizer::{Token, TokenKind},
};

/// Repetition grouping state.
///
/// `Active` holds the index in `Workout::elements` of the repetition that
/// receives indented intervals.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Grouping {
    Idle,
    Active { index: usize },
}

/// Builds a [`Workout`] from tokens pushed in source order.
pub struct WorkoutBuilder {
    grouping: Grouping,
    out: Workout,
}

impl WorkoutBuilder {
    pub fn new() -> Self {
        Self {
            grouping: Grouping::Idle,
            out: Workout::default(),
        }
    }

    pub fn push(&mut self, token: &Token<'_>) -> Result<(), ParseError> {
        match token.kind {
            TokenKind::Comment => {}
            TokenKind::Note => self.out.notes.push(token.text.to_string()),
            TokenKind::Title => {
                self.grouping = Grouping::Idle;
                self.out.metadata.title = Some(directives::metadata_value(token.text));
            }
            TokenKind::Date => {
                self.grouping = Grouping::Idle;
                self.out.metadata.date = Some(directives::metadata_value(token.text));
            }
            TokenKind::Athlete => {
                self.grouping = Grouping::Idle;
                self.out.metadata.athlete = Some(directives::metadata_value(token.text));
            }
            TokenKind::Zone => {
                self.grouping = Grouping::Idle;
                self.out.zones.push(directives::zone(token)?);
            }
            TokenKind::Interval => self.push_interval(token)?,
            TokenKind::Reps => {
                let repetition = directives::repetition(token)?;
                self.grouping = Grouping::Active {
                    index: self.out.elements.len(),
                };
                self.out.elements.push(Element::Repetition(repetition));
            }
            TokenKind::Calculation => {
                self.grouping = Grouping::Idle;
                let calc_type = directives::calculation(token);
                self.out.calculations.push(Calculation { calc_type });
            }
        }
        Ok(())
    }

    pub fn finish(self) -> Workout {
        self.out
    }

    fn push_interval(&mut self, token: &Token<'_>) -> Result<(), ParseError> {
        let interval = directives::interval(token)?;

        if let Grouping::Active { index } = self.grouping
            && directives::is_indented(token.text)
            && let Some(Element::Repetition(repetition)) = self.out.elements.get_mut(index)
        {
            repetition.intervals.push(interval);
            return Ok(());
        }

        self.grouping = Grouping::Idle;
        self.out.elements.push(Element::Interval(interval));
        Ok(())
    }
}

impl Default for WorkoutBuilder {
    fn default() -> Self {
        Self::new()
    }
}
