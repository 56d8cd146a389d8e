use std::fmt::{self, Write};

use crate::models::{Element, Interval, Workout};

const UNSET: &str = "-";

impl Workout {
    /// Human-readable rendering for diagnostics. Not meant to be parsed back.
    pub fn dump(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for Workout {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let meta = &self.metadata;
        writeln!(f, "Title: {}", meta.title.as_deref().unwrap_or(UNSET))?;
        writeln!(f, "Date: {}", meta.date.as_deref().unwrap_or(UNSET))?;
        writeln!(f, "Athlete: {}", meta.athlete.as_deref().unwrap_or(UNSET))?;

        writeln!(f, "Zones:")?;
        for zone in &self.zones {
            write!(f, "  {}: {} - {}", zone.name, zone.start, zone.end)?;
            if let Some(description) = &zone.description {
                write!(f, " ({description})")?;
            }
            writeln!(f)?;
        }

        writeln!(f, "Elements:")?;
        for element in &self.elements {
            match element {
                Element::Interval(interval) => write_interval(f, interval, 1)?,
                Element::Repetition(repetition) => {
                    write!(f, "  Repetition")?;
                    if let Some(title) = &repetition.title {
                        write!(f, " [{title}]")?;
                    }
                    writeln!(f, " x{}", repetition.count)?;
                    for interval in &repetition.intervals {
                        write_interval(f, interval, 2)?;
                    }
                }
            }
        }

        writeln!(f, "Calculations:")?;
        for calculation in &self.calculations {
            writeln!(f, "  {}", calculation.calc_type)?;
        }

        writeln!(f, "Notes:")?;
        for note in &self.notes {
            writeln!(f, "  {note}")?;
        }
        Ok(())
    }
}

fn write_interval(f: &mut fmt::Formatter<'_>, interval: &Interval, depth: usize) -> fmt::Result {
    let mut line = "  ".repeat(depth);
    line.push_str("Interval");
    if let Some(title) = &interval.title {
        write!(line, " [{title}]")?;
    }
    write!(line, " {} @ {}", interval.amount, interval.zone)?;
    if !interval.additional_params.is_empty() {
        let params: Vec<String> = interval
            .additional_params
            .iter()
            .map(|(key, value)| format!("{key}={value}"))
            .collect();
        write!(line, " {{{}}}", params.join(", "))?;
    }
    writeln!(f, "{line}")
}
