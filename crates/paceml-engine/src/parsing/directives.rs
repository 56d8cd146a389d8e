//! Component extraction for individual directive tokens.
//!
//! The tokenizer only decides a token's kind. These functions take the raw
//! token text apart and report a [`ParseError`] when the text does not have
//! the shape its kind requires.

use std::collections::BTreeMap;
use std::sync::OnceLock;

use regex::Regex;

use crate::models::{CalculationKind, Interval, Repetition, Zone};

use super::{error::ParseError, tokenizer::Token};

const ZONE_SHAPE: &str = "`@define_zone[name]{start}{end}{description}`";
const INTERVAL_SHAPE: &str = "`@interval[title]{amount}{zone}{key=value,...}`";
const REPS_SHAPE: &str = "`@reps[title]{count}`";

fn braced_value() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"\{(.*?)\}").expect("Invalid braced value regex"))
}

fn zone_shape() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        Regex::new(r"^@define_zone\[(\w+)\]\{(.*?)\}\{(.*?)\}\{(.*?)\}")
            .expect("Invalid zone regex")
    })
}

fn interval_shape() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        Regex::new(r"^[ \t]*@interval(?:\[(.*?)\])?\{([^{}]+)\}\{([^{}]+)\}(?:\{([^{}]*)\})?")
            .expect("Invalid interval regex")
    })
}

fn reps_shape() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        Regex::new(r"^@reps(?:\[(.*?)\])?\{([^{}]+)\}").expect("Invalid reps regex")
    })
}

/// Whether an interval token was written indented under a repetition.
pub fn is_indented(text: &str) -> bool {
    text.starts_with("  ") || text.starts_with('\t')
}

/// Value of a `@title`, `@date` or `@athlete` directive.
///
/// Without braces, the `@keyword` prefix is stripped and the trimmed
/// remainder is used.
pub fn metadata_value(text: &str) -> String {
    if let Some(caps) = braced_value().captures(text) {
        return caps[1].to_string();
    }
    let rest = text.strip_prefix('@').unwrap_or(text);
    rest.trim_start_matches(|c: char| c.is_alphanumeric() || c == '_')
        .trim()
        .to_string()
}

pub fn zone(token: &Token<'_>) -> Result<Zone, ParseError> {
    let caps = zone_shape().captures(token.text).ok_or_else(|| ParseError::Zone {
        line: token.line,
        text: token.text.to_string(),
        reason: format!("expected {ZONE_SHAPE}"),
    })?;

    Ok(Zone {
        name: caps[1].to_string(),
        start: caps[2].to_string(),
        end: caps[3].to_string(),
        description: non_blank(&caps[4]),
    })
}

pub fn interval(token: &Token<'_>) -> Result<Interval, ParseError> {
    let caps = interval_shape()
        .captures(token.text)
        .ok_or_else(|| interval_error(token, format!("expected {INTERVAL_SHAPE}")))?;

    let additional_params = match caps.get(4) {
        Some(list) => params(token, list.as_str())?,
        None => BTreeMap::new(),
    };

    Ok(Interval {
        title: caps.get(1).and_then(|m| non_blank(m.as_str())),
        amount: caps[2].to_string(),
        zone: caps[3].to_string(),
        additional_params,
    })
}

/// Splits `key=value,key=value` on commas, then each pair on its first `=`.
fn params(token: &Token<'_>, list: &str) -> Result<BTreeMap<String, String>, ParseError> {
    list.split(',')
        .map(str::trim)
        .filter(|pair| !pair.is_empty())
        .map(|pair| {
            let (key, value) = pair.split_once('=').ok_or_else(|| {
                interval_error(token, format!("parameter `{pair}` is missing `=`"))
            })?;
            Ok((key.trim().to_string(), value.trim().to_string()))
        })
        .collect()
}

fn interval_error(token: &Token<'_>, reason: String) -> ParseError {
    ParseError::Interval {
        line: token.line,
        text: token.text.to_string(),
        reason,
    }
}

/// A repetition with no nested intervals yet.
pub fn repetition(token: &Token<'_>) -> Result<Repetition, ParseError> {
    let error = |reason: String| ParseError::Repetition {
        line: token.line,
        text: token.text.to_string(),
        reason,
    };

    let caps = reps_shape()
        .captures(token.text)
        .ok_or_else(|| error(format!("expected {REPS_SHAPE}")))?;

    let raw_count = caps[2].trim();
    let count = raw_count
        .parse::<u32>()
        .ok()
        .filter(|count| *count > 0)
        .ok_or_else(|| error(format!("count `{raw_count}` is not a positive integer")))?;

    Ok(Repetition {
        title: caps.get(1).and_then(|m| non_blank(m.as_str())),
        count,
        intervals: Vec::new(),
    })
}

/// Only `@total_distance` and `@total_time` tokenize as calculations.
pub fn calculation(token: &Token<'_>) -> CalculationKind {
    if token.text.starts_with("@total_distance") {
        CalculationKind::Distance
    } else {
        CalculationKind::Time
    }
}

fn non_blank(s: &str) -> Option<String> {
    (!s.trim().is_empty()).then(|| s.to_string())
}
