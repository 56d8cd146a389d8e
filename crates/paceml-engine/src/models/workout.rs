use std::collections::BTreeMap;
use std::fmt;

use serde::de::{self, Deserializer};
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Root of a parsed PaceML document.
///
/// Field order matches the JSON contract: metadata, zones, elements,
/// calculations, notes.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Workout {
    pub metadata: Metadata,
    pub zones: Vec<Zone>,
    /// Intervals and repetitions in document order.
    pub elements: Vec<Element>,
    pub calculations: Vec<Calculation>,
    pub notes: Vec<String>,
}

impl Workout {
    /// Every interval in the order it is performed.
    ///
    /// A repetition with count `n` contributes its nested intervals `n` times.
    pub fn expanded_intervals(&self) -> Vec<&Interval> {
        let mut out = Vec::new();
        for element in &self.elements {
            match element {
                Element::Interval(interval) => out.push(interval),
                Element::Repetition(repetition) => {
                    for _ in 0..repetition.count {
                        out.extend(repetition.intervals.iter());
                    }
                }
            }
        }
        out
    }
}

/// Optional document-level facts; a field is set only if its directive appeared.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Metadata {
    pub title: Option<String>,
    pub date: Option<String>,
    pub athlete: Option<String>,
}

/// A named pace or effort band.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Zone {
    pub name: String,
    pub start: String,
    pub end: String,
    pub description: Option<String>,
}

/// A unit of work.
///
/// Serialized with `"type": "interval"` both at top level and when nested
/// inside a repetition.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename = "interval")]
pub struct Interval {
    pub title: Option<String>,
    pub amount: String,
    /// Zone name. Not checked against the declared zones.
    pub zone: String,
    #[serde(default)]
    pub additional_params: BTreeMap<String, String>,
}

/// A group of intervals performed `count` times.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename = "repetition")]
pub struct Repetition {
    pub title: Option<String>,
    pub count: u32,
    pub intervals: Vec<Interval>,
}

/// Member of the workout body.
///
/// Reading dispatches on the `"type"` key rather than on which fields are
/// present.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum Element {
    Interval(Interval),
    Repetition(Repetition),
}

impl<'de> Deserialize<'de> for Element {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let value = Value::deserialize(deserializer)?;
        match value.get("type").and_then(Value::as_str) {
            Some("interval") => Interval::deserialize(value)
                .map(Element::Interval)
                .map_err(de::Error::custom),
            Some("repetition") => Repetition::deserialize(value)
                .map(Element::Repetition)
                .map_err(de::Error::custom),
            Some(other) => Err(de::Error::unknown_variant(
                other,
                &["interval", "repetition"],
            )),
            None => Err(de::Error::missing_field("type")),
        }
    }
}

/// A requested aggregate, serialized as its bare keyword.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Calculation {
    pub calc_type: CalculationKind,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CalculationKind {
    Distance,
    Time,
}

impl CalculationKind {
    pub fn as_str(self) -> &'static str {
        match self {
            CalculationKind::Distance => "distance",
            CalculationKind::Time => "time",
        }
    }
}

impl fmt::Display for CalculationKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
