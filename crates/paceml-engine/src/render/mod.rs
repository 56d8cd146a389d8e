//! Renderings of a parsed [`Workout`](crate::models::Workout).
//!
//! - **`json`**: the structural JSON document (`to_json`, `from_json`)
//! - **`dump`**: a fixed-order text listing for diagnostics (`Display`)

pub mod dump;
pub mod json;
