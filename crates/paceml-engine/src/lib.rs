pub mod io;
pub mod models;
pub mod parsing;
pub mod render;

// Re-export key types for easier usage
pub use io::{IoError, LoadError, load_workout};
pub use models::*;
pub use parsing::{ParseError, Parser, Token, TokenKind, parse_workout, tokenize};
