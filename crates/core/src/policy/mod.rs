//! Release policy: the tunable parameters and token lists a release is judged
//! against, plus the lexical token scanner.

mod config;
mod scanner;

pub use config::{PolicyConfig, PolicySnapshot, TokenLists};
pub use scanner::scan_tokens;
