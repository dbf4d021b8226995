//! Configuration types
//!
//! Board-agnostic configuration shipped as `watch.toml` and parsed at
//! boot without an allocator.

pub mod parse;
pub mod types;

pub use parse::{parse_config, ParseError};
pub use types::*;
