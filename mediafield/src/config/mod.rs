//! Various configuration options to control mediafield

mod global_options;
mod parse;

pub use global_options::{GlobalOptions, apply_global_options};
pub use parse::ParsingMode;

pub(crate) use global_options::global_options;
