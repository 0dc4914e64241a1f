//! Parsed-command types and help text for `status`.
//!
//! - `options`: the working options record filled in by the scanner
//! - `parsed`: ParsedCommand, the scanner's result handed to the dispatcher
//! - `help`: per-action descriptions and the `--help` page
//! - `help_texts`: static help text

mod help;
mod help_texts;
pub mod options;
mod parsed;

pub use help::format_help;
pub use options::StatusOptions;
pub use parsed::ParsedCommand;
