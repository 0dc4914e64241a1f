//! Command-line surface of `status`.
//!
//! # Architecture
//!
//! ```text
//! args ──► parser::scan ──► parser::core (word → Action) ──► dispatch ──► handlers
//!                 │                 │
//!                 └──── guard::claim ◄┘   (one action per invocation)
//! ```
//!
//! - [`command`] - options record, ParsedCommand, help text
//! - [`parser`] - flag scanner, exclusivity guard, subcommand resolution
//! - [`dispatch`] - arity check and per-action handlers
//! - [`entrypoint`] - composes the pipeline and reports errors

pub mod command;
pub mod dispatch;
pub mod entrypoint;
pub mod parser;

pub use command::{ParsedCommand, StatusOptions, format_help};
pub use dispatch::{Streams, dispatch, dispatch_command};
pub use entrypoint::{main_entry, run};
pub use parser::parse_command;
