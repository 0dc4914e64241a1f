//! Argument parser for `status`.
//!
//! Two surfaces select an action: deprecated flags (`status --is-login`) and
//! subcommand words (`status is-login`). Both feed the same exclusivity guard.
//!
//! # Module Structure
//!
//! - [`scanner`] - flag table and getopt-style scanning of leading flags
//! - [`guard`] - the one place an action is claimed
//! - [`core`] - main entry point: scan, then resolve the subcommand word
//!
//! # Usage
//!
//! ```
//! use shstatus::cli::parser::parse_command;
//! use shstatus::Action;
//!
//! let args: Vec<String> = vec!["-L".into(), "2".into(), "current-function".into()];
//! let parsed = parse_command(&args).unwrap();
//! assert_eq!(parsed.action(), Action::Function);
//! assert_eq!(parsed.options.level, 2);
//! ```

mod core;
pub mod guard;
pub mod scanner;

pub use self::core::parse_command;
pub use guard::claim;
pub use scanner::{FLAGS, FlagKind, FlagSpec, Scan, parse_level, scan};
