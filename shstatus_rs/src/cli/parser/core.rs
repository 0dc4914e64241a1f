//! Main parsing entry point: scan flags, then resolve a leftover subcommand word.

use tracing::debug;

use crate::aliases;
use crate::cli::command::ParsedCommand;
use crate::error::{Result, StatusError};

use super::scanner::scan;

/// Parse the arguments that follow the command name.
///
/// When `--help` is present the subcommand word is left unresolved and every
/// remaining argument stays in `args`.
pub fn parse_command(args: &[String]) -> Result<ParsedCommand> {
    let scanned = scan(args).inspect_err(|err| {
        if let Some(position) = err.position() {
            debug!("scan failed at argument {position}: {err}");
        }
    })?;

    let mut options = scanned.options;
    let mut rest: Vec<String> = args[scanned.consumed..].to_vec();

    if !options.print_help && !rest.is_empty() {
        let word = rest.remove(0);
        let action = aliases::resolve(&word);
        if action.is_undefined() {
            return Err(StatusError::UnrecognizedSubcommand { word });
        }
        options.claim_action(action)?;
    }

    let mut parsed = ParsedCommand::new(options, rest);
    parsed.legacy_flag = scanned.legacy_flag;
    debug!(
        action = ?parsed.action(),
        level = parsed.options.level,
        positional = parsed.args.len(),
        "resolved status invocation"
    );
    Ok(parsed)
}
