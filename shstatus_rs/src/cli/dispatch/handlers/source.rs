//! Where execution currently is: file, function and line.

use crate::action::Action;
use crate::cli::dispatch::Streams;
use crate::error::{ExitStatus, Result};
use crate::paths::{basename, dirname};
use crate::session::StatusContext;

/// Printed instead of a filename when commands come from standard input.
pub const STDIN_PLACEHOLDER: &str = "Standard input";

/// Printed when the requested frame is not inside a function.
pub const NOT_A_FUNCTION: &str = "Not a function";

pub(crate) fn filename(
    ctx: &StatusContext<'_>,
    streams: &mut Streams<'_>,
    action: Action,
) -> Result<ExitStatus> {
    let shown = match ctx.interpreter.current_filename() {
        Some(path) if !path.is_empty() => match action {
            Action::Dirname => dirname(&path),
            Action::Basename => basename(&path),
            _ => path,
        },
        _ => STDIN_PLACEHOLDER.to_string(),
    };
    writeln!(streams.out, "{shown}")?;
    Ok(ExitStatus::Success)
}

pub(crate) fn function(
    ctx: &StatusContext<'_>,
    streams: &mut Streams<'_>,
    level: usize,
) -> Result<ExitStatus> {
    let name = ctx
        .interpreter
        .function_name(level)
        .filter(|name| !name.is_empty());
    writeln!(streams.out, "{}", name.as_deref().unwrap_or(NOT_A_FUNCTION))?;
    Ok(ExitStatus::Success)
}

// Reports the line being executed now; --level does not apply.
pub(crate) fn line_number(
    ctx: &StatusContext<'_>,
    streams: &mut Streams<'_>,
) -> Result<ExitStatus> {
    writeln!(streams.out, "{}", ctx.interpreter.line_number())?;
    Ok(ExitStatus::Success)
}
