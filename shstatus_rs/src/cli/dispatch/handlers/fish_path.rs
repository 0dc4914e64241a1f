//! `status fish-path`.

use tracing::debug;

use crate::cli::dispatch::Streams;
use crate::error::{ExitStatus, Result};
use crate::paths::canonical_or_raw;
use crate::session::StatusContext;

/// Print the interpreter's executable path. A lookup failure is reported on
/// stderr but is not a command failure.
pub(crate) fn print(
    cmd: &str,
    ctx: &StatusContext<'_>,
    streams: &mut Streams<'_>,
) -> Result<ExitStatus> {
    match ctx.locator.executable_path("fish") {
        Ok(path) if !path.as_os_str().is_empty() => {
            let shown = canonical_or_raw(&path);
            debug!(raw = %path.display(), shown = %shown.display(), "resolved executable");
            writeln!(streams.out, "{}", shown.display())?;
        }
        Ok(_) => {
            writeln!(
                streams.err,
                "{cmd}: Could not get executable path: 'empty path'"
            )?;
        }
        Err(err) => {
            writeln!(streams.err, "{cmd}: Could not get executable path: '{err}'")?;
        }
    }
    Ok(ExitStatus::Success)
}
