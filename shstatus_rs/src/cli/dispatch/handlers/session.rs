//! Session-wide reports: the default summary, probes, job control and the
//! current command.

use crate::cli::dispatch::Streams;
use crate::error::{ExitStatus, Result};
use crate::job_control::JobControlMode;
use crate::session::StatusContext;

pub(crate) fn summary(ctx: &StatusContext<'_>, streams: &mut Streams<'_>) -> Result<ExitStatus> {
    let login = if ctx.interpreter.is_login() {
        "This is a login shell"
    } else {
        "This is not a login shell"
    };
    writeln!(streams.out, "{login}")?;
    writeln!(streams.out, "Job control: {}", ctx.job_control.get().describe())?;
    write!(streams.out, "{}", ctx.interpreter.stack_trace())?;
    Ok(ExitStatus::Success)
}

/// A yes/no query answered through the exit status.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Probe {
    Login,
    Interactive,
    Block,
    Breakpoint,
    CommandSubstitution,
    FullJobControl,
    InteractiveJobControl,
    NoJobControl,
}

pub(crate) fn probe(ctx: &StatusContext<'_>, query: Probe) -> ExitStatus {
    let interp = ctx.interpreter;
    let answer = match query {
        Probe::Login => interp.is_login(),
        Probe::Interactive => interp.is_interactive_session(),
        Probe::Block => interp.is_block(),
        Probe::Breakpoint => interp.is_breakpoint(),
        Probe::CommandSubstitution => interp.is_subshell(),
        Probe::FullJobControl => ctx.job_control.get() == JobControlMode::All,
        Probe::InteractiveJobControl => ctx.job_control.get() == JobControlMode::Interactive,
        Probe::NoJobControl => ctx.job_control.get() == JobControlMode::None,
    };
    ExitStatus::from_bool(answer)
}

pub(crate) fn set_job_control(ctx: &StatusContext<'_>, mode: JobControlMode) -> Result<ExitStatus> {
    tracing::debug!(%mode, "job control changed");
    ctx.job_control.set(mode);
    Ok(ExitStatus::Success)
}

pub(crate) fn stack_trace(
    ctx: &StatusContext<'_>,
    streams: &mut Streams<'_>,
) -> Result<ExitStatus> {
    write!(streams.out, "{}", ctx.interpreter.stack_trace())?;
    Ok(ExitStatus::Success)
}

pub(crate) fn current_command(
    ctx: &StatusContext<'_>,
    streams: &mut Streams<'_>,
) -> Result<ExitStatus> {
    let mut command = ctx.interpreter.status_command();
    if command.is_empty() {
        command = ctx.interpreter.program_name();
    }
    writeln!(streams.out, "{command}")?;
    Ok(ExitStatus::Success)
}

pub(crate) fn current_commandline(
    ctx: &StatusContext<'_>,
    streams: &mut Streams<'_>,
) -> Result<ExitStatus> {
    writeln!(streams.out, "{}", ctx.interpreter.status_commandline())?;
    Ok(ExitStatus::Success)
}
