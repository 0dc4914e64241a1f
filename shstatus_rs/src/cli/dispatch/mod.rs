//! Dispatcher for a resolved `status` invocation.
//!
//! Argument counts are validated once, up front, for every action; the
//! per-action handlers then only deal with output and exit codes.

mod handlers;

use std::io::Write;

use tracing::debug;

use crate::action::Action;
use crate::cli::command::ParsedCommand;
use crate::error::{ExitStatus, Result, StatusError};
use crate::job_control::JobControlMode;
use crate::session::StatusContext;

use handlers::session::Probe;
use handlers::{features, fish_path, session, source};

/// Output and error streams for one invocation.
pub struct Streams<'a> {
    pub out: &'a mut dyn Write,
    pub err: &'a mut dyn Write,
}

impl<'a> Streams<'a> {
    pub fn new(out: &'a mut dyn Write, err: &'a mut dyn Write) -> Self {
        Self { out, err }
    }
}

/// Number of positional arguments `action` accepts in this invocation.
///
/// `job-control` takes its mode positionally unless the `-j` flag already
/// supplied one.
pub fn expected_arg_count(action: Action, job_control_request: Option<JobControlMode>) -> usize {
    match action.expected_args() {
        Some(n) => n,
        None if job_control_request.is_some() => 0,
        None => 1,
    }
}

/// Reject a positional argument list of the wrong length for `action`.
///
/// The default summary takes no arguments but is not checked: any leftover
/// word would already have been resolved as a subcommand.
pub fn check_arg_count(
    action: Action,
    job_control_request: Option<JobControlMode>,
    args: &[String],
) -> Result<()> {
    if action.is_undefined() {
        return Ok(());
    }
    let expected = expected_arg_count(action, job_control_request);
    if args.len() != expected {
        return Err(StatusError::UnexpectedArgumentCount {
            action,
            expected,
            actual: args.len(),
        });
    }
    Ok(())
}

/// Run `action` against the session in `ctx`.
pub fn dispatch(
    cmd: &str,
    action: Action,
    level: usize,
    args: &[String],
    job_control_request: Option<JobControlMode>,
    ctx: &StatusContext<'_>,
    streams: &mut Streams<'_>,
) -> Result<ExitStatus> {
    check_arg_count(action, job_control_request, args)?;
    debug!(?action, level, "dispatching");

    match action {
        Action::Undefined => session::summary(ctx, streams),
        Action::SetJobControl => {
            let mode = match job_control_request {
                Some(mode) => mode,
                None => JobControlMode::parse(&args[0])?,
            };
            session::set_job_control(ctx, mode)
        }
        Action::Features => features::list(ctx, streams),
        Action::TestFeature => Ok(features::test(ctx, &args[0])),
        Action::Basename | Action::Dirname | Action::Filename => {
            source::filename(ctx, streams, action)
        }
        Action::Function => source::function(ctx, streams, level),
        Action::LineNumber => source::line_number(ctx, streams),
        Action::StackTrace => session::stack_trace(ctx, streams),
        Action::CurrentCommand => session::current_command(ctx, streams),
        Action::CurrentCommandline => session::current_commandline(ctx, streams),
        Action::FishPath => fish_path::print(cmd, ctx, streams),
        Action::IsLogin => Ok(session::probe(ctx, Probe::Login)),
        Action::IsInteractive => Ok(session::probe(ctx, Probe::Interactive)),
        Action::IsBlock => Ok(session::probe(ctx, Probe::Block)),
        Action::IsBreakpoint => Ok(session::probe(ctx, Probe::Breakpoint)),
        Action::IsCommandSubstitution => Ok(session::probe(ctx, Probe::CommandSubstitution)),
        Action::IsFullJobControl => Ok(session::probe(ctx, Probe::FullJobControl)),
        Action::IsInteractiveJobControl => {
            Ok(session::probe(ctx, Probe::InteractiveJobControl))
        }
        Action::IsNoJobControl => Ok(session::probe(ctx, Probe::NoJobControl)),
    }
}

/// Dispatch a parsed command.
pub fn dispatch_command(
    cmd: &str,
    parsed: &ParsedCommand,
    ctx: &StatusContext<'_>,
    streams: &mut Streams<'_>,
) -> Result<ExitStatus> {
    parsed.log_deprecation();
    dispatch(
        cmd,
        parsed.action(),
        parsed.options.level,
        &parsed.args,
        parsed.options.requested_job_control_mode,
        ctx,
        streams,
    )
}

#[cfg(test)]
pub(crate) mod testing {
    //! In-memory session used by dispatcher and entrypoint tests.

    use std::cell::RefCell;
    use std::io;
    use std::path::PathBuf;

    use crate::session::{ExecutableLocator, FeatureDescriptor, Interpreter};

    #[derive(Debug, Clone, Default)]
    pub struct FakeInterpreter {
        pub login: bool,
        pub interactive: bool,
        pub filename: Option<String>,
        pub functions: Vec<String>,
        pub line: i64,
        pub block: bool,
        pub breakpoint: bool,
        pub subshell: bool,
        pub trace: String,
        pub command: String,
        pub commandline: String,
        /// Levels passed to `function_name`, in call order.
        pub levels_seen: RefCell<Vec<usize>>,
    }

    impl Interpreter for FakeInterpreter {
        fn is_login(&self) -> bool {
            self.login
        }
        fn is_interactive_session(&self) -> bool {
            self.interactive
        }
        fn current_filename(&self) -> Option<String> {
            self.filename.clone()
        }
        fn function_name(&self, level: usize) -> Option<String> {
            self.levels_seen.borrow_mut().push(level);
            level
                .checked_sub(1)
                .and_then(|idx| self.functions.get(idx).cloned())
        }
        fn line_number(&self) -> i64 {
            self.line
        }
        fn is_block(&self) -> bool {
            self.block
        }
        fn is_breakpoint(&self) -> bool {
            self.breakpoint
        }
        fn is_subshell(&self) -> bool {
            self.subshell
        }
        fn stack_trace(&self) -> String {
            self.trace.clone()
        }
        fn status_command(&self) -> String {
            self.command.clone()
        }
        fn status_commandline(&self) -> String {
            self.commandline.clone()
        }
    }

    pub enum FakeLocator {
        Path(PathBuf),
        Fails,
    }

    impl ExecutableLocator for FakeLocator {
        fn executable_path(&self, _name: &str) -> io::Result<PathBuf> {
            match self {
                FakeLocator::Path(path) => Ok(path.clone()),
                FakeLocator::Fails => Err(io::Error::new(io::ErrorKind::NotFound, "no such file")),
            }
        }
    }

    pub fn features() -> Vec<FeatureDescriptor> {
        vec![
            FeatureDescriptor::new("stderr-nocaret", true, "3.0", "^ no longer redirects stderr"),
            FeatureDescriptor::new("qmark-noglob", false, "3.0", "? no longer globs"),
        ]
    }
}
