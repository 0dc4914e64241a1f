//! Shared entry point: parse, print help or dispatch, report errors.
//!
//! [`run`] is stream-agnostic so an embedding interpreter can drive it with its
//! own session; [`main_entry`] wires it to the process for the `status` binary.

use std::ffi::OsString;
use std::io::{self, Write};

use anyhow::Context;
use tracing::debug;

use crate::aliases::suggest;
use crate::cli::command::format_help;
use crate::cli::dispatch::{Streams, dispatch_command};
use crate::cli::parser::parse_command;
use crate::config::SessionConfig;
use crate::error::{ExitStatus, Result, StatusError};
use crate::job_control;
use crate::session::StatusContext;

/// Run one `status` invocation. `cmd` is the name the command was invoked as
/// and prefixes every error line.
pub fn run(
    cmd: &str,
    args: &[String],
    ctx: &StatusContext<'_>,
    streams: &mut Streams<'_>,
) -> ExitStatus {
    match execute(cmd, args, ctx, streams) {
        Ok(status) => status,
        Err(StatusError::Io(err)) if err.kind() == io::ErrorKind::BrokenPipe => {
            // Reader went away (e.g. `status features | head -1`).
            debug!("output closed early");
            ExitStatus::Success
        }
        Err(err) => {
            report(cmd, &err, streams);
            err.exit_status()
        }
    }
}

fn execute(
    cmd: &str,
    args: &[String],
    ctx: &StatusContext<'_>,
    streams: &mut Streams<'_>,
) -> Result<ExitStatus> {
    let parsed = parse_command(args)?;
    if parsed.options.print_help {
        streams.out.write_all(format_help(cmd).as_bytes())?;
        return Ok(ExitStatus::Success);
    }
    dispatch_command(cmd, &parsed, ctx, streams)
}

fn report(cmd: &str, err: &StatusError, streams: &mut Streams<'_>) {
    let mut message = err.render(cmd);
    if let StatusError::UnrecognizedSubcommand { word } = err {
        if let Some(candidate) = suggest(word) {
            message.push_str(&format!("{cmd}: Did you mean '{candidate}'?\n"));
        }
    }
    // Nothing useful to do if stderr itself is gone.
    let _ = streams.err.write_all(message.as_bytes());
}

/// Convert raw process arguments (after the command name) to strings. The
/// first argument that is not valid UTF-8 is an invalid-argument error.
pub fn decode_args<I>(raw: I) -> Result<Vec<String>>
where
    I: IntoIterator<Item = OsString>,
{
    raw.into_iter()
        .enumerate()
        .map(|(idx, arg)| {
            arg.into_string()
                .map_err(|arg| StatusError::NonUtf8Argument {
                    value: arg.to_string_lossy().into_owned(),
                    position: idx + 1,
                })
        })
        .collect()
}

/// Body of the `status` binary: load the session, run against the real
/// stdout/stderr and the process-wide job-control cell.
pub fn main_entry(cmd: &str) -> anyhow::Result<ExitStatus> {
    let cwd = std::env::current_dir().context("failed to resolve current directory")?;
    let session = SessionConfig::load(&cwd);
    job_control::set_job_control_mode(session.initial_job_control());

    let ctx = StatusContext::new(&session, &session, &session, job_control::global());

    let stdout = io::stdout();
    let stderr = io::stderr();
    let mut out = stdout.lock();
    let mut err = stderr.lock();
    let status = {
        let mut streams = Streams::new(&mut out, &mut err);
        match decode_args(std::env::args_os().skip(1)) {
            Ok(args) => run(cmd, &args, &ctx, &mut streams),
            Err(bad) => {
                debug!("argument {:?} rejected", bad.position());
                report(cmd, &bad, &mut streams);
                bad.exit_status()
            }
        }
    };
    match out.flush() {
        Err(e) if e.kind() != io::ErrorKind::BrokenPipe => {
            Err(e).context("failed to flush stdout")
        }
        _ => Ok(status),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cli::dispatch::testing::{FakeInterpreter, FakeLocator, features};
    use crate::job_control::{JobControlCell, JobControlMode};

    struct Outcome {
        status: ExitStatus,
        out: String,
        err: String,
    }

    fn invoke_with(interp: &FakeInterpreter, cell: &JobControlCell, args: &[&str]) -> Outcome {
        let feats = features();
        let locator = FakeLocator::Fails;
        let ctx = StatusContext::new(interp, &feats, &locator, cell);
        let args: Vec<String> = args.iter().map(|s| s.to_string()).collect();
        let mut out = Vec::new();
        let mut err = Vec::new();
        let status = {
            let mut streams = Streams::new(&mut out, &mut err);
            run("status", &args, &ctx, &mut streams)
        };
        Outcome {
            status,
            out: String::from_utf8(out).unwrap(),
            err: String::from_utf8(err).unwrap(),
        }
    }

    fn invoke(args: &[&str]) -> Outcome {
        invoke_with(&FakeInterpreter::default(), &JobControlCell::default(), args)
    }

    #[test]
    fn help_goes_to_stdout() {
        let outcome = invoke(&["--help"]);
        assert_eq!(outcome.status, ExitStatus::Success);
        assert!(outcome.out.starts_with("status - query shell status information"));
        assert!(outcome.err.is_empty());
    }

    #[test]
    fn help_skips_word_resolution() {
        let outcome = invoke(&["-h", "no-such-word"]);
        assert_eq!(outcome.status, ExitStatus::Success);
        assert!(outcome.err.is_empty());
    }

    #[test]
    fn help_still_reports_scan_errors() {
        let outcome = invoke(&["-h", "--bogus"]);
        assert_eq!(outcome.status, ExitStatus::InvalidArgs);
        assert!(outcome.out.is_empty());
    }

    #[test]
    fn conflict_message_and_code() {
        let outcome = invoke(&["--is-login", "is-interactive"]);
        assert_eq!(outcome.status.code(), 1);
        assert_eq!(
            outcome.err,
            "status: Invalid combination of options,\nis-login and is-interactive are mutually exclusive\n"
        );
        assert!(outcome.out.is_empty());
    }

    #[test]
    fn unknown_option() {
        let outcome = invoke(&["--frobnicate"]);
        assert_eq!(outcome.status.code(), 121);
        assert_eq!(outcome.err, "status: Unknown option '--frobnicate'\n");
    }

    #[test]
    fn unknown_word_with_suggestion() {
        let outcome = invoke(&["is-logn"]);
        assert_eq!(outcome.status.code(), 121);
        assert_eq!(
            outcome.err,
            "status: Invalid subcommand 'is-logn'\nstatus: Did you mean 'is-login'?\n"
        );
    }

    #[test]
    fn unknown_word_without_suggestion() {
        let outcome = invoke(&["xyzzy-plugh"]);
        assert_eq!(outcome.err, "status: Invalid subcommand 'xyzzy-plugh'\n");
    }

    #[test]
    fn arity_message_uses_display_name() {
        let outcome = invoke(&["dirname", "extra"]);
        assert_eq!(outcome.status.code(), 121);
        assert_eq!(
            outcome.err,
            "status current-dirname: expected 0 arguments; got 1\n"
        );
    }

    #[test]
    fn invalid_mode_is_a_command_error() {
        let cell = JobControlCell::new(JobControlMode::None);
        let outcome = invoke_with(&FakeInterpreter::default(), &cell, &["job-control", "maybe"]);
        assert_eq!(outcome.status.code(), 1);
        assert_eq!(outcome.err, "status: Invalid job control mode 'maybe'\n");
        assert_eq!(cell.get(), JobControlMode::None);
    }

    #[test]
    fn flag_and_word_forms_agree() {
        let interp = FakeInterpreter {
            login: true,
            ..Default::default()
        };
        let cell = JobControlCell::default();
        let flag = invoke_with(&interp, &cell, &["-l"]);
        let word = invoke_with(&interp, &cell, &["is-login"]);
        assert_eq!(flag.status, ExitStatus::Success);
        assert_eq!(word.status, ExitStatus::Success);
        assert_eq!(flag.out, word.out);
    }

    #[test]
    fn job_control_flag_sets_cell() {
        let cell = JobControlCell::default();
        let outcome = invoke_with(&FakeInterpreter::default(), &cell, &["-j", "full"]);
        assert_eq!(outcome.status, ExitStatus::Success);
        assert_eq!(cell.get(), JobControlMode::All);
        let outcome = invoke_with(&FakeInterpreter::default(), &cell, &["is-full-job-control"]);
        assert_eq!(outcome.status, ExitStatus::Success);
    }

    #[test]
    fn level_selects_frame() {
        let interp = FakeInterpreter {
            functions: vec!["a".into(), "b".into()],
            ..Default::default()
        };
        let outcome = invoke_with(
            &interp,
            &JobControlCell::default(),
            &["-L", "2", "current-function"],
        );
        assert_eq!(outcome.out, "b\n");
    }

    #[test]
    fn decodes_utf8_arguments() {
        let raw = ["-L", "2", "function"].map(OsString::from);
        let args = decode_args(raw).unwrap();
        assert_eq!(args, vec!["-L", "2", "function"]);
    }

    #[cfg(unix)]
    #[test]
    fn non_utf8_argument_is_invalid() {
        use std::os::unix::ffi::OsStringExt;

        let raw = vec![
            OsString::from("test-feature"),
            OsString::from_vec(vec![b'a', 0xff]),
        ];
        let err = decode_args(raw).unwrap_err();
        assert_eq!(err.position(), Some(2));
        assert_eq!(err.exit_status(), ExitStatus::InvalidArgs);
        assert_eq!(
            err.render("status"),
            "status: Argument 'a\u{FFFD}' is not valid UTF-8\n"
        );
    }

    #[test]
    fn conflict_leaves_job_control_untouched() {
        for args in [
            &["-j", "none", "is-login"][..],
            &["--is-login", "--job-control=none"],
            &["--job-control", "full", "-j", "none"],
        ] {
            let cell = JobControlCell::new(JobControlMode::Interactive);
            let outcome = invoke_with(&FakeInterpreter::default(), &cell, args);
            assert_eq!(outcome.status, ExitStatus::CMD_ERROR, "{args:?}");
            assert!(outcome.err.contains("mutually exclusive"), "{args:?}");
            assert_eq!(cell.get(), JobControlMode::Interactive, "{args:?}");
        }
    }

    #[test]
    fn rejected_arity_leaves_job_control_untouched() {
        let cell = JobControlCell::new(JobControlMode::None);
        let outcome = invoke_with(
            &FakeInterpreter::default(),
            &cell,
            &["job-control", "full", "extra"],
        );
        assert_eq!(outcome.status, ExitStatus::InvalidArgs);
        assert_eq!(cell.get(), JobControlMode::None);
    }

    #[test]
    fn broken_pipe_is_quiet() {
        struct Closed;
        impl Write for Closed {
            fn write(&mut self, _: &[u8]) -> io::Result<usize> {
                Err(io::Error::from(io::ErrorKind::BrokenPipe))
            }
            fn flush(&mut self) -> io::Result<()> {
                Ok(())
            }
        }
        let interp = FakeInterpreter::default();
        let feats = features();
        let locator = FakeLocator::Fails;
        let cell = JobControlCell::default();
        let ctx = StatusContext::new(&interp, &feats, &locator, &cell);
        let mut out = Closed;
        let mut err = Vec::new();
        let status = {
            let mut streams = Streams::new(&mut out, &mut err);
            run("status", &["features".to_string()], &ctx, &mut streams)
        };
        assert_eq!(status, ExitStatus::Success);
        assert!(err.is_empty());
    }
}
