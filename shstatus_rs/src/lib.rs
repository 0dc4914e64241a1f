//! # shstatus
//!
//! The `status` builtin of an interactive shell as a library: it answers
//! questions about the running session (login or interactive, current file,
//! function and line, job-control mode, feature flags) and can change the
//! job-control mode.
//!
//! One invocation selects exactly one action, either through a subcommand word
//! (`status is-login`) or a deprecated flag (`status --is-login`). Yes/no
//! queries answer through the exit code; reports print one line to stdout.
//!
//! ```
//! use shstatus::cli::{Streams, run};
//! use shstatus::config::SessionConfig;
//! use shstatus::job_control::JobControlCell;
//! use shstatus::session::StatusContext;
//!
//! let session = SessionConfig { login: true, ..SessionConfig::default() };
//! let cell = JobControlCell::default();
//! let ctx = StatusContext::new(&session, &session, &session, &cell);
//!
//! let (mut out, mut err) = (Vec::new(), Vec::new());
//! let status = run("status", &["is-login".to_string()], &ctx, &mut Streams::new(&mut out, &mut err));
//! assert!(status.is_success());
//! ```
//!
//! The standalone `status` binary reports on a session described in TOML; see
//! [`config::SessionConfig`].

pub mod action;
pub mod aliases;
pub mod cli;
pub mod config;
pub mod error;
pub mod job_control;
pub mod paths;
pub mod session;

pub use action::Action;
pub use error::{ExitStatus, StatusError};
pub use job_control::{JobControlCell, JobControlMode, job_control_mode, set_job_control_mode};
pub use session::{ExecutableLocator, FeatureDescriptor, FeatureRegistry, Interpreter, StatusContext};
