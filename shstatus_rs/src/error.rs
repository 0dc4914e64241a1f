//! Errors and exit codes for the `status` command.
//!
//!   0   = success / probe true
//!   1   = probe false, or a command error (conflicting subcommands, bad mode)
//!   2   = test-feature: name not recognized
//!   121 = invalid arguments (parse and arity errors)

use std::io;
use std::process;

use thiserror::Error;

use crate::action::Action;
use crate::aliases::display_name;

/// Named exit codes for the command.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(i32)]
pub enum ExitStatus {
    Success = 0,
    Failure = 1,
    FeatureNotRecognized = 2,
    InvalidArgs = 121,
}

impl ExitStatus {
    /// Alias used where a failure is a command error rather than a false probe.
    pub const CMD_ERROR: ExitStatus = ExitStatus::Failure;

    pub fn code(self) -> i32 {
        self as i32
    }

    /// Exit status of a boolean probe: 0 when true, 1 when false.
    pub fn from_bool(value: bool) -> Self {
        if value {
            ExitStatus::Success
        } else {
            ExitStatus::Failure
        }
    }

    pub fn is_success(self) -> bool {
        self == ExitStatus::Success
    }
}

impl From<ExitStatus> for process::ExitCode {
    fn from(status: ExitStatus) -> Self {
        process::ExitCode::from(status.code() as u8)
    }
}

/// Everything that can abort a `status` invocation.
///
/// Positions are 1-based indexes into the arguments after the command name.
#[derive(Debug, Error)]
pub enum StatusError {
    #[error("Unknown option '{option}'")]
    UnknownOption { option: String, position: usize },

    #[error("Ambiguous option '{option}'")]
    AmbiguousOption { option: String, position: usize },

    #[error("Expected argument for option {option}")]
    MissingOptionArgument { option: String, position: usize },

    /// Negative or out of range.
    #[error("Invalid level value '{value}'")]
    InvalidLevel { value: String },

    #[error("Argument '{value}' is not a valid integer")]
    LevelNotNumber { value: String },

    #[error("Invalid job control mode '{mode}'")]
    InvalidJobControlMode { mode: String },

    #[error(
        "Invalid combination of options,\n{} and {} are mutually exclusive",
        display_name(*.first),
        display_name(*.second)
    )]
    ExclusiveSubcommandConflict { first: Action, second: Action },

    /// Shown lossily; the offending bytes are replaced.
    #[error("Argument '{value}' is not valid UTF-8")]
    NonUtf8Argument { value: String, position: usize },

    #[error("Invalid subcommand '{word}'")]
    UnrecognizedSubcommand { word: String },

    #[error("{}: expected {expected} arguments; got {actual}", display_name(*.action))]
    UnexpectedArgumentCount {
        action: Action,
        expected: usize,
        actual: usize,
    },

    #[error(transparent)]
    Io(#[from] io::Error),
}

impl StatusError {
    pub fn exit_status(&self) -> ExitStatus {
        match self {
            StatusError::ExclusiveSubcommandConflict { .. }
            | StatusError::InvalidJobControlMode { .. }
            | StatusError::Io(_) => ExitStatus::CMD_ERROR,
            _ => ExitStatus::InvalidArgs,
        }
    }

    /// Argument position of the offending token, for errors raised while scanning.
    pub fn position(&self) -> Option<usize> {
        match self {
            StatusError::UnknownOption { position, .. }
            | StatusError::AmbiguousOption { position, .. }
            | StatusError::MissingOptionArgument { position, .. }
            | StatusError::NonUtf8Argument { position, .. } => Some(*position),
            _ => None,
        }
    }

    /// The full stderr line(s), prefixed with the invoking command name.
    pub fn render(&self, cmd: &str) -> String {
        match self {
            // "status current-filename: expected 0 arguments; got 1"
            StatusError::UnexpectedArgumentCount { .. } => format!("{cmd} {self}\n"),
            _ => format!("{cmd}: {self}\n"),
        }
    }
}

pub type Result<T> = std::result::Result<T, StatusError>;
