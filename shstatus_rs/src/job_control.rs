//! Job-control mode: the token codec and the process-wide cell.
//!
//! The mode is session state shared with the rest of the interpreter. Within a
//! single `status` invocation there is at most one writer (`status job-control`);
//! callers serialize commands among themselves.

use std::fmt;
use std::str::FromStr;
use std::sync::atomic::{AtomicU8, Ordering};

use crate::error::StatusError;

/// How terminal control is granted to launched jobs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum JobControlMode {
    /// Every job gets job control (`full`).
    All,
    /// Only jobs launched interactively (`interactive`).
    #[default]
    Interactive,
    /// No job ever gets job control (`none`).
    None,
}

impl JobControlMode {
    pub const ALL_MODES: [JobControlMode; 3] = [
        JobControlMode::All,
        JobControlMode::Interactive,
        JobControlMode::None,
    ];

    /// Parse a mode token. Case-sensitive; only `full`, `interactive` and `none` are accepted.
    pub fn parse(token: &str) -> Result<Self, StatusError> {
        match token {
            "full" => Ok(JobControlMode::All),
            "interactive" => Ok(JobControlMode::Interactive),
            "none" => Ok(JobControlMode::None),
            _ => Err(StatusError::InvalidJobControlMode {
                mode: token.to_string(),
            }),
        }
    }

    /// The token accepted by [`JobControlMode::parse`].
    pub fn token(self) -> &'static str {
        match self {
            JobControlMode::All => "full",
            JobControlMode::Interactive => "interactive",
            JobControlMode::None => "none",
        }
    }

    /// Wording used by the default session summary.
    pub fn describe(self) -> &'static str {
        match self {
            JobControlMode::All => "Always",
            JobControlMode::Interactive => "Only on interactive jobs",
            JobControlMode::None => "Never",
        }
    }

    const fn to_bits(self) -> u8 {
        match self {
            JobControlMode::All => 0,
            JobControlMode::Interactive => 1,
            JobControlMode::None => 2,
        }
    }

    fn from_bits(bits: u8) -> Self {
        match bits {
            0 => JobControlMode::All,
            2 => JobControlMode::None,
            _ => JobControlMode::Interactive,
        }
    }
}

impl fmt::Display for JobControlMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.token())
    }
}

impl FromStr for JobControlMode {
    type Err = StatusError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        JobControlMode::parse(s)
    }
}

/// A shared, lock-free job-control mode slot.
#[derive(Debug)]
pub struct JobControlCell(AtomicU8);

impl JobControlCell {
    pub const fn new(mode: JobControlMode) -> Self {
        Self(AtomicU8::new(mode.to_bits()))
    }

    pub fn get(&self) -> JobControlMode {
        JobControlMode::from_bits(self.0.load(Ordering::Acquire))
    }

    pub fn set(&self, mode: JobControlMode) {
        self.0.store(mode.to_bits(), Ordering::Release);
    }
}

impl Default for JobControlCell {
    fn default() -> Self {
        Self::new(JobControlMode::default())
    }
}

static JOB_CONTROL: JobControlCell = JobControlCell::new(JobControlMode::Interactive);

/// The process-wide cell.
pub fn global() -> &'static JobControlCell {
    &JOB_CONTROL
}

/// Current process-wide job-control mode.
pub fn job_control_mode() -> JobControlMode {
    JOB_CONTROL.get()
}

/// Replace the process-wide job-control mode.
pub fn set_job_control_mode(mode: JobControlMode) {
    JOB_CONTROL.set(mode);
}
