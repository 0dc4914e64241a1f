//! The options record built while scanning `status` arguments.

use crate::action::Action;
use crate::job_control::JobControlMode;

/// Default stack level for `current-function`: the function that ran `status`.
pub const DEFAULT_LEVEL: usize = 1;

/// Options for one `status` invocation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatusOptions {
    /// Stack depth for call-stack queries (`-L/--level`).
    pub level: usize,

    /// Mode supplied by the legacy `-j/--job-control <mode>` flag. Only ever
    /// set together with `action == SetJobControl`.
    pub requested_job_control_mode: Option<JobControlMode>,

    /// Selected action; set at most once, through the exclusivity guard.
    pub action: Action,

    /// `-h/--help` was given
    pub print_help: bool,
}

impl Default for StatusOptions {
    fn default() -> Self {
        Self {
            level: DEFAULT_LEVEL,
            requested_job_control_mode: None,
            action: Action::Undefined,
            print_help: false,
        }
    }
}
