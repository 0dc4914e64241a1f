//! The closed set of things a single `status` invocation can do.
//!
//! Exactly one [`Action`] is selected per invocation, either by a legacy flag
//! (`--is-login`) or by a subcommand word (`is-login`). [`Action::Undefined`]
//! is both the "nothing chosen yet" marker and the default behavior.

/// One resolved, mutually-exclusive behavior of the `status` command.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Action {
    CurrentCommand,
    Basename,
    Dirname,
    Features,
    Filename,
    FishPath,
    Function,
    IsBlock,
    IsBreakpoint,
    IsCommandSubstitution,
    IsFullJobControl,
    IsInteractive,
    IsInteractiveJobControl,
    IsLogin,
    IsNoJobControl,
    LineNumber,
    SetJobControl,
    StackTrace,
    TestFeature,
    CurrentCommandline,
    /// No action selected; prints the session summary.
    #[default]
    Undefined,
}

impl Action {
    /// Every concrete action, in declaration order.
    pub const ALL: [Action; 20] = [
        Action::CurrentCommand,
        Action::Basename,
        Action::Dirname,
        Action::Features,
        Action::Filename,
        Action::FishPath,
        Action::Function,
        Action::IsBlock,
        Action::IsBreakpoint,
        Action::IsCommandSubstitution,
        Action::IsFullJobControl,
        Action::IsInteractive,
        Action::IsInteractiveJobControl,
        Action::IsLogin,
        Action::IsNoJobControl,
        Action::LineNumber,
        Action::SetJobControl,
        Action::StackTrace,
        Action::TestFeature,
        Action::CurrentCommandline,
    ];

    pub fn is_undefined(self) -> bool {
        self == Action::Undefined
    }

    /// Number of positional arguments the action requires, when that number is fixed.
    ///
    /// `SetJobControl` takes zero or one depending on whether the flag form
    /// already supplied the mode, so it returns `None`; the dispatcher decides.
    pub fn expected_args(self) -> Option<usize> {
        match self {
            Action::SetJobControl => None,
            Action::TestFeature => Some(1),
            _ => Some(0),
        }
    }
}
