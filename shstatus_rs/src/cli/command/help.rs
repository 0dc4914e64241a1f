//! Help text generation for `status`.

use super::help_texts::*;
use crate::action::Action;
use crate::aliases::{display_name, names_for};

impl Action {
    /// Short description of what the action reports.
    pub fn description(self) -> &'static str {
        match self {
            Action::CurrentCommand => "Print the name of the running command",
            Action::Basename => "Print the file name of the running script",
            Action::Dirname => "Print the directory of the running script",
            Action::Features => "List feature flags and their state",
            Action::Filename => "Print the path of the running script",
            Action::FishPath => "Print the path of the shell executable",
            Action::Function => "Print the name of the running function",
            Action::IsBlock => "Succeed if inside a block",
            Action::IsBreakpoint => "Succeed if stopped at a breakpoint",
            Action::IsCommandSubstitution => "Succeed if inside a command substitution",
            Action::IsFullJobControl => "Succeed if job control is enabled for all jobs",
            Action::IsInteractive => "Succeed if the session is interactive",
            Action::IsInteractiveJobControl => {
                "Succeed if job control is enabled for interactive jobs only"
            }
            Action::IsLogin => "Succeed if this is a login shell",
            Action::IsNoJobControl => "Succeed if job control is disabled",
            Action::LineNumber => "Print the line number being executed",
            Action::SetJobControl => "Set the job-control mode",
            Action::StackTrace => "Print the current stack trace",
            Action::TestFeature => "Test a feature flag (0 on, 1 off, 2 unknown)",
            Action::CurrentCommandline => "Print the full command line being executed",
            Action::Undefined => "Print a session summary",
        }
    }
}

/// The full `--help` page for `cmd`.
pub fn format_help(cmd: &str) -> String {
    let mut out = String::new();
    out.push_str(&STATUS_USAGE.replace("{cmd}", cmd));
    out.push_str("\n\n");
    out.push_str(STATUS_DESCRIPTION);
    out.push_str("\n\nSUBCOMMANDS:\n");

    let width = Action::ALL
        .iter()
        .map(|&action| names_for(action).collect::<Vec<_>>().join(", ").len())
        .max()
        .unwrap_or(0);

    let mut actions = Action::ALL.to_vec();
    actions.sort_by_key(|&action| display_name(action));
    for action in actions {
        let names = names_for(action).collect::<Vec<_>>().join(", ");
        out.push_str(&format!(
            "    {:<width$}  {}\n",
            names,
            action.description(),
            width = width
        ));
    }

    out.push('\n');
    out.push_str(STATUS_OPTIONS);
    out.push_str("\n\n");
    out.push_str(STATUS_EXIT_CODES);
    out.push('\n');
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::aliases::ALIASES;

    #[test]
    fn help_lists_every_word() {
        let help = format_help("status");
        for (name, _) in ALIASES {
            assert!(help.contains(name), "help is missing {name}");
        }
        assert!(help.contains("--level"));
        assert!(help.ends_with('\n'));
    }

    #[test]
    fn help_uses_invoking_name() {
        let help = format_help("st");
        assert!(help.starts_with("st - query shell status information"));
        assert!(help.contains("    st test-feature FEATURE"));
        assert!(!help.contains("{cmd}"));
    }
}
