//! ParsedCommand - result of scanning `status` arguments.

use tracing::debug;

use super::options::StatusOptions;
use crate::action::Action;
use crate::aliases::display_name;

/// Result of parsing command-line arguments.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsedCommand {
    /// Resolved options, including the selected action
    pub options: StatusOptions,

    /// Positional arguments left for the action (after the subcommand word, if any)
    pub args: Vec<String>,

    /// The deprecated flag that selected the action, if one did
    pub legacy_flag: Option<String>,
}

impl ParsedCommand {
    pub fn new(options: StatusOptions, args: Vec<String>) -> Self {
        Self {
            options,
            args,
            legacy_flag: None,
        }
    }

    pub fn action(&self) -> Action {
        self.options.action
    }

    /// Whether the action was selected through a deprecated flag.
    pub fn from_legacy(&self) -> bool {
        self.legacy_flag.is_some()
    }

    /// Record deprecated flag use at debug level; behavior is unchanged.
    pub fn log_deprecation(&self) {
        if let Some(flag) = &self.legacy_flag {
            debug!(
                "deprecated flag '{}' used; prefer 'status {}'",
                flag,
                display_name(self.action())
            );
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn legacy_flag_is_recorded() {
        let mut cmd = ParsedCommand::new(
            StatusOptions {
                action: Action::IsLogin,
                ..Default::default()
            },
            Vec::new(),
        );
        assert!(!cmd.from_legacy());
        cmd.legacy_flag = Some("--is-login".to_string());
        assert!(cmd.from_legacy());
        assert_eq!(cmd.action(), Action::IsLogin);
    }
}
