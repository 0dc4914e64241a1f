//! The single place an action gets selected.
//!
//! Both producers of actions, the flag scanner and the subcommand-word
//! resolver, go through [`claim`], so the conflict rule and its message are
//! the same for flag/flag, flag/word and word/word combinations.

use crate::action::Action;
use crate::cli::command::StatusOptions;
use crate::error::{Result, StatusError};

/// Select `requested` unless an action is already selected.
pub fn claim(current: Action, requested: Action) -> Result<Action> {
    if current.is_undefined() {
        Ok(requested)
    } else {
        Err(StatusError::ExclusiveSubcommandConflict {
            first: current,
            second: requested,
        })
    }
}

impl StatusOptions {
    /// Record `requested` as this invocation's action. Leaves the options
    /// untouched on conflict.
    pub fn claim_action(&mut self, requested: Action) -> Result<()> {
        self.action = claim(self.action, requested)?;
        Ok(())
    }
}
