//! Subcommand words and their canonical actions.
//!
//! The table is searched with a binary search, so it must stay sorted by name
//! (plain byte-wise string order, not by action). The ordering is asserted by
//! the tests below; adding an entry out of order breaks lookups silently.

use strsim::levenshtein;

use crate::action::Action;

/// Name shown for [`Action::Undefined`] in argument-count errors.
pub const DEFAULT_DISPLAY_NAME: &str = "default";

/// Every recognized subcommand word. Must be sorted by name.
pub const ALIASES: &[(&str, Action)] = &[
    ("basename", Action::Basename),
    ("current-basename", Action::Basename),
    ("current-command", Action::CurrentCommand),
    ("current-commandline", Action::CurrentCommandline),
    ("current-dirname", Action::Dirname),
    ("current-filename", Action::Filename),
    ("current-function", Action::Function),
    ("current-line-number", Action::LineNumber),
    ("dirname", Action::Dirname),
    ("features", Action::Features),
    ("filename", Action::Filename),
    ("fish-path", Action::FishPath),
    ("function", Action::Function),
    ("is-block", Action::IsBlock),
    ("is-breakpoint", Action::IsBreakpoint),
    ("is-command-substitution", Action::IsCommandSubstitution),
    ("is-full-job-control", Action::IsFullJobControl),
    ("is-interactive", Action::IsInteractive),
    ("is-interactive-job-control", Action::IsInteractiveJobControl),
    ("is-login", Action::IsLogin),
    ("is-no-job-control", Action::IsNoJobControl),
    ("job-control", Action::SetJobControl),
    ("line-number", Action::LineNumber),
    ("print-stack-trace", Action::StackTrace),
    ("stack-trace", Action::StackTrace),
    ("test-feature", Action::TestFeature),
];

/// Resolve a subcommand word to its action. Unknown words map to [`Action::Undefined`].
pub fn resolve(name: &str) -> Action {
    ALIASES
        .binary_search_by(|(candidate, _)| (*candidate).cmp(name))
        .map(|idx| ALIASES[idx].1)
        .unwrap_or(Action::Undefined)
}

/// Canonical display name of an action: its first word in table order.
///
/// Used in error messages so a conflict reads the same whether the action came
/// from a flag or a word.
pub fn display_name(action: Action) -> &'static str {
    ALIASES
        .iter()
        .find(|(_, candidate)| *candidate == action)
        .map(|(name, _)| *name)
        .unwrap_or(DEFAULT_DISPLAY_NAME)
}

/// All words that resolve to `action`, in table order.
pub fn names_for(action: Action) -> impl Iterator<Item = &'static str> {
    ALIASES
        .iter()
        .filter(move |(_, candidate)| *candidate == action)
        .map(|(name, _)| *name)
}

/// Suggest a known subcommand close to `input`.
/// Returns Some(word) if a match within distance 2 exists; ties keep the first in table order.
pub fn suggest(input: &str) -> Option<&'static str> {
    let mut best_match: Option<(&str, usize)> = None;

    for &(name, _) in ALIASES {
        let distance = levenshtein(input, name);
        if distance > 2 {
            continue;
        }
        match best_match {
            Some((_, best_dist)) if distance >= best_dist => {}
            _ => best_match = Some((name, distance)),
        }
    }

    best_match.map(|(name, _)| name)
}
