//! Narrow interfaces to the interpreter state that `status` reports on.
//!
//! The command never owns this state. The dispatcher reads it through these
//! traits and writes only the job-control mode, through a [`JobControlCell`].

use std::io;
use std::path::PathBuf;

use serde::Deserialize;

use crate::job_control::JobControlCell;

/// Call-stack and session facts exposed by the interpreter.
pub trait Interpreter {
    /// Whether this is a login session.
    fn is_login(&self) -> bool;

    /// Whether the session reads commands interactively.
    fn is_interactive_session(&self) -> bool;

    /// File currently being executed; `None` or empty when reading standard input.
    fn current_filename(&self) -> Option<String>;

    /// Name of the function `level` frames up the call stack (1 = the caller of `status`).
    fn function_name(&self, level: usize) -> Option<String>;

    fn line_number(&self) -> i64;

    fn is_block(&self) -> bool;

    fn is_breakpoint(&self) -> bool;

    /// Whether we are running inside a command substitution.
    fn is_subshell(&self) -> bool;

    /// Rendered stack trace, newline-terminated lines or empty.
    fn stack_trace(&self) -> String;

    /// The command currently executing, as recorded for `status current-command`.
    fn status_command(&self) -> String;

    fn status_commandline(&self) -> String;

    /// Name of the running program, used when no command is recorded.
    fn program_name(&self) -> String {
        "fish".to_string()
    }
}

/// One feature flag as shown by `status features`.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct FeatureDescriptor {
    pub name: String,
    #[serde(default)]
    pub enabled: bool,
    /// Version group the flag was introduced in, e.g. `3.0`.
    #[serde(default)]
    pub groups: String,
    #[serde(default)]
    pub description: String,
}

impl FeatureDescriptor {
    pub fn new(name: &str, enabled: bool, groups: &str, description: &str) -> Self {
        Self {
            name: name.to_string(),
            enabled,
            groups: groups.to_string(),
            description: description.to_string(),
        }
    }
}

/// Read-only view of the feature-flag registry.
pub trait FeatureRegistry {
    fn feature_metadata(&self) -> Vec<FeatureDescriptor>;

    /// `Some(enabled)` for a registered name, `None` otherwise.
    fn feature_test(&self, name: &str) -> Option<bool> {
        self.feature_metadata()
            .into_iter()
            .find(|feature| feature.name == name)
            .map(|feature| feature.enabled)
    }
}

/// The feature flags a stock shell ships with.
pub fn default_features() -> Vec<FeatureDescriptor> {
    vec![
        FeatureDescriptor::new("stderr-nocaret", true, "3.0", "^ no longer redirects stderr"),
        FeatureDescriptor::new("qmark-noglob", false, "3.0", "? no longer globs"),
        FeatureDescriptor::new(
            "regex-easyesc",
            true,
            "3.1",
            "string replace -r needs fewer \\'s",
        ),
        FeatureDescriptor::new(
            "ampersand-nobg-in-token",
            true,
            "3.4",
            "& only backgrounds if followed by a separator",
        ),
    ]
}

impl FeatureRegistry for Vec<FeatureDescriptor> {
    fn feature_metadata(&self) -> Vec<FeatureDescriptor> {
        self.clone()
    }
}

/// Locates the running executable.
pub trait ExecutableLocator {
    /// Path of the executable for `name`; may be relative when it was found via `$PATH`.
    fn executable_path(&self, name: &str) -> io::Result<PathBuf>;
}

/// Resolves the path of the current process image.
#[derive(Debug, Default, Clone, Copy)]
pub struct CurrentExe;

impl ExecutableLocator for CurrentExe {
    fn executable_path(&self, _name: &str) -> io::Result<PathBuf> {
        std::env::current_exe()
    }
}

/// Everything a dispatch needs besides the parsed command.
#[derive(Clone, Copy)]
pub struct StatusContext<'a> {
    pub interpreter: &'a dyn Interpreter,
    pub features: &'a dyn FeatureRegistry,
    pub locator: &'a dyn ExecutableLocator,
    pub job_control: &'a JobControlCell,
}

impl<'a> StatusContext<'a> {
    pub fn new(
        interpreter: &'a dyn Interpreter,
        features: &'a dyn FeatureRegistry,
        locator: &'a dyn ExecutableLocator,
        job_control: &'a JobControlCell,
    ) -> Self {
        Self {
            interpreter,
            features,
            locator,
            job_control,
        }
    }
}
