//! Session snapshot for the standalone `status` binary.
//!
//! Outside an interpreter there is no live call stack to inspect, so the binary
//! reports on a session described in TOML. Loads `STATUS_SESSION_FILE` if set,
//! otherwise `.status/session.toml` under the current directory.

use std::io;
use std::path::{Path, PathBuf};

use serde::Deserialize;
use tracing::warn;

use crate::job_control::JobControlMode;
use crate::session::{
    CurrentExe, ExecutableLocator, FeatureDescriptor, FeatureRegistry, Interpreter,
    default_features,
};

/// Environment variable naming the session file.
pub const SESSION_FILE_ENV: &str = "STATUS_SESSION_FILE";

/// Root configuration structure
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct SessionConfig {
    pub login: bool,
    pub interactive: bool,
    /// Initial job-control mode token (`full`, `interactive`, `none`).
    pub job_control: String,
    /// Script being executed; empty means standard input.
    pub filename: String,
    pub line_number: i64,
    /// Function call stack, innermost first.
    pub functions: Vec<String>,
    pub is_block: bool,
    pub is_breakpoint: bool,
    pub is_subshell: bool,
    pub stack_trace: String,
    pub command: String,
    pub commandline: String,
    pub program_name: String,
    /// Overrides the executable path reported by `fish-path`.
    pub executable: Option<PathBuf>,
    pub features: Vec<FeatureDescriptor>,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            login: false,
            interactive: false,
            job_control: JobControlMode::default().token().to_string(),
            filename: String::new(),
            line_number: 0,
            functions: Vec::new(),
            is_block: false,
            is_breakpoint: false,
            is_subshell: false,
            stack_trace: String::new(),
            command: String::new(),
            commandline: String::new(),
            program_name: "fish".to_string(),
            executable: None,
            features: default_features(),
        }
    }
}

impl SessionConfig {
    /// Load from `STATUS_SESSION_FILE`, or `.status/session.toml` in `cwd`.
    pub fn load(cwd: &Path) -> Self {
        match std::env::var_os(SESSION_FILE_ENV) {
            Some(path) if !path.is_empty() => Self::load_from_path(Path::new(&path)),
            _ => Self::load_from_path(&cwd.join(".status").join("session.toml")),
        }
    }

    /// Load config from a specific path.
    /// Returns default config if file doesn't exist or is invalid.
    pub fn load_from_path(path: &Path) -> Self {
        if !path.exists() {
            return Self::default();
        }

        match std::fs::read_to_string(path) {
            Ok(content) => match toml::from_str(&content) {
                Ok(config) => config,
                Err(e) => {
                    warn!("failed to parse {}: {}", path.display(), e);
                    Self::default()
                }
            },
            Err(e) => {
                warn!("failed to read {}: {}", path.display(), e);
                Self::default()
            }
        }
    }

    /// Job-control mode the session starts in.
    pub fn initial_job_control(&self) -> JobControlMode {
        JobControlMode::parse(&self.job_control).unwrap_or_else(|err| {
            warn!("session file: {err}; using '{}'", JobControlMode::default());
            JobControlMode::default()
        })
    }
}

impl Interpreter for SessionConfig {
    fn is_login(&self) -> bool {
        self.login
    }

    fn is_interactive_session(&self) -> bool {
        self.interactive
    }

    fn current_filename(&self) -> Option<String> {
        if self.filename.is_empty() {
            None
        } else {
            Some(self.filename.clone())
        }
    }

    // Levels 0 and 1 both name the innermost function.
    fn function_name(&self, level: usize) -> Option<String> {
        self.functions.get(level.saturating_sub(1)).cloned()
    }

    fn line_number(&self) -> i64 {
        self.line_number
    }

    fn is_block(&self) -> bool {
        self.is_block
    }

    fn is_breakpoint(&self) -> bool {
        self.is_breakpoint
    }

    fn is_subshell(&self) -> bool {
        self.is_subshell
    }

    fn stack_trace(&self) -> String {
        self.stack_trace.clone()
    }

    fn status_command(&self) -> String {
        self.command.clone()
    }

    fn status_commandline(&self) -> String {
        self.commandline.clone()
    }

    fn program_name(&self) -> String {
        self.program_name.clone()
    }
}

impl FeatureRegistry for SessionConfig {
    fn feature_metadata(&self) -> Vec<FeatureDescriptor> {
        self.features.clone()
    }
}

impl ExecutableLocator for SessionConfig {
    fn executable_path(&self, name: &str) -> io::Result<PathBuf> {
        match &self.executable {
            Some(path) if path.as_os_str().is_empty() => Err(io::Error::new(
                io::ErrorKind::NotFound,
                "executable path is empty",
            )),
            Some(path) => Ok(path.clone()),
            None => CurrentExe.executable_path(name),
        }
    }
}
