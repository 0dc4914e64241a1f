//! Flag scanner for `status`.
//!
//! Accepts getopt-style input: clustered short flags (`-il`), attached or
//! separate short values (`-L2`, `-L 2`), `--long`, `--long=value`,
//! `--long value`, unambiguous long-flag prefixes, and `--` as an explicit end
//! of flags. Scanning stops at the first non-flag token; a lone `-` is a
//! positional word.
//!
//! Most flags here duplicate a subcommand word and are kept only so existing
//! scripts keep working. Do not add new flags that merely mirror a subcommand.

use crate::action::Action;
use crate::cli::command::StatusOptions;
use crate::error::{Result, StatusError};
use crate::job_control::JobControlMode;

/// What a flag does once recognized.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FlagKind {
    Help,
    /// Selects an action (deprecated subcommand flag).
    Action(Action),
    /// `-j/--job-control MODE`: selects `SetJobControl` and supplies the mode.
    JobControl,
    /// `-L/--level N`
    Level,
}

impl FlagKind {
    pub fn takes_value(self) -> bool {
        matches!(self, FlagKind::JobControl | FlagKind::Level)
    }
}

/// One recognized flag with all of its spellings.
#[derive(Debug, Clone, Copy)]
pub struct FlagSpec {
    pub short: Option<char>,
    pub long: &'static [&'static str],
    pub kind: FlagKind,
}

pub const FLAGS: &[FlagSpec] = &[
    FlagSpec {
        short: Some('h'),
        long: &["help"],
        kind: FlagKind::Help,
    },
    FlagSpec {
        short: Some('f'),
        long: &["current-filename", "filename"],
        kind: FlagKind::Action(Action::Filename),
    },
    FlagSpec {
        short: Some('n'),
        long: &["current-line-number", "line", "line-number"],
        kind: FlagKind::Action(Action::LineNumber),
    },
    FlagSpec {
        short: None,
        long: &["fish-path"],
        kind: FlagKind::Action(Action::FishPath),
    },
    FlagSpec {
        short: Some('b'),
        long: &["is-block"],
        kind: FlagKind::Action(Action::IsBlock),
    },
    FlagSpec {
        short: Some('c'),
        long: &["is-command-substitution"],
        kind: FlagKind::Action(Action::IsCommandSubstitution),
    },
    FlagSpec {
        short: None,
        long: &["is-full-job-control"],
        kind: FlagKind::Action(Action::IsFullJobControl),
    },
    FlagSpec {
        short: Some('i'),
        long: &["is-interactive"],
        kind: FlagKind::Action(Action::IsInteractive),
    },
    FlagSpec {
        short: None,
        long: &["is-interactive-job-control"],
        kind: FlagKind::Action(Action::IsInteractiveJobControl),
    },
    FlagSpec {
        short: Some('l'),
        long: &["is-login"],
        kind: FlagKind::Action(Action::IsLogin),
    },
    FlagSpec {
        short: None,
        long: &["is-no-job-control"],
        kind: FlagKind::Action(Action::IsNoJobControl),
    },
    FlagSpec {
        short: Some('j'),
        long: &["job-control"],
        kind: FlagKind::JobControl,
    },
    FlagSpec {
        short: Some('L'),
        long: &["level"],
        kind: FlagKind::Level,
    },
    FlagSpec {
        short: Some('t'),
        long: &["print-stack-trace", "stack-trace"],
        kind: FlagKind::Action(Action::StackTrace),
    },
];

/// Outcome of looking up a long flag name.
#[derive(Debug, Clone, Copy)]
enum LongMatch {
    Found(&'static FlagSpec),
    Ambiguous,
    Unknown,
}

fn lookup_short(c: char) -> Option<&'static FlagSpec> {
    FLAGS.iter().find(|spec| spec.short == Some(c))
}

/// Exact spelling wins; otherwise a prefix must select exactly one flag.
fn lookup_long(name: &str) -> LongMatch {
    if let Some(spec) = FLAGS.iter().find(|spec| spec.long.contains(&name)) {
        return LongMatch::Found(spec);
    }
    if name.is_empty() {
        return LongMatch::Unknown;
    }

    let mut found: Option<&'static FlagSpec> = None;
    for spec in FLAGS {
        if spec.long.iter().any(|long| long.starts_with(name)) {
            if found.is_some() {
                return LongMatch::Ambiguous;
            }
            found = Some(spec);
        }
    }
    found.map_or(LongMatch::Unknown, LongMatch::Found)
}

/// Parse a `--level` value. Negative and out-of-range numbers are reported
/// differently from text that is not a number at all.
pub fn parse_level(raw: &str) -> Result<usize> {
    use std::num::IntErrorKind;

    let trimmed = raw.trim();
    match trimmed.parse::<i64>() {
        Ok(n) if n < 0 || n > i64::from(i32::MAX) => Err(StatusError::InvalidLevel {
            value: raw.to_string(),
        }),
        Ok(n) => Ok(n as usize),
        Err(e) if matches!(e.kind(), IntErrorKind::PosOverflow | IntErrorKind::NegOverflow) => {
            Err(StatusError::InvalidLevel {
                value: raw.to_string(),
            })
        }
        Err(_) => Err(StatusError::LevelNotNumber {
            value: raw.to_string(),
        }),
    }
}

/// Result of scanning the flag prefix of the arguments.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Scan {
    pub options: StatusOptions,
    /// Number of leading arguments consumed as flags (including a `--`).
    pub consumed: usize,
    /// Spelling of the deprecated flag that selected the action.
    pub legacy_flag: Option<String>,
}

struct Scanner<'a> {
    args: &'a [String],
    options: StatusOptions,
    legacy_flag: Option<String>,
}

impl Scanner<'_> {
    fn apply(&mut self, kind: FlagKind, spelled: &str, value: Option<&str>) -> Result<()> {
        match kind {
            FlagKind::Help => self.options.print_help = true,
            FlagKind::Action(action) => {
                self.options.claim_action(action)?;
                self.legacy_flag = Some(spelled.to_string());
            }
            FlagKind::JobControl => {
                self.options.claim_action(Action::SetJobControl)?;
                self.legacy_flag = Some(spelled.to_string());
                let mode = JobControlMode::parse(value.unwrap_or_default())?;
                self.options.requested_job_control_mode = Some(mode);
            }
            FlagKind::Level => {
                self.options.level = parse_level(value.unwrap_or_default())?;
            }
        }
        Ok(())
    }

    /// Handle `--name`, `--name=value` or `--name value` at index `i`.
    /// Returns the index of the next unread argument.
    fn long_flag(&mut self, i: usize) -> Result<usize> {
        let args = self.args;
        let arg = &args[i];
        let body = &arg[2..];
        let (name, inline) = match body.split_once('=') {
            Some((name, value)) => (name, Some(value)),
            None => (body, None),
        };

        let spec = match lookup_long(name) {
            LongMatch::Found(spec) => spec,
            LongMatch::Ambiguous => {
                return Err(StatusError::AmbiguousOption {
                    option: format!("--{name}"),
                    position: i + 1,
                });
            }
            LongMatch::Unknown => {
                return Err(StatusError::UnknownOption {
                    option: arg.clone(),
                    position: i + 1,
                });
            }
        };

        if !spec.kind.takes_value() {
            if inline.is_some() {
                return Err(StatusError::UnknownOption {
                    option: arg.clone(),
                    position: i + 1,
                });
            }
            self.apply(spec.kind, arg, None)?;
            return Ok(i + 1);
        }

        let spelled = format!("--{name}");
        match inline {
            Some(value) => {
                self.apply(spec.kind, &spelled, Some(value))?;
                Ok(i + 1)
            }
            None => {
                let value = args.get(i + 1).ok_or_else(|| {
                    StatusError::MissingOptionArgument {
                        option: spelled.clone(),
                        position: i + 1,
                    }
                })?;
                self.apply(spec.kind, &spelled, Some(value))?;
                Ok(i + 2)
            }
        }
    }

    /// Handle a cluster of short flags such as `-il` or `-L2` at index `i`.
    fn short_cluster(&mut self, i: usize) -> Result<usize> {
        let args = self.args;
        let arg = &args[i];
        let cluster = &arg[1..];

        for (offset, c) in cluster.char_indices() {
            let spelled = format!("-{c}");
            let spec = lookup_short(c).ok_or_else(|| StatusError::UnknownOption {
                option: spelled.clone(),
                position: i + 1,
            })?;

            if !spec.kind.takes_value() {
                self.apply(spec.kind, &spelled, None)?;
                continue;
            }

            let attached = &cluster[offset + c.len_utf8()..];
            if !attached.is_empty() {
                self.apply(spec.kind, &spelled, Some(attached))?;
                return Ok(i + 1);
            }
            let value = args
                .get(i + 1)
                .ok_or_else(|| StatusError::MissingOptionArgument {
                    option: spelled.clone(),
                    position: i + 1,
                })?;
            self.apply(spec.kind, &spelled, Some(value))?;
            return Ok(i + 2);
        }
        Ok(i + 1)
    }
}

/// Scan leading flags of `args` (the arguments after the command name).
pub fn scan(args: &[String]) -> Result<Scan> {
    let mut scanner = Scanner {
        args,
        options: StatusOptions::default(),
        legacy_flag: None,
    };

    let mut i = 0;
    while i < args.len() {
        let arg = args[i].as_str();
        if arg == "--" {
            i += 1;
            break;
        }
        if arg.starts_with("--") {
            i = scanner.long_flag(i)?;
        } else if arg.starts_with('-') && arg.len() > 1 {
            i = scanner.short_cluster(i)?;
        } else {
            break;
        }
    }

    Ok(Scan {
        options: scanner.options,
        consumed: i,
        legacy_flag: scanner.legacy_flag,
    })
}
