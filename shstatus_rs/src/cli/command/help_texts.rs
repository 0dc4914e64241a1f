//! Static help text for `status --help`.

pub(super) const STATUS_USAGE: &str = "{cmd} - query shell status information

USAGE:
    {cmd}
    {cmd} SUBCOMMAND [ARGS...]
    {cmd} [-L | --level LEVEL] current-function
    {cmd} job-control full | interactive | none
    {cmd} test-feature FEATURE";

pub(super) const STATUS_DESCRIPTION: &str = "DESCRIPTION:
    With no arguments, status prints whether this is a login shell, the
    job-control mode, and the current stack trace. Exactly one subcommand may
    be given per invocation.";

pub(super) const STATUS_OPTIONS: &str = "OPTIONS:
    -L, --level LEVEL    Stack level used by current-function (default: 1)
    -h, --help           Show this help message

DEPRECATED FLAGS (use the subcommand instead):
    -f, --filename, --current-filename          current-filename
    -n, --line, --line-number,
        --current-line-number                   current-line-number
    -b, --is-block                              is-block
    -c, --is-command-substitution               is-command-substitution
    -i, --is-interactive                        is-interactive
    -l, --is-login                              is-login
    -t, --print-stack-trace, --stack-trace      print-stack-trace
    -j, --job-control MODE                      job-control MODE
    --fish-path                                 fish-path
    --is-full-job-control                       is-full-job-control
    --is-interactive-job-control                is-interactive-job-control
    --is-no-job-control                         is-no-job-control";

pub(super) const STATUS_EXIT_CODES: &str = "EXIT STATUS:
    0      success; for is-* subcommands, the condition holds
    1      the condition does not hold, or conflicting subcommands / bad mode
    2      test-feature: the feature name is not recognized
    121    invalid arguments";
