use std::process::ExitCode;

use tracing_subscriber::EnvFilter;

use shstatus::cli::main_entry;

fn init_logging() {
    // Logs go to stderr; stdout carries command output only.
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn main() -> ExitCode {
    init_logging();

    match main_entry("status") {
        Ok(status) => status.into(),
        Err(err) => {
            eprintln!("status: {err:#}");
            shstatus::ExitStatus::CMD_ERROR.into()
        }
    }
}
