//! `tagtint` - render #color[...] markup from the command line.
//!
//! ```text
//! tagtint 'build #green[passed] in #bold[3.2s]'
//! echo '#(red,bold)[error]: disk full' | tagtint --output term
//! tagtint --data report.json '{% for t in tests %}#cyan[{{ t.name }}] {% endfor %}'
//! ```

mod cli;
mod logging;

use std::process::ExitCode;

use clap::Parser;

use crate::cli::Cli;

fn main() -> ExitCode {
    let cli = Cli::parse();
    logging::init_logging(&cli.log_level);

    let stdin = std::io::stdin();
    let stdout = std::io::stdout();
    match cli::run(&cli, stdin.lock(), &mut stdout.lock()) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            tracing::debug!(error = ?err, "command failed");
            eprintln!("error: {:#}", err);
            ExitCode::FAILURE
        }
    }
}
