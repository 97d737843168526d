use std::process::ExitCode;

use graphkeys::cli::{self, Cli};
use graphkeys::ui::output;

fn main() -> ExitCode {
    let cli = match Cli::parse_args() {
        Ok(cli) => cli,
        Err(e) => {
            // --help and --version render to stdout and succeed
            let status = if e.use_stderr() { 1 } else { 0 };
            let _ = e.print();
            return ExitCode::from(status);
        }
    };

    match cli::run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            output::error(format!("{:#}", e));
            ExitCode::FAILURE
        }
    }
}
