use std::process::ExitCode;

fn main() -> ExitCode {
    logic_markup::cli::run()
}
