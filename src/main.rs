use std::process::ExitCode;

fn main() -> ExitCode {
    revision_info::app::startup::startup()
}
