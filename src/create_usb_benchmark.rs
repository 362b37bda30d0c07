use std::process::ExitCode;

use tracing::error;
use usb_benchmark::logging::init_logging;

fn main() -> ExitCode {
    init_logging();

    match usb_benchmark::generate() {
        Ok(_) => ExitCode::SUCCESS,
        Err(err) => {
            error!("{err}");
            ExitCode::FAILURE
        }
    }
}
