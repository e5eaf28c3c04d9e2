use std::process::ExitCode;
use vacatrack_icons::{driver, logger};

fn main() -> ExitCode {
    logger::init();
    driver::run()
}
