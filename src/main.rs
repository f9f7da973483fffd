//! Binary entry point for the niebla desk-scene viewer.

use std::path::Path;
use std::process::ExitCode;

use niebla::{Options, Viewer};

const OPTIONS_FILE: &str = "niebla.toml";

fn main() -> ExitCode {
    env_logger::init();

    let options = match Options::load_or_default(Path::new(OPTIONS_FILE)) {
        Ok(options) => options,
        Err(e) => {
            log::error!("{OPTIONS_FILE}: {e}");
            return ExitCode::FAILURE;
        }
    };

    match Viewer::builder().with_options(options).build().run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            log::error!("{e}");
            ExitCode::FAILURE
        }
    }
}
