//! `pixelate <demo>... | all`: renders any of the demos.

use std::process::ExitCode;

fn main() -> ExitCode {
    pixelate::main_for(None)
}
