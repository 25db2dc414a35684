//! Top-down racing car, driven by the configured control script.

use std::process::ExitCode;

use pixelate::Demo;

fn main() -> ExitCode {
    pixelate::main_for(Some(Demo::RacingCar))
}
