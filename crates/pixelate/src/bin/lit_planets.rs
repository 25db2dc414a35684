//! Spinning, lit globes.

use std::process::ExitCode;

use pixelate::Demo;

fn main() -> ExitCode {
    pixelate::main_for(Some(Demo::LitPlanets))
}
