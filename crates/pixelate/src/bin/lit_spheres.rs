//! Gray spheres lit from different directions.

use std::process::ExitCode;

use pixelate::Demo;

fn main() -> ExitCode {
    pixelate::main_for(Some(Demo::LitSpheres))
}
