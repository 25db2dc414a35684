//! Circle drawn with the fixed-point lookup tables.

use std::process::ExitCode;

use pixelate::Demo;

fn main() -> ExitCode {
    pixelate::main_for(Some(Demo::CircleFixed))
}
