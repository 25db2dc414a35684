//! The flat map, lit as if it were a globe.

use std::process::ExitCode;

use pixelate::Demo;

fn main() -> ExitCode {
    pixelate::main_for(Some(Demo::LitProjection))
}
