//! Circle drawn with floating-point sine and cosine.

use std::process::ExitCode;

use pixelate::Demo;

fn main() -> ExitCode {
    pixelate::main_for(Some(Demo::Circle))
}
