//! # PIXELATE
//!
//! Headless front end for the graphics demos: command line, TOML
//! configuration, logging, texture selection and PNG output.
//!
//! Each demo binary is a one-line `main` around [`main_for`]; the
//! `pixelate` dispatcher takes the demo names as arguments.
//!
//! ```text
//! $ sphere --out frames
//! $ pixelate orbit lit_planets --config pixelate.toml
//! $ RUST_LOG=debug pixelate all
//! ```

#![deny(missing_docs)]
#![deny(unsafe_code)]
#![deny(clippy::all)]
#![warn(clippy::pedantic)]
#![deny(clippy::perf)]

pub mod cli;
pub mod config;
pub mod demo;
pub mod error;
pub mod logging;
pub mod texture;

use std::path::{Path, PathBuf};
use std::process::ExitCode;

pub use cli::{parse_args, CliArgs};
pub use config::Config;
pub use demo::{Demo, Session};
pub use error::{AppError, AppResult};

/// Renders `demos` with `config` into `out_dir` and returns every file
/// written.
///
/// # Errors
///
/// Stops at the first demo that fails.
pub fn render_all(config: &Config, out_dir: &Path, demos: &[Demo]) -> AppResult<Vec<PathBuf>> {
    let mut session = Session::new(config, out_dir)?;
    let mut written = Vec::new();
    for &demo in demos {
        written.extend(session.render(demo)?);
    }
    Ok(written)
}

/// Runs a binary: `Some(demo)` for a single-demo binary, `None` for the
/// dispatcher.
#[must_use]
pub fn main_for(fixed: Option<Demo>) -> ExitCode {
    let program = fixed.map_or("pixelate", Demo::name);
    match try_main(fixed, program) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("error: {err}");
            if matches!(err, AppError::Usage(_)) {
                eprint!("\n{}", cli::usage(program, fixed.is_none()));
            }
            ExitCode::FAILURE
        }
    }
}

fn try_main(fixed: Option<Demo>, program: &str) -> AppResult<()> {
    let cli = parse_args(std::env::args().skip(1), fixed.is_none())?;
    if cli.help {
        print!("{}", cli::usage(program, fixed.is_none()));
        return Ok(());
    }

    logging::init();

    let demos = match fixed {
        Some(demo) => vec![demo],
        None if cli.demos.is_empty() => {
            return Err(AppError::Usage("name at least one demo, or 'all'".into()));
        }
        None => cli.demos,
    };

    let cwd = std::env::current_dir().unwrap_or_else(|_| PathBuf::from("."));
    let mut config = Config::discover(cli.config.as_deref(), &cwd)?;
    if let Some(out) = cli.out {
        config.output_dir = out;
    }

    let written = render_all(&config, &config.output_dir, &demos)?;
    tracing::info!(
        files = written.len(),
        dir = %config.output_dir.display(),
        "done"
    );
    Ok(())
}
