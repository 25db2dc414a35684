//! Command line parsing.
//!
//! ```text
//! <binary> [--config <path>] [--out <dir>] [--help]
//! pixelate <demo>|all [--config <path>] [--out <dir>] [--help]
//! ```

use std::path::PathBuf;

use crate::demo::Demo;
use crate::error::{AppError, AppResult};

/// Parsed arguments.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct CliArgs {
    /// `--config <path>`
    pub config: Option<PathBuf>,
    /// `--out <dir>`, overrides `output_dir`.
    pub out: Option<PathBuf>,
    /// `--help`
    pub help: bool,
    /// Demos named on the dispatcher's command line.
    pub demos: Vec<Demo>,
}

/// Parses arguments, program name excluded.
///
/// Positional arguments are demo names (or `all`) and are only accepted
/// when `dispatcher` is set.
///
/// # Errors
///
/// Returns `AppError::Usage` for unknown flags, missing flag values,
/// unknown demo names, and positional arguments a single-demo binary
/// does not take.
pub fn parse_args<I>(args: I, dispatcher: bool) -> AppResult<CliArgs>
where
    I: IntoIterator<Item = String>,
{
    let mut cli = CliArgs::default();
    let mut args = args.into_iter();

    while let Some(arg) = args.next() {
        match arg.as_str() {
            "--help" | "-h" => cli.help = true,
            "--config" => cli.config = Some(flag_value(&mut args, "--config")?),
            "--out" => cli.out = Some(flag_value(&mut args, "--out")?),
            flag if flag.starts_with('-') => {
                return Err(AppError::Usage(format!("unknown option '{flag}'")));
            }
            "all" if dispatcher => cli.demos.extend(Demo::ALL),
            name if dispatcher => cli.demos.push(name.parse()?),
            other => {
                return Err(AppError::Usage(format!("unexpected argument '{other}'")));
            }
        }
    }

    Ok(cli)
}

fn flag_value(args: &mut impl Iterator<Item = String>, flag: &str) -> AppResult<PathBuf> {
    args.next()
        .map(PathBuf::from)
        .ok_or_else(|| AppError::Usage(format!("{flag} needs a value")))
}

/// Help text for `program`.
#[must_use]
pub fn usage(program: &str, dispatcher: bool) -> String {
    let mut text = if dispatcher {
        format!("usage: {program} <demo>... | all [--config <path>] [--out <dir>]\n\ndemos:\n")
    } else {
        format!("usage: {program} [--config <path>] [--out <dir>]\n")
    };
    if dispatcher {
        for demo in Demo::ALL {
            text.push_str(&format!("  {:<18}{}\n", demo.name(), demo.description()));
        }
    }
    text.push_str(concat!(
        "\noptions:\n",
        "  --config <path>   TOML config (default: ./pixelate.toml if present)\n",
        "  --out <dir>       output directory (overrides output_dir)\n",
        "  --help            show this text\n",
        "\n",
        "RUST_LOG controls log verbosity (default: info).\n",
    ));
    text
}
