//! Command-line arguments.

use std::path::PathBuf;

pub const USAGE: &str = "\
Gym Flappy Bird - raise your arms to fly

Usage: gym-flappy [options]

Options:
  --config <path>  Load tuning from a JSON file
  --replay <path>  Drive the bird from a landmark recording (JSON lines)
  --loop           Loop the recording instead of stopping at its end
  --logo <path>    ASCII-art logo for the menu
  --log <path>     Write the log here instead of the data directory
  --version        Show version information
  --help           Show this help message

Without --replay, Space/Up/W stand in for raising your arms.";

/// Options for a game run.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RunOptions {
    pub config: Option<PathBuf>,
    pub replay: Option<PathBuf>,
    pub looping: bool,
    pub logo: Option<PathBuf>,
    pub log: Option<PathBuf>,
}

/// What the binary was asked to do.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CliCommand {
    Run(RunOptions),
    Help,
    Version,
}

/// Parse arguments (without the program name).
pub fn parse_args<I, S>(args: I) -> Result<CliCommand, String>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut options = RunOptions::default();
    let mut args = args.into_iter();

    while let Some(arg) = args.next() {
        let arg = arg.as_ref();
        match arg {
            "--help" | "-h" => return Ok(CliCommand::Help),
            "--version" | "-v" => return Ok(CliCommand::Version),
            "--loop" => options.looping = true,
            "--config" | "--replay" | "--logo" | "--log" => {
                let value = args
                    .next()
                    .ok_or_else(|| format!("{} needs a path", arg))?;
                let path = Some(PathBuf::from(value.as_ref()));
                match arg {
                    "--config" => options.config = path,
                    "--replay" => options.replay = path,
                    "--logo" => options.logo = path,
                    _ => options.log = path,
                }
            }
            other => return Err(format!("Unknown argument: {}", other)),
        }
    }

    if options.looping && options.replay.is_none() {
        return Err("--loop only applies with --replay".to_string());
    }
    Ok(CliCommand::Run(options))
}
