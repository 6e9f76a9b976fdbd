use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, PartialEq, Eq, Error)]
pub enum ArgsError {
    #[error("{flag} requires a value")]
    MissingValue { flag: &'static str },
    #[error("unknown argument: {0}")]
    UnknownArg(String),
    #[error("invalid --seed value: {raw}")]
    InvalidSeed { raw: String },
    #[error("invalid --bar-width value: {raw}")]
    InvalidBarWidth { raw: String },
}

fn require_value(
    args: &mut impl Iterator<Item = String>,
    flag: &'static str,
) -> Result<String, ArgsError> {
    args.next().ok_or(ArgsError::MissingValue { flag })
}

pub fn print_usage() {
    eprintln!("Usage:");
    eprintln!("  bomb-quiz [--seed <u64>] [--bar-width <10..=200>] [--no-color]");
    eprintln!("            [--log-file <path>] [--log-level <filter>]");
    eprintln!();
    eprintln!("Defaults:");
    eprintln!("  --bar-width 30");
    eprintln!("  --log-level info (only used with --log-file)");
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Args {
    pub seed: Option<u64>,
    pub bar_width: Option<usize>,
    pub color: bool,
    pub log_file: Option<PathBuf>,
    pub log_level: String,
}

impl Default for Args {
    fn default() -> Self {
        Self {
            seed: None,
            bar_width: None,
            color: true,
            log_file: None,
            log_level: "info".into(),
        }
    }
}

#[derive(Debug, PartialEq, Eq)]
pub enum Invocation {
    Play(Args),
    Help,
}

impl Args {
    pub fn parse(mut args: impl Iterator<Item = String>) -> Result<Invocation, ArgsError> {
        let mut parsed = Self::default();

        while let Some(arg) = args.next() {
            match arg.as_str() {
                "--seed" => {
                    let value = require_value(&mut args, "--seed")?;
                    let seed = value
                        .parse()
                        .map_err(|_| ArgsError::InvalidSeed { raw: value.clone() })?;
                    parsed.seed = Some(seed);
                }
                "--bar-width" => {
                    let value = require_value(&mut args, "--bar-width")?;
                    let width = value
                        .parse()
                        .map_err(|_| ArgsError::InvalidBarWidth { raw: value.clone() })?;
                    parsed.bar_width = Some(width);
                }
                "--no-color" => parsed.color = false,
                "--log-file" => {
                    parsed.log_file = Some(require_value(&mut args, "--log-file")?.into());
                }
                "--log-level" => parsed.log_level = require_value(&mut args, "--log-level")?,
                "--help" | "-h" => return Ok(Invocation::Help),
                _ => return Err(ArgsError::UnknownArg(arg)),
            }
        }

        Ok(Invocation::Play(parsed))
    }
}
