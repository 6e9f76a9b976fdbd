mod args;
mod terminal;

use std::fs::OpenOptions;
use std::io;
use std::path::PathBuf;
use std::sync::Mutex;

use rand::SeedableRng;
use rand::rngs::StdRng;
use services::{Clock, Command, Event, SessionConfig, SessionError, Timeline};
use thiserror::Error;
use tokio::sync::mpsc;
use tokio::time::{Instant, sleep_until};
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;
use ui::{QuizMachine, build_machine, render_frame};

use crate::args::{Args, ArgsError, Invocation, print_usage};
use crate::terminal::{TerminalGuard, draw, ring_bell, spawn_key_reader};

#[derive(Debug, Error)]
enum AppError {
    #[error(transparent)]
    Args(#[from] ArgsError),
    #[error(transparent)]
    Config(#[from] SessionError),
    #[error("cannot open log file {}: {source}", path.display())]
    LogFile { path: PathBuf, source: io::Error },
    #[error("invalid --log-level {raw:?}: {reason}")]
    LogFilter { raw: String, reason: String },
    #[error("terminal error: {0}")]
    Terminal(#[from] io::Error),
}

/// Installs a file subscriber when `--log-file` is given. The terminal is
/// owned by the quiz, so logs never go to stdout or stderr.
fn init_logging(args: &Args) -> Result<(), AppError> {
    let Some(path) = &args.log_file else {
        return Ok(());
    };
    let filter = EnvFilter::try_new(&args.log_level).map_err(|err| AppError::LogFilter {
        raw: args.log_level.clone(),
        reason: err.to_string(),
    })?;
    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .map_err(|source| AppError::LogFile {
            path: path.clone(),
            source,
        })?;

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .init();
    Ok(())
}

fn session_config(args: &Args) -> Result<SessionConfig, AppError> {
    let config = SessionConfig::default();
    Ok(match args.bar_width {
        Some(width) => config.with_bar_width(width)?,
        None => config,
    })
}

async fn run(args: Args) -> Result<(), AppError> {
    init_logging(&args)?;
    let config = session_config(&args)?;
    let rng = args
        .seed
        .map_or_else(StdRng::from_os_rng, StdRng::seed_from_u64);
    let mut machine = build_machine(config, Clock::default_clock(), rng);
    let painter = ui::painter(args.color);
    info!(seed = ?args.seed, bar_width = config.bar_width(), "starting");

    let (tx, mut keys) = mpsc::unbounded_channel();
    let mut stdout = io::stdout();
    let _guard = TerminalGuard::enter(&mut stdout)?;
    spawn_key_reader(tx);

    let origin = Instant::now();
    let mut timeline = Timeline::new();
    timeline.apply(machine.boot());
    draw(&mut stdout, &render_frame(&machine, painter.as_ref()))?;

    loop {
        let event: Event = match timeline.next_due() {
            Some(due) => tokio::select! {
                key = keys.recv() => match key {
                    Some(input) => {
                        timeline.advance_to(origin.elapsed());
                        input?.into()
                    }
                    None => return Ok(()),
                },
                () = sleep_until(origin + due) => match timeline.pop_until(due) {
                    Some(timer) => timer.into(),
                    None => continue,
                },
            },
            None => match keys.recv().await {
                Some(input) => {
                    timeline.advance_to(origin.elapsed());
                    input?.into()
                }
                None => return Ok(()),
            },
        };

        if dispatch(&mut machine, &mut timeline, event, &mut stdout)? {
            info!("exiting");
            return Ok(());
        }
        draw(&mut stdout, &render_frame(&machine, painter.as_ref()))?;
    }
}

/// Feeds one event to the machine and performs its side effects. Returns true
/// once the machine asks to exit.
fn dispatch(
    machine: &mut QuizMachine<StdRng>,
    timeline: &mut Timeline,
    event: Event,
    out: &mut impl io::Write,
) -> Result<bool, AppError> {
    for command in timeline.apply(machine.handle(event)) {
        match command {
            Command::Bell => {
                debug!("bell");
                ring_bell(out)?;
            }
            Command::Exit => return Ok(true),
            Command::Schedule { .. } => {}
        }
    }
    Ok(false)
}

#[tokio::main(flavor = "current_thread")]
async fn main() {
    let args = match Args::parse(std::env::args().skip(1)) {
        Ok(Invocation::Play(args)) => args,
        Ok(Invocation::Help) => {
            print_usage();
            return;
        }
        Err(err) => {
            eprintln!("{err}");
            print_usage();
            std::process::exit(1);
        }
    };

    if let Err(err) = run(args).await {
        // The terminal guard has been dropped by now.
        eprintln!("{err}");
        std::process::exit(1);
    }
}
