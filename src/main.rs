mod app;
mod command;
mod config;
mod consts;
mod game;
mod input;
mod render;
mod util;
use crate::app::App;
use crate::config::{Config, LogConfig};
use anyhow::Context;
use lexopt::{Arg, Parser};
use log::{info, LevelFilter};
use simplelog::WriteLogger;
use std::io::{self, ErrorKind};
use std::path::PathBuf;
use std::process::ExitCode;

static USAGE: &str = "\
Usage: snakegrid [<options>]

Play snake on a 32x32 grid.  Press Enter to start, steer with the arrow keys,
and press Ctrl-C to quit.

Options:
  -c, --config <PATH>   Read configuration from the given file
  -h, --help            Display this help message and exit
  -V, --version         Show the program version and exit
";

/// What the program was asked to do on the command line
#[derive(Clone, Debug, Eq, PartialEq)]
enum Invocation {
    Play { config: Option<PathBuf> },
    Help,
    Version,
}

impl Invocation {
    fn from_parser(mut parser: Parser) -> Result<Invocation, lexopt::Error> {
        let mut config = None;
        while let Some(arg) = parser.next()? {
            match arg {
                Arg::Short('c') | Arg::Long("config") => {
                    config = Some(PathBuf::from(parser.value()?));
                }
                Arg::Short('h') | Arg::Long("help") => return Ok(Invocation::Help),
                Arg::Short('V') | Arg::Long("version") => return Ok(Invocation::Version),
                _ => return Err(arg.unexpected()),
            }
        }
        Ok(Invocation::Play { config })
    }
}

fn main() -> ExitCode {
    match Invocation::from_parser(Parser::from_env()) {
        Ok(Invocation::Play { config }) => report(play(config)),
        Ok(Invocation::Help) => {
            print!("{USAGE}");
            ExitCode::SUCCESS
        }
        Ok(Invocation::Version) => {
            println!("{} {}", env!("CARGO_PKG_NAME"), env!("CARGO_PKG_VERSION"));
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("snakegrid: {e}");
            ExitCode::from(2)
        }
    }
}

fn play(config_path: Option<PathBuf>) -> anyhow::Result<()> {
    let config = load_config(config_path)?;
    init_logging(&config.log)?;
    let terminal = ratatui::init();
    let r = App::new(config.game.tuning()).run(terminal);
    ratatui::restore();
    info!("Exiting");
    r.map_err(Into::into)
}

fn load_config(path: Option<PathBuf>) -> anyhow::Result<Config> {
    let (path, allow_missing) = match path {
        Some(p) => (p, false),
        None => match Config::default_path() {
            Ok(p) => (p, true),
            Err(_) => return Ok(Config::default()),
        },
    };
    Config::load(&path, allow_missing)
        .with_context(|| format!("failed to load configuration from {}", path.display()))
}

fn init_logging(cfg: &LogConfig) -> anyhow::Result<()> {
    if cfg.level == LevelFilter::Off {
        return Ok(());
    }
    let Some(path) = cfg.log_file() else {
        return Ok(());
    };
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs_err::create_dir_all(parent).context("failed to create log directory")?;
    }
    let file = fs_err::File::create(&path).context("failed to open log file")?;
    WriteLogger::init(cfg.level, simplelog::Config::default(), file)
        .context("failed to initialize logger")?;
    info!(
        "Starting {} {}; logging to {}",
        env!("CARGO_PKG_NAME"),
        env!("CARGO_PKG_VERSION"),
        path.display()
    );
    Ok(())
}

fn report(r: anyhow::Result<()>) -> ExitCode {
    match r {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) if is_broken_pipe(&e) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("snakegrid: {e:#}");
            ExitCode::from(2)
        }
    }
}

fn is_broken_pipe(e: &anyhow::Error) -> bool {
    e.downcast_ref::<io::Error>()
        .is_some_and(|ioe| ioe.kind() == ErrorKind::BrokenPipe)
}
