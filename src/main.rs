mod app;
mod command;
mod config;
mod consts;
mod game;
mod util;
use crate::app::App;
use crate::config::Config;
use anyhow::Context;
use crossterm::event::{DisableFocusChange, EnableFocusChange};
use lexopt::{Arg, Parser};
use log::{info, warn, LevelFilter};
use simplelog::WriteLogger;
use std::io::{self, ErrorKind};
use std::path::{Path, PathBuf};
use std::process::ExitCode;

const USAGE: &str = "\
Usage: wrapsnake [-c|--config <FILE>] [--log-file <FILE>]

Snake on a wrap-around grid, in the terminal

Options:
  -c, --config <FILE>   Read configuration from <FILE>
      --log-file <FILE> Write log messages to <FILE>
  -h, --help            Display this help message and exit
  -V, --version         Show the program version and exit

Keys: arrows/WASD/HJKL to turn, p/Space/Esc to pause, q/Ctrl-C to quit
";

#[derive(Clone, Debug, Eq, PartialEq)]
enum Action {
    Run {
        config: Option<PathBuf>,
        log_file: Option<PathBuf>,
    },
    Help,
    Version,
}

impl Action {
    fn from_parser(mut parser: Parser) -> Result<Action, lexopt::Error> {
        let mut config = None;
        let mut log_file = None;
        while let Some(arg) = parser.next()? {
            match arg {
                Arg::Short('c') | Arg::Long("config") => {
                    config = Some(PathBuf::from(parser.value()?));
                }
                Arg::Long("log-file") => {
                    log_file = Some(PathBuf::from(parser.value()?));
                }
                Arg::Short('h') | Arg::Long("help") => return Ok(Action::Help),
                Arg::Short('V') | Arg::Long("version") => return Ok(Action::Version),
                _ => return Err(arg.unexpected()),
            }
        }
        Ok(Action::Run { config, log_file })
    }
}

fn main() -> ExitCode {
    match Action::from_parser(Parser::from_env()) {
        Ok(Action::Run { config, log_file }) => exit_code(run(config.as_deref(), log_file)),
        Ok(Action::Help) => {
            print!("{USAGE}");
            ExitCode::SUCCESS
        }
        Ok(Action::Version) => {
            println!("{} {}", env!("CARGO_PKG_NAME"), env!("CARGO_PKG_VERSION"));
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("wrapsnake: {e}\n\n{USAGE}");
            ExitCode::from(2)
        }
    }
}

fn run(config_path: Option<&Path>, log_file: Option<PathBuf>) -> anyhow::Result<()> {
    init_logging(log_file)?;
    let config = match config_path {
        Some(p) => Config::load(p, false),
        None => Config::default_path().and_then(|p| Config::load(&p, true)),
    }
    .context("failed to load configuration")?;
    info!("Starting on a {}x{} grid", config.grid.width, config.grid.height);
    let terminal = ratatui::init();
    let r = crossterm::execute!(io::stdout(), EnableFocusChange)
        .and_then(|()| App::new(&config).run(terminal));
    if let Err(e) = crossterm::execute!(io::stdout(), DisableFocusChange) {
        warn!("Failed to disable focus change reporting: {e}");
    }
    ratatui::restore();
    info!("Exiting");
    r.map_err(Into::into)
}

/// Log to a file, as the terminal is occupied by the game.  The level is
/// `info` unless overridden by the `WRAPSNAKE_LOG` environment variable.
fn init_logging(log_file: Option<PathBuf>) -> anyhow::Result<()> {
    let path = match log_file {
        Some(p) => p,
        None => dirs::data_local_dir()
            .map(|p| p.join(consts::APP_DIR_NAME).join("wrapsnake.log"))
            .context("failed to determine path to local data directory")?,
    };
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs_err::create_dir_all(parent)?;
    }
    let file = fs_err::File::create(&path)?;
    let level = match std::env::var(consts::LOG_LEVEL_VAR) {
        Ok(s) => s
            .parse::<LevelFilter>()
            .with_context(|| format!("invalid {} value: {s:?}", consts::LOG_LEVEL_VAR))?,
        Err(_) => LevelFilter::Info,
    };
    WriteLogger::init(level, simplelog::Config::default(), file)
        .context("failed to initialize logger")?;
    Ok(())
}

fn exit_code(r: anyhow::Result<()>) -> ExitCode {
    match r {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) if is_broken_pipe(&e) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("wrapsnake: {e:?}");
            ExitCode::from(2)
        }
    }
}

fn is_broken_pipe(e: &anyhow::Error) -> bool {
    e.chain()
        .filter_map(|cause| cause.downcast_ref::<io::Error>())
        .any(|ioerr| ioerr.kind() == ErrorKind::BrokenPipe)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    fn parse(args: &[&str]) -> Result<Action, lexopt::Error> {
        Action::from_parser(Parser::from_iter(
            std::iter::once("wrapsnake").chain(args.iter().copied()),
        ))
    }

    #[test]
    fn no_args() {
        assert_eq!(
            parse(&[]).expect("parsing should succeed"),
            Action::Run {
                config: None,
                log_file: None
            }
        );
    }

    #[test]
    fn all_paths() {
        assert_eq!(
            parse(&["-c", "snake.toml", "--log-file=/tmp/snake.log"])
                .expect("parsing should succeed"),
            Action::Run {
                config: Some(PathBuf::from("snake.toml")),
                log_file: Some(PathBuf::from("/tmp/snake.log")),
            }
        );
    }

    #[rstest]
    #[case(&["-h"], Action::Help)]
    #[case(&["--help", "--bogus"], Action::Help)]
    #[case(&["-V"], Action::Version)]
    #[case(&["--config", "x.toml", "--version"], Action::Version)]
    fn info_actions(#[case] args: &[&str], #[case] action: Action) {
        assert_eq!(parse(args).expect("parsing should succeed"), action);
    }

    #[rstest]
    #[case(&["--bogus"])]
    #[case(&["extra"])]
    #[case(&["--config"])]
    fn bad_args(#[case] args: &[&str]) {
        assert!(parse(args).is_err());
    }

    #[test]
    fn broken_pipe() {
        let e = anyhow::Error::from(io::Error::from(ErrorKind::BrokenPipe));
        assert!(is_broken_pipe(&e));
        assert!(is_broken_pipe(&e.context("while drawing")));
        assert!(!is_broken_pipe(&anyhow::anyhow!("boom")));
        let e = anyhow::Error::from(io::Error::from(ErrorKind::NotFound));
        assert!(!is_broken_pipe(&e));
    }
}
