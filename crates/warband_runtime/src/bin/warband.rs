//! Warband CLI entry point.

use std::env;
use std::io::{self, BufRead};
use std::path::PathBuf;
use std::process::ExitCode;

use warband_runtime::{Repl, Session, serialize};

/// CLI configuration parsed from arguments.
#[derive(Default)]
struct CliConfig {
    data_dir: Option<PathBuf>,
    settings: Option<PathBuf>,
    batch_mode: bool,
    show_help: bool,
    show_version: bool,
    trace: bool,
}

fn main() -> ExitCode {
    let args: Vec<String> = env::args().collect();

    match run(args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("\x1b[31mError: {e}\x1b[0m");
            ExitCode::FAILURE
        }
    }
}

fn parse_args(args: Vec<String>) -> Result<CliConfig, Box<dyn std::error::Error>> {
    let mut config = CliConfig::default();

    let mut i = 1;
    while i < args.len() {
        match args[i].as_str() {
            "-h" | "--help" => config.show_help = true,
            "-V" | "--version" => config.show_version = true,
            "-b" | "--batch" => config.batch_mode = true,
            "--trace" => config.trace = true,
            "--settings" => {
                i += 1;
                if i >= args.len() {
                    return Err("--settings requires a path".into());
                }
                config.settings = Some(PathBuf::from(&args[i]));
            }
            arg if arg.starts_with('-') => {
                return Err(format!("unknown option: {arg}").into());
            }
            path => {
                if config.data_dir.is_some() {
                    return Err(format!("unexpected argument: {path}").into());
                }
                config.data_dir = Some(PathBuf::from(path));
            }
        }
        i += 1;
    }

    Ok(config)
}

fn setup_tracing(verbose: bool) {
    use tracing_subscriber::EnvFilter;

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        if verbose {
            EnvFilter::new("warband=debug,info")
        } else {
            EnvFilter::new("warn")
        }
    });

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_target(false)
        .init();
}

fn run(args: Vec<String>) -> Result<(), Box<dyn std::error::Error>> {
    let config = parse_args(args)?;

    if config.show_help {
        print_help();
        return Ok(());
    }

    if config.show_version {
        println!("warband {}", env!("CARGO_PKG_VERSION"));
        return Ok(());
    }

    setup_tracing(config.trace);

    let settings = match &config.settings {
        Some(path) => serialize::load_or_default(path)?,
        None => warband_runtime::Settings::default(),
    };
    let mut session = Session::with_settings(settings);
    match &config.data_dir {
        Some(dir) => {
            session.load_data_dir(dir)?;
        }
        None => {
            session.load_configured_data()?;
        }
    }

    let mut repl = Repl::new()?.with_session(session);

    if config.batch_mode {
        for warning in repl.session_mut().drain_warnings() {
            eprintln!("! {warning}");
        }
        for line in io::stdin().lock().lines() {
            let line = line?;
            if line.trim().is_empty() {
                continue;
            }
            if let Some(output) = repl.eval(&line)? {
                println!("{output}");
            }
        }
        return Ok(());
    }

    repl.run()?;
    Ok(())
}

fn print_help() {
    println!(
        "\x1b[1mWarband\x1b[0m - Army blueprint resolver

\x1b[1mUSAGE:\x1b[0m
    warband [OPTIONS] [DATA_DIR]

\x1b[1mARGUMENTS:\x1b[0m
    [DATA_DIR]    Directory with units/, camps/ and adventures/ JSON files

\x1b[1mOPTIONS:\x1b[0m
    -h, --help           Print help information
    -V, --version        Print version information
    -b, --batch          Read blueprints from stdin, one per line, and exit
    --settings PATH      Load settings from a MessagePack file
    --trace              Log catalog and build decisions to stderr

\x1b[1mEXAMPLES:\x1b[0m
    warband data/                       Start interactive REPL
    echo '1 Nusala 50 R' | warband -b data/
    warband --settings my.msgpack       Use the data folder saved in settings

\x1b[1mREPL COMMANDS:\x1b[0m
    <qty> <name> ...     Build an army
    :find <name>         Look a unit up by fuzzy name
    :help                List every command
    Ctrl+D               Exit REPL
    Ctrl+C               Cancel current input"
    );
}
