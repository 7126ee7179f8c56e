mod repl;

use std::{
    fs,
    io::{self, BufWriter},
    path::{Path, PathBuf},
    process::ExitCode,
};

use anyhow::{Context as _, Result};
use clap::{ArgAction, Parser, Subcommand};
use textscript::{config::DEFAULT_MAX_DEPTH, Interpreter, Limits};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// log more (-v for debug, -vv for trace)
    #[arg(short, long, action = ArgAction::Count, global = true)]
    verbose: u8,

    /// stop any while loop after this many iterations
    #[arg(long, global = true)]
    max_iterations: Option<u64>,

    /// deepest statement/expression nesting accepted
    #[arg(long, global = true, default_value_t = DEFAULT_MAX_DEPTH)]
    max_depth: usize,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// run a file
    Run {
        #[arg(name = "FILE")]
        file: PathBuf,
    },
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let limits = Limits {
        max_iterations: cli.max_iterations,
        max_depth: cli.max_depth,
    };

    let result = match cli.command {
        Some(Commands::Run { file }) => run_file(&file, limits),
        None => repl::start(limits),
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("error: {:#}", err);
            ExitCode::FAILURE
        }
    }
}

fn init_logging(verbose: u8) {
    let default = match verbose {
        0 => "warn",
        1 => "debug",
        _ => "trace",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}

fn run_file(file: &Path, limits: Limits) -> Result<()> {
    let source = fs::read_to_string(file)
        .with_context(|| format!("Can't open file: {}", file.display()))?;

    let stdout = io::stdout();
    let mut interpreter = Interpreter::with_limits(BufWriter::new(stdout.lock()), limits);
    interpreter.run(&source)?;
    Ok(())
}
