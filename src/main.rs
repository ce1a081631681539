use std::{
    fs,
    io::{self, BufRead, Write},
    process::ExitCode,
};

use april::{
    error::Error,
    global_environment,
    interpreter::{environment::Environment, evaluator::core::Evaluator},
    run_with,
};
use clap::Parser;
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

/// april is a small, dynamically typed scripting language with closures,
/// loops and nothing else to get in the way.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Tells april to look at a file instead of a script.
    #[arg(short, long)]
    file: bool,

    /// Pipe mode automatically prints out the value of the last statement of
    /// a script.
    #[arg(short, long)]
    pipe_mode: bool,

    /// How many function calls may be active at once before april reports a
    /// stack overflow.
    #[arg(long, default_value_t = april::interpreter::evaluator::core::DEFAULT_MAX_CALL_DEPTH)]
    max_call_depth: usize,

    /// Raises log verbosity: `-v` info, `-vv` debug, `-vvv` trace. `RUST_LOG`
    /// takes precedence when set.
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    /// The script to run, or its path with `--file`. Starts a REPL when
    /// omitted.
    contents: Option<String>,
}

fn init_tracing(verbose: u8) {
    let default = match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));

    tracing_subscriber::registry().with(fmt::layer().with_writer(io::stderr).with_target(true))
                                  .with(filter)
                                  .init();
}

fn report(error: &Error, origin: &str, source: &str) {
    eprintln!("{}", error.diagnostic(origin, source));
}

fn run_script(args: &Args, contents: &str) -> ExitCode {
    let (origin, script) = if args.file {
        match fs::read_to_string(contents) {
            Ok(script) => (contents, script),
            Err(e) => {
                eprintln!("Failed to read the input file '{contents}': {e}. Perhaps this file does not exist?");
                return ExitCode::FAILURE;
            },
        }
    } else {
        ("<script>", contents.to_string())
    };

    let mut evaluator = Evaluator::with_max_call_depth(args.max_call_depth);
    match run_with(&mut evaluator, &script, &global_environment()) {
        Ok(value) => {
            if args.pipe_mode {
                println!("{value}");
            }
            ExitCode::SUCCESS
        },
        Err(e) => {
            report(&e, origin, &script);
            ExitCode::FAILURE
        },
    }
}

/// Reads one line at a time and evaluates it against a persistent global
/// scope. Errors are reported and the session continues.
fn repl(args: &Args) -> ExitCode {
    let env: Environment = global_environment();
    let mut evaluator = Evaluator::with_max_call_depth(args.max_call_depth);
    let stdin = io::stdin();

    println!("april v{}", env!("CARGO_PKG_VERSION"));
    loop {
        print!("> ");
        if io::stdout().flush().is_err() {
            return ExitCode::FAILURE;
        }

        let mut line = String::new();
        match stdin.lock().read_line(&mut line) {
            Ok(0) => return ExitCode::SUCCESS,
            Ok(_) => {},
            Err(e) => {
                eprintln!("Failed to read input: {e}");
                return ExitCode::FAILURE;
            },
        }

        let line = line.trim_end();
        if line == "exit" {
            return ExitCode::SUCCESS;
        }
        if line.is_empty() {
            continue;
        }

        match run_with(&mut evaluator, line, &env) {
            Ok(value) => println!("{value}"),
            Err(e) => report(&e, "<repl>", line),
        }
    }
}

fn main() -> ExitCode {
    let args = Args::parse();
    init_tracing(args.verbose);

    match &args.contents {
        Some(contents) => run_script(&args, contents),
        None => repl(&args),
    }
}
