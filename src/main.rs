use std::{fs, process::ExitCode};

use bhask::run_script;
use clap::Parser;

/// Runs Bhaskara scripts: a small, expression-oriented language with
/// user-defined functions, typed variables and numeric arrays.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Treat the script argument as a path to a .bhask file.
    #[arg(short, long)]
    file: bool,

    /// Print the last value the script produced once it finishes.
    #[arg(short, long)]
    pipe_mode: bool,

    /// The script text, or a file path when --file is set.
    script: String,
}

fn main() -> ExitCode {
    let args = Args::parse();

    let source = if args.file {
        match fs::read_to_string(&args.script) {
            Ok(source) => source,
            Err(e) => {
                eprintln!("Cannot read script file '{}': {e}", args.script);
                return ExitCode::FAILURE;
            },
        }
    } else {
        args.script
    };

    match run_script(&source, args.pipe_mode) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("{e}");
            ExitCode::FAILURE
        },
    }
}
