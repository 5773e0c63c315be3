use std::{path::PathBuf, process::ExitCode};

use clap::Parser;
use log::LevelFilter;
use piratelang::{
    interpreter::host::{Console, read_program_source},
    parse, run,
};

/// piratelang runs programs written in a small pirate-themed teaching
/// language.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// The program to run.
    path: PathBuf,

    /// Parse the program and print its syntax tree instead of running it.
    #[arg(long)]
    dump_ast: bool,

    /// Log more about what the interpreter is doing. Repeat for more detail.
    /// `RUST_LOG` takes precedence when set.
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

fn main() -> ExitCode {
    let args = Args::parse();

    let level = match args.verbose {
        0 => LevelFilter::Warn,
        1 => LevelFilter::Info,
        2 => LevelFilter::Debug,
        _ => LevelFilter::Trace,
    };
    env_logger::Builder::new().filter_level(level)
                              .parse_default_env()
                              .init();

    let source = match read_program_source(&args.path) {
        Ok(source) => source,
        Err(e) => {
            eprintln!("{e}");
            return ExitCode::FAILURE;
        },
    };

    if args.dump_ast {
        return match parse(&source) {
            Ok(program) => {
                println!("{program:#?}");
                ExitCode::SUCCESS
            },
            Err(e) => {
                eprintln!("{e}");
                ExitCode::FAILURE
            },
        };
    }

    if let Err(e) = run(&source, &mut Console) {
        eprintln!("{e}");
        return ExitCode::FAILURE;
    }

    ExitCode::SUCCESS
}
