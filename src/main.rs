use std::{fs, io, path::PathBuf};

use clap::Parser;
use reckon::{dump_ast, dump_tokens, interpret};

/// reckon is an interactive interpreter for a small bc-style calculator
/// language.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Script to interpret; standard input is read to end-of-file when no
    /// file is given.
    file: Option<PathBuf>,

    /// Print the token stream instead of executing.
    #[arg(long)]
    tokens: bool,

    /// Print each parsed command back as source instead of executing.
    #[arg(long)]
    ast: bool,
}

fn main() {
    let args = Args::parse();

    let source = match &args.file {
        Some(path) => fs::read_to_string(path).unwrap_or_else(|_| {
                          eprintln!("Failed to read the input file '{}'. Perhaps this file does not exist?",
                                    path.display());
                          std::process::exit(1);
                      }),
        None => io::read_to_string(io::stdin()).unwrap_or_else(|e| {
                    eprintln!("Failed to read standard input: {e}");
                    std::process::exit(1);
                }),
    };

    let stdout = io::stdout();
    let mut out = stdout.lock();
    let stderr = io::stderr();
    let mut err = stderr.lock();

    if args.tokens {
        dump_tokens(&source, &mut out);
    } else if args.ast {
        dump_ast(&source, &mut out, &mut err);
    } else {
        interpret(&source, &mut out, &mut err);
    }
}
