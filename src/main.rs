use std::fs;

use clap::Parser;
use linescript::{config::{Config, MAX_DEPTH}, run_source};

/// linescript is a small line-oriented scripting language with variables,
/// `if`/`while` blocks, `print` and `input`.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Tells linescript to look at a file instead of a script.
    #[arg(short, long)]
    file: bool,

    /// Deepest expression or block nesting the parser accepts.
    #[arg(long, default_value_t = MAX_DEPTH)]
    max_depth: usize,

    /// Do not report failing statements on stderr.
    #[arg(short, long)]
    quiet: bool,

    contents: String,
}

fn main() {
    let args = Args::parse();

    let script = if args.file {
        fs::read_to_string(&args.contents).unwrap_or_else(|_| {
            eprintln!("Failed to read the input file '{}'. Perhaps this file does not exist?",
                      &args.contents);
            std::process::exit(1);
        })
    } else {
        args.contents
    };

    let config = Config { max_depth: args.max_depth,
                          quiet:     args.quiet, };

    if let Err(e) = run_source(&script, &config) {
        eprintln!("{e}");
        std::process::exit(1);
    }
}
