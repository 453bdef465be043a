use std::path::PathBuf;
use std::process;

use clap::Parser;

mod aggregate;
mod compile;

/// Merge a directory of per-letter wordset data files into one compact
/// dictionary asset ready for embedding in a client application.
#[derive(Parser, Debug)]
#[command(name = "wordset-compiler")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Compiles wordset JSON data files into a single dictionary.json")]
struct Args {
    /// Directory containing the wordset JSON data files
    #[arg(value_name = "INPUT_DIR")]
    input_dir: PathBuf,

    /// Path of the compiled dictionary artifact
    #[arg(value_name = "OUTPUT_FILE", default_value = "dictionary.json")]
    output: PathBuf,
}

fn main() {
    // A missing argument must exit with code 1, clap's default is 2.
    let args = Args::try_parse().unwrap_or_else(|error| {
        let _ = error.print();
        process::exit(1);
    });

    if let Err(error) = compile::run(&args.input_dir, &args.output) {
        println!("Error: {error:#}");
        process::exit(1);
    }
}
