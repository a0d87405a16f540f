mod cli;

use std::io::{self, BufWriter};

use clap::{CommandFactory, Parser};

use cli::Args;

fn main() {
    env_logger::init();

    let args = Args::parse();

    // stdout carries the image, so usage goes to stderr.
    if args.patterns.is_empty() {
        eprintln!("{}", Args::command().render_help());
        return;
    }

    let config = match args.to_config() {
        Ok(c) => c,
        Err(e) => {
            eprintln!("Error: {}", e);
            std::process::exit(1);
        }
    };

    let mut out = BufWriter::new(io::stdout().lock());
    let mut progress = io::stderr().lock();
    if let Err(e) = bytemap::pipeline::run(&config, &mut out, &mut progress) {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
