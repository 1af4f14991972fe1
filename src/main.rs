// Row Aggregator - Main executable

use std::env;
use std::io::{self, Write};
use std::process;

use row_aggregator::{
    cli::{self, Invocation},
    driver,
    utils::{init_logging, level_from_env},
};

fn main() {
    if let Err(err) = init_logging(level_from_env()) {
        eprintln!("error initializing logger: {}", err);
    }

    let args: Vec<String> = env::args().skip(1).collect();

    let spec = match cli::parse_args(&args) {
        Ok(Invocation::Help) => {
            println!("{}", cli::usage());
            return;
        }
        Ok(Invocation::Run(spec)) => spec,
        Err(err) => {
            eprintln!("error: {}", err);
            process::exit(1);
        }
    };

    let stdout = io::stdout();
    let mut out = stdout.lock();

    if let Err(err) = driver::run(&spec, &mut out) {
        eprintln!("error: {}", err);
        process::exit(1);
    }

    if let Err(err) = out.flush() {
        eprintln!("error: {}", err);
        process::exit(1);
    }
}
