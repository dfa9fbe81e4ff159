use std::process::exit;

use foliation_cli::cli::{init_logging, parse_args, run};

fn main() {
    let args = parse_args();
    if let Err(e) = init_logging(args.log_level).and_then(|_| run(&args)) {
        eprintln!("{e:#}");
        exit(1);
    }
}
