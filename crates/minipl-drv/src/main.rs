use clap::Parser;

use minipl_drv::{init_logging, run, Cli};

fn main() {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    if let Err(error) = run(&cli) {
        eprintln!("error: {error:#}");
        std::process::exit(-1);
    }
}
