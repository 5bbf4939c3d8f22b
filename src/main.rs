use clap::Parser;
use tally::cli::Cli;

fn main() {
    let cli = Cli::parse();

    if let Err(e) = tally::tui::run(&cli) {
        eprintln!("error: {}", e);
        std::process::exit(1);
    }
}
