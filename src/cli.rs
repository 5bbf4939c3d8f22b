use clap::Parser;

/// A minimal to-do list with a terminal UI
#[derive(Parser, Debug)]
#[command(name = "tally", version, about)]
pub struct Cli {
    /// Draw checkboxes with plain ASCII instead of Unicode glyphs
    #[arg(long)]
    pub ascii: bool,
}
