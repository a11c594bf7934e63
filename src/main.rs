//! CLI entry point for the hexagonal board word search

use clap::Parser;
use hexword::io::cli::{Cli, Session};

fn main() -> hexword::Result<()> {
    let cli = Cli::parse();
    let mut session = Session::new(cli);
    session.run(&mut std::io::stdout().lock())?;
    Ok(())
}
