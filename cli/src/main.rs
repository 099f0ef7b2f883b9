//! cbuffer CLI - console demos exercising every buffer operation.

mod cli;
mod commands;
mod contact;

use clap::Parser;
use cli::{Cli, Command};

fn main() {
    // Initialize logging subscriber
    use tracing_subscriber::{EnvFilter, fmt};

    // Use RUST_LOG environment variable to control log level
    // Default to WARN if not set
    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new("warn"))
        .unwrap();

    fmt()
        .compact()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .without_time()
        .init();

    let cli = Cli::parse();
    dispatch(cli.command, cli.observe);
}

fn dispatch(command: Command, observe: bool) {
    match command {
        Command::Constructors => commands::constructors::run(observe),
        Command::Insert => commands::insert::run(observe),
        Command::Remove => commands::remove::run(observe),
        Command::Empty => commands::empty::run(observe),
        Command::Index => commands::index::run(observe),
        Command::Full => commands::full::run(observe),
        Command::Evaluate => commands::evaluate::run(observe),
        Command::Cursors => commands::cursors::run(observe),
        Command::Contacts => commands::contacts::run(observe),
        Command::All => {
            for (name, command) in [
                ("constructors", Command::Constructors),
                ("insert", Command::Insert),
                ("remove", Command::Remove),
                ("empty", Command::Empty),
                ("index", Command::Index),
                ("full", Command::Full),
                ("evaluate", Command::Evaluate),
                ("cursors", Command::Cursors),
                ("contacts", Command::Contacts),
            ] {
                println!("=== {name} ===");
                dispatch(command, observe);
            }
        }
    }
}
