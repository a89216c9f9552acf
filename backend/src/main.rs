use anyhow::Result;

use fantasy_cricket::cli::Command;
use fantasy_cricket::{
    handle_completions, handle_process, handle_results, handle_seed, handle_serve, interpret,
};

fn main() {
    setup_logging();
    parse_and_execute().unwrap_or_else(|e| {
        eprintln!("Error: {e:#}");
        std::process::exit(1);
    });
}

fn setup_logging() {
    sensible_env_logger::init!();
}

fn parse_and_execute() -> Result<()> {
    let command = interpret();
    execute_command(&command)
}

fn execute_command(command: &Command) -> Result<()> {
    match command {
        Command::Serve { port, seed } => handle_serve(*port, *seed),
        Command::Seed => handle_seed(),
        Command::Process => handle_process(),
        Command::Results => handle_results(),
        Command::Completions { shell } => handle_completions(*shell),
    }
}
