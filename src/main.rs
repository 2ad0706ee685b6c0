use anyhow::Result;

use smogon_stat_tool::cli::Command;
use smogon_stat_tool::{handle_completions, handle_locate, handle_moves, interpret};

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
        Command::Moves { lookup, json } => handle_moves(lookup, *json),
        Command::Locate { lookup } => handle_locate(lookup),
        Command::Completions { shell } => handle_completions(*shell),
    }
}
