use anyhow::Result;

use golf_league::cli::Command;
use golf_league::{handle_complete, handle_init, handle_leaderboard, handle_serve, interpret};

fn main() {
    setup_logging();
    parse_and_execute().unwrap_or_else(|e| {
        eprintln!("Error: {e}");
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
        Command::Serve { port } => handle_serve(*port),
        Command::Init => handle_init(),
        Command::Leaderboard { tournament_id } => handle_leaderboard(*tournament_id),
        Command::Complete { tournament_id } => handle_complete(*tournament_id),
    }
}
