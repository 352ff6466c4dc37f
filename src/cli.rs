use clap::{Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(author, version, about = "golf-league scoring backend")]
pub struct Cli {
    /// Command
    #[clap(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug, Clone, PartialEq)]
#[clap(rename_all = "lower_case")]
pub enum Command {
    /// Start the backend server
    Serve {
        /// Port number (optional, defaults to 3000)
        #[arg(short, long, default_value_t = 3000)]
        port: u16,
    },
    /// Drop and recreate the database schema
    Init,
    /// Print the leaderboard of a tournament as JSON
    Leaderboard {
        /// Tournament id
        tournament_id: i32,
    },
    /// Roll a finished tournament into the players' quota ledgers
    Complete {
        /// Tournament id
        tournament_id: i32,
    },
}
