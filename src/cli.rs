use std::path::PathBuf;

use clap::{Parser, Subcommand};
use clap_complete::Shell;

#[derive(Parser, Debug)]
#[command(author, version, about = "Badminton club session draws and ratings")]
pub struct Cli {
    /// SQLite database file (overrides DATABASE_PATH)
    #[arg(long, global = true)]
    pub database: Option<String>,

    /// Command
    #[clap(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug, Clone, PartialEq)]
#[clap(rename_all = "lower_case")]
pub enum Command {
    /// Drop and recreate all tables
    Init,
    /// Load players, sessions and registrations from a JSON file
    Import {
        #[arg(short, long)]
        file: PathBuf,
    },
    /// Generate (or regenerate) the match draw for a session
    Draw {
        #[arg(short, long)]
        session: i32,
    },
    /// Enter set scores for a match and update ratings
    Score {
        #[arg(short, long = "match-id")]
        match_id: i32,
        /// Team 1 points per set, e.g. "21,19,21"
        #[arg(long)]
        team1: String,
        /// Team 2 points per set, e.g. "15,21,18"
        #[arg(long)]
        team2: String,
    },
    /// Recompute rating changes for a match from its stored scores
    Rate {
        #[arg(short, long = "match-id")]
        match_id: i32,
    },
    /// Show a player's rating history
    History {
        #[arg(short, long)]
        player: i32,
        /// Restrict to one event type, e.g. "mixed doubles"
        #[arg(short, long)]
        event: Option<String>,
    },
    /// Print shell completions to stdout
    Completions {
        #[arg(value_enum)]
        shell: Shell,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_score_command() {
        let cli = Cli::try_parse_from([
            "shuttle_draws",
            "score",
            "--match-id",
            "7",
            "--team1",
            "21,19",
            "--team2",
            "15,21",
        ])
        .unwrap();
        assert_eq!(
            cli.command,
            Command::Score {
                match_id: 7,
                team1: "21,19".to_string(),
                team2: "15,21".to_string(),
            }
        );
        assert_eq!(cli.database, None);
    }

    #[test]
    fn global_database_flag() {
        let cli = Cli::try_parse_from(["shuttle_draws", "draw", "-s", "3", "--database", "club.db"])
            .unwrap();
        assert_eq!(cli.command, Command::Draw { session: 3 });
        assert_eq!(cli.database.as_deref(), Some("club.db"));
    }

    #[test]
    fn match_id_flag_is_hyphenated() {
        let cli = Cli::try_parse_from(["shuttle_draws", "rate", "--match-id", "12"]).unwrap();
        assert_eq!(cli.command, Command::Rate { match_id: 12 });

        let short = Cli::try_parse_from(["shuttle_draws", "rate", "-m", "12"]).unwrap();
        assert_eq!(short.command, Command::Rate { match_id: 12 });

        assert!(Cli::try_parse_from(["shuttle_draws", "rate", "--matchid", "12"]).is_err());
    }
}
