use anyhow::Result;

use shuttle_draws::cli::{Cli, Command};
use shuttle_draws::{
    config_for, handle_completions, handle_draw, handle_history, handle_import, handle_init,
    handle_rate, handle_score, interpret,
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
    let cli = interpret();
    execute_command(&cli)
}

fn execute_command(cli: &Cli) -> Result<()> {
    let config = config_for(cli);
    match &cli.command {
        Command::Init => handle_init(&config),
        Command::Import { file } => handle_import(&config, file),
        Command::Draw { session } => handle_draw(config, *session),
        Command::Score {
            match_id,
            team1,
            team2,
        } => handle_score(config, *match_id, team1, team2),
        Command::Rate { match_id } => handle_rate(config, *match_id),
        Command::History { player, event } => handle_history(&config, *player, event.as_deref()),
        Command::Completions { shell } => handle_completions(*shell),
    }
}
