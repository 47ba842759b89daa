use std::collections::HashMap;

use colored::Colorize;

use crate::domain::{Match, MatchOutcome, Player, PlayerId, RatingHistory, Team};
use crate::rating::RatingChange;
use crate::services::draws::DrawOutcome;

fn team_label(team: &Team, names: &HashMap<PlayerId, String>) -> String {
    team.members()
        .iter()
        .map(|id| names.get(id).cloned().unwrap_or_else(|| format!("#{id}")))
        .collect::<Vec<_>>()
        .join(" / ")
}

pub fn name_index(players: &[Player]) -> HashMap<PlayerId, String> {
    players.iter().map(|p| (p.id, p.name.clone())).collect()
}

pub fn print_draw(outcome: &DrawOutcome, names: &HashMap<PlayerId, String>) {
    println!(
        "{} {} ({} rounds, {} courts)",
        "Session".bold(),
        outcome.session.name.bold(),
        outcome.session.number_of_rounds,
        outcome.session.courts_available
    );

    let mut ordered: Vec<&Match> = outcome.matches.iter().collect();
    ordered.sort_by_key(|m| (m.round_number, m.court_number, m.id));

    let mut round = 0;
    for drawn in ordered {
        if drawn.round_number != round {
            round = drawn.round_number;
            println!("\n{}", format!("Round {round}").cyan().bold());
        }
        println!(
            "  #{:<5} court {:<2} {:<16} {}  vs  {}",
            drawn.id,
            drawn.court_number,
            drawn.event_type,
            team_label(&drawn.team1, names),
            team_label(&drawn.team2, names)
        );
    }

    for category in &outcome.empty_categories {
        println!("{}", format!("No matches drawn for {category}").yellow());
    }
}

pub fn print_changes(scored: &Match, changes: &[RatingChange], names: &HashMap<PlayerId, String>) {
    if changes.is_empty() {
        println!("Match {} has no result yet; ratings unchanged", scored.id);
        return;
    }

    println!("{} {} ({})", "Match".bold(), scored.id, scored.event_type);
    for change in changes {
        let name = names
            .get(&change.player_id)
            .cloned()
            .unwrap_or_else(|| format!("#{}", change.player_id));
        println!(
            "  {:<20} {} -> {} ({})",
            name,
            change.old_rating,
            change.new_rating,
            signed(change.delta())
        );
    }
}

pub fn print_history(player: &Player, rows: &[RatingHistory]) {
    println!("{} {}", "Rating history for".bold(), player.name.bold());
    if rows.is_empty() {
        println!("  (none)");
        return;
    }

    for row in rows {
        let result = match row.result {
            MatchOutcome::Win => "win".green(),
            MatchOutcome::Loss => "loss".red(),
        };
        println!(
            "  {}  {:<16} match {:<5} {:<4} {} -> {} ({}) expected {}",
            row.created_at.format("%Y-%m-%d %H:%M"),
            row.event_type,
            row.match_id,
            result,
            row.old_rating,
            row.new_rating,
            signed(row.rating_change),
            row.expected_outcome.as_str()
        );
    }
}

fn signed(delta: i32) -> colored::ColoredString {
    let text = format!("{delta:+}");
    match delta.signum() {
        1 => text.green(),
        -1 => text.red(),
        _ => text.normal(),
    }
}
