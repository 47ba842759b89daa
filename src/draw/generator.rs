use std::collections::{BTreeMap, HashMap};

use log::{info, warn};

use super::courts::assign_courts;
use super::doubles::{generate_fixed_doubles, generate_mixer_doubles};
use super::history::PairingHistory;
use super::singles::generate_singles;
use super::types::RatedPlayer;
use crate::config::AppConfig;
use crate::domain::{EventCategory, NewMatch, Player, PlayerId, Registration, Session};
use crate::rating::category_rating;

/// Result of drawing a session.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SessionDraw {
    pub matches: Vec<NewMatch>,
    /// Categories people registered for that produced no matches.
    pub empty_categories: Vec<EventCategory>,
}

/// Registrants per category, in registration order, each player at most once.
pub fn group_by_category(registrations: &[Registration]) -> BTreeMap<EventCategory, Vec<PlayerId>> {
    let mut groups: BTreeMap<EventCategory, Vec<PlayerId>> = BTreeMap::new();

    for registration in registrations {
        for label in &registration.selected_events {
            let Some(category) = EventCategory::parse(label) else {
                warn!(
                    "Player {} registered for unknown event '{label}', skipping",
                    registration.player_id
                );
                continue;
            };
            let group = groups.entry(category).or_default();
            if !group.contains(&registration.player_id) {
                group.push(registration.player_id);
            }
        }
    }

    groups
}

/// Draws every category of a session and assigns courts per round.
pub fn generate_draws(
    session: &Session,
    registrations: &[Registration],
    players: &HashMap<PlayerId, Player>,
    config: &AppConfig,
) -> SessionDraw {
    let mut draw = SessionDraw::default();
    let mut history = PairingHistory::new();

    for (category, player_ids) in group_by_category(registrations) {
        let rated = rate_players(category, &player_ids, players, config);
        info!("{category}: {} registered players", rated.len());

        let matches = draw_category(session, category, &rated, config, &mut history);
        if matches.is_empty() {
            warn!("{category}: not enough players to generate matches");
            draw.empty_categories.push(category);
        }
        draw.matches.extend(matches);
    }

    assign_courts(&mut draw.matches, session.courts_available);
    info!(
        "Drew {} matches over {} rounds for session {}",
        draw.matches.len(),
        session.number_of_rounds,
        session.id
    );
    draw
}

fn draw_category(
    session: &Session,
    category: EventCategory,
    players: &[RatedPlayer],
    config: &AppConfig,
    history: &mut PairingHistory,
) -> Vec<NewMatch> {
    let rounds = session.number_of_rounds;
    match category {
        EventCategory::Singles => generate_singles(session.id, rounds, players, &config.draw),
        EventCategory::MensDoubles | EventCategory::WomensDoubles => {
            generate_fixed_doubles(session.id, category, rounds, players, &config.draw)
        }
        EventCategory::MixedDoubles => {
            generate_mixer_doubles(session.id, rounds, players, &config.draw, history)
        }
    }
}

fn rate_players(
    category: EventCategory,
    player_ids: &[PlayerId],
    players: &HashMap<PlayerId, Player>,
    config: &AppConfig,
) -> Vec<RatedPlayer> {
    player_ids
        .iter()
        .filter_map(|id| {
            let Some(player) = players.get(id) else {
                warn!("Registered player {id} has no player record, skipping");
                return None;
            };
            Some(RatedPlayer {
                id: *id,
                rating: category_rating(player, category, &config.rating),
                gender: player.gender,
            })
        })
        .collect()
}
