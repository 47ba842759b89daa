use log::debug;

use super::rotation::round_pairings;
use super::types::{sort_by_rating_desc, RatedPlayer};
use crate::config::DrawSettings;
use crate::domain::{EventCategory, NewMatch, SessionId, Team};

/// Round-robin singles over `number_of_rounds` rounds. Ratings only fix the
/// starting order; they do not constrain who meets whom.
pub fn generate_singles(
    session_id: SessionId,
    number_of_rounds: u32,
    players: &[RatedPlayer],
    settings: &DrawSettings,
) -> Vec<NewMatch> {
    if players.len() < settings.min_singles_players.max(2) {
        debug!("Singles: {} players, not enough to draw", players.len());
        return Vec::new();
    }

    let mut seeded = players.to_vec();
    sort_by_rating_desc(&mut seeded);

    (1..=number_of_rounds)
        .flat_map(|round| {
            round_pairings(&seeded, round)
                .into_iter()
                .map(move |(a, b)| {
                    NewMatch::scheduled(
                        session_id,
                        EventCategory::Singles,
                        round,
                        Team::single(a.id),
                        Team::single(b.id),
                    )
                })
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{Gender, MatchStatus, PlayerId};
    use std::collections::{HashMap, HashSet};

    fn players(ratings: &[i32]) -> Vec<RatedPlayer> {
        ratings
            .iter()
            .enumerate()
            .map(|(i, &rating)| RatedPlayer {
                id: i as PlayerId,
                rating,
                gender: Gender::Male,
            })
            .collect()
    }

    fn pairs_in_round(matches: &[NewMatch], round: u32) -> Vec<(PlayerId, PlayerId)> {
        matches
            .iter()
            .filter(|m| m.round_number == round)
            .map(|m| (m.team1.player1, m.team2.player1))
            .collect()
    }

    #[test]
    fn four_players_first_rounds() {
        let matches = generate_singles(
            1,
            2,
            &players(&[2000, 1800, 1600, 1400]),
            &DrawSettings::default(),
        );

        let round1 = pairs_in_round(&matches, 1);
        assert_eq!(round1, vec![(0, 3), (1, 2)]);

        let round2 = pairs_in_round(&matches, 2);
        assert_ne!(round1, round2);
        assert!(matches.iter().all(|m| m.status == MatchStatus::Scheduled));
        assert!(matches.iter().all(|m| m.scores == Default::default()));
    }

    #[test]
    fn input_order_does_not_matter() {
        let settings = DrawSettings::default();
        let mut shuffled = players(&[1600, 2000, 1400, 1800]);
        let sorted = generate_singles(1, 3, &shuffled, &settings);
        shuffled.reverse();
        assert_eq!(generate_singles(1, 3, &shuffled, &settings), sorted);
    }

    #[test]
    fn full_round_robin_for_even_count() {
        let roster = players(&[1900, 1850, 1700, 1650, 1500, 1420]);
        let matches = generate_singles(9, 5, &roster, &DrawSettings::default());

        let mut met = HashSet::new();
        for round in 1..=5 {
            let mut seen_this_round = HashSet::new();
            for (a, b) in pairs_in_round(&matches, round) {
                assert!(seen_this_round.insert(a));
                assert!(seen_this_round.insert(b));
                assert!(met.insert((a.min(b), a.max(b))));
            }
            assert_eq!(seen_this_round.len(), roster.len());
        }
        assert_eq!(met.len(), 15);
    }

    #[test]
    fn odd_count_rotates_byes() {
        let roster = players(&[1500, 1600, 1700, 1800, 1900]);
        let matches = generate_singles(1, 5, &roster, &DrawSettings::default());

        let mut byes: HashMap<PlayerId, u32> = HashMap::new();
        for round in 1..=5 {
            let playing: HashSet<PlayerId> = pairs_in_round(&matches, round)
                .into_iter()
                .flat_map(|(a, b)| [a, b])
                .collect();
            assert_eq!(playing.len(), 4);
            for p in &roster {
                if !playing.contains(&p.id) {
                    *byes.entry(p.id).or_default() += 1;
                }
            }
        }
        assert_eq!(byes.len(), 5);
        assert!(byes.values().all(|&count| count == 1));
    }

    #[test]
    fn fewer_than_two_players_is_empty() {
        assert!(generate_singles(1, 3, &players(&[1500]), &DrawSettings::default()).is_empty());
    }
}
