use log::debug;

use super::history::PairingHistory;
use super::opponents::match_opponents;
use super::rotation::round_pairings;
use super::sequencer::Sequencer;
use super::types::{sort_by_rating_desc, sort_partnerships_desc, Partnership, RatedPlayer};
use crate::config::DrawSettings;
use crate::domain::{EventCategory, Gender, NewMatch, SessionId};

/// Strongest with weakest, second strongest with second weakest, and so on.
/// With an odd count the middle player is left without a partner.
pub fn snake_draft(players: &[RatedPlayer]) -> Vec<Partnership> {
    let mut ranked = players.to_vec();
    sort_by_rating_desc(&mut ranked);

    let n = ranked.len();
    (0..n / 2)
        .map(|i| Partnership::new(ranked[i], ranked[n - 1 - i]))
        .collect()
}

/// Men's and women's doubles: partnerships are fixed for the session and
/// rotated against each other round-robin style.
pub fn generate_fixed_doubles(
    session_id: SessionId,
    category: EventCategory,
    number_of_rounds: u32,
    players: &[RatedPlayer],
    settings: &DrawSettings,
) -> Vec<NewMatch> {
    if players.len() < settings.min_doubles_players.max(4) {
        debug!("{category}: {} players, not enough to draw", players.len());
        return Vec::new();
    }

    let mut partnerships = snake_draft(players);
    sort_partnerships_desc(&mut partnerships);
    debug!("{category}: {} fixed partnerships", partnerships.len());

    (1..=number_of_rounds)
        .flat_map(|round| {
            round_pairings(&partnerships, round)
                .into_iter()
                .map(move |(a, b)| {
                    NewMatch::scheduled(session_id, category, round, a.team(), b.team())
                })
        })
        .collect()
}

/// Pairs each male, in pool order, with the first free female he has not
/// partnered before; if every free female is a repeat, the first free one.
pub fn mixer_partnerships(
    males: &[RatedPlayer],
    females: &[RatedPlayer],
    history: &PairingHistory,
) -> Vec<Partnership> {
    let mut taken = vec![false; females.len()];
    let mut partnerships = Vec::with_capacity(males.len().min(females.len()));

    for male in males {
        let fresh = (0..females.len())
            .find(|&j| !taken[j] && !history.have_partnered(male.id, females[j].id));
        let Some(j) = fresh.or_else(|| (0..females.len()).find(|&j| !taken[j])) else {
            break;
        };

        taken[j] = true;
        partnerships.push(Partnership::new(*male, females[j]));
    }

    partnerships
}

/// Mixed doubles in mixer format: partnerships are rebuilt every round from
/// freshly shuffled gender pools, steering away from repeat partners and
/// repeat opponents using the session's pairing history.
pub fn generate_mixer_doubles(
    session_id: SessionId,
    number_of_rounds: u32,
    players: &[RatedPlayer],
    settings: &DrawSettings,
    history: &mut PairingHistory,
) -> Vec<NewMatch> {
    let mut ranked = players.to_vec();
    sort_by_rating_desc(&mut ranked);

    let (males, females): (Vec<RatedPlayer>, Vec<RatedPlayer>) =
        ranked.into_iter().partition(|p| p.gender == Gender::Male);

    if males.len() < 2 || females.len() < 2 || players.len() < settings.min_doubles_players {
        debug!(
            "Mixed Doubles: {} male / {} female players, not enough to draw",
            males.len(),
            females.len()
        );
        return Vec::new();
    }

    let mut matches = Vec::new();
    for round in 1..=number_of_rounds {
        let seed = u64::from(round);
        let male_pool = Sequencer::shuffled(seed, &males);
        let female_pool = Sequencer::shuffled(seed + settings.female_seed_offset, &females);

        let partnerships = mixer_partnerships(&male_pool, &female_pool, history);
        let round_matches: Vec<NewMatch> = match_opponents(&partnerships, history)
            .into_iter()
            .map(|(a, b)| {
                NewMatch::scheduled(
                    session_id,
                    EventCategory::MixedDoubles,
                    round,
                    a.team(),
                    b.team(),
                )
            })
            .collect();

        for drawn in &round_matches {
            history.record_match(drawn);
        }
        matches.extend(round_matches);
    }

    matches
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::PlayerId;
    use std::collections::{HashMap, HashSet};

    fn player(id: PlayerId, rating: i32, gender: Gender) -> RatedPlayer {
        RatedPlayer { id, rating, gender }
    }

    fn men(ratings: &[i32]) -> Vec<RatedPlayer> {
        ratings
            .iter()
            .enumerate()
            .map(|(i, &r)| player(i as PlayerId + 1, r, Gender::Male))
            .collect()
    }

    #[test]
    fn snake_draft_balances_strength() {
        let partnerships = snake_draft(&men(&[1500, 1900, 1300, 1700]));
        let ids: Vec<_> = partnerships.iter().map(|p| p.ids()).collect();
        assert_eq!(ids, vec![[2, 3], [4, 1]]);
        assert_eq!(partnerships[0].combined_rating(), 3200);
        assert_eq!(partnerships[1].combined_rating(), 3200);
    }

    #[test]
    fn snake_draft_odd_count_leaves_middle_out() {
        let partnerships = snake_draft(&men(&[1900, 1800, 1700, 1600, 1500]));
        let paired: HashSet<PlayerId> = partnerships.iter().flat_map(|p| p.ids()).collect();
        assert_eq!(partnerships.len(), 2);
        assert!(!paired.contains(&3));
    }

    #[test]
    fn fixed_doubles_keep_partnerships_across_rounds() {
        let roster = men(&[1900, 1800, 1700, 1600, 1500, 1400, 1300, 1200]);
        let matches = generate_fixed_doubles(
            4,
            EventCategory::MensDoubles,
            3,
            &roster,
            &DrawSettings::default(),
        );

        let expected: HashSet<[PlayerId; 2]> =
            snake_draft(&roster).iter().map(|p| p.ids()).collect();
        assert_eq!(matches.len(), 6);
        for m in &matches {
            for team in [m.team1, m.team2] {
                let ids = [team.player1, team.player2.unwrap()];
                assert!(expected.contains(&ids));
            }
        }

        let mut fixtures = HashSet::new();
        for m in &matches {
            let key = (m.team1.player1.min(m.team2.player1), m.team1.player1.max(m.team2.player1));
            assert!(fixtures.insert(key), "partnerships met twice within three rounds");
        }
    }

    #[test]
    fn fixed_doubles_need_four_players() {
        let matches = generate_fixed_doubles(
            1,
            EventCategory::WomensDoubles,
            2,
            &men(&[1500, 1500, 1500]),
            &DrawSettings::default(),
        );
        assert!(matches.is_empty());
    }

    #[test]
    fn mixer_prefers_new_partners() {
        let males = [player(1, 1500, Gender::Male), player(2, 1500, Gender::Male)];
        let females = [player(3, 1500, Gender::Female), player(4, 1500, Gender::Female)];
        let mut history = PairingHistory::new();
        history.record_partners(1, 3);

        let partnerships = mixer_partnerships(&males, &females, &history);
        let ids: Vec<_> = partnerships.iter().map(|p| p.ids()).collect();
        assert_eq!(ids, vec![[1, 4], [2, 3]]);
    }

    #[test]
    fn mixer_falls_back_when_everyone_is_a_repeat() {
        let males = [player(1, 1500, Gender::Male)];
        let females = [player(3, 1500, Gender::Female), player(4, 1500, Gender::Female)];
        let mut history = PairingHistory::new();
        history.record_partners(1, 3);
        history.record_partners(1, 4);

        let partnerships = mixer_partnerships(&males, &females, &history);
        assert_eq!(partnerships[0].ids(), [1, 3]);
    }

    #[test]
    fn mixer_rounds_are_gender_balanced_and_vary_partners() {
        let mut roster = Vec::new();
        for i in 0..4 {
            roster.push(player(i + 1, 1800 - i * 100, Gender::Male));
            roster.push(player(i + 11, 1750 - i * 100, Gender::Female));
        }
        let mut history = PairingHistory::new();
        let matches =
            generate_mixer_doubles(2, 3, &roster, &DrawSettings::default(), &mut history);

        assert_eq!(matches.len(), 6);
        let male_ids: HashSet<PlayerId> = (1..=4).collect();
        for m in &matches {
            assert_eq!(m.event_type, EventCategory::MixedDoubles);
            for team in [m.team1, m.team2] {
                let second = team.player2.unwrap();
                assert!(male_ids.contains(&team.player1));
                assert!(!male_ids.contains(&second));
            }
        }

        let distinct: usize = (1..=4).map(|id| history.partner_count(id)).sum();
        assert!(distinct > 4, "mixer produced no more variety than fixed partnerships");
    }

    #[test]
    fn mixer_repeats_a_partner_only_when_no_free_partner_is_new() {
        let males: Vec<RatedPlayer> =
            (0..4).map(|i| player(i + 1, 1800 - i * 100, Gender::Male)).collect();
        let females: Vec<RatedPlayer> =
            (0..4).map(|i| player(i + 11, 1750 - i * 100, Gender::Female)).collect();
        let roster: Vec<RatedPlayer> = males.iter().chain(&females).copied().collect();
        let settings = DrawSettings::default();

        let matches = generate_mixer_doubles(2, 4, &roster, &settings, &mut PairingHistory::new());

        let mut earlier = PairingHistory::new();
        let mut repeats = Vec::new();
        for round in 1..=4u32 {
            let partner_of: HashMap<PlayerId, PlayerId> = matches
                .iter()
                .filter(|m| m.round_number == round)
                .flat_map(|m| [m.team1, m.team2])
                .map(|team| (team.player1, team.player2.unwrap()))
                .collect();
            assert_eq!(partner_of.len(), 4);

            let male_pool = Sequencer::shuffled(u64::from(round), &males);
            let female_pool =
                Sequencer::shuffled(u64::from(round) + settings.female_seed_offset, &females);
            let mut free: Vec<PlayerId> = female_pool.iter().map(|f| f.id).collect();

            for male in &male_pool {
                let expected = free
                    .iter()
                    .copied()
                    .find(|&f| !earlier.have_partnered(male.id, f))
                    .unwrap_or(free[0]);
                let partner = partner_of[&male.id];
                assert_eq!(partner, expected, "round {round}, male {}", male.id);

                if earlier.have_partnered(male.id, partner) {
                    repeats.push((round, male.id, partner));
                }
                free.retain(|&f| f != partner);
            }

            for (&male, &female) in &partner_of {
                earlier.record_partners(male, female);
            }
        }

        assert_eq!(repeats, vec![(2, 2, 11), (3, 2, 11), (4, 4, 12), (4, 1, 14)]);
    }

    #[test]
    fn mixer_is_reproducible() {
        let roster: Vec<RatedPlayer> = (0..6)
            .map(|i| {
                let gender = if i % 2 == 0 { Gender::Male } else { Gender::Female };
                player(i + 1, 1500 + i * 20, gender)
            })
            .collect();
        let settings = DrawSettings::default();

        let first = generate_mixer_doubles(1, 4, &roster, &settings, &mut PairingHistory::new());
        let second = generate_mixer_doubles(1, 4, &roster, &settings, &mut PairingHistory::new());
        assert_eq!(first, second);
    }

    #[test]
    fn mixer_needs_two_of_each_gender() {
        let roster = [
            player(1, 1500, Gender::Male),
            player(2, 1500, Gender::Male),
            player(3, 1500, Gender::Male),
            player(4, 1500, Gender::Female),
        ];
        let matches = generate_mixer_doubles(
            1,
            2,
            &roster,
            &DrawSettings::default(),
            &mut PairingHistory::new(),
        );
        assert!(matches.is_empty());
    }
}
