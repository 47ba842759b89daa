//! ELO-style arithmetic. Pure functions; the engine owns all persistence.

use super::types::{team_rating, Participant, RatingChange};
use crate::config::RatingSettings;
use crate::domain::{ExpectedOutcome, MatchOutcome, Rating};

/// Probability-like expected score of a side rated `rating_a` against `rating_b`.
pub fn expected_score(rating_a: f64, rating_b: f64, settings: &RatingSettings) -> f64 {
    1.0 / (1.0 + 10_f64.powf((rating_b - rating_a) / settings.elo_scale))
}

pub fn k_factor(rating: Rating, settings: &RatingSettings) -> f64 {
    if rating < settings.low_tier_ceiling {
        settings.low_tier_k
    } else if rating < settings.mid_tier_ceiling {
        settings.mid_tier_k
    } else {
        settings.high_tier_k
    }
}

pub fn classify_expectation(expected: f64, settings: &RatingSettings) -> ExpectedOutcome {
    if expected > settings.favourite_threshold {
        ExpectedOutcome::Win
    } else if expected < settings.underdog_threshold {
        ExpectedOutcome::Loss
    } else {
        ExpectedOutcome::Even
    }
}

pub fn updated_rating(rating: Rating, actual: f64, expected: f64, settings: &RatingSettings) -> Rating {
    let delta = (k_factor(rating, settings) * (actual - expected)).round() as Rating;
    (rating + delta).clamp(settings.min_rating, settings.max_rating)
}

/// Changes for every participant given both line-ups and whether team 1 won.
/// Team strength is the mean of its members; each member's K comes from
/// their own pre-match rating.
pub fn rate_match(
    team1: &[Participant],
    team2: &[Participant],
    team1_won: bool,
    settings: &RatingSettings,
) -> Vec<RatingChange> {
    let team1_expected = expected_score(team_rating(team1), team_rating(team2), settings);
    let team2_expected = 1.0 - team1_expected;

    let mut changes = rate_side(team1, team2, team1_won, team1_expected, settings);
    changes.extend(rate_side(team2, team1, !team1_won, team2_expected, settings));
    changes
}

fn rate_side(
    side: &[Participant],
    opponents: &[Participant],
    won: bool,
    expected: f64,
    settings: &RatingSettings,
) -> Vec<RatingChange> {
    let actual = if won { 1.0 } else { 0.0 };
    let opponent_ids: Vec<_> = opponents.iter().map(|p| p.id).collect();

    side.iter()
        .map(|member| RatingChange {
            player_id: member.id,
            old_rating: member.rating,
            new_rating: updated_rating(member.rating, actual, expected, settings),
            opponent_ids: opponent_ids.clone(),
            result: if won { MatchOutcome::Win } else { MatchOutcome::Loss },
            expected_outcome: classify_expectation(expected, settings),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn settings() -> RatingSettings {
        RatingSettings::default()
    }

    fn solo(id: i32, rating: Rating) -> Vec<Participant> {
        vec![Participant { id, rating }]
    }

    #[test]
    fn expected_scores_sum_to_one() {
        let s = settings();
        for (a, b) in [(1000.0, 2000.0), (1500.0, 1500.0), (1733.0, 1288.5), (1999.0, 1001.0)] {
            let total = expected_score(a, b, &s) + expected_score(b, a, &s);
            assert!((total - 1.0).abs() < 1e-12);
        }
    }

    #[test]
    fn k_factor_tiers() {
        let s = settings();
        assert_eq!(k_factor(1499, &s), 40.0);
        assert_eq!(k_factor(1500, &s), 32.0);
        assert_eq!(k_factor(1799, &s), 32.0);
        assert_eq!(k_factor(1800, &s), 24.0);
    }

    #[test]
    fn even_match_moves_by_half_k() {
        let s = settings();
        for rating in [1200, 1600, 1900] {
            let k = k_factor(rating, &s);
            let changes = rate_match(&solo(1, rating), &solo(2, rating), true, &s);
            assert_eq!(changes[0].delta(), (k / 2.0).round() as Rating);
            assert_eq!(changes[1].delta(), -(k / 2.0).round() as Rating);
            assert_eq!(changes[0].expected_outcome, ExpectedOutcome::Even);
        }
    }

    #[test]
    fn favourite_beats_underdog() {
        let s = settings();
        let changes = rate_match(&solo(1, 1600), &solo(2, 1400), true, &s);

        assert_eq!(changes[0].new_rating, 1608);
        assert_eq!(changes[0].result, MatchOutcome::Win);
        assert_eq!(changes[0].expected_outcome, ExpectedOutcome::Win);
        assert_eq!(changes[0].opponent_ids, vec![2]);

        assert_eq!(changes[1].new_rating, 1390);
        assert_eq!(changes[1].result, MatchOutcome::Loss);
        assert_eq!(changes[1].expected_outcome, ExpectedOutcome::Loss);
    }

    #[test]
    fn ratings_stay_within_bounds() {
        let s = settings();
        let top = rate_match(&solo(1, 1995), &solo(2, 1995), true, &s);
        assert_eq!(top[0].new_rating, 2000);

        let bottom = rate_match(&solo(1, 1005), &solo(2, 1005), true, &s);
        assert_eq!(bottom[1].new_rating, 1000);

        let out_of_range = rate_match(&solo(1, 2300), &solo(2, 700), false, &s);
        assert_eq!(out_of_range[0].new_rating, 2000);
        assert_eq!(out_of_range[1].new_rating, 1000);
    }

    #[test]
    fn doubles_use_team_average_and_individual_k() {
        let s = settings();
        let team1 = [Participant { id: 1, rating: 1900 }, Participant { id: 2, rating: 1300 }];
        let team2 = [Participant { id: 3, rating: 1600 }, Participant { id: 4, rating: 1600 }];
        let changes = rate_match(&team1, &team2, true, &s);

        assert_eq!(changes.len(), 4);
        // Both averages are 1600, so expectation is 0.5.
        assert_eq!(changes[0].delta(), 12);
        assert_eq!(changes[1].delta(), 20);
        assert_eq!(changes[2].delta(), -16);
        assert_eq!(changes[2].opponent_ids, vec![1, 2]);
    }
}
