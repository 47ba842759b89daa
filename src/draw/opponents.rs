use super::history::PairingHistory;
use super::types::{sort_partnerships_desc, Partnership};

/// Pairs a round's partnerships against each other, strongest first. Each
/// partnership takes the first remaining one none of whose players it has
/// faced before, or simply the first remaining one when no fresh opponent is
/// left. Greedy and non-backtracking: a repeat can survive even when a
/// different global assignment would have avoided it.
pub fn match_opponents(
    partnerships: &[Partnership],
    history: &PairingHistory,
) -> Vec<(Partnership, Partnership)> {
    let mut ordered = partnerships.to_vec();
    sort_partnerships_desc(&mut ordered);

    let mut used = vec![false; ordered.len()];
    let mut fixtures = Vec::with_capacity(ordered.len() / 2);

    for i in 0..ordered.len() {
        if used[i] {
            continue;
        }
        let home = ordered[i].ids();

        let fresh = (i + 1..ordered.len())
            .find(|&j| !used[j] && !history.any_faced(&home, &ordered[j].ids()));
        let Some(j) = fresh.or_else(|| (i + 1..ordered.len()).find(|&j| !used[j])) else {
            continue;
        };

        used[i] = true;
        used[j] = true;
        fixtures.push((ordered[i], ordered[j]));
    }

    fixtures
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::Gender;
    use crate::draw::types::RatedPlayer;

    fn pair(a: i32, b: i32, rating: i32) -> Partnership {
        Partnership::new(
            RatedPlayer { id: a, rating, gender: Gender::Male },
            RatedPlayer { id: b, rating, gender: Gender::Female },
        )
    }

    #[test]
    fn pairs_neighbours_by_strength_without_history() {
        let teams = [pair(1, 2, 1500), pair(3, 4, 1900), pair(5, 6, 1700), pair(7, 8, 1300)];
        let fixtures = match_opponents(&teams, &PairingHistory::new());

        let ids: Vec<_> = fixtures.iter().map(|(a, b)| (a.first.id, b.first.id)).collect();
        assert_eq!(ids, vec![(3, 5), (1, 7)]);
    }

    #[test]
    fn skips_previous_opponents_when_possible() {
        let teams = [pair(1, 2, 1900), pair(3, 4, 1800), pair(5, 6, 1700), pair(7, 8, 1600)];
        let mut history = PairingHistory::new();
        history.record_opponents(2, 4);

        let fixtures = match_opponents(&teams, &history);
        let ids: Vec<_> = fixtures.iter().map(|(a, b)| (a.first.id, b.first.id)).collect();
        assert_eq!(ids, vec![(1, 5), (3, 7)]);
    }

    #[test]
    fn falls_back_to_repeat_when_nothing_fresh() {
        let teams = [pair(1, 2, 1900), pair(3, 4, 1800)];
        let mut history = PairingHistory::new();
        history.record_opponents(1, 3);

        let fixtures = match_opponents(&teams, &history);
        assert_eq!(fixtures.len(), 1);
    }

    #[test]
    fn odd_partnership_sits_out() {
        let teams = [pair(1, 2, 1900), pair(3, 4, 1800), pair(5, 6, 1700)];
        assert_eq!(match_opponents(&teams, &PairingHistory::new()).len(), 1);
    }
}
