use std::collections::{HashMap, HashSet};

use crate::domain::{NewMatch, PlayerId};

/// Who has partnered and who has faced whom so far in a session.
/// Built up round by round and consulted by the mixer pairing.
#[derive(Debug, Default, Clone)]
pub struct PairingHistory {
    partners: HashMap<PlayerId, HashSet<PlayerId>>,
    opponents: HashMap<PlayerId, HashSet<PlayerId>>,
}

impl PairingHistory {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn have_partnered(&self, a: PlayerId, b: PlayerId) -> bool {
        self.partners.get(&a).is_some_and(|set| set.contains(&b))
    }

    pub fn have_faced(&self, a: PlayerId, b: PlayerId) -> bool {
        self.opponents.get(&a).is_some_and(|set| set.contains(&b))
    }

    /// True if any player on one side has already played against any player on the other.
    pub fn any_faced(&self, side_a: &[PlayerId], side_b: &[PlayerId]) -> bool {
        side_a
            .iter()
            .any(|&a| side_b.iter().any(|&b| self.have_faced(a, b)))
    }

    pub fn record_partners(&mut self, a: PlayerId, b: PlayerId) {
        link(&mut self.partners, a, b);
    }

    pub fn record_opponents(&mut self, a: PlayerId, b: PlayerId) {
        link(&mut self.opponents, a, b);
    }

    pub fn record_match(&mut self, drawn: &NewMatch) {
        for team in [&drawn.team1, &drawn.team2] {
            if let Some(second) = team.player2 {
                self.record_partners(team.player1, second);
            }
        }
        for a in drawn.team1.members() {
            for b in drawn.team2.members() {
                self.record_opponents(a, b);
            }
        }
    }

    pub fn partner_count(&self, player: PlayerId) -> usize {
        self.partners.get(&player).map_or(0, HashSet::len)
    }

    pub fn opponent_count(&self, player: PlayerId) -> usize {
        self.opponents.get(&player).map_or(0, HashSet::len)
    }
}

fn link(map: &mut HashMap<PlayerId, HashSet<PlayerId>>, a: PlayerId, b: PlayerId) {
    map.entry(a).or_default().insert(b);
    map.entry(b).or_default().insert(a);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{EventCategory, Team};

    #[test]
    fn records_are_symmetric() {
        let mut history = PairingHistory::new();
        history.record_partners(1, 2);
        history.record_opponents(1, 3);

        assert!(history.have_partnered(2, 1));
        assert!(history.have_faced(3, 1));
        assert!(!history.have_faced(1, 2));
    }

    #[test]
    fn record_match_links_partners_and_all_opponents() {
        let mut history = PairingHistory::new();
        let drawn = NewMatch::scheduled(
            1,
            EventCategory::MixedDoubles,
            1,
            Team::pair(1, 2),
            Team::pair(3, 4),
        );
        history.record_match(&drawn);

        assert!(history.have_partnered(1, 2));
        assert!(history.have_partnered(3, 4));
        assert!(history.any_faced(&[1], &[4]));
        assert_eq!(history.opponent_count(2), 2);
        assert_eq!(history.partner_count(4), 1);
    }
}
