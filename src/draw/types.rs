use crate::domain::{Gender, PlayerId, Rating, Team};

/// A registrant with the rating that applies to the category being drawn.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RatedPlayer {
    pub id: PlayerId,
    pub rating: Rating,
    pub gender: Gender,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Partnership {
    pub first: RatedPlayer,
    pub second: RatedPlayer,
}

impl Partnership {
    pub fn new(first: RatedPlayer, second: RatedPlayer) -> Self {
        Self { first, second }
    }

    pub fn combined_rating(&self) -> Rating {
        self.first.rating + self.second.rating
    }

    pub fn ids(&self) -> [PlayerId; 2] {
        [self.first.id, self.second.id]
    }

    pub fn team(&self) -> Team {
        Team::pair(self.first.id, self.second.id)
    }
}

/// Strongest first; ties broken by id so the order never depends on input order.
pub fn sort_by_rating_desc(players: &mut [RatedPlayer]) {
    players.sort_by(|a, b| b.rating.cmp(&a.rating).then(a.id.cmp(&b.id)));
}

pub fn sort_partnerships_desc(partnerships: &mut [Partnership]) {
    partnerships.sort_by(|a, b| {
        b.combined_rating()
            .cmp(&a.combined_rating())
            .then(a.first.id.cmp(&b.first.id))
    });
}
