use crate::domain::{ExpectedOutcome, MatchOutcome, PlayerId, Rating};

/// Rating movement for one participant of one match.
#[derive(Debug, Clone, PartialEq)]
pub struct RatingChange {
    pub player_id: PlayerId,
    pub old_rating: Rating,
    pub new_rating: Rating,
    pub opponent_ids: Vec<PlayerId>,
    pub result: MatchOutcome,
    pub expected_outcome: ExpectedOutcome,
}

impl RatingChange {
    pub fn delta(&self) -> Rating {
        self.new_rating - self.old_rating
    }
}

/// Participant going into the calculation: id plus pre-match rating.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Participant {
    pub id: PlayerId,
    pub rating: Rating,
}

pub fn team_rating(members: &[Participant]) -> f64 {
    if members.is_empty() {
        return 0.0;
    }
    members.iter().map(|m| f64::from(m.rating)).sum::<f64>() / members.len() as f64
}
