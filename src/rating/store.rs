use anyhow::Result;

use crate::domain::{EventCategory, MatchId, NewRatingHistory, Player, PlayerId, Rating, RatingHistory};

/// Persistence the rating engine reads and writes through.
pub trait RatingStore {
    fn get_player(&self, id: PlayerId) -> Result<Option<Player>>;

    fn update_player_rating(
        &mut self,
        id: PlayerId,
        category: EventCategory,
        rating: Rating,
    ) -> Result<()>;

    fn rating_histories_by_match(&self, match_id: MatchId) -> Result<Vec<RatingHistory>>;

    /// Returns the number of rows removed.
    fn delete_rating_histories_by_match(&mut self, match_id: MatchId) -> Result<usize>;

    fn create_rating_history(&mut self, row: &NewRatingHistory) -> Result<RatingHistory>;
}
