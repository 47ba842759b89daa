use anyhow::Result;
use log::{debug, info};

use super::accessor::{rating_for, set_rating};
use super::elo::rate_match;
use super::store::RatingStore;
use super::types::{Participant, RatingChange};
use crate::config::RatingSettings;
use crate::domain::{Match, MatchId, MatchStatus, NewRatingHistory, Team};
use crate::errors::not_found;

/// Applies match results to per-category ratings.
///
/// Processing a match always starts by undoing whatever that match
/// contributed before, so re-running it (after a score edit, or just twice)
/// leaves ratings exactly as the current score implies. Callers must
/// serialize processing of the same match.
pub struct RatingEngine {
    settings: RatingSettings,
}

impl RatingEngine {
    pub fn new(settings: RatingSettings) -> Self {
        Self { settings }
    }

    /// Rolls back any earlier changes from this match, then applies the
    /// changes implied by its current scores. Returns the applied changes.
    /// Matches that are not completed are left alone, history included.
    pub fn apply_match<S: RatingStore + ?Sized>(
        &self,
        store: &mut S,
        completed: &Match,
    ) -> Result<Vec<RatingChange>> {
        if completed.status != MatchStatus::Completed {
            debug!("Match {} is {}, not rating it", completed.id, completed.status.as_str());
            return Ok(Vec::new());
        }

        let rolled_back = self.rollback_match(store, completed.id)?;
        if rolled_back > 0 {
            info!("Rolled back {rolled_back} rating changes for match {}", completed.id);
        }

        let changes = self.calculate_changes(store, completed)?;
        for change in &changes {
            set_rating(store, change.player_id, &completed.event_type, change.new_rating)?;
            store.create_rating_history(&NewRatingHistory {
                player_id: change.player_id,
                event_type: completed.event_type.clone(),
                old_rating: change.old_rating,
                new_rating: change.new_rating,
                rating_change: change.delta(),
                match_id: completed.id,
                opponent_ids: change.opponent_ids.clone(),
                result: change.result,
                expected_outcome: change.expected_outcome,
            })?;
            debug!(
                "Player {}: {} -> {} ({:+})",
                change.player_id,
                change.old_rating,
                change.new_rating,
                change.delta()
            );
        }

        Ok(changes)
    }

    /// Restores every participant to the rating recorded before this match
    /// and removes the match's history rows.
    pub fn rollback_match<S: RatingStore + ?Sized>(
        &self,
        store: &mut S,
        match_id: MatchId,
    ) -> Result<usize> {
        let histories = store.rating_histories_by_match(match_id)?;
        if histories.is_empty() {
            return Ok(0);
        }

        for history in &histories {
            set_rating(store, history.player_id, &history.event_type, history.old_rating)?;
        }
        store.delete_rating_histories_by_match(match_id)
    }

    /// Changes this match would cause, without writing anything. Empty
    /// unless the match is completed with a first set entered for both teams.
    pub fn calculate_changes<S: RatingStore + ?Sized>(
        &self,
        store: &S,
        completed: &Match,
    ) -> Result<Vec<RatingChange>> {
        if completed.status != MatchStatus::Completed || !completed.scores.has_first_set() {
            return Ok(Vec::new());
        }

        let team1 = self.participants(store, &completed.team1, &completed.event_type)?;
        let team2 = self.participants(store, &completed.team2, &completed.event_type)?;

        let (team1_sets, team2_sets) = completed.scores.sets_won();
        Ok(rate_match(&team1, &team2, team1_sets > team2_sets, &self.settings))
    }

    fn participants<S: RatingStore + ?Sized>(
        &self,
        store: &S,
        team: &Team,
        event_type: &str,
    ) -> Result<Vec<Participant>> {
        team.members()
            .into_iter()
            .map(|id| -> Result<Participant> {
                let player = store.get_player(id)?.ok_or_else(|| not_found("player", id))?;
                Ok(Participant {
                    id,
                    rating: rating_for(&player, event_type, &self.settings),
                })
            })
            .collect()
    }
}
