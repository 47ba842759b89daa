use anyhow::{bail, Context, Result};
use log::info;

use crate::config::AppConfig;
use crate::database::{self, DbPool, SqliteStore};
use crate::domain::{Match, MatchId, MatchStatus, SetScores, MAX_SETS};
use crate::errors::not_found;
use crate::rating::{RatingChange, RatingEngine};

#[derive(Debug, Clone)]
pub struct ScoreOutcome {
    pub scored: Match,
    pub changes: Vec<RatingChange>,
}

pub struct ScoringService {
    engine: RatingEngine,
    pool: DbPool,
}

impl ScoringService {
    pub fn with_pool(config: AppConfig, pool: DbPool) -> Self {
        Self {
            engine: RatingEngine::new(config.rating),
            pool,
        }
    }

    /// Stores the scores, marks the match completed and re-rates it. The
    /// score write, rollback and recompute commit or fail together.
    pub fn record_score(&self, match_id: MatchId, scores: SetScores) -> Result<ScoreOutcome> {
        let mut conn = database::get_connection(&self.pool)?;
        let tx = conn.transaction()?;

        let scored = database::matches::update_scores(&tx, match_id, &scores, MatchStatus::Completed)?
            .ok_or_else(|| not_found("match", match_id))?;
        let changes = self.engine.apply_match(&mut SqliteStore::new(&tx), &scored)?;
        tx.commit()?;

        info!(
            "Match {} scored; {} ratings updated",
            match_id,
            changes.len()
        );
        Ok(ScoreOutcome { scored, changes })
    }

    /// Re-runs the rating engine for a match as currently stored.
    pub fn reprocess(&self, match_id: MatchId) -> Result<ScoreOutcome> {
        let mut conn = database::get_connection(&self.pool)?;
        let tx = conn.transaction()?;

        let scored = database::matches::find_by_id(&tx, match_id)?
            .ok_or_else(|| not_found("match", match_id))?;
        let changes = self.engine.apply_match(&mut SqliteStore::new(&tx), &scored)?;
        tx.commit()?;

        Ok(ScoreOutcome { scored, changes })
    }
}

/// Parses per-team set lists such as "21,19" and "15,21,18".
pub fn parse_set_scores(team1: &str, team2: &str) -> Result<SetScores> {
    let team1 = parse_sets(team1).context("Invalid team 1 scores")?;
    let team2 = parse_sets(team2).context("Invalid team 2 scores")?;
    if team1.len() != team2.len() {
        bail!(
            "Both teams need the same number of sets (got {} and {})",
            team1.len(),
            team2.len()
        );
    }

    let mut scores = SetScores::default();
    for (idx, (a, b)) in team1.into_iter().zip(team2).enumerate() {
        scores.team1[idx] = Some(a);
        scores.team2[idx] = Some(b);
    }
    Ok(scores)
}

fn parse_sets(value: &str) -> Result<Vec<i32>> {
    let sets = value
        .split(',')
        .map(|part| -> Result<i32> {
            let points: i32 = part
                .trim()
                .parse()
                .with_context(|| format!("'{}' is not a number", part.trim()))?;
            if points < 0 {
                bail!("Set points cannot be negative");
            }
            Ok(points)
        })
        .collect::<Result<Vec<_>>>()?;

    if sets.is_empty() || sets.len() > MAX_SETS {
        bail!("Expected between 1 and {} sets, got {}", MAX_SETS, sets.len());
    }
    Ok(sets)
}
