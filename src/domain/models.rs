use std::fmt;
use std::sync::LazyLock;

use chrono::NaiveDateTime;
use regex::Regex;
use serde::{Deserialize, Serialize};

pub type PlayerId = i32;
pub type SessionId = i32;
pub type MatchId = i32;
pub type Rating = i32;

static NON_ALPHA: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[^a-z]").expect("static pattern is valid"));

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Gender {
    Male,
    Female,
}

impl Gender {
    pub fn as_str(&self) -> &str {
        match self {
            Gender::Male => "Male",
            Gender::Female => "Female",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        match value.trim().to_lowercase().as_str() {
            "male" | "m" => Some(Gender::Male),
            "female" | "f" => Some(Gender::Female),
            _ => None,
        }
    }
}

/// Event categories a player can register for. Ordering is the order
/// in which categories are drawn within a session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum EventCategory {
    Singles,
    MensDoubles,
    WomensDoubles,
    MixedDoubles,
}

impl EventCategory {
    /// Case and punctuation insensitive: "Men's Doubles", "mens_doubles"
    /// and "MENSDOUBLES" all resolve to the same category.
    pub fn parse(label: &str) -> Option<Self> {
        let normalized = NON_ALPHA.replace_all(&label.to_lowercase(), "").into_owned();
        match normalized.as_str() {
            "singles" => Some(EventCategory::Singles),
            "mensdoubles" => Some(EventCategory::MensDoubles),
            "womensdoubles" => Some(EventCategory::WomensDoubles),
            "mixeddoubles" => Some(EventCategory::MixedDoubles),
            _ => None,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            EventCategory::Singles => "Singles",
            EventCategory::MensDoubles => "Men's Doubles",
            EventCategory::WomensDoubles => "Women's Doubles",
            EventCategory::MixedDoubles => "Mixed Doubles",
        }
    }
}

impl fmt::Display for EventCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Player {
    pub id: PlayerId,
    pub name: String,
    pub gender: Gender,
    pub singles_rating: Option<Rating>,
    pub mens_doubles_rating: Option<Rating>,
    pub womens_doubles_rating: Option<Rating>,
    pub mixed_doubles_rating: Option<Rating>,
}

impl Player {
    pub fn category_rating(&self, category: EventCategory) -> Option<Rating> {
        match category {
            EventCategory::Singles => self.singles_rating,
            EventCategory::MensDoubles => self.mens_doubles_rating,
            EventCategory::WomensDoubles => self.womens_doubles_rating,
            EventCategory::MixedDoubles => self.mixed_doubles_rating,
        }
    }

    pub fn set_category_rating(&mut self, category: EventCategory, rating: Rating) {
        let slot = match category {
            EventCategory::Singles => &mut self.singles_rating,
            EventCategory::MensDoubles => &mut self.mens_doubles_rating,
            EventCategory::WomensDoubles => &mut self.womens_doubles_rating,
            EventCategory::MixedDoubles => &mut self.mixed_doubles_rating,
        };
        *slot = Some(rating);
    }
}

/// Session descriptor: how many rounds to draw and how many courts to spread them over.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Session {
    pub id: SessionId,
    pub name: String,
    pub date: Option<NaiveDateTime>,
    pub number_of_rounds: u32,
    pub courts_available: u32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Registration {
    pub session_id: SessionId,
    pub player_id: PlayerId,
    pub selected_events: Vec<String>,
}

/// One side of a match. Singles teams carry only `player1`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Team {
    pub player1: PlayerId,
    pub player2: Option<PlayerId>,
}

impl Team {
    pub fn single(player: PlayerId) -> Self {
        Self {
            player1: player,
            player2: None,
        }
    }

    pub fn pair(player1: PlayerId, player2: PlayerId) -> Self {
        Self {
            player1,
            player2: Some(player2),
        }
    }

    pub fn members(&self) -> Vec<PlayerId> {
        std::iter::once(self.player1).chain(self.player2).collect()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum MatchStatus {
    Scheduled,
    InProgress,
    Completed,
}

impl MatchStatus {
    pub fn as_str(&self) -> &str {
        match self {
            MatchStatus::Scheduled => "scheduled",
            MatchStatus::InProgress => "in-progress",
            MatchStatus::Completed => "completed",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "scheduled" => Some(MatchStatus::Scheduled),
            "in-progress" => Some(MatchStatus::InProgress),
            "completed" => Some(MatchStatus::Completed),
            _ => None,
        }
    }
}

pub const MAX_SETS: usize = 3;

/// Per-set points for both teams; a set counts only when both sides are filled in.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SetScores {
    pub team1: [Option<i32>; MAX_SETS],
    pub team2: [Option<i32>; MAX_SETS],
}

impl SetScores {
    pub fn has_first_set(&self) -> bool {
        self.team1[0].is_some() && self.team2[0].is_some()
    }

    /// Sets won by (team1, team2). Level sets are won by nobody.
    pub fn sets_won(&self) -> (u32, u32) {
        self.team1
            .iter()
            .zip(self.team2.iter())
            .fold((0, 0), |(t1, t2), pair| match pair {
                (Some(a), Some(b)) if a > b => (t1 + 1, t2),
                (Some(a), Some(b)) if b > a => (t1, t2 + 1),
                _ => (t1, t2),
            })
    }
}

/// A drawn match that has not been persisted yet.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NewMatch {
    pub session_id: SessionId,
    pub event_type: EventCategory,
    pub round_number: u32,
    pub court_number: u32,
    pub team1: Team,
    pub team2: Team,
    pub scores: SetScores,
    pub status: MatchStatus,
}

impl NewMatch {
    pub fn scheduled(
        session_id: SessionId,
        event_type: EventCategory,
        round_number: u32,
        team1: Team,
        team2: Team,
    ) -> Self {
        Self {
            session_id,
            event_type,
            round_number,
            court_number: 0,
            team1,
            team2,
            scores: SetScores::default(),
            status: MatchStatus::Scheduled,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Match {
    pub id: MatchId,
    pub session_id: SessionId,
    pub event_type: String,
    pub round_number: u32,
    pub court_number: u32,
    pub team1: Team,
    pub team2: Team,
    pub scores: SetScores,
    pub status: MatchStatus,
    pub created_at: Option<NaiveDateTime>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum MatchOutcome {
    Win,
    Loss,
}

impl MatchOutcome {
    pub fn as_str(&self) -> &str {
        match self {
            MatchOutcome::Win => "win",
            MatchOutcome::Loss => "loss",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "win" => Some(MatchOutcome::Win),
            "loss" => Some(MatchOutcome::Loss),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ExpectedOutcome {
    Win,
    Loss,
    Even,
}

impl ExpectedOutcome {
    pub fn as_str(&self) -> &str {
        match self {
            ExpectedOutcome::Win => "win",
            ExpectedOutcome::Loss => "loss",
            ExpectedOutcome::Even => "even",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "win" => Some(ExpectedOutcome::Win),
            "loss" => Some(ExpectedOutcome::Loss),
            "even" => Some(ExpectedOutcome::Even),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NewRatingHistory {
    pub player_id: PlayerId,
    pub event_type: String,
    pub old_rating: Rating,
    pub new_rating: Rating,
    pub rating_change: Rating,
    pub match_id: MatchId,
    pub opponent_ids: Vec<PlayerId>,
    pub result: MatchOutcome,
    pub expected_outcome: ExpectedOutcome,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RatingHistory {
    pub id: i32,
    pub player_id: PlayerId,
    pub event_type: String,
    pub old_rating: Rating,
    pub new_rating: Rating,
    pub rating_change: Rating,
    pub match_id: MatchId,
    pub opponent_ids: Vec<PlayerId>,
    pub result: MatchOutcome,
    pub expected_outcome: ExpectedOutcome,
    pub created_at: NaiveDateTime,
}
