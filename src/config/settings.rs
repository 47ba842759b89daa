use crate::domain::Rating;

#[derive(Debug, Clone)]
pub struct RatingSettings {
    pub default_rating: Rating,
    pub min_rating: Rating,
    pub max_rating: Rating,
    /// Rating gap at which the stronger side is expected to score 10:1.
    pub elo_scale: f64,
    pub low_tier_ceiling: Rating,
    pub mid_tier_ceiling: Rating,
    pub low_tier_k: f64,
    pub mid_tier_k: f64,
    pub high_tier_k: f64,
    pub favourite_threshold: f64,
    pub underdog_threshold: f64,
}

impl Default for RatingSettings {
    fn default() -> Self {
        Self {
            default_rating: 1500,
            min_rating: 1000,
            max_rating: 2000,
            elo_scale: 400.0,
            low_tier_ceiling: 1500,
            mid_tier_ceiling: 1800,
            low_tier_k: 40.0,
            mid_tier_k: 32.0,
            high_tier_k: 24.0,
            favourite_threshold: 0.6,
            underdog_threshold: 0.4,
        }
    }
}

#[derive(Debug, Clone)]
pub struct DrawSettings {
    pub min_singles_players: usize,
    pub min_doubles_players: usize,
    /// Added to the round number when seeding the female pool shuffle,
    /// so both pools never get the same permutation.
    pub female_seed_offset: u64,
}

impl Default for DrawSettings {
    fn default() -> Self {
        Self {
            min_singles_players: 2,
            min_doubles_players: 4,
            female_seed_offset: 1000,
        }
    }
}

#[derive(Debug, Clone)]
pub struct DatabaseSettings {
    pub path: String,
}

impl Default for DatabaseSettings {
    fn default() -> Self {
        Self {
            path: std::env::var("DATABASE_PATH")
                .unwrap_or_else(|_| "shuttle_draws.db".to_string()),
        }
    }
}

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub rating: RatingSettings,
    pub draw: DrawSettings,
    pub database: DatabaseSettings,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self::new()
    }
}

impl AppConfig {
    pub fn new() -> Self {
        Self {
            rating: RatingSettings::default(),
            draw: DrawSettings::default(),
            database: DatabaseSettings::default(),
        }
    }

    pub fn with_database_path(mut self, path: impl Into<String>) -> Self {
        self.database.path = path.into();
        self
    }
}
