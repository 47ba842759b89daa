pub mod accessor;
pub mod elo;
pub mod engine;
pub mod store;
pub mod types;

pub use accessor::{category_rating, rating_for, set_rating};
pub use engine::RatingEngine;
pub use store::RatingStore;
pub use types::{Participant, RatingChange};
