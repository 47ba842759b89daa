pub mod courts;
pub mod doubles;
pub mod generator;
pub mod history;
pub mod opponents;
pub mod rotation;
pub mod sequencer;
pub mod singles;
pub mod types;

pub use courts::assign_courts;
pub use generator::{generate_draws, group_by_category, SessionDraw};
pub use history::PairingHistory;
pub use sequencer::Sequencer;
pub use types::{Partnership, RatedPlayer};
