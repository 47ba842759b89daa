use anyhow::Result;
use log::warn;

use super::store::RatingStore;
use crate::config::RatingSettings;
use crate::domain::{EventCategory, Player, PlayerId, Rating};

/// Rating a player carries in `category`, or the default when never set.
pub fn category_rating(player: &Player, category: EventCategory, settings: &RatingSettings) -> Rating {
    player
        .category_rating(category)
        .unwrap_or(settings.default_rating)
}

/// Like [`category_rating`] but takes a free-form event label.
/// Unknown labels read as the default rating.
pub fn rating_for(player: &Player, event_type: &str, settings: &RatingSettings) -> Rating {
    EventCategory::parse(event_type)
        .map(|category| category_rating(player, category, settings))
        .unwrap_or(settings.default_rating)
}

/// Writes a rating back through the store. Unknown labels are ignored.
pub fn set_rating<S: RatingStore + ?Sized>(
    store: &mut S,
    player_id: PlayerId,
    event_type: &str,
    new_rating: Rating,
) -> Result<()> {
    match EventCategory::parse(event_type) {
        Some(category) => store.update_player_rating(player_id, category, new_rating),
        None => {
            warn!("Ignoring rating write for unknown event type '{event_type}'");
            Ok(())
        }
    }
}
