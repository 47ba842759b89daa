use std::collections::HashMap;

use crate::domain::NewMatch;

/// Spreads each round's matches over the courts in generation order:
/// the i-th match of a round goes to court `(i mod courts) + 1`.
pub fn assign_courts(matches: &mut [NewMatch], courts_available: u32) {
    let courts = courts_available.max(1);
    let mut next_index: HashMap<u32, u32> = HashMap::new();

    for drawn in matches.iter_mut() {
        let index = next_index.entry(drawn.round_number).or_insert(0);
        drawn.court_number = (*index % courts) + 1;
        *index += 1;
    }
}
