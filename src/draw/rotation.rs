//! Round-robin building blocks shared by singles and fixed-partnership doubles.
//!
//! Entrants are rotated with the circle method: the entrant at position 0 stays put,
//! everyone else moves one seat per round, and seat `i` plays seat `n - 1 - i`.

/// Index of the entrant sitting out `round` (1-based) when the pool is odd.
/// Over any `pool_size` consecutive rounds each index comes up exactly once.
pub fn bye_index(round: u32, pool_size: usize) -> usize {
    debug_assert!(pool_size > 0);
    (round.saturating_sub(1) as usize) % pool_size
}

/// Circle-method rotation of `entrants` for `round`. Position 0 is fixed;
/// the rest are rotated right by `(round - 1) mod (n - 1)` seats.
pub fn rotate_for_round<T: Clone>(entrants: &[T], round: u32) -> Vec<T> {
    let mut seats = entrants.to_vec();
    if seats.len() <= 2 {
        return seats;
    }

    let steps = (round.saturating_sub(1) as usize) % (seats.len() - 1);
    seats[1..].rotate_right(steps);
    seats
}

/// Pairs seat `i` with seat `n - 1 - i`. An odd trailing middle seat is left out.
pub fn fold_pairs<T: Clone>(seats: &[T]) -> Vec<(T, T)> {
    let n = seats.len();
    (0..n / 2)
        .map(|i| (seats[i].clone(), seats[n - 1 - i].clone()))
        .collect()
}

/// Pairings for one round: drop the bye entrant if the pool is odd, rotate the rest
/// and fold them into head-to-head pairs.
pub fn round_pairings<T: Clone>(entrants: &[T], round: u32) -> Vec<(T, T)> {
    if entrants.len() < 2 {
        return Vec::new();
    }

    let mut pool = entrants.to_vec();
    if pool.len() % 2 == 1 {
        pool.remove(bye_index(round, pool.len()));
    }

    fold_pairs(&rotate_for_round(&pool, round))
}
