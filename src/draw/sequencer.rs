/// Reproducible shuffle source. Not for anything security sensitive:
/// the point is that a given seed always yields the same permutation.
#[derive(Debug, Clone)]
pub struct Sequencer {
    state: u64,
}

const MULTIPLIER: u64 = 9301;
const INCREMENT: u64 = 49297;
const MODULUS: u64 = 233_280;

impl Sequencer {
    pub fn new(seed: u64) -> Self {
        Self {
            state: seed % MODULUS,
        }
    }

    /// Next value in [0, 1).
    pub fn next_unit(&mut self) -> f64 {
        self.state = (self.state * MULTIPLIER + INCREMENT) % MODULUS;
        self.state as f64 / MODULUS as f64
    }

    /// Fisher-Yates, walking from the back.
    pub fn shuffle<T>(&mut self, items: &mut [T]) {
        for i in (1..items.len()).rev() {
            let j = (self.next_unit() * (i + 1) as f64).floor() as usize;
            items.swap(i, j.min(i));
        }
    }

    pub fn shuffled<T: Clone>(seed: u64, items: &[T]) -> Vec<T> {
        let mut copy = items.to_vec();
        Self::new(seed).shuffle(&mut copy);
        copy
    }
}
