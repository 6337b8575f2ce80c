use std::collections::TryReserveError;
use std::iter::repeat_with;

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Builds a vector of `n` pseudo-random values from a fixed seed, so every
/// run of the benchmark sorts the same data. Allocation is checked up front
/// so an oversized request fails cleanly instead of aborting.
pub fn random_array(n: usize, seed: u64) -> Result<Vec<i32>, TryReserveError> {
    let mut arr = Vec::new();
    arr.try_reserve_exact(n)?;

    let mut rng = StdRng::seed_from_u64(seed);
    arr.extend(repeat_with(|| rng.gen::<i32>()).take(n));
    Ok(arr)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn same_seed_same_data() {
        let a = random_array(256, 1).unwrap();
        let b = random_array(256, 1).unwrap();
        assert_eq!(a, b);

        let c = random_array(256, 2).unwrap();
        assert_ne!(a, c);
    }

    #[test]
    fn empty_request() {
        assert!(random_array(0, 0).unwrap().is_empty());
    }
}
