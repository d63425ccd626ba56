//! Random winner selection.
//!
//! Draws `k` distinct entries from a pool without replacement using a
//! partial Fisher-Yates pass: pick from a shrinking index pool for each
//! slot. Every k-subset is equally likely, and the draw is deterministic
//! for a fixed random source.

use rand::Rng;

/// Select `min(k, pool.len())` distinct elements from `pool`.
///
/// `k = 0` or an empty pool yields an empty result. The presented order
/// is the draw order and carries no meaning.
pub fn select<T: Clone>(pool: &[T], k: usize, rng: &mut impl Rng) -> Vec<T> {
    let count = k.min(pool.len());
    let mut remaining: Vec<usize> = (0..pool.len()).collect();
    let mut picked = Vec::with_capacity(count);
    for _ in 0..count {
        let r = rng.random_range(0..remaining.len());
        picked.push(pool[remaining.swap_remove(r)].clone());
    }
    picked
}

#[cfg(test)]
mod tests {
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    use super::*;

    const POOL: [&str; 5] = ["Ashutosh", "Suresh", "Ezra", "Omprakash", "Afsal"];

    #[test]
    fn returns_requested_count() {
        let mut rng = StdRng::seed_from_u64(1);
        assert_eq!(select(&POOL, 2, &mut rng).len(), 2);
        assert_eq!(select(&POOL, 5, &mut rng).len(), 5);
    }

    #[test]
    fn clamps_to_pool_size() {
        let mut rng = StdRng::seed_from_u64(2);
        assert_eq!(select(&POOL, 100, &mut rng).len(), POOL.len());
    }

    #[test]
    fn zero_or_empty_yields_empty() {
        let mut rng = StdRng::seed_from_u64(3);
        assert!(select(&POOL, 0, &mut rng).is_empty());
        let empty: [&str; 0] = [];
        assert!(select(&empty, 2, &mut rng).is_empty());
    }

    #[test]
    fn winners_are_distinct_pool_members() {
        let mut rng = StdRng::seed_from_u64(4);
        for _ in 0..200 {
            let picked = select(&POOL, 3, &mut rng);
            for (i, name) in picked.iter().enumerate() {
                assert!(POOL.contains(name));
                assert!(!picked[..i].contains(name), "duplicate winner {name}");
            }
        }
    }

    #[test]
    fn deterministic_for_fixed_seed() {
        let mut a = StdRng::seed_from_u64(42);
        let mut b = StdRng::seed_from_u64(42);
        assert_eq!(select(&POOL, 2, &mut a), select(&POOL, 2, &mut b));
    }
}
