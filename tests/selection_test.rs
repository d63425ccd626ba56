//! Statistical properties of the winner draw.

use std::collections::HashMap;

use rand::SeedableRng;
use rand::rngs::StdRng;

use raffle::selector;

const NAMES: [&str; 5] = ["Ashutosh", "Suresh", "Ezra", "Omprakash", "Afsal"];

/// With k = 2 of n = 5, each name should be included in roughly 2/5 of
/// draws. 20k trials put the expected deviation well under the 0.02
/// tolerance used here.
#[test]
fn test_inclusion_frequency_is_uniform() {
    const TRIALS: usize = 20_000;
    let mut rng = StdRng::seed_from_u64(2024);
    let mut counts: HashMap<&str, usize> = HashMap::new();

    for _ in 0..TRIALS {
        for name in selector::select(&NAMES, 2, &mut rng) {
            *counts.entry(name).or_default() += 1;
        }
    }

    for name in NAMES {
        let freq = *counts.get(name).unwrap_or(&0) as f64 / TRIALS as f64;
        assert!(
            (freq - 0.4).abs() < 0.02,
            "{name} included with frequency {freq}, expected ~0.4"
        );
    }
}

/// Every unordered pair must be reachable.
#[test]
fn test_all_pairs_are_achievable() {
    const TRIALS: usize = 20_000;
    let mut rng = StdRng::seed_from_u64(77);
    let mut seen: HashMap<(usize, usize), usize> = HashMap::new();

    for _ in 0..TRIALS {
        let picked = selector::select(&NAMES, 2, &mut rng);
        let mut pair = (
            NAMES.iter().position(|n| *n == picked[0]).unwrap(),
            NAMES.iter().position(|n| *n == picked[1]).unwrap(),
        );
        if pair.0 > pair.1 {
            pair = (pair.1, pair.0);
        }
        *seen.entry(pair).or_default() += 1;
    }

    // C(5, 2) distinct unordered pairs.
    assert_eq!(seen.len(), 10, "not every 2-subset was drawn");

    // Each pair has probability 1/10; require each to appear at least
    // half as often as expected.
    for (pair, count) in seen {
        assert!(
            count > TRIALS / 20,
            "pair {pair:?} drawn only {count} times"
        );
    }
}

/// Size and distinctness hold across pool sizes and k values.
#[test]
fn test_size_and_distinctness() {
    let mut rng = StdRng::seed_from_u64(3);
    for n in 1..=8_usize {
        let pool: Vec<String> = (0..n).map(|i| format!("name-{i}")).collect();
        for k in 0..=n + 2 {
            let picked = selector::select(&pool, k, &mut rng);
            assert_eq!(picked.len(), k.min(n));
            for (i, name) in picked.iter().enumerate() {
                assert!(pool.contains(name));
                assert!(!picked[..i].contains(name));
            }
        }
    }
}
