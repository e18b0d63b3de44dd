//! Tests for rejection-sampled uniform integers

use num_bigint::BigInt;
use proptest::prelude::*;
use rndm::SplitMix64;

/// Pearson chi-square statistic of `counts` against the uniform distribution
fn chi_square(counts: &[u64], total: u64) -> f64 {
    let expected = total as f64 / counts.len() as f64;
    counts
        .iter()
        .map(|&c| {
            let d = c as f64 - expected;
            d * d / expected
        })
        .sum()
}

#[test]
fn test_uniform_below_7_chi_square() {
    let mut rng = SplitMix64::new(12345, 1);
    let mut counts = [0u64; 7];
    let draws = 100_000;

    for _ in 0..draws {
        let r = rng.uniform_below_u64(7).unwrap();
        counts[r as usize] += 1;
    }

    // 6 degrees of freedom; 30 is far beyond the 0.1% critical value (22.46)
    let stat = chi_square(&counts, draws);
    assert!(stat < 30.0, "chi-square {} too large, counts {:?}", stat, counts);
}

#[test]
fn test_uniform_below_10_chi_square() {
    let mut rng = SplitMix64::new(99, 4);
    let mut counts = [0u64; 10];
    let draws = 100_000;

    for _ in 0..draws {
        let r = rng.uniform_below(&BigInt::from(10)).unwrap();
        let idx: usize = r.try_into().unwrap();
        counts[idx] += 1;
    }

    // 9 degrees of freedom; 0.1% critical value is 27.88
    let stat = chi_square(&counts, draws);
    assert!(stat < 35.0, "chi-square {} too large, counts {:?}", stat, counts);
}

#[test]
fn test_uniform_below_power_of_two_uses_next_bit() {
    // n = 8 needs 4 bits, so values 8..15 get rejected rather than folded
    let mut rng = SplitMix64::new(3, 3);
    for _ in 0..1000 {
        assert!(rng.uniform_below_u64(8).unwrap() < 8);
    }
}

#[test]
fn test_uniform_below_huge_bound() {
    let n = BigInt::from(10u8).pow(40);
    let mut rng = SplitMix64::new(8, 8);
    for _ in 0..200 {
        let r = rng.uniform_below(&n).unwrap();
        assert!(r >= BigInt::from(0) && r < n);
    }
}

proptest! {
    #[test]
    fn prop_uniform_below_in_range(seed: u64, n in 1u64..=u64::MAX) {
        let mut rng = SplitMix64::new(seed, 0);
        prop_assert!(rng.uniform_below_u64(n).unwrap() < n);
    }
}
