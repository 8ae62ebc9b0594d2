//! Property-based tests for the n-th prime kernel's mathematical invariants.
//!
//! These tests use the `proptest` framework to verify invariants hold across
//! hundreds of randomly generated inputs, rather than checking only a handful
//! of hand-picked values.
//!
//! # How to run
//!
//! ```bash
//! cargo test --test property_tests
//! PROPTEST_CASES=10000 cargo test --test property_tests
//! ```
//!
//! # Testing strategy
//!
//! Properties are organized by module:
//! - **bits**: packed bit buffer get/set/clear/count_ones agree with a plain
//!   `Vec<bool>` model.
//! - **odds / segment**: a segmented sieve over any window agrees with the
//!   full odds-only sieve restricted to that window.
//! - **lucy**: `prime_count` agrees with brute-force counting for arbitrary x.
//! - **locator**: `nth_prime` is strictly increasing in n, and every strategy
//!   forced explicitly agrees with the Auto dispatch.

use proptest::prelude::*;

use nthprime::bits::BitSieve;
use nthprime::locator::{nth_prime, Method, Options};
use nthprime::odds::odds_only_sieve;
use nthprime::segment::segment_primes;
use nthprime::prime_count_auto;

proptest! {
    /// Verifies BitSieve set/get/count_ones agree with a plain Vec<bool> model.
    #[test]
    fn prop_bitsieve_matches_vec_bool_model(
        len in 0usize..2000,
        ops in proptest::collection::vec((0usize..2000, any::<bool>()), 0..200),
    ) {
        let mut sieve = BitSieve::new_all_clear(len);
        let mut model = vec![false; len];
        for (idx, set) in ops {
            if idx >= len {
                continue;
            }
            if set {
                sieve.set(idx);
                model[idx] = true;
            } else {
                sieve.clear(idx);
                model[idx] = false;
            }
        }
        for i in 0..len {
            prop_assert_eq!(sieve.get(i), model[i], "bit {} mismatch", i);
        }
        let expected_count = model.iter().filter(|&&b| b).count();
        prop_assert_eq!(sieve.count_ones(), expected_count);
    }

    /// Verifies a segmented sieve over any window matches the full odds-only
    /// sieve restricted to that window.
    ///
    /// **Property**: for 2 <= lo <= hi <= 5000, segment_primes(lo, hi, base)
    /// equals the subset of odds_only_sieve(hi) with value >= lo.
    #[test]
    fn prop_segment_matches_full_sieve_window(
        lo in 2u64..5000,
        width in 0u64..2000,
    ) {
        let hi = lo + width;
        let base_limit = (hi as f64).sqrt() as u32 + 2;
        let base = odds_only_sieve(base_limit);
        let got = segment_primes(lo, hi, &base);

        let expected: Vec<u64> = odds_only_sieve(hi as u32)
            .into_iter()
            .map(|p| p as u64)
            .filter(|&p| p >= lo)
            .collect();

        prop_assert_eq!(got, expected, "segment_primes({}, {}) mismatch", lo, hi);
    }

    /// Verifies prime_count_auto(x) matches brute-force counting via the
    /// odds-only sieve, for x up to 50,000.
    #[test]
    fn prop_prime_count_matches_brute_force(
        x in 0u64..50_000,
    ) {
        let brute = if x < 2 { 0 } else { odds_only_sieve(x as u32).len() as u64 };
        prop_assert_eq!(prime_count_auto(x), brute, "pi({})", x);
    }

    /// Verifies nth_prime is strictly increasing in n (Auto dispatch).
    #[test]
    fn prop_nth_prime_strictly_increasing(
        n in 0u64..5000,
    ) {
        let p_n = nth_prime(n, &Options::default()).unwrap();
        let p_next = nth_prime(n + 1, &Options::default()).unwrap();
        prop_assert!(p_next > p_n, "p_{} = {} >= p_{} = {}", n + 1, p_next, n, p_n);
    }

    /// Verifies the Regular and Segmented strategies agree with Auto dispatch
    /// for small n, where both are well within their comfort range.
    #[test]
    fn prop_regular_and_segmented_agree_with_auto(
        n in 0u64..5000,
    ) {
        let auto = nth_prime(n, &Options::default()).unwrap();
        let regular = nth_prime(n, &Options { method: Method::Regular, ..Options::default() }).unwrap();
        let segmented = nth_prime(n, &Options { method: Method::Segmented, ..Options::default() }).unwrap();
        prop_assert_eq!(auto, regular);
        prop_assert_eq!(auto, segmented);
    }
}
