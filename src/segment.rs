//! # SegmentSieve — Bounded-Memory Segmented Sieve
//!
//! Sieves a window `[lo, hi]` given a base-prime list covering every prime up
//! to `floor(sqrt(hi))`. Used directly by [`crate::locator`]'s "Segmented"
//! path, and as the final resolution step of the count-and-zoom path once
//! [`crate::lucy::prime_count`] has bracketed the target.

use crate::bits::BitSieve;

/// Returns all primes p with `lo <= p <= hi`, in increasing order.
///
/// # Preconditions
///
/// `2 <= lo <= hi`, and `base_primes` contains every prime `<= floor(sqrt(hi))`
/// as a prefix of the true prime sequence. Violating this precondition is a
/// caller logic bug: the emitted set may then contain composites. In debug
/// builds this is checked with `debug_assert!`.
pub fn segment_primes(lo: u64, hi: u64, base_primes: &[u32]) -> Vec<u64> {
    assert!(lo >= 2 && lo <= hi, "segment_primes requires 2 <= lo <= hi");
    debug_assert_base_primes_cover(hi, base_primes);

    let mut out = Vec::new();
    if lo <= 2 {
        out.push(2);
    }

    let lo_odd = if lo <= 2 {
        3
    } else if lo % 2 == 1 {
        lo
    } else {
        lo + 1
    };
    if lo_odd > hi {
        return out;
    }

    let len = ((hi - lo_odd) / 2 + 1) as usize;
    // false means "candidate prime" (i.e. not yet marked composite).
    let mut composite = BitSieve::new_all_clear(len);

    for &p in base_primes {
        if p == 2 {
            continue;
        }
        let p = p as u64;
        if p * p > hi {
            break;
        }
        let mut first = (p * p).max(lo_odd.div_ceil(p) * p);
        if first % 2 == 0 {
            first += p; // keep `first` an odd multiple of p >= lo_odd
        }
        let mut idx = ((first - lo_odd) / 2) as usize;
        let stride = p as usize;
        while idx < len {
            composite.set(idx);
            idx += stride;
        }
    }

    for idx in 0..len {
        if !composite.get(idx) {
            let value = lo_odd + 2 * idx as u64;
            if value >= 3 {
                out.push(value);
            }
        }
    }
    out
}

fn debug_assert_base_primes_cover(hi: u64, base_primes: &[u32]) {
    if !cfg!(debug_assertions) {
        return;
    }
    let need = (hi as f64).sqrt() as u64;
    let last = base_primes.last().copied().unwrap_or(0) as u64;
    if last >= need {
        return;
    }
    // The list's last prime falls short of floor(sqrt(hi)); only a problem if
    // an actual prime lies in the uncovered gap.
    for candidate in (last + 1)..=need {
        debug_assert!(
            !is_prime_trial(candidate),
            "segment_primes precondition violated: base_primes is missing prime {candidate}, needed to cover floor(sqrt({hi})) = {need}"
        );
    }
}

fn is_prime_trial(n: u64) -> bool {
    if n < 2 {
        return false;
    }
    let mut d = 2u64;
    while d * d <= n {
        if n % d == 0 {
            return false;
        }
        d += 1;
    }
    true
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::odds::odds_only_sieve;

    fn base(hi: u64) -> Vec<u32> {
        let need = (hi as f64).sqrt() as u32 + 2;
        odds_only_sieve(need)
    }

    #[test]
    fn matches_full_sieve_small_window() {
        let hi = 200u64;
        let expected = odds_only_sieve(hi as u32);
        let base_primes = base(hi);
        let got = segment_primes(2, hi, &base_primes);
        let expected_u64: Vec<u64> = expected.into_iter().map(|p| p as u64).collect();
        assert_eq!(got, expected_u64);
    }

    #[test]
    fn window_not_starting_at_two() {
        let base_primes = base(1_000);
        let got = segment_primes(500, 600, &base_primes);
        let expected: Vec<u64> = odds_only_sieve(600)
            .into_iter()
            .map(|p| p as u64)
            .filter(|&p| p >= 500)
            .collect();
        assert_eq!(got, expected);
    }

    #[test]
    fn emits_two_only_when_in_range() {
        let base_primes = base(100);
        assert!(segment_primes(2, 10, &base_primes).contains(&2));
        assert!(!segment_primes(3, 10, &base_primes).contains(&2));
    }

    #[test]
    fn ascending_no_duplicates() {
        let base_primes = base(10_000);
        let got = segment_primes(5_000, 10_000, &base_primes);
        for w in got.windows(2) {
            assert!(w[0] < w[1]);
        }
    }

    #[test]
    fn single_point_window_on_a_prime() {
        let base_primes = base(100);
        assert_eq!(segment_primes(11, 11, &base_primes), vec![11]);
        assert_eq!(segment_primes(12, 12, &base_primes), Vec::<u64>::new());
    }

    #[test]
    fn even_lo_rounds_up_to_next_odd() {
        let base_primes = base(100);
        let got = segment_primes(8, 12, &base_primes);
        assert_eq!(got, vec![11]);
    }
}
