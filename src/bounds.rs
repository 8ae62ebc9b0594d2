//! # Bounds — Dusart Analytic Bounds for the k-th Prime
//!
//! Closed-form upper and lower estimates for p_k (1-based k-th prime), used
//! both to size [`crate::odds::odds_only_sieve`] up-front and to seed the
//! binary search in [`crate::locator`]'s count-and-zoom path.
//!
//! ## References
//!
//! - Pierre Dusart, "Estimates of Some Functions Over Primes without R.H.",
//!   arXiv:1002.0442, 2010.

/// Upper bound U(k) on the k-th prime (1-based k).
///
/// For all k >= 1, the true p_k satisfies `lower_bound(k) <= p_k <= upper_bound(k)`.
/// If this is ever violated in-run (the bound undershoots), the caller detects
/// the shortage and grows the working limit geometrically — see
/// [`crate::locator`].
pub fn upper_bound(k: u64) -> u64 {
    if k < 6 {
        return 30;
    }
    if k < 100 {
        return 15 * k;
    }
    let k_f = k as f64;
    let ln_k = k_f.ln();
    let ln_ln_k = ln_k.ln();
    let estimate = 1.25 * k_f * (ln_k + ln_ln_k - 1.0 + (ln_ln_k - 2.0) / ln_k);
    estimate.floor() as u64
}

/// Lower bound L(k) on the k-th prime (1-based k).
pub fn lower_bound(k: u64) -> u64 {
    if k < 6 {
        return 2;
    }
    let k_f = k as f64;
    let ln_k = k_f.ln();
    let ln_ln_k = ln_k.ln();
    let estimate = 0.95 * k_f * (ln_k + ln_ln_k - 1.0);
    (estimate.floor() as u64).max(2)
}
