//! # Locator — Top-Level n-th Prime Dispatcher
//!
//! `nth_prime` is the crate's single public entry point. It picks one of
//! three strategies (regular, segmented, or count-and-zoom) based on `n` and
//! the caller's [`Options`], then drives [`crate::odds`], [`crate::segment`],
//! and [`crate::lucy`] to produce the answer.
//!
//! ## Strategy selection
//!
//! | n range (`Auto`)                    | Strategy       |
//! |--------------------------------------|----------------|
//! | n <= `regular_threshold`             | Regular        |
//! | `regular_threshold` < n <= `prime_counting_threshold` | Segmented |
//! | n > `prime_counting_threshold`        | PrimeCounting  |
//!
//! A forced `method` is always honored; an advisory is logged (never an
//! error) when it looks out of its comfort range.

use crate::bounds::{lower_bound, upper_bound};
use crate::error::NthPrimeError;
use crate::lucy::prime_count;
use crate::odds::{odds_only_sieve, SIEVE_LIMIT_CAP};
use crate::segment::segment_primes;

/// Strategy used to locate the n-th prime.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Method {
    /// Pick Regular, Segmented, or PrimeCounting based on `n` and the
    /// configured thresholds.
    #[default]
    Auto,
    /// Sieve `[0, U(n+1)]` in one pass with [`crate::odds::odds_only_sieve`].
    Regular,
    /// Walk growing windows with [`crate::segment::segment_primes`].
    Segmented,
    /// Binary-search on [`crate::lucy::prime_count`], then resolve locally
    /// with [`crate::segment::segment_primes`].
    PrimeCounting,
}

impl std::str::FromStr for Method {
    type Err = NthPrimeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().replace(['_', '-'], "").as_str() {
            "auto" => Ok(Method::Auto),
            "regular" => Ok(Method::Regular),
            "segmented" => Ok(Method::Segmented),
            "primecounting" => Ok(Method::PrimeCounting),
            _ => Err(NthPrimeError::UnknownMethod { value: s.to_string() }),
        }
    }
}

/// Read-only options bundle for [`nth_prime`]. Never mutated during a call.
///
/// The `logger` field is an optional message sink invoked synchronously from
/// the calling thread; it is purely advisory and never affects the returned
/// result. The core takes it by reference and never extends its lifetime or
/// stores it across calls — callers that want structured logging (e.g. via
/// `tracing`) can route it through a closure (see `nthprime-cli`'s `main.rs`).
pub struct Options<'a> {
    pub method: Method,
    pub segment_size: u64,
    pub regular_threshold: u64,
    pub prime_counting_threshold: u64,
    pub logger: Option<&'a dyn Fn(&str)>,
}

impl<'a> Default for Options<'a> {
    fn default() -> Self {
        Options {
            method: Method::Auto,
            segment_size: 1_000_000,
            regular_threshold: 1_000_000,
            prime_counting_threshold: 10_000_000,
            logger: None,
        }
    }
}

impl<'a> std::fmt::Debug for Options<'a> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Options")
            .field("method", &self.method)
            .field("segment_size", &self.segment_size)
            .field("regular_threshold", &self.regular_threshold)
            .field("prime_counting_threshold", &self.prime_counting_threshold)
            .field("logger", &self.logger.map(|_| "<fn>"))
            .finish()
    }
}

impl<'a> Options<'a> {
    fn log(&self, message: impl AsRef<str>) {
        if let Some(logger) = self.logger {
            logger(message.as_ref());
        }
    }
}

/// Cap on geometric bound growth: never exceed the 32-bit sieve limit.
const GROWTH_FACTOR: f64 = 1.25;

/// Maximum binary-search iterations for count-and-zoom: safe for all n up to
/// 10^10 and well beyond, since U(k) - L(k) is O(k ln k) and each iteration
/// halves the bracket; raising this is harmless, lowering it is not.
const MAX_BISECTION_ITERS: u32 = 50;

/// Compute the 0-based n-th prime (n = 0 -> 2) using default [`Options`].
pub fn nth_prime_default(n: u64) -> Result<u64, NthPrimeError> {
    nth_prime(n, &Options::default())
}

/// Compute the 0-based n-th prime (n = 0 -> 2).
///
/// Dispatches to the Regular, Segmented, or PrimeCounting strategy per
/// `opts.method` (resolving `Auto` against the configured thresholds), and
/// returns a typed error (never a panic) for invalid input or an internal
/// bound/search failure.
pub fn nth_prime(n: u64, opts: &Options) -> Result<u64, NthPrimeError> {
    let method = resolve_method(n, opts);

    match method {
        Method::Regular => find_nth_regular(n, opts),
        Method::Segmented => find_nth_segmented(n, opts),
        Method::PrimeCounting => find_nth_count_and_zoom(n, opts),
        Method::Auto => unreachable!("resolve_method never returns Auto"),
    }
}

fn resolve_method(n: u64, opts: &Options) -> Method {
    match opts.method {
        Method::Auto => {
            if n > opts.prime_counting_threshold {
                Method::PrimeCounting
            } else if n > opts.regular_threshold {
                Method::Segmented
            } else {
                Method::Regular
            }
        }
        forced => {
            let comfortable = match forced {
                Method::Regular => n <= opts.regular_threshold.saturating_mul(4),
                Method::Segmented => n <= opts.prime_counting_threshold.saturating_mul(4),
                Method::PrimeCounting => true,
                Method::Auto => true,
            };
            if !comfortable {
                opts.log(format!(
                    "forced method {forced:?} is outside its comfort range for n={n}; proceeding anyway"
                ));
            }
            forced
        }
    }
}

/// Regular path: sieve `[0, U(n+1)]` in one pass, growing the bound
/// geometrically if it falls short, until the 32-bit sieve cap is exceeded.
fn find_nth_regular(n: u64, opts: &Options) -> Result<u64, NthPrimeError> {
    let k = n + 1;
    let mut ub = upper_bound(k).max(2);

    loop {
        if ub > SIEVE_LIMIT_CAP as u64 {
            return Err(NthPrimeError::SieveLimitOverflow { requested: ub });
        }
        let primes = odds_only_sieve(ub as u32);
        if primes.len() as u64 > n {
            return Ok(primes[n as usize] as u64);
        }
        opts.log(format!(
            "regular path: bound {ub} produced only {} primes for target n={n}, growing",
            primes.len()
        ));
        let grown = (ub as f64 * GROWTH_FACTOR).ceil() as u64;
        ub = grown.max(ub + 1).min(SIEVE_LIMIT_CAP as u64 + 1);
    }
}

/// Segmented path: walk growing `[lo, hi]` windows, regenerating base primes
/// whenever a window needs a larger `floor(sqrt(hi))` than currently covered.
fn find_nth_segmented(n: u64, opts: &Options) -> Result<u64, NthPrimeError> {
    let seg = opts.segment_size.max(1);
    let mut lo: u64 = 2;
    let mut produced: u64 = 0;

    let mut base_limit: u32 = 1024;
    let mut base = odds_only_sieve(base_limit);

    loop {
        let hi = lo + seg - 1;
        let need = ((hi.max(4)) as f64).sqrt() as u64 + 1;
        if (base_limit as u64) < need {
            let grown = (need + 1024).max(base_limit as u64 * 2);
            base_limit = grown.min(i32::MAX as u64 - 1) as u32;
            base = odds_only_sieve(base_limit);
        }

        for p in segment_primes(lo, hi, &base) {
            if produced == n {
                return Ok(p);
            }
            produced += 1;
        }
        lo = hi + 1;
    }
}

/// Count-and-zoom path: binary-search on [`prime_count`] to bracket the
/// target, then resolve exactly with a local segmented sieve.
fn find_nth_count_and_zoom(n: u64, opts: &Options) -> Result<u64, NthPrimeError> {
    let target = n + 1;
    let mut lo = lower_bound(target).max(2);
    let mut hi = upper_bound(target).max(lo + 1);

    let mut base_limit = (hi as f64).sqrt() as u32 + 1;
    let mut base = odds_only_sieve(base_limit);

    opts.log(format!(
        "count-and-zoom: n={n} target={target} initial bracket [{lo}, {hi}]"
    ));

    let mut iters = 0u32;
    while lo < hi {
        if iters >= MAX_BISECTION_ITERS {
            break;
        }
        iters += 1;
        let mid = lo + (hi - lo) / 2;
        let mid_root = (mid as f64).sqrt() as u32 + 1;
        if mid_root > base_limit {
            base_limit = mid_root;
            base = odds_only_sieve(base_limit);
        }
        let count = prime_count(mid, &base);
        if count < target {
            lo = mid + 1;
        } else {
            hi = mid;
        }
    }
    let estimate = lo;
    opts.log(format!("count-and-zoom: binary search converged to estimate={estimate}"));

    if let Some(p) = local_resolve(n, estimate, opts.segment_size, opts, false) {
        return Ok(p);
    }
    let (_, start, end) = local_window(estimate);
    opts.log(format!(
        "count-and-zoom: local window [{start}, {end}] exhausted, expanding"
    ));

    // Expand the local window once before giving up.
    if let Some(p) = local_resolve(n, estimate, opts.segment_size, opts, true) {
        return Ok(p);
    }

    let (_, start, end) = expanded_window(estimate);
    Err(NthPrimeError::SearchExhausted {
        n,
        estimate,
        start,
        end,
    })
}

/// The first-pass local window: `clamp(estimate/10_000, 10_000, 1_000_000)`
/// wide, biased slightly below `estimate` to absorb the binary search's
/// rounding without needing to look further back than forward.
fn local_window(estimate: u64) -> (u64, u64, u64) {
    let window = (estimate / 10_000).clamp(10_000, 1_000_000);
    let start = estimate.saturating_sub(window / 4).max(2);
    let end = estimate + window;
    (window, start, end)
}

/// The expanded-window fallback: `max(10_000_000, estimate/100)` wide,
/// centered on `estimate`. Used once the first-pass window comes up empty,
/// which only happens when the binary search's bracket was unusually loose.
fn expanded_window(estimate: u64) -> (u64, u64, u64) {
    let window = 10_000_000u64.max(estimate / 100);
    let start = estimate.saturating_sub(window / 2).max(2);
    let end = estimate + window;
    (window, start, end)
}

/// Resolve the target exactly by segment-sieving a local window around
/// `estimate`. Returns `None` if the window was exhausted without reaching
/// the target, in which case the caller expands the window and retries once.
fn local_resolve(n: u64, estimate: u64, sub_segment: u64, opts: &Options, expanded: bool) -> Option<u64> {
    let (window, start, end) = if expanded {
        expanded_window(estimate)
    } else {
        local_window(estimate)
    };

    opts.log(format!(
        "count-and-zoom: local resolution window=[{start}, {end}] (size {window}, expanded={expanded})"
    ));

    let root_end = (end as f64).sqrt() as u32 + 1;
    let base = odds_only_sieve(root_end);

    let mut precount = if start > 2 { prime_count(start - 1, &base) } else { 0 };

    let sub = sub_segment.min(100_000).max(1);
    let mut lo = start;
    while lo <= end {
        let hi = (lo + sub - 1).min(end);
        for p in segment_primes(lo, hi, &base) {
            if precount == n {
                opts.log(format!("count-and-zoom: found p_{n} = {p}"));
                return Some(p);
            }
            precount += 1;
        }
        lo = hi + 1;
    }
    None
}
