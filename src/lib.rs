//! # Nthprime — Core Library
//!
//! Computes the n-th prime number (0-based: n = 0 -> 2) for indices ranging
//! from 0 up to at least 10^10. The hard engineering lives in a three-tier
//! numeric kernel that dispatches among a contiguous odds-only sieve, a
//! bounded-memory segmented sieve, and a sublinear "count-then-zoom" locator
//! built on the Lucy_Hedgehog pi(x) recurrence.
//!
//! ## Module Organization
//!
//! - [`bounds`] — Dusart analytic upper/lower bounds for the k-th prime,
//!   used to size sieves and seed binary search.
//! - [`odds`] — odds-only sieve of Eratosthenes up to a 32-bit limit; also
//!   the source of every base-prime list consumed elsewhere in the crate.
//! - [`segment`] — bounded-memory segmented sieve over an arbitrary `[lo,
//!   hi]` window, given base primes covering `floor(sqrt(hi))`.
//! - [`lucy`] — the Lucy_Hedgehog pi(x) recurrence, O(x^(3/4)) time and
//!   O(sqrt(x)) space.
//! - [`locator`] — [`locator::nth_prime`], the crate's single public entry
//!   point; dispatches to the Regular, Segmented, or PrimeCounting strategy.
//! - [`error`] — [`error::NthPrimeError`], the typed error surface.
//! - [`bits`] — the packed bit buffer ([`bits::BitSieve`]) every sieve in
//!   this crate is built on.
//!
//! ## Design Philosophy
//!
//! Single-threaded, synchronous, no process-global mutable state: every call
//! to [`locator::nth_prime`] owns its allocations (base-prime vector, bit
//! buffers, Lucy `S` array) and releases them on return. The only observable
//! side effect is the optional `logger` in [`locator::Options`], invoked
//! synchronously from the calling thread with purely advisory messages — it
//! never affects the returned result.
//!
//! This crate has no command-line driver, test-fixture loading, or console
//! reporting of its own. Those live in the `nthprime` binary (`src/main.rs`
//! and `src/config.rs`), which consumes this pure numeric interface.

pub mod bits;
pub mod bounds;
pub mod config;
pub mod error;
pub mod locator;
pub mod lucy;
pub mod odds;
pub mod segment;

pub use error::NthPrimeError;
pub use locator::{nth_prime, nth_prime_default, Method, Options};
pub use lucy::{prime_count, prime_count_auto};
