//! Typed errors for the n-th prime kernel.
//!
//! A plain enum with named fields for diagnostic data, a hand-written
//! [`Display`](std::fmt::Display) impl, and [`std::error::Error`] — no
//! `thiserror` macro, since each variant's message needs custom formatting
//! rather than a derivable template.

/// Errors raised by [`crate::locator::nth_prime`] and the components it calls.
///
/// No error is recovered locally: any error terminates `nth_prime` immediately.
/// Advisory conditions (e.g. a forced method outside its comfort range) are
/// never errors — they go through [`crate::locator::Options::logger`] instead.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NthPrimeError {
    /// `n` or an option field was out of its valid domain.
    InvalidArgument { message: String },
    /// The regular path's working limit exceeded the 32-bit sieve cap
    /// (`u32::MAX - 1`) even after geometric growth. The caller should
    /// re-invoke with `method = PrimeCounting`.
    SieveLimitOverflow { requested: u64 },
    /// Count-and-zoom's expanded-window local resolution did not locate the
    /// target prime. Indicates a bounds or Lucy-counter correctness bug.
    SearchExhausted {
        n: u64,
        estimate: u64,
        start: u64,
        end: u64,
    },
    /// `opts.method` did not name one of the four recognized variants.
    /// Unreachable through [`crate::locator::Method`] itself (a proper Rust
    /// enum cannot hold an unrecognized discriminant) — this variant exists
    /// for callers that parse a method name from text, e.g. the CLI's
    /// `--method` flag.
    UnknownMethod { value: String },
}

impl std::fmt::Display for NthPrimeError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            NthPrimeError::InvalidArgument { message } => {
                write!(f, "invalid argument: {message}")
            }
            NthPrimeError::SieveLimitOverflow { requested } => write!(
                f,
                "sieve limit overflow: requested upper bound {requested} exceeds the 32-bit sieve cap; retry with method = PrimeCounting"
            ),
            NthPrimeError::SearchExhausted {
                n,
                estimate,
                start,
                end,
            } => write!(
                f,
                "search exhausted: could not locate prime n={n} near estimate={estimate} within window [{start}, {end}]"
            ),
            NthPrimeError::UnknownMethod { value } => {
                write!(f, "unknown method: {value:?} (expected auto, regular, segmented, or prime-counting)")
            }
        }
    }
}

impl std::error::Error for NthPrimeError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_messages_are_non_empty() {
        let errs = [
            NthPrimeError::InvalidArgument {
                message: "n must be non-negative".into(),
            },
            NthPrimeError::SieveLimitOverflow { requested: 1 << 40 },
            NthPrimeError::SearchExhausted {
                n: 10,
                estimate: 100,
                start: 50,
                end: 200,
            },
            NthPrimeError::UnknownMethod {
                value: "bogus".into(),
            },
        ];
        for e in errs {
            assert!(!e.to_string().is_empty());
        }
    }
}
