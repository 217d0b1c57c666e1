use std::collections::BTreeSet;

/// Returns the divisors of `n` found by naive trial division, ascending and
/// duplicate-free.
///
/// The loop keeps a working remainder and a candidate divisor starting at 2.
/// When the candidate divides the remainder, the remainder is divided and the
/// same candidate is tried again; on a miss the remainder is reset to `n` and
/// the candidate advances by one. The loop stops once the candidate is no
/// longer below the remainder. Resetting to `n` on every miss is what makes
/// the per-candidate cost proportional to `n`, and that cost profile is the
/// whole point of the sequential-vs-parallel comparison, so it must not be
/// replaced with a sqrt(n) scan.
pub fn enumerate_divisors(n: u64) -> Vec<u64> {
    // The loop guard fails immediately for n <= 1; short-circuit to the seed
    // set so the boundary behavior is explicit rather than incidental.
    if n == 0 {
        return vec![0, 1];
    }
    if n == 1 {
        return vec![1];
    }

    // Quotients and candidate hits land in one ordered set; only their
    // sorted union is ever observed.
    let mut seen = BTreeSet::from([1, n]);

    let mut remainder = n;
    let mut candidate = 2;

    while candidate < remainder {
        if remainder % candidate == 0 {
            remainder /= candidate;
            seen.insert(remainder);
            seen.insert(candidate);
        } else {
            remainder = n;
            candidate += 1;
        }
    }

    seen.into_iter().collect()
}
