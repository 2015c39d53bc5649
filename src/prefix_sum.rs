//! Prefix sum structure for O(1) range-sum queries
//!
//! Builds a cumulative table `p` of length n + 1 from an input array `a`:
//!
//! ```text
//! p[0]     = 0
//! p[i + 1] = p[i] + a[i]
//! ```
//!
//! The sum over the half-open interval `[l, r)` is then `p[r] - p[l]`.

use std::fmt;

use num_traits::Num;

/// Prefix sums over a one-dimensional array
///
/// After an O(n) [`build`](PrefixSum::build), any range sum is answered in
/// O(1) by subtracting two entries of the internal cumulative table. The
/// table is immutable between builds; rebuilding replaces all state.
#[derive(Clone)]
pub struct PrefixSum<T> {
    /// Cumulative table of size n + 1; entry i holds the sum of the first
    /// i input values, so entry 0 is always zero
    prefix: Vec<T>,
}

impl<T> PrefixSum<T>
where
    T: Copy + Num,
{
    /// Creates an empty prefix sum (size 0, nothing built yet)
    ///
    /// The internal table starts as the single zero entry, so queries over
    /// the empty range are already valid.
    pub fn new() -> Self {
        Self {
            prefix: vec![T::zero()],
        }
    }

    /// Builds a prefix sum directly from input values
    ///
    /// Equivalent to `new()` followed by `build(values)`.
    pub fn from_values(values: &[T]) -> Self {
        let mut ps = Self::new();
        ps.build(values);
        ps
    }

    /// Builds the cumulative table from input values, replacing all state
    ///
    /// Total over any finite slice, including the empty one. Values are
    /// copied in; the structure holds no reference to the caller's slice.
    ///
    /// Complexity: O(n).
    pub fn build(&mut self, values: &[T]) {
        self.prefix.clear();
        self.prefix.reserve(values.len() + 1);

        let mut running = T::zero();
        self.prefix.push(running);
        for &v in values {
            running = running + v;
            self.prefix.push(running);
        }
    }

    /// Returns the sum of values in the half-open interval `[l, r)`
    ///
    /// The empty interval `l == r` sums to zero.
    ///
    /// Complexity: O(1).
    ///
    /// # Panics
    ///
    /// Panics if `l > r` or `r > len()`.
    pub fn range_sum(&self, l: usize, r: usize) -> T {
        assert!(l <= r, "Range start {} exceeds range end {}", l, r);
        assert!(
            r <= self.len(),
            "Range end {} out of bounds (len = {})",
            r,
            self.len()
        );

        self.prefix[r] - self.prefix[l]
    }

    /// Returns the number of original input elements (0 if never built)
    pub fn len(&self) -> usize {
        self.prefix.len() - 1
    }

    /// Returns true if no elements have been ingested
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Exposes the internal cumulative table of size n + 1
    ///
    /// Mainly useful for diagnostics and testing.
    pub fn prefix(&self) -> &[T] {
        &self.prefix
    }
}

impl<T: Copy + Num> Default for PrefixSum<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: fmt::Debug + Copy + Num> fmt::Debug for PrefixSum<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "PrefixSum {{")?;
        writeln!(f, "  len: {}", self.len())?;

        let max_entries = 8.min(self.prefix.len());
        if max_entries > 0 {
            write!(f, "  prefix: ")?;
            for p in &self.prefix[..max_entries] {
                write!(f, "{:?} ", p)?;
            }
            if self.prefix.len() > max_entries {
                write!(f, "... ({} more)", self.prefix.len() - max_entries)?;
            }
            writeln!(f)?;
        }

        write!(f, "}}")
    }
}
