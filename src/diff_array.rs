//! Difference array structure for O(1) range-add updates
//!
//! Maintains a delta table `d` of length n + 1. Adding `v` to the half-open
//! interval `[l, r)` touches exactly two entries:
//!
//! ```text
//! d[l] += v
//! d[r] -= v
//! ```
//!
//! The extra slot at index n is a sentinel: when an update reaches the end
//! of the array (`r == n`), the closing subtraction lands there and is never
//! read back, since materialization only accumulates `d[0..n]`.

use std::fmt;

use num_traits::Num;

/// Difference array over a fixed-size one-dimensional array
///
/// Each [`range_add`](DiffArray::range_add) costs O(1) regardless of the
/// interval width; [`build`](DiffArray::build) reconstructs the final array
/// in one O(n) accumulation pass. `build` is a pure read, so it can be
/// interleaved with further updates to observe incremental states.
#[derive(Clone)]
pub struct DiffArray<T> {
    /// Number of logical elements
    n: usize,

    /// Delta table of size n + 1, including the sentinel slot at index n
    diff: Vec<T>,
}

impl<T> DiffArray<T>
where
    T: Copy + Num,
{
    /// Creates a difference array of size n with all elements zero
    pub fn new(n: usize) -> Self {
        Self {
            n,
            diff: vec![T::zero(); n + 1],
        }
    }

    /// Resets to size n, discarding all recorded updates
    ///
    /// Complexity: O(n).
    pub fn reset(&mut self, n: usize) {
        self.n = n;
        self.diff.clear();
        self.diff.resize(n + 1, T::zero());
    }

    /// Adds `delta` to every element in the half-open interval `[l, r)`
    ///
    /// `l == r` records an update with no effect. `r == len()` is valid:
    /// the closing subtraction lands on the sentinel slot.
    ///
    /// Complexity: O(1).
    ///
    /// # Panics
    ///
    /// Panics if `l > r` or `r > len()`.
    pub fn range_add(&mut self, l: usize, r: usize, delta: T) {
        assert!(l <= r, "Range start {} exceeds range end {}", l, r);
        assert!(
            r <= self.n,
            "Range end {} out of bounds (len = {})",
            r,
            self.n
        );

        self.diff[l] = self.diff[l] + delta;
        self.diff[r] = self.diff[r] - delta;
    }

    /// Materializes the array after all updates recorded so far
    ///
    /// Produces a fresh vector of length n by accumulating the delta table;
    /// the sentinel slot is excluded. Internal state is untouched, so the
    /// result reflects updates recorded up to this call and further updates
    /// may follow.
    ///
    /// Complexity: O(n).
    pub fn build(&self) -> Vec<T> {
        let mut out = Vec::with_capacity(self.n);

        let mut running = T::zero();
        for i in 0..self.n {
            running = running + self.diff[i];
            out.push(running);
        }

        out
    }

    /// Returns the number of logical elements
    pub fn len(&self) -> usize {
        self.n
    }

    /// Returns true if the logical size is zero
    pub fn is_empty(&self) -> bool {
        self.n == 0
    }

    /// Exposes the internal delta table of size n + 1, sentinel included
    ///
    /// Mainly useful for diagnostics and testing.
    pub fn diff(&self) -> &[T] {
        &self.diff
    }
}

impl<T: Copy + Num> Default for DiffArray<T> {
    fn default() -> Self {
        Self::new(0)
    }
}

impl<T: fmt::Debug + Copy + Num> fmt::Debug for DiffArray<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "DiffArray {{")?;
        writeln!(f, "  len: {}", self.n)?;

        let max_entries = 8.min(self.diff.len());
        if max_entries > 0 {
            write!(f, "  diff: ")?;
            for d in &self.diff[..max_entries] {
                write!(f, "{:?} ", d)?;
            }
            if self.diff.len() > max_entries {
                write!(f, "... ({} more)", self.diff.len() - max_entries)?;
            }
            writeln!(f)?;
        }

        write!(f, "}}")
    }
}
