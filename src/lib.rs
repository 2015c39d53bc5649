//! # prefix-tools: Prefix Sums and Difference Arrays
//!
//! Two small preprocessing structures for one-dimensional numeric arrays:
//!
//! - [`PrefixSum`]: answers range-sum queries in O(1) after an O(n) build.
//! - [`DiffArray`]: records range-add updates in O(1) each and materializes
//!   the resulting array in O(n).
//!
//! ## Overview
//!
//! Both structures are independent of each other and share only their
//! conventions:
//!
//! - All intervals are half-open `[l, r)`: `l` inclusive, `r` exclusive.
//! - Element types are generic over `num_traits::Num`, so integers, floats,
//!   and any other ring-like numeric type work. No overflow checking is
//!   performed; arithmetic behaves however `T` behaves.
//! - Interval preconditions (`l <= r <= len()`) are checked with assertions
//!   and violations panic. Validation happens before any mutation, so a
//!   rejected call leaves the structure unchanged.
//!
//! ## Usage
//!
//! Range sums over a fixed array:
//!
//! ```
//! use prefix_tools::PrefixSum;
//!
//! let ps = PrefixSum::from_values(&[1, 2, 3, 4, 5]);
//! assert_eq!(ps.range_sum(1, 4), 9); // 2 + 3 + 4
//! assert_eq!(ps.range_sum(0, 5), 15);
//! ```
//!
//! Batched range updates materialized at the end:
//!
//! ```
//! use prefix_tools::DiffArray;
//!
//! let mut d = DiffArray::new(5);
//! d.range_add(1, 4, 3);
//! d.range_add(0, 2, 2);
//! assert_eq!(d.build(), vec![2, 5, 3, 3, 0]);
//! ```

pub mod diff_array;
pub mod prefix_sum;

// Re-export primary components
pub use diff_array::DiffArray;
pub use prefix_sum::PrefixSum;

/// Version information for the prefix-tools library
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
