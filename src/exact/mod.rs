//! Exact maximum clique solvers.
//!
//! Every solver here returns a maximum clique; they differ only in how far
//! they scale.
//!
//! - [`BruteForce`]: lexicographic subset enumeration, `Θ(2^n)`
//! - [`Backtracking`]: branch-and-bound over a degree ordering
//! - [`BitmaskDp`]: subset DP, bounded by a vertex ceiling
//! - [`DivideConquer`]: per-component dispatch to the above
//!
//! The fixed-size variants [`find_k_clique`] and [`brute_force_k_clique`]
//! answer "is there a clique of exactly `k` vertices".

mod backtracking;
mod bitmask_dp;
mod brute_force;
mod divide_conquer;

pub use backtracking::{find_k_clique, BacktrackResult, Backtracking};
pub use bitmask_dp::{BitmaskDp, BitmaskDpConfig, MAX_SUPPORTED_VERTICES};
pub use brute_force::{brute_force_k_clique, BruteForce};
pub use divide_conquer::{DivideConquer, DivideConquerConfig, DivideConquerResult};
