/// Iterative hybrid quicksort after the formulation in
/// [Numerical Recipes in C](http://numerical.recipes/): median-of-three
/// pivoting, an explicit stack of pending regions instead of recursion, and
/// insertion sort once a region gets small.
pub mod hybrid;

pub use hybrid::{sort, sort_with};

/// Region length below which partitioning hands over to insertion sort.
pub const INSERTION_THRESHOLD: usize = 10;

/// Capacity of the pending-region stack, in `(lo, hi)` pairs. The larger
/// half of every split is deferred and the smaller one processed first, so
/// the stack never holds more than `log2(len)` pairs; one pair per pointer
/// bit covers any addressable slice.
pub const NSTACK: usize = usize::BITS as usize;
