/// Single pass over adjacent pairs; the benchmark's only correctness check.
pub fn is_sorted(v: &[i32]) -> bool {
    v.windows(2).all(|w| w[0] <= w[1])
}
