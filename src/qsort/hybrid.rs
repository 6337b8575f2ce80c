use crate::progress::{ProgressSink, Silent};

use super::{INSERTION_THRESHOLD, NSTACK};

/// Sorts `v` in place into non-decreasing order.
pub fn sort(v: &mut [i32]) {
    sort_with(v, &mut Silent);
}

/// Sorts `v` in place, reporting each insertion-sort pass to `sink`.
pub fn sort_with(v: &mut [i32], sink: &mut dyn ProgressSink) {
    if v.len() < 2 {
        return;
    }

    // Pending regions as pairs of inclusive bounds. Indexing panics if a
    // push ever exceeds NSTACK, which cannot happen while the larger half
    // is always the one deferred.
    let mut stack = [(0usize, 0usize); NSTACK];
    let mut top = 0;

    let mut lo = 0;
    let mut hi = v.len() - 1;

    loop {
        if hi - lo < INSERTION_THRESHOLD {
            insertion_sort(&mut v[lo..=hi]);
            sink.insertion_pass();

            if top == 0 {
                break;
            }
            top -= 1;
            (lo, hi) = stack[top];
        } else {
            // Median of the first, middle and last elements becomes the
            // pivot, parked at lo + 1. The boundary elements end up as
            // sentinels: v[lo] <= v[lo + 1] <= v[hi].
            let mid = lo + (hi - lo) / 2;
            v.swap(mid, lo + 1);
            if v[lo] > v[hi] {
                v.swap(lo, hi);
            }
            if v[lo + 1] > v[hi] {
                v.swap(lo + 1, hi);
            }
            if v[lo] > v[lo + 1] {
                v.swap(lo, lo + 1);
            }

            let pivot = v[lo + 1];
            let mut i = lo + 1;
            let mut j = hi;
            loop {
                // Scan up for an element >= pivot, down for one <= pivot.
                // The sentinels keep both scans inside the region.
                loop {
                    i += 1;
                    if v[i] >= pivot {
                        break;
                    }
                }
                loop {
                    j -= 1;
                    if v[j] <= pivot {
                        break;
                    }
                }
                if j < i {
                    break;
                }
                v.swap(i, j);
            }

            // Drop the pivot into its final slot.
            v[lo + 1] = v[j];
            v[j] = pivot;

            // Defer the larger side, keep working on the smaller one.
            if hi - i + 1 >= j - lo {
                stack[top] = (i, hi);
                hi = j - 1;
            } else {
                stack[top] = (lo, j - 1);
                lo = i;
            }
            top += 1;
        }
    }
}

/// Backward-scanning insertion sort: shift elements one slot right until a
/// value <= the key turns up or the region start is reached.
fn insertion_sort(v: &mut [i32]) {
    for i in 1..v.len() {
        let value = v[i];
        let mut j = i;
        while j > 0 && v[j - 1] > value {
            v[j] = v[j - 1];
            j -= 1;
        }
        v[j] = value;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn insertion_sort_small_region() {
        let mut v = [4, -1, 4, 0, 3];
        insertion_sort(&mut v);
        assert_eq!(v, [-1, 0, 3, 4, 4]);
    }

    #[test]
    fn trivial_lengths_need_no_comparisons() {
        sort(&mut []);

        let mut one = [9];
        sort(&mut one);
        assert_eq!(one, [9]);
    }
}
