//! In-place partition sort.
//!
//! Hoare-style two-pointer partition around the middle element of each
//! sub-range. The pivot is tracked by index while it moves through swaps, so
//! elements are never cloned.
//!
//! After a partition pass `high < low`, everything in `[lo, high]` compares
//! `<=` the pivot and everything in `[low, hi]` compares `>=` it. The first
//! pass always swaps at least once (both pointers stop on the pivot at the
//! latest), so `low > lo` and `high < hi`: both sub-ranges are strictly
//! smaller than the range being sorted, which bounds the recursion. The
//! smaller side is recursed and the larger one is looped.

use std::cmp::Ordering;

/// Sort `items` in place with `cmp`. Not stable.
pub fn partition_sort<T, F>(items: &mut [T], mut cmp: F)
where
    F: FnMut(&T, &T) -> Ordering,
{
    if items.len() < 2 {
        return;
    }
    sort_range(items, 0, items.len() as isize - 1, &mut cmp);
}

fn sort_range<T, F>(items: &mut [T], mut lo: isize, mut hi: isize, cmp: &mut F)
where
    F: FnMut(&T, &T) -> Ordering,
{
    while lo < hi {
        let (high, low) = partition(items, lo, hi, cmp);

        if high - lo < hi - low {
            sort_range(items, lo, high, cmp);
            lo = low;
        } else {
            sort_range(items, low, hi, cmp);
            hi = high;
        }
    }
}

/// Partition `[lo, hi]`, returning the final `(high, low)` pointers.
fn partition<T, F>(items: &mut [T], lo: isize, hi: isize, cmp: &mut F) -> (isize, isize)
where
    F: FnMut(&T, &T) -> Ordering,
{
    let mut pivot = (lo + (hi - lo) / 2) as usize;
    let mut low = lo;
    let mut high = hi;

    while low <= high {
        while cmp(&items[low as usize], &items[pivot]) == Ordering::Less {
            low += 1;
        }
        while cmp(&items[high as usize], &items[pivot]) == Ordering::Greater {
            high -= 1;
        }
        if low <= high {
            let (l, h) = (low as usize, high as usize);
            items.swap(l, h);
            if pivot == l {
                pivot = h;
            } else if pivot == h {
                pivot = l;
            }
            low += 1;
            high -= 1;
        }
    }

    (high, low)
}
