//! Out-of-place sorting routines driven by a comparator.
//!
//! Every routine leaves its input untouched and returns a freshly sorted
//! `Vec`. Apart from [`quick_sort_by`], all of them are stable: elements
//! that compare equal keep their input order.

use std::cmp::Ordering;

use log::trace;

/// Length of the runs [`tim_sort_by`] sorts by insertion before merging.
pub const MIN_RUN: usize = 32;

/// The position at which `elem` can be inserted into the already sorted
/// `sorted` while keeping it sorted. Equal elements are passed over, so
/// the new element lands after them.
pub fn insert_index<T, F>(sorted: &[T], elem: &T, mut cmp: F) -> usize
where
    F: FnMut(&T, &T) -> Ordering,
{
    sorted.partition_point(|probe| cmp(probe, elem) != Ordering::Greater)
}

/// Insertion sort into a new vector.
pub fn insertion_sort_by<T, F>(items: &[T], mut cmp: F) -> Vec<T>
where
    T: Clone,
    F: FnMut(&T, &T) -> Ordering,
{
    let mut sorted: Vec<T> = Vec::with_capacity(items.len());
    for elem in items {
        let idx = insert_index(&sorted, elem, &mut cmp);
        sorted.insert(idx, elem.clone());
    }
    sorted
}

/// Merges two sorted slices. On ties the element from `left` goes first.
pub fn merge_by<T, F>(left: &[T], right: &[T], mut cmp: F) -> Vec<T>
where
    T: Clone,
    F: FnMut(&T, &T) -> Ordering,
{
    let mut merged = Vec::with_capacity(left.len() + right.len());
    let (mut i, mut j) = (0, 0);
    while i < left.len() && j < right.len() {
        if cmp(&right[j], &left[i]) == Ordering::Less {
            merged.push(right[j].clone());
            j += 1;
        } else {
            merged.push(left[i].clone());
            i += 1;
        }
    }
    merged.extend_from_slice(&left[i..]);
    merged.extend_from_slice(&right[j..]);
    merged
}

/// Top-down merge sort.
pub fn merge_sort_by<T, F>(items: &[T], mut cmp: F) -> Vec<T>
where
    T: Clone,
    F: FnMut(&T, &T) -> Ordering,
{
    fn sort<T: Clone>(items: &[T], cmp: &mut dyn FnMut(&T, &T) -> Ordering) -> Vec<T> {
        if items.len() <= 1 {
            return items.to_vec();
        }
        let (left, right) = items.split_at(items.len() / 2);
        let left = sort(left, cmp);
        let right = sort(right, cmp);
        merge_by(&left, &right, &mut *cmp)
    }

    sort(items, &mut cmp)
}

/// Quick sort with a median-of-three pivot. Not stable.
///
/// Only the smaller partition is sorted recursively, so the recursion depth
/// stays logarithmic in the input length.
pub fn quick_sort_by<T, F>(items: &[T], mut cmp: F) -> Vec<T>
where
    T: Clone,
    F: FnMut(&T, &T) -> Ordering,
{
    let mut sorted = items.to_vec();
    quick_sort_slice(&mut sorted, &mut cmp);
    sorted
}

fn quick_sort_slice<T>(mut slice: &mut [T], cmp: &mut dyn FnMut(&T, &T) -> Ordering) {
    while slice.len() > 1 {
        let pivot = partition(slice, cmp);
        let (left, right) = std::mem::take(&mut slice).split_at_mut(pivot);
        let right = &mut right[1..];
        if left.len() < right.len() {
            quick_sort_slice(left, cmp);
            slice = right;
        } else {
            quick_sort_slice(right, cmp);
            slice = left;
        }
    }
}

// Moves the median of the first, middle and last elements to the end, then
// partitions around it. Returns the pivot's final position.
fn partition<T>(slice: &mut [T], cmp: &mut dyn FnMut(&T, &T) -> Ordering) -> usize {
    let last = slice.len() - 1;
    let mid = last / 2;
    if cmp(&slice[mid], &slice[0]) == Ordering::Less {
        slice.swap(mid, 0);
    }
    if cmp(&slice[last], &slice[0]) == Ordering::Less {
        slice.swap(last, 0);
    }
    if cmp(&slice[mid], &slice[last]) == Ordering::Less {
        slice.swap(mid, last);
    }

    let mut store = 0;
    for idx in 0..last {
        if cmp(&slice[idx], &slice[last]) == Ordering::Less {
            slice.swap(idx, store);
            store += 1;
        }
    }
    slice.swap(store, last);
    store
}

/// Sorts runs of [`MIN_RUN`] elements by insertion, then merges
/// neighbouring runs pairwise until one remains.
pub fn tim_sort_by<T, F>(items: &[T], mut cmp: F) -> Vec<T>
where
    T: Clone,
    F: FnMut(&T, &T) -> Ordering,
{
    let mut runs: Vec<Vec<T>> = items
        .chunks(MIN_RUN)
        .map(|run| insertion_sort_by(run, &mut cmp))
        .collect();
    trace!("tim sort: {} runs of up to {}", runs.len(), MIN_RUN);

    while runs.len() > 1 {
        let mut merged = Vec::with_capacity((runs.len() + 1) / 2);
        let mut pairs = runs.into_iter();
        while let Some(left) = pairs.next() {
            match pairs.next() {
                Some(right) => merged.push(merge_by(&left, &right, &mut cmp)),
                None => merged.push(left),
            }
        }
        runs = merged;
    }
    runs.pop().unwrap_or_default()
}

/// [`insertion_sort_by`] in ascending order.
pub fn insertion_sort<T: Ord + Clone>(items: &[T]) -> Vec<T> {
    insertion_sort_by(items, T::cmp)
}

/// [`merge_sort_by`] in ascending order.
pub fn merge_sort<T: Ord + Clone>(items: &[T]) -> Vec<T> {
    merge_sort_by(items, T::cmp)
}

/// [`quick_sort_by`] in ascending order.
pub fn quick_sort<T: Ord + Clone>(items: &[T]) -> Vec<T> {
    quick_sort_by(items, T::cmp)
}

/// [`tim_sort_by`] in ascending order.
pub fn tim_sort<T: Ord + Clone>(items: &[T]) -> Vec<T> {
    tim_sort_by(items, T::cmp)
}

#[cfg(test)]
mod tests {
    use proptest::prelude::*;

    use crate::sort::*;

    #[test]
    fn test_insert_index() {
        let sorted = [1, 3, 5, 7];
        assert_eq!(insert_index(&sorted, &4, i32::cmp), 2);
        assert_eq!(insert_index(&sorted, &0, i32::cmp), 0);
        assert_eq!(insert_index(&sorted, &9, i32::cmp), 4);
        assert_eq!(insert_index(&sorted, &3, i32::cmp), 2);
        assert_eq!(insert_index(&[], &3, i32::cmp), 0);
    }

    #[test]
    fn test_examples() {
        assert_eq!(insertion_sort(&[4, 2, 5, 1, 3]), vec![1, 2, 3, 4, 5]);
        assert_eq!(
            merge_sort(&[38, 27, 43, 3, 9, 82, 10]),
            vec![3, 9, 10, 27, 38, 43, 82]
        );
        assert_eq!(merge_by(&[1, 4, 7], &[2, 5, 6, 8], i32::cmp), vec![1, 2, 4, 5, 6, 7, 8]);
        assert_eq!(quick_sort(&[10, 7, 8, 9, 1, 5]), vec![1, 5, 7, 8, 9, 10]);
        assert_eq!(tim_sort(&[5, 21, 7, 23, 19, 10, 12]), vec![5, 7, 10, 12, 19, 21, 23]);
    }

    #[test]
    fn test_descending() {
        let desc = |a: &i32, b: &i32| b.cmp(a);
        assert_eq!(merge_sort_by(&[1, 3, 2], desc), vec![3, 2, 1]);
        assert_eq!(insertion_sort_by(&[1, 3, 2], desc), vec![3, 2, 1]);
    }

    #[test]
    fn test_stable() {
        let items: Vec<(u8, char)> = vec![(2, 'a'), (1, 'b'), (2, 'c'), (1, 'd'), (0, 'e')];
        let by_key = |a: &(u8, char), b: &(u8, char)| a.0.cmp(&b.0);
        let expected = vec![(0, 'e'), (1, 'b'), (1, 'd'), (2, 'a'), (2, 'c')];
        assert_eq!(insertion_sort_by(&items, by_key), expected);
        assert_eq!(merge_sort_by(&items, by_key), expected);
        assert_eq!(tim_sort_by(&items, by_key), expected);
    }

    #[test]
    fn test_quick_sort_large_ordered_input() {
        let ascending: Vec<u32> = (0..200_000).collect();
        let descending: Vec<u32> = ascending.iter().rev().copied().collect();
        assert_eq!(quick_sort(&ascending), ascending);
        assert_eq!(quick_sort(&descending), ascending);
    }

    #[test]
    fn test_input_untouched() {
        let items = vec![3, 1, 2];
        let _ = quick_sort(&items);
        assert_eq!(items, vec![3, 1, 2]);
    }

    proptest! {
        #[test]
        fn all_sorts_agree_with_std(items in prop::collection::vec(any::<i16>(), 0..200)) {
            let mut expected = items.clone();
            expected.sort();
            prop_assert_eq!(&insertion_sort(&items), &expected);
            prop_assert_eq!(&merge_sort(&items), &expected);
            prop_assert_eq!(&quick_sort(&items), &expected);
            prop_assert_eq!(&tim_sort(&items), &expected);
        }

        #[test]
        fn tim_sort_is_stable(items in prop::collection::vec((0u8..4, any::<u32>()), 0..100)) {
            let by_key = |a: &(u8, u32), b: &(u8, u32)| a.0.cmp(&b.0);
            let mut expected = items.clone();
            expected.sort_by(by_key);
            prop_assert_eq!(tim_sort_by(&items, by_key), expected);
        }
    }
}
