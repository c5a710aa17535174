//! In-place sorting of name+id records with the algorithm and comparison key
//! chosen at runtime from a closed set: two O(n²) strategies (insertion sort,
//! selection sort) times two keys (name, id), dispatched through a `match`
//! with the comparator passed along as a plain function value.

mod insertion_sort;
mod record;
mod selection_sort;
mod strategy;
mod util;

pub use record::{less_by_id, less_by_name, Record};
pub use strategy::{Algorithm, SelectionError, SortKey, Strategy};

use insertion_sort::insertion_sort;
use selection_sort::selection_sort;

pub(crate) trait Less<T>: Fn(&T, &T) -> bool {}
impl<T, F: Fn(&T, &T) -> bool> Less<T> for F {}

/// Sorts `records` in place with the chosen algorithm and comparison key.
///
/// Both algorithms leave the slice non-decreasing under the chosen key and
/// preserve the record multiset. Insertion sort additionally keeps records
/// with equal keys in their input order.
#[inline]
pub fn sort(records: &mut [Record], algorithm: Algorithm, key: SortKey) {
    let is_less = key.is_less();
    match algorithm {
        Algorithm::Insertion => insertion_sort(records, &is_less),
        Algorithm::Selection => selection_sort(records, &is_less),
    }
    debug_assert!(util::is_sorted_by_less(records, &is_less));
}
