/// Sorts `v` in place using selection sort: *O*(*n*^2) comparisons always,
/// at most n-1 swaps.
///
/// Orders ascending under `is_less`. Each pass swaps the first minimum of the
/// unsorted tail into place; a position is only touched when a strictly
/// smaller element exists behind it.
pub(crate) fn selection_sort<T, F>(v: &mut [T], is_less: &F)
where
    F: Fn(&T, &T) -> bool,
{
    let n = v.len();
    if n < 2 {
        return;
    }
    for i in 0..n - 1 {
        let mut min_index = i;
        for j in i + 1..n {
            if is_less(&v[j], &v[min_index]) {
                min_index = j;
            }
        }
        if min_index != i {
            v.swap(i, min_index);
        }
    }
}
