/// Sorts `v` in place using insertion sort, which is *O*(*n*^2) worst-case
/// and *O*(*n*) on already-sorted input.
///
/// Orders ascending under `is_less`. An element moves only while it compares
/// strictly less than its predecessor, so equal keys keep their input order.
pub(crate) fn insertion_sort<T, F>(v: &mut [T], is_less: &F)
where
    F: Fn(&T, &T) -> bool,
{
    for current in 1..v.len() {
        let mut insert = current;
        while insert > 0 && is_less(&v[insert], &v[insert - 1]) {
            v.swap(insert, insert - 1);
            insert -= 1;
        }
    }
}
