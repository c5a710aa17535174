use crate::Less;

/// Lifts an `is_less` predicate into a full `Ordering` comparison, for use
/// with `sort_by` and friends.
#[macro_export]
macro_rules! is_less_to_compare {
    ( $x:ident ) => {{
        |a, b| {
            if $x(a, b) {
                std::cmp::Ordering::Less
            } else if $x(b, a) {
                std::cmp::Ordering::Greater
            } else {
                std::cmp::Ordering::Equal
            }
        }
    }};
}

#[macro_export]
macro_rules! debug {
    ($($x:tt)*) => {
        {
            #[cfg(debug_assertions)]
            {
                std::println!("{:?}", $($x)*);
            }
        }
    };
}

/// True iff no element of `v` compares strictly less than its predecessor.
pub(crate) fn is_sorted_by_less<T, F>(v: &[T], is_less: &F) -> bool
where
    F: Less<T>,
{
    v.is_sorted_by(|a, b| !is_less(b, a))
}
