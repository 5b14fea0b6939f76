//! Ordered sequence comparison.
//!
//! A sequence type implements [`Iterable`] and declares it through
//! [`TypeDescriptor::with_sequence`](crate::TypeDescriptor::with_sequence).
//! Elements are compared in lockstep with the element type's own comparator.

use std::collections::{BTreeSet, LinkedList, VecDeque};
use std::ptr;

use crate::cache::ComparatorCache;
use crate::comparator::{ComparatorRef, NotEqualFn};
use crate::error::Result;
use crate::traits::StructuralEquatable;

/// Ordered iteration over borrowed elements.
///
/// `dyn Iterable<E>` is itself comparable, so different containers holding
/// the same elements in the same order compare equal through it.
///
/// # Example
///
/// ```
/// use std::collections::{LinkedList, VecDeque};
/// use lazyeq_core::{engine, Iterable};
///
/// let a: Vec<i32> = vec![1, 2, 3];
/// let b: VecDeque<i32> = VecDeque::from(vec![1, 2, 3]);
/// let c: LinkedList<i32> = [3, 2, 1].into_iter().collect();
///
/// assert!(engine::equals::<dyn Iterable<i32>>(&a, &b));
/// assert!(!engine::equals::<dyn Iterable<i32>>(&a, &c));
/// ```
pub trait Iterable<E: ?Sized> {
    /// A count that is cheap to obtain, if the container knows it.
    fn count_hint(&self) -> Option<usize> {
        None
    }

    /// Iterates the elements in order.
    fn items(&self) -> Box<dyn Iterator<Item = &E> + '_>;
}

impl<E> Iterable<E> for Vec<E> {
    fn count_hint(&self) -> Option<usize> {
        Some(self.len())
    }

    fn items(&self) -> Box<dyn Iterator<Item = &E> + '_> {
        Box::new(self.iter())
    }
}

impl<E> Iterable<E> for [E] {
    fn count_hint(&self) -> Option<usize> {
        Some(self.len())
    }

    fn items(&self) -> Box<dyn Iterator<Item = &E> + '_> {
        Box::new(self.iter())
    }
}

impl<E, const N: usize> Iterable<E> for [E; N] {
    fn count_hint(&self) -> Option<usize> {
        Some(N)
    }

    fn items(&self) -> Box<dyn Iterator<Item = &E> + '_> {
        Box::new(self.iter())
    }
}

impl<E> Iterable<E> for VecDeque<E> {
    fn count_hint(&self) -> Option<usize> {
        Some(self.len())
    }

    fn items(&self) -> Box<dyn Iterator<Item = &E> + '_> {
        Box::new(self.iter())
    }
}

impl<E> Iterable<E> for LinkedList<E> {
    fn count_hint(&self) -> Option<usize> {
        Some(self.len())
    }

    fn items(&self) -> Box<dyn Iterator<Item = &E> + '_> {
        Box::new(self.iter())
    }
}

impl<E> Iterable<E> for BTreeSet<E> {
    fn count_hint(&self) -> Option<usize> {
        Some(self.len())
    }

    fn items(&self) -> Box<dyn Iterator<Item = &E> + '_> {
        Box::new(self.iter())
    }
}

/// `None` is the empty sequence and `Some(e)` a sequence of one.
impl<E> Iterable<E> for Option<E> {
    fn count_hint(&self) -> Option<usize> {
        Some(usize::from(self.is_some()))
    }

    fn items(&self) -> Box<dyn Iterator<Item = &E> + '_> {
        Box::new(self.iter())
    }
}

/// Compares two sequences of `E` element by element.
pub struct SequenceComparator<E: StructuralEquatable + ?Sized> {
    items: ComparatorRef<E>,
    count_short_circuit: bool,
}

impl<E: StructuralEquatable + ?Sized> SequenceComparator<E> {
    /// Creates a comparator bound to `cache`, using its sequence settings.
    pub fn new(cache: &'static ComparatorCache) -> Self {
        SequenceComparator {
            items: ComparatorRef::new(cache),
            count_short_circuit: cache.config().sequence.count_short_circuit,
        }
    }

    /// Returns true if the sequences differ in length or in any position.
    pub fn not_equal<S>(&self, xs: &S, ys: &S) -> Result<bool>
    where
        S: Iterable<E> + ?Sized,
    {
        if ptr::eq(xs, ys) {
            return Ok(false);
        }

        if self.count_short_circuit {
            if let (Some(left), Some(right)) = (xs.count_hint(), ys.count_hint()) {
                if left != right {
                    return Ok(true);
                }
            }
        }

        let mut left = xs.items();
        let mut right = ys.items();
        loop {
            match (left.next(), right.next()) {
                (None, None) => return Ok(false),
                (Some(_), None) | (None, Some(_)) => return Ok(true),
                (Some(x), Some(y)) => {
                    if self.items.get()?.not_equal(x, y)? {
                        return Ok(true);
                    }
                }
            }
        }
    }
}

/// Binds the sequence strategy for `T` over elements `E`.
pub(crate) fn bind_sequence<T, E>(cache: &'static ComparatorCache) -> NotEqualFn<T>
where
    T: Iterable<E> + ?Sized + 'static,
    E: StructuralEquatable + ?Sized,
{
    let comparator = SequenceComparator::<E>::new(cache);
    Box::new(move |xs: &T, ys: &T| comparator.not_equal(xs, ys))
}
