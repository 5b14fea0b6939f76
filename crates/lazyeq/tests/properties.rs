use std::collections::{LinkedList, VecDeque};

use lazyeq::{Iterable, StructuralEquatable};
use proptest::prelude::*;

#[derive(Debug, Clone, StructuralEquatable)]
struct Line {
    pub sku: String,
    pub quantity: u16,
    #[equality(exclude)]
    pub note: String,
}

fn line() -> impl Strategy<Value = Line> {
    ("[a-z]{1,4}", 0u16..5, ".{0,8}").prop_map(|(sku, quantity, note)| Line {
        sku,
        quantity,
        note,
    })
}

proptest! {
    #[test]
    fn reflexive_for_clones(xs in prop::collection::vec(any::<i64>(), 0..32)) {
        let ys = xs.clone();
        prop_assert!(lazyeq::equals(&xs, &ys));
    }

    #[test]
    fn reflexive_for_float_clones(xs in prop::collection::vec(any::<f64>(), 0..16), nans in 0usize..3) {
        let mut xs = xs;
        xs.extend(std::iter::repeat(f64::NAN).take(nans));
        let ys = xs.clone();
        prop_assert!(lazyeq::equals(&xs, &ys));
    }

    #[test]
    fn symmetric_for_sequences(
        xs in prop::collection::vec(0u8..4, 0..8),
        ys in prop::collection::vec(0u8..4, 0..8),
    ) {
        prop_assert_eq!(lazyeq::equals(&xs, &ys), lazyeq::equals(&ys, &xs));
    }

    #[test]
    fn sequences_agree_with_partial_eq(
        xs in prop::collection::vec(0u8..4, 0..6),
        ys in prop::collection::vec(0u8..4, 0..6),
    ) {
        prop_assert_eq!(lazyeq::equals(&xs, &ys), xs == ys);
    }

    #[test]
    fn container_kind_does_not_matter(xs in prop::collection::vec(any::<u32>(), 0..16)) {
        let deque: VecDeque<u32> = xs.iter().copied().collect();
        let list: LinkedList<u32> = xs.iter().copied().collect();
        prop_assert!(lazyeq::equals::<dyn Iterable<u32>>(&xs, &deque));
        prop_assert!(lazyeq::equals::<dyn Iterable<u32>>(&deque, &list));
    }

    #[test]
    fn strings_agree_with_partial_eq(a in ".{0,6}", b in ".{0,6}") {
        prop_assert_eq!(lazyeq::equals(&a, &b), a == b);
        prop_assert_eq!(lazyeq::equals(a.as_str(), b.as_str()), a == b);
    }

    #[test]
    fn memberwise_ignores_excluded(a in line(), b in line()) {
        let expected = a.sku == b.sku && a.quantity == b.quantity;
        prop_assert_eq!(lazyeq::equals(&a, &b), expected);
        prop_assert_eq!(lazyeq::equals(&a, &b), lazyeq::equals(&b, &a));

        let mut renoted = a.clone();
        renoted.note.push('!');
        prop_assert!(lazyeq::equals(&a, &renoted));
    }

    #[test]
    fn optional_operands(a in proptest::option::of(any::<i16>()), b in proptest::option::of(any::<i16>())) {
        prop_assert_eq!(lazyeq::equals_optional(a.as_ref(), b.as_ref()), a == b);
        prop_assert_eq!(lazyeq::equals(&a, &b), a == b);
    }
}
