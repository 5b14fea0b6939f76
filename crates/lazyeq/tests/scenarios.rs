//! End-to-end comparisons over the shared fixtures.

use std::collections::{BTreeSet, LinkedList};

use lazyeq::{ComparisonStrategy, Iterable};
use lazyeq_test::{
    ComplexWithInts, EngineBackedPoint, NativeEquatable, NativeEquatableWrapper, SomeEnum,
    VeryComplex,
};

fn chars(s: Option<&str>) -> Option<Vec<char>> {
    s.map(|s| s.chars().collect())
}

#[test]
fn test_char_lists() {
    let cases = [
        (Some(""), Some(""), true),
        (Some("1337"), Some("1337"), true),
        (Some(""), Some(" "), false),
        (None, Some(""), false),
        (Some(""), None, false),
        (None, None, true),
    ];

    for (xs, ys, equal) in cases {
        let x = chars(xs);
        let y = chars(ys);
        assert_eq!(
            lazyeq::equals_optional(x.as_ref(), y.as_ref()),
            equal,
            "{xs:?} vs {ys:?}"
        );
        // Absence as a value: `Option` is a sequence of at most one list.
        assert_eq!(lazyeq::equals(&x, &y), equal, "{xs:?} vs {ys:?}");
    }
}

#[test]
fn test_wrapper_depending_on_engine() {
    let cases = [
        ("ivan", "ivan"),
        ("dragan", "petkan"),
        ("pesho", "pesho"),
        ("gosho", "tosho"),
    ];

    for (tx, ty) in cases {
        let x = NativeEquatableWrapper::new(tx);
        let y = NativeEquatableWrapper::new(ty);
        assert_eq!(lazyeq::equals(&x, &y), tx == ty, "{tx} vs {ty}");
        assert_eq!(x == y, tx == ty);
    }
    assert_eq!(
        lazyeq::strategy_of::<NativeEquatableWrapper>(),
        Ok(ComparisonStrategy::Memberwise)
    );
    assert_eq!(
        lazyeq::strategy_of::<NativeEquatable>(),
        Ok(ComparisonStrategy::Delegated)
    );
}

#[test]
fn test_memberwise_linked_lists() {
    let cases: [(&[u64], &[u64]); 5] = [
        (&[4, 8, 15, 16, 23, 42], &[4, 8, 15, 16, 23, 42]),
        (&[4, 8, 15, 16, 23, 42], &[4, 8, 15, 16, 23, 43]),
        (&[1, 3, 3, 7], &[1, 3, 3, 7]),
        (&[1, 2, 3], &[]),
        (&[4, 5, 6], &[7, 8, 9]),
    ];

    for (seeds_x, seeds_y) in cases {
        let x: LinkedList<ComplexWithInts> =
            seeds_x.iter().map(|&s| ComplexWithInts::from_seed(s)).collect();
        let y: LinkedList<ComplexWithInts> =
            seeds_y.iter().map(|&s| ComplexWithInts::from_seed(s)).collect();

        let expected = x.len() == y.len()
            && x.iter().zip(y.iter()).all(|(a, b)| a.compared_members_eq(b));
        assert_eq!(lazyeq::equals(&x, &y), expected, "{seeds_x:?} vs {seeds_y:?}");
    }
}

#[test]
fn test_memberwise_struct() {
    let cases = [(1, 1), (1337, 1337), (481516, 2342), (12, 13), (5, 6)];

    for (seed_x, seed_y) in cases {
        let x = ComplexWithInts::from_seed(seed_x);
        let y = ComplexWithInts::from_seed(seed_y);
        assert_eq!(lazyeq::equals(&x, &y), x.compared_members_eq(&y));
        assert_eq!(lazyeq::equals(&x, &y), seed_x == seed_y);
    }
}

#[test]
fn test_excluded_members_may_differ() {
    let x = ComplexWithInts::from_seed(99);
    let mut y = ComplexWithInts::from_seed(99);
    y.z = x.z.wrapping_add(1);
    assert!(lazyeq::equals(&x, &y));

    y.x = x.x.wrapping_add(1);
    assert!(!lazyeq::equals(&x, &y));
}

#[test]
fn test_enum() {
    assert!(!lazyeq::equals(&SomeEnum::Alpha, &SomeEnum::Beta));
    assert!(lazyeq::equals(&SomeEnum::Gamma, &SomeEnum::Gamma));
    assert_eq!(
        lazyeq::strategy_of::<SomeEnum>(),
        Ok(ComparisonStrategy::Primitive)
    );
}

#[test]
fn test_very_complex() {
    for (seed_x, seed_y) in [(1, 3), (2, 5), (101, 101)] {
        let x = VeryComplex::from_seed(seed_x);
        let y = VeryComplex::from_seed(seed_y);
        assert_eq!(
            lazyeq::equals(&x, &y),
            x.seed() == y.seed(),
            "{seed_x} vs {seed_y}"
        );
    }
}

#[test]
fn test_very_complex_ignores_noise() {
    let x = VeryComplex::from_seed(7);
    let y = VeryComplex::from_seed(7);
    assert_eq!(x.yes7_len(), y.yes7_len());
    assert!(lazyeq::equals(&x, &y));
}

#[test]
fn test_different_containers() {
    let cases = [
        ("ivan", "ivan"),
        ("Ivan", "not Ivan"),
        ("ivan", "ivan + ivan = 2*ivan"),
        ("krokodil", "krokodil"),
        ("123", "123"),
    ];

    for (xs, ys) in cases {
        let x: Vec<char> = xs.chars().collect();
        let y: LinkedList<char> = ys.chars().collect();
        assert_eq!(
            lazyeq::equals::<dyn Iterable<char>>(&x, &y),
            xs == ys,
            "{xs} vs {ys}"
        );
    }
}

#[test]
fn test_ordered_set_compares_in_key_order() {
    let a: BTreeSet<char> = "pesho".chars().collect();
    let b: BTreeSet<char> = "ohsep".chars().collect();
    let c: BTreeSet<char> = "gosho".chars().collect();
    assert!(lazyeq::equals(&a, &b));
    assert!(!lazyeq::equals(&a, &c));
}

#[test]
fn test_engine_backed_equality() {
    assert!(lazyeq::equals(
        &EngineBackedPoint::new(1337),
        &EngineBackedPoint::new(1337)
    ));
    assert!(!lazyeq::equals(
        &EngineBackedPoint::new(1),
        &EngineBackedPoint::new(3)
    ));
    assert_eq!(EngineBackedPoint::new(4), EngineBackedPoint::new(4));
}

#[test]
fn test_ensure_initialized_fixtures() {
    assert!(lazyeq::ensure_initialized::<ComplexWithInts>().is_ok());
    assert!(lazyeq::ensure_initialized::<Vec<ComplexWithInts>>().is_ok());
    assert!(lazyeq::ensure_initialized::<LinkedList<ComplexWithInts>>().is_ok());
    assert!(lazyeq::ensure_initialized::<VeryComplex>().is_ok());
    assert!(lazyeq::ensure_initialized::<NativeEquatableWrapper>().is_ok());
}
