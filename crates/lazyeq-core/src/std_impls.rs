//! `StructuralEquatable` for standard library types.
//!
//! - numeric types, `bool`, `char` and `()` are primitive, and a float
//!   `NaN` equals any other `NaN`;
//! - strings, paths and time values delegate to their `PartialEq`;
//! - collections, arrays, slices and `Option` are sequences;
//! - smart pointers and tuples are memberwise;
//! - locks are opaque.

use std::any::type_name;
use std::collections::{BTreeSet, LinkedList, VecDeque};
use std::path::{Path, PathBuf};
use std::rc::Rc;
use std::sync::{Arc, Mutex, RwLock};
use std::time::{Duration, Instant, SystemTime};

use crate::descriptor::{Inclusion, TypeDescriptor};
use crate::sequence::Iterable;
use crate::traits::StructuralEquatable;

/// Implements `StructuralEquatable` for primitive value types.
macro_rules! impl_primitive {
    ($($type:ty),+ $(,)?) => {
        $(
            impl StructuralEquatable for $type {
                fn describe() -> TypeDescriptor<Self> {
                    TypeDescriptor::<Self>::new(stringify!($type))
                        .primitive()
                        .with_operand_debug()
                }
            }
        )+
    };
}

/// Implements `StructuralEquatable` for floats. `NaN` equals `NaN`, so a
/// value always equals its own copy.
macro_rules! impl_float {
    ($($type:ty),+ $(,)?) => {
        $(
            impl StructuralEquatable for $type {
                fn describe() -> TypeDescriptor<Self> {
                    TypeDescriptor::<Self>::new(stringify!($type))
                        .primitive_with(|a, b| a == b || (a.is_nan() && b.is_nan()))
                        .with_operand_debug()
                }
            }
        )+
    };
}

/// Implements `StructuralEquatable` for types whose own `PartialEq` is the
/// structural equality.
macro_rules! impl_delegated {
    ($($type:ty),+ $(,)?) => {
        $(
            impl StructuralEquatable for $type {
                fn describe() -> TypeDescriptor<Self> {
                    TypeDescriptor::<Self>::new(type_name::<Self>())
                        .with_equatable()
                        .with_operand_debug()
                }
            }
        )+
    };
}

/// Implements `StructuralEquatable` for single-parameter containers that
/// iterate their elements in order.
macro_rules! impl_sequence {
    ($($container:ident),+ $(,)?) => {
        $(
            impl<E: StructuralEquatable> StructuralEquatable for $container<E> {
                fn describe() -> TypeDescriptor<Self> {
                    TypeDescriptor::<Self>::new(type_name::<Self>()).with_sequence::<E>()
                }
            }
        )+
    };
}

/// Implements `StructuralEquatable` for pointers as a single `target`
/// member.
macro_rules! impl_pointer {
    ($($pointer:ident),+ $(,)?) => {
        $(
            impl<T: StructuralEquatable + ?Sized> StructuralEquatable for $pointer<T> {
                fn describe() -> TypeDescriptor<Self> {
                    TypeDescriptor::<Self>::new(type_name::<Self>()).with_property::<T>(
                        "target",
                        |p| &**p,
                        Inclusion::Default,
                    )
                }
            }
        )+
    };
}

/// Implements `StructuralEquatable` for tuples with one property per
/// position.
macro_rules! impl_tuple {
    ($(($($name:ident . $index:tt),+))+) => {
        $(
            impl<$($name: StructuralEquatable),+> StructuralEquatable for ($($name,)+) {
                fn describe() -> TypeDescriptor<Self> {
                    TypeDescriptor::<Self>::new(type_name::<Self>())
                        $(
                            .with_property::<$name>(
                                stringify!($index),
                                |t| &t.$index,
                                Inclusion::Default,
                            )
                        )+
                }
            }
        )+
    };
}

/// Implements `StructuralEquatable` for types that must not be compared by
/// content.
macro_rules! impl_opaque {
    ($($wrapper:ident => $reason:literal),+ $(,)?) => {
        $(
            impl<T: ?Sized + 'static> StructuralEquatable for $wrapper<T> {
                fn describe() -> TypeDescriptor<Self> {
                    TypeDescriptor::<Self>::new(type_name::<Self>()).opaque($reason)
                }
            }
        )+
    };
}

impl_primitive!(
    bool, char, (), i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize,
);

impl_float!(f32, f64);

impl_delegated!(
    String,
    str,
    &'static str,
    Duration,
    Instant,
    SystemTime,
    PathBuf,
    Path,
);

impl_sequence!(Vec, VecDeque, LinkedList, BTreeSet);

/// `None` is an absent value and compares equal only to `None`.
impl<E: StructuralEquatable> StructuralEquatable for Option<E> {
    fn describe() -> TypeDescriptor<Self> {
        TypeDescriptor::<Self>::new(type_name::<Self>()).with_sequence::<E>()
    }
}

impl<E: StructuralEquatable> StructuralEquatable for [E] {
    fn describe() -> TypeDescriptor<Self> {
        TypeDescriptor::<Self>::new(type_name::<Self>()).with_sequence::<E>()
    }
}

impl<E: StructuralEquatable, const N: usize> StructuralEquatable for [E; N] {
    fn describe() -> TypeDescriptor<Self> {
        TypeDescriptor::<Self>::new(type_name::<Self>()).with_sequence::<E>()
    }
}

impl<E: StructuralEquatable + ?Sized> StructuralEquatable for dyn Iterable<E> {
    fn describe() -> TypeDescriptor<Self> {
        TypeDescriptor::<Self>::new(type_name::<Self>()).with_sequence::<E>()
    }
}

impl_pointer!(Box, Rc, Arc);

impl_tuple! {
    (A.0, B.1)
    (A.0, B.1, C.2)
    (A.0, B.1, C.2, D.3)
}

impl_opaque!(
    Mutex => "lock contents cannot be read without acquiring the lock",
    RwLock => "lock contents cannot be read without acquiring the lock",
);
