//! lazyeq - structural equality resolved once per type
//!
//! Compare values by their declared shape: primitives natively, types with
//! their own equality through it, iterables element by element, and
//! everything else member by member. The strategy for each type is chosen
//! once, from its declaration, and cached for the life of the process.
//!
//! # Example
//!
//! ```rust
//! use lazyeq::prelude::*;
//!
//! #[derive(StructuralEquatable)]
//! struct Order {
//!     pub id: u64,
//!     pub lines: Vec<String>,
//!     #[equality(exclude)]
//!     pub fetched_at: u64,
//!     // Fields are opt-in.
//!     cache_key: String,
//! }
//!
//! let a = Order { id: 7, lines: vec!["tea".into()], fetched_at: 1, cache_key: "a".into() };
//! let b = Order { id: 7, lines: vec!["tea".into()], fetched_at: 2, cache_key: "b".into() };
//! assert!(lazyeq::equals(&a, &b));
//! assert_eq!(lazyeq::strategy_of::<Order>(), Ok(ComparisonStrategy::Memberwise));
//! ```
//!
//! # Compile-time checks
//!
//! An enum carrying data must bring its own equality:
//!
//! ```compile_fail
//! use lazyeq::prelude::*;
//!
//! #[derive(StructuralEquatable)]
//! enum Shape {
//!     Circle(f64),
//!     Square(f64),
//! }
//! ```
//!
//! Only a type with its own equality can depend on the engine for it:
//!
//! ```compile_fail
//! use lazyeq::prelude::*;
//!
//! #[derive(StructuralEquatable)]
//! #[equality(depends_on_engine)]
//! struct Reading {
//!     pub value: i64,
//! }
//! ```

pub use lazyeq_macros::StructuralEquatable;

pub use lazyeq_core::engine::{
    configure, ensure_initialized, equals, equals_optional, not_equals, strategy_of, try_equals,
    try_equals_optional, try_not_equals,
};

#[allow(deprecated)]
pub use lazyeq_core::engine::equals_untyped;

pub use lazyeq_core::{
    ComparatorCache, ComparisonStrategy, EqualityError, Inclusion, Iterable, MemberDescriptor,
    MemberKind, MisuseKind, Result, StructuralEquatable, TypeComparator, TypeDescriptor,
};

pub use lazyeq_config::{ConfigError, EngineConfig, SequenceConfig, TraceConfig};

/// Internal types for macro-generated code. Do not use directly.
#[doc(hidden)]
pub mod __internal {
    pub use lazyeq_core::{Inclusion, StructuralEquatable, TypeDescriptor};
}

pub mod prelude {
    pub use super::StructuralEquatable;
    pub use super::{ComparisonStrategy, EqualityError, Inclusion, Iterable, TypeDescriptor};
}
