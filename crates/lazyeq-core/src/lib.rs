//! lazyeq core - structural equality engine
//!
//! This crate provides the engine behind `lazyeq`:
//! - Type descriptors declaring each type's comparable shape
//! - A strategy resolver choosing primitive, delegated, sequence or
//!   memberwise comparison
//! - A concurrent cache of compiled per-type comparators
//! - A misuse guard against recursion through a type's own equality

pub mod cache;
pub mod comparator;
pub mod descriptor;
pub mod engine;
pub mod error;
pub mod guard;
pub mod resolver;
pub mod selector;
pub mod sequence;
mod std_impls;
pub mod strategy;
pub mod traits;

pub use cache::ComparatorCache;
pub use comparator::{ComparatorRef, NotEqualFn, TypeComparator};
pub use descriptor::{Inclusion, MemberDescriptor, MemberKind, TypeDescriptor};
pub use error::{EqualityError, MisuseKind, Result};
pub use lazyeq_config::{ConfigError, EngineConfig};
pub use sequence::{Iterable, SequenceComparator};
pub use strategy::ComparisonStrategy;
pub use traits::StructuralEquatable;
