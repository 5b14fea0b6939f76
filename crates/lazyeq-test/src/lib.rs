//! Shared test fixtures for lazyeq crates.
//!
//! Seeded domain types exercising every comparison strategy:
//!
//! - [`complex`] - memberwise type with included, excluded and noise members
//! - [`very_complex`] - nested members, sequences in mixed containers, enums
//! - [`some_enum`] - fieldless enum
//! - [`native`] - types with their own equality, with and without an
//!   engine dependency
//!
//! Values built from the same seed agree on every compared member. Members
//! the engine must ignore are filled from an unseeded generator, so two
//! values from the same seed differ there.
//!
//! # Usage
//!
//! ```toml
//! [dev-dependencies]
//! lazyeq-test = { workspace = true }
//! ```
//!
//! ```
//! use lazyeq_test::ComplexWithInts;
//!
//! let a = ComplexWithInts::from_seed(42);
//! let b = ComplexWithInts::from_seed(42);
//! assert!(a.compared_members_eq(&b));
//! assert!(lazyeq::equals(&a, &b));
//! ```

pub mod complex;
pub mod native;
pub mod some_enum;
pub mod very_complex;

pub use complex::ComplexWithInts;
pub use native::{EngineBackedPoint, NativeEquatable, NativeEquatableWrapper};
pub use some_enum::SomeEnum;
pub use very_complex::VeryComplex;
