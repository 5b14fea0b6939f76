//! Core capability trait

use crate::descriptor::TypeDescriptor;

/// A type the engine can compare structurally.
///
/// The implementation only *describes* the type: which primitive or
/// self-equality it has, whether it is iterable, and which members it
/// exposes. The engine turns that description into a comparison strategy
/// once per type and caches the result.
///
/// # Example
///
/// ```
/// use lazyeq_core::{Inclusion, StructuralEquatable, TypeDescriptor};
///
/// struct Point {
///     x: i32,
///     y: i32,
///     label: String,
/// }
///
/// impl StructuralEquatable for Point {
///     fn describe() -> TypeDescriptor<Self> {
///         TypeDescriptor::<Self>::new("Point")
///             .with_property::<i32>("x", |p| &p.x, Inclusion::Default)
///             .with_property::<i32>("y", |p| &p.y, Inclusion::Default)
///             .with_property::<String>("label", |p| &p.label, Inclusion::Exclude)
///     }
/// }
///
/// let a = Point { x: 1, y: 2, label: "a".into() };
/// let b = Point { x: 1, y: 2, label: "b".into() };
/// assert!(lazyeq_core::engine::equals(&a, &b));
/// ```
///
/// For most types, use `#[derive(StructuralEquatable)]` from `lazyeq`.
///
/// There is deliberately no implementation for `dyn Any`: the strategy is
/// chosen from the static type, so an untyped comparison does not compile.
///
/// ```compile_fail
/// use std::any::Any;
///
/// let a: Box<dyn Any> = Box::new(1);
/// let b: Box<dyn Any> = Box::new(1);
/// lazyeq_core::engine::equals::<dyn Any>(&*a, &*b);
/// ```
pub trait StructuralEquatable: 'static {
    /// Describes the shape of `Self` for strategy resolution.
    fn describe() -> TypeDescriptor<Self>;
}
