//! Declarative type descriptions consumed by the strategy resolver.

mod member;
mod type_descriptor;

#[cfg(test)]
mod tests;

pub use member::{Inclusion, MemberDescriptor, MemberKind};
pub use type_descriptor::{EqFn, RenderFn, SequenceCapability, TypeDescriptor};
