//! Type descriptor.

use std::any::type_name;
use std::fmt;

use super::{Inclusion, MemberDescriptor};
use crate::cache::ComparatorCache;
use crate::comparator::NotEqualFn;
use crate::resolver::{validate_shape, ValidateFn};
use crate::sequence::{bind_sequence, Iterable};
use crate::traits::StructuralEquatable;

/// Native or user-supplied equality for `T`.
pub type EqFn<T> = fn(&T, &T) -> bool;

/// Renders an operand for trace events.
pub type RenderFn<T> = fn(&T) -> String;

/// The iteration capability of a sequence type, with its element type erased.
pub struct SequenceCapability<T: ?Sized> {
    /// Name of the element type.
    pub item_type: &'static str,
    pub(crate) bind: fn(&'static ComparatorCache) -> NotEqualFn<T>,
    pub(crate) validate: ValidateFn,
}

/// Describes the comparable shape of a type.
///
/// A descriptor carries every declaration the strategy resolver consults.
/// It declares capabilities only; which one wins is decided by the resolver.
pub struct TypeDescriptor<T: ?Sized> {
    /// Name of the type.
    pub type_name: &'static str,
    pub(crate) primitive: Option<EqFn<T>>,
    pub(crate) equatable: Option<EqFn<T>>,
    pub(crate) depends_on_engine: bool,
    pub(crate) sequence: Option<SequenceCapability<T>>,
    pub(crate) sequence_opt_out: bool,
    pub(crate) opaque: Option<String>,
    pub(crate) members: Vec<MemberDescriptor<T>>,
    pub(crate) render: Option<RenderFn<T>>,
}

impl<T: ?Sized + 'static> TypeDescriptor<T> {
    /// Creates a descriptor with no declarations.
    ///
    /// Such a type resolves to a memberwise comparison over zero members,
    /// so all of its values compare equal.
    pub fn new(type_name: &'static str) -> Self {
        TypeDescriptor {
            type_name,
            primitive: None,
            equatable: None,
            depends_on_engine: false,
            sequence: None,
            sequence_opt_out: false,
            opaque: None,
            members: Vec::new(),
            render: None,
        }
    }

    /// Declares a native primitive or fieldless enum.
    pub fn primitive(self) -> Self
    where
        T: PartialEq,
    {
        self.primitive_with(<T as PartialEq>::eq)
    }

    /// Declares a native primitive compared with `eq` instead of its
    /// `PartialEq`.
    pub fn primitive_with(mut self, eq: EqFn<T>) -> Self {
        self.primitive = Some(eq);
        self
    }

    /// Declares that the type supplies its own equality.
    pub fn with_equatable(mut self) -> Self
    where
        T: PartialEq,
    {
        self.equatable = Some(<T as PartialEq>::eq);
        self
    }

    /// Declares that the type's own equality is implemented through the
    /// engine, so the engine must not forward to it.
    pub fn with_engine_dependency(mut self) -> Self {
        self.depends_on_engine = true;
        self
    }

    /// Declares that the type is an ordered sequence of `E`.
    pub fn with_sequence<E>(mut self) -> Self
    where
        T: Iterable<E>,
        E: StructuralEquatable + ?Sized,
    {
        self.sequence = Some(SequenceCapability {
            item_type: type_name::<E>(),
            bind: bind_sequence::<T, E>,
            validate: validate_shape::<E>,
        });
        self
    }

    /// Opts out of sequence comparison even if the type is iterable.
    pub fn without_sequence(mut self) -> Self {
        self.sequence_opt_out = true;
        self
    }

    /// Marks the type as deliberately not structurally comparable.
    ///
    /// Resolution fails with `UnsupportedShape` unless an earlier rule
    /// applies.
    pub fn opaque(mut self, reason: impl Into<String>) -> Self {
        self.opaque = Some(reason.into());
        self
    }

    /// Lets trace events render operands with `Debug`.
    pub fn with_operand_debug(mut self) -> Self
    where
        T: fmt::Debug,
    {
        self.render = Some(|value: &T| format!("{value:?}"));
        self
    }

    /// Adds a member descriptor.
    pub fn with_member(mut self, member: MemberDescriptor<T>) -> Self {
        self.members.push(member);
        self
    }

    /// Adds a field. Fields participate only when marked include.
    pub fn with_field<M>(
        self,
        name: &'static str,
        accessor: fn(&T) -> &M,
        inclusion: Inclusion,
    ) -> Self
    where
        M: StructuralEquatable + ?Sized,
    {
        self.with_member(MemberDescriptor::field(name, accessor, inclusion))
    }

    /// Adds a property. Properties participate unless marked exclude.
    pub fn with_property<M>(
        self,
        name: &'static str,
        accessor: fn(&T) -> &M,
        inclusion: Inclusion,
    ) -> Self
    where
        M: StructuralEquatable + ?Sized,
    {
        self.with_member(MemberDescriptor::property(name, accessor, inclusion))
    }
}

impl<T: ?Sized> TypeDescriptor<T> {
    /// Returns true if the type declared itself primitive.
    pub fn is_primitive(&self) -> bool {
        self.primitive.is_some()
    }

    /// Returns true if the type supplies its own equality.
    pub fn is_equatable(&self) -> bool {
        self.equatable.is_some()
    }

    /// Returns true if the type's equality is implemented through the engine.
    pub fn is_engine_dependent(&self) -> bool {
        self.depends_on_engine
    }

    /// Returns the element type name if the type declared itself iterable.
    pub fn item_type(&self) -> Option<&'static str> {
        self.sequence.as_ref().map(|s| s.item_type)
    }

    /// Returns true if the type opted out of sequence comparison.
    pub fn is_sequence_opted_out(&self) -> bool {
        self.sequence_opt_out
    }

    /// Returns the reason the type is opaque, if it is.
    pub fn opaque_reason(&self) -> Option<&str> {
        self.opaque.as_deref()
    }

    /// Returns all declared members in declaration order.
    pub fn members(&self) -> &[MemberDescriptor<T>] {
        &self.members
    }
}

impl<T: ?Sized> fmt::Debug for TypeDescriptor<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TypeDescriptor")
            .field("type_name", &self.type_name)
            .field("primitive", &self.is_primitive())
            .field("equatable", &self.is_equatable())
            .field("depends_on_engine", &self.depends_on_engine)
            .field("item_type", &self.item_type())
            .field("sequence_opt_out", &self.sequence_opt_out)
            .field("opaque", &self.opaque)
            .field("members", &self.members.len())
            .finish()
    }
}
