//! Member descriptor.

use std::any::type_name;
use std::fmt;

use crate::cache::ComparatorCache;
use crate::comparator::{ComparatorRef, NotEqualFn};
use crate::error::Result;
use crate::resolver::{validate_shape, ValidateFn};
use crate::traits::StructuralEquatable;

/// Whether a member is a field or a property.
///
/// The distinction only matters for inclusion defaults: fields are
/// incidental unless marked, properties are the identity surface unless
/// marked.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MemberKind {
    /// Opt-in member.
    Field,
    /// Opt-out member.
    Property,
}

/// Explicit inclusion mark on a member.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum Inclusion {
    /// No mark; the member kind decides.
    #[default]
    Default,
    /// Marked include. Only meaningful on fields.
    Include,
    /// Marked exclude. Only meaningful on properties.
    Exclude,
}

type Binder<T> = Box<dyn Fn(&'static ComparatorCache) -> NotEqualFn<T>>;

/// Describes one readable member of a type.
pub struct MemberDescriptor<T: ?Sized> {
    /// Name of the member.
    pub name: &'static str,
    /// Field or property.
    pub kind: MemberKind,
    /// Name of the member's declared type.
    pub member_type: &'static str,
    /// Explicit inclusion mark.
    pub inclusion: Inclusion,
    binder: Binder<T>,
    pub(crate) validate: ValidateFn,
}

impl<T: ?Sized + 'static> MemberDescriptor<T> {
    /// Creates a field descriptor. Fields participate only when marked
    /// [`Inclusion::Include`].
    pub fn field<M>(name: &'static str, accessor: fn(&T) -> &M, inclusion: Inclusion) -> Self
    where
        M: StructuralEquatable + ?Sized,
    {
        Self::new(name, MemberKind::Field, accessor, inclusion)
    }

    /// Creates a property descriptor. Properties participate unless marked
    /// [`Inclusion::Exclude`].
    pub fn property<M>(name: &'static str, accessor: fn(&T) -> &M, inclusion: Inclusion) -> Self
    where
        M: StructuralEquatable + ?Sized,
    {
        Self::new(name, MemberKind::Property, accessor, inclusion)
    }

    fn new<M>(
        name: &'static str,
        kind: MemberKind,
        accessor: fn(&T) -> &M,
        inclusion: Inclusion,
    ) -> Self
    where
        M: StructuralEquatable + ?Sized,
    {
        MemberDescriptor {
            name,
            kind,
            member_type: type_name::<M>(),
            inclusion,
            validate: validate_shape::<M>,
            binder: Box::new(move |cache: &'static ComparatorCache| -> NotEqualFn<T> {
                let target = ComparatorRef::<M>::new(cache);
                Box::new(move |x: &T, y: &T| -> Result<bool> {
                    target.get()?.not_equal(accessor(x), accessor(y))
                })
            }),
        }
    }

    /// Returns true if this member takes part in memberwise comparison.
    pub fn is_included(&self) -> bool {
        match self.kind {
            MemberKind::Field => self.inclusion == Inclusion::Include,
            MemberKind::Property => self.inclusion != Inclusion::Exclude,
        }
    }

    /// Binds this member to a cache, producing its "not equal" function.
    ///
    /// The member type's comparator is resolved on first use, not here. Its
    /// shape was already checked when the owning type was resolved.
    pub(crate) fn bind(&self, cache: &'static ComparatorCache) -> NotEqualFn<T> {
        (self.binder)(cache)
    }
}

impl<T: ?Sized> fmt::Debug for MemberDescriptor<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("MemberDescriptor")
            .field("name", &self.name)
            .field("kind", &self.kind)
            .field("member_type", &self.member_type)
            .field("inclusion", &self.inclusion)
            .finish()
    }
}
