//! Strategy resolution.
//!
//! Turns a [`TypeDescriptor`] into a [`TypeComparator`]. The first matching
//! rule wins:
//!
//! 1. primitive or fieldless enum: native equality;
//! 2. own equality not implemented through the engine: delegate to it;
//! 3. iterable and not opted out: compare as a sequence;
//! 4. otherwise compare the selected members, unless the type is opaque.
//!
//! Resolution also checks the shape of every type reachable through the
//! selected members and sequence elements, so an unsupported member fails
//! the build instead of a later comparison.

use std::any::TypeId;
use std::collections::HashSet;

use tracing::{debug, trace};

use crate::cache::ComparatorCache;
use crate::comparator::{NotEqualFn, TraceSettings, TypeComparator};
use crate::descriptor::{EqFn, MemberDescriptor, SequenceCapability, TypeDescriptor};
use crate::error::{EqualityError, Result};
use crate::guard::{Declaration, DelegationScope, MisuseGuard};
use crate::selector::select_members;
use crate::strategy::ComparisonStrategy;
use crate::traits::StructuralEquatable;

/// The winning rule for a descriptor, with what it needs to compile.
pub(crate) enum Selection<'a, T: ?Sized> {
    Primitive(EqFn<T>),
    Delegated(EqFn<T>),
    Sequence(&'a SequenceCapability<T>),
    Memberwise(Vec<&'a MemberDescriptor<T>>),
}

impl<T: ?Sized> Selection<'_, T> {
    fn strategy(&self) -> ComparisonStrategy {
        match self {
            Selection::Primitive(_) => ComparisonStrategy::Primitive,
            Selection::Delegated(_) => ComparisonStrategy::Delegated,
            Selection::Sequence(_) => ComparisonStrategy::Sequence,
            Selection::Memberwise(_) => ComparisonStrategy::Memberwise,
        }
    }
}

pub(crate) fn select<T: ?Sized + 'static>(
    descriptor: &TypeDescriptor<T>,
) -> Result<Selection<'_, T>> {
    if let Some(eq) = descriptor.primitive {
        return Ok(Selection::Primitive(eq));
    }
    if let Some(eq) = descriptor.equatable {
        if !descriptor.depends_on_engine {
            return Ok(Selection::Delegated(eq));
        }
    }
    if let Some(sequence) = &descriptor.sequence {
        if !descriptor.sequence_opt_out {
            return Ok(Selection::Sequence(sequence));
        }
    }
    if let Some(reason) = &descriptor.opaque {
        return Err(EqualityError::UnsupportedShape {
            type_name: descriptor.type_name,
            reason: reason.clone(),
        });
    }
    Ok(Selection::Memberwise(select_members(descriptor)))
}

/// Checks that a member or element type resolves to a strategy.
pub(crate) type ValidateFn = fn(&'static ComparatorCache, &mut HashSet<TypeId>) -> Result<()>;

/// Checks the shape of `T` and of every type its strategy reaches.
///
/// Types already built in `cache` were checked when they were built. Types
/// in `visited` are being checked further up, which ends recursion.
pub(crate) fn validate_shape<T>(
    cache: &'static ComparatorCache,
    visited: &mut HashSet<TypeId>,
) -> Result<()>
where
    T: StructuralEquatable + ?Sized,
{
    if !visited.insert(TypeId::of::<T>()) || cache.get::<T>().is_some() {
        return Ok(());
    }
    let descriptor = T::describe();
    validate_reachable(&select(&descriptor)?, cache, visited)
}

fn validate_reachable<T: ?Sized>(
    selection: &Selection<'_, T>,
    cache: &'static ComparatorCache,
    visited: &mut HashSet<TypeId>,
) -> Result<()> {
    match selection {
        Selection::Primitive(_) | Selection::Delegated(_) => Ok(()),
        Selection::Sequence(capability) => (capability.validate)(cache, visited),
        Selection::Memberwise(selected) => {
            for member in selected {
                (member.validate)(cache, visited)?;
            }
            Ok(())
        }
    }
}

/// Returns the strategy the resolver would select for a descriptor.
pub fn select_strategy<T: ?Sized + 'static>(
    descriptor: &TypeDescriptor<T>,
) -> Result<ComparisonStrategy> {
    select(descriptor).map(|selection| selection.strategy())
}

/// Builds the comparator for `T` against `cache`.
///
/// Member and element comparators are bound lazily, so this never builds
/// another type's comparator. Their shapes are checked eagerly: an
/// unsupported member type fails here with `UnsupportedShape`.
pub fn resolve<T>(cache: &'static ComparatorCache) -> Result<TypeComparator<T>>
where
    T: StructuralEquatable + ?Sized,
{
    let descriptor = T::describe();
    let type_name = descriptor.type_name;
    let config = cache.config();
    let selection = select(&descriptor)?;
    let strategy = selection.strategy();
    let mut visited = HashSet::from([TypeId::of::<T>()]);
    validate_reachable(&selection, cache, &mut visited)?;

    let (body, members): (NotEqualFn<T>, usize) = match selection {
        Selection::Primitive(eq) => {
            let body = move |x: &T, y: &T| -> Result<bool> { Ok(!eq(x, y)) };
            (Box::new(body), 0)
        }
        Selection::Delegated(eq) => {
            let type_id = TypeId::of::<T>();
            let body = move |x: &T, y: &T| -> Result<bool> {
                let _scope = DelegationScope::enter(type_id);
                Ok(!eq(x, y))
            };
            (Box::new(body), 0)
        }
        Selection::Sequence(capability) => ((capability.bind)(cache), 0),
        Selection::Memberwise(selected) => {
            let bound: Vec<(&'static str, NotEqualFn<T>)> = selected
                .iter()
                .map(|member| (member.name, member.bind(cache)))
                .collect();
            let count = bound.len();
            let traced = config.trace.comparisons;
            let body = move |x: &T, y: &T| -> Result<bool> {
                for (member, differs) in &bound {
                    if differs(x, y)? {
                        if traced {
                            trace!(event = "member_mismatch", type_name, member = *member);
                        }
                        return Ok(true);
                    }
                }
                Ok(false)
            };
            (Box::new(body), count)
        }
    };

    debug!(
        event = "comparator_built",
        type_name,
        strategy = strategy.as_str(),
        members,
    );

    let guard = MisuseGuard::new(
        type_name,
        TypeId::of::<T>(),
        Declaration {
            equatable: descriptor.is_equatable(),
            depends_on_engine: descriptor.is_engine_dependent(),
            strategy,
        },
    );
    let trace = TraceSettings {
        comparisons: config.trace.comparisons,
        render: if config.trace.operands {
            descriptor.render
        } else {
            None
        },
    };

    Ok(TypeComparator::new(type_name, strategy, body, guard, trace))
}
