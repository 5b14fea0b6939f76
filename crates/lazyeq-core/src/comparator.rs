//! Compiled per-type comparators.

use std::fmt;
use std::ptr;
use std::sync::{Arc, OnceLock};

use tracing::trace;

use crate::cache::ComparatorCache;
use crate::descriptor::RenderFn;
use crate::error::Result;
use crate::guard::MisuseGuard;
use crate::strategy::ComparisonStrategy;
use crate::traits::StructuralEquatable;

/// A compiled "not equal" predicate.
pub type NotEqualFn<T> = Box<dyn Fn(&T, &T) -> Result<bool> + Send + Sync>;

/// Diagnostic settings captured when the comparator is built.
pub(crate) struct TraceSettings<T: ?Sized> {
    pub(crate) comparisons: bool,
    pub(crate) render: Option<RenderFn<T>>,
}

/// The resolved strategy for a type plus its compiled predicate.
///
/// Built once by the cache and never mutated afterwards.
pub struct TypeComparator<T: ?Sized> {
    type_name: &'static str,
    strategy: ComparisonStrategy,
    body: NotEqualFn<T>,
    guard: MisuseGuard,
    trace: TraceSettings<T>,
}

impl<T: ?Sized + 'static> TypeComparator<T> {
    pub(crate) fn new(
        type_name: &'static str,
        strategy: ComparisonStrategy,
        body: NotEqualFn<T>,
        guard: MisuseGuard,
        trace: TraceSettings<T>,
    ) -> Self {
        TypeComparator {
            type_name,
            strategy,
            body,
            guard,
            trace,
        }
    }
}

impl<T: ?Sized> TypeComparator<T> {
    /// Name of the compared type.
    pub fn type_name(&self) -> &'static str {
        self.type_name
    }

    /// The strategy selected for the type.
    pub fn strategy(&self) -> ComparisonStrategy {
        self.strategy
    }

    /// The misuse guard for this type.
    pub fn guard(&self) -> &MisuseGuard {
        &self.guard
    }

    /// Returns true if `x` and `y` differ.
    ///
    /// This is the nested entry used by sequence and member comparison; it
    /// does not consult the misuse guard.
    pub fn not_equal(&self, x: &T, y: &T) -> Result<bool> {
        let result = if ptr::eq(x, y) {
            false
        } else {
            (self.body)(x, y)?
        };
        self.trace_outcome(x, y, result);
        Ok(result)
    }

    /// Returns true if `x` and `y` differ, treating `None` as an absent operand.
    pub fn not_equal_optional(&self, x: Option<&T>, y: Option<&T>) -> Result<bool> {
        match (x, y) {
            (None, None) => Ok(false),
            (Some(_), None) | (None, Some(_)) => Ok(true),
            (Some(x), Some(y)) => self.not_equal(x, y),
        }
    }

    /// Manual entry: validates the type's declarations, then compares.
    pub fn not_equal_checked(&self, x: &T, y: &T) -> Result<bool> {
        self.guard.check()?;
        self.not_equal(x, y)
    }

    /// Manual entry for optional operands.
    pub fn not_equal_optional_checked(&self, x: Option<&T>, y: Option<&T>) -> Result<bool> {
        self.guard.check()?;
        self.not_equal_optional(x, y)
    }

    fn trace_outcome(&self, x: &T, y: &T, not_equal: bool) {
        if !self.trace.comparisons {
            return;
        }
        match self.trace.render {
            Some(render) => trace!(
                event = "compare",
                type_name = self.type_name,
                strategy = self.strategy.as_str(),
                left = %render(x),
                right = %render(y),
                not_equal,
            ),
            None => trace!(
                event = "compare",
                type_name = self.type_name,
                strategy = self.strategy.as_str(),
                not_equal,
            ),
        }
    }
}

impl<T: ?Sized> fmt::Debug for TypeComparator<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TypeComparator")
            .field("type_name", &self.type_name)
            .field("strategy", &self.strategy)
            .field("guard_checked", &self.guard.is_checked())
            .finish()
    }
}

/// A lazily resolved handle to another type's comparator.
///
/// Member and element comparators are looked up on first use and pinned,
/// so building a recursive type never re-enters its own build.
pub struct ComparatorRef<T: StructuralEquatable + ?Sized> {
    cache: &'static ComparatorCache,
    slot: OnceLock<Arc<TypeComparator<T>>>,
}

impl<T: StructuralEquatable + ?Sized> ComparatorRef<T> {
    /// Creates an unresolved handle.
    pub fn new(cache: &'static ComparatorCache) -> Self {
        ComparatorRef {
            cache,
            slot: OnceLock::new(),
        }
    }

    /// Returns the comparator, building it in the cache on first use.
    pub fn get(&self) -> Result<&TypeComparator<T>> {
        if let Some(comparator) = self.slot.get() {
            return Ok(comparator.as_ref());
        }
        let built = self.cache.get_or_build::<T>()?;
        Ok(self.slot.get_or_init(|| built).as_ref())
    }

    /// Returns true if the handle has been resolved.
    pub fn is_resolved(&self) -> bool {
        self.slot.get().is_some()
    }
}
