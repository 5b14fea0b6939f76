//! Public entry points over the process-wide cache.
//!
//! Every function here is a *manual entry*: it runs the misuse guard for
//! the compared type before comparing. Comparisons reached through members
//! or sequence elements do not.

use std::any::Any;

use lazyeq_config::EngineConfig;

use crate::cache::ComparatorCache;
use crate::error::{EqualityError, Result};
use crate::strategy::ComparisonStrategy;
use crate::traits::StructuralEquatable;

/// Returns `Ok(true)` if `x` and `y` differ structurally.
pub fn try_not_equals<T>(x: &T, y: &T) -> Result<bool>
where
    T: StructuralEquatable + ?Sized,
{
    ComparatorCache::global().not_equals(x, y)
}

/// Returns `Ok(true)` if `x` and `y` are structurally equal.
pub fn try_equals<T>(x: &T, y: &T) -> Result<bool>
where
    T: StructuralEquatable + ?Sized,
{
    try_not_equals(x, y).map(|differ| !differ)
}

/// Compares possibly absent operands. Two absent operands are equal.
pub fn try_equals_optional<T>(x: Option<&T>, y: Option<&T>) -> Result<bool>
where
    T: StructuralEquatable + ?Sized,
{
    ComparatorCache::global()
        .not_equals_optional(x, y)
        .map(|differ| !differ)
}

/// Returns true if `x` and `y` are structurally equal.
///
/// # Panics
///
/// Panics if `T` cannot be compared: an opaque type reached the memberwise
/// fallback, or its declarations are inconsistent. Use [`try_equals`] to
/// handle these as errors.
pub fn equals<T>(x: &T, y: &T) -> bool
where
    T: StructuralEquatable + ?Sized,
{
    try_equals(x, y).unwrap_or_else(|err| panic!("{err}"))
}

/// Returns true if `x` and `y` differ structurally.
///
/// # Panics
///
/// Same conditions as [`equals`].
pub fn not_equals<T>(x: &T, y: &T) -> bool
where
    T: StructuralEquatable + ?Sized,
{
    try_not_equals(x, y).unwrap_or_else(|err| panic!("{err}"))
}

/// Compares possibly absent operands.
///
/// # Panics
///
/// Same conditions as [`equals`].
pub fn equals_optional<T>(x: Option<&T>, y: Option<&T>) -> bool
where
    T: StructuralEquatable + ?Sized,
{
    try_equals_optional(x, y).unwrap_or_else(|err| panic!("{err}"))
}

/// Builds the comparator for `T` ahead of its first comparison.
pub fn ensure_initialized<T>() -> Result<()>
where
    T: StructuralEquatable + ?Sized,
{
    let comparator = ComparatorCache::global().get_or_build::<T>()?;
    comparator.guard().check()
}

/// Reports the strategy selected for `T`, building its comparator if
/// needed.
pub fn strategy_of<T>() -> Result<ComparisonStrategy>
where
    T: StructuralEquatable + ?Sized,
{
    Ok(ComparatorCache::global().get_or_build::<T>()?.strategy())
}

/// Configures the process-wide engine. Must run before the first
/// comparison.
pub fn configure(config: EngineConfig) -> Result<()> {
    ComparatorCache::install_global(config).map(|_| ())
}

/// Untyped comparison is not supported: the strategy is chosen from the
/// static type. Always fails with [`EqualityError::ApiMisuse`].
#[deprecated(note = "compare through a concrete type with `equals::<T>`")]
pub fn equals_untyped(_x: &dyn Any, _y: &dyn Any) -> Result<bool> {
    Err(EqualityError::ApiMisuse)
}
