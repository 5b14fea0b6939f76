//! Misuse guard.
//!
//! Detects the two declaration mistakes that would otherwise turn into
//! unbounded recursion between a type's `PartialEq` and the engine:
//!
//! - the type says its equality depends on the engine but has no equality
//!   of its own (checked once per type);
//! - the type's equality calls back into the engine while the engine is
//!   forwarding to that same equality (checked on every manual entry of a
//!   delegated type, against the current thread's active delegations).

use std::any::TypeId;
use std::cell::RefCell;
use std::sync::OnceLock;

use crate::error::{EqualityError, MisuseKind, Result};
use crate::strategy::ComparisonStrategy;

thread_local! {
    static ACTIVE_DELEGATIONS: RefCell<Vec<TypeId>> = const { RefCell::new(Vec::new()) };
}

/// The declarations the guard validates.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Declaration {
    /// The type supplies its own equality.
    pub equatable: bool,
    /// The type's equality is implemented through the engine.
    pub depends_on_engine: bool,
    /// The strategy the resolver selected.
    pub strategy: ComparisonStrategy,
}

/// Per-type misuse state.
///
/// The declaration check runs at most once; its result is replayed to every
/// later manual entry.
#[derive(Debug)]
pub struct MisuseGuard {
    type_name: &'static str,
    type_id: TypeId,
    declaration: Declaration,
    state: OnceLock<Result<()>>,
}

impl MisuseGuard {
    /// Creates an unchecked guard.
    pub fn new(type_name: &'static str, type_id: TypeId, declaration: Declaration) -> Self {
        MisuseGuard {
            type_name,
            type_id,
            declaration,
            state: OnceLock::new(),
        }
    }

    /// The declarations under guard.
    pub fn declaration(&self) -> Declaration {
        self.declaration
    }

    /// Returns true once the declaration check has run.
    pub fn is_checked(&self) -> bool {
        self.state.get().is_some()
    }

    /// Validates the type for a manual-entry comparison.
    pub fn check(&self) -> Result<()> {
        self.state
            .get_or_init(|| validate_declaration(self.type_name, &self.declaration))
            .clone()?;

        if self.declaration.strategy == ComparisonStrategy::Delegated
            && is_delegating(self.type_id)
        {
            return Err(EqualityError::Misuse {
                type_name: self.type_name,
                kind: MisuseKind::UndeclaredEngineDependency,
            });
        }
        Ok(())
    }
}

/// Checks that an engine dependency is only declared next to an equality.
pub fn validate_declaration(type_name: &'static str, declaration: &Declaration) -> Result<()> {
    if declaration.depends_on_engine && !declaration.equatable {
        return Err(EqualityError::Misuse {
            type_name,
            kind: MisuseKind::DependsOnEngineWithoutEquatable,
        });
    }
    Ok(())
}

/// Returns true if the current thread is inside the delegated equality of
/// the given type.
pub fn is_delegating(type_id: TypeId) -> bool {
    ACTIVE_DELEGATIONS.with(|active| active.borrow().contains(&type_id))
}

/// Marks a delegated equality as running on this thread until dropped.
pub(crate) struct DelegationScope(());

impl DelegationScope {
    pub(crate) fn enter(type_id: TypeId) -> Self {
        ACTIVE_DELEGATIONS.with(|active| active.borrow_mut().push(type_id));
        DelegationScope(())
    }
}

impl Drop for DelegationScope {
    fn drop(&mut self) {
        ACTIVE_DELEGATIONS.with(|active| {
            active.borrow_mut().pop();
        });
    }
}
