//! Error types for lazyeq

use std::fmt;

use thiserror::Error;

/// Main error type for lazyeq operations.
///
/// Every variant describes a configuration or programming defect. None of
/// them depends on the values being compared, so retrying never helps.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EqualityError {
    /// No strategy applies to the type's declared shape
    #[error("Unsupported shape `{type_name}`: {reason}")]
    UnsupportedShape {
        type_name: &'static str,
        reason: String,
    },

    /// Inconsistent self-equality and engine-dependency declarations
    #[error("Misuse of `{type_name}`: {kind}")]
    Misuse {
        type_name: &'static str,
        kind: MisuseKind,
    },

    /// Comparison requested without a static type
    #[error("Untyped comparison is not supported, call `equals::<T>` with an explicit type")]
    ApiMisuse,

    /// Error in engine configuration
    #[error("Configuration error: {0}")]
    Config(String),
}

/// The two inconsistencies detected by the misuse guard.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MisuseKind {
    /// The type says its equality depends on the engine but has none.
    DependsOnEngineWithoutEquatable,
    /// The type's own equality called back into the engine without
    /// declaring the dependency.
    UndeclaredEngineDependency,
}

impl fmt::Display for MisuseKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MisuseKind::DependsOnEngineWithoutEquatable => f.write_str(
                "declares that its equality depends on the engine but does not declare an equality",
            ),
            MisuseKind::UndeclaredEngineDependency => f.write_str(
                "its equality calls back into the engine; declare `depends_on_engine` on the type",
            ),
        }
    }
}

/// Result type alias for lazyeq operations
pub type Result<T> = std::result::Result<T, EqualityError>;
