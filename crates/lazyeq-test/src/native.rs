//! Fixtures with their own equality.

use lazyeq::StructuralEquatable;

/// Equality is its own `PartialEq` over a private string.
#[derive(Debug, Clone, StructuralEquatable)]
#[equality(equatable)]
pub struct NativeEquatable {
    value: String,
}

impl NativeEquatable {
    /// Returns `None` for a missing input.
    pub fn parse(value: Option<&str>) -> Option<Self> {
        value.map(|value| Self {
            value: value.to_string(),
        })
    }
}

impl PartialEq for NativeEquatable {
    fn eq(&self, other: &Self) -> bool {
        self.value == other.value
    }
}

/// Implements `PartialEq` through the engine and declares it, so the engine
/// compares it member by member.
#[derive(Debug, Clone, StructuralEquatable)]
#[equality(equatable, depends_on_engine)]
pub struct NativeEquatableWrapper {
    pub string_value: String,
    pub native: Option<NativeEquatable>,
}

impl NativeEquatableWrapper {
    pub fn new(value: &str) -> Self {
        Self {
            string_value: value.to_string(),
            native: NativeEquatable::parse(Some(value)),
        }
    }
}

impl PartialEq for NativeEquatableWrapper {
    fn eq(&self, other: &Self) -> bool {
        lazyeq::equals(self, other)
    }
}

/// A single coordinate whose `PartialEq` is the engine.
#[derive(Debug, Clone, Copy, StructuralEquatable)]
#[equality(equatable, depends_on_engine)]
pub struct EngineBackedPoint {
    pub x: i32,
}

impl EngineBackedPoint {
    pub fn new(x: i32) -> Self {
        Self { x }
    }
}

impl PartialEq for EngineBackedPoint {
    fn eq(&self, other: &Self) -> bool {
        lazyeq::equals(self, other)
    }
}
