//! Fieldless enum fixture.

use lazyeq::StructuralEquatable;
use rand::Rng;

/// A fieldless enum; compared by discriminant.
#[derive(Clone, Copy, Debug, PartialEq, Eq, StructuralEquatable)]
#[equality(debug)]
pub enum SomeEnum {
    Alpha,
    Beta,
    Gamma,
    Delta,
}

impl SomeEnum {
    pub const ALL: [SomeEnum; 4] = [
        SomeEnum::Alpha,
        SomeEnum::Beta,
        SomeEnum::Gamma,
        SomeEnum::Delta,
    ];

    /// Picks a variant uniformly.
    pub fn random(rng: &mut impl Rng) -> Self {
        Self::ALL[rng.random_range(0..Self::ALL.len())]
    }
}
