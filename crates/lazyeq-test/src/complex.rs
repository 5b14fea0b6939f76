//! Memberwise fixture with ints.

use lazyeq::StructuralEquatable;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

/// Compared on `c`, `x` and `y`.
///
/// `noise_a` and `noise_b` are private and not included; `z` is public but
/// excluded. All three are random per instance.
#[derive(Clone, Debug, StructuralEquatable)]
#[equality(debug)]
pub struct ComplexWithInts {
    noise_a: u32,
    noise_b: u32,
    #[equality(include)]
    c: u32,
    pub x: u32,
    pub y: u32,
    #[equality(exclude)]
    pub z: u32,
}

impl ComplexWithInts {
    /// Builds an instance whose compared members come from `seed`.
    pub fn from_seed(seed: u64) -> Self {
        Self::from_rng(&mut ChaCha8Rng::seed_from_u64(seed))
    }

    /// Builds an instance whose compared members come from `rng`.
    pub fn from_rng(rng: &mut impl Rng) -> Self {
        let mut noise = rand::rng();
        Self {
            noise_a: noise.random(),
            noise_b: noise.random(),
            c: rng.random(),
            x: rng.random(),
            y: rng.random(),
            z: noise.random(),
        }
    }

    /// The included private field.
    pub fn c(&self) -> u32 {
        self.c
    }

    /// Hand-written equality over the compared members.
    pub fn compared_members_eq(&self, other: &Self) -> bool {
        self.c == other.c && self.x == other.x && self.y == other.y
    }
}
