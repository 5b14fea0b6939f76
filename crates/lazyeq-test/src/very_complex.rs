//! Nested fixture mixing every strategy.

use std::collections::LinkedList;

use lazyeq::{Iterable, StructuralEquatable};
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

use crate::{ComplexWithInts, SomeEnum};

/// Built from a seed. Compared members derive from the seed; excluded and
/// non-included members, and the container type of `yes7`, do not.
#[derive(StructuralEquatable)]
pub struct VeryComplex {
    pub yes1: Vec<ComplexWithInts>,
    #[equality(exclude)]
    pub no1: Vec<ComplexWithInts>,
    pub yes2: ComplexWithInts,
    pub yes3: ComplexWithInts,
    #[equality(include)]
    yes4: u32,
    #[equality(include)]
    yes5: f64,
    pub yes6: SomeEnum,
    pub yes7: Box<dyn Iterable<ComplexWithInts>>,
    #[equality(exclude)]
    pub no2: SomeEnum,
    #[equality(include)]
    yeah1: u32,
    nope1: u32,
    #[equality(include)]
    yeah2: f64,
    #[equality(include)]
    yeah3: SomeEnum,
    pub yeah4: ComplexWithInts,
    #[equality(skip)]
    seed: u64,
}

impl VeryComplex {
    pub fn from_seed(seed: u64) -> Self {
        let mut rng = ChaCha8Rng::seed_from_u64(seed);
        let mut noise = rand::rng();

        let yes1 = complex_list(&mut rng);
        let yes2 = ComplexWithInts::from_rng(&mut rng);
        let yes3 = ComplexWithInts::from_rng(&mut rng);
        let yes4 = rng.random();
        let yes5 = rng.random();
        let yes6 = SomeEnum::random(&mut rng);
        let yes7 = any_container(complex_list(&mut rng), &mut noise);

        Self {
            yes1,
            no1: (0..noise.random_range(3..15))
                .map(|_| ComplexWithInts::from_rng(&mut noise))
                .collect(),
            yes2,
            yes3,
            yes4,
            yes5,
            yes6,
            yes7,
            no2: SomeEnum::random(&mut noise),
            yeah1: rng.random(),
            nope1: noise.random(),
            yeah2: rng.random(),
            yeah3: SomeEnum::random(&mut rng),
            yeah4: ComplexWithInts::from_rng(&mut rng),
            seed,
        }
    }

    pub fn seed(&self) -> u64 {
        self.seed
    }

    /// Number of elements behind `yes7`.
    pub fn yes7_len(&self) -> usize {
        self.yes7.items().count()
    }

    pub fn nope1(&self) -> u32 {
        self.nope1
    }
}

fn complex_list(rng: &mut impl Rng) -> Vec<ComplexWithInts> {
    let len = rng.random_range(100..200);
    (0..len).map(|_| ComplexWithInts::from_rng(rng)).collect()
}

/// Moves the elements into a randomly chosen container.
fn any_container(
    items: Vec<ComplexWithInts>,
    rng: &mut impl Rng,
) -> Box<dyn Iterable<ComplexWithInts>> {
    match rng.random_range(0..3) {
        0 => Box::new(items),
        1 => Box::new(items.into_iter().collect::<std::collections::VecDeque<_>>()),
        _ => Box::new(items.into_iter().collect::<LinkedList<_>>()),
    }
}
