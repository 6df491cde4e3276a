use std::sync::{LazyLock, Mutex, PoisonError};

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

/// Seed shared by both random operators.
///
/// A fixed seed makes the sequence of drawn values identical from one run of
/// the program to the next.
pub const RANDOM_SEED: u64 = 0;

static RAND_GENERATOR: LazyLock<Mutex<ChaCha8Rng>> = LazyLock::new(new_generator);
static RAND_IN_GENERATOR: LazyLock<Mutex<ChaCha8Rng>> = LazyLock::new(new_generator);

fn new_generator() -> Mutex<ChaCha8Rng> {
    Mutex::new(ChaCha8Rng::seed_from_u64(RANDOM_SEED))
}

/// Creates both generators if they do not exist yet.
///
/// Called once while the catalogue is built. Generators are never reseeded, so
/// every evaluation advances the same sequence.
pub(crate) fn seed_generators() {
    LazyLock::force(&RAND_GENERATOR);
    LazyLock::force(&RAND_IN_GENERATOR);
}

fn next_unit(generator: &Mutex<ChaCha8Rng>) -> f64 {
    generator.lock().unwrap_or_else(PoisonError::into_inner).r#gen::<f64>()
}

/// `(rand)`: the next value in `[0, 1)` from the `rand` generator.
///
/// # Example
/// ```
/// use scorexpr::interpreter::operator::random::rand;
///
/// let r = rand(&[]);
/// assert!((0.0..1.0).contains(&r));
/// ```
#[must_use]
pub fn rand(_args: &[f64]) -> f64 {
    next_unit(&RAND_GENERATOR)
}

/// `(rand-in low high)`: `low + (high - low) * u` where `u` is the next value
/// in `[0, 1)` from the `rand-in` generator.
///
/// # Example
/// ```
/// use scorexpr::interpreter::operator::random::rand_in;
///
/// let r = rand_in(&[5.0, 10.0]);
/// assert!((5.0..=10.0).contains(&r));
/// ```
#[must_use]
pub fn rand_in(args: &[f64]) -> f64 {
    let low = args[0];
    let span = args[1] - low;
    low + span * next_unit(&RAND_IN_GENERATOR)
}
