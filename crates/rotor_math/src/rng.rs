//! Random number generation.
//!
//! A seedable generator object plus a process-wide convenience
//! interface. The process-wide generator is seeded once from OS
//! entropy and guarded by a mutex, so the free functions are safe to
//! call from any thread (calls serialize on the lock). Code that needs
//! reproducible sequences or lock-free draws constructs its own [`Rng`]
//! with [`Rng::from_seed`].

use std::sync::OnceLock;

use parking_lot::Mutex;
use rand::{Rng as _, RngCore, SeedableRng};
use rand_chacha::ChaCha8Rng;

/// A uniform/normal random number generator.
///
/// Thin wrapper over ChaCha8 - fast, deterministic, and identical on
/// every platform for a given seed.
#[derive(Debug, Clone)]
pub struct Rng {
    inner: ChaCha8Rng,
}

impl Rng {
    /// Creates a generator from a fixed seed. Same seed, same sequence.
    #[must_use]
    pub fn from_seed(seed: u64) -> Self {
        Self {
            inner: ChaCha8Rng::seed_from_u64(seed),
        }
    }

    /// Creates a generator seeded from OS entropy.
    #[must_use]
    pub fn from_entropy() -> Self {
        Self {
            inner: ChaCha8Rng::from_entropy(),
        }
    }

    /// Returns a uniform random 32-bit unsigned integer.
    #[must_use]
    pub fn next_u32(&mut self) -> u32 {
        self.inner.next_u32()
    }

    /// Returns a uniform random float in `[0.0, 1.0)`.
    #[must_use]
    pub fn uniform(&mut self) -> f32 {
        self.inner.gen::<f32>()
    }

    /// Returns an approximately standard-normal float (mean 0,
    /// standard deviation 1) via the Box-Muller transform over two
    /// uniform draws.
    #[must_use]
    pub fn normal(&mut self) -> f32 {
        // ln(0) is -inf; draw until the radius term is usable.
        let u1 = loop {
            let u = self.uniform();
            if u > 0.0 {
                break u;
            }
        };
        let u2 = self.uniform();
        (-2.0 * u1.ln()).sqrt() * (std::f32::consts::TAU * u2).cos()
    }
}

/// Process-wide generator, seeded once at first use.
static PROCESS_RNG: OnceLock<Mutex<Rng>> = OnceLock::new();

fn process_rng() -> &'static Mutex<Rng> {
    PROCESS_RNG.get_or_init(|| Mutex::new(Rng::from_entropy()))
}

/// Returns a uniform random 32-bit unsigned integer from the
/// process-wide generator.
#[must_use]
pub fn random_u32() -> u32 {
    process_rng().lock().next_u32()
}

/// Returns a uniform random float in `[0.0, 1.0)` from the
/// process-wide generator.
#[must_use]
pub fn random_float() -> f32 {
    process_rng().lock().uniform()
}

/// Returns an approximately standard-normal float from the
/// process-wide generator.
#[must_use]
pub fn random_normal() -> f32 {
    process_rng().lock().normal()
}
