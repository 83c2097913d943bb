//! Deterministic random suppliers.

use fnshape_core::shape::FnDoubleSupplier;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// A float supplier seeded deterministically.
///
/// A fresh generator is seeded on every call, so repeated invocations all
/// yield the same value. Callers wanting a progressing stream should hold
/// their own generator instead.
///
/// # Example
///
/// ```
/// use fnshape_catalog::random;
/// use fnshape_core::DoubleSupplier;
///
/// let supplier = random::seeded_double(42);
/// assert_eq!(supplier.get(), supplier.get());
/// ```
pub fn seeded_double(seed: u64) -> FnDoubleSupplier<impl Fn() -> f64 + Send + Sync> {
    FnDoubleSupplier::new(move || StdRng::seed_from_u64(seed).random::<f64>())
}
