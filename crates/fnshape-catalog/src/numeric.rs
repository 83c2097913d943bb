//! Numeric operator and supplier shapes.

use fnshape_core::shape::{FnBiFunction, FnIntPredicate, FnIntSupplier, FnPredicate};
use num_traits::PrimInt;

/// The larger of two operands; equal operands return the first.
pub fn max<T: Ord + Clone>() -> FnBiFunction<impl Fn(&T, &T) -> T + Send + Sync> {
    FnBiFunction::new(|first: &T, second: &T| {
        if first >= second {
            first.clone()
        } else {
            second.clone()
        }
    })
}

/// The smaller of two operands; equal operands return the first.
pub fn min<T: Ord + Clone>() -> FnBiFunction<impl Fn(&T, &T) -> T + Send + Sync> {
    FnBiFunction::new(|first: &T, second: &T| {
        if first <= second {
            first.clone()
        } else {
            second.clone()
        }
    })
}

/// Tests evenness over any primitive integer type.
pub fn is_even<T: PrimInt>() -> FnPredicate<impl Fn(&T) -> bool + Send + Sync> {
    FnPredicate::new(|value: &T| {
        let two = T::one() + T::one();
        *value % two == T::zero()
    })
}

/// Tests evenness of an unboxed integer.
pub fn int_is_even() -> FnIntPredicate<impl Fn(i64) -> bool + Send + Sync> {
    FnIntPredicate::new(|value| value % 2 == 0)
}

/// An integer supplier that always produces `value`.
pub fn constant_int(value: i64) -> FnIntSupplier<impl Fn() -> i64 + Send + Sync> {
    FnIntSupplier::new(move || value)
}
