//! Numeric reduction for `sum` and `average`.
//!
//! Integer sums are checked: overflowing an `i32` sum is an error, not a wrap.
//! Averages widen before dividing. Integers accumulate in `i128` and produce an
//! `f64`. Floats accumulate in `f64` and come back as their own type.
//!
//! `Nullable` marks element types that may be missing. Missing values count as
//! zero for `sum` and are left out of `average`'s denominator.

/// A value `sum` and `average` can reduce.
pub trait Number: Copy {
    /// Result type of `average`.
    type Mean: Copy;

    const ZERO: Self;

    /// `None` on overflow.
    fn checked_sum(self, other: Self) -> Option<Self>;

    /// Mean of the values, or `None` when there are none.
    fn mean<I: Iterator<Item = Self>>(values: I) -> Option<Self::Mean>;
}

macro_rules! integer_number {
    ($($ty:ty),*) => {
        $(
            impl Number for $ty {
                type Mean = f64;

                const ZERO: Self = 0;

                #[inline]
                fn checked_sum(self, other: Self) -> Option<Self> {
                    self.checked_add(other)
                }

                fn mean<I: Iterator<Item = Self>>(values: I) -> Option<f64> {
                    let (sum, count) = values.fold((0i128, 0usize), |(sum, count), v| {
                        (sum + v as i128, count + 1)
                    });
                    (count > 0).then(|| sum as f64 / count as f64)
                }
            }
        )*
    };
}

integer_number!(i8, i16, i32, i64, isize, u8, u16, u32, u64, usize);

macro_rules! float_number {
    ($($ty:ty),*) => {
        $(
            impl Number for $ty {
                type Mean = $ty;

                const ZERO: Self = 0.0;

                #[inline]
                fn checked_sum(self, other: Self) -> Option<Self> {
                    Some(self + other)
                }

                fn mean<I: Iterator<Item = Self>>(values: I) -> Option<$ty> {
                    let (sum, count) = values.fold((0f64, 0usize), |(sum, count), v| {
                        (sum + f64::from(v), count + 1)
                    });
                    (count > 0).then(|| (sum / count as f64) as $ty)
                }
            }
        )*
    };
}

float_number!(f32, f64);

/// An element that may be missing.
pub trait Nullable {
    type Value;

    fn value(&self) -> Option<&Self::Value>;
}

impl<T> Nullable for Option<T> {
    type Value = T;

    #[inline]
    fn value(&self) -> Option<&T> {
        self.as_ref()
    }
}

/// Checked sum of a stream of numbers.
pub(crate) fn checked_total<N: Number>(mut values: impl Iterator<Item = N>) -> Option<N> {
    values.try_fold(N::ZERO, N::checked_sum)
}
