use std::fmt::Debug;

use num_traits::{Num, NumCast};

/// Element types a combining cursor can read: the primitive integers and floats.
pub trait Numeric: Num + NumCast + Copy + PartialOrd + Debug {}

macro_rules! impl_numeric {
    ($($T:ty),+) => {
        $(
            impl Numeric for $T {}
        )+
    };
}

impl_numeric!(u8, u16, u32, u64, u128, usize);
impl_numeric!(i8, i16, i32, i64, i128, isize);
impl_numeric!(f32, f64);

/// The four combine operations on a promoted type. None of them panic:
/// integers wrap on overflow and the caller rules out zero divisors.
pub trait Arithmetic: Numeric {
    fn sum(self, rhs: Self) -> Self;
    fn difference(self, rhs: Self) -> Self;
    fn product(self, rhs: Self) -> Self;
    fn quotient(self, rhs: Self) -> Self;
}

macro_rules! impl_wrapping_arithmetic {
    ($($T:ty),+) => {
        $(
            impl Arithmetic for $T {
                fn sum(self, rhs: Self) -> Self {
                    self.wrapping_add(rhs)
                }
                fn difference(self, rhs: Self) -> Self {
                    self.wrapping_sub(rhs)
                }
                fn product(self, rhs: Self) -> Self {
                    self.wrapping_mul(rhs)
                }
                // `MIN / -1` wraps back to `MIN`.
                fn quotient(self, rhs: Self) -> Self {
                    self.wrapping_div(rhs)
                }
            }
        )+
    };
}

macro_rules! impl_float_arithmetic {
    ($($T:ty),+) => {
        $(
            impl Arithmetic for $T {
                fn sum(self, rhs: Self) -> Self {
                    self + rhs
                }
                fn difference(self, rhs: Self) -> Self {
                    self - rhs
                }
                fn product(self, rhs: Self) -> Self {
                    self * rhs
                }
                fn quotient(self, rhs: Self) -> Self {
                    self / rhs
                }
            }
        )+
    };
}

impl_wrapping_arithmetic!(i32, u32, i64, u64, i128, u128);
impl_float_arithmetic!(f32, f64);
