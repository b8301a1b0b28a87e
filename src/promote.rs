use crate::numeric::{Arithmetic, Numeric};

/// The first step of promotion, applied to each operand on its own.
///
/// Integers narrower than 32 bits become `i32`, the pointer-sized integers
/// become the fixed-width integer of the same size, and everything else is
/// left alone.
pub trait Widen: Numeric {
    type Output: Numeric;
    fn widen(self) -> <Self as Widen>::Output;
}

/// The common type of two widened operands.
pub trait Common<T: Numeric>: Numeric {
    type Output: Arithmetic;
    fn common(self, other: T) -> (<Self as Common<T>>::Output, <Self as Common<T>>::Output);
}

/// The type two numeric operands are brought to before they are combined.
///
/// Each operand is widened first. Two integers then meet at the narrowest
/// integer type holding both losslessly; `u128` against a signed type has no
/// such type and ends up as `u128`, wrapping negative values. An integer
/// meeting a float becomes that float, and `f32` meeting `f64` becomes `f64`.
pub trait Promote<T: Numeric>: Numeric {
    type Output: Arithmetic;
    fn promote(self, other: T) -> (<Self as Promote<T>>::Output, <Self as Promote<T>>::Output);
}

/// Shorthand for the promoted type of `T1` and `T2`.
pub type Promoted<T1, T2> = <T1 as Promote<T2>>::Output;

impl<T1, T2> Promote<T2> for T1
where
    T1: Widen,
    T2: Widen,
    <T1 as Widen>::Output: Common<<T2 as Widen>::Output>,
{
    type Output = <<T1 as Widen>::Output as Common<<T2 as Widen>::Output>>::Output;

    fn promote(self, other: T2) -> (Promoted<T1, T2>, Promoted<T1, T2>) {
        self.widen().common(other.widen())
    }
}

macro_rules! widen {
    ($($From:ty => $To:ty),+ $(,)?) => {
        $(
            impl Widen for $From {
                type Output = $To;
                fn widen(self) -> $To {
                    self as $To
                }
            }
        )+
    };
}

widen! {
    u8 => i32,
    i8 => i32,
    u16 => i32,
    i16 => i32,
    u32 => u32,
    i32 => i32,
    u64 => u64,
    i64 => i64,
    u128 => u128,
    i128 => i128,
    f32 => f32,
    f64 => f64,
}

#[cfg(target_pointer_width = "64")]
widen! { usize => u64, isize => i64 }

#[cfg(target_pointer_width = "32")]
widen! { usize => u32, isize => i32 }

#[cfg(target_pointer_width = "16")]
widen! { usize => i32, isize => i32 }

// Each row is one unordered pair; both orders get an impl.
macro_rules! common {
    ($($A:ty, $B:ty => $To:ty;)+) => {
        $(
            impl Common<$B> for $A {
                type Output = $To;
                fn common(self, other: $B) -> ($To, $To) {
                    (self as $To, other as $To)
                }
            }
            impl Common<$A> for $B {
                type Output = $To;
                fn common(self, other: $A) -> ($To, $To) {
                    (self as $To, other as $To)
                }
            }
        )+
    };
}

macro_rules! common_with_itself {
    ($($T:ty),+) => {
        $(
            impl Common<$T> for $T {
                type Output = $T;
                fn common(self, other: $T) -> ($T, $T) {
                    (self, other)
                }
            }
        )+
    };
}

common_with_itself!(i32, u32, i64, u64, i128, u128, f32, f64);

common! {
    i32, u32 => i64;
    i32, i64 => i64;
    i32, u64 => i128;
    i32, i128 => i128;
    i32, u128 => u128;
    u32, i64 => i64;
    u32, u64 => u64;
    u32, i128 => i128;
    u32, u128 => u128;
    i64, u64 => i128;
    i64, i128 => i128;
    i64, u128 => u128;
    u64, i128 => i128;
    u64, u128 => u128;
    i128, u128 => u128;

    f32, i32 => f32;
    f32, u32 => f32;
    f32, i64 => f32;
    f32, u64 => f32;
    f32, i128 => f32;
    f32, u128 => f32;
    f64, i32 => f64;
    f64, u32 => f64;
    f64, i64 => f64;
    f64, u64 => f64;
    f64, i128 => f64;
    f64, u128 => f64;
    f32, f64 => f64;
}
