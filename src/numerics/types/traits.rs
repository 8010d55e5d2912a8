// src/numerics/types/traits.rs
// Element traits shared by every vector arity.

use core::fmt::Debug;

use num_traits::Num;

/// Anything that can sit in a vector slot.
///
/// Covers `bool`, every primitive integer and both float widths. The only
/// operation required beyond storage is `from_bool`, which is how the
/// element-wise comparisons encode their 0/1 results in the vector's own
/// element type.
pub trait Element: Copy + PartialEq + PartialOrd + Debug + Default + 'static {
    fn from_bool(flag: bool) -> Self;
}

/// Element types that support arithmetic.
///
/// `num_traits::Num` brings the four operators and the zero/one identities;
/// `sqrt` and `abs` are added here so integers and floats can share the
/// geometric code paths.
pub trait Scalar: Element + Num {
    /// Square root in the element's own domain. Integers truncate toward zero.
    fn sqrt(self) -> Self;

    fn abs(self) -> Self;
}

/// Element conversion with the semantics of Rust's `as` operator.
///
/// `bool` converts to 0/1 and any number converts to `bool` as `value != 0`.
/// Floats saturate when converted to integers and NaN becomes zero.
pub trait CastFrom<U>: Sized {
    fn cast_from(value: U) -> Self;
}

impl Element for bool {
    #[inline]
    fn from_bool(flag: bool) -> Self {
        flag
    }
}

macro_rules! impl_element {
    ($($t:ty),* $(,)?) => {
        $(
            impl Element for $t {
                #[inline]
                fn from_bool(flag: bool) -> Self {
                    flag as u8 as $t
                }
            }
        )*
    };
}

impl_element!(i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize, f32, f64);

macro_rules! impl_scalar_signed {
    ($($t:ty),* $(,)?) => {
        $(
            impl Scalar for $t {
                #[inline]
                fn sqrt(self) -> Self {
                    (self as f64).sqrt() as $t
                }

                #[inline]
                fn abs(self) -> Self {
                    self.wrapping_abs()
                }
            }
        )*
    };
}

macro_rules! impl_scalar_unsigned {
    ($($t:ty),* $(,)?) => {
        $(
            impl Scalar for $t {
                #[inline]
                fn sqrt(self) -> Self {
                    (self as f64).sqrt() as $t
                }

                #[inline]
                fn abs(self) -> Self {
                    self
                }
            }
        )*
    };
}

macro_rules! impl_scalar_float {
    ($($t:ty),* $(,)?) => {
        $(
            impl Scalar for $t {
                #[inline]
                fn sqrt(self) -> Self {
                    <$t>::sqrt(self)
                }

                #[inline]
                fn abs(self) -> Self {
                    <$t>::abs(self)
                }
            }
        )*
    };
}

impl_scalar_signed!(i8, i16, i32, i64, i128, isize);
impl_scalar_unsigned!(u8, u16, u32, u64, u128, usize);
impl_scalar_float!(f32, f64);

// Every numeric source type expands into one impl per numeric target.
macro_rules! impl_cast_numeric {
    (@into $src:ty => $($dst:ty),*) => {
        $(
            impl CastFrom<$src> for $dst {
                #[inline]
                fn cast_from(value: $src) -> Self {
                    value as $dst
                }
            }
        )*
    };
    ($($src:ty),* $(,)?) => {
        $(
            impl_cast_numeric!(@into $src => i8, i16, i32, i64, i128, isize,
                u8, u16, u32, u64, u128, usize, f32, f64);

            impl CastFrom<$src> for bool {
                #[inline]
                fn cast_from(value: $src) -> Self {
                    value != (0 as $src)
                }
            }

            impl CastFrom<bool> for $src {
                #[inline]
                fn cast_from(value: bool) -> Self {
                    value as u8 as $src
                }
            }
        )*
    };
}

impl_cast_numeric!(i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize, f32, f64);

impl CastFrom<bool> for bool {
    #[inline]
    fn cast_from(value: bool) -> Self {
        value
    }
}
