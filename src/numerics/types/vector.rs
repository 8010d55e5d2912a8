// src/numerics/types/vector.rs
// Generic fixed-size vector. Arity-specific behaviour lives in vector2/3/4.rs.

use core::fmt;
use core::ops::{
    Add, AddAssign, Div, DivAssign, Index, IndexMut, Mul, MulAssign, Neg, Sub, SubAssign,
};
use core::str::FromStr;

use num_traits::Zero;

use super::error::VectorError;
use super::traits::{CastFrom, Element, Scalar};

/// A fixed-length tuple of `N` elements of type `T`.
///
/// The backing storage is a plain `[T; N]`, so the raw views returned by
/// [`Vector::as_slice`] and [`Vector::as_ptr`] are laid out in index order
/// (`x, y, z, w` for the named arities). Every named accessor on the arity
/// types reads and writes the same slot as the matching index.
///
/// Indexing with `v[i]` wraps modulo `N` instead of panicking; use
/// [`Vector::get`] for a bounds-checked lookup.
///
/// Division (by a scalar, element-wise, or inside [`Vector::project`]) is not
/// guarded: a zero divisor gives inf/NaN for floats and panics for integers.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
#[repr(transparent)]
pub struct Vector<T, const N: usize>([T; N]);

impl<T, const N: usize> Vector<T, N> {
    /// Construct a vector from its elements in index order.
    #[inline]
    pub const fn new(values: [T; N]) -> Self {
        Self(values)
    }

    /// Construct a vector by evaluating `f` for every index.
    #[inline]
    pub fn from_fn<F: FnMut(usize) -> T>(f: F) -> Self {
        Self(core::array::from_fn(f))
    }

    /// Number of elements.
    #[inline]
    pub const fn dim(&self) -> usize {
        N
    }

    /// Bounds-checked element access.
    #[inline]
    pub fn get(&self, index: usize) -> Option<&T> {
        self.0.get(index)
    }

    #[inline]
    pub fn get_mut(&mut self, index: usize) -> Option<&mut T> {
        self.0.get_mut(index)
    }

    #[inline]
    pub fn as_array(&self) -> &[T; N] {
        &self.0
    }

    #[inline]
    pub fn as_mut_array(&mut self) -> &mut [T; N] {
        &mut self.0
    }

    #[inline]
    pub fn as_slice(&self) -> &[T] {
        &self.0
    }

    #[inline]
    pub fn as_mut_slice(&mut self) -> &mut [T] {
        &mut self.0
    }

    /// Pointer to element 0 for APIs that take a flat buffer of `N` elements.
    #[inline]
    pub fn as_ptr(&self) -> *const T {
        self.0.as_ptr()
    }

    #[inline]
    pub fn as_mut_ptr(&mut self) -> *mut T {
        self.0.as_mut_ptr()
    }

    #[inline]
    pub fn into_array(self) -> [T; N] {
        self.0
    }

    #[inline]
    pub fn iter(&self) -> core::slice::Iter<'_, T> {
        self.0.iter()
    }

    #[inline]
    pub fn iter_mut(&mut self) -> core::slice::IterMut<'_, T> {
        self.0.iter_mut()
    }

    /// Apply `f` to every element, producing a vector of the same arity.
    #[inline]
    pub fn map<U, F: FnMut(T) -> U>(self, f: F) -> Vector<U, N> {
        Vector(self.0.map(f))
    }

    /// Convert every element with `as` semantics (see [`CastFrom`]).
    #[inline]
    pub fn cast<U: CastFrom<T>>(self) -> Vector<U, N> {
        self.map(U::cast_from)
    }
}

impl<T: Element, const N: usize> Vector<T, N> {
    /// Vector with every element set to `value`.
    #[inline]
    pub fn splat(value: T) -> Self {
        Self([value; N])
    }

    /// Combine two vectors element by element.
    #[inline]
    pub fn zip_map<U, F: FnMut(T, T) -> U>(self, rhs: Self, mut f: F) -> Vector<U, N> {
        Vector::from_fn(|i| f(self.0[i], rhs.0[i]))
    }

    /// Element-wise `self < rhs`, encoded as 0/1 in `T`.
    pub fn cmp_lt(&self, rhs: &Self) -> Self {
        self.zip_map(*rhs, |a, b| T::from_bool(a < b))
    }

    /// Element-wise `self > rhs`, encoded as 0/1 in `T`.
    pub fn cmp_gt(&self, rhs: &Self) -> Self {
        self.zip_map(*rhs, |a, b| T::from_bool(a > b))
    }

    /// Compare each element against `scalar`, encoded as 0/1 in `T`.
    pub fn cmp_lt_scalar(&self, scalar: T) -> Self {
        self.map(|a| T::from_bool(a < scalar))
    }

    pub fn cmp_gt_scalar(&self, scalar: T) -> Self {
        self.map(|a| T::from_bool(a > scalar))
    }
}

impl<T: Scalar, const N: usize> Vector<T, N> {
    /// The additive identity.
    #[inline]
    pub fn zero() -> Self {
        Self([T::zero(); N])
    }

    /// Overwrite every element with zero.
    pub fn set_zero(&mut self) -> &mut Self {
        self.0 = [T::zero(); N];
        self
    }

    pub fn sum(&self) -> T {
        self.0.iter().fold(T::zero(), |acc, &e| acc + e)
    }

    /// Sum of the pairwise products.
    pub fn dot(&self, rhs: &Self) -> T {
        self.0
            .iter()
            .zip(rhs.0.iter())
            .fold(T::zero(), |acc, (&a, &b)| acc + a * b)
    }

    /// Squared Euclidean length; avoids the square root.
    #[inline]
    pub fn length_squared(&self) -> T {
        self.dot(self)
    }

    /// Euclidean length, computed in `T`. Integer vectors truncate.
    #[inline]
    pub fn mag(&self) -> T {
        self.length_squared().sqrt()
    }

    #[inline]
    pub fn length(&self) -> T {
        self.mag()
    }

    pub fn distance(&self, other: &Self) -> T {
        (*self - *other).mag()
    }

    /// Scale to unit length in place. A zero-length vector is left unchanged.
    pub fn normalize(&mut self) -> &mut Self {
        let magnitude = self.mag();
        if magnitude.is_zero() {
            tracing::trace!(dim = N, "normalize skipped for zero-length vector");
            return self;
        }
        *self /= magnitude;
        self
    }

    pub fn normalized(mut self) -> Self {
        self.normalize();
        self
    }

    /// Component of `self` along `onto`.
    ///
    /// `onto` must be non-zero: the division by `onto.dot(onto)` is not
    /// checked. See [`Vector::try_project`] for the checked form.
    pub fn project(&self, onto: &Self) -> Self {
        *onto * (self.dot(onto) / onto.dot(onto))
    }

    /// Component of `self` orthogonal to `from`. Same precondition as
    /// [`Vector::project`].
    pub fn reject(&self, from: &Self) -> Self {
        *self - self.project(from)
    }

    pub fn try_project(&self, onto: &Self) -> Result<Self, VectorError> {
        if onto.length_squared().is_zero() {
            tracing::trace!(dim = N, "projection onto zero-length vector rejected");
            return Err(VectorError::ZeroLengthTarget);
        }
        Ok(self.project(onto))
    }

    pub fn abs(&self) -> Self {
        self.map(Scalar::abs)
    }
}

impl<T: Element, const N: usize> Default for Vector<T, N> {
    fn default() -> Self {
        Self([T::default(); N])
    }
}

impl<T, const N: usize> Index<usize> for Vector<T, N> {
    type Output = T;

    #[inline]
    fn index(&self, index: usize) -> &T {
        &self.0[index % N]
    }
}

impl<T, const N: usize> IndexMut<usize> for Vector<T, N> {
    #[inline]
    fn index_mut(&mut self, index: usize) -> &mut T {
        &mut self.0[index % N]
    }
}

// Named accessors for one arity. Each name is a getter, a `&mut` into the
// slot and a chaining setter; several names may map to the same slot.
macro_rules! impl_named_slots {
    ($n:literal { $($get:ident, $get_mut:ident, $set:ident => $idx:literal;)* }) => {
        impl<T: Copy> Vector<T, $n> {
            $(
                #[inline]
                pub fn $get(&self) -> T {
                    self.as_array()[$idx]
                }

                #[inline]
                pub fn $get_mut(&mut self) -> &mut T {
                    &mut self.as_mut_array()[$idx]
                }

                #[inline]
                pub fn $set(&mut self, value: T) -> &mut Self {
                    self.as_mut_array()[$idx] = value;
                    self
                }
            )*
        }
    };
}

pub(crate) use impl_named_slots;

// Element-wise operators against another vector, by value and by reference.
macro_rules! impl_elementwise_op {
    ($Op:ident, $op:ident, $OpAssign:ident, $op_assign:ident, $sym:tt) => {
        impl<T: Scalar, const N: usize> $OpAssign for Vector<T, N> {
            #[inline]
            fn $op_assign(&mut self, rhs: Self) {
                for (lhs, rhs) in self.0.iter_mut().zip(rhs.0) {
                    *lhs = *lhs $sym rhs;
                }
            }
        }

        impl<T: Scalar, const N: usize> $OpAssign<&Vector<T, N>> for Vector<T, N> {
            #[inline]
            fn $op_assign(&mut self, rhs: &Self) {
                $OpAssign::$op_assign(self, *rhs);
            }
        }

        impl<T: Scalar, const N: usize> $Op for Vector<T, N> {
            type Output = Self;

            #[inline]
            fn $op(mut self, rhs: Self) -> Self {
                $OpAssign::$op_assign(&mut self, rhs);
                self
            }
        }

        impl<T: Scalar, const N: usize> $Op<&Vector<T, N>> for Vector<T, N> {
            type Output = Self;

            #[inline]
            fn $op(self, rhs: &Self) -> Self {
                $Op::$op(self, *rhs)
            }
        }

        impl<T: Scalar, const N: usize> $Op<&Vector<T, N>> for &Vector<T, N> {
            type Output = Vector<T, N>;

            #[inline]
            fn $op(self, rhs: &Vector<T, N>) -> Vector<T, N> {
                $Op::$op(*self, *rhs)
            }
        }
    };
}

impl_elementwise_op!(Add, add, AddAssign, add_assign, +);
impl_elementwise_op!(Sub, sub, SubAssign, sub_assign, -);
impl_elementwise_op!(Mul, mul, MulAssign, mul_assign, *);
impl_elementwise_op!(Div, div, DivAssign, div_assign, /);

impl<T: Scalar, const N: usize> MulAssign<T> for Vector<T, N> {
    #[inline]
    fn mul_assign(&mut self, scalar: T) {
        for e in self.0.iter_mut() {
            *e = *e * scalar;
        }
    }
}

impl<T: Scalar, const N: usize> DivAssign<T> for Vector<T, N> {
    #[inline]
    fn div_assign(&mut self, scalar: T) {
        for e in self.0.iter_mut() {
            *e = *e / scalar;
        }
    }
}

impl<T: Scalar, const N: usize> Mul<T> for Vector<T, N> {
    type Output = Self;

    #[inline]
    fn mul(mut self, scalar: T) -> Self {
        self *= scalar;
        self
    }
}

impl<T: Scalar, const N: usize> Div<T> for Vector<T, N> {
    type Output = Self;

    #[inline]
    fn div(mut self, scalar: T) -> Self {
        self /= scalar;
        self
    }
}

// `s * v` for the common scalar types.
macro_rules! impl_scalar_lhs_mul {
    ($($t:ty),*) => {
        $(
            impl<const N: usize> Mul<Vector<$t, N>> for $t {
                type Output = Vector<$t, N>;

                #[inline]
                fn mul(self, rhs: Vector<$t, N>) -> Vector<$t, N> {
                    rhs * self
                }
            }
        )*
    };
}

impl_scalar_lhs_mul!(i32, i64, f32, f64);

impl<T: Scalar + Neg<Output = T>, const N: usize> Neg for Vector<T, N> {
    type Output = Self;

    #[inline]
    fn neg(self) -> Self {
        self.map(|e| -e)
    }
}

impl<T, const N: usize> From<[T; N]> for Vector<T, N> {
    fn from(values: [T; N]) -> Self {
        Self(values)
    }
}

impl<T: Copy, const N: usize> From<&[T; N]> for Vector<T, N> {
    fn from(values: &[T; N]) -> Self {
        Self(*values)
    }
}

impl<T, const N: usize> From<Vector<T, N>> for [T; N] {
    fn from(v: Vector<T, N>) -> Self {
        v.0
    }
}

impl<T: Copy, const N: usize> From<&Vector<T, N>> for [T; N] {
    fn from(v: &Vector<T, N>) -> Self {
        v.0
    }
}

impl<T: Copy, const N: usize> TryFrom<&[T]> for Vector<T, N> {
    type Error = VectorError;

    fn try_from(values: &[T]) -> Result<Self, Self::Error> {
        <[T; N]>::try_from(values)
            .map(Self)
            .map_err(|_| VectorError::LengthMismatch { expected: N, actual: values.len() })
    }
}

impl<T, const N: usize> AsRef<[T]> for Vector<T, N> {
    fn as_ref(&self) -> &[T] {
        &self.0
    }
}

impl<T, const N: usize> AsMut<[T]> for Vector<T, N> {
    fn as_mut(&mut self) -> &mut [T] {
        &mut self.0
    }
}

impl<T, const N: usize> IntoIterator for Vector<T, N> {
    type Item = T;
    type IntoIter = core::array::IntoIter<T, N>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

impl<'a, T, const N: usize> IntoIterator for &'a Vector<T, N> {
    type Item = &'a T;
    type IntoIter = core::slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

impl<'a, T, const N: usize> IntoIterator for &'a mut Vector<T, N> {
    type Item = &'a mut T;
    type IntoIter = core::slice::IterMut<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter_mut()
    }
}

impl<T: fmt::Display, const N: usize> fmt::Display for Vector<T, N> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "(")?;
        for (i, e) in self.0.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            fmt::Display::fmt(e, f)?;
        }
        write!(f, ")")
    }
}

/// Parses `(a, b, c)`; the parentheses are optional.
impl<T: Element + FromStr, const N: usize> FromStr for Vector<T, N> {
    type Err = VectorError;

    fn from_str(input: &str) -> Result<Self, Self::Err> {
        let trimmed = input.trim();
        let body = trimmed
            .strip_prefix('(')
            .and_then(|rest| rest.strip_suffix(')'))
            .unwrap_or(trimmed);

        let parts: Vec<&str> = body.split(',').map(str::trim).collect();
        if parts.len() != N {
            tracing::debug!(expected = N, actual = parts.len(), input, "vector parse length mismatch");
            return Err(VectorError::LengthMismatch { expected: N, actual: parts.len() });
        }

        let mut values = [T::default(); N];
        for (index, (slot, part)) in values.iter_mut().zip(&parts).enumerate() {
            *slot = part.parse().map_err(|_| {
                tracing::debug!(index, input, "vector element failed to parse");
                VectorError::Parse { index, input: input.to_string() }
            })?;
        }
        Ok(Self(values))
    }
}
