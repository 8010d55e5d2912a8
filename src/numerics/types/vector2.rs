// src/numerics/types/vector2.rs
// Two-component vectors: x/y positions and u/v texture coordinates.

use core::ops::Neg;

use super::traits::Scalar;
use super::vector::{impl_named_slots, Vector};

/// 2D vector. `x`/`u` alias slot 0, `y`/`v` alias slot 1.
pub type Vector2<T> = Vector<T, 2>;

pub type Vector2b = Vector2<bool>;
pub type Vector2i = Vector2<i32>;
pub type Vector2f = Vector2<f32>;
pub type Vector2d = Vector2<f64>;

impl<T> Vector<T, 2> {
    #[inline]
    pub const fn xy(x: T, y: T) -> Self {
        Self::new([x, y])
    }
}

impl<T: Copy> Vector<T, 2> {
    /// Overwrite both components.
    pub fn set(&mut self, x: T, y: T) -> &mut Self {
        *self.as_mut_array() = [x, y];
        self
    }
}

impl_named_slots!(2 {
    x, x_mut, set_x => 0;
    y, y_mut, set_y => 1;
    u, u_mut, set_u => 0;
    v, v_mut, set_v => 1;
});

impl<T: Scalar> Vector<T, 2> {
    /// The z component of the 3D cross product of `(self, 0)` and `(rhs, 0)`.
    ///
    /// Positive when `rhs` is counter-clockwise from `self`; its magnitude is
    /// the area of the parallelogram the two vectors span.
    pub fn cross(&self, rhs: &Self) -> T {
        self.x() * rhs.y() - self.y() * rhs.x()
    }
}

impl<T: Scalar + Neg<Output = T>> Vector<T, 2> {
    /// `self` rotated a quarter turn counter-clockwise.
    pub fn perp(&self) -> Self {
        Self::xy(-self.y(), self.x())
    }
}

impl<T> From<(T, T)> for Vector<T, 2> {
    fn from((x, y): (T, T)) -> Self {
        Self::xy(x, y)
    }
}

impl<T> From<Vector<T, 2>> for (T, T) {
    fn from(v: Vector<T, 2>) -> Self {
        let [x, y] = v.into_array();
        (x, y)
    }
}
