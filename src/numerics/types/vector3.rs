// src/numerics/types/vector3.rs
// Three-component vectors: positions/directions and RGB colours.

use super::traits::Scalar;
use super::vector::{impl_named_slots, Vector};

/// 3D vector. `x`/`r`, `y`/`g` and `z`/`b` alias slots 0, 1 and 2.
pub type Vector3<T> = Vector<T, 3>;

pub type Vector3b = Vector3<bool>;
pub type Vector3i = Vector3<i32>;
pub type Vector3f = Vector3<f32>;
pub type Vector3d = Vector3<f64>;

impl<T> Vector<T, 3> {
    #[inline]
    pub const fn xyz(x: T, y: T, z: T) -> Self {
        Self::new([x, y, z])
    }
}

impl<T: Copy> Vector<T, 3> {
    /// Overwrite all three components.
    pub fn set(&mut self, x: T, y: T, z: T) -> &mut Self {
        *self.as_mut_array() = [x, y, z];
        self
    }

    /// Append a fourth component.
    pub fn extend(&self, w: T) -> Vector<T, 4> {
        Vector::xyzw(self.x(), self.y(), self.z(), w)
    }

    /// Drop `z`.
    pub fn truncate(&self) -> Vector<T, 2> {
        Vector::xy(self.x(), self.y())
    }
}

impl_named_slots!(3 {
    x, x_mut, set_x => 0;
    y, y_mut, set_y => 1;
    z, z_mut, set_z => 2;
    r, r_mut, set_r => 0;
    g, g_mut, set_g => 1;
    b, b_mut, set_b => 2;
});

impl<T: Scalar> Vector<T, 3> {
    /// Right-handed cross product; orthogonal to both operands.
    pub fn cross(&self, rhs: &Self) -> Self {
        Self::xyz(
            self.y() * rhs.z() - self.z() * rhs.y(),
            self.z() * rhs.x() - self.x() * rhs.z(),
            self.x() * rhs.y() - self.y() * rhs.x(),
        )
    }
}

impl<T> From<(T, T, T)> for Vector<T, 3> {
    fn from((x, y, z): (T, T, T)) -> Self {
        Self::xyz(x, y, z)
    }
}

impl<T> From<Vector<T, 3>> for (T, T, T) {
    fn from(v: Vector<T, 3>) -> Self {
        let [x, y, z] = v.into_array();
        (x, y, z)
    }
}
