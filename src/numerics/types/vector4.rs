// src/numerics/types/vector4.rs
// Four-component vectors: homogeneous coordinates and RGBA colours.
// There is no 4D cross product.

use super::vector::{impl_named_slots, Vector};

/// 4D vector. `x`/`r`, `y`/`g`, `z`/`b` and `w`/`a` alias slots 0 to 3.
pub type Vector4<T> = Vector<T, 4>;

pub type Vector4b = Vector4<bool>;
pub type Vector4i = Vector4<i32>;
pub type Vector4f = Vector4<f32>;
pub type Vector4d = Vector4<f64>;

impl<T> Vector<T, 4> {
    #[inline]
    pub const fn xyzw(x: T, y: T, z: T, w: T) -> Self {
        Self::new([x, y, z, w])
    }
}

impl<T: Copy> Vector<T, 4> {
    /// Overwrite all four components.
    pub fn set(&mut self, x: T, y: T, z: T, w: T) -> &mut Self {
        *self.as_mut_array() = [x, y, z, w];
        self
    }

    /// Drop `w`.
    pub fn truncate(&self) -> Vector<T, 3> {
        Vector::xyz(self.x(), self.y(), self.z())
    }
}

impl_named_slots!(4 {
    x, x_mut, set_x => 0;
    y, y_mut, set_y => 1;
    z, z_mut, set_z => 2;
    w, w_mut, set_w => 3;
    r, r_mut, set_r => 0;
    g, g_mut, set_g => 1;
    b, b_mut, set_b => 2;
    a, a_mut, set_a => 3;
});

impl<T> From<(T, T, T, T)> for Vector<T, 4> {
    fn from((x, y, z, w): (T, T, T, T)) -> Self {
        Self::xyzw(x, y, z, w)
    }
}

impl<T> From<Vector<T, 4>> for (T, T, T, T) {
    fn from(v: Vector<T, 4>) -> Self {
        let [x, y, z, w] = v.into_array();
        (x, y, z, w)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_named_fields_alias_indices() {
        let mut v = Vector4i::zero();
        v.set_x(2).set_y(3).set_z(4).set_w(5);
        assert_eq!(v.as_slice(), &[2, 3, 4, 5]);
        assert_eq!((v.r(), v.g(), v.b(), v.a()), (2, 3, 4, 5));

        v[0] = 6;
        v[7] = 9;
        assert_eq!(v.x(), 6);
        assert_eq!(v.w(), 9);
        assert_eq!(v.a(), 9);
    }

    #[test]
    fn test_rgba_writes_show_through_xyzw() {
        let mut c = Vector4f::xyzw(0.0, 0.0, 0.0, 1.0);
        c.set_r(1.0);
        *c.b_mut() = 0.5;
        assert_eq!(c, Vector4f::xyzw(1.0, 0.0, 0.5, 1.0));
        assert_eq!(c.z(), 0.5);
    }

    #[test]
    fn test_set_truncate_and_tuples() {
        let mut v = Vector4d::default();
        v.set(1.0, 2.0, 3.0, 4.0);
        assert_eq!(v.truncate(), Vector::xyz(1.0, 2.0, 3.0));
        assert_eq!(v.truncate().extend(4.0), v);

        let t: (f64, f64, f64, f64) = v.into();
        assert_eq!(Vector4d::from(t), v);
    }
}
