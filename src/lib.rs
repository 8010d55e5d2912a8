//! Fixed-size numeric vectors for geometry, graphics and physics code.
//!
//! [`Vector<T, N>`] is a value type over `[T; N]`; [`Vector2`], [`Vector3`]
//! and [`Vector4`] add named component accessors and, for 2D and 3D, the
//! cross product.
//!
//! ```
//! use fulgor_numerics::prelude::*;
//!
//! let a = Vector3f::xyz(1.0, 2.0, 3.0);
//! let b = Vector3f::xyz(4.0, 5.0, 6.0);
//! assert_eq!(a.dot(&b), 32.0);
//! assert_eq!(a.cross(&b), Vector3f::xyz(-3.0, 6.0, -3.0));
//! ```

pub mod numerics;
pub mod prelude;

pub use numerics::{Vector, VectorError};
pub use numerics::{Vector2, Vector3, Vector4};
