//! Prelude for fulgor_numerics
//!
//! Re-exports the vector types, their element traits and the error type.

pub use crate::numerics::{CastFrom, Element, Scalar, Vector, VectorError};
pub use crate::numerics::{Vector2, Vector3, Vector4};

// Common instantiations
pub use crate::numerics::{Vector2b, Vector2d, Vector2f, Vector2i};
pub use crate::numerics::{Vector3b, Vector3d, Vector3f, Vector3i};
pub use crate::numerics::{Vector4b, Vector4d, Vector4f, Vector4i};
